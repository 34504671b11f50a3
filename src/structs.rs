use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Path to the config file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Host name or IP used when generating a self-signed certificate.
    #[arg(long)]
    pub host: Option<String>,
    /// PEM certificate to serve, copied into managed storage.
    #[arg(long)]
    pub sslcert: Option<String>,
    /// PEM private key matching --sslcert.
    #[arg(long)]
    pub sslkey: Option<String>,
    /// PEM CA bundle, requires --sslcert and --sslkey.
    #[arg(long)]
    pub sslcacert: Option<String>,
}
