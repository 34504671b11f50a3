use serde::Deserialize;

/// `?token=` parameter every admin route expects.
#[derive(Debug, Default, Deserialize)]
pub struct QueryToken {
    #[serde(default)]
    pub(crate) token: Option<String>,
}
