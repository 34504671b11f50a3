use std::error::Error;
use std::fmt;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;

impl CustomError {
    pub fn new(message: impl Into<String>) -> CustomError {
        CustomError { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ConfigurationError> for CustomError {
    fn from(error: ConfigurationError) -> Self {
        CustomError::new(format!("configuration file error: {}", error))
    }
}

impl fmt::Display for CustomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for CustomError {}
