// src/error.rs
use thiserror::Error;

/// Errors raised around the conversion path.
///
/// Conversion itself never fails; these cover configuration and the
/// handshake with the host that mounts the markup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Invalid configuration: {field} = {value:?}")]
    ConfigurationError { field: String, value: String },

    #[error("Host rejected block processor for {language:?}: {message}")]
    RegistrationFailed { language: String, message: String },
}

pub type ConvertResult<T> = Result<T, ConvertError>;
