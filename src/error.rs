use packs::RegistryError;
use thiserror::Error;
use tokens::{ValidationError, format_report};

#[derive(Error, Debug)]
pub enum ThemekitError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Theme pack `{theme}` failed validation:\n{}", format_report(.errors))]
    Validation {
        theme: String,
        errors: Vec<ValidationError>,
    },

    #[error("Log file error: {0}")]
    IO(#[from] std::io::Error),

    #[error("A logger was already installed")]
    LoggerAlreadySet(#[from] log::SetLoggerError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, ThemekitError>;
