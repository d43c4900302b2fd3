use thiserror::Error;

use crate::core::parser::ParseError;

#[derive(Error, Debug)]
pub enum Uuid5Error {
    #[error("Usage error: {message}")]
    UsageError { message: String },

    #[error("Invalid namespace UUID: '{value}': {source}")]
    ValidationError {
        value: String,
        #[source]
        source: ParseError,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl Uuid5Error {
    pub fn usage() -> Self {
        Self::UsageError {
            message: crate::config::USAGE.to_string(),
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UsageError { .. } => 1,
            Self::ValidationError { .. } => 2,
            Self::IoError(_) => 3,
        }
    }

    /// The line written to stderr.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::UsageError { message } => message.clone(),
            Self::ValidationError { .. } => self.to_string(),
            Self::IoError(e) => format!("Failed to write result: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, Uuid5Error>;
