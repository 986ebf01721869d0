//! Error types for the launch utilities

use crate::credentials::KeyKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("environment variable {0} is not set")]
    MissingEnvironmentVariable(&'static str),

    #[error("{0} key is empty")]
    EmptyKey(KeyKind),

    #[error("{kind} key is not valid base64: {source}")]
    InvalidKeyEncoding {
        kind: KeyKind,
        #[source]
        source: base64::DecodeError,
    },

    #[error("{kind} key is too long: {length} bytes decoded, at most {max} allowed")]
    KeyTooLong {
        kind: KeyKind,
        length: usize,
        max: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LaunchError {
    /// True when the error came from a key variable that the caller could have
    /// supplied on the command line instead.
    pub fn is_missing_key(&self) -> bool {
        matches!(
            self,
            LaunchError::MissingEnvironmentVariable(name)
                if *name == KeyKind::Private.environment_variable()
                    || *name == KeyKind::Public.environment_variable()
        )
    }
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, LaunchError>;
