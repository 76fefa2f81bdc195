use thiserror::Error;

use std::io;

use crate::value::Value;

/// Failure raised while restricting a [`Value`] tree to JSON-representable shapes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    /// A mapping key was not a string. Carries the offending key.
    #[error("cannot convert key {key} to string")]
    NonStringKey { key: Value },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[cfg(feature = "json")]
    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

pub type Result<T> = core::result::Result<T, Error>;
