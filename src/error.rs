//! Error type for the fallible layers (config loading, page layout, I/O).
//!
//! Pointer tracking itself never fails: a hit-test miss is a no-op.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid color: {0:?} (expected #rrggbb or #rrggbbaa)")]
    InvalidColor(String),

    #[error("Layout error: {0}")]
    Layout(String),
}

impl From<taffy::TaffyError> for Error {
    fn from(err: taffy::TaffyError) -> Self {
        Self::Layout(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
