use std::io;

use crate::Algorithm;

#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    #[error("hash algorithm unsupported: {0}")]
    Unsupported(String),

    #[error("hash algorithm unavailable: {0}")]
    Unavailable(Algorithm),

    #[error("digest malformed: {0}")]
    Malformed(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl DigestError {
    pub fn is_unsupported(&self) -> bool { matches!(self, Self::Unsupported(_)) }

    pub fn is_unavailable(&self) -> bool { matches!(self, Self::Unavailable(_)) }

    pub fn is_malformed(&self) -> bool { matches!(self, Self::Malformed(_)) }

    pub fn is_io(&self) -> bool { matches!(self, Self::Io(_)) }
}

impl From<hex::FromHexError> for DigestError {
    fn from(e: hex::FromHexError) -> Self { Self::Malformed(e.to_string()) }
}

pub type Result<T> = std::result::Result<T, DigestError>;
