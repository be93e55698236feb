//! Hash-type tags as recorded in SIF signature descriptors.

use std::fmt;

use crate::{Algorithm, DigestError, Result};

/// Hash type stored alongside a signature in a SIF descriptor.
///
/// Only the SHA-2 tags map onto the digest registry; the BLAKE2 tags and any
/// unrecognized value are carried so they can be reported, not verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashType {
    Sha256,
    Sha384,
    Sha512,
    Blake2s,
    Blake2b,
    Unknown(u32),
}

impl HashType {
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            1 => HashType::Sha256,
            2 => HashType::Sha384,
            3 => HashType::Sha512,
            4 => HashType::Blake2s,
            5 => HashType::Blake2b,
            other => HashType::Unknown(other),
        }
    }

    pub fn raw(self) -> u32 {
        match self {
            HashType::Sha256 => 1,
            HashType::Sha384 => 2,
            HashType::Sha512 => 3,
            HashType::Blake2s => 4,
            HashType::Blake2b => 5,
            HashType::Unknown(raw) => raw,
        }
    }

    /// Resolve to a registry algorithm.
    pub fn algorithm(self) -> Result<Algorithm> {
        match self {
            HashType::Sha256 => Ok(Algorithm::Sha256),
            HashType::Sha384 => Ok(Algorithm::Sha384),
            HashType::Sha512 => Ok(Algorithm::Sha512),
            other => Err(DigestError::Unsupported(format!("hash type {other} ({})", other.raw()))),
        }
    }
}

impl From<u32> for HashType {
    fn from(raw: u32) -> Self { Self::from_raw(raw) }
}

impl TryFrom<HashType> for Algorithm {
    type Error = DigestError;

    fn try_from(ht: HashType) -> Result<Self> { ht.algorithm() }
}

impl fmt::Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HashType::Sha256 => "SHA256",
            HashType::Sha384 => "SHA384",
            HashType::Sha512 => "SHA512",
            HashType::Blake2s => "BLAKE2S",
            HashType::Blake2b => "BLAKE2B",
            HashType::Unknown(_) => "Unknown hash-type",
        })
    }
}
