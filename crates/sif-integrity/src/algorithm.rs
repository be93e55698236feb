//! Registry of the hash algorithms a digest may carry.

use std::fmt;
use std::str::FromStr;

use crate::{DigestError, Result};

/// Hash algorithms recognized in digests, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Algorithm {
    /// SHA-1, 160-bit. Kept for digests written by older producers.
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl Algorithm {
    /// Every registry member, in introduction order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Sha1,
        Algorithm::Sha224,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
    ];

    /// Stable numeric identifier.
    pub const fn id(self) -> u8 {
        match self {
            Algorithm::Sha1 => 1,
            Algorithm::Sha224 => 2,
            Algorithm::Sha256 => 3,
            Algorithm::Sha384 => 4,
            Algorithm::Sha512 => 5,
        }
    }

    /// Canonical lowercase name used in the `<name>:<hex>` encoding.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha224 => "sha224",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha384 => "sha384",
            Algorithm::Sha512 => "sha512",
        }
    }

    /// Digest length in bytes.
    pub const fn output_len(self) -> usize {
        match self {
            Algorithm::Sha1 => 20,
            Algorithm::Sha224 => 28,
            Algorithm::Sha256 => 32,
            Algorithm::Sha384 => 48,
            Algorithm::Sha512 => 64,
        }
    }

    /// Whether this build can compute the algorithm.
    pub const fn is_available(self) -> bool {
        match self {
            Algorithm::Sha1 => cfg!(feature = "sha1"),
            Algorithm::Sha224 | Algorithm::Sha256 | Algorithm::Sha384 | Algorithm::Sha512 => {
                cfg!(feature = "sha2")
            }
        }
    }

    pub fn from_id(id: u8) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.id() == id)
            .ok_or_else(|| DigestError::Unsupported(format!("algorithm id {id}")))
    }

    /// Exact, case-sensitive lookup by canonical name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == name)
            .ok_or_else(|| DigestError::Unsupported(format!("{name:?}")))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

impl FromStr for Algorithm {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self> { Self::from_name(s) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique_and_lowercase() {
        for (i, a) in Algorithm::ALL.iter().enumerate() {
            assert_eq!(a.name(), a.name().to_lowercase());
            for b in &Algorithm::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn test_output_lengths() {
        let bits: Vec<usize> = Algorithm::ALL.iter().map(|a| a.output_len() * 8).collect();
        assert_eq!(bits, vec![160, 224, 256, 384, 512]);
    }

    #[test]
    fn test_ordering_follows_strength() {
        let mut sorted = Algorithm::ALL;
        sorted.sort();
        assert_eq!(sorted, Algorithm::ALL);
        assert!(Algorithm::Sha1 < Algorithm::Sha512);
    }

    #[test]
    fn test_from_name_round_trip() {
        for a in Algorithm::ALL {
            assert_eq!(Algorithm::from_name(a.name()).unwrap(), a);
            assert_eq!(a.to_string().parse::<Algorithm>().unwrap(), a);
        }
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert!(Algorithm::from_name("SHA256").unwrap_err().is_unsupported());
        assert!(Algorithm::from_name("Sha1").unwrap_err().is_unsupported());
    }

    #[test]
    fn test_from_name_rejects_unknown() {
        for name in ["md5", "blake2b", "sha3-256", "", "sha-256"] {
            let err = Algorithm::from_name(name).unwrap_err();
            assert!(err.is_unsupported(), "{name} should be unsupported");
        }
    }

    #[test]
    fn test_from_id() {
        for a in Algorithm::ALL {
            assert_eq!(Algorithm::from_id(a.id()).unwrap(), a);
        }
        assert!(Algorithm::from_id(0).unwrap_err().is_unsupported());
        assert!(Algorithm::from_id(6).unwrap_err().is_unsupported());
    }

    #[cfg(all(feature = "sha1", feature = "sha2"))]
    #[test]
    fn test_all_available_with_default_features() {
        assert!(Algorithm::ALL.iter().all(|a| a.is_available()));
    }
}
