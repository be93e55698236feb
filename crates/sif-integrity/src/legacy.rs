//! Digests embedded in the plaintext of legacy SIF signatures.
//!
//! Older signers wrapped the hex digest of the signed object in a small
//! envelope:
//!
//! ```text
//! SIFHASH:
//! <hex digest>
//! ```
//!
//! Producers were not consistent about emitting the header line or the
//! trailing newline, so both are optional on input.

use crate::{Digest, HashType, Result};

pub const LEGACY_PREFIX: &[u8] = b"SIFHASH:\n";

/// Parse the plaintext of a legacy signature into a digest.
///
/// `hash_type` is the tag recorded in the signature descriptor.
///
/// # Example
///
/// ```
/// use sif_integrity::{extract_legacy, HashType};
///
/// let blob = b"SIFHASH:\n2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824\n";
/// let digest = extract_legacy(HashType::Sha256, blob).unwrap();
/// assert_eq!(digest.name(), "sha256");
/// ```
pub fn extract_legacy(hash_type: HashType, blob: &[u8]) -> Result<Digest> {
    let body = match blob.strip_prefix(LEGACY_PREFIX) {
        Some(rest) => rest,
        None => {
            tracing::debug!("legacy digest without SIFHASH header");
            blob
        }
    };
    let body = match body.strip_suffix(b"\n") {
        Some(rest) => rest,
        None => {
            tracing::debug!("legacy digest without trailing newline");
            body
        }
    };

    let algorithm = hash_type.algorithm()?;
    let value = hex::decode(body)?;
    Digest::new(algorithm, value)
}
