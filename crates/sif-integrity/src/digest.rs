use std::fmt;
use std::io::Read;
use std::str::FromStr;

use crate::{Algorithm, DigestError, Result, codec, compute};

/// A hash value tagged with the algorithm that produced it.
///
/// The value length always equals [`Algorithm::output_len`]. Two digests are
/// equal only when both the algorithm and every byte of the value agree.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Digest {
    algorithm: Algorithm,
    value:     Box<[u8]>,
}

impl Digest {
    /// Validate `value` against the length `algorithm` produces.
    pub fn new(algorithm: Algorithm, value: impl Into<Vec<u8>>) -> Result<Self> {
        let value = value.into();
        if value.len() != algorithm.output_len() {
            return Err(DigestError::Malformed(format!(
                "{algorithm} digest must be {} bytes, got {}",
                algorithm.output_len(),
                value.len()
            )));
        }
        Ok(Self {
            algorithm,
            value: value.into_boxed_slice(),
        })
    }

    /// Hash state output always has the algorithm's length.
    pub(crate) fn from_hash_output(algorithm: Algorithm, value: Vec<u8>) -> Self {
        debug_assert_eq!(value.len(), algorithm.output_len());
        Self {
            algorithm,
            value: value.into_boxed_slice(),
        }
    }

    /// Like [`Digest::new`], but resolves the algorithm from its registry id first.
    pub fn from_id(id: u8, value: impl Into<Vec<u8>>) -> Result<Self> {
        Self::new(Algorithm::from_id(id)?, value)
    }

    pub fn algorithm(&self) -> Algorithm { self.algorithm }

    /// Canonical name of the algorithm, for display.
    pub fn name(&self) -> &'static str { self.algorithm.name() }

    pub fn value(&self) -> &[u8] { &self.value }

    pub fn len(&self) -> usize { self.value.len() }

    pub fn is_empty(&self) -> bool { self.value.is_empty() }

    /// Lowercase hex of the value, without the algorithm prefix.
    pub fn to_hex(&self) -> String { hex::encode(&self.value) }

    /// Recompute a digest over `reader` with this digest's algorithm and
    /// report whether it equals `self`. The stream is read to its end.
    pub fn matches<R: Read>(&self, reader: R) -> Result<bool> {
        let actual = compute(self.algorithm, reader)?;
        let matched = self.value[..] == actual.value[..];
        tracing::debug!(algorithm = %self.algorithm, matched, "digest comparison");
        Ok(matched)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self})")
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::encode(self))
    }
}

impl FromStr for Digest {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self> { codec::decode(s) }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] { &self.value }
}
