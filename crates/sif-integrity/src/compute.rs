use std::io::{self, Read, Write};

use crate::hasher::{AlgorithmHasher, Hasher};
use crate::{Algorithm, Digest, Result};

/// Sink that feeds everything written to it into a hash state.
struct HashWriter<H>(H);

impl<H: Hasher> Write for HashWriter<H> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

/// Hash `reader` to exhaustion with `algorithm`.
///
/// Input is consumed through a fixed-size copy buffer, so memory use does not
/// grow with stream length. Read errors are returned unchanged and the stream
/// is not retried.
///
/// # Example
///
/// ```
/// use sif_integrity::{compute, Algorithm};
///
/// let digest = compute(Algorithm::Sha256, &b"hello"[..]).unwrap();
/// assert_eq!(
///     digest.to_string(),
///     "sha256:2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
/// );
/// ```
pub fn compute<R: Read>(algorithm: Algorithm, mut reader: R) -> Result<Digest> {
    let mut writer = HashWriter(AlgorithmHasher::new(algorithm)?);
    let n = io::copy(&mut reader, &mut writer)?;
    tracing::trace!(%algorithm, bytes = n, "computed digest");
    Digest::new(algorithm, writer.0.finalize())
}
