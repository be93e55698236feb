use std::io::{self, Read};

use crate::hasher::{AlgorithmHasher, Hasher};
use crate::{Algorithm, Digest, Result};

/// Streaming reader that hashes data as it passes through.
///
/// Lets a caller copy an object somewhere and obtain its digest in the same
/// pass. The digest covers exactly the bytes handed out by [`Read::read`].
pub struct DigestReader<R> {
    reader: R,
    hasher: AlgorithmHasher,
    count:  u64,
}

impl<R> DigestReader<R> {
    pub fn new(algorithm: Algorithm, reader: R) -> Result<Self> {
        Ok(Self {
            reader,
            hasher: AlgorithmHasher::new(algorithm)?,
            count: 0,
        })
    }

    pub fn algorithm(&self) -> Algorithm { self.hasher.algorithm() }

    /// Number of bytes hashed so far.
    pub fn bytes_read(&self) -> u64 { self.count }

    /// Digest of everything read so far.
    pub fn finish(self) -> Digest {
        let algorithm = self.hasher.algorithm();
        Digest::from_hash_output(algorithm, self.hasher.finalize())
    }

    /// Compare the digest of everything read so far with `expected`.
    pub fn matches(self, expected: &Digest) -> bool {
        let actual = self.finish();
        actual == *expected
    }

    pub fn into_inner(self) -> R { self.reader }
}

impl<R: Read> Read for DigestReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.reader.read(buf)?;
        if n > 0 {
            self.hasher.update(&buf[..n]);
            self.count += n as u64;
        }
        Ok(n)
    }
}
