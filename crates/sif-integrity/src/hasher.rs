use crate::{Algorithm, DigestError, Result};

/// Incremental hash state.
pub trait Hasher: Send {
    fn update(&mut self, data: &[u8]);
    fn finalize(self) -> Vec<u8>;
}

/// Adapts any RustCrypto `Digest` implementation to [`Hasher`].
pub struct DigestHasher<D: digest::Digest + Send>(D);

impl<D: digest::Digest + Send> DigestHasher<D> {
    pub fn new() -> Self { Self(D::new()) }
}

impl<D: digest::Digest + Send> Default for DigestHasher<D> {
    fn default() -> Self { Self::new() }
}

impl<D: digest::Digest + Send> Hasher for DigestHasher<D> {
    fn update(&mut self, data: &[u8]) { digest::Digest::update(&mut self.0, data); }
    fn finalize(self) -> Vec<u8> { self.0.finalize().to_vec() }
}

enum State {
    #[cfg(feature = "sha1")]
    Sha1(DigestHasher<sha1::Sha1>),
    #[cfg(feature = "sha2")]
    Sha224(DigestHasher<sha2::Sha224>),
    #[cfg(feature = "sha2")]
    Sha256(DigestHasher<sha2::Sha256>),
    #[cfg(feature = "sha2")]
    Sha384(DigestHasher<sha2::Sha384>),
    #[cfg(feature = "sha2")]
    Sha512(DigestHasher<sha2::Sha512>),
}

/// Hash state selected at runtime from a registry [`Algorithm`].
pub struct AlgorithmHasher {
    algorithm: Algorithm,
    state:     State,
}

impl AlgorithmHasher {
    /// Fails with [`DigestError::Unavailable`] when this build cannot compute `algorithm`.
    pub fn new(algorithm: Algorithm) -> Result<Self> {
        let state = match algorithm {
            #[cfg(feature = "sha1")]
            Algorithm::Sha1 => State::Sha1(DigestHasher::new()),
            #[cfg(feature = "sha2")]
            Algorithm::Sha224 => State::Sha224(DigestHasher::new()),
            #[cfg(feature = "sha2")]
            Algorithm::Sha256 => State::Sha256(DigestHasher::new()),
            #[cfg(feature = "sha2")]
            Algorithm::Sha384 => State::Sha384(DigestHasher::new()),
            #[cfg(feature = "sha2")]
            Algorithm::Sha512 => State::Sha512(DigestHasher::new()),
            #[allow(unreachable_patterns)]
            _ => return Err(DigestError::Unavailable(algorithm)),
        };
        Ok(Self { algorithm, state })
    }

    pub fn algorithm(&self) -> Algorithm { self.algorithm }
}

impl Hasher for AlgorithmHasher {
    fn update(&mut self, data: &[u8]) {
        match self.state {
            #[cfg(feature = "sha1")]
            State::Sha1(ref mut h) => h.update(data),
            #[cfg(feature = "sha2")]
            State::Sha224(ref mut h) => h.update(data),
            #[cfg(feature = "sha2")]
            State::Sha256(ref mut h) => h.update(data),
            #[cfg(feature = "sha2")]
            State::Sha384(ref mut h) => h.update(data),
            #[cfg(feature = "sha2")]
            State::Sha512(ref mut h) => h.update(data),
        }
    }

    fn finalize(self) -> Vec<u8> {
        match self.state {
            #[cfg(feature = "sha1")]
            State::Sha1(h) => h.finalize(),
            #[cfg(feature = "sha2")]
            State::Sha224(h) => h.finalize(),
            #[cfg(feature = "sha2")]
            State::Sha256(h) => h.finalize(),
            #[cfg(feature = "sha2")]
            State::Sha384(h) => h.finalize(),
            #[cfg(feature = "sha2")]
            State::Sha512(h) => h.finalize(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "sha2")]
    #[test]
    fn test_sha256_hasher() {
        let mut hasher = AlgorithmHasher::new(Algorithm::Sha256).unwrap();
        hasher.update(b"hello world");
        let hash = hasher.finalize();

        let expected =
            hex::decode("b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9")
                .unwrap();
        assert_eq!(hash, expected);
    }

    #[cfg(feature = "sha2")]
    #[test]
    fn test_split_updates_match_single_update() {
        let mut whole = AlgorithmHasher::new(Algorithm::Sha512).unwrap();
        whole.update(b"hello world");

        let mut split = AlgorithmHasher::new(Algorithm::Sha512).unwrap();
        split.update(b"hello");
        split.update(b"");
        split.update(b" world");

        assert_eq!(whole.finalize(), split.finalize());
    }

    #[cfg(all(feature = "sha1", feature = "sha2"))]
    #[test]
    fn test_output_len_matches_registry() {
        for algorithm in Algorithm::ALL {
            let hasher = AlgorithmHasher::new(algorithm).unwrap();
            assert_eq!(hasher.algorithm(), algorithm);
            assert_eq!(hasher.finalize().len(), algorithm.output_len());
        }
    }

    #[cfg(not(feature = "sha1"))]
    #[test]
    fn test_sha1_unavailable_without_feature() {
        let err = AlgorithmHasher::new(Algorithm::Sha1).err().unwrap();
        assert!(err.is_unavailable());
    }

    #[cfg(feature = "sha2")]
    #[test]
    fn test_generic_digest_hasher() {
        let mut hasher = DigestHasher::<sha2::Sha256>::default();
        hasher.update(b"abc");
        assert_eq!(
            hex::encode(hasher.finalize()),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
