//! Content digests for SIF container images.
//!
//! A [`Digest`] pairs a registry [`Algorithm`] with a hash value of exactly the
//! length that algorithm produces. Digests are computed from streams, parsed
//! from the `<algorithm>:<hex>` text form or from the plaintext of legacy
//! signatures, and re-checked against current content.
//!
//! # Key Features
//!
//! - **Closed registry**: sha1, sha224, sha256, sha384 and sha512, nothing else
//! - **Incremental**: Computes digests in bounded memory as data streams through
//! - **Typed failures**: unsupported, unavailable, malformed and I/O errors stay distinct
//!
//! # Example
//!
//! ```
//! use sif_integrity::{compute, decode, Algorithm};
//!
//! let digest = compute(Algorithm::Sha256, &b"hello world"[..]).unwrap();
//! let stored = digest.to_string();
//!
//! let parsed = decode(&stored).unwrap();
//! assert!(parsed.matches(&b"hello world"[..]).unwrap());
//! assert!(!parsed.matches(&b"hello w0rld"[..]).unwrap());
//! ```

pub use self::algorithm::Algorithm;
pub use self::codec::{decode, encode};
pub use self::compute::compute;
pub use self::digest::Digest;
pub use self::error::{DigestError, Result};
pub use self::hasher::{AlgorithmHasher, DigestHasher, Hasher};
pub use self::hashtype::HashType;
pub use self::legacy::{LEGACY_PREFIX, extract_legacy};
pub use self::reader::DigestReader;

mod algorithm;
mod codec;
mod compute;
mod digest;
mod error;
mod hasher;
mod hashtype;
mod legacy;
mod reader;
