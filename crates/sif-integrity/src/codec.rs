//! Text encoding of digests as `<algorithm>:<hex>`.

use crate::{Algorithm, Digest, DigestError, Result};

/// Encode `digest` as `<algorithm>:<lowercase hex>`.
pub fn encode(digest: &Digest) -> String {
    format!("{}:{}", digest.name(), digest.to_hex())
}

/// Parse a digest from `<algorithm>:<hex>`.
///
/// The algorithm name must match a registry name exactly. Hex digits may be
/// of either case.
pub fn decode(s: &str) -> Result<Digest> {
    let mut parts = s.split(':');
    let (Some(name), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(DigestError::Malformed(format!(
            "expected <algorithm>:<hex>, got {s:?}"
        )));
    };

    let algorithm = Algorithm::from_name(name)?;
    let value = hex::decode(value)?;
    Digest::new(algorithm, value)
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::{self, Deserializer, Visitor};
    use serde::{Deserialize, Serialize, Serializer};
    use std::fmt;

    use crate::{Algorithm, Digest};

    impl Serialize for Digest {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&super::encode(self))
        }
    }

    impl<'de> Deserialize<'de> for Digest {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct DigestVisitor;

            impl Visitor<'_> for DigestVisitor {
                type Value = Digest;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str("a digest string of the form <algorithm>:<hex>")
                }

                fn visit_str<E: de::Error>(self, v: &str) -> Result<Digest, E> {
                    super::decode(v).map_err(E::custom)
                }
            }

            deserializer.deserialize_str(DigestVisitor)
        }
    }

    impl Serialize for Algorithm {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for Algorithm {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let name = String::deserialize(deserializer)?;
            Algorithm::from_name(&name).map_err(de::Error::custom)
        }
    }
}
