#![cfg(all(feature = "sha1", feature = "sha2"))]

use proptest::prelude::*;
use proptest::sample::select;

use sif_integrity::{Algorithm, Digest, HashType, compute, decode, encode};

fn algorithm() -> impl Strategy<Value = Algorithm> { select(Algorithm::ALL.to_vec()) }

fn valid_digest() -> impl Strategy<Value = Digest> {
    algorithm().prop_flat_map(|a| {
        prop::collection::vec(any::<u8>(), a.output_len())
            .prop_map(move |v| Digest::new(a, v).unwrap())
    })
}

proptest! {
    #[test]
    fn exact_length_round_trips(digest in valid_digest()) {
        let encoded = encode(&digest);
        let decoded = decode(&encoded).unwrap();
        prop_assert_eq!(&decoded, &digest);
        prop_assert_eq!(encode(&decoded), encoded);
    }

    #[test]
    fn wrong_length_is_malformed(a in algorithm(), len in 0usize..130) {
        prop_assume!(len != a.output_len());
        let err = Digest::new(a, vec![0u8; len]).unwrap_err();
        prop_assert!(err.is_malformed());
    }

    #[test]
    fn unknown_hash_type_unsupported(raw in 4u32..) {
        prop_assert!(HashType::from_raw(raw).algorithm().unwrap_err().is_unsupported());
    }

    #[test]
    fn unknown_name_unsupported(name in "[a-z0-9]{1,10}") {
        prop_assume!(Algorithm::ALL.iter().all(|a| a.name() != name));
        let input = format!("{name}:00");
        prop_assert!(decode(&input).unwrap_err().is_unsupported());
    }

    #[test]
    fn computed_digest_matches_source(a in algorithm(), data in prop::collection::vec(any::<u8>(), 0..4096)) {
        let digest = compute(a, &data[..]).unwrap();
        prop_assert!(digest.matches(&data[..]).unwrap());
    }

    #[test]
    fn single_byte_mutation_detected(
        a in algorithm(),
        data in prop::collection::vec(any::<u8>(), 1..4096),
        index in any::<prop::sample::Index>(),
        flip in 1u8..,
    ) {
        let digest = compute(a, &data[..]).unwrap();
        let mut mutated = data.clone();
        let i = index.index(mutated.len());
        mutated[i] ^= flip;
        prop_assert!(!digest.matches(&mutated[..]).unwrap());
    }
}
