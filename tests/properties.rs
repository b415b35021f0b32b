//! Randomized property tests for the codec
//!
//! Every run uses fixed seeds, so failures are reproducible.

use hashids::Hashids;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ROUNDS: usize = 300;
const SALT_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 !?";

fn random_salt(rng: &mut StdRng) -> String {
    let len = rng.random_range(0..24);
    (0..len)
        .map(|_| SALT_CHARS[rng.random_range(0..SALT_CHARS.len())] as char)
        .collect()
}

fn random_numbers(rng: &mut StdRng) -> Vec<u64> {
    let count = rng.random_range(1..8);
    (0..count)
        .map(|_| match rng.random_range(0..3) {
            0 => rng.random_range(0..100),
            1 => rng.random_range(0..u64::from(u32::MAX)),
            _ => rng.random(),
        })
        .collect()
}

fn random_codec(rng: &mut StdRng) -> Hashids {
    Hashids::new(&random_salt(rng), rng.random_range(0..40)).unwrap()
}

#[test]
fn test_roundtrip() {
    let mut rng = StdRng::seed_from_u64(0x4841_5348);

    for _ in 0..ROUNDS {
        let hashids = random_codec(&mut rng);
        let numbers = random_numbers(&mut rng);

        let hash = hashids.encode_unsigned(&numbers);
        assert!(!hash.is_empty());
        assert_eq!(
            hashids.decode_unsigned(&hash),
            numbers,
            "salt {:?}, min length {}, hash {}",
            hashids.salt(),
            hashids.min_hash_length(),
            hash
        );
    }
}

#[test]
fn test_minimum_length() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..ROUNDS {
        let hashids = random_codec(&mut rng);
        let hash = hashids.encode_unsigned(&random_numbers(&mut rng));
        assert!(hash.chars().count() >= hashids.min_hash_length());
    }
}

#[test]
fn test_output_uses_only_table_characters() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..ROUNDS {
        let hashids = random_codec(&mut rng);
        let hash = hashids.encode_unsigned(&random_numbers(&mut rng));
        for c in hash.chars() {
            assert!(
                hashids.alphabet().contains(&c)
                    || hashids.separators().contains(&c)
                    || hashids.guards().contains(&c),
                "unexpected character {:?} in {}",
                c,
                hash
            );
        }
    }
}

#[test]
fn test_deterministic_across_instances() {
    let mut rng = StdRng::seed_from_u64(23);

    for _ in 0..ROUNDS / 3 {
        let salt = random_salt(&mut rng);
        let min_length = rng.random_range(0..40);
        let numbers = random_numbers(&mut rng);

        let first = Hashids::new(&salt, min_length).unwrap();
        let second = Hashids::new(&salt, min_length).unwrap();
        assert_eq!(first.encode_unsigned(&numbers), second.encode_unsigned(&numbers));
    }
}

#[test]
fn test_tampered_hashes_are_rejected() {
    const SUBSTITUTIONS_PER_HASH: usize = 8;
    let mut rng = StdRng::seed_from_u64(42);
    let mut attempts = 0usize;
    let mut rejected = 0usize;

    for _ in 0..ROUNDS {
        let hashids = random_codec(&mut rng);
        let numbers = random_numbers(&mut rng);
        let hash: Vec<char> = hashids.encode_unsigned(&numbers).chars().collect();

        let table: Vec<char> = hashids
            .alphabet()
            .iter()
            .chain(hashids.separators())
            .chain(hashids.guards())
            .copied()
            .collect();

        for _ in 0..SUBSTITUTIONS_PER_HASH {
            let position = rng.random_range(0..hash.len());
            let replacement = table[rng.random_range(0..table.len())];
            if replacement == hash[position] {
                continue;
            }

            let mut tampered = hash.clone();
            tampered[position] = replacement;
            let tampered: String = tampered.into_iter().collect();

            attempts += 1;
            let decoded = hashids.decode_unsigned(&tampered);
            if decoded.is_empty() {
                rejected += 1;
            } else {
                assert_ne!(decoded, numbers, "tampered hash {} decoded", tampered);
                assert_eq!(hashids.encode_unsigned(&decoded), tampered);
            }
        }
    }

    // A substitution only survives when it happens to be the canonical hash
    // of some other sequence.
    assert!(attempts > ROUNDS * SUBSTITUTIONS_PER_HASH / 2);
    assert!(
        rejected * 100 >= attempts * 98,
        "only {} of {} tampered hashes rejected",
        rejected,
        attempts
    );
}

#[test]
fn test_foreign_salt_rejects_or_differs() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..ROUNDS {
        let numbers = random_numbers(&mut rng);
        let hash = Hashids::new("first salt", 0)
            .unwrap()
            .encode_unsigned(&numbers);

        let other = Hashids::new("second salt", 0).unwrap();
        let decoded = other.decode_unsigned(&hash);
        if !decoded.is_empty() {
            assert_eq!(other.encode_unsigned(&decoded), hash);
        }
    }
}

#[test]
fn test_hex_roundtrip() {
    let mut rng = StdRng::seed_from_u64(1234);
    let digits = b"0123456789abcdef";

    for _ in 0..ROUNDS {
        let hashids = random_codec(&mut rng);
        let len = rng.random_range(1..60);
        let hex: String = (0..len)
            .map(|_| digits[rng.random_range(0..digits.len())] as char)
            .collect();

        let hash = hashids.encode_hex(&hex);
        assert_eq!(hashids.decode_hex(&hash), hex);
    }
}
