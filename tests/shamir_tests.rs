// Shamir secret sharing - threshold recovery over the secp256k1 scalar field

use keyshare::shamir::{
    combine, combine_with_threshold, create, create_from_element, create_with_sequential_labels,
    FieldElement, ShamirError, Share, ShareSet,
};
use pretty_assertions::assert_eq;
use rand::rngs::{OsRng, StdRng};
use rand::SeedableRng;
use std::sync::Arc;

fn labels(values: &[u64]) -> Vec<FieldElement> {
    values.iter().copied().map(FieldElement::from).collect()
}

const SCENARIO_LABELS: [u64; 5] = [12345, 23451, 34512, 45123, 51234];

// === 1. Threshold recovery ===

#[test]
fn test_scenario_3_of_5_incremental() {
    let secret = FieldElement::random(&mut OsRng);
    let xs = labels(&SCENARIO_LABELS);
    let dealing = create_from_element(3, 5, secret, &xs, &mut OsRng).unwrap();

    // add shares one at a time: below threshold the result is unrelated
    let mut presented = ShareSet::new();
    for (i, x) in xs.iter().enumerate() {
        presented.insert(dealing.shares.get_by_x(*x).unwrap().clone()).unwrap();
        let combined = combine(&presented).unwrap();
        if i < 2 {
            assert_ne!(combined, secret, "{} shares must not reveal the secret", i + 1);
        } else {
            assert_eq!(combined, secret, "{} shares must recover the secret", i + 1);
        }
    }
}

#[test]
fn test_scenario_named_subsets() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let secret = FieldElement::random(&mut rng);
    let xs = labels(&SCENARIO_LABELS);
    let dealing = create_from_element(3, 5, secret, &xs, &mut rng).unwrap();

    let two = dealing.shares.select(&labels(&[12345, 23451])).unwrap();
    assert_ne!(combine(&two).unwrap(), secret);

    let three = dealing.shares.select(&labels(&[12345, 23451, 34512])).unwrap();
    assert_eq!(combine(&three).unwrap(), secret);

    assert_eq!(combine(&dealing.shares).unwrap(), secret);
}

#[test]
fn test_all_combinations_threshold_3_of_5() {
    let mut rng = StdRng::seed_from_u64(35);
    let mut secret = [0u8; 32];
    secret[..16].copy_from_slice(b"deterministic!!!");
    let dealing = create_with_sequential_labels(3, 5, &secret, &mut rng).unwrap();
    let shares: Vec<Share> = dealing.shares.shares().cloned().collect();

    for i in 0..5 {
        for j in (i + 1)..5 {
            for k in (j + 1)..5 {
                let subset = [&shares[i], &shares[j], &shares[k]];
                let recovered = combine(subset).unwrap();
                assert_eq!(recovered.to_be_bytes(), secret, "failed for combo {},{},{}", i, j, k);
            }
        }
    }
}

#[test]
fn test_threshold_equals_total_shares() {
    let mut rng = StdRng::seed_from_u64(4);
    let secret = [0x42u8; 32];
    let dealing = create_with_sequential_labels(4, 4, &secret, &mut rng).unwrap();
    assert_eq!(combine(&dealing.shares).unwrap().to_be_bytes(), secret);

    let three = dealing.shares.select(&labels(&[1, 2, 3])).unwrap();
    assert_ne!(combine(&three).unwrap().to_be_bytes(), secret);
}

#[test]
fn test_largest_secret_below_modulus() {
    let mut rng = StdRng::seed_from_u64(5);
    let secret = -FieldElement::ONE;
    let dealing = create_from_element(2, 3, secret, &labels(&[7, 8, 9]), &mut rng).unwrap();
    assert_eq!(combine(&dealing.shares).unwrap(), secret);
}

#[test]
fn test_zero_secret() {
    let mut rng = StdRng::seed_from_u64(6);
    let dealing = create(2, 2, &[0u8; 32], &labels(&[1, 2]), &mut rng).unwrap();
    assert_eq!(combine(&dealing.shares).unwrap(), FieldElement::ZERO);
}

// === 2. Error paths ===

#[test]
fn test_threshold_greater_than_total() {
    let result = create_with_sequential_labels(5, 3, &[1u8; 32], &mut OsRng);
    assert!(matches!(result, Err(ShamirError::InvalidConfiguration(_))));
}

#[test]
fn test_secret_not_below_modulus() {
    let mut modulus = [0u8; 32];
    hex::decode_to_slice(keyshare::shamir::field::MODULUS_HEX, &mut modulus).unwrap();
    let result = create_with_sequential_labels(2, 3, &modulus, &mut OsRng);
    assert_eq!(result.unwrap_err(), ShamirError::InputTooLarge);
}

#[test]
fn test_duplicate_x_in_combine() {
    let mut rng = StdRng::seed_from_u64(7);
    let dealing = create_with_sequential_labels(2, 3, &[9u8; 32], &mut rng).unwrap();
    let first = dealing.shares.get_by_x(FieldElement::from(1u64)).unwrap().clone();
    let forged = Share::new(first.x(), first.y() + FieldElement::ONE).unwrap();
    assert_eq!(combine([&first, &forged]), Err(ShamirError::DegenerateShareSet));
}

#[test]
fn test_empty_combine() {
    assert_eq!(combine(&ShareSet::new()), Err(ShamirError::EmptyShareSet));
}

#[test]
fn test_combine_with_threshold_reports_counts() {
    let mut rng = StdRng::seed_from_u64(8);
    let dealing = create_with_sequential_labels(3, 5, &[3u8; 32], &mut rng).unwrap();
    let two = dealing.shares.select(&labels(&[2, 5])).unwrap();
    assert_eq!(
        combine_with_threshold(&two, 3),
        Err(ShamirError::InsufficientShares { required: 3, provided: 2 })
    );
}

// === 3. Encoded shares ===

#[test]
fn test_recover_from_encoded_strings() {
    let mut rng = StdRng::seed_from_u64(9);
    let secret = [0x7fu8; 32];
    let dealing = create_with_sequential_labels(2, 3, &secret, &mut rng).unwrap();
    let encoded = dealing.shares.encode_all();
    assert!(encoded.iter().all(|s| keyshare::is_valid_share(s)));

    let subset = ShareSet::decode_all(&encoded[1..]).unwrap();
    assert_eq!(combine(&subset).unwrap().to_be_bytes(), secret);
}

// === 4. Concurrency ===

#[test]
fn test_concurrent_combine() {
    let mut rng = StdRng::seed_from_u64(10);
    let secret = FieldElement::random(&mut rng);
    let dealing = create_from_element(3, 5, secret, &labels(&SCENARIO_LABELS), &mut rng).unwrap();
    let shares = Arc::new(dealing.shares);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let shares = Arc::clone(&shares);
            std::thread::spawn(move || combine(shares.as_ref()).unwrap())
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), secret);
    }
}
