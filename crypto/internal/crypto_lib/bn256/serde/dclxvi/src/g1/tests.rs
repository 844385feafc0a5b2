use super::*;
use crate::fp::fpe_from_biguint;
use crate::params::{g1_generator, params};
use ic_crypto_internal_test_vectors::bn256 as test_vectors;
use ic_crypto_internal_test_vectors::unhex::hex_to_64_bytes;
use num_bigint::BigUint;
use proptest::prelude::*;

/// Verifies that a value marshals to the test vector, and that the test
/// vector survives unmarshaling and marshaling again.
fn g1_serde_should_be_correct(hex_test_vector: &str, value: &G1, test_name: &str) {
    assert_eq!(
        hex::encode(&g1_to_bytes(value)[..]),
        hex_test_vector,
        "Serialisation does not match for {}",
        test_name
    );
    let bytes = hex_to_64_bytes(hex_test_vector);
    let parsed = g1_from_bytes(&bytes).expect("Failed to parse test vector");
    assert_eq!(
        g1_to_bytes(&parsed),
        bytes,
        "Reserialisation does not match for {}",
        test_name
    );
}

#[test]
fn g1_serde_should_match_identity_test_vector() {
    g1_serde_should_be_correct(test_vectors::g1::INFINITY, &G1::neutral(), "infinity");
}

#[test]
fn identity_should_marshal_to_zero_bytes() {
    assert_eq!(g1_to_bytes(&G1::neutral()), [0u8; G1_SIZE]);
}

#[test]
fn g1_serde_should_match_generator_test_vector() {
    g1_serde_should_be_correct(test_vectors::g1::GENERATOR, &g1_generator(), "generator");
}

#[test]
fn generator_should_marshal_to_one_and_p_minus_two() {
    let bytes = g1_to_bytes(&g1_generator());
    let mut one = [0u8; FP_SIZE];
    one[FP_SIZE - 1] = 1;
    assert_eq!(bytes[..FP_SIZE], one[..]);
    assert_eq!(
        BigUint::from_bytes_be(&bytes[FP_SIZE..]),
        &params().p - 2u32
    );
}

#[test]
fn g1_serde_should_match_negated_generator_test_vector() {
    g1_serde_should_be_correct(test_vectors::g1::NEG_GENERATOR, &-g1_generator(), "-generator");
}

#[test]
fn g1_serde_should_match_multiples_of_the_generator() {
    for (hex_test_vector, test_name) in &[
        (test_vectors::g1::DOUBLE_GENERATOR, "2 * generator"),
        (test_vectors::g1::TRIPLE_GENERATOR, "3 * generator"),
    ] {
        let bytes = hex_to_64_bytes(hex_test_vector);
        let point = g1_from_bytes(&bytes).expect("Failed to parse test vector");
        g1_serde_should_be_correct(hex_test_vector, &point, test_name);
        // Negating what was read must agree with the reference's negation.
        let negated = g1_to_bytes(&-point);
        assert_eq!(negated[..FP_SIZE], bytes[..FP_SIZE]);
        let y = BigUint::from_bytes_be(&bytes[FP_SIZE..]);
        assert_eq!(
            BigUint::from_bytes_be(&negated[FP_SIZE..]),
            &params().p - y,
            "Negation does not match for {}",
            test_name
        );
    }
}

#[test]
fn unmarshaled_point_should_have_affine_markers() {
    let bytes = hex_to_64_bytes(test_vectors::g1::GENERATOR);
    let point = g1_from_bytes(&bytes).expect("Failed to parse test vector");
    assert_eq!(point.z, Fpe::one());
    assert_eq!(point.t, Fpe::zero());
    assert_eq!(point, g1_generator());
}

#[test]
fn unmarshal_should_not_check_curve_membership() {
    let mut bytes = [0u8; G1_SIZE];
    bytes[FP_SIZE - 1] = 5;
    bytes[G1_SIZE - 1] = 5;
    let point = g1_from_bytes(&bytes).expect("Off-curve points are accepted");
    assert_eq!(point.x, fpe_from_biguint(&BigUint::from(5u32)));
    assert_eq!(g1_to_bytes(&point), bytes);
}

#[test]
fn unmarshal_should_not_reduce_coordinates() {
    let bytes = [0xffu8; G1_SIZE];
    let point = g1_from_bytes(&bytes).expect("Unreduced coordinates are accepted");
    let expected = BigUint::from_bytes_be(&[0xffu8; FP_SIZE]) % &params().p;
    let marshaled = g1_to_bytes(&point);
    assert_eq!(BigUint::from_bytes_be(&marshaled[..FP_SIZE]), expected);
}

#[test]
fn unmarshal_should_reject_wrong_lengths() {
    let bytes = hex_to_64_bytes(test_vectors::g1::GENERATOR);
    let mut too_long = bytes.to_vec();
    too_long.push(0);
    for bad in &[
        &[][..],
        &bytes[..G1_SIZE - 1],
        &too_long[..],
        &[0u8; G1_SIZE * 2][..],
    ] {
        assert_eq!(
            g1_from_bytes(bad),
            Err(SerdeError::LengthMismatch {
                expected: G1_SIZE,
                actual: bad.len()
            })
        );
    }
}

proptest! {
    #[test]
    fn marshaling_should_be_idempotent(x: [u8; 32], y: [u8; 32]) {
        let mut bytes = [0u8; G1_SIZE];
        bytes[..FP_SIZE].copy_from_slice(&x);
        bytes[FP_SIZE..].copy_from_slice(&y);
        let once = g1_to_bytes(&g1_from_bytes(&bytes).expect("Failed to unmarshal"));
        let twice = g1_to_bytes(&g1_from_bytes(&once).expect("Failed to unmarshal"));
        prop_assert_eq!(once.to_vec(), twice.to_vec());
    }
}
