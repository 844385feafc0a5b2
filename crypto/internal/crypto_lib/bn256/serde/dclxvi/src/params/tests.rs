use super::*;
use ic_crypto_internal_test_vectors::bn256 as test_vectors;

fn decimal_vector(value: &str) -> BigUint {
    BigUint::parse_bytes(value.as_bytes(), 10).expect("Invalid decimal test vector")
}

#[test]
fn p_should_match_the_reference_constant() {
    assert_eq!(params().p, decimal_vector(test_vectors::P_DECIMAL));
    assert_eq!(hex::encode(params().p.to_bytes_be()), test_vectors::P_HEX);
}

#[test]
fn order_should_match_the_reference_constant() {
    assert_eq!(params().order, decimal_vector(test_vectors::ORDER_DECIMAL));
}

#[test]
fn p_and_order_should_be_256_bits() {
    assert_eq!(params().p.bits(), 256);
    assert_eq!(params().order.bits(), 256);
    assert!(params().order < params().p);
}

#[test]
fn p_should_be_the_bn_polynomial_in_v_cubed() {
    let u = BigUint::from(V).pow(3u32);
    let expected = BigUint::from(36u32) * u.pow(4u32)
        + BigUint::from(36u32) * u.pow(3u32)
        + BigUint::from(24u32) * u.pow(2u32)
        + BigUint::from(6u32) * &u
        + BigUint::one();
    assert_eq!(params().p, expected);
}

#[test]
fn digit_weights_should_alternate_between_six_and_thirty_six() {
    let weights = &params().digit_weights;
    let v = BigInt::from(V);
    assert_eq!(weights[0], BigInt::one());
    for i in 1..=6 {
        assert_eq!(weights[i], BigInt::from(6) * v.pow(i as u32), "weight {}", i);
    }
    for i in 7..NUM_DIGITS {
        assert_eq!(weights[i], BigInt::from(36) * v.pow(i as u32), "weight {}", i);
    }
}

#[test]
fn explicit_params_should_equal_the_shared_instance() {
    assert_eq!(&CurveParams::new(), params());
    assert_eq!(params().six_v, BigUint::from(6 * V));
}

#[test]
fn generators_should_be_affine() {
    let g1 = g1_generator();
    assert_eq!(g1.z, Fpe::one());
    assert_eq!(g1.x, Fpe::one());
    let g2 = g2_generator();
    assert_eq!(g2.z, Fp2e::one());
}
