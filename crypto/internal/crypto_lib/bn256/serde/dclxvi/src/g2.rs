//! Marshaling of G2: `x.a ‖ x.b ‖ y.a ‖ y.b`, 128 bytes, where `a` is the
//! coefficient of `i`.
use crate::engine::MakeAffine;
use crate::error::{check_length, SerdeError};
use crate::fp2::{fp2e_from_be_slice, fp2e_to_bytes};
use crate::types::{Fp2e, G2};
use crate::{FP_SIZE, G2_SIZE};


const FP2_SIZE: usize = 2 * FP_SIZE;

/// Marshals the affine coordinates of `g2`, normalizing a copy.
pub fn g2_to_bytes(g2: &G2) -> [u8; G2_SIZE] {
    let affine = g2.to_affine();
    let mut bytes = [0u8; G2_SIZE];
    bytes[..FP2_SIZE].copy_from_slice(&fp2e_to_bytes(&affine.x));
    bytes[FP2_SIZE..].copy_from_slice(&fp2e_to_bytes(&affine.y));
    bytes
}

/// Reads a point marshaled by `g2_to_bytes`.
///
/// As for G1, there is no curve membership check.
pub fn g2_from_bytes(bytes: &[u8]) -> Result<G2, SerdeError> {
    check_length(bytes, G2_SIZE)?;
    let (x, y) = bytes.split_at(FP2_SIZE);
    Ok(G2 {
        x: fp2e_from_be_slice(x),
        y: fp2e_from_be_slice(y),
        z: Fp2e::one(),
        t: Fp2e::one(),
    })
}
