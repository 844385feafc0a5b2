//! Marshaling of G1: `x ‖ y`, 64 bytes.
use crate::engine::MakeAffine;
use crate::error::{check_length, SerdeError};
use crate::fp::{fpe_from_be_slice, fpe_to_bytes};
use crate::types::{Fpe, G1};
use crate::{FP_SIZE, G1_SIZE};

#[cfg(test)]
mod tests;

/// Marshals the affine coordinates of `g1`.
///
/// The point is normalized on a copy; use `MakeAffine::make_affine` first to
/// normalize in place and avoid repeating the work.
pub fn g1_to_bytes(g1: &G1) -> [u8; G1_SIZE] {
    let affine = g1.to_affine();
    let mut bytes = [0u8; G1_SIZE];
    bytes[..FP_SIZE].copy_from_slice(&fpe_to_bytes(&affine.x));
    bytes[FP_SIZE..].copy_from_slice(&fpe_to_bytes(&affine.y));
    bytes
}

/// Reads a point marshaled by `g1_to_bytes`.
///
/// Only the length is checked. The coordinates are not checked to be on the
/// curve nor reduced modulo p.
pub fn g1_from_bytes(bytes: &[u8]) -> Result<G1, SerdeError> {
    check_length(bytes, G1_SIZE)?;
    let (x, y) = bytes.split_at(FP_SIZE);
    Ok(G1 {
        x: fpe_from_be_slice(x),
        y: fpe_from_be_slice(y),
        z: Fpe::one(),
        t: Fpe::zero(),
    })
}
