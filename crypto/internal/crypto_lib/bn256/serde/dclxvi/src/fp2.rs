//! Conversion between pairs of integers and `Fp2e`.
//!
//! The engine keeps `a·i + b` as one array of 24 digits with the digits of
//! `b` in the even slots and those of `a` in the odd slots.
use crate::fp::{biguint_from_fpe, fpe_from_be_slice, fpe_from_biguint, fpe_to_bytes};
use crate::params::NUM_DIGITS;
use crate::types::{Fp2e, Fpe};
use crate::FP_SIZE;
use num_bigint::BigUint;


/// Encodes `a·i + b`. The same contract as `fpe_from_biguint` applies to
/// both halves.
pub fn fp2e_from_biguints(a: &BigUint, b: &BigUint) -> Fp2e {
    interleave(&fpe_from_biguint(a), &fpe_from_biguint(b))
}

/// Returns `(a, b)` for the element `a·i + b`, each reduced modulo p.
pub fn biguints_from_fp2e(fp2e: &Fp2e) -> (BigUint, BigUint) {
    let (a, b) = deinterleave(fp2e);
    (biguint_from_fpe(&a), biguint_from_fpe(&b))
}

/// Interleaves the coefficient `a` of `i` and the constant term `b`.
pub fn interleave(a: &Fpe, b: &Fpe) -> Fp2e {
    let mut slots = [0; 2 * NUM_DIGITS];
    for (k, pair) in slots.chunks_exact_mut(2).enumerate() {
        pair[0] = b.0[k];
        pair[1] = a.0[k];
    }
    Fp2e(slots)
}

/// Splits into the coefficient of `i` and the constant term.
pub fn deinterleave(fp2e: &Fp2e) -> (Fpe, Fpe) {
    let mut a = [0; NUM_DIGITS];
    let mut b = [0; NUM_DIGITS];
    for (k, pair) in fp2e.0.chunks_exact(2).enumerate() {
        b[k] = pair[0];
        a[k] = pair[1];
    }
    (Fpe(a), Fpe(b))
}

/// `a ‖ b`, each as 32 big-endian bytes.
pub fn fp2e_to_bytes(fp2e: &Fp2e) -> [u8; 2 * FP_SIZE] {
    let (a, b) = deinterleave(fp2e);
    let mut bytes = [0u8; 2 * FP_SIZE];
    bytes[..FP_SIZE].copy_from_slice(&fpe_to_bytes(&a));
    bytes[FP_SIZE..].copy_from_slice(&fpe_to_bytes(&b));
    bytes
}

pub fn fp2e_from_bytes(bytes: &[u8; 2 * FP_SIZE]) -> Fp2e {
    fp2e_from_be_slice(bytes)
}

/// Callers pass exactly two field elements' worth of bytes.
pub(crate) fn fp2e_from_be_slice(bytes: &[u8]) -> Fp2e {
    let (a, b) = bytes.split_at(FP_SIZE);
    interleave(&fpe_from_be_slice(a), &fpe_from_be_slice(b))
}
