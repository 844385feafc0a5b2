//! Conversion between integers and the mixed radix digits of `Fpe`.
//!
//! See section 4.1 of "New software speed records for cryptographic
//! pairings" (Naehrig, Niederhagen, Schwabe). A value is
//!
//!   d0 + Σ_{i=1..6} dᵢ·6·vⁱ + Σ_{i=7..11} dᵢ·36·vⁱ
//!
//! and the engine multiplies in this form without carrying, so digits it
//! hands back may be negative or larger than their radix. Decoding accepts
//! any digits and reduces modulo p; encoding produces the unique digits of
//! the division algorithm below.
use crate::params::{params, NUM_DIGITS};
use crate::types::{Fpe, MAX_EXACT_DIGIT};
use crate::FP_SIZE;
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::ToPrimitive;


/// Splits `x` into the engine's digits.
///
/// `x` should be reduced modulo p. Any integer below 2²⁵⁶, such as a
/// marshaled coordinate that was never reduced, is accepted too: its top digit
/// is still exactly representable.
///
/// # Panics
/// If the top digit exceeds `MAX_EXACT_DIGIT`. That only happens when the
/// caller passes an integer far outside the field, which is a bug in the
/// caller.
pub fn fpe_from_biguint(x: &BigUint) -> Fpe {
    let params = params();
    let mut digits = [0i64; NUM_DIGITS];
    let mut dividend = x.clone();
    for (i, digit) in digits.iter_mut().enumerate().take(NUM_DIGITS - 1) {
        let radix = match i {
            0 | 6 => &params.six_v,
            _ => &params.v,
        };
        let (quotient, remainder) = dividend.div_rem(radix);
        // The remainder is below 6v, so it is at most one u64 digit.
        *digit = remainder.iter_u64_digits().next().unwrap_or(0) as i64;
        dividend = quotient;
    }
    digits[NUM_DIGITS - 1] = match dividend.to_i64() {
        Some(top) if top <= MAX_EXACT_DIGIT => top,
        _ => panic!(
            "Integer of {} bits is not reduced modulo p: its top digit is not exactly representable",
            x.bits()
        ),
    };
    Fpe(digits)
}

/// Evaluates the digits and reduces modulo p.
pub fn biguint_from_fpe(fpe: &Fpe) -> BigUint {
    let params = params();
    let sum: BigInt = fpe
        .0
        .iter()
        .zip(params.digit_weights.iter())
        .map(|(digit, weight)| weight * *digit)
        .sum();
    let p = BigInt::from_biguint(Sign::Plus, params.p.clone());
    // mod_floor keeps the result non-negative for negative sums.
    let (_, reduced) = sum.mod_floor(&p).into_parts();
    reduced
}

/// The reduced value as 32 big-endian bytes, zero padded on the left.
pub fn fpe_to_bytes(fpe: &Fpe) -> [u8; FP_SIZE] {
    let be = biguint_from_fpe(fpe).to_bytes_be();
    let mut bytes = [0u8; FP_SIZE];
    // The value is below p < 2²⁵⁶, so it always fits.
    bytes[FP_SIZE - be.len()..].copy_from_slice(&be);
    bytes
}

/// Reads 32 big-endian bytes. The integer is not reduced modulo p.
pub fn fpe_from_bytes(bytes: &[u8; FP_SIZE]) -> Fpe {
    fpe_from_be_slice(bytes)
}

/// Callers pass exactly one field element's worth of bytes.
pub(crate) fn fpe_from_be_slice(bytes: &[u8]) -> Fpe {
    fpe_from_biguint(&BigUint::from_bytes_be(bytes))
}
