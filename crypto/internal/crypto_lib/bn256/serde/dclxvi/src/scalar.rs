//! Conversion between integers and the engine's `scalar_t`.
//!
//! The engine takes scalars as four 64-bit words, least significant first.
//! On targets whose native limbs are 32 bits wide, limbs are packed in pairs:
//! limb 2i goes into the low half of word i and limb 2i+1 into the high half.
use crate::error::SerdeError;
use crate::types::Scalar;
use ic_config::bn256::LimbWidth;
use num_bigint::BigUint;


pub const LIMBS_32_PER_SCALAR: usize = 2 * Scalar::NUM_WORDS;

/// Converts `k` using the target's native limb width.
///
/// Zero converts to the all-zero scalar. Integers wider than 256 bits are
/// rejected rather than truncated.
pub fn scalar_from_biguint(k: &BigUint) -> Result<Scalar, SerdeError> {
    scalar_from_biguint_with_limb_width(k, LimbWidth::Native)
}

pub fn scalar_from_biguint_with_limb_width(
    k: &BigUint,
    limb_width: LimbWidth,
) -> Result<Scalar, SerdeError> {
    match limb_width {
        LimbWidth::Bits32 => scalar_from_u32_limbs(&k.to_u32_digits()),
        LimbWidth::Bits64 => scalar_from_u64_limbs(&k.to_u64_digits()),
        LimbWidth::Native => scalar_from_biguint_with_limb_width(k, limb_width.resolve()),
    }
}

/// Packs little-endian 64-bit limbs, as produced on 64-bit targets.
pub fn scalar_from_u64_limbs(limbs: &[u64]) -> Result<Scalar, SerdeError> {
    if limbs.len() > Scalar::NUM_WORDS {
        return Err(SerdeError::EncodingOverflow {
            words_needed: limbs.len(),
            max_words: Scalar::NUM_WORDS,
        });
    }
    let mut words = [0u64; Scalar::NUM_WORDS];
    words[..limbs.len()].copy_from_slice(limbs);
    Ok(Scalar(words))
}

/// Packs little-endian 32-bit limbs, as produced on 32-bit targets.
pub fn scalar_from_u32_limbs(limbs: &[u32]) -> Result<Scalar, SerdeError> {
    if limbs.len() > LIMBS_32_PER_SCALAR {
        return Err(SerdeError::EncodingOverflow {
            words_needed: limbs.len(),
            max_words: LIMBS_32_PER_SCALAR,
        });
    }
    let mut words = [0u64; Scalar::NUM_WORDS];
    for (word, pair) in words.iter_mut().zip(limbs.chunks(2)) {
        let low = u64::from(pair[0]);
        let high = pair.get(1).map_or(0, |limb| u64::from(*limb));
        *word = low | (high << 32);
    }
    Ok(Scalar(words))
}

/// Reads all four words back into an integer. Always succeeds.
pub fn biguint_from_scalar(scalar: &Scalar) -> BigUint {
    BigUint::new(u32_limbs_from_scalar(scalar).to_vec())
}

/// Splits each word into its low and high 32-bit halves.
pub fn u32_limbs_from_scalar(scalar: &Scalar) -> [u32; LIMBS_32_PER_SCALAR] {
    let mut limbs = [0u32; LIMBS_32_PER_SCALAR];
    for (pair, word) in limbs.chunks_exact_mut(2).zip(scalar.0.iter()) {
        pair[0] = (word & 0xffff_ffff) as u32;
        pair[1] = (word >> 32) as u32;
    }
    limbs
}
