//! Constants of the BN curve used by dclxvi.
//!
//! The curve family is parameterized by `u = v³`:
//!   p     = 36u⁴ + 36u³ + 24u² + 6u + 1
//!   Order = 36u⁴ + 36u³ + 18u² + 6u + 1
use crate::fp::fpe_from_biguint;
use crate::fp2::fp2e_from_biguints;
use crate::types::{Fp2e, Fpe, G1, G2};
use lazy_static::lazy_static;
use num_bigint::{BigInt, BigUint};
use num_traits::One;

#[cfg(test)]
mod tests;

/// The curve parameter `v`, as compiled into dclxvi.
pub const V: u64 = 1_868_033;

/// Number of digits of a base field element.
pub const NUM_DIGITS: usize = 12;

const G2_X_A: &str =
    "21167961636542580255011770066570541300993051739349375019639421053990175267184";
const G2_X_B: &str =
    "64746500191241794695844075326670126197795977525365406531717464316923369116492";
const G2_Y_A: &str =
    "20666913350058776956210519119118544732556678129809273996262322366050359951122";
const G2_Y_B: &str =
    "17778617556404439934652658462602675281523610326338642107814333856843981424549";

lazy_static! {
    static ref PARAMS: CurveParams = CurveParams::new();
}

/// Immutable curve constants, computed once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams {
    pub v: BigUint,
    pub six_v: BigUint,
    /// The base field prime.
    pub p: BigUint,
    /// The prime order of G1, G2 and GT.
    pub order: BigUint,
    /// Weight of each digit: 1, then 6vⁱ for i in 1..=6, then 36vⁱ for i in
    /// 7..=11.
    pub digit_weights: [BigInt; NUM_DIGITS],
}

impl CurveParams {
    pub fn new() -> Self {
        let v = BigUint::from(V);
        let u = v.pow(3u32);
        let u2 = &u * &u;
        let u3 = &u2 * &u;
        let u4 = &u3 * &u;
        let common = BigUint::from(36u32) * (&u4 + &u3) + BigUint::from(6u32) * &u + 1u32;
        let p = &common + BigUint::from(24u32) * &u2;
        let order = &common + BigUint::from(18u32) * &u2;

        let mut digit_weights: [BigInt; NUM_DIGITS] = Default::default();
        let mut v_pow = BigInt::one();
        let v_signed = BigInt::from(V);
        for (i, weight) in digit_weights.iter_mut().enumerate() {
            *weight = match i {
                0 => BigInt::one(),
                1..=6 => &v_pow * 6,
                _ => &v_pow * 36,
            };
            v_pow *= &v_signed;
        }

        CurveParams {
            six_v: &v * 6u32,
            v,
            p,
            order,
            digit_weights,
        }
    }
}

impl Default for CurveParams {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide curve constants.
pub fn params() -> &'static CurveParams {
    &PARAMS
}

/// The G1 base point `(1, p - 2)` with `z = 1`.
pub fn g1_generator() -> G1 {
    let p = &params().p;
    let mut g1 = G1::neutral();
    g1.x = Fpe::one();
    g1.y = fpe_from_biguint(&(p - 2u32));
    g1.z = Fpe::one();
    g1.t = Fpe::zero();
    g1
}

/// The G2 base point on the sextic twist with `z = 1`.
pub fn g2_generator() -> G2 {
    let mut g2 = G2::neutral();
    g2.x = fp2e_from_biguints(&decimal(G2_X_A), &decimal(G2_X_B));
    g2.y = fp2e_from_biguints(&decimal(G2_Y_A), &decimal(G2_Y_B));
    g2.z = Fp2e::one();
    g2.t = Fp2e::one();
    g2
}

fn decimal(value: &str) -> BigUint {
    // Only ever called on the constants above.
    BigUint::parse_bytes(value.as_bytes(), 10).expect("Invalid decimal curve constant")
}
