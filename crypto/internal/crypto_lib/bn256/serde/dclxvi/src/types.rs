//! Mirrors of the dclxvi storage types.
//!
//! dclxvi keeps every digit in a `double`. Here digits are `i64`, which holds
//! every value a double represents exactly in the range the engine uses, so
//! conversions to and from doubles are lossless as long as each digit stays
//! within `MAX_EXACT_DIGIT`.
use crate::error::SerdeError;
use crate::fp::biguint_from_fpe;
use crate::fp2::{deinterleave, interleave};
use crate::params::NUM_DIGITS;
use num_traits::Zero;
use std::ops::Neg;


/// Largest magnitude a digit may have and still be stored in a double
/// without rounding.
pub const MAX_EXACT_DIGIT: i64 = 1 << 53;

/// An element of F_p as twelve mixed radix digits.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Fpe(pub [i64; NUM_DIGITS]);

/// An element `a·i + b` of F_p², stored interleaved as `(b0, a0, b1, a1, ..,
/// b11, a11)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Fp2e(pub [i64; 2 * NUM_DIGITS]);

/// An element `a·τ² + b·τ + c` of F_p⁶.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Fp6e {
    pub a: Fp2e,
    pub b: Fp2e,
    pub c: Fp2e,
}

/// An element `a·w + b` of F_p¹².
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Fp12e {
    pub a: Fp6e,
    pub b: Fp6e,
}

/// A point on the curve over F_p in Jacobian coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CurvePointFp {
    pub x: Fpe,
    pub y: Fpe,
    pub z: Fpe,
    pub t: Fpe,
}

/// A point on the sextic twist over F_p² in Jacobian coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TwistPointFp2 {
    pub x: Fp2e,
    pub y: Fp2e,
    pub z: Fp2e,
    pub t: Fp2e,
}

/// A scalar as consumed by the engine's scalar multiplication: four 64-bit
/// words, least significant first.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Scalar(pub [u64; Scalar::NUM_WORDS]);
impl Scalar {
    pub const NUM_WORDS: usize = 4;

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|word| *word == 0)
    }
}

pub type G1 = CurvePointFp;
pub type G2 = TwistPointFp2;
pub type GT = Fp12e;

impl Fpe {
    pub fn zero() -> Self {
        Fpe([0; NUM_DIGITS])
    }

    pub fn one() -> Self {
        let mut digits = [0; NUM_DIGITS];
        digits[0] = 1;
        Fpe(digits)
    }

    /// True if the value is zero modulo p, whatever the digits look like.
    pub fn is_zero(&self) -> bool {
        biguint_from_fpe(self).is_zero()
    }

    /// The digits exactly as a floating point peer stores them.
    ///
    /// Fails on the first digit of magnitude above `MAX_EXACT_DIGIT`, which a
    /// double would round.
    pub fn to_doubles(&self) -> Result<[f64; NUM_DIGITS], SerdeError> {
        let mut doubles = [0.0; NUM_DIGITS];
        for (index, (double, digit)) in doubles.iter_mut().zip(self.0.iter()).enumerate() {
            if *digit < -MAX_EXACT_DIGIT || *digit > MAX_EXACT_DIGIT {
                return Err(SerdeError::DigitOutOfRange { index });
            }
            *double = *digit as f64;
        }
        Ok(doubles)
    }

    /// Reads digits from a floating point peer.
    ///
    /// Every digit must be a finite integer of magnitude at most
    /// `MAX_EXACT_DIGIT`.
    pub fn from_doubles(doubles: &[f64; NUM_DIGITS]) -> Result<Self, SerdeError> {
        let mut digits = [0; NUM_DIGITS];
        for (index, (digit, double)) in digits.iter_mut().zip(doubles.iter()).enumerate() {
            if !double.is_finite()
                || double.fract() != 0.0
                || double.abs() > MAX_EXACT_DIGIT as f64
            {
                return Err(SerdeError::DigitOutOfRange { index });
            }
            *digit = *double as i64;
        }
        Ok(Fpe(digits))
    }
}

impl Fp2e {
    pub fn zero() -> Self {
        Fp2e([0; 2 * NUM_DIGITS])
    }

    pub fn one() -> Self {
        interleave(&Fpe::zero(), &Fpe::one())
    }

    pub fn is_zero(&self) -> bool {
        let (a, b) = deinterleave(self);
        a.is_zero() && b.is_zero()
    }
}

impl Fp6e {
    pub fn zero() -> Self {
        Fp6e {
            a: Fp2e::zero(),
            b: Fp2e::zero(),
            c: Fp2e::zero(),
        }
    }

    pub fn one() -> Self {
        Fp6e {
            a: Fp2e::zero(),
            b: Fp2e::zero(),
            c: Fp2e::one(),
        }
    }
}

impl Fp12e {
    pub fn zero() -> Self {
        Fp12e {
            a: Fp6e::zero(),
            b: Fp6e::zero(),
        }
    }

    /// The identity of GT.
    pub fn one() -> Self {
        Fp12e {
            a: Fp6e::zero(),
            b: Fp6e::one(),
        }
    }
}

impl CurvePointFp {
    /// The point at infinity.
    pub fn neutral() -> Self {
        CurvePointFp {
            x: Fpe::one(),
            y: Fpe::one(),
            z: Fpe::zero(),
            t: Fpe::zero(),
        }
    }
}

impl TwistPointFp2 {
    /// The point at infinity.
    pub fn neutral() -> Self {
        TwistPointFp2 {
            x: Fp2e::one(),
            y: Fp2e::one(),
            z: Fp2e::zero(),
            t: Fp2e::zero(),
        }
    }
}

// Negation is digit-wise, exactly as the engine negates. The result is not
// canonical: digits become negative and are only reduced when decoded.
// Digits stay within `MAX_EXACT_DIGIT`; anything wider wraps.
impl Neg for Fpe {
    type Output = Fpe;

    fn neg(self) -> Fpe {
        let mut digits = self.0;
        digits.iter_mut().for_each(|digit| *digit = digit.wrapping_neg());
        Fpe(digits)
    }
}

impl Neg for Fp2e {
    type Output = Fp2e;

    fn neg(self) -> Fp2e {
        let mut slots = self.0;
        slots.iter_mut().for_each(|slot| *slot = slot.wrapping_neg());
        Fp2e(slots)
    }
}

impl Neg for CurvePointFp {
    type Output = CurvePointFp;

    fn neg(self) -> CurvePointFp {
        CurvePointFp {
            y: -self.y,
            ..self
        }
    }
}

impl Neg for TwistPointFp2 {
    type Output = TwistPointFp2;

    fn neg(self) -> TwistPointFp2 {
        TwistPointFp2 {
            y: -self.y,
            ..self
        }
    }
}
