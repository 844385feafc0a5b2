//! Affine normalization of engine points.
//!
//! dclxvi keeps points in Jacobian coordinates, `(X, Y, Z)` standing for the
//! affine point `(X/Z², Y/Z³)`, and provides `makeaffine` to bring a point
//! into the form coordinate-wise serialisation needs. This module provides the
//! same operation portably, evaluating the digits with `num-bigint`.
//!
//! The inverse of zero is taken to be zero, as in the engine, so the point at
//! infinity normalizes to `(0, 0)`.
use crate::fp::{biguint_from_fpe, fpe_from_biguint};
use crate::fp2::{biguints_from_fp2e, fp2e_from_biguints};
use crate::params::params;
use crate::types::{CurvePointFp, Fp2e, Fpe, TwistPointFp2};
use num_bigint::BigUint;
use num_traits::Zero;


/// Conversion of a point to affine coordinates.
pub trait MakeAffine: Copy {
    /// Normalizes in place. Needs exclusive access to the point; idempotent.
    fn make_affine(&mut self);

    /// Returns a normalized copy, leaving `self` untouched.
    fn to_affine(&self) -> Self {
        let mut affine = *self;
        affine.make_affine();
        affine
    }
}

impl MakeAffine for CurvePointFp {
    fn make_affine(&mut self) {
        let z_inv = fp_invert(&biguint_from_fpe(&self.z));
        let z_inv2 = fp_mul(&z_inv, &z_inv);
        let z_inv3 = fp_mul(&z_inv2, &z_inv);
        self.x = fpe_from_biguint(&fp_mul(&biguint_from_fpe(&self.x), &z_inv2));
        self.y = fpe_from_biguint(&fp_mul(&biguint_from_fpe(&self.y), &z_inv3));
        self.z = Fpe::one();
        self.t = Fpe::zero();
    }
}

impl MakeAffine for TwistPointFp2 {
    fn make_affine(&mut self) {
        let z_inv = Fp2::from_fp2e(&self.z).invert();
        let z_inv2 = z_inv.mul(&z_inv);
        let z_inv3 = z_inv2.mul(&z_inv);
        self.x = Fp2::from_fp2e(&self.x).mul(&z_inv2).to_fp2e();
        self.y = Fp2::from_fp2e(&self.y).mul(&z_inv3).to_fp2e();
        self.z = Fp2e::one();
        self.t = Fp2e::one();
    }
}

fn fp_mul(lhs: &BigUint, rhs: &BigUint) -> BigUint {
    (lhs * rhs) % &params().p
}

fn fp_add(lhs: &BigUint, rhs: &BigUint) -> BigUint {
    (lhs + rhs) % &params().p
}

fn fp_sub(lhs: &BigUint, rhs: &BigUint) -> BigUint {
    let p = &params().p;
    (lhs + p - (rhs % p)) % p
}

/// x^(p-2), which maps zero to zero.
fn fp_invert(x: &BigUint) -> BigUint {
    let p = &params().p;
    if x.is_zero() {
        return BigUint::zero();
    }
    x.modpow(&(p - 2u32), p)
}

/// `a·i + b` with `i² = -1`, both parts reduced.
struct Fp2 {
    a: BigUint,
    b: BigUint,
}

impl Fp2 {
    fn from_fp2e(fp2e: &Fp2e) -> Self {
        let (a, b) = biguints_from_fp2e(fp2e);
        Fp2 { a, b }
    }

    fn to_fp2e(&self) -> Fp2e {
        fp2e_from_biguints(&self.a, &self.b)
    }

    fn mul(&self, other: &Fp2) -> Fp2 {
        Fp2 {
            a: fp_add(&fp_mul(&self.a, &other.b), &fp_mul(&self.b, &other.a)),
            b: fp_sub(&fp_mul(&self.b, &other.b), &fp_mul(&self.a, &other.a)),
        }
    }

    /// (a·i + b)⁻¹ = (b - a·i) / (a² + b²).
    fn invert(&self) -> Fp2 {
        let norm = fp_add(&fp_mul(&self.a, &self.a), &fp_mul(&self.b, &self.b));
        let norm_inv = fp_invert(&norm);
        Fp2 {
            a: fp_sub(&BigUint::zero(), &fp_mul(&self.a, &norm_inv)),
            b: fp_mul(&self.b, &norm_inv),
        }
    }
}
