//! Textual forms matching the `String` methods of golang.org/x/crypto/bn256.
//!
//! Every number printed is a marshaled coordinate, in decimal.
use crate::engine::MakeAffine;
use crate::fp2::biguints_from_fp2e;
use crate::g1::g1_to_bytes;
use crate::g2::g2_to_bytes;
use crate::gt::gt_to_bytes;
use crate::types::{CurvePointFp, Fp12e, TwistPointFp2};
use crate::FP_SIZE;
use num_bigint::BigUint;
use num_traits::Zero;
use std::fmt;


fn decimals(bytes: &[u8]) -> Vec<BigUint> {
    bytes
        .chunks_exact(FP_SIZE)
        .map(BigUint::from_bytes_be)
        .collect()
}

/// `bn256.G1(x, y)`.
///
/// For the generator this prints `(1, p - 2)` where the Go implementation
/// prints `(1, -2)`; the values are equal modulo p.
impl fmt::Display for CurvePointFp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coordinates = decimals(&g1_to_bytes(self));
        write!(f, "bn256.G1({}, {})", coordinates[0], coordinates[1])
    }
}

/// `bn256.G2((x.a,x.b), (y.a,y.b), (z.a,z.b))`.
///
/// `z` is read from the normalized point, except that it is printed as
/// `(0,0)` when both normalized coordinates are zero, i.e. for the point at
/// infinity. That is how the Go implementation prints its identity.
impl fmt::Display for TwistPointFp2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let affine = self.to_affine();
        let coordinates = decimals(&g2_to_bytes(&affine));
        let (z_a, z_b) = if affine.x.is_zero() && affine.y.is_zero() {
            (BigUint::zero(), BigUint::zero())
        } else {
            biguints_from_fp2e(&affine.z)
        };
        write!(
            f,
            "bn256.G2(({},{}), ({},{}), ({},{}))",
            coordinates[0], coordinates[1], coordinates[2], coordinates[3], z_a, z_b
        )
    }
}

/// `bn256.GT(((..,..),(..,..),(..,..)),((..,..),(..,..),(..,..)))`.
impl fmt::Display for Fp12e {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = decimals(&gt_to_bytes(self));
        write!(
            f,
            "bn256.GT((({},{}),({},{}),({},{})),(({},{}),({},{}),({},{})))",
            c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7], c[8], c[9], c[10], c[11]
        )
    }
}
