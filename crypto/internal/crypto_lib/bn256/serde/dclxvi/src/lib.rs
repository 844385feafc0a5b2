//! Serialisation of BN256 elements held in the dclxvi representation.
//!
//! dclxvi (Naehrig, Niederhagen, Schwabe) stores base field elements as
//! twelve small digits in a mixed radix tied to the curve parameter `v`, and
//! scalars as four 64-bit words. This crate converts between those
//! representations, arbitrary precision integers, and the 32-byte big-endian
//! encoding used by golang.org/x/crypto/bn256, so that elements produced by
//! one implementation can be consumed by the other bit for bit.
//!
//! The group law and the pairing are not implemented here.
//!
//! Deserialisation is deliberately lenient: the `*_from_bytes` functions do
//! not check that the decoded coordinates lie on the curve, nor that they are
//! reduced modulo p. Peers rely on this permissive contract. Callers that
//! need a validated point must check membership themselves.

pub mod codec;
pub mod engine;
mod error;
mod format;
pub mod fp;
pub mod fp2;
pub mod g1;
pub mod g2;
pub mod gt;
pub mod params;
pub mod scalar;
pub mod types;

pub use codec::{no_op_logger, Bn256Codec};
pub use engine::MakeAffine;
pub use error::SerdeError;
pub use g1::{g1_from_bytes, g1_to_bytes};
pub use g2::{g2_from_bytes, g2_to_bytes};
pub use gt::{gt_from_bytes, gt_to_bytes};
pub use params::{g1_generator, g2_generator, params, CurveParams};
pub use scalar::{biguint_from_scalar, scalar_from_biguint};
pub use types::{CurvePointFp, Fp12e, Fp2e, Fp6e, Fpe, Scalar, TwistPointFp2, G1, G2, GT};

/// Size of one marshaled base field element.
pub const FP_SIZE: usize = 32;
pub const G1_SIZE: usize = 2 * FP_SIZE;
pub const G2_SIZE: usize = 4 * FP_SIZE;
pub const GT_SIZE: usize = 12 * FP_SIZE;
