//! Marshaling of GT: the twelve base field coefficients in tower order
//! `a.a, a.b, a.c, b.a, b.b, b.c`, each an F_p² element written `a ‖ b`.
//! 384 bytes.
use crate::error::{check_length, SerdeError};
use crate::fp2::{fp2e_from_be_slice, fp2e_to_bytes};
use crate::types::{Fp2e, Fp6e, GT};
use crate::{FP_SIZE, GT_SIZE};


const FP2_SIZE: usize = 2 * FP_SIZE;

/// Marshals `gt`. Extension field elements need no normalization.
pub fn gt_to_bytes(gt: &GT) -> [u8; GT_SIZE] {
    let mut bytes = [0u8; GT_SIZE];
    for (chunk, fp2e) in bytes.chunks_exact_mut(FP2_SIZE).zip(tower_slots(gt).iter()) {
        chunk.copy_from_slice(&fp2e_to_bytes(fp2e));
    }
    bytes
}

/// Reads an element marshaled by `gt_to_bytes`. Only the length is checked.
pub fn gt_from_bytes(bytes: &[u8]) -> Result<GT, SerdeError> {
    check_length(bytes, GT_SIZE)?;
    let mut slots = [Fp2e::zero(); 6];
    for (slot, chunk) in slots.iter_mut().zip(bytes.chunks_exact(FP2_SIZE)) {
        *slot = fp2e_from_be_slice(chunk);
    }
    let [aa, ab, ac, ba, bb, bc] = slots;
    Ok(GT {
        a: Fp6e {
            a: aa,
            b: ab,
            c: ac,
        },
        b: Fp6e {
            a: ba,
            b: bb,
            c: bc,
        },
    })
}

fn tower_slots(gt: &GT) -> [Fp2e; 6] {
    [gt.a.a, gt.a.b, gt.a.c, gt.b.a, gt.b.b, gt.b.c]
}
