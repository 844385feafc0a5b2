//! A configured, logging front end to the codecs.
use crate::error::SerdeError;
use crate::g1::{g1_from_bytes, g1_to_bytes};
use crate::g2::{g2_from_bytes, g2_to_bytes};
use crate::gt::{gt_from_bytes, gt_to_bytes};
use crate::scalar::{biguint_from_scalar, scalar_from_biguint_with_limb_width};
use crate::types::{Scalar, G1, G2, GT};
use crate::{G1_SIZE, G2_SIZE, GT_SIZE};
use ic_config::bn256::Config;
use num_bigint::BigUint;
use slog::{debug, o, Logger};

/// A logger that drops everything.
pub fn no_op_logger() -> Logger {
    Logger::root(slog::Discard, o!())
}

/// Runs the codecs with a fixed configuration and reports rejected inputs
/// to `logger`.
///
/// Holds no mutable state; share it freely between threads.
#[derive(Clone)]
pub struct Bn256Codec {
    config: Config,
    logger: Logger,
}

impl Bn256Codec {
    pub fn new(config: Config, logger: Logger) -> Self {
        let logger = logger.new(o!("component" => "bn256_codec"));
        debug!(logger, "Created BN256 codec";
            "scalar_limb_width" => format!("{:?}", config.scalar_limb_width.resolve()));
        Self { config, logger }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn scalar_from_biguint(&self, k: &BigUint) -> Result<Scalar, SerdeError> {
        scalar_from_biguint_with_limb_width(k, self.config.scalar_limb_width).map_err(|error| {
            if let SerdeError::EncodingOverflow { words_needed, .. } = &error {
                debug!(self.logger, "Rejected scalar";
                    "bits" => k.bits(), "words_needed" => *words_needed);
            }
            error
        })
    }

    pub fn biguint_from_scalar(&self, scalar: &Scalar) -> BigUint {
        biguint_from_scalar(scalar)
    }

    pub fn g1_to_bytes(&self, g1: &G1) -> [u8; G1_SIZE] {
        g1_to_bytes(g1)
    }

    pub fn g1_from_bytes(&self, bytes: &[u8]) -> Result<G1, SerdeError> {
        g1_from_bytes(bytes).map_err(|error| self.log_rejected("G1", error))
    }

    pub fn g2_to_bytes(&self, g2: &G2) -> [u8; G2_SIZE] {
        g2_to_bytes(g2)
    }

    pub fn g2_from_bytes(&self, bytes: &[u8]) -> Result<G2, SerdeError> {
        g2_from_bytes(bytes).map_err(|error| self.log_rejected("G2", error))
    }

    pub fn gt_to_bytes(&self, gt: &GT) -> [u8; GT_SIZE] {
        gt_to_bytes(gt)
    }

    pub fn gt_from_bytes(&self, bytes: &[u8]) -> Result<GT, SerdeError> {
        gt_from_bytes(bytes).map_err(|error| self.log_rejected("GT", error))
    }

    fn log_rejected(&self, group: &'static str, error: SerdeError) -> SerdeError {
        if let SerdeError::LengthMismatch { expected, actual } = &error {
            debug!(self.logger, "Rejected marshaled element";
                "group" => group, "expected" => *expected, "actual" => *actual);
        }
        error
    }
}
