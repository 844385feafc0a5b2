//! Test vectors shared by the crypto crates.
pub mod bn256;
pub mod unhex;
