//! Decoding of hex test vectors into fixed size arrays.
//!
//! These panic on malformed input: test vectors are constants and a bad one
//! is a bug in the vector, not something to recover from.

fn hex_to_array<const N: usize>(data: &str) -> [u8; N] {
    let bytes = hex::decode(data).expect("Invalid hex in test vector");
    assert_eq!(
        bytes.len(),
        N,
        "Test vector has {} bytes, expected {}",
        bytes.len(),
        N
    );
    let mut ans = [0u8; N];
    ans.copy_from_slice(&bytes);
    ans
}

pub fn hex_to_32_bytes(data: &str) -> [u8; 32] {
    hex_to_array(data)
}

pub fn hex_to_64_bytes(data: &str) -> [u8; 64] {
    hex_to_array(data)
}

pub fn hex_to_128_bytes(data: &str) -> [u8; 128] {
    hex_to_array(data)
}

pub fn hex_to_384_bytes(data: &str) -> [u8; 384] {
    hex_to_array(data)
}
