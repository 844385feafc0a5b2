//! Marshaled BN256 group elements, in the 32-byte big-endian layout shared
//! with golang.org/x/crypto/bn256.
//!
//! G2 coordinates are `x.a ‖ x.b ‖ y.a ‖ y.b` where `a` is the coefficient of
//! `i`.

/// The base field prime.
pub const P_HEX: &str = "8fb501e34aa387f9aa6fecb86184dc21ee5b88d120b5b59e185cac6c5e089667";
pub const P_DECIMAL: &str =
    "65000549695646603732796438742359905742825358107623003571877145026864184071783";
pub const ORDER_DECIMAL: &str =
    "65000549695646603732796438742359905742570406053903786389881062969044166799969";

/// Digits of `p - 1` in the engine's mixed radix representation.
pub const P_MINUS_ONE_DIGITS: [i64; 12] = [0, 0, 0, 1, 0, 0, 4, 0, 0, 1, 0, 1868033];

pub mod g1 {
    pub const INFINITY: &str = "00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000";
    pub const GENERATOR: &str = "00000000000000000000000000000000000000000000000000000000000000018fb501e34aa387f9aa6fecb86184dc21ee5b88d120b5b59e185cac6c5e089665";
    pub const NEG_GENERATOR: &str = "00000000000000000000000000000000000000000000000000000000000000010000000000000000000000000000000000000000000000000000000000000002";
    pub const DOUBLE_GENERATOR: &str = "08fb501e34aa387f9aa6fecb86184dc21ee5b88d120b5b59e185cac6c5e0896506bc7c16a77faa5fb3fd3f18a4923a51972c4a69cd888483692458151468670d";
    pub const TRIPLE_GENERATOR: &str = "6b0c4da69e198aa74b74ddf2341bc5cee1dbd50017dc5a5952460af554b063ec21a987a8fedda6e3458530806a4a59e9c3b1e57d3d5daecef847d6af55f21871";
}

pub mod g2 {
    pub const INFINITY: &str = "0000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000";
    pub const GENERATOR: &str = "2ecca446ff6f3d4d03c76e9b5c752f28bc37b364cb05ac4a37eb32e1c32459708f25386f72c9462b81597d65ae2092c4b97792155dcdaad32b8a6dd41792534c2db10ef5233b0fe3962b9ee6a4bbc2b5bde01a54f3513d42df972e128f31bf12274e5747e8cafacc3716cc8699db79b22f0e4ff3c23e898f694420a3be3087a5";
    pub const NEG_GENERATOR: &str = "2ecca446ff6f3d4d03c76e9b5c752f28bc37b364cb05ac4a37eb32e1c32459708f25386f72c9462b81597d65ae2092c4b97792155dcdaad32b8a6dd41792534c6203f2ee2768781614444dd1bcc9196c307b6e7c2d64785b38c57e59ced6d7556866aa9b61d88d2d73592031c7a9626fbf4d38dd5e772c0eaf188bc89fd80ec2";
    pub const DOUBLE_GENERATOR: &str = "847dcea5d6eff089c7a866138d04f11ee3d3a926093681e09d83c0ff0d7055a3797e4195d5ea67643fe4b3f10430a2e69db82de62293283908793a1fdb67b09524e58911e0f04c1adc4b89ec50cc0484aa5680c7cf063aa704ad6190c9916b858c48feb3db33aba73d185f4ccf4f4e37c088a0a37e4daa81b53eb1ce53eaaddd";
}

pub mod gt {
    /// The multiplicative identity: every coefficient zero except the
    /// constant term of the constant term.
    pub const ONE: &str = "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000001";
}
