use serde::{Deserialize, Serialize};

#[cfg(test)]
use proptest_derive::Arbitrary;

#[cfg(test)]
mod tests;

/// Width of the machine words a scalar is split into before it is packed
/// into the engine's four 64-bit scalar words.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(test, derive(Arbitrary))]
pub enum LimbWidth {
    /// Whatever the target's pointer width is.
    Native,
    Bits32,
    Bits64,
}

impl LimbWidth {
    /// Resolves `Native` to a concrete width for the current target.
    pub fn resolve(self) -> LimbWidth {
        match self {
            LimbWidth::Native => {
                if cfg!(target_pointer_width = "64") {
                    LimbWidth::Bits64
                } else {
                    LimbWidth::Bits32
                }
            }
            concrete => concrete,
        }
    }
}

impl Default for LimbWidth {
    fn default() -> Self {
        LimbWidth::Native
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
#[cfg_attr(test, derive(Arbitrary))]
pub struct Config {
    /// Limb width used by the scalar codec. Both widths produce identical
    /// scalar words; this only selects the packing path.
    pub scalar_limb_width: LimbWidth,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scalar_limb_width: LimbWidth::Native,
        }
    }
}
