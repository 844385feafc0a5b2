use super::*;
use proptest::prelude::*;

#[test]
fn empty_config_deserializes_to_default() {
    let config: Config = serde_json::from_str("{}").expect("failed to parse empty config");
    assert_eq!(config, Config::default());
}

#[test]
fn limb_width_is_snake_case() {
    let config: Config = serde_json::from_str(r#"{"scalar_limb_width": "bits32"}"#)
        .expect("failed to parse config");
    assert_eq!(config.scalar_limb_width, LimbWidth::Bits32);
}

#[test]
fn native_limb_width_resolves_to_a_concrete_width() {
    let resolved = LimbWidth::Native.resolve();
    assert_ne!(resolved, LimbWidth::Native);
    #[cfg(target_pointer_width = "64")]
    assert_eq!(resolved, LimbWidth::Bits64);
    #[cfg(target_pointer_width = "32")]
    assert_eq!(resolved, LimbWidth::Bits32);
}

#[test]
fn concrete_limb_widths_resolve_to_themselves() {
    assert_eq!(LimbWidth::Bits32.resolve(), LimbWidth::Bits32);
    assert_eq!(LimbWidth::Bits64.resolve(), LimbWidth::Bits64);
}

proptest! {
    #[test]
    fn config_survives_json_serialization(config: Config) {
        let json = serde_json::to_string(&config).expect("failed to serialize config");
        let parsed: Config = serde_json::from_str(&json).expect("failed to parse config");
        prop_assert_eq!(parsed, config);
    }
}
