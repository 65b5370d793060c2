//! Configuration defaults and JSON parsing.

use inorder_core::config::Config;
use pretty_assertions::assert_eq;

#[test]
fn defaults() {
    let config = Config::default();
    assert!(!config.general.trace_stages);
    assert_eq!(config.general.run_cycles, 1000);
    assert_eq!(config.memory.flash_size, 1024);
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let config = Config::from_json(r#"{ "general": { "run_cycles": 42 } }"#).unwrap();
    assert_eq!(config.general.run_cycles, 42);
    assert!(!config.general.trace_stages);
    assert_eq!(config.memory.flash_size, 1024);
}

#[test]
fn full_json_round_trip() {
    let config = Config::from_json(
        r#"{
            "general": { "trace_stages": true, "run_cycles": 7 },
            "memory": { "flash_size": 4096 }
        }"#,
    )
    .unwrap();
    assert!(config.general.trace_stages);
    assert_eq!(config.general.run_cycles, 7);
    assert_eq!(config.memory.flash_size, 4096);
}

#[test]
fn malformed_json_is_an_error() {
    assert!(Config::from_json("not json").is_err());
}
