use pretty_assertions::assert_eq;
use rstest::rstest;
use rv32sim_core::config::{Config, ConfigError, check_memory_size};
use rv32sim_core::{Memory, Simulator};

#[test]
fn defaults() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert_eq!(config.general.start_pc, 0);
    assert_eq!(config.general.initial_sp, None);
    assert_eq!(config.memory.size, 64 * 1024);
}

#[test]
fn empty_json_is_default() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn partial_sections_fill_missing_fields() {
    let config = Config::from_json(r#"{ "general": { "trace_instructions": true } }"#).unwrap();
    assert!(config.general.trace_instructions);
    assert_eq!(config.general.start_pc, 0);
    assert_eq!(config.memory.size, 64 * 1024);
}

#[rstest]
#[case(0)]
#[case(10)]
#[case((1 << 32) + 4)]
fn invalid_memory_sizes(#[case] size: usize) {
    let json = format!(r#"{{ "memory": {{ "size": {size} }} }}"#);
    assert!(matches!(
        Config::from_json(&json),
        Err(ConfigError::InvalidMemorySize(s)) if s == size
    ));
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(
        Config::from_json("{ not json"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn config_serializes_back_to_equal_json() {
    let config = Config::from_json(r#"{ "general": { "initial_sp": 1024 } }"#).unwrap();
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(Config::from_json(&json).unwrap(), config);
}

#[test]
fn simulator_rejects_invalid_default_override() {
    let mut config = Config::default();
    config.memory.size = 3;
    assert!(Simulator::new(&config).is_err());
}

#[rstest]
#[case(0, false)]
#[case(6, false)]
#[case(4, true)]
#[case(64 * 1024, true)]
#[case((1 << 32) + 4, false)]
fn memory_and_config_agree_on_sizes(#[case] size: usize, #[case] valid: bool) {
    let mut config = Config::default();
    config.memory.size = size;
    assert_eq!(check_memory_size(size).is_ok(), valid);
    assert_eq!(config.validate().is_ok(), valid);
    assert_eq!(Memory::new(size).is_ok(), valid);
}
