use claria_instruments::config::{EngineConfig, UnknownInstrumentPolicy};
use claria_instruments::error::ConfigError;

#[test]
fn default_policy_is_fallback() {
    let config = EngineConfig::default();
    assert_eq!(config.unknown_instrument, UnknownInstrumentPolicy::Fallback);
    assert_eq!(config.config_version, 1);
}

#[test]
fn parses_current_config() {
    let config =
        EngineConfig::from_json(r#"{ "config_version": 1, "unknown_instrument": "reject" }"#)
            .unwrap();
    assert_eq!(config.unknown_instrument, UnknownInstrumentPolicy::Reject);
}

#[test]
fn unversioned_config_is_upgraded() {
    let config = EngineConfig::from_json("{}").unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.unknown_instrument, UnknownInstrumentPolicy::Fallback);
}

#[test]
fn newer_config_is_rejected() {
    let err = EngineConfig::from_json(r#"{ "config_version": 7 }"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::UnsupportedVersion {
            found: 7,
            supported: 1
        }
    ));
}

#[test]
fn unknown_policy_value_is_a_parse_error() {
    let err = EngineConfig::from_json(r#"{ "unknown_instrument": "ignore" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn policy_parses_from_env_style_strings() {
    assert_eq!(
        " Reject ".parse::<UnknownInstrumentPolicy>().unwrap(),
        UnknownInstrumentPolicy::Reject
    );
    assert_eq!(
        "fallback".parse::<UnknownInstrumentPolicy>().unwrap(),
        UnknownInstrumentPolicy::Fallback
    );
    assert!(matches!(
        "strict".parse::<UnknownInstrumentPolicy>(),
        Err(ConfigError::InvalidPolicy(p)) if p == "strict"
    ));
}
