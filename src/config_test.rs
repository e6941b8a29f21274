use super::*;

#[test]
fn defaults_apply_when_unset() {
    let config = ServerConfig::from_values(None, None).expect("defaults are valid");
    assert_eq!(config, ServerConfig { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT });
    assert_eq!(config.bind_address(), "0.0.0.0:3000");
}

#[test]
fn explicit_values_override_defaults() {
    let config = ServerConfig::from_values(Some("127.0.0.1"), Some("8080")).expect("valid values");
    assert_eq!(config.bind_address(), "127.0.0.1:8080");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = ServerConfig::from_values(Some("  "), Some("")).expect("blank values");
    assert_eq!(config.host, DEFAULT_HOST);
    assert_eq!(config.port, DEFAULT_PORT);
}

#[test]
fn invalid_port_is_rejected() {
    assert_eq!(
        ServerConfig::from_values(None, Some("eighty")),
        Err(ConfigError::InvalidPort("eighty".to_owned()))
    );
    assert!(ServerConfig::from_values(None, Some("70000")).is_err());
}

#[test]
fn config_error_messages_name_the_setting() {
    assert_eq!(ConfigError::InvalidPort("x".to_owned()).to_string(), "invalid PORT: x");
}
