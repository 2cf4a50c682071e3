use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

fn validate_with(var: &'static str, value: &str) -> Result<(), String> {
    let _env = setup_config_dir();
    let _guard = EnvGuard::set(var, value);
    let config = Config::load().unwrap();
    config.validate().map_err(|e| e.to_string())
}

#[test]
#[serial]
fn given_zero_port_when_validate_then_error() {
    let result = validate_with("TAPIS_BRIDGE_SERVER_PORT", "0");

    assert_that!(result, err(anything()));
    assert_that!(result.unwrap_err(), contains_substring("server.port"));
}

#[test]
#[serial]
fn given_base_url_without_scheme_when_validate_then_error() {
    let result = validate_with("TAPIS_BASE_URL", "portals.tapis.io");

    assert_that!(result, err(anything()));
    assert_that!(result.unwrap_err(), contains_substring("tapis.base_url"));
}

#[test]
#[serial]
fn given_base_url_without_host_when_validate_then_error() {
    let result = validate_with("TAPIS_BASE_URL", "https://");

    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_http_base_url_when_validate_then_ok() {
    let result = validate_with("TAPIS_BASE_URL", "http://localhost:8080/");

    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_empty_auth_endpoint_when_validate_then_error() {
    let result = validate_with("TAPIS_AUTH_ENDPOINT", "/");

    assert_that!(result, err(anything()));
    assert_that!(result.unwrap_err(), contains_substring("auth_endpoint"));
}

#[test]
#[serial]
fn given_zero_reload_attempts_when_validate_then_error() {
    let result = validate_with("TAPIS_BRIDGE_RELOAD_ATTEMPTS", "0");

    assert_that!(result, err(anything()));
    assert_that!(result.unwrap_err(), contains_substring("reload_attempts"));
}

#[test]
#[serial]
fn given_excessive_reload_delay_when_validate_then_error() {
    let result = validate_with("TAPIS_BRIDGE_RELOAD_DELAY_MS", "60000");

    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_short_jwt_secret_when_validate_then_error_mentions_32_characters() {
    let result = validate_with("TAPIS_BRIDGE_JWT_SECRET", "tooshort");

    assert_that!(result, err(anything()));
    assert_that!(result.unwrap_err(), contains_substring("32 characters"));
}

#[test]
#[serial]
fn given_jwt_secret_exactly_32_chars_when_validate_then_ok() {
    let result = validate_with("TAPIS_BRIDGE_JWT_SECRET", "12345678901234567890123456789012");

    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_short_session_ttl_when_validate_then_error() {
    let result = validate_with("TAPIS_BRIDGE_SESSION_TTL_SECS", "10");

    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_session_ttl_beyond_a_year_when_validate_then_error() {
    let result = validate_with("TAPIS_BRIDGE_SESSION_TTL_SECS", "9223372036854775807");

    assert_that!(result, err(contains_substring("session.ttl_secs")));
}

#[test]
#[serial]
fn given_session_ttl_of_one_year_when_validate_then_ok() {
    let result = validate_with("TAPIS_BRIDGE_SESSION_TTL_SECS", "31536000");

    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_zero_rate_limit_when_validate_then_error() {
    let result = validate_with("TAPIS_BRIDGE_RATE_LIMIT_MAX_REQUESTS", "0");

    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_database_path_escaping_config_dir_when_validate_then_error() {
    let result = validate_with("TAPIS_BRIDGE_DATABASE_PATH", "../elsewhere.db");

    assert_that!(result, err(anything()));
    assert_that!(result.unwrap_err(), contains_substring("database.path"));
}

#[test]
#[serial]
fn given_jwt_secret_when_debug_formatted_then_redacted() {
    let _env = setup_config_dir();
    let _secret = EnvGuard::set("TAPIS_BRIDGE_JWT_SECRET", "12345678901234567890123456789012");

    let config = Config::load().unwrap();
    let rendered = format!("{:?}", config.session);

    assert!(!rendered.contains("1234567890"));
    assert!(rendered.contains("<redacted>"));
}
