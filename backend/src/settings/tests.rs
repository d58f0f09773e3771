//! Unit tests for settings parsing.

use super::*;
use mockable::MockEnv;
use rstest::rstest;
use std::collections::HashMap;

fn env_with(vars: &[(&str, &str)]) -> MockEnv {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
        .collect();
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |name| vars.get(name).cloned());
    env
}

#[test]
fn defaults_apply_to_an_empty_environment() {
    let settings = AppSettings::from_env(&env_with(&[])).expect("defaults load");

    assert_eq!(
        settings.bind_addr,
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT)
    );
    assert_eq!(settings.cat_api_url.as_str(), DEFAULT_CAT_API_URL);
    assert_eq!(
        settings.cat_api_timeout,
        Duration::from_millis(DEFAULT_CAT_API_TIMEOUT_MS)
    );
    assert_eq!(settings.user, UserProfile::default());
}

#[test]
fn explicit_values_are_respected() {
    let env = env_with(&[
        (PORT_ENV, "8081"),
        (BIND_HOST_ENV, "127.0.0.1"),
        (USER_EMAIL_ENV, "ada@example.com"),
        (USER_NAME_ENV, "Ada Lovelace"),
        (USER_STACK_ENV, "Rust/actix-web"),
        (CAT_API_URL_ENV, "http://localhost:9000/fact"),
        (CAT_API_TIMEOUT_ENV, "1200"),
    ]);

    let settings = AppSettings::from_env(&env).expect("settings load");

    assert_eq!(settings.bind_addr.to_string(), "127.0.0.1:8081");
    assert_eq!(
        settings.user,
        UserProfile::new("ada@example.com", "Ada Lovelace", "Rust/actix-web")
    );
    assert_eq!(settings.cat_api_url.as_str(), "http://localhost:9000/fact");
    assert_eq!(settings.cat_api_timeout, Duration::from_millis(1200));
}

#[rstest]
#[case::non_numeric("soon")]
#[case::zero("0")]
#[case::negative("-250")]
#[case::fractional("12.5")]
#[case::blank("   ")]
#[case::with_unit("250ms")]
fn invalid_timeouts_fall_back_to_default(#[case] raw: &str) {
    let settings =
        AppSettings::from_env(&env_with(&[(CAT_API_TIMEOUT_ENV, raw)])).expect("settings load");
    assert_eq!(
        settings.cat_api_timeout,
        Duration::from_millis(DEFAULT_CAT_API_TIMEOUT_MS)
    );
}

#[rstest]
#[case::non_numeric(PORT_ENV, "http")]
#[case::out_of_range(PORT_ENV, "70000")]
#[case::bad_host(BIND_HOST_ENV, "localhost")]
#[case::relative_url(CAT_API_URL_ENV, "/fact")]
#[case::unsupported_scheme(CAT_API_URL_ENV, "ftp://example.com/fact")]
fn unusable_values_are_rejected(#[case] name: &'static str, #[case] raw: &str) {
    let error = AppSettings::from_env(&env_with(&[(name, raw)])).expect_err("load should fail");
    assert_eq!(
        error,
        ConfigError::InvalidEnv {
            name,
            value: raw.to_owned(),
            expected: match name {
                PORT_ENV => PORT_EXPECTED,
                BIND_HOST_ENV => HOST_EXPECTED,
                _ => URL_EXPECTED,
            },
        }
    );
}

#[test]
fn blank_url_uses_default_endpoint() {
    let settings =
        AppSettings::from_env(&env_with(&[(CAT_API_URL_ENV, "")])).expect("settings load");
    assert_eq!(settings.cat_api_url.as_str(), DEFAULT_CAT_API_URL);
}

#[test]
fn empty_user_values_are_kept() {
    let settings =
        AppSettings::from_env(&env_with(&[(USER_STACK_ENV, "")])).expect("settings load");
    assert_eq!(settings.user.stack.as_deref(), Some(""));
}
