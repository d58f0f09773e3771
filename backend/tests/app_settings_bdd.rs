//! Behaviour tests for environment-driven application settings.
//!
//! These scenarios pin the defaults, the timeout fallback rules, and the
//! values that must stop the process from starting.

use mockable::MockEnv;
use profile_api::settings::{AppSettings, ConfigError};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use std::collections::HashMap;

struct SettingsWorld {
    vars: RefCell<HashMap<String, String>>,
    outcome: RefCell<Option<Result<AppSettings, ConfigError>>>,
}

impl SettingsWorld {
    fn new() -> Self {
        Self {
            vars: RefCell::new(HashMap::new()),
            outcome: RefCell::new(None),
        }
    }

    fn set_env_var(&self, name: &str, value: &str) {
        self.vars
            .borrow_mut()
            .insert(name.to_owned(), value.to_owned());
    }

    fn evaluate(&self) {
        let env = mock_env(self.vars.borrow().clone());
        *self.outcome.borrow_mut() = Some(AppSettings::from_env(&env));
    }

    fn with_settings<F>(&self, f: F)
    where
        F: FnOnce(&AppSettings),
    {
        let outcome = self.outcome.borrow();
        let settings = outcome
            .as_ref()
            .expect("evaluation result")
            .as_ref()
            .expect("expected settings to load");
        f(settings);
    }

    fn with_error<F>(&self, f: F)
    where
        F: FnOnce(&ConfigError),
    {
        let outcome = self.outcome.borrow();
        let error = match outcome.as_ref().expect("evaluation result") {
            Ok(_) => panic!("expected settings to fail"),
            Err(error) => error,
        };
        f(error);
    }
}

fn mock_env(vars: HashMap<String, String>) -> MockEnv {
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |key| vars.get(key).cloned());
    env
}

#[fixture]
fn world() -> SettingsWorld {
    SettingsWorld::new()
}

#[given("an empty environment")]
fn an_empty_environment(world: &SettingsWorld) {
    world.vars.borrow_mut().clear();
}

#[given("{name} is set to {value}")]
fn variable_is_set(world: &SettingsWorld, name: String, value: String) {
    world.set_env_var(&name, &value);
}

#[when("the settings are loaded")]
fn the_settings_are_loaded(world: &SettingsWorld) {
    world.evaluate();
}

#[then("the settings load succeeds")]
fn the_settings_load_succeeds(world: &SettingsWorld) {
    world.with_settings(|_| {});
}

#[then("the port is {port}")]
fn the_port_is(world: &SettingsWorld, port: u16) {
    world.with_settings(|settings| assert_eq!(settings.bind_addr.port(), port));
}

#[then("the upstream timeout is {millis} milliseconds")]
fn the_upstream_timeout_is(world: &SettingsWorld, millis: u64) {
    world.with_settings(|settings| {
        assert_eq!(
            u64::try_from(settings.cat_api_timeout.as_millis()).expect("timeout fits u64"),
            millis
        );
    });
}

#[then("the upstream URL is {url}")]
fn the_upstream_url_is(world: &SettingsWorld, url: String) {
    world.with_settings(|settings| assert_eq!(settings.cat_api_url.as_str(), url));
}

#[then("the user name is {name}")]
fn the_user_name_is(world: &SettingsWorld, name: String) {
    world.with_settings(|settings| assert_eq!(settings.user.name.as_deref(), Some(name.as_str())));
}

#[then("the user email is not set")]
fn the_user_email_is_not_set(world: &SettingsWorld) {
    world.with_settings(|settings| assert!(settings.user.email.is_none()));
}

#[then("the settings load fails naming {variable}")]
fn the_settings_load_fails_naming(world: &SettingsWorld, variable: String) {
    world.with_error(|error| {
        let ConfigError::InvalidEnv { name, .. } = error;
        assert_eq!(*name, variable.as_str());
    });
}

#[scenario(
    path = "tests/features/app_settings.feature",
    name = "Defaults apply when nothing is configured"
)]
fn defaults_apply_when_nothing_is_configured(world: SettingsWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/app_settings.feature",
    name = "An explicit upstream timeout is honoured"
)]
fn an_explicit_upstream_timeout_is_honoured(world: SettingsWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/app_settings.feature",
    name = "A non-numeric upstream timeout falls back to the default"
)]
fn a_non_numeric_upstream_timeout_falls_back(world: SettingsWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/app_settings.feature",
    name = "A negative upstream timeout falls back to the default"
)]
fn a_negative_upstream_timeout_falls_back(world: SettingsWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/app_settings.feature",
    name = "User fields are taken from the environment"
)]
fn user_fields_are_taken_from_the_environment(world: SettingsWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/app_settings.feature",
    name = "A non-numeric port is rejected"
)]
fn a_non_numeric_port_is_rejected(world: SettingsWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/app_settings.feature",
    name = "A relative upstream URL is rejected"
)]
fn a_relative_upstream_url_is_rejected(world: SettingsWorld) {
    drop(world);
}
