use pretty_assertions::assert_eq;
use std::env;
use std::fs;
use test_log::test;
use webinar_config::config::{API_ENV_VAR, API_URL_PRODUCTION_VAR, ENV_FILE_PATH_VAR};
use webinar_config::{ApiConfig, ConfigError, Environment};

// Everything that touches the process environment lives in one test so the
// steps cannot interleave.
#[test]
fn load_reads_env_file_path() {
    env::remove_var(API_ENV_VAR);
    env::remove_var(API_URL_PRODUCTION_VAR);

    env::set_var(ENV_FILE_PATH_VAR, "   ");
    let config = ApiConfig::load().unwrap();
    assert_eq!(config.environment, Environment::Development);

    let missing = env::temp_dir().join("webinar-config-missing.env");
    let _ = fs::remove_file(&missing);
    env::set_var(ENV_FILE_PATH_VAR, &missing);

    match ApiConfig::load() {
        Err(ConfigError::EnvFile { path, .. }) => {
            assert_eq!(path, missing.to_string_lossy());
        }
        other => panic!("expected env file error, got {:?}", other),
    }

    let env_file = env::temp_dir().join(format!("webinar-config-{}.env", std::process::id()));
    fs::write(
        &env_file,
        format!(
            "{}=production\n{}=https://api.theneedles.in\n",
            API_ENV_VAR, API_URL_PRODUCTION_VAR
        ),
    )
    .unwrap();
    env::set_var(ENV_FILE_PATH_VAR, &env_file);

    let config = ApiConfig::load().unwrap();
    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.endpoint("/api/users"), "https://api.theneedles.in/api/users");

    env::remove_var(ENV_FILE_PATH_VAR);
    env::remove_var(API_ENV_VAR);
    env::remove_var(API_URL_PRODUCTION_VAR);
    let _ = fs::remove_file(&env_file);
}
