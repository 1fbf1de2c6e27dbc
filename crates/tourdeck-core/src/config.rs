use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a config env var holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a config env var holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("TOURDECK_ENV", "development"));
    let log_level = or_default("TOURDECK_LOG_LEVEL", "info");

    let reference_year = match lookup("TOURDECK_REFERENCE_YEAR") {
        Ok(raw) => Some(raw.parse::<i32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: "TOURDECK_REFERENCE_YEAR".to_string(),
            reason: e.to_string(),
        })?),
        Err(_) => None,
    };

    let strict = match lookup("TOURDECK_STRICT").as_deref() {
        Ok("1" | "true" | "yes") => true,
        Ok("0" | "false" | "no") | Err(_) => false,
        Ok(other) => {
            return Err(ConfigError::InvalidEnvVar {
                var: "TOURDECK_STRICT".to_string(),
                reason: format!("expected a boolean, got \"{other}\""),
            })
        }
    };

    Ok(AppConfig {
        env,
        log_level,
        reference_year,
        strict,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
