use std::{collections::HashMap, path::Path};

use ::config as config_rs;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Config structs read from `APP_*` environment variables, nested keys
/// separated by `__` (e.g. `APP_DATABASE__URL`).
pub trait EnvConfig: Sized + DeserializeOwned {
    const PREFIX: &'static str = "APP";
    const SEPARATOR: &'static str = "__";

    fn load_dotenv() {
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        if dotenvy::from_filename(manifest_dir.join(".env")).is_err() {
            let _ = dotenvy::dotenv();
        }
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn environment() -> config_rs::Environment {
        config_rs::Environment::with_prefix(Self::PREFIX)
            .prefix_separator("_")
            .separator(Self::SEPARATOR)
            .try_parsing(true)
    }

    fn from_env() -> Result<Self> {
        Self::load_dotenv();
        Self::from_environment(Self::environment())
    }

    /// Same as [`EnvConfig::from_env`] but reads the given variables instead of
    /// the process environment. `.env` is not consulted.
    fn from_vars(vars: HashMap<String, String>) -> Result<Self> {
        Self::from_environment(Self::environment().source(Some(vars)))
    }

    fn from_environment(environment: config_rs::Environment) -> Result<Self> {
        let cfg = config_rs::Config::builder()
            .add_source(environment)
            .build()
            .context("failed to read environment variables for config")?
            .try_deserialize::<Self>()
            .context("failed to deserialize environment into config")?;

        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::EnvConfig;
    use crate::config::{AppConfig, defaults};

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn missing_variables_fall_back_to_defaults() {
        let cfg = AppConfig::from_vars(HashMap::new()).expect("config should load");
        assert_eq!(cfg.general.port, defaults::DEFAULT_PORT);
        assert_eq!(cfg.database.url, defaults::DEFAULT_DATABASE_URL);
        assert_eq!(cfg.database.max_connections, defaults::DEFAULT_DB_MAX_CONNECTIONS);
    }

    #[test]
    fn nested_variables_override_sections() {
        let cfg = AppConfig::from_vars(vars(&[
            ("APP_GENERAL__PORT", "9090"),
            ("APP_DATABASE__URL", "postgres://menu@db:5432/menu?sslmode=require"),
            ("APP_DATABASE__MAX_CONNECTIONS", "32"),
        ]))
        .expect("config should load");

        assert_eq!(cfg.general.port, 9090);
        assert_eq!(cfg.database.url, "postgres://menu@db:5432/menu?sslmode=require");
        assert_eq!(cfg.database.max_connections, 32);
        assert_eq!(cfg.bind_address(), "0.0.0.0:9090");
    }

    #[test]
    fn invalid_values_fail_validation() {
        let err = AppConfig::from_vars(vars(&[
            ("APP_DATABASE__MAX_CONNECTIONS", "1"),
            ("APP_DATABASE__MIN_IDLE", "4"),
        ]))
        .expect_err("config should be rejected");
        assert!(err.to_string().contains("database.min_idle"));
    }
}
