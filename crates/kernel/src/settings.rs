use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use serde::Deserialize;

const DEFAULT_ENV: &str = "local";
const ENV_VAR_NAME: &str = "RENTAL_ENV";
const CONFIG_DIR_ENV: &str = "RENTAL_CONFIG_DIR";
const ENV_PREFIX: &str = "RENTAL";

/// Deployment environment the application is running in.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Staging,
    Production,
}

impl Environment {
    fn parse(value: &str) -> anyhow::Result<Self> {
        match value {
            "local" => Ok(Environment::Local),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            other => Err(anyhow!(
                "unsupported environment '{}'; expected local/staging/production",
                other
            )),
        }
    }
}

/// Top-level configuration structure loaded from layered sources.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

impl Settings {
    /// Load configuration by layering `.env`, base file, environment overlay
    /// and `RENTAL_*` variables. An explicit `config_dir` wins over
    /// `RENTAL_CONFIG_DIR`, which wins over `./config`.
    pub fn load_from(config_dir: Option<PathBuf>) -> anyhow::Result<Self> {
        // Allow missing `.env` files without failing.
        let _ = dotenvy::dotenv();

        let environment = std::env::var(ENV_VAR_NAME).unwrap_or_else(|_| DEFAULT_ENV.to_string());
        let environment = Environment::parse(&environment)?;

        let config_dir = config_dir
            .or_else(|| std::env::var(CONFIG_DIR_ENV).map(PathBuf::from).ok())
            .unwrap_or_else(default_config_dir);

        let mut settings = Self::from_dir(&config_dir, &environment)?;
        settings.environment = environment;

        tracing::debug!(
            config_dir = %config_dir.display(),
            env = ?settings.environment,
            "settings loaded"
        );

        Ok(settings)
    }

    fn from_dir(config_dir: &Path, environment: &Environment) -> anyhow::Result<Self> {
        let base_path = config_dir.join("base.toml");
        let environment_filename = match environment {
            Environment::Local => "local.toml",
            Environment::Staging => "staging.toml",
            Environment::Production => "production.toml",
        };
        let environment_path = config_dir.join(environment_filename);

        let builder = config::Config::builder()
            .add_source(config::File::from(base_path).required(false))
            .add_source(config::File::from(environment_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let cfg = builder
            .build()
            .with_context(|| "failed to build configuration")?;

        cfg.try_deserialize()
            .with_context(|| "failed to deserialize configuration")
    }
}

fn default_config_dir() -> PathBuf {
    std::env::current_dir()
        .map(|cwd| cwd.join("config"))
        .unwrap_or_else(|_| PathBuf::from("config"))
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    /// Start with the demo videos and customers.
    #[serde(default = "CatalogSettings::default_seed")]
    pub seed: bool,
}

impl CatalogSettings {
    fn default_seed() -> bool {
        true
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            seed: Self::default_seed(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    #[serde(default)]
    pub log_format: LogFormat,
    #[serde(default = "TelemetrySettings::default_log_level")]
    pub log_level: String,
}

impl TelemetrySettings {
    fn default_log_level() -> String {
        "warn".to_string()
    }
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            log_level: Self::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn default_environment_is_local() {
        let settings = Settings::default();
        assert_eq!(settings.environment, Environment::Local);
    }

    #[test]
    fn defaults_seed_catalog_and_log_quietly() {
        let settings = Settings::default();
        assert!(settings.catalog.seed);
        assert_eq!(settings.telemetry.log_format, LogFormat::Pretty);
        assert_eq!(settings.telemetry.log_level, "warn");
    }

    #[test]
    fn unknown_environment_is_rejected() {
        let err = Environment::parse("moon").unwrap_err();
        assert!(err.to_string().contains("unsupported environment 'moon'"));
    }

    #[test]
    fn missing_config_dir_falls_back_to_defaults() {
        let dir = std::env::temp_dir().join("rental-settings-does-not-exist");
        let settings = Settings::from_dir(&dir, &Environment::Local).unwrap();
        assert!(settings.catalog.seed);
        assert_eq!(settings.telemetry.log_level, "warn");
    }

    #[test]
    fn environment_file_overrides_base_file() {
        let dir = std::env::temp_dir().join(format!("rental-settings-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("base.toml"),
            "[catalog]\nseed = true\n\n[telemetry]\nlog_format = \"json\"\n",
        )
        .unwrap();
        fs::write(dir.join("staging.toml"), "[catalog]\nseed = false\n").unwrap();

        let settings = Settings::from_dir(&dir, &Environment::Staging).unwrap();
        assert!(!settings.catalog.seed);
        assert_eq!(settings.telemetry.log_format, LogFormat::Json);

        fs::remove_dir_all(&dir).ok();
    }
}
