//! Configuration management for authgate
//!
//! Loads [`ValidationSettings`] from an optional TOML file and environment
//! variables, and validates them before any rule snapshot is built from them.

use crate::types::{ServiceError, ValidationSettings};
use config::{Config, Environment, File, FileFormat};
use parking_lot::RwLock;
use std::path::PathBuf;

/// Environment prefix used by [`FileSettingsSource::from_env`]
pub const DEFAULT_ENV_PREFIX: &str = "AUTHGATE";

/// Keys parsed as comma-separated lists when read from the environment
const LIST_KEYS: [&str; 7] = [
    "password.unsafe_passwords",
    "email.domain_whitelist",
    "email.domain_blacklist",
    "restrictions.unrestricted_names",
    "restrictions.restricted_users",
    "protection.countries_whitelist",
    "protection.countries_blacklist",
];

/// Anything the validation service can (re)read its settings from
pub trait SettingsSource: Send + Sync {
    fn load(&self) -> Result<ValidationSettings, ServiceError>;
}

/// Reads settings from a TOML file layered under environment overrides.
///
/// Environment variables look like `AUTHGATE_PASSWORD__MIN_LENGTH=6` or
/// `AUTHGATE_PROTECTION__COUNTRIES_WHITELIST=ch,it`.
#[derive(Debug, Clone)]
pub struct FileSettingsSource {
    path: Option<PathBuf>,
    env_prefix: Option<String>,
}

impl FileSettingsSource {
    /// Settings from `AUTHGATE_CONFIG` (if set) plus `AUTHGATE_*` overrides
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            path: std::env::var("AUTHGATE_CONFIG").ok().map(PathBuf::from),
            env_prefix: Some(DEFAULT_ENV_PREFIX.to_string()),
        }
    }

    /// Settings from a single file, no environment overrides
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            env_prefix: None,
        }
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }
}

impl SettingsSource for FileSettingsSource {
    fn load(&self) -> Result<ValidationSettings, ServiceError> {
        let mut builder = Config::builder();

        if let Some(path) = &self.path {
            log::debug!("Reading validation settings from {}", path.display());
            builder = builder.add_source(File::from(path.as_path()).format(FileFormat::Toml));
        }

        if let Some(prefix) = &self.env_prefix {
            let mut env = Environment::with_prefix(prefix)
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .try_parsing(true);
            for key in LIST_KEYS {
                env = env.with_list_parse_key(key);
            }
            builder = builder.add_source(env);
        }

        let settings: ValidationSettings = builder.build()?.try_deserialize()?;
        validate_settings(&settings)?;
        Ok(settings)
    }
}

/// Settings held in memory and replaced by the embedding application
#[derive(Debug, Default)]
pub struct MemorySettingsSource {
    settings: RwLock<ValidationSettings>,
}

impl MemorySettingsSource {
    pub fn new(settings: ValidationSettings) -> Self {
        Self {
            settings: RwLock::new(settings),
        }
    }

    /// Replace the held settings; takes effect on the next reload
    pub fn update(&self, settings: ValidationSettings) {
        *self.settings.write() = settings;
    }

    /// Edit the held settings in place; takes effect on the next reload
    pub fn modify(&self, f: impl FnOnce(&mut ValidationSettings)) {
        let mut guard = self.settings.write();
        f(&mut *guard);
    }
}

impl SettingsSource for MemorySettingsSource {
    fn load(&self) -> Result<ValidationSettings, ServiceError> {
        let settings = self.settings.read().clone();
        validate_settings(&settings)?;
        Ok(settings)
    }
}

/// Validate configuration values
pub fn validate_settings(settings: &ValidationSettings) -> Result<(), ServiceError> {
    let password = &settings.password;

    if password.max_length == 0 {
        return Err(ServiceError::invalid_settings("Maximum password length must be positive"));
    }

    if password.min_length > password.max_length {
        return Err(ServiceError::invalid_settings(format!(
            "Minimum password length ({}) exceeds maximum ({})",
            password.min_length, password.max_length
        )));
    }

    Ok(())
}
