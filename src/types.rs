//! Type definitions for authgate
//!
//! Contains the shared error type and the configuration models the
//! validation rules are built from.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Service-level faults.
///
/// Rule violations are never reported through this type; they are ordinary
/// return values (see [`crate::message::ValidationResult`]).
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid settings: {message}")]
    InvalidSettings {
        message: String,
    },

    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Data source error: {0}")]
    DataSource(String),

    #[error("GeoIP lookup error: {0}")]
    GeoIp(String),
}

impl ServiceError {
    pub fn invalid_settings(message: impl Into<String>) -> Self {
        ServiceError::InvalidSettings {
            message: message.into(),
        }
    }
}

/// Complete validation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    pub password: PasswordSettings,
    pub email: EmailSettings,
    pub restrictions: RestrictionSettings,
    pub protection: ProtectionSettings,
}

/// Password rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordSettings {
    /// Pattern the whole password must match
    pub allowed_characters: String,
    pub min_length: usize,
    pub max_length: usize,
    /// Matched exactly, case included
    pub unsafe_passwords: Vec<String>,
}

/// Email rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailSettings {
    pub max_registrations: u32,
    pub domain_whitelist: Vec<String>,
    pub domain_blacklist: Vec<String>,
}

/// Name restriction rules
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestrictionSettings {
    pub unrestricted_names: Vec<String>,
    pub enable_restricted_users: bool,
    /// Entries of the form `name;ip`, `name;hostname` or `name;regex:pattern`
    pub restricted_users: Vec<String>,
}

/// Geo-IP country rules
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtectionSettings {
    pub countries_whitelist: Vec<String>,
    pub countries_blacklist: Vec<String>,
}

impl Default for PasswordSettings {
    fn default() -> Self {
        Self {
            allowed_characters: "[!-~]*".to_string(),
            min_length: 5,
            max_length: 30,
            unsafe_passwords: ["123456", "password", "qwerty", "12345", "54321", "123456789", "help"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            max_registrations: 1,
            domain_whitelist: Vec::new(),
            domain_blacklist: Vec::new(),
        }
    }
}
