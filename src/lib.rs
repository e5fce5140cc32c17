//! Authgate Validation Service
//!
//! Rule checks for a game-server authentication layer: password and email
//! acceptability, per-email registration quotas, unrestricted and restricted
//! player names, and geo-IP country admission.
//!
//! Rules are read from a [`config::SettingsSource`](crate::config::SettingsSource) into an immutable snapshot
//! that can be reloaded at runtime. Storage, permissions and geo-IP lookups are
//! supplied by the embedding application through the traits in
//! [`datasource`], [`permission`] and [`geoip`].

pub mod config;
pub mod datasource;
pub mod geoip;
pub mod message;
pub mod permission;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use message::{MessageKey, ValidationResult};
pub use types::{ServiceError, ValidationSettings};
pub use validation::ValidationService;

/// Crate version, included in the rule (re)load log lines
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name the service logs under
pub const SERVICE_NAME: &str = "authgate";
