//! Immutable rule snapshot built from [`ValidationSettings`]

use super::lists::AccessList;
use super::password::PasswordRules;
use super::restrictions::NameRestrictions;
use crate::config::validate_settings;
use crate::types::{ServiceError, ValidationSettings};

/// Every rule parameter the validation service reads, compiled once.
///
/// A snapshot is never modified after it is built; reloading builds a new one.
#[derive(Debug, Clone)]
pub struct RuleSnapshot {
    pub password: PasswordRules,
    pub max_registrations_per_email: u32,
    pub email_domains: AccessList,
    pub names: NameRestrictions,
    pub countries: AccessList,
}

impl RuleSnapshot {
    pub fn build(settings: &ValidationSettings) -> Result<Self, ServiceError> {
        validate_settings(settings)?;

        Ok(Self {
            password: PasswordRules::from_settings(&settings.password)?,
            max_registrations_per_email: settings.email.max_registrations,
            email_domains: AccessList::new(
                &settings.email.domain_whitelist,
                &settings.email.domain_blacklist,
            ),
            names: NameRestrictions::from_settings(&settings.restrictions)?,
            countries: AccessList::new(
                &settings.protection.countries_whitelist,
                &settings.protection.countries_blacklist,
            ),
        })
    }
}
