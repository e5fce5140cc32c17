//! Validation service.
//!
//! Owns the current [`RuleSnapshot`] and answers the validation queries made
//! during login and registration: password and email acceptability, the
//! per-email registration quota, unrestricted and restricted names, and geo-IP
//! country admission.
//!
//! The snapshot is swapped as a whole on [`ValidationService::reload`]; a
//! query always runs against a single snapshot, never a mix of old and new.

pub mod email;
pub mod lists;
pub mod password;
pub mod restrictions;
pub mod snapshot;

pub use snapshot::RuleSnapshot;

use crate::config::SettingsSource;
use crate::datasource::DataSource;
use crate::geoip::GeoIpService;
use crate::message::ValidationResult;
use crate::permission::{PermissionsManager, PlayerStatePermission};
use crate::types::ServiceError;
use crate::{SERVICE_NAME, VERSION};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

/// Rule checks over the current configuration snapshot
pub struct ValidationService {
    settings: Arc<dyn SettingsSource>,
    data_source: Arc<dyn DataSource>,
    permissions: Arc<dyn PermissionsManager>,
    geo_ip: Arc<dyn GeoIpService>,
    rules: RwLock<Arc<RuleSnapshot>>,
    /// Held from settings load to snapshot swap so reloads cannot overtake each other
    reload_lock: Mutex<()>,
}

impl ValidationService {
    /// Creates the service and builds the initial snapshot.
    ///
    /// Fails if the settings cannot be read or do not describe valid rules.
    pub fn new(
        settings: Arc<dyn SettingsSource>,
        data_source: Arc<dyn DataSource>,
        permissions: Arc<dyn PermissionsManager>,
        geo_ip: Arc<dyn GeoIpService>,
    ) -> Result<Self, ServiceError> {
        let rules = Self::load_rules(settings.as_ref())?;
        log::info!("{} {} validation rules loaded", SERVICE_NAME, VERSION);

        Ok(Self {
            settings,
            data_source,
            permissions,
            geo_ip,
            rules: RwLock::new(Arc::new(rules)),
            reload_lock: Mutex::new(()),
        })
    }

    fn load_rules(settings: &dyn SettingsSource) -> Result<RuleSnapshot, ServiceError> {
        RuleSnapshot::build(&settings.load()?)
    }

    /// Current snapshot
    pub fn rules(&self) -> Arc<RuleSnapshot> {
        self.rules.read().clone()
    }

    /// Re-reads the settings and replaces the snapshot.
    ///
    /// On error the previous snapshot stays in place.
    pub fn reload(&self) -> Result<(), ServiceError> {
        let _guard = self.reload_lock.lock();
        let rules = match Self::load_rules(self.settings.as_ref()) {
            Ok(rules) => rules,
            Err(e) => {
                log::warn!("Keeping previous validation rules, reload failed: {}", e);
                return Err(e);
            },
        };

        *self.rules.write() = Arc::new(rules);
        log::info!("{} {} validation rules reloaded", SERVICE_NAME, VERSION);
        Ok(())
    }

    /// Verifies whether a password is valid according to the settings
    pub fn validate_password(&self, password: &str, username: &str) -> ValidationResult {
        let result = self.rules().password.validate(password, username);
        if let Some(key) = result.message_key() {
            log::debug!("Rejected password for {}: {}", username, key);
        }
        result
    }

    /// Verifies whether the email address is valid and admitted by the domain lists
    pub fn validate_email(&self, email: &str) -> bool {
        email::validate_email(&self.rules().email_domains, email)
    }

    /// Whether `requester` may register another account with `email`.
    ///
    /// Requesters allowed to hold multiple accounts bypass the quota and the
    /// data source is not queried for them.
    pub async fn is_email_free_for_registration(
        &self,
        email: &str,
        requester: &str,
    ) -> Result<bool, ServiceError> {
        if self.permissions.has_permission(requester, PlayerStatePermission::AllowMultipleAccounts) {
            return Ok(true);
        }

        let max = self.rules().max_registrations_per_email;
        let count = self.data_source.count_auths_by_email(email).await?;
        if count >= max {
            log::debug!("Email {} already used by {} accounts (max {})", email, count, max);
            return Ok(false);
        }
        Ok(true)
    }

    /// Whether the name is exempt from restrictions
    pub fn is_unrestricted(&self, name: &str) -> bool {
        self.rules().names.is_unrestricted(name)
    }

    /// Whether a restricted name may join from the given address
    pub fn fulfills_name_restrictions(&self, name: &str, ip: &str, hostname: &str) -> bool {
        let admitted = self.rules().names.fulfills_name_restrictions(name, ip, hostname);
        if !admitted {
            log::debug!("Restricted user {} rejected from {} ({})", name, ip, hostname);
        }
        admitted
    }

    /// Whether a connection from `ip_address` is admitted by the country lists.
    ///
    /// The geo-IP service is only queried when a country list is configured.
    pub async fn is_country_admitted(&self, ip_address: &str) -> Result<bool, ServiceError> {
        let rules = self.rules();
        if rules.countries.is_empty() {
            return Ok(true);
        }

        let country = self.geo_ip.get_country_code(ip_address).await?;
        let admitted = rules.countries.admits(&country);
        if !admitted {
            log::debug!("Country {} of {} is not admitted", country, ip_address);
        }
        Ok(admitted)
    }
}
