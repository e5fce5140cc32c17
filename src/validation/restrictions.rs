//! Player name restrictions.
//!
//! Two independent rules live here: names exempt from restrictions
//! ("unrestricted" names, e.g. NPCs), and restricted users whose name may only
//! be used from given IP addresses or hostnames.

use super::lists::lowercase_set;
use super::password::compile_full_match;
use crate::types::{RestrictionSettings, ServiceError};
use regex::Regex;
use std::collections::{HashMap, HashSet};

const REGEX_PREFIX: &str = "regex:";

/// Where a restricted name may connect from
#[derive(Debug, Clone)]
pub enum HostRestriction {
    /// IP address or hostname, compared case-insensitively
    Exact(String),
    /// Must fully match the IP address or the hostname
    Pattern(Regex),
}

impl HostRestriction {
    fn parse(value: &str) -> Result<Self, ServiceError> {
        match value.strip_prefix(REGEX_PREFIX) {
            Some(pattern) => Ok(HostRestriction::Pattern(compile_full_match(pattern)?)),
            None => Ok(HostRestriction::Exact(value.to_lowercase())),
        }
    }

    pub fn matches(&self, ip: &str, hostname: &str) -> bool {
        match self {
            HostRestriction::Exact(value) => {
                value.eq_ignore_ascii_case(ip) || value.eq_ignore_ascii_case(hostname)
            },
            HostRestriction::Pattern(regex) => regex.is_match(ip) || regex.is_match(hostname),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NameRestrictions {
    unrestricted: HashSet<String>,
    restricted_users_enabled: bool,
    restricted_users: HashMap<String, Vec<HostRestriction>>,
}

impl NameRestrictions {
    pub fn from_settings(settings: &RestrictionSettings) -> Result<Self, ServiceError> {
        let mut restricted_users: HashMap<String, Vec<HostRestriction>> = HashMap::new();

        for entry in &settings.restricted_users {
            let Some((name, restriction)) = entry.split_once(';') else {
                log::warn!("Skipping restricted user entry '{}': expected 'name;ip'", entry);
                continue;
            };
            let (name, restriction) = (name.trim(), restriction.trim());
            if name.is_empty() || restriction.is_empty() {
                log::warn!("Skipping restricted user entry '{}': empty name or restriction", entry);
                continue;
            }

            restricted_users
                .entry(name.to_lowercase())
                .or_default()
                .push(HostRestriction::parse(restriction)?);
        }

        Ok(Self {
            unrestricted: lowercase_set(&settings.unrestricted_names),
            restricted_users_enabled: settings.enable_restricted_users,
            restricted_users,
        })
    }

    pub fn is_unrestricted(&self, name: &str) -> bool {
        self.unrestricted.contains(&name.to_lowercase())
    }

    /// Whether `name` may join from `ip` / `hostname`
    pub fn fulfills_name_restrictions(&self, name: &str, ip: &str, hostname: &str) -> bool {
        if !self.restricted_users_enabled {
            return true;
        }

        match self.restricted_users.get(&name.to_lowercase()) {
            Some(restrictions) => restrictions.iter().any(|r| r.matches(ip, hostname)),
            None => true,
        }
    }
}
