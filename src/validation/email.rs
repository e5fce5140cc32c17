//! Email address validation

use super::lists::AccessList;
use once_cell::sync::Lazy;
use regex::Regex;

/// Address shipped in the default messages; never a real player's email
pub const PLACEHOLDER_EMAIL: &str = "your@email.com";

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .unwrap()
});

/// Syntax check only: `local@domain.tld`, no placeholder address
pub fn is_email_correct(email: &str) -> bool {
    !email.is_empty()
        && !email.eq_ignore_ascii_case(PLACEHOLDER_EMAIL)
        && EMAIL_REGEX.is_match(email)
}

/// Domain part of an address, lower-cased
pub fn domain_of(email: &str) -> Option<String> {
    email.rsplit_once('@').map(|(_, domain)| domain.to_lowercase())
}

/// Validates an email address against the syntax rules and the domain lists
pub fn validate_email(domains: &AccessList, email: &str) -> bool {
    if !is_email_correct(email) {
        log::debug!("Rejected malformed email '{}'", email);
        return false;
    }

    match domain_of(email) {
        Some(domain) => domains.admits(&domain),
        None => false,
    }
}
