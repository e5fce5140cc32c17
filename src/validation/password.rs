//! Password validation rules.
//!
//! Checks run in a fixed order and the first failing one is reported:
//! - Password equal to the username
//! - Characters outside the allowed pattern
//! - Length outside the configured bounds
//! - Known unsafe passwords

use crate::message::{MessageKey, ValidationResult};
use crate::types::{PasswordSettings, ServiceError};
use regex::Regex;
use std::collections::HashSet;

/// Compiled password rules
#[derive(Debug, Clone)]
pub struct PasswordRules {
    /// Pattern as configured, reported back to players
    pattern: String,
    /// Pattern anchored at both ends
    regex: Regex,
    min_length: usize,
    max_length: usize,
    unsafe_passwords: HashSet<String>,
}

impl PasswordRules {
    pub fn from_settings(settings: &PasswordSettings) -> Result<Self, ServiceError> {
        Ok(Self {
            pattern: settings.allowed_characters.clone(),
            regex: compile_full_match(&settings.allowed_characters)?,
            min_length: settings.min_length,
            max_length: settings.max_length,
            unsafe_passwords: settings.unsafe_passwords.iter().cloned().collect(),
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Validates a password chosen by `username`
    pub fn validate(&self, password: &str, username: &str) -> ValidationResult {
        if password.to_lowercase() == username.to_lowercase() {
            return ValidationResult::error(MessageKey::PasswordIsUsername);
        }

        if !self.regex.is_match(password) {
            return ValidationResult::error_with_args(
                MessageKey::PasswordCharactersError,
                [self.pattern.as_str()],
            );
        }

        let length = password.chars().count();
        if length < self.min_length || length > self.max_length {
            return ValidationResult::error(MessageKey::InvalidPasswordLength);
        }

        if self.unsafe_passwords.contains(password) {
            return ValidationResult::error(MessageKey::PasswordUnsafe);
        }

        ValidationResult::Valid
    }
}

/// Compiles `pattern` so that it must match the whole input.
///
/// The raw pattern is compiled first: an unbalanced group would otherwise
/// escape the anchoring wrapper and still compile.
pub(crate) fn compile_full_match(pattern: &str) -> Result<Regex, ServiceError> {
    let invalid = |source| ServiceError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    };
    Regex::new(pattern).map_err(invalid)?;
    Regex::new(&format!("^(?:{pattern})$")).map_err(invalid)
}
