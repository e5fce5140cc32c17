//! Message keys and validation results.
//!
//! A failed rule is reported as a [`MessageKey`] plus positional arguments.
//! Turning that into player-facing text is left to the localization layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Keys of the messages a validation rule can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageKey {
    PasswordIsUsername,
    PasswordCharactersError,
    InvalidPasswordLength,
    PasswordUnsafe,
}

impl MessageKey {
    /// Path of the message in the localization files
    pub fn key(&self) -> &'static str {
        match self {
            MessageKey::PasswordIsUsername => "password.name_in_password",
            MessageKey::PasswordCharactersError => "password.forbidden_characters",
            MessageKey::InvalidPasswordLength => "password.wrong_length",
            MessageKey::PasswordUnsafe => "password.unsafe_password",
        }
    }

    /// Placeholders the message text may contain, in argument order
    pub fn tags(&self) -> &'static [&'static str] {
        match self {
            MessageKey::PasswordCharactersError => &["%valid_chars"],
            _ => &[],
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Outcome of a validation that can fail with a message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationResult {
    #[default]
    Valid,
    Invalid {
        key: MessageKey,
        args: Vec<String>,
    },
}

impl ValidationResult {
    pub fn error(key: MessageKey) -> Self {
        ValidationResult::Invalid {
            key,
            args: Vec::new(),
        }
    }

    pub fn error_with_args<I, S>(key: MessageKey, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ValidationResult::Invalid {
            key,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_error(&self) -> bool {
        matches!(self, ValidationResult::Invalid { .. })
    }

    pub fn message_key(&self) -> Option<MessageKey> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid {
                key,
                ..
            } => Some(*key),
        }
    }

    /// Interpolation arguments; empty when there is no error
    pub fn args(&self) -> &[String] {
        match self {
            ValidationResult::Valid => &[],
            ValidationResult::Invalid {
                args,
                ..
            } => args,
        }
    }
}
