//! Whitelist/blacklist admission shared by the email domain and country rules

use std::collections::HashSet;

/// A whitelist and a blacklist of case-insensitive values.
///
/// A non-empty whitelist takes precedence: the blacklist is only consulted
/// when the whitelist is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessList {
    whitelist: HashSet<String>,
    blacklist: HashSet<String>,
}

impl AccessList {
    pub fn new<W, B>(whitelist: W, blacklist: B) -> Self
    where
        W: IntoIterator,
        W::Item: AsRef<str>,
        B: IntoIterator,
        B::Item: AsRef<str>,
    {
        Self {
            whitelist: lowercase_set(whitelist),
            blacklist: lowercase_set(blacklist),
        }
    }

    /// True when neither list has entries, i.e. everything is admitted
    pub fn is_empty(&self) -> bool {
        self.whitelist.is_empty() && self.blacklist.is_empty()
    }

    pub fn admits(&self, value: &str) -> bool {
        let value = value.to_lowercase();
        if !self.whitelist.is_empty() {
            return self.whitelist.contains(&value);
        }
        !self.blacklist.contains(&value)
    }
}

pub(crate) fn lowercase_set<I>(values: I) -> HashSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    values.into_iter().map(|v| v.as_ref().trim().to_lowercase()).collect()
}
