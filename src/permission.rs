//! Permission checks consulted by the validation rules

use std::fmt;

/// Permissions tied to a player's state rather than to a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerStatePermission {
    /// Register more accounts per email than the configured maximum
    AllowMultipleAccounts,
}

impl PlayerStatePermission {
    /// Permission node as known to the permissions system
    pub fn node(&self) -> &'static str {
        match self {
            PlayerStatePermission::AllowMultipleAccounts => "authgate.allowmultipleaccounts",
        }
    }
}

impl fmt::Display for PlayerStatePermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.node())
    }
}

/// Bridge to whatever permissions system the server runs
pub trait PermissionsManager: Send + Sync {
    /// Whether `requester` (a player or console name) holds `permission`
    fn has_permission(&self, requester: &str, permission: PlayerStatePermission) -> bool;
}
