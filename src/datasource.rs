//! Account storage, as far as the validation rules need it

use crate::types::ServiceError;
use async_trait::async_trait;

/// Read access to registered accounts
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Number of accounts registered with the given email address
    async fn count_auths_by_email(&self, email: &str) -> Result<u32, ServiceError>;
}
