//! Geo-IP lookup used by the country admission rule

use crate::types::ServiceError;
use async_trait::async_trait;

/// Resolves IP addresses to ISO 3166-1 alpha-2 country codes.
///
/// Implementations may hit a remote database and be slow; the validation
/// service only calls them when a country list is configured.
#[async_trait]
pub trait GeoIpService: Send + Sync {
    async fn get_country_code(&self, ip_address: &str) -> Result<String, ServiceError>;
}
