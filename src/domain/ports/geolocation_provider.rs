//! Geolocation Provider Port
//!
//! Defines the interface for resolving IP addresses to geolocation records.

use crate::domain::entities::GeolocationResult;
use crate::error::GeolocationError;
use async_trait::async_trait;

/// Provider of IP geolocation lookups.
///
/// This is an outbound port that abstracts the remote geolocation service.
/// Callers depend on this trait and stay unaware of the HTTP details.
#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    /// Look up the geolocation of `ip`.
    ///
    /// `None` or an empty string resolves the caller's own public address.
    async fn fetch_geolocation(&self, ip: Option<&str>)
        -> Result<GeolocationResult, GeolocationError>;
}
