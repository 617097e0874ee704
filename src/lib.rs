//! ipgeolocation Library
//!
//! Client for the ipgeolocation.io IP geolocation API. A lookup builds an
//! authenticated GET request, sends it once, and decodes the JSON answer
//! into a [`GeolocationResult`].

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;

// Re-export commonly used types
pub use adapters::outbound::GeolocationClient;
pub use config::{load_config, Config};
pub use domain::entities::{Currency, GeolocationResult, TimeZone};
pub use domain::ports::GeolocationProvider;
pub use error::GeolocationError;
