mod ipgeolocation_client;

pub use ipgeolocation_client::GeolocationClient;
