mod geolocation_provider;

pub use geolocation_provider::GeolocationProvider;
