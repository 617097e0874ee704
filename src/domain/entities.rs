//! Domain Entities - Geolocation records
//!
//! These mirror the JSON document returned by the ipgeolocation.io
//! `/ipgeo` endpoint. Every field falls back to its zero value when the
//! provider omits it or sends `null`, so decoding only fails on JSON that
//! is malformed or has the wrong shape.
//!
//! See: https://ipgeolocation.io/documentation/ip-geolocation-api.html

use serde::{Deserialize, Deserializer, Serialize};

/// Geolocation of a single IP address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeolocationResult {
    #[serde(deserialize_with = "null_as_default")]
    pub ip: String,
    #[serde(deserialize_with = "null_as_default")]
    pub hostname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub continent_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub continent_name: String,
    /// ISO 3166-1 alpha-2 (US, BR, FR, ...)
    #[serde(deserialize_with = "null_as_default")]
    pub country_code2: String,
    /// ISO 3166-1 alpha-3 (USA, BRA, FRA, ...)
    #[serde(deserialize_with = "null_as_default")]
    pub country_code3: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country_capital: String,
    #[serde(rename = "state_prov", deserialize_with = "null_as_default")]
    pub state_province: String,
    #[serde(deserialize_with = "null_as_default")]
    pub district: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub zipcode: String,
    /// Decimal degrees, kept as the provider sends it
    #[serde(deserialize_with = "null_as_default")]
    pub latitude: String,
    /// Decimal degrees, kept as the provider sends it
    #[serde(deserialize_with = "null_as_default")]
    pub longitude: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_eu: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub calling_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country_tld: String,
    #[serde(deserialize_with = "null_as_default")]
    pub languages: String,
    /// URL of the flag image
    #[serde(deserialize_with = "null_as_default")]
    pub country_flag: String,
    #[serde(deserialize_with = "null_as_default")]
    pub geoname_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub isp: String,
    #[serde(deserialize_with = "null_as_default")]
    pub connection_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub organization: String,
    #[serde(deserialize_with = "null_as_default")]
    pub asn: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: Currency,
    #[serde(deserialize_with = "null_as_default")]
    pub time_zone: TimeZone,
}

impl GeolocationResult {
    /// Latitude and longitude parsed as floating point degrees.
    ///
    /// Returns None when either coordinate is missing or not a number.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let lat = self.latitude.trim().parse::<f64>().ok()?;
        let lon = self.longitude.trim().parse::<f64>().ok()?;
        Some((lat, lon))
    }
}

/// Local currency of the resolved country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    /// ISO 4217 code
    #[serde(deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
}

/// Time zone at the resolved location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeZone {
    /// IANA zone name (America/Los_Angeles)
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// UTC offset in hours, may be fractional
    #[serde(deserialize_with = "null_as_default")]
    pub offset: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub current_time: String,
    /// Seconds since the Unix epoch, with a fractional part
    #[serde(deserialize_with = "null_as_default")]
    pub current_time_unix: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub is_dst: bool,
    /// Daylight saving shift in seconds
    #[serde(deserialize_with = "null_as_default")]
    pub dst_savings: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
