use std::fmt;

/// Production endpoint of the IP geolocation API.
pub const DEFAULT_BASE_URL: &str = "https://api.ipgeolocation.io/ipgeo";

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    /// Log raw response bodies before parsing
    pub verbose: bool,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            verbose: false,
            debug: false,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("verbose", &self.verbose)
            .field("debug", &self.debug)
            .finish()
    }
}

pub fn load_config() -> anyhow::Result<Config> {
    load_config_from(|name| std::env::var(name).ok())
}

/// Build a [`Config`] from an arbitrary variable lookup.
pub fn load_config_from<F>(var: F) -> anyhow::Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let api_key = match var("IPGEOLOCATION_API_KEY") {
        Some(key) if !key.trim().is_empty() => key.trim().to_string(),
        _ => anyhow::bail!("IPGEOLOCATION_API_KEY is required"),
    };

    let base_url = var("IPGEOLOCATION_BASE_URL")
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let verbose = var("IPGEOLOCATION_VERBOSE")
        .map(|v| v == "1" || v.to_lowercase() == "true")
        .unwrap_or(false);

    let debug = var("DEBUG").is_some();

    Ok(Config {
        api_key,
        base_url,
        verbose,
        debug,
    })
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        load_config_from(|name| map.get(name).cloned())
    }

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert!(!cfg.verbose);
        assert!(!cfg.debug);
    }

    #[test]
    fn test_load_config_defaults() {
        let cfg = load(&[("IPGEOLOCATION_API_KEY", "secret")]).unwrap();
        assert_eq!(cfg.api_key, "secret");
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert!(!cfg.verbose);
        assert!(!cfg.debug);
    }

    #[test]
    fn test_load_config_missing_api_key() {
        let err = load(&[]).unwrap_err();
        assert!(err.to_string().contains("IPGEOLOCATION_API_KEY"));
    }

    #[test]
    fn test_load_config_blank_api_key() {
        assert!(load(&[("IPGEOLOCATION_API_KEY", "  ")]).is_err());
    }

    #[test]
    fn test_load_config_with_base_url() {
        let cfg = load(&[
            ("IPGEOLOCATION_API_KEY", "secret"),
            ("IPGEOLOCATION_BASE_URL", "http://127.0.0.1:9000/ipgeo"),
        ])
        .unwrap();
        assert_eq!(cfg.base_url, "http://127.0.0.1:9000/ipgeo");
    }

    #[test]
    fn test_load_config_empty_base_url_uses_default() {
        let cfg = load(&[
            ("IPGEOLOCATION_API_KEY", "secret"),
            ("IPGEOLOCATION_BASE_URL", ""),
        ])
        .unwrap();
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_load_config_with_verbose_true() {
        let cfg = load(&[
            ("IPGEOLOCATION_API_KEY", "secret"),
            ("IPGEOLOCATION_VERBOSE", "TRUE"),
        ])
        .unwrap();
        assert!(cfg.verbose);
    }

    #[test]
    fn test_load_config_with_verbose_1() {
        let cfg = load(&[
            ("IPGEOLOCATION_API_KEY", "secret"),
            ("IPGEOLOCATION_VERBOSE", "1"),
        ])
        .unwrap();
        assert!(cfg.verbose);
    }

    #[test]
    fn test_load_config_verbose_other_value() {
        let cfg = load(&[
            ("IPGEOLOCATION_API_KEY", "secret"),
            ("IPGEOLOCATION_VERBOSE", "yes please"),
        ])
        .unwrap();
        assert!(!cfg.verbose);
    }

    #[test]
    fn test_load_config_with_debug() {
        let cfg = load(&[("IPGEOLOCATION_API_KEY", "secret"), ("DEBUG", "")]).unwrap();
        assert!(cfg.debug);
    }

    #[test]
    fn test_config_debug_redacts_api_key() {
        let cfg = load(&[("IPGEOLOCATION_API_KEY", "super-secret")]).unwrap();
        let debug_str = format!("{:?}", cfg);
        assert!(debug_str.contains("base_url"));
        assert!(!debug_str.contains("super-secret"));
    }
}
