use std::env;
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.impact-dashboard.org/v1";
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
pub const DEFAULT_MAP_ZOOM: u8 = 6;
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Runtime settings shared by both frontends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub items_per_page: NonZeroUsize,
    pub default_zoom: u8,
    pub request_timeout: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            items_per_page: NonZeroUsize::new(DEFAULT_ITEMS_PER_PAGE).unwrap_or(NonZeroUsize::MIN),
            default_zoom: DEFAULT_MAP_ZOOM,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl DashboardConfig {
    /// Read settings from the process environment, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`DashboardConfig::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let api_base_url = lookup("IMPACT_API_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_base_url);

        let items_per_page = parse(&lookup, "ITEMS_PER_PAGE", "a positive integer")?
            .unwrap_or(defaults.items_per_page);

        let default_zoom = match parse::<u8>(&lookup, "MAP_DEFAULT_ZOOM", "a zoom level 0-20")? {
            Some(zoom) if zoom > 20 => {
                return Err(ConfigError::Invalid {
                    name: "MAP_DEFAULT_ZOOM",
                    expected: "a zoom level 0-20",
                    value: zoom.to_string(),
                })
            }
            Some(zoom) => zoom,
            None => defaults.default_zoom,
        };

        let request_timeout = parse::<u64>(&lookup, "REQUEST_TIMEOUT_SECS", "a number of seconds")?
            .map_or(defaults.request_timeout, Duration::from_secs);

        Ok(Self {
            api_base_url,
            items_per_page,
            default_zoom,
            request_timeout,
        })
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };

    raw.trim()
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::Invalid {
            name,
            expected,
            value: raw,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn unset_environment_uses_defaults() {
        let config = DashboardConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.items_per_page.get(), DEFAULT_ITEMS_PER_PAGE);
    }

    #[test]
    fn reads_every_setting() {
        let config = DashboardConfig::from_lookup(lookup(&[
            ("IMPACT_API_URL", " http://localhost:8080/api "),
            ("ITEMS_PER_PAGE", "25"),
            ("MAP_DEFAULT_ZOOM", "4"),
            ("REQUEST_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8080/api");
        assert_eq!(config.items_per_page.get(), 25);
        assert_eq!(config.default_zoom, 4);
        assert_eq!(config.request_timeout, Duration::from_secs(3));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let error = DashboardConfig::from_lookup(lookup(&[("ITEMS_PER_PAGE", "0")])).unwrap_err();
        assert_eq!(
            error.to_string(),
            "ITEMS_PER_PAGE must be a positive integer, got \"0\""
        );
    }

    #[test]
    fn out_of_range_zoom_is_rejected() {
        assert!(DashboardConfig::from_lookup(lookup(&[("MAP_DEFAULT_ZOOM", "21")])).is_err());
        assert!(DashboardConfig::from_lookup(lookup(&[("MAP_DEFAULT_ZOOM", "far")])).is_err());
    }
}
