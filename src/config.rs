//! Static store configuration.
//!
//! Loaded once at startup and shared read-only. Every value has a built-in
//! default and can be overridden through the environment:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | STORE_CURRENCY | ৳ | Currency symbol prefixed to amounts |
//! | DELIVERY_CHARGE_CAPITAL | 60 | Flat charge inside the capital |
//! | DELIVERY_CHARGE_OTHER | 120 | Flat charge everywhere else |
//! | DELIVERY_AREAS | built-in district list | Comma-separated area labels |
//! | WHATSAPP_NUMBER | 8801700000000 | Messaging recipient id |
//! | FEATURED_LIMIT | 4 | Products shown in the featured strip |
//! | CATALOG_PATH | unset | JSON catalog file, seed data when unset |

use std::path::PathBuf;
use crate::error::ConfigError;

/// Delivery rates and the area enumeration they apply to.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryConfig {
    pub capital_rate: u64,
    pub other_rate: u64,
    /// Matched case-insensitively as a substring of the area label.
    pub capital_keyword: String,
    /// Local-script spelling of the capital, matched literally.
    pub capital_keyword_local: String,
    pub areas: Vec<String>,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            capital_rate: 60,
            other_rate: 120,
            capital_keyword: "dhaka".to_string(),
            capital_keyword_local: "ঢাকা".to_string(),
            areas: DEFAULT_AREAS.iter().map(|a| a.to_string()).collect(),
        }
    }
}

const DEFAULT_AREAS: &[&str] = &[
    "Dhaka",
    "Gazipur",
    "Narayanganj",
    "Chattogram",
    "Cumilla",
    "Sylhet",
    "Rajshahi",
    "Khulna",
    "Barishal",
    "Rangpur",
    "Mymensingh",
];

#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub store_name: String,
    pub currency: String,
    pub delivery: DeliveryConfig,
    /// Base of the messaging deep link, without trailing slash.
    pub messaging_base_url: String,
    pub recipient_id: String,
    pub featured_limit: usize,
    pub catalog_path: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_name: "INAYA".to_string(),
            currency: "৳".to_string(),
            delivery: DeliveryConfig::default(),
            messaging_base_url: "https://wa.me".to_string(),
            recipient_id: "8801700000000".to_string(),
            featured_limit: crate::catalog::DEFAULT_FEATURED_LIMIT,
            catalog_path: None,
        }
    }
}

impl StoreConfig {
    /// Loads `.env` (if present) and overlays the process environment on the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is the normal case.
        let _ = dotenvy::dotenv();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(currency) = lookup("STORE_CURRENCY") {
            config.currency = currency;
        }
        if let Some(rate) = parse_var(&lookup, "DELIVERY_CHARGE_CAPITAL")? {
            config.delivery.capital_rate = rate;
        }
        if let Some(rate) = parse_var(&lookup, "DELIVERY_CHARGE_OTHER")? {
            config.delivery.other_rate = rate;
        }
        if let Some(areas) = lookup("DELIVERY_AREAS") {
            let areas: Vec<String> = areas
                .split(',')
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(String::from)
                .collect();
            if areas.is_empty() {
                return Err(ConfigError::EmptyAreaList);
            }
            config.delivery.areas = areas;
        }
        if let Some(number) = lookup("WHATSAPP_NUMBER") {
            config.recipient_id = number;
        }
        if let Some(limit) = parse_var(&lookup, "FEATURED_LIMIT")? {
            config.featured_limit = limit;
        }
        config.catalog_path = lookup("CATALOG_PATH").map(PathBuf::from);

        Ok(config)
    }

    pub fn is_known_area(&self, area: &str) -> bool {
        self.delivery.areas.iter().any(|a| a == area)
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
    }
}
