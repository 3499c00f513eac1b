// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use log::LevelFilter;

use crate::breach::{rate_limiter::DEFAULT_MIN_INTERVAL, DEFAULT_TIMEOUT};

// Configuration for the generator service
#[derive(Debug, Clone)]
pub struct Config {
    // Breach lookup
    pub hibp_api_url: String,
    pub hibp_timeout: Duration,
    pub hibp_min_interval: Duration,
    pub hibp_user_agent: String,
    pub hibp_add_padding: bool,

    // Web Interface
    pub web_address: String,
    pub web_port: u16,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Breach lookup
            hibp_api_url: "https://api.pwnedpasswords.com/range/".to_string(),
            hibp_timeout: DEFAULT_TIMEOUT,
            hibp_min_interval: DEFAULT_MIN_INTERVAL,
            hibp_user_agent: "SecurePasswordGenerator/1.0".to_string(),
            hibp_add_padding: true,

            // Web Interface
            web_address: "0.0.0.0".to_string(),
            web_port: 8001,

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::load_from(|key| env::var(key).ok())
    }

    // Load configuration from any key lookup; unparsable values keep their default
    pub fn load_from<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Breach lookup
        if let Some(url) = lookup("HIBP_API_URL") {
            config.hibp_api_url = url;
        }

        if let Some(val) = lookup("HIBP_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse::<u64>() {
                config.hibp_timeout = Duration::from_secs(secs);
            }
        }

        if let Some(val) = lookup("HIBP_MIN_INTERVAL_MS") {
            if let Ok(ms) = val.parse::<u64>() {
                config.hibp_min_interval = Duration::from_millis(ms);
            }
        }

        if let Some(agent) = lookup("HIBP_USER_AGENT") {
            config.hibp_user_agent = agent;
        }

        if let Some(val) = lookup("HIBP_ADD_PADDING") {
            if let Ok(padding) = val.parse() {
                config.hibp_add_padding = padding;
            }
        }

        // Web Interface
        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        if let Some(val) = lookup("WEB_PORT") {
            if let Ok(port) = val.parse() {
                config.web_port = port;
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            if let Some(filter) = parse_level(&level) {
                config.log_level = filter;
            } else {
                log::warn!("Unknown log level '{}', keeping {}", level, config.log_level);
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.log_file = Some(PathBuf::from(file));
        }

        config
    }
}

pub fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}
