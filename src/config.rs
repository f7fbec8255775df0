// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration.
//!
//! `Config::default()` carries the stock map settings. Hosts that want to
//! override them call `Config::from_env()`, which reads an optional `.env`
//! file and then the variables below.

use std::env;
use std::time::Duration;

/// Initial map zoom level.
pub const DEFAULT_MAP_ZOOM: u8 = 13;

/// Highest zoom level tile servers commonly provide.
pub const MAX_MAP_ZOOM: u8 = 19;

/// Default tile source.
pub const DEFAULT_TILE_URL: &str = "https://tile.openstreetmap.fr/hot/{z}/{x}/{y}.png";

/// Attribution required by the default tile source.
pub const DEFAULT_TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// How long to wait for a position before degrading the session.
pub const DEFAULT_GEOLOCATION_TIMEOUT_SECS: u64 = 10;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Structured JSON, one event per line
    #[default]
    Json,
    /// Human-readable single line
    Compact,
}

/// Marker popup behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupOptions {
    pub max_width: u32,
    pub min_width: u32,
    /// Close when another popup opens
    pub auto_close: bool,
    /// Close when the map is clicked
    pub close_on_click: bool,
}

impl Default for PopupOptions {
    fn default() -> Self {
        Self {
            max_width: 250,
            min_width: 100,
            auto_close: false,
            close_on_click: false,
        }
    }
}

/// Application configuration, loaded once by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Zoom level the map opens at
    pub map_zoom: u8,
    /// Tile URL template
    pub tile_url: String,
    /// Tile attribution HTML
    pub tile_attribution: String,
    /// Geolocation deadline; `None` waits indefinitely
    pub geolocation_timeout: Option<Duration>,
    pub log_format: LogFormat,
    pub popup: PopupOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            map_zoom: DEFAULT_MAP_ZOOM,
            tile_url: DEFAULT_TILE_URL.to_string(),
            tile_attribution: DEFAULT_TILE_ATTRIBUTION.to_string(),
            geolocation_timeout: Some(Duration::from_secs(DEFAULT_GEOLOCATION_TIMEOUT_SECS)),
            log_format: LogFormat::default(),
            popup: PopupOptions::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable is optional:
    /// - `MAP_ZOOM` (0..=19)
    /// - `MAP_TILE_URL`
    /// - `MAP_TILE_ATTRIBUTION`
    /// - `GEOLOCATION_TIMEOUT_SECS` (0 disables the timeout)
    /// - `LOG_FORMAT` (`json` or `compact`)
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let map_zoom = match lookup("MAP_ZOOM") {
            Some(raw) => match raw.trim().parse::<u8>() {
                Ok(zoom) if zoom <= MAX_MAP_ZOOM => zoom,
                _ => return Err(ConfigError::invalid("MAP_ZOOM", raw)),
            },
            None => defaults.map_zoom,
        };

        let geolocation_timeout = match lookup("GEOLOCATION_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(0) => None,
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(_) => return Err(ConfigError::invalid("GEOLOCATION_TIMEOUT_SECS", raw)),
            },
            None => defaults.geolocation_timeout,
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "json" => LogFormat::Json,
                "compact" => LogFormat::Compact,
                _ => return Err(ConfigError::invalid("LOG_FORMAT", raw)),
            },
            None => defaults.log_format,
        };

        Ok(Self {
            map_zoom,
            tile_url: lookup("MAP_TILE_URL")
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.tile_url),
            tile_attribution: lookup("MAP_TILE_ATTRIBUTION").unwrap_or(defaults.tile_attribution),
            geolocation_timeout,
            log_format,
            popup: defaults.popup,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

impl ConfigError {
    fn invalid(var: &'static str, value: String) -> Self {
        ConfigError::Invalid { var, value }
    }
}
