//! Page-level configuration.
//!
//! Pages may embed `<script type="application/json" id="site-config">` to
//! override any of these values; every field has a default so a partial
//! (or absent) document is fine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chart::{default_orders, default_reservations, BarSpec};
use crate::countdown::DEFAULT_TICK_MS;
use crate::forms::DEFAULT_MIN_PASSWORD_LEN;
use crate::slider::DEFAULT_AUTOPLAY_MS;
use crate::theme::DEFAULT_THEME_KEY;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid site config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
    pub theme_key: String,
    pub autoplay_interval_ms: u32,
    pub countdown_tick_ms: u32,
    pub min_password_len: usize,
    pub chart: ChartConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
            autoplay_interval_ms: DEFAULT_AUTOPLAY_MS,
            countdown_tick_ms: DEFAULT_TICK_MS,
            min_password_len: DEFAULT_MIN_PASSWORD_LEN,
            chart: ChartConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.theme_key.trim().is_empty() {
            return Err(ConfigError::Invalid("theme_key must not be empty".into()));
        }
        if self.autoplay_interval_ms == 0 || self.countdown_tick_ms == 0 {
            return Err(ConfigError::Invalid("timer intervals must be positive".into()));
        }
        if self.chart.padding < 0.0 {
            return Err(ConfigError::Invalid("chart padding must not be negative".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub padding: f64,
    pub line_width: f64,
    pub marker_radius: f64,
    pub corner_radius: f64,
    /// CSS custom property used for the orders line and its markers.
    pub line_color: String,
    pub orders: Vec<f64>,
    pub reservations: Vec<BarSpec>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            padding: 32.0,
            line_width: 2.0,
            marker_radius: 4.0,
            corner_radius: 6.0,
            line_color: "--color-sage".to_string(),
            orders: default_orders(),
            reservations: default_reservations(),
        }
    }
}
