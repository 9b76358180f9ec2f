use std::str::FromStr;

use log::Level;
use site_core::{SiteConfig, ID_SITE_CONFIG};

use crate::dom;
use crate::error::UiError;

/// Read the page's embedded JSON configuration, if any.
///
/// A page without `#site-config` gets the defaults; a malformed one is an
/// error so the caller can fall back and say so once logging is up.
pub fn load_site_config() -> Result<SiteConfig, UiError> {
    let document = dom::document()?;
    let Some(script) = document.get_element_by_id(ID_SITE_CONFIG) else {
        return Ok(SiteConfig::default());
    };
    let raw = script.text_content().unwrap_or_default();
    if raw.trim().is_empty() {
        return Ok(SiteConfig::default());
    }
    Ok(SiteConfig::from_json(&raw)?)
}

pub fn log_level(config: &SiteConfig) -> Level {
    Level::from_str(config.log_level.trim()).unwrap_or(Level::Info)
}
