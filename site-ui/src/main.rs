use site_core::SiteConfig;
use site_ui::config::{load_site_config, log_level};

fn main() {
    let (config, config_error) = match load_site_config() {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };

    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::new(log_level(&config)));
    if let Some(err) = config_error {
        log::warn!("Failed to load site config, using defaults: {}", err);
    }

    site_ui::boot(&config);
}
