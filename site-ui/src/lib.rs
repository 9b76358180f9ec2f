//! Browser behavior for the Three Degree site.
//!
//! Each component looks up its own marker elements and wires listeners and
//! timers once at boot. Components are independent: missing markup makes a
//! component a no-op, and a failing component is logged without stopping
//! the rest.

pub mod accordion;
pub mod charts;
pub mod config;
pub mod countdown;
pub mod dom;
pub mod dropdown;
pub mod error;
pub mod forms;
pub mod modal;
pub mod sidebar;
pub mod slider;
pub mod tabs;
pub mod theme;
pub mod year;

pub use error::UiError;

use site_core::SiteConfig;

/// Initialize every component against the loaded page.
pub fn boot(config: &SiteConfig) {
    start("dropdowns", dropdown::init());
    start("theme", theme::init(config));
    start("sliders", slider::init(config));
    start("menu tabs", tabs::init());
    start("year", year::init());
    start("countdowns", countdown::init(config));
    start("forms", forms::init(config));
    start("modals", modal::init());
    start("admin sidebar", sidebar::init());
    start("charts", charts::init(config));
    start("accordions", accordion::init());
}

fn start(component: &str, result: Result<(), UiError>) {
    match result {
        Ok(()) => log::debug!("{} ready", component),
        Err(err) => log::warn!("Failed to initialize {}: {}", component, err),
    }
}
