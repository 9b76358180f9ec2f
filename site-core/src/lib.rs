//! Platform-free behavior for the Three Degree site
//!
//! Everything here is plain Rust so it can be exercised on the host:
//! - `site-ui` drives these types from live DOM state (WASM)
//! - unit and integration tests drive them directly
//!
//! The browser crate owns element lookup, listeners and timers; this crate
//! owns the arithmetic and the rules.

pub mod chart;
pub mod config;
pub mod countdown;
pub mod forms;
pub mod slider;
pub mod tabs;
pub mod theme;
pub mod toggle;

pub use chart::{BarSpec, Surface};
pub use config::{ChartConfig, ConfigError, SiteConfig};
pub use countdown::Remaining;
pub use forms::{AlertKind, Control, FormKind, FormSnapshot, Invalid, ValidationError};
pub use slider::{Autoplay, SlideMode, SliderState};
pub use theme::{PreferenceStore, Theme, ThemeController};
pub use toggle::Region;

// ============================================================================
// Marker classes
// ============================================================================

pub const CLASS_OPEN: &str = "is-open";
pub const CLASS_ACTIVE: &str = "is-active";
pub const CLASS_NO_SCROLL: &str = "no-scroll";
pub const CLASS_THEME_DARK: &str = "theme-dark";
pub const CLASS_THEME_LIGHT: &str = "theme-light";
pub const CLASS_FORM_ALERT: &str = "form-alert";

// ============================================================================
// Selectors
// ============================================================================

pub const SEL_DROPDOWN: &str = "[data-dropdown]";
pub const SEL_DROPDOWN_TOGGLE: &str = "[data-dropdown-toggle]";
pub const SEL_THEME_TOGGLE: &str = "[data-theme-toggle]";
pub const SEL_SLIDER: &str = "[data-slider]";
pub const SEL_SLIDER_TRACK: &str = ".slider-track, .carousel-track";
pub const SEL_SLIDER_ITEM: &str = "[data-slider-item], .carousel-slide, figure";
pub const SEL_SLIDER_PREV: &str = "[data-slider-prev]";
pub const SEL_SLIDER_NEXT: &str = "[data-slider-next]";
pub const SEL_SLIDER_DOTS: &str = "[data-slider-dots]";
pub const SEL_MENU_TABS: &str = "[data-menu-tabs]";
pub const SEL_MENU_TAB: &str = ".menu-tab";
pub const SEL_MENU_PANEL: &str = "[data-menu-panel]";
pub const SEL_YEAR: &str = "[data-year]";
pub const SEL_COUNTDOWN: &str = "[data-countdown]";
pub const SEL_COUNTDOWN_DAYS: &str = "[data-countdown-days]";
pub const SEL_COUNTDOWN_HOURS: &str = "[data-countdown-hours]";
pub const SEL_COUNTDOWN_MINUTES: &str = "[data-countdown-minutes]";
pub const SEL_COUNTDOWN_SECONDS: &str = "[data-countdown-seconds]";
pub const SEL_FORM: &str = "[data-form]";
pub const SEL_MODAL: &str = ".modal";
pub const SEL_OPEN_MODAL: &str = "[data-open-modal]";
pub const SEL_CLOSE_MODAL: &str = "[data-close-modal]";
pub const SEL_ADMIN_SIDEBAR: &str = "[data-admin-sidebar]";
pub const SEL_SIDEBAR_TOGGLE: &str = "[data-sidebar-toggle]";
pub const SEL_ACCORDION: &str = "[data-accordion]";
pub const SEL_ACCORDION_ITEM: &str = ".accordion-item";
pub const SEL_ACCORDION_TRIGGER: &str = ".accordion-trigger";
pub const SEL_ACCORDION_CONTENT: &str = ".accordion-content";

pub const ID_ORDERS_CHART: &str = "ordersChart";
pub const ID_RESERVATIONS_CHART: &str = "reservationsChart";
pub const ID_SITE_CONFIG: &str = "site-config";

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// ============================================================================
// Tests
// ============================================================================
