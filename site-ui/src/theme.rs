use std::cell::RefCell;
use std::rc::Rc;

use site_core::{PreferenceStore, SiteConfig, Theme, ThemeController};
use site_core::{DARK_SCHEME_QUERY, SEL_THEME_TOGGLE};
use web_sys::{Event, MediaQueryListEvent, Storage};

use crate::dom;
use crate::error::UiError;

/// `localStorage`-backed theme preference under a single key.
pub struct LocalThemeStore {
    key: String,
}

impl LocalThemeStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

impl PreferenceStore for LocalThemeStore {
    fn load(&self) -> Option<Theme> {
        local_storage()
            .and_then(|storage| storage.get_item(&self.key).ok().flatten())
            .and_then(|theme| Theme::parse(&theme))
    }

    fn save(&self, theme: Theme) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(&self.key, theme.as_str());
        }
    }
}

pub fn apply_theme_to_document(theme: Theme) -> Result<(), UiError> {
    let body = dom::body()?;
    dom::set_class(&body, theme.class_name(), true);
    dom::set_class(&body, theme.toggled().class_name(), false);
    Ok(())
}

pub fn init(config: &SiteConfig) -> Result<(), UiError> {
    let window = dom::window()?;
    let document = dom::document()?;
    let scheme = window.match_media(DARK_SCHEME_QUERY)?;
    let system_dark = scheme.as_ref().is_some_and(|query| query.matches());

    let controller = Rc::new(RefCell::new(ThemeController::new(
        LocalThemeStore::new(config.theme_key.clone()),
        system_dark,
    )));
    apply_theme_to_document(controller.borrow().applied())?;

    for toggle in dom::select_all(&document, SEL_THEME_TOGGLE) {
        let controller = controller.clone();
        dom::listen(&toggle, "click", move |_: Event| {
            let theme = controller.borrow_mut().toggle();
            dom::report("theme toggle", apply_theme_to_document(theme));
        })?;
    }

    if let Some(scheme) = scheme {
        dom::listen(&scheme, "change", move |event: MediaQueryListEvent| {
            let next = controller.borrow_mut().system_changed(event.matches());
            if let Some(theme) = next {
                log::debug!("Following system theme: {}", theme.as_str());
                dom::report("system theme", apply_theme_to_document(theme));
            }
        })?;
    }

    Ok(())
}
