use site_core::{CLASS_NO_SCROLL, CLASS_OPEN, SEL_ADMIN_SIDEBAR, SEL_SIDEBAR_TOGGLE};
use web_sys::{Element, Event};

use crate::dom;
use crate::error::UiError;

/// Flip the sidebar and return whether it ended up open. A page without a
/// sidebar counts as closed.
fn toggle_sidebar(sidebar: Option<&Element>) -> bool {
    let Some(sidebar) = sidebar else {
        return false;
    };
    dom::set_class(sidebar, CLASS_OPEN, !dom::has_class(sidebar, CLASS_OPEN));
    dom::has_class(sidebar, CLASS_OPEN)
}

pub fn init() -> Result<(), UiError> {
    let document = dom::document()?;
    let sidebar = dom::select(&document, SEL_ADMIN_SIDEBAR);

    for button in dom::select_all(&document, SEL_SIDEBAR_TOGGLE) {
        let sidebar = sidebar.clone();
        dom::listen(&button, "click", move |_: Event| {
            let open = toggle_sidebar(sidebar.as_ref());
            match dom::body() {
                Ok(body) => dom::set_class(&body, CLASS_NO_SCROLL, open),
                Err(err) => log::warn!("Sidebar scroll lock: {}", err),
            }
        })?;
    }

    Ok(())
}
