use std::rc::Rc;

use site_core::tabs::{button_states, panel_states};
use site_core::{CLASS_ACTIVE, SEL_MENU_PANEL, SEL_MENU_TAB, SEL_MENU_TABS};
use web_sys::Event;

use crate::dom;
use crate::error::UiError;

pub fn init() -> Result<(), UiError> {
    let document = dom::document()?;
    // Panels are page-wide on purpose; see `site_core::tabs`.
    let panels = Rc::new(dom::select_all(&document, SEL_MENU_PANEL));

    for group in dom::select_all(&document, SEL_MENU_TABS) {
        let buttons = Rc::new(dom::select_all(&group, SEL_MENU_TAB));
        for idx in 0..buttons.len() {
            let buttons = buttons.clone();
            let panels = panels.clone();
            let button = buttons[idx].clone();
            dom::listen(&button, "click", move |_: Event| {
                for (button, active) in buttons.iter().zip(button_states(buttons.len(), idx)) {
                    dom::set_class(button, CLASS_ACTIVE, active);
                }

                let category = buttons[idx].get_attribute("data-category");
                let categories: Vec<Option<String>> = panels
                    .iter()
                    .map(|panel| panel.get_attribute("data-menu-panel"))
                    .collect();
                let states = panel_states(
                    categories.iter().map(Option::as_deref),
                    category.as_deref(),
                );
                for (panel, active) in panels.iter().zip(states) {
                    dom::set_class(panel, CLASS_ACTIVE, active);
                }
            })?;
        }
    }

    Ok(())
}
