use std::rc::Rc;

use site_core::toggle::{self, Region};
use site_core::{CLASS_OPEN, SEL_DROPDOWN, SEL_DROPDOWN_TOGGLE};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::dom;
use crate::error::UiError;

pub struct Dropdown {
    root: Element,
    toggle: Option<Element>,
}

impl Region for Dropdown {
    fn is_open(&self) -> bool {
        dom::has_class(&self.root, CLASS_OPEN)
    }

    fn set_open(&self, open: bool) {
        dom::set_class(&self.root, CLASS_OPEN, open);
        if let Some(toggle) = &self.toggle {
            dom::set_expanded(toggle, open);
        }
    }
}

fn collect(document: &Document) -> Vec<Dropdown> {
    dom::select_all(document, SEL_DROPDOWN)
        .into_iter()
        .map(|root| {
            let toggle = dom::select(&root, SEL_DROPDOWN_TOGGLE);
            Dropdown { root, toggle }
        })
        .collect()
}

pub fn close_all() {
    if let Ok(document) = dom::document() {
        toggle::close_all(&collect(&document));
    }
}

pub fn init() -> Result<(), UiError> {
    let document = dom::document()?;
    let dropdowns = Rc::new(collect(&document));
    if dropdowns.is_empty() {
        return Ok(());
    }

    for (idx, dropdown) in dropdowns.iter().enumerate() {
        let Some(trigger) = dropdown.toggle.clone() else {
            continue;
        };
        let dropdowns = dropdowns.clone();
        dom::listen(&trigger, "click", move |event: Event| {
            event.prevent_default();
            toggle::toggle_exclusive(&dropdowns, idx);
        })?;
    }

    dom::listen(&document, "click", move |event: Event| {
        let inside = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(SEL_DROPDOWN).ok().flatten())
            .is_some();
        if !inside {
            toggle::close_all(&dropdowns);
        }
    })?;

    Ok(())
}
