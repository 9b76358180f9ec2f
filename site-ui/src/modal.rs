use site_core::toggle::{self, Region};
use site_core::{CLASS_NO_SCROLL, CLASS_OPEN, SEL_CLOSE_MODAL, SEL_MODAL, SEL_OPEN_MODAL};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent, MouseEvent, Node};

use crate::dom;
use crate::dropdown;
use crate::error::UiError;

struct Modal(Element);

impl Region for Modal {
    fn is_open(&self) -> bool {
        dom::has_class(&self.0, CLASS_OPEN)
    }

    fn set_open(&self, open: bool) {
        dom::set_class(&self.0, CLASS_OPEN, open);
    }
}

/// Open the modal matching `selector` and lock page scrolling.
/// An unknown modal is ignored.
pub fn open(selector: &str) -> Result<(), UiError> {
    let document = dom::document()?;
    let Some(modal) = document.query_selector(selector)? else {
        log::debug!("No modal matches {}", selector);
        return Ok(());
    };
    Modal(modal).set_open(true);
    dom::set_class(&*dom::body()?, CLASS_NO_SCROLL, true);
    Ok(())
}

pub fn close_all() -> Result<(), UiError> {
    let document = dom::document()?;
    let modals: Vec<Modal> = dom::select_all(&document, SEL_MODAL)
        .into_iter()
        .map(Modal)
        .collect();
    toggle::close_all(&modals);
    dom::set_class(&*dom::body()?, CLASS_NO_SCROLL, false);
    Ok(())
}

pub fn init() -> Result<(), UiError> {
    let document = dom::document()?;

    for trigger in dom::select_all(&document, SEL_OPEN_MODAL) {
        let selector = trigger.get_attribute("data-open-modal").unwrap_or_default();
        dom::listen(&trigger, "click", move |_: Event| {
            dom::report("open modal", open(&selector));
        })?;
    }

    for trigger in dom::select_all(&document, SEL_CLOSE_MODAL) {
        dom::listen(&trigger, "click", |_: Event| {
            dom::report("close modal", close_all());
        })?;
    }

    for modal in dom::select_all(&document, SEL_MODAL) {
        let backdrop: Node = modal.clone().into();
        dom::listen(&modal, "click", move |event: MouseEvent| {
            // Only the modal element itself is the backdrop; clicks that land
            // in its content bubble up with a different target.
            let on_backdrop = event
                .target()
                .and_then(|target| target.dyn_into::<Node>().ok())
                .is_some_and(|target| target.is_same_node(Some(&backdrop)));
            if on_backdrop {
                dom::report("close modal", close_all());
            }
        })?;
    }

    dom::listen(&document, "keyup", |event: KeyboardEvent| {
        if event.key() == "Escape" {
            dom::report("close modal", close_all());
            dropdown::close_all();
        }
    })?;

    Ok(())
}
