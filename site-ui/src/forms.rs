use chrono::Utc;
use site_core::forms::{self, AlertKind, Control, FormKind, FormSnapshot, SUCCESS_MESSAGE};
use site_core::{SiteConfig, CLASS_FORM_ALERT, SEL_FORM};
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement,
};

use crate::dom;
use crate::error::UiError;

/// Read one form control the way the validator sees it.
fn describe(el: &Element) -> Control {
    let (input_type, value) = if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        (input.type_(), input.value())
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        (select.type_(), select.value())
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        (area.type_(), area.value())
    } else if let Some(button) = el.dyn_ref::<HtmlButtonElement>() {
        (button.type_(), button.value())
    } else {
        (el.get_attribute("type").unwrap_or_default(), String::new())
    };

    let name = el
        .get_attribute("name")
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| el.id());

    Control {
        name,
        input_type: input_type.to_ascii_lowercase(),
        value,
        required: el.has_attribute("required"),
        disabled: el.has_attribute("disabled"),
    }
}

/// Snapshot of the form plus its controls, index-aligned for focusing.
fn snapshot(form: &HtmlFormElement) -> (FormSnapshot, Vec<Element>) {
    let kind = FormKind::parse(&form.get_attribute("data-form").unwrap_or_default());
    let collection = form.elements();
    let elements: Vec<Element> = (0..collection.length())
        .filter_map(|idx| collection.item(idx))
        .collect();
    let controls = elements.iter().map(describe).collect();
    (FormSnapshot::new(kind, controls), elements)
}

/// Show `message` in the form's single inline alert, creating it on first use.
pub fn show_alert(form: &HtmlFormElement, message: &str, kind: AlertKind) -> Result<(), UiError> {
    let scope: &Element = form;
    let alert = match dom::select(scope, &format!(".{CLASS_FORM_ALERT}")) {
        Some(alert) => alert,
        None => {
            let alert = dom::document()?.create_element("div")?;
            alert.set_class_name(CLASS_FORM_ALERT);
            form.prepend_with_node_1(&alert)?;
            alert
        }
    };
    alert.set_text_content(Some(message));
    alert.set_attribute("data-type", kind.as_str())?;
    Ok(())
}

pub fn handle_submit(form: &HtmlFormElement, min_password_len: usize) -> Result<(), UiError> {
    let (snapshot, elements) = snapshot(form);
    match forms::validate(&snapshot, Utc::now(), min_password_len) {
        Ok(()) => {
            show_alert(form, SUCCESS_MESSAGE, AlertKind::Success)?;
            form.reset();
        }
        Err(invalid) => {
            log::debug!("Form rejected: {}", invalid.error);
            show_alert(form, &invalid.error.to_string(), AlertKind::Error)?;
            if let Some(control) = elements
                .get(invalid.focus)
                .and_then(|el| el.dyn_ref::<HtmlElement>())
            {
                control.focus()?;
            }
        }
    }
    Ok(())
}

pub fn init(config: &SiteConfig) -> Result<(), UiError> {
    let document = dom::document()?;
    let min_password_len = config.min_password_len;

    for el in dom::select_all(&document, SEL_FORM) {
        let Ok(form) = el.dyn_into::<HtmlFormElement>() else {
            log::warn!("Ignoring [data-form] that is not a <form>");
            continue;
        };
        let target = form.clone();
        dom::listen(&form, "submit", move |event: Event| {
            event.prevent_default();
            dom::report("form submit", handle_submit(&target, min_password_len));
        })?;
    }

    Ok(())
}
