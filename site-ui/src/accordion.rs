use std::rc::Rc;

use site_core::toggle::{self, Region};
use site_core::{
    CLASS_OPEN, SEL_ACCORDION, SEL_ACCORDION_CONTENT, SEL_ACCORDION_ITEM, SEL_ACCORDION_TRIGGER,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement};

use crate::dom;
use crate::error::UiError;

pub struct AccordionItem {
    item: Element,
    trigger: Option<Element>,
    content: Option<HtmlElement>,
}

impl AccordionItem {
    fn find(item: Element) -> Self {
        let trigger = dom::select(&item, SEL_ACCORDION_TRIGGER);
        let content = dom::select(&item, SEL_ACCORDION_CONTENT)
            .and_then(|content| content.dyn_into::<HtmlElement>().ok());
        Self {
            item,
            trigger,
            content,
        }
    }

    fn collapse_content(&self) {
        if let Some(content) = &self.content {
            let style = content.style();
            let _ = style.set_property("transition", "max-height 0.3s ease");
            let _ = style.set_property("overflow", "hidden");
            let _ = style.set_property("max-height", "0");
        }
    }
}

impl Region for AccordionItem {
    fn is_open(&self) -> bool {
        dom::has_class(&self.item, CLASS_OPEN)
    }

    fn set_open(&self, open: bool) {
        dom::set_class(&self.item, CLASS_OPEN, open);
        if let Some(trigger) = &self.trigger {
            dom::set_expanded(trigger, open);
        }
        if let Some(content) = &self.content {
            let max_height = if open {
                format!("{}px", content.scroll_height())
            } else {
                "0".to_string()
            };
            let _ = content.style().set_property("max-height", &max_height);
        }
    }
}

pub fn init() -> Result<(), UiError> {
    let document = dom::document()?;

    for group in dom::select_all(&document, SEL_ACCORDION) {
        let items: Rc<Vec<AccordionItem>> = Rc::new(
            dom::select_all(&group, SEL_ACCORDION_ITEM)
                .into_iter()
                .map(AccordionItem::find)
                .collect(),
        );

        for (idx, item) in items.iter().enumerate() {
            item.collapse_content();
            let Some(trigger) = &item.trigger else {
                continue;
            };
            let items = items.clone();
            dom::listen(trigger, "click", move |_: Event| {
                toggle::toggle_exclusive(&items, idx);
            })?;
        }
    }

    Ok(())
}
