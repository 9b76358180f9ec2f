use chrono::Utc;
use gloo_timers::callback::Interval;
use site_core::countdown::{resolve_target, Remaining};
use site_core::{
    SiteConfig, SEL_COUNTDOWN, SEL_COUNTDOWN_DAYS, SEL_COUNTDOWN_HOURS, SEL_COUNTDOWN_MINUTES,
    SEL_COUNTDOWN_SECONDS,
};
use web_sys::Element;

use crate::dom;
use crate::error::UiError;

/// The four digit slots of a countdown; any of them may be missing.
struct Digits([Option<Element>; 4]);

impl Digits {
    fn find(container: &Element) -> Self {
        Self(
            [
                SEL_COUNTDOWN_DAYS,
                SEL_COUNTDOWN_HOURS,
                SEL_COUNTDOWN_MINUTES,
                SEL_COUNTDOWN_SECONDS,
            ]
            .map(|selector| dom::select(container, selector)),
        )
    }

    fn render(&self, remaining: &Remaining) {
        for (slot, text) in self.0.iter().zip(remaining.fields()) {
            if let Some(el) = slot {
                el.set_text_content(Some(&text));
            }
        }
    }
}

pub fn init(config: &SiteConfig) -> Result<(), UiError> {
    let document = dom::document()?;
    for container in dom::select_all(&document, SEL_COUNTDOWN) {
        let raw = container.get_attribute("data-target");
        let target = resolve_target(raw.as_deref(), Utc::now());
        if raw.is_some() && target <= Utc::now() {
            log::debug!("Countdown target {:?} is not in the future", raw);
        }

        let digits = Digits::find(&container);
        let tick = move || digits.render(&Remaining::between(target, Utc::now()));
        tick();
        // Keeps ticking (and showing zeros) for the life of the page.
        Interval::new(config.countdown_tick_ms, tick).forget();
    }
    Ok(())
}
