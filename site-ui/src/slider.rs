use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Interval;
use site_core::slider::{track_transform, Autoplay, SlideMode, SliderState};
use site_core::{
    SiteConfig, CLASS_ACTIVE, SEL_SLIDER, SEL_SLIDER_DOTS, SEL_SLIDER_ITEM, SEL_SLIDER_NEXT,
    SEL_SLIDER_PREV, SEL_SLIDER_TRACK,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom;
use crate::error::UiError;

/// One `[data-slider]` root and everything it owns, including its autoplay
/// timer.
pub struct Slider {
    track: Element,
    items: Vec<HtmlElement>,
    dots: Option<Element>,
    state: SliderState,
    autoplay: Autoplay<Interval>,
    interval_ms: u32,
}

impl Slider {
    /// Wire up a slider root. Returns `None` for a slider without items.
    pub fn mount(root: &Element, interval_ms: u32) -> Result<Option<Rc<RefCell<Self>>>, UiError> {
        let track = dom::select(root, SEL_SLIDER_TRACK).unwrap_or_else(|| root.clone());
        let items: Vec<HtmlElement> = dom::select_all(&track, SEL_SLIDER_ITEM)
            .into_iter()
            .filter_map(|item| item.dyn_into::<HtmlElement>().ok())
            .collect();
        if items.is_empty() {
            return Ok(None);
        }

        let mode = SlideMode::detect(
            root.get_attribute("data-slider").as_deref(),
            dom::has_class(root, "carousel"),
        );
        let dots = dom::select(root, SEL_SLIDER_DOTS);
        let slider = Rc::new(RefCell::new(Self {
            track,
            state: SliderState::new(items.len(), mode),
            items,
            dots: dots.clone(),
            autoplay: Autoplay::new(),
            interval_ms,
        }));

        if let Some(dots) = dots {
            build_dots(&slider, &dots)?;
        }

        if let Some(prev) = dom::select(root, SEL_SLIDER_PREV) {
            let slider = slider.clone();
            dom::listen(&prev, "click", move |_: Event| slider.borrow_mut().prev())?;
        }
        if let Some(next) = dom::select(root, SEL_SLIDER_NEXT) {
            let slider = slider.clone();
            dom::listen(&next, "click", move |_: Event| slider.borrow_mut().next())?;
        }

        if mode.autoplays() {
            Self::start_autoplay(&slider);
            let paused = slider.clone();
            dom::listen(root, "mouseenter", move |_: Event| {
                paused.borrow_mut().stop_autoplay();
            })?;
            let resumed = slider.clone();
            dom::listen(root, "mouseleave", move |_: Event| {
                Self::start_autoplay(&resumed);
            })?;
        }

        slider.borrow_mut().go_to(0, false);
        Ok(Some(slider))
    }

    pub fn index(&self) -> usize {
        self.state.index()
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_running()
    }

    /// Move to `index` (wrapping). `animate` is false only for the initial
    /// positioning of carousels.
    pub fn go_to(&mut self, index: i64, animate: bool) {
        let Some(index) = self.state.go_to(index) else {
            return;
        };

        if let Some(dots) = &self.dots {
            for (idx, dot) in dom::select_all(dots, "button").iter().enumerate() {
                dom::set_class(dot, CLASS_ACTIVE, idx == index);
            }
        }

        match self.state.mode() {
            SlideMode::Carousel => {
                let left = self.items[index].offset_left();
                if animate {
                    let options = ScrollToOptions::new();
                    options.set_left(f64::from(left));
                    options.set_behavior(ScrollBehavior::Smooth);
                    self.track.scroll_to_with_scroll_to_options(&options);
                } else {
                    self.track.set_scroll_left(left);
                }
            }
            SlideMode::Track => {
                // Measured on every move so responsive layout changes apply.
                let width = self.items[0].get_bounding_client_rect().width();
                if let Some(track) = self.track.dyn_ref::<HtmlElement>() {
                    let _ = track
                        .style()
                        .set_property("transform", &track_transform(index, width));
                }
            }
        }
    }

    pub fn next(&mut self) {
        self.go_to(self.state.index() as i64 + 1, true);
    }

    pub fn prev(&mut self) {
        self.go_to(self.state.index() as i64 - 1, true);
    }

    /// No-op while a timer is already running. The timer only holds a weak
    /// reference since the slider owns it.
    pub fn start_autoplay(slider: &Rc<RefCell<Self>>) {
        let weak: Weak<RefCell<Self>> = Rc::downgrade(slider);
        let mut inner = slider.borrow_mut();
        let interval_ms = inner.interval_ms;
        inner.autoplay.start(move || {
            Interval::new(interval_ms, move || {
                if let Some(slider) = weak.upgrade() {
                    slider.borrow_mut().next();
                }
            })
        });
    }

    pub fn stop_autoplay(&mut self) {
        // Dropping the interval clears it.
        drop(self.autoplay.stop());
    }
}

fn build_dots(slider: &Rc<RefCell<Slider>>, dots: &Element) -> Result<(), UiError> {
    let document = dom::document()?;
    dots.set_inner_html("");
    let count = slider.borrow().items.len();
    for idx in 0..count {
        let dot = document.create_element("button")?;
        if idx == 0 {
            dom::set_class(&dot, CLASS_ACTIVE, true);
        }
        let slider = slider.clone();
        dom::listen(&dot, "click", move |_: Event| {
            slider.borrow_mut().go_to(idx as i64, true);
        })?;
        dots.append_child(&dot)?;
    }
    Ok(())
}

pub fn init(config: &SiteConfig) -> Result<(), UiError> {
    let document = dom::document()?;
    for root in dom::select_all(&document, SEL_SLIDER) {
        // Listeners keep the slider alive from here on.
        match Slider::mount(&root, config.autoplay_interval_ms) {
            Ok(Some(_)) => {}
            Ok(None) => log::debug!("Skipping slider without items"),
            Err(err) => log::warn!("Failed to mount slider: {}", err),
        }
    }
    Ok(())
}
