//! Browser tests for the page components.
//!
//! Each test renders a small fixture into `<body>`, initializes the
//! component under test and drives it with real DOM events.
//!
//! Run with: wasm-pack test --headless --firefox site-ui

#![cfg(target_arch = "wasm32")]

use chrono::{Duration, Utc};
use site_core::{SiteConfig, Theme, CLASS_ACTIVE, CLASS_NO_SCROLL, CLASS_OPEN};
use site_ui::{accordion, countdown, dom, dropdown, forms, modal, sidebar, slider, tabs, theme};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, HtmlInputElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

// ====================================================================================
// Helpers
// ====================================================================================

fn render(html: &str) {
    let body = dom::body().unwrap();
    body.set_class_name("");
    body.set_inner_html(html);
}

fn el(selector: &str) -> Element {
    dom::select(&dom::document().unwrap(), selector).unwrap()
}

fn click(selector: &str) {
    el(selector).dyn_into::<HtmlElement>().unwrap().click();
}

fn input(selector: &str) -> HtmlInputElement {
    el(selector).dyn_into::<HtmlInputElement>().unwrap()
}

fn submit(selector: &str) {
    let event = web_sys::Event::new("submit").unwrap();
    el(selector).dispatch_event(&event).unwrap();
}

fn has(selector: &str, class: &str) -> bool {
    dom::has_class(&el(selector), class)
}

fn body_has(class: &str) -> bool {
    dom::has_class(&dom::body().unwrap(), class)
}

// ====================================================================================
// Dropdowns
// ====================================================================================

#[wasm_bindgen_test]
fn dropdowns_are_mutually_exclusive() {
    render(
        r##"
        <nav>
          <div data-dropdown id="a"><a href="#" data-dropdown-toggle id="a-t">A</a></div>
          <div data-dropdown id="b"><a href="#" data-dropdown-toggle id="b-t">B</a></div>
        </nav>
        <p id="outside">outside</p>
        "##,
    );
    dropdown::init().unwrap();

    click("#a-t");
    assert!(has("#a", CLASS_OPEN));
    assert_eq!(el("#a-t").get_attribute("aria-expanded").as_deref(), Some("true"));

    click("#b-t");
    assert!(!has("#a", CLASS_OPEN));
    assert!(has("#b", CLASS_OPEN));
    assert_eq!(el("#a-t").get_attribute("aria-expanded").as_deref(), Some("false"));

    click("#outside");
    assert!(!has("#b", CLASS_OPEN));
}

// ====================================================================================
// Theme
// ====================================================================================

#[wasm_bindgen_test]
fn theme_toggle_persists_choice() {
    let config = SiteConfig::default();
    let storage = dom::window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item(&config.theme_key).unwrap();

    render(r#"<button data-theme-toggle id="toggle">Theme</button>"#);
    theme::init(&config).unwrap();

    // Seeded from the system preference without persisting it.
    assert_eq!(storage.get_item(&config.theme_key).unwrap(), None);
    let seeded = if body_has(Theme::Dark.class_name()) {
        Theme::Dark
    } else {
        Theme::Light
    };
    assert!(!body_has(seeded.toggled().class_name()));

    click("#toggle");
    let flipped = seeded.toggled();
    assert!(body_has(flipped.class_name()));
    assert!(!body_has(seeded.class_name()));
    assert_eq!(
        storage.get_item(&config.theme_key).unwrap().as_deref(),
        Some(flipped.as_str())
    );

    storage.remove_item(&config.theme_key).unwrap();
}

// ====================================================================================
// Slider
// ====================================================================================

#[wasm_bindgen_test]
fn slider_wraps_and_tracks_dots() {
    render(
        r#"
        <div data-slider id="s">
          <div class="slider-track">
            <div data-slider-item style="width:100px">1</div>
            <div data-slider-item style="width:100px">2</div>
            <div data-slider-item style="width:100px">3</div>
          </div>
          <button data-slider-prev id="prev">prev</button>
          <button data-slider-next id="next">next</button>
          <div data-slider-dots id="dots"></div>
        </div>
        "#,
    );
    let mounted = slider::Slider::mount(&el("#s"), 7000).unwrap().unwrap();

    let dots = dom::select_all(&el("#dots"), "button");
    assert_eq!(dots.len(), 3);
    assert!(dom::has_class(&dots[0], CLASS_ACTIVE));

    click("#prev");
    assert_eq!(mounted.borrow().index(), 2);
    assert!(dom::has_class(&dots[2], CLASS_ACTIVE));
    assert!(!dom::has_class(&dots[0], CLASS_ACTIVE));

    click("#next");
    click("#next");
    assert_eq!(mounted.borrow().index(), 1);

    dots[2].dyn_ref::<HtmlElement>().unwrap().click();
    assert_eq!(mounted.borrow().index(), 2);
    assert!(!mounted.borrow().is_autoplaying());
}

#[wasm_bindgen_test]
fn carousel_autoplay_pauses_on_hover() {
    render(
        r#"
        <div data-slider="gallery" id="g">
          <div class="carousel-track">
            <figure>1</figure>
            <figure>2</figure>
          </div>
        </div>
        "#,
    );
    let mounted = slider::Slider::mount(&el("#g"), 7000).unwrap().unwrap();
    assert!(mounted.borrow().is_autoplaying());

    slider::Slider::start_autoplay(&mounted);
    assert!(mounted.borrow().is_autoplaying());

    let enter = web_sys::Event::new("mouseenter").unwrap();
    el("#g").dispatch_event(&enter).unwrap();
    assert!(!mounted.borrow().is_autoplaying());

    let leave = web_sys::Event::new("mouseleave").unwrap();
    el("#g").dispatch_event(&leave).unwrap();
    assert!(mounted.borrow().is_autoplaying());
}

#[wasm_bindgen_test]
fn empty_slider_is_inert() {
    render(r#"<div data-slider id="e"><div class="slider-track"></div></div>"#);
    assert!(slider::Slider::mount(&el("#e"), 7000).unwrap().is_none());
}

// ====================================================================================
// Menu tabs
// ====================================================================================

#[wasm_bindgen_test]
fn menu_tabs_match_panels_page_wide() {
    render(
        r#"
        <div data-menu-tabs>
          <button class="menu-tab is-active" data-category="food" id="food">Food</button>
          <button class="menu-tab" data-category="drinks" id="drinks">Drinks</button>
        </div>
        <section data-menu-panel="food" id="p-food" class="is-active"></section>
        <section data-menu-panel="drinks" id="p-drinks"></section>
        <div data-menu-tabs>
          <button class="menu-tab" data-category="food" id="other-food">Food</button>
        </div>
        <section data-menu-panel="drinks" id="p-drinks-2"></section>
        "#,
    );
    tabs::init().unwrap();

    click("#drinks");
    assert!(has("#drinks", CLASS_ACTIVE));
    assert!(!has("#food", CLASS_ACTIVE));
    assert!(has("#p-drinks", CLASS_ACTIVE));
    assert!(has("#p-drinks-2", CLASS_ACTIVE));
    assert!(!has("#p-food", CLASS_ACTIVE));

    click("#other-food");
    assert!(has("#p-food", CLASS_ACTIVE));
    assert!(!has("#p-drinks-2", CLASS_ACTIVE));
    // The first group's buttons are untouched.
    assert!(has("#drinks", CLASS_ACTIVE));
}

// ====================================================================================
// Countdown
// ====================================================================================

#[wasm_bindgen_test]
fn countdown_renders_immediately() {
    let target = (Utc::now() + Duration::milliseconds(90_061_500)).to_rfc3339();
    render(&format!(
        r#"
        <div data-countdown data-target="{target}">
          <span data-countdown-days id="d"></span>
          <span data-countdown-hours id="h"></span>
          <span data-countdown-minutes id="m"></span>
          <span data-countdown-seconds id="s"></span>
        </div>
        <div data-countdown data-target="2001-01-01">
          <span data-countdown-days id="past-d"></span>
          <span data-countdown-seconds id="past-s"></span>
        </div>
        "#
    ));
    countdown::init(&SiteConfig::default()).unwrap();

    for id in ["#d", "#h", "#m", "#s"] {
        assert_eq!(el(id).text_content().as_deref(), Some("01"));
    }
    assert_eq!(el("#past-d").text_content().as_deref(), Some("00"));
    assert_eq!(el("#past-s").text_content().as_deref(), Some("00"));
}

// ====================================================================================
// Forms
// ====================================================================================

const LOGIN_FORM: &str = r#"
    <form data-form="login" id="login">
      <input type="email" name="email" id="email" required>
      <input type="password" name="password" id="password" required>
      <button type="submit">Sign in</button>
    </form>
"#;

#[wasm_bindgen_test]
fn login_requires_password() {
    render(LOGIN_FORM);
    forms::init(&SiteConfig::default()).unwrap();
    input("#email").set_value("a@b.co");

    submit("#login");

    let alert = el("#login .form-alert");
    assert_eq!(
        alert.text_content().as_deref(),
        Some("Please fill in all required fields.")
    );
    assert_eq!(alert.get_attribute("data-type").as_deref(), Some("error"));
    assert_eq!(input("#email").value(), "a@b.co");
}

#[wasm_bindgen_test]
fn valid_login_shows_success_and_resets() {
    render(LOGIN_FORM);
    forms::init(&SiteConfig::default()).unwrap();
    input("#email").set_value("a@b.co");
    input("#password").set_value("correct horse");

    submit("#login");

    let alert = el("#login .form-alert");
    assert_eq!(
        alert.text_content().as_deref(),
        Some("Thank you! We will be in touch shortly.")
    );
    assert_eq!(alert.get_attribute("data-type").as_deref(), Some("success"));
    assert_eq!(input("#email").value(), "");
    assert_eq!(input("#password").value(), "");

    assert_eq!(dom::select_all(&el("#login"), ".form-alert").len(), 1);
}

#[wasm_bindgen_test]
fn register_mismatch_is_reported() {
    render(
        r#"
        <form data-form="register" id="register">
          <input type="email" name="email" value="a@b.co" required>
          <input type="password" name="password" value="abcdefgh" required>
          <input type="password" name="confirm" id="confirm" value="abcdefgx" required>
        </form>
        "#,
    );
    forms::init(&SiteConfig::default()).unwrap();

    submit("#register");

    assert_eq!(
        el("#register .form-alert").text_content().as_deref(),
        Some("Passwords do not match.")
    );
    let active = dom::document().unwrap().active_element().unwrap();
    assert_eq!(active.id(), "confirm");
}

// ====================================================================================
// Modals and sidebar
// ====================================================================================

#[wasm_bindgen_test]
fn modal_closes_on_backdrop_only() {
    render(
        r##"
        <button data-open-modal="#login-modal" id="open">Log in</button>
        <div class="modal" id="login-modal">
          <div class="modal-content" id="content">
            <button data-close-modal id="close">x</button>
          </div>
        </div>
        "##,
    );
    modal::init().unwrap();

    click("#open");
    assert!(has("#login-modal", CLASS_OPEN));
    assert!(body_has(CLASS_NO_SCROLL));

    click("#content");
    assert!(has("#login-modal", CLASS_OPEN));

    click("#login-modal");
    assert!(!has("#login-modal", CLASS_OPEN));
    assert!(!body_has(CLASS_NO_SCROLL));

    click("#open");
    click("#close");
    assert!(!has("#login-modal", CLASS_OPEN));
}

#[wasm_bindgen_test]
fn escape_closes_modals_and_dropdowns() {
    render(
        r#"
        <div data-dropdown id="dd"><button data-dropdown-toggle id="dd-t">Menu</button></div>
        <div class="modal is-open" id="m"></div>
        "#,
    );
    dropdown::init().unwrap();
    modal::init().unwrap();
    click("#dd-t");
    assert!(has("#dd", CLASS_OPEN));

    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keyup", &init).unwrap();
    dom::document().unwrap().dispatch_event(&event).unwrap();

    assert!(!has("#m", CLASS_OPEN));
    assert!(!has("#dd", CLASS_OPEN));
}

#[wasm_bindgen_test]
fn sidebar_toggle_syncs_scroll_lock() {
    render(
        r#"
        <aside data-admin-sidebar id="side"></aside>
        <button data-sidebar-toggle id="toggle">Menu</button>
        "#,
    );
    sidebar::init().unwrap();

    click("#toggle");
    assert!(has("#side", CLASS_OPEN));
    assert!(body_has(CLASS_NO_SCROLL));

    click("#toggle");
    assert!(!has("#side", CLASS_OPEN));
    assert!(!body_has(CLASS_NO_SCROLL));
}

// ====================================================================================
// Accordion
// ====================================================================================

#[wasm_bindgen_test]
fn accordion_keeps_one_item_open() {
    render(
        r#"
        <div data-accordion>
          <div class="accordion-item" id="a">
            <button class="accordion-trigger" id="a-t">A</button>
            <div class="accordion-content" id="a-c"><p>Alpha</p></div>
          </div>
          <div class="accordion-item" id="b">
            <button class="accordion-trigger" id="b-t">B</button>
            <div class="accordion-content" id="b-c"><p>Beta</p></div>
          </div>
        </div>
        "#,
    );
    accordion::init().unwrap();

    let max_height = |id: &str| {
        el(id)
            .dyn_into::<HtmlElement>()
            .unwrap()
            .style()
            .get_property_value("max-height")
            .unwrap()
    };
    assert_eq!(max_height("#a-c"), "0px");
    assert_eq!(max_height("#b-c"), "0px");

    click("#a-t");
    click("#b-t");
    assert!(!has("#a", CLASS_OPEN));
    assert!(has("#b", CLASS_OPEN));
    assert_eq!(max_height("#a-c"), "0px");
    assert_ne!(max_height("#b-c"), "0px");
    assert_eq!(el("#b-t").get_attribute("aria-expanded").as_deref(), Some("true"));

    click("#b-t");
    assert!(!has("#b", CLASS_OPEN));
    assert_eq!(max_height("#b-c"), "0px");
}
