#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use portfolio_page::components::{App, AppProps};
use portfolio_page::config::PageConfig;
use portfolio_page::content::Portfolio;
use portfolio_page::state::drawer::{columns_from_tops, drawer_anchor, layout_columns};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

const ROOT_CLASS: &str = "test-root";

fn mount() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    // Earlier tests' pages would shadow document-wide lookups (focus return, sampling).
    let stale = document.get_elements_by_class_name(ROOT_CLASS);
    while let Some(old) = stale.item(0) {
        old.remove();
    }
    let root = document.create_element("div").unwrap();
    root.set_class_name(ROOT_CLASS);
    document.body().unwrap().append_child(&root).unwrap();
    let props = AppProps {
        config: Rc::new(PageConfig::default()),
        content: Rc::new(Portfolio::default()),
    };
    yew::Renderer::<App>::with_root_and_props(root.clone(), props).render();
    root
}

// Lets the Yew scheduler flush renders and effects.
async fn settle() {
    TimeoutFuture::new(30).await;
}

fn cards(root: &Element) -> Vec<HtmlElement> {
    let list = root.query_selector_all(".project-grid > .project-card").unwrap();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn drawer(root: &Element) -> Element {
    root.query_selector("#project-drawer").unwrap().unwrap()
}

fn active_project() -> Option<String> {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .active_element()
        .and_then(|el| el.get_attribute("data-project"))
}

fn press_escape() {
    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    let ev = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    web_sys::window().unwrap().dispatch_event(&ev).unwrap();
}

fn has_class(el: &Element, class: &str) -> bool {
    el.get_attribute("class")
        .unwrap_or_default()
        .split_whitespace()
        .any(|c| c == class)
}

#[wasm_bindgen_test]
async fn renders_nav_sections_and_cards() {
    let root = mount();
    settle().await;

    let links = root.query_selector_all("#site-nav a.nav-link").unwrap();
    assert_eq!(links.length(), 4);
    for id in ["home", "about", "projects", "contact"] {
        assert!(root.query_selector(&format!("section#{id}")).unwrap().is_some());
    }
    assert_eq!(cards(&root).len(), Portfolio::default().projects.len());
    assert!(drawer(&root).has_attribute("hidden"));
    assert!(root.query_selector("#scroll-progress").unwrap().is_some());
}

#[wasm_bindgen_test]
async fn clicking_a_card_opens_then_closes_the_drawer() {
    let root = mount();
    settle().await;

    let tops: Vec<f64> = cards(&root)
        .iter()
        .map(|c| c.get_bounding_client_rect().top())
        .collect();
    let width = web_sys::window().unwrap().inner_width().unwrap().as_f64().unwrap();
    let columns = layout_columns(
        width,
        PageConfig::default().drawer_breakpoint_px,
        columns_from_tops(&tops),
    );
    let expected = drawer_anchor(0, columns, tops.len());

    let first = cards(&root).remove(0);
    first.click();
    settle().await;

    let first = cards(&root).remove(0);
    assert!(has_class(&first, "is-open"));
    assert_eq!(first.get_attribute("aria-expanded").as_deref(), Some("true"));
    let d = drawer(&root);
    assert!(!d.has_attribute("hidden"));
    assert!(has_class(&d, "is-open"));
    // The drawer closes the open card's row.
    let before = d.previous_element_sibling().unwrap();
    assert!(has_class(&before, "project-card"));
    let expected_id = Portfolio::default().projects[expected].id.clone();
    assert_eq!(before.get_attribute("data-project"), Some(expected_id));

    first.click();
    settle().await;
    assert!(drawer(&root).has_attribute("hidden"));
    assert!(!has_class(&cards(&root).remove(0), "is-open"));
}

#[wasm_bindgen_test]
async fn opening_another_card_closes_the_first() {
    let root = mount();
    settle().await;

    cards(&root)[0].click();
    settle().await;
    cards(&root)[1].click();
    settle().await;

    let all = cards(&root);
    assert!(!has_class(&all[0], "is-open"));
    assert!(has_class(&all[1], "is-open"));
    assert_eq!(root.query_selector_all(".project-card.is-open").unwrap().length(), 1);
}

#[wasm_bindgen_test]
async fn escape_closes_the_drawer_and_refocuses_the_card() {
    let root = mount();
    settle().await;

    let id = Portfolio::default().projects[2].id.clone();
    cards(&root)[2].click();
    settle().await;
    assert!(!drawer(&root).has_attribute("hidden"));

    press_escape();
    settle().await;

    assert!(drawer(&root).has_attribute("hidden"));
    assert_eq!(active_project(), Some(id));
}

#[wasm_bindgen_test]
async fn close_button_closes_the_drawer_and_refocuses_the_card() {
    let root = mount();
    settle().await;

    let id = Portfolio::default().projects[1].id.clone();
    cards(&root)[1].click();
    settle().await;

    let close = root
        .query_selector(".project-drawer__close")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    close.click();
    settle().await;

    assert!(drawer(&root).has_attribute("hidden"));
    assert!(!has_class(&cards(&root)[1], "is-open"));
    assert_eq!(active_project(), Some(id));
}

#[wasm_bindgen_test]
async fn nav_click_rewrites_the_fragment_without_a_history_entry() {
    let root = mount();
    settle().await;

    let window = web_sys::window().unwrap();
    let depth = window.history().unwrap().length().unwrap();
    let about = root
        .query_selector("#site-nav a.nav-link[href=\"#about\"]")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    about.click();
    settle().await;

    assert_eq!(window.location().hash().unwrap(), "#about");
    assert_eq!(window.history().unwrap().length().unwrap(), depth);
}
