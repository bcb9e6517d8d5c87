//! Everything that reads or nudges the live document.

use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, Window,
};

use crate::error::{PageError, Result};
use crate::model::PageMetrics;
use crate::state::SectionMark;
use crate::util::clog;

pub const CARD_SELECTOR: &str = ".project-grid > .project-card";

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(PageError::NoDocument)
}

/// Text of an inline JSON `<script>` block, if the markup has one.
pub fn json_block(id: &str) -> Result<Option<String>> {
    Ok(document()?
        .get_element_by_id(id)
        .and_then(|el| el.text_content())
        .filter(|s| !s.trim().is_empty()))
}

fn px(v: std::result::Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> f64 {
    v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

/// Reads the geometry one frame of the page needs. Sections that are not in
/// the document are skipped.
pub fn sample(section_ids: &[&str], about_id: &str) -> Result<PageMetrics> {
    let window = window()?;
    let document = window.document().ok_or(PageError::NoDocument)?;
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_height = px(window.inner_height());
    let viewport_width = px(window.inner_width());
    let document_height = document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(viewport_height);

    let sections = section_ids
        .iter()
        .filter_map(|id| {
            let el = document.get_element_by_id(id)?;
            Some(SectionMark {
                id: id.to_string(),
                top: el.get_bounding_client_rect().top() + scroll_y,
            })
        })
        .collect();

    let about_top = document
        .get_element_by_id(about_id)
        .map(|el| el.get_bounding_client_rect().top());

    let mut card_tops = Vec::new();
    if let Ok(cards) = document.query_selector_all(CARD_SELECTOR) {
        for i in 0..cards.length() {
            if let Some(el) = cards.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
                card_tops.push(el.get_bounding_client_rect().top());
            }
        }
    }

    Ok(PageMetrics {
        scroll_y,
        viewport_height,
        viewport_width,
        document_height,
        sections,
        about_top,
        card_tops,
    })
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .ok()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn behavior(smooth: bool) -> ScrollBehavior {
    if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Auto
    }
}

/// Scrolls so the section top lands `offset_px` below the viewport top and
/// rewrites the URL fragment without adding a history entry.
pub fn scroll_to_section(id: &str, offset_px: f64, smooth: bool) -> Result<()> {
    let window = window()?;
    let document = window.document().ok_or(PageError::NoDocument)?;
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| PageError::MissingElement(format!("#{id}")))?;
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    // One pixel past the marker so a rounded scroll position still lands inside the section.
    let top = (el.get_bounding_client_rect().top() + scroll_y - offset_px + 1.0).max(0.0);

    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(behavior(smooth));
    window.scroll_to_with_scroll_to_options(&opts);

    match window.history() {
        Ok(history) => {
            if let Err(e) = history.replace_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(&format!("#{id}")),
            ) {
                clog(&format!("replaceState #{id}: {e:?}"));
            }
        }
        Err(e) => clog(&format!("history unavailable: {e:?}")),
    }
    Ok(())
}

pub fn scroll_into_view_nearest(el: &HtmlElement, smooth: bool) {
    let opts = ScrollIntoViewOptions::new();
    opts.set_block(ScrollLogicalPosition::Nearest);
    opts.set_behavior(behavior(smooth));
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

pub fn focus_card(project_id: &str) -> Result<()> {
    let selector = format!("[data-project=\"{project_id}\"]");
    let el = document()?
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| PageError::MissingElement(selector.clone()))?;
    if let Err(e) = el.focus() {
        clog(&format!("focus {selector}: {e:?}"));
    }
    Ok(())
}
