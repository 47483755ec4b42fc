use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, EventTarget, HtmlElement, Node};
use yew::NodeRef;

use crate::config;

/// Hides page scrolling behind an overlay, or gives it back.
/// Does nothing on pages without a body.
pub fn set_scroll_locked(locked: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        debug!("No document body, skipping scroll lock");
        return;
    };
    let style = body.style();
    let _ = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.set_property("overflow", "auto")
    };
}

pub fn text_scale(viewport_width: f64) -> f64 {
    (viewport_width / config::TEXT_SCALE_BASE_WIDTH)
        .clamp(config::TEXT_SCALE_MIN, config::TEXT_SCALE_MAX)
}

/// Writes `--text-scale` on the root element from the current viewport width.
pub fn apply_text_scale() {
    let Some(win) = window() else { return };
    let Some(width) = win.inner_width().ok().and_then(|w| w.as_f64()) else {
        return;
    };
    let root = win
        .document()
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(root) = root {
        let _ = root
            .style()
            .set_property("--text-scale", &text_scale(width).to_string());
    }
}

/// True when the event target sits inside an element matching `selector`.
pub fn target_within(target: Option<EventTarget>, selector: &str) -> bool {
    target
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}

/// True when the event fired on `node` itself rather than on a descendant.
/// Yew delegates listeners to the app root, so `current_target` cannot be used.
pub fn targets_node(target: Option<EventTarget>, node: &NodeRef) -> bool {
    let target = target.and_then(|t| t.dyn_into::<Node>().ok());
    matches!((target, node.get()), (Some(target), Some(node)) if target == node)
}
