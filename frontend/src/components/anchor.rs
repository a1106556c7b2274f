use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

/// Smoothly scrolls to the element with id `anchor`. Returns false when it does not exist.
pub fn scroll_to_anchor(anchor: &str) -> bool {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(anchor.trim_start_matches('#')));
    let Some(element) = element else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Click handler for same-page links. Falls back to the browser's jump when the target is missing.
pub fn anchor_onclick(href: String, after: Option<Callback<()>>) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        if href.starts_with('#') && scroll_to_anchor(&href) {
            e.prevent_default();
        }
        if let Some(after) = &after {
            after.emit(());
        }
    })
}
