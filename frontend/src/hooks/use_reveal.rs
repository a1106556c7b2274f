use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use portfolio_shared::animation::reveal::is_in_view;
use std::cell::Cell;
use std::rc::Rc;
use web_sys::Element;
use yew::prelude::*;

const ENTRANCE_DELAY_MS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// No effect attached; content renders in its final state.
    Static,
    Hidden,
    Shown,
}

fn node_in_view(node: &NodeRef) -> Option<bool> {
    let element = node.cast::<Element>()?;
    let viewport = web_sys::window()?.inner_height().ok()?.as_f64()?;
    let rect = element.get_bounding_client_rect();
    Some(is_in_view(rect.top(), rect.bottom(), viewport))
}

/// Plays an entrance once `node` first enters the viewport.
#[hook]
pub fn use_reveal(node: NodeRef) -> RevealPhase {
    let phase = use_state(|| RevealPhase::Static);
    {
        let phase = phase.clone();
        use_effect_with(node, move |node| {
            let node = node.clone();
            let mut timeout = None;
            let mut listener = None;

            match node_in_view(&node) {
                Some(true) => {
                    phase.set(RevealPhase::Hidden);
                    let phase = phase.clone();
                    timeout = Some(Timeout::new(ENTRANCE_DELAY_MS, move || phase.set(RevealPhase::Shown)));
                }
                Some(false) => {
                    phase.set(RevealPhase::Hidden);
                    let done = Rc::new(Cell::new(false));
                    listener = web_sys::window().map(|window| {
                        EventListener::new(&window, "scroll", move |_| {
                            if !done.get() && node_in_view(&node) == Some(true) {
                                done.set(true);
                                phase.set(RevealPhase::Shown);
                            }
                        })
                    });
                }
                // no element or no window: leave the content visible
                None => {}
            }

            move || {
                drop(timeout);
                drop(listener);
            }
        });
    }
    *phase
}
