use gloo::events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use portfolio_shared::animation::ScrollTrigger;
use portfolio_shared::nav::{is_scrolled, NavVariant};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys::Element;
use yew::prelude::*;

fn window_scroll_y() -> f64 {
    web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn window_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Whether the page has scrolled past the navbar threshold.
#[hook]
pub fn use_scrolled() -> bool {
    let scrolled = use_state(|| false);
    {
        let scrolled = scrolled.clone();
        use_effect_with((), move |_| {
            scrolled.set(is_scrolled(window_scroll_y()));
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "scroll", move |_| {
                    scrolled.set(is_scrolled(window_scroll_y()));
                })
            });
            move || drop(listener)
        });
    }
    *scrolled
}

/// Navbar presentation for the current viewport width.
#[hook]
pub fn use_nav_variant() -> NavVariant {
    let variant = use_state(|| NavVariant::Desktop);
    {
        let variant = variant.clone();
        use_effect_with((), move |_| {
            if let Some(width) = window_width() {
                variant.set(NavVariant::for_width(width));
            }
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "resize", move |_| {
                    if let Some(width) = window_width() {
                        variant.set(NavVariant::for_width(width));
                    }
                })
            });
            move || drop(listener)
        });
    }
    *variant
}

/// Scrubbed scroll progress of `node` through the viewport, sampled once per frame.
#[hook]
pub fn use_scroll_progress(node: NodeRef) -> f64 {
    let progress = use_state(|| 0.0_f64);
    {
        let progress = progress.clone();
        use_effect_with(node, move |node| {
            let node = node.clone();
            let last = Rc::new(Cell::new(0.0_f64));
            let pending = Rc::new(Cell::new(false));
            let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));

            let sample = {
                let node = node.clone();
                let progress = progress.clone();
                let last = last.clone();
                move || {
                    if let Some(element) = node.cast::<Element>() {
                        let rect = element.get_bounding_client_rect();
                        let value = ScrollTrigger.progress(rect.top(), rect.height());
                        if (value - last.get()).abs() > 0.001 {
                            last.set(value);
                            progress.set(value);
                        }
                    }
                }
            };
            sample();

            let listener = {
                let frame = frame.clone();
                web_sys::window().map(|window| {
                    EventListener::new(&window, "scroll", move |_| {
                        if pending.replace(true) {
                            return;
                        }
                        let pending = pending.clone();
                        let sample = sample.clone();
                        // the previous frame has already fired by now
                        *frame.borrow_mut() = Some(request_animation_frame(move |_| {
                            pending.set(false);
                            sample();
                        }));
                    })
                })
            };

            move || {
                drop(listener);
                frame.borrow_mut().take();
            }
        });
    }
    *progress
}
