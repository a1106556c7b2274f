use portfolio_shared::animation::{stagger, Easing, Tween};
use portfolio_shared::constants::{BUBBLE_ANIMATION_DURATION, BUBBLE_STAGGER_DELAY};
use portfolio_shared::nav::{MenuState, NavTarget, NavVariant};
use yew::prelude::*;

use crate::components::anchor::anchor_onclick;
use crate::components::navbar::Brand;
use crate::components::theme_toggle::ThemeToggle;
use crate::hooks::{use_nav_variant, use_theme};
use crate::styles;

/// Resume pill colour in the overlay.
const RESUME_ACCENT: &str = "#3b82f6";

#[derive(Properties, PartialEq)]
pub struct BubbleMenuProps {
    pub short_name: AttrValue,
    pub resume_url: AttrValue,
}

struct Pill {
    key: &'static str,
    label: &'static str,
    href: String,
    accent: &'static str,
    rotation: f64,
}

fn pills(resume_url: &str) -> Vec<Pill> {
    NavTarget::ALL
        .iter()
        .map(|target| Pill {
            key: target.anchor(),
            label: target.label(),
            href: target.href(),
            accent: target.accent(),
            rotation: target.bubble_rotation(),
        })
        .chain(std::iter::once(Pill {
            key: "resume",
            label: "Resume",
            href: resume_url.to_string(),
            accent: RESUME_ACCENT,
            rotation: -8.0,
        }))
        .collect()
}

/// Overlay navigation shown below the desktop breakpoint.
#[function_component(BubbleMenu)]
pub fn bubble_menu(props: &BubbleMenuProps) -> Html {
    let mode = use_theme();
    let variant = use_nav_variant();
    let menu = use_state(MenuState::default);
    let (menu_bg, menu_fg) = styles::menu_colors(mode);

    {
        let menu = menu.clone();
        use_effect_with(variant, move |variant| {
            if *variant == NavVariant::Desktop && menu.is_open() {
                let mut next = *menu;
                next.close();
                menu.set(next);
            }
            || ()
        });
    }

    let on_toggle = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *menu;
            next.toggle();
            menu.set(next);
        })
    };

    let close = {
        let menu = menu.clone();
        Callback::from(move |_: ()| {
            let mut next = *menu;
            next.close();
            menu.set(next);
        })
    };

    let open = menu.is_open();
    let tween = Tween::new(BUBBLE_ANIMATION_DURATION, Easing::BackOut);

    html! {
        <div class="md:hidden">
            <div class="fixed top-4 left-4 right-4 z-[1001] flex items-center justify-between">
                <div class={classes!("rounded-full", "px-5", "py-2", "shadow-lg", styles::card(mode))}>
                    <Brand short_name={props.short_name.clone()} />
                </div>
                <div class="flex items-center gap-3">
                    <ThemeToggle class={classes!("rounded-full")} />
                    <button
                        type="button"
                        onclick={on_toggle}
                        aria-label={if open { "Close menu" } else { "Open menu" }}
                        aria-expanded={open.to_string()}
                        class="w-12 h-12 rounded-full shadow-lg flex flex-col items-center justify-center gap-1.5"
                        style={format!("background: {}; color: {};", menu_bg, menu_fg)}
                    >
                        <span class={classes!("block", "w-5", "h-0.5", "bg-current", "transition-transform", open.then_some("translate-y-1 rotate-45"))}></span>
                        <span class={classes!("block", "w-5", "h-0.5", "bg-current", "transition-transform", open.then_some("-translate-y-1 -rotate-45"))}></span>
                    </button>
                </div>
            </div>
            if open {
                <div class="fixed inset-0 z-[1000] flex items-center justify-center px-6 bg-black/40 backdrop-blur-sm">
                    <ul class="flex flex-wrap justify-center gap-4 max-w-sm" role="menu">
                        {for pills(&props.resume_url).into_iter().enumerate().map(|(index, pill)| {
                            let tween = tween.with_delay(stagger(index, BUBBLE_STAGGER_DELAY, 0.0));
                            let style = format!(
                                "--pill-accent: {}; background: {}; color: {}; transform: rotate({}deg); animation: {};",
                                pill.accent, menu_bg, menu_fg, pill.rotation, tween.animation("bubble-pop")
                            );
                            html! {
                                <li key={pill.key} role="none">
                                    <a
                                        role="menuitem"
                                        href={pill.href.clone()}
                                        onclick={anchor_onclick(pill.href, Some(close.clone()))}
                                        class="pill-link block rounded-full px-8 py-4 text-2xl font-semibold shadow-lg transition-colors"
                                        {style}
                                    >
                                        {pill.label}
                                    </a>
                                </li>
                            }
                        })}
                    </ul>
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pills_follow_nav_order_then_resume() {
        let labels: Vec<&str> = pills("#contact").iter().map(|p| p.label).collect();
        assert_eq!(labels, vec!["Home", "About", "Skills", "Projects", "Contact", "Resume"]);
    }

    #[test]
    fn test_pill_rotations_alternate() {
        let rotations: Vec<f64> = pills("#contact").iter().map(|p| p.rotation).collect();
        assert_eq!(rotations, vec![-8.0, 8.0, -8.0, 8.0, 8.0, -8.0]);
    }
}
