use yew::prelude::*;

use crate::hooks::{use_theme, use_theme_toggle};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let mode = use_theme();
    let onclick = use_theme_toggle();
    let (icon, label) = mode.pick(("🌙", "Switch to dark mode"), ("☀️", "Switch to light mode"));

    html! {
        <button
            type="button"
            {onclick}
            aria-label={label}
            class={classes!(styles::BUTTON_ICON, styles::icon_button(mode), props.class.clone())}
        >
            <span class="inline-block transition-transform group-hover:rotate-12">{icon}</span>
        </button>
    }
}
