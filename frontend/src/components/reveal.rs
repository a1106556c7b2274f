use portfolio_shared::animation::Reveal as RevealEffect;
use yew::prelude::*;

use crate::hooks::{use_reveal, RevealPhase};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_else(RevealEffect::fade_up)]
    pub effect: RevealEffect,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Plays `effect` the first time the wrapped content scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let phase = use_reveal(node.clone());

    let style = match phase {
        RevealPhase::Static => None,
        RevealPhase::Hidden => Some(props.effect.hidden_style()),
        RevealPhase::Shown => Some(props.effect.shown_style()),
    };

    html! {
        <div ref={node} class={props.class.clone()} {style}>
            {props.children.clone()}
        </div>
    }
}
