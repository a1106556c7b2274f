use portfolio_shared::animation::TypewriterConfig;
use yew::prelude::*;

use crate::hooks::use_typewriter;

#[derive(Properties, PartialEq)]
pub struct TextTypeProps {
    pub phrases: Vec<String>,
    #[prop_or_default]
    pub config: TypewriterConfig,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TextType)]
pub fn text_type(props: &TextTypeProps) -> Html {
    let text = use_typewriter(props.phrases.clone(), props.config);

    html! {
        <span class={props.class.clone()}>
            <span class="sr-only">{props.phrases.join(", ")}</span>
            <span aria-hidden="true">{text}</span>
            <span aria-hidden="true" class="ml-1 inline-block animate-pulse">{"|"}</span>
        </span>
    }
}
