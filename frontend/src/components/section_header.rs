use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::hooks::use_theme;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub eyebrow: AttrValue,
    pub title: AttrValue,
    /// Rendered in the gradient accent after `title`.
    #[prop_or_default]
    pub highlight: Option<AttrValue>,
    #[prop_or_default]
    pub lead: Option<AttrValue>,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    let mode = use_theme();
    html! {
        <Reveal class={classes!("mb-16", "lg:mb-24")}>
            <span class={styles::EYEBROW}>{props.eyebrow.clone()}</span>
            <h2 class={classes!(styles::HEADING, styles::text_primary(mode))}>
                {props.title.clone()}
                if let Some(highlight) = props.highlight.clone() {
                    {" "}
                    <span class={styles::GRADIENT_TEXT}>{highlight}</span>
                }
            </h2>
            if let Some(lead) = props.lead.clone() {
                <p class={classes!(styles::LEAD, styles::text_secondary(mode))}>{lead}</p>
            }
        </Reveal>
    }
}
