use portfolio_shared::selection::InspectedSkill;
use yew::prelude::*;

use crate::hooks::use_theme;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SkillInspectorProps {
    #[prop_or_default]
    pub inspected: Option<InspectedSkill>,
}

/// Detail panel for the badge under the pointer.
#[function_component(SkillInspectorPanel)]
pub fn skill_inspector_panel(props: &SkillInspectorProps) -> Html {
    let mode = use_theme();

    html! {
        <div
            aria-live="polite"
            class={classes!("rounded-[2rem]", "border", "p-8", "min-h-[180px]", "flex", "flex-col", "justify-center", "transition-all", "duration-300", styles::card(mode))}
        >
            if let Some(inspected) = props.inspected.clone() {
                <span class={styles::EYEBROW}>{inspected.category}</span>
                <div class="flex items-center gap-4">
                    <span
                        class="w-4 h-4 rounded-full shadow-lg"
                        style={format!("background: {};", inspected.skill.color.for_theme(mode))}
                    ></span>
                    <h3 class={classes!("text-3xl", "font-black", "tracking-tight", styles::text_primary(mode))}>
                        {inspected.skill.name.clone()}
                    </h3>
                </div>
                <p class={classes!("mt-3", "text-sm", "font-bold", "uppercase", "tracking-widest", styles::text_secondary(mode))}>
                    {format!("{} proficiency", inspected.skill.level.label())}
                </p>
            } else {
                <p class={classes!("text-center", "text-sm", "font-bold", "uppercase", "tracking-widest", styles::text_secondary(mode))}>
                    {"Hover skills to inspect the core stack"}
                </p>
            }
        </div>
    }
}
