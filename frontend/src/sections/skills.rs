use portfolio_shared::catalog::{Skill, SkillGroup};
use portfolio_shared::nav::NavTarget;
use portfolio_shared::selection::SkillInspector;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::section_header::SectionHeader;
use crate::components::skill_inspector::SkillInspectorPanel;
use crate::hooks::use_theme;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SkillsProps {
    pub groups: Vec<SkillGroup>,
}

#[function_component(Skills)]
pub fn skills(props: &SkillsProps) -> Html {
    let inspector = use_state(SkillInspector::default);

    if props.groups.is_empty() {
        return html! { <section id={NavTarget::Skills.anchor()} class={styles::SECTION}></section> };
    }

    let on_hover = {
        let inspector = inspector.clone();
        Callback::from(move |(skill, category): (Skill, String)| {
            let mut next = (*inspector).clone();
            next.hover(&skill, &category);
            inspector.set(next);
        })
    };

    let on_leave = {
        let inspector = inspector.clone();
        Callback::from(move |_: MouseEvent| {
            if inspector.inspected().is_some() {
                let mut next = (*inspector).clone();
                next.clear();
                inspector.set(next);
            }
        })
    };

    html! {
        <section id={NavTarget::Skills.anchor()} class={styles::SECTION}>
            <div class={styles::CONTAINER}>
                <SectionHeader
                    eyebrow="Expertise"
                    title="Technical"
                    highlight={Some(AttrValue::from("arsenal"))}
                    lead={Some(AttrValue::from("The tools and technologies I use to take products from idea to production."))}
                />
                <div class="grid lg:grid-cols-[1fr_340px] gap-10 items-start">
                    <div class="grid md:grid-cols-2 gap-6" onmouseleave={on_leave}>
                        {for props.groups.iter().map(|group| {
                            let active = inspector.is_active_category(&group.category);
                            html! {
                                <SkillCard key={group.category.clone()} group={group.clone()} {active} on_hover={on_hover.clone()} />
                            }
                        })}
                    </div>
                    <div class="lg:sticky lg:top-28">
                        <SkillInspectorPanel inspected={inspector.inspected().cloned()} />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SkillCardProps {
    group: SkillGroup,
    active: bool,
    on_hover: Callback<(Skill, String)>,
}

#[function_component(SkillCard)]
fn skill_card(props: &SkillCardProps) -> Html {
    let mode = use_theme();
    let group = &props.group;
    let accent = group.color.for_theme(mode).to_string();

    html! {
        <Reveal>
            <article
                data-active={props.active.to_string()}
                class={classes!(
                    "rounded-[2rem]", "border", "p-8", "h-full", "transition-all", "duration-300",
                    styles::card(mode),
                    if props.active { "-translate-y-1 shadow-2xl" } else { "" }
                )}
                style={if props.active { format!("border-color: {};", accent) } else { String::new() }}
            >
                <div class="flex items-center gap-3 mb-3">
                    <span class="w-3 h-3 rounded-full" style={format!("background: {};", accent)}></span>
                    <h3 class={classes!("text-xl", "font-black", styles::text_primary(mode))}>{group.category.clone()}</h3>
                </div>
                <p class={classes!("text-sm", "mb-6", styles::text_secondary(mode))}>{group.description.clone()}</p>
                <ul class="flex flex-wrap gap-2">
                    {for group.skills.iter().map(|skill| {
                        let onmouseenter = {
                            let on_hover = props.on_hover.clone();
                            let payload = (skill.clone(), group.category.clone());
                            Callback::from(move |_: MouseEvent| on_hover.emit(payload.clone()))
                        };
                        html! {
                            <li
                                key={skill.name.clone()}
                                {onmouseenter}
                                class={classes!("px-3", "py-1.5", "rounded-xl", "border", "text-sm", "font-semibold", "cursor-default", "transition-all", styles::chip(mode))}
                            >
                                <span class="inline-block w-2 h-2 rounded-full mr-2" style={format!("background: {};", skill.color.for_theme(mode))}></span>
                                {skill.name.clone()}
                            </li>
                        }
                    })}
                </ul>
            </article>
        </Reveal>
    }
}
