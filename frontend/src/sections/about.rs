use portfolio_shared::animation::Reveal as RevealEffect;
use portfolio_shared::catalog::Profile;
use portfolio_shared::nav::NavTarget;
use yew::prelude::*;

use crate::components::anchor::anchor_onclick;
use crate::components::reveal::Reveal;
use crate::components::section_header::SectionHeader;
use crate::components::tilted_card::TiltedCard;
use crate::hooks::use_theme;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub profile: Profile,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let mode = use_theme();
    let profile = &props.profile;
    let facts = profile.quick_facts();

    if profile.about.is_empty() && facts.is_empty() {
        return html! { <section id={NavTarget::About.anchor()} class={styles::SECTION}></section> };
    }

    html! {
        <section id={NavTarget::About.anchor()} class={styles::SECTION}>
            <div class={styles::CONTAINER}>
                <SectionHeader eyebrow="About Me" title="Engineering" highlight={Some(AttrValue::from("with intent"))} />
                <div class="grid lg:grid-cols-[1.4fr_1fr] gap-16 items-start">
                    <Reveal effect={RevealEffect::slide_from_left()}>
                        {for profile.about.iter().enumerate().map(|(index, paragraph)| html! {
                            <p key={index} class={classes!("text-lg", "leading-relaxed", "mb-6", styles::text_secondary(mode))}>
                                {paragraph.clone()}
                            </p>
                        })}
                        if !profile.focus.is_empty() {
                            <h3 class={classes!("text-sm", "font-black", "uppercase", "tracking-widest", "mt-10", "mb-4", styles::text_primary(mode))}>
                                {"Current focus"}
                            </h3>
                            <ul class="space-y-3">
                                {for profile.focus.iter().map(|item| html! {
                                    <li key={item.clone()} class={classes!("flex", "gap-3", styles::text_secondary(mode))}>
                                        <span class="text-blue-500">{"▹"}</span>
                                        {item.clone()}
                                    </li>
                                })}
                            </ul>
                        }
                        if !profile.philosophy.is_empty() {
                            <blockquote class={classes!("mt-10", "border-l-4", "border-blue-500", "pl-6", "italic", styles::text_primary(mode))}>
                                {profile.philosophy.clone()}
                            </blockquote>
                        }
                        if !profile.resume_url.is_empty() {
                            <a
                                href={profile.resume_url.clone()}
                                onclick={anchor_onclick(profile.resume_url.clone(), None)}
                                class={classes!(styles::BUTTON_PRIMARY, "mt-10")}
                            >
                                {"Download Resume"}
                            </a>
                        }
                    </Reveal>
                    if !facts.is_empty() {
                        <Reveal effect={RevealEffect::zoom_in().with_delay(0.2)}>
                            <TiltedCard caption={Some(AttrValue::from("Quick facts"))}>
                                <dl class={classes!("rounded-[2rem]", "border", "p-8", "space-y-6", styles::card(mode))}>
                                    {for facts.iter().map(|(label, value)| html! {
                                        <div key={*label}>
                                            <dt class={styles::EYEBROW}>{*label}</dt>
                                            <dd class={classes!("text-xl", "font-bold", styles::text_primary(mode))}>{value.to_string()}</dd>
                                        </div>
                                    })}
                                </dl>
                            </TiltedCard>
                        </Reveal>
                    }
                </div>
            </div>
        </section>
    }
}
