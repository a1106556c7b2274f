use portfolio_shared::animation::scroll::{HERO_GLOW, HERO_IMAGE, HERO_TEXT};
use portfolio_shared::animation::{Easing, Position, Timeline};
use portfolio_shared::catalog::Profile;
use portfolio_shared::constants::{ENTRANCE_DURATION, ENTRANCE_OVERLAP};
use portfolio_shared::nav::NavTarget;
use yew::prelude::*;

use crate::components::anchor::anchor_onclick;
use crate::components::pixel_transition::PixelTransition;
use crate::components::text_type::TextType;
use crate::components::tilted_card::TiltedCard;
use crate::components::variable_proximity::VariableProximity;
use crate::config::get_asset_url;
use crate::hooks::{use_scroll_progress, use_theme};
use crate::styles;

const ENTRANCE_KEYFRAMES: &str = "hero-enter";

/// Staggered load-in of the hero blocks; the portrait starts alongside the title.
pub fn entrance() -> Timeline {
    Timeline::new(ENTRANCE_DURATION, Easing::Power3Out)
        .then("badge", Position::AfterPrevious)
        .then("title", Position::Overlap(ENTRANCE_OVERLAP))
        .then("roles", Position::Overlap(ENTRANCE_OVERLAP))
        .then("tagline", Position::Overlap(ENTRANCE_OVERLAP))
        .then("actions", Position::Overlap(ENTRANCE_OVERLAP))
        .then("stats", Position::Overlap(ENTRANCE_OVERLAP))
        .then("portrait", Position::At(0.2))
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub profile: Profile,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let mode = use_theme();
    let node = use_node_ref();
    let progress = use_scroll_progress(node.clone());
    let timeline = use_memo((), |_| entrance());
    let profile = &props.profile;

    let enter = |target: &str| -> String {
        timeline
            .tween(target)
            .map(|tween| format!("animation: {};", tween.animation(ENTRANCE_KEYFRAMES)))
            .unwrap_or_default()
    };

    let projects_href = NavTarget::Projects.href();
    let contact_href = NavTarget::Contact.href();

    html! {
        <section id={NavTarget::Home.anchor()} ref={node} class="relative min-h-screen flex items-center overflow-hidden pt-28 pb-16">
            <div
                aria-hidden="true"
                class="absolute -top-40 -right-40 w-[600px] h-[600px] rounded-full bg-blue-500/20 blur-[120px] pointer-events-none"
                style={format!("transform: {};", HERO_GLOW.transform(progress))}
            ></div>
            <div class={classes!(styles::CONTAINER, "grid", "lg:grid-cols-2", "gap-16", "items-center")}>
                <div style={format!("transform: {};", HERO_TEXT.transform(progress))}>
                    if !profile.availability.is_empty() {
                        <span
                            class={classes!(styles::BADGE, styles::tag(mode), "inline-flex", "items-center", "gap-2", "mb-8")}
                            style={enter("badge")}
                        >
                            <span class="w-2 h-2 rounded-full bg-emerald-500 animate-pulse"></span>
                            {profile.availability.clone()}
                        </span>
                    }
                    <h1
                        class={classes!("font-black", "text-6xl", "md:text-8xl", "tracking-tighter", "leading-[0.9]", "mb-6", styles::text_primary(mode))}
                        style={enter("title")}
                    >
                        <VariableProximity label={profile.name.clone()} />
                    </h1>
                    if !profile.roles.is_empty() {
                        <p class={classes!("text-2xl", "md:text-3xl", "font-bold", "mb-6", styles::GRADIENT_TEXT)} style={enter("roles")}>
                            <TextType phrases={profile.roles.clone()} />
                        </p>
                    }
                    <p class={classes!(styles::LEAD, styles::text_secondary(mode), "mb-10")} style={enter("tagline")}>
                        {profile.tagline.clone()}
                    </p>
                    <div class="flex flex-wrap gap-4 mb-12" style={enter("actions")}>
                        <a href={projects_href.clone()} onclick={anchor_onclick(projects_href, None)} class={styles::BUTTON_PRIMARY}>
                            {"View Projects"}
                        </a>
                        <a
                            href={contact_href.clone()}
                            onclick={anchor_onclick(contact_href, None)}
                            class={classes!("inline-flex", "items-center", "px-6", "py-3", "rounded-xl", "border", "font-bold", "text-sm", styles::icon_button(mode))}
                        >
                            {"Contact Me"}
                        </a>
                    </div>
                    if !profile.stats.is_empty() {
                        <dl class="flex gap-12" style={enter("stats")}>
                            {for profile.stats.iter().map(|stat| html! {
                                <div key={stat.label.clone()}>
                                    <dt class={classes!("text-xs", "uppercase", "tracking-widest", "font-bold", styles::text_secondary(mode))}>
                                        {stat.label.clone()}
                                    </dt>
                                    <dd class={classes!("text-4xl", "font-black", styles::text_primary(mode))}>{stat.value.clone()}</dd>
                                </div>
                            })}
                        </dl>
                    }
                </div>
                <div style={format!("transform: {};", HERO_IMAGE.transform(progress))}>
                    <div style={enter("portrait")}>
                        {portrait(profile)}
                    </div>
                </div>
            </div>
        </section>
    }
}

fn portrait(profile: &Profile) -> Html {
    let image = |index: usize| {
        profile.portraits.get(index).map(|p| html! {
            <img src={get_asset_url(&p.src)} alt={p.alt.clone()} class="w-full h-full object-cover select-none" />
        })
    };
    let frame = "aspect-[4/5] w-full max-w-md mx-auto rounded-[2.5rem]";

    match (image(0), image(1)) {
        (Some(first), Some(second)) => html! {
            <TiltedCard>
                <PixelTransition {first} {second} class={classes!(frame)} />
            </TiltedCard>
        },
        (Some(only), None) => html! {
            <TiltedCard>
                <div class={classes!(frame, "overflow-hidden")}>{only}</div>
            </TiltedCard>
        },
        _ => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entrance_overlaps_blocks() {
        let timeline = entrance();
        let badge = timeline.tween("badge").unwrap();
        let title = timeline.tween("title").unwrap();
        assert_eq!(badge.delay, 0.0);
        assert!((title.delay - (ENTRANCE_DURATION - ENTRANCE_OVERLAP)).abs() < 1e-9);
        assert!((timeline.tween("portrait").unwrap().delay - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_entrance_steps_start_in_order() {
        let delays: Vec<f64> = entrance()
            .steps()
            .filter(|(name, _)| *name != "portrait")
            .map(|(_, tween)| tween.delay)
            .collect();
        assert!(delays.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
