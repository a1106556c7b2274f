use portfolio_shared::animation::Reveal as RevealEffect;
use portfolio_shared::catalog::{ContactDetails, SocialLink};
use portfolio_shared::nav::NavTarget;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::section_header::SectionHeader;
use crate::hooks::use_theme;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub contact: ContactDetails,
    #[prop_or_default]
    pub socials: Vec<SocialLink>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let mode = use_theme();
    let contact = &props.contact;

    if contact.email.is_empty() && props.socials.is_empty() {
        return html! { <section id={NavTarget::Contact.anchor()} class={styles::SECTION}></section> };
    }

    let row = classes!("flex", "items-center", "gap-4", "rounded-2xl", "border", "p-5", "transition-all", "hover:-translate-y-0.5", styles::card(mode));

    html! {
        <section id={NavTarget::Contact.anchor()} class={styles::SECTION}>
            <div class={styles::CONTAINER}>
                <SectionHeader
                    eyebrow="Contact"
                    title="Let's build"
                    highlight={Some(AttrValue::from("together"))}
                    lead={(!contact.blurb.is_empty()).then(|| AttrValue::from(contact.blurb.clone()))}
                />
                <Reveal effect={RevealEffect::fade_up().with_delay(0.1)} class={classes!("grid", "md:grid-cols-2", "gap-6", "max-w-4xl")}>
                    if !contact.email.is_empty() {
                        <a href={contact.mailto()} class={row.clone()}>
                            <span class="text-2xl">{"✉"}</span>
                            <span>
                                <span class={styles::EYEBROW}>{"Email"}</span>
                                <span class={classes!("font-bold", styles::text_primary(mode))}>{contact.email.clone()}</span>
                            </span>
                        </a>
                    }
                    if let Some(messaging_url) = contact.messaging_url.clone() {
                        <a href={messaging_url} target="_blank" rel="noopener noreferrer" class={row.clone()}>
                            <span class="text-2xl">{"💬"}</span>
                            <span>
                                <span class={styles::EYEBROW}>{"Message"}</span>
                                <span class={classes!("font-bold", styles::text_primary(mode))}>{"Start a chat"}</span>
                            </span>
                        </a>
                    }
                    if !contact.location.is_empty() {
                        <div class={row.clone()}>
                            <span class="text-2xl">{"📍"}</span>
                            <span>
                                <span class={styles::EYEBROW}>{"Location"}</span>
                                <span class={classes!("font-bold", styles::text_primary(mode))}>{contact.location.clone()}</span>
                            </span>
                        </div>
                    }
                    {for props.socials.iter().map(|social| html! {
                        <a
                            key={social.name.clone()}
                            href={social.url.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                            class={row.clone()}
                        >
                            <span class="w-3 h-3 rounded-full" style={format!("background: {};", social.color.for_theme(mode))}></span>
                            <span>
                                <span class={styles::EYEBROW}>{social.name.clone()}</span>
                                <span class={classes!("font-bold", styles::text_primary(mode))}>
                                    {if social.handle.is_empty() { social.url.clone() } else { social.handle.clone() }}
                                </span>
                            </span>
                        </a>
                    })}
                </Reveal>
            </div>
        </section>
    }
}
