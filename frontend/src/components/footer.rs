use chrono::Datelike;
use portfolio_shared::catalog::SocialLink;
use yew::prelude::*;

use crate::config::BUILT_WITH;
use crate::hooks::use_theme;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub name: AttrValue,
    #[prop_or_default]
    pub socials: Vec<SocialLink>,
    /// `mailto:` target appended after the social links.
    #[prop_or_default]
    pub mailto: Option<AttrValue>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let mode = use_theme();
    let year = chrono::Local::now().year();

    html! {
        <footer class={classes!(styles::FOOTER, styles::divider(mode), styles::page_surface(mode))}>
            <div class="max-w-[1400px] mx-auto px-6 flex flex-col md:flex-row items-center justify-between gap-4">
                <p class={classes!("text-sm", styles::text_secondary(mode))}>
                    {format!("© {} {}. {}", year, props.name, BUILT_WITH)}
                </p>
                <ul class="flex items-center gap-6">
                    {for props.socials.iter().map(|social| html! {
                        <li key={social.name.clone()}>
                            <a
                                href={social.url.clone()}
                                target="_blank"
                                rel="noopener noreferrer"
                                class={classes!(styles::FOOTER_LINK, styles::text_secondary(mode))}
                            >
                                {social.name.clone()}
                            </a>
                        </li>
                    })}
                    if let Some(mailto) = props.mailto.clone() {
                        <li>
                            <a href={mailto} class={classes!(styles::FOOTER_LINK, styles::text_secondary(mode))}>
                                {"Email"}
                            </a>
                        </li>
                    }
                </ul>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_shared::Catalog;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn test_email_follows_socials() {
        let catalog = Catalog::load().unwrap();
        let socials = catalog.socials.clone();
        let mailto = catalog.contact.mailto();
        let props_mailto = mailto.clone();
        let html = ServerRenderer::<Footer>::with_props(move || FooterProps {
            name: "Aniket".into(),
            socials,
            mailto: Some(props_mailto.into()),
        })
        .render()
        .await;

        let email_at = html.find(&format!("href=\"{}\"", mailto)).unwrap();
        assert!(html[email_at..].contains(">Email<"));
        for social in &catalog.socials {
            assert!(html.find(&social.url).unwrap() < email_at);
        }
    }

    #[tokio::test]
    async fn test_no_email_without_address() {
        let html = ServerRenderer::<Footer>::with_props(|| FooterProps {
            name: "Aniket".into(),
            socials: Vec::new(),
            mailto: None,
        })
        .render()
        .await;
        assert!(!html.contains("mailto:"));
    }
}
