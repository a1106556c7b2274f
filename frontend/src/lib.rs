pub mod components;
pub mod config;
pub mod hooks;
pub mod sections;
pub mod storage;
pub mod styles;

use portfolio_shared::{Catalog, ThemeMode};
use std::rc::Rc;
use yew::prelude::*;

use crate::components::{Footer, GradualBlur, Navbar, ThemeProvider};
use crate::sections::{About, Contact, Hero, Projects, Skills};

#[function_component(App)]
pub fn app() -> Html {
    let catalog = use_memo((), |_| Catalog::get().clone());
    html! {
        <Site catalog={Rc::clone(&catalog)} />
    }
}

#[derive(Properties, PartialEq)]
pub struct SiteProps {
    pub catalog: Rc<Catalog>,
    /// Overrides the stored theme preference.
    #[prop_or_default]
    pub theme: Option<ThemeMode>,
}

#[function_component(Site)]
pub fn site(props: &SiteProps) -> Html {
    html! {
        <ThemeProvider initial={props.theme}>
            <Page catalog={Rc::clone(&props.catalog)} />
        </ThemeProvider>
    }
}

#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub catalog: Rc<Catalog>,
}

/// The single page, top to bottom. Every section reads only its own slice of the catalog.
#[function_component(Page)]
pub fn page(props: &PageProps) -> Html {
    let catalog = &props.catalog;
    let profile = &catalog.profile;
    let more_url = (!catalog.contact.profile_url.is_empty()).then(|| AttrValue::from(catalog.contact.profile_url.clone()));

    html! {
        <>
            <Navbar short_name={profile.short_name.clone()} resume_url={profile.resume_url.clone()} />
            <main>
                <Hero profile={profile.clone()} />
                <About profile={profile.clone()} />
                <Skills groups={catalog.skill_groups.clone()} />
                <Projects projects={catalog.projects.clone()} {more_url} />
                <Contact contact={catalog.contact.clone()} socials={catalog.socials.clone()} />
            </main>
            <Footer
                name={profile.name.clone()}
                socials={catalog.socials.clone()}
                mailto={(!catalog.contact.email.is_empty()).then(|| AttrValue::from(catalog.contact.mailto()))}
            />
            <GradualBlur />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_shared::nav::NavTarget;
    use yew::ServerRenderer;

    async fn render(catalog: Catalog, theme: ThemeMode) -> String {
        ServerRenderer::<Site>::with_props(move || SiteProps {
            catalog: Rc::new(catalog),
            theme: Some(theme),
        })
        .render()
        .await
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[tokio::test]
    async fn test_every_section_anchor_renders_once() {
        let html = render(Catalog::load().unwrap(), ThemeMode::Dark).await;
        for target in NavTarget::ALL {
            assert_eq!(count(&html, &format!("id=\"{}\"", target.anchor())), 1, "anchor {}", target.anchor());
        }
    }

    #[tokio::test]
    async fn test_theme_changes_styling_not_content() {
        let catalog = Catalog::load().unwrap();
        let dark = render(catalog.clone(), ThemeMode::Dark).await;
        let light = render(catalog.clone(), ThemeMode::Light).await;

        assert_ne!(dark, light);
        assert!(dark.contains(styles::page_surface(ThemeMode::Dark)));
        assert!(light.contains(styles::page_surface(ThemeMode::Light)));
        assert!(light.contains("data-theme=\"light\""));

        for html in [&dark, &light] {
            for project in &catalog.projects {
                assert!(html.contains(&project.title));
            }
            for skill in catalog.skill_groups.iter().flat_map(|g| &g.skills) {
                assert!(html.contains(&skill.name));
            }
        }
    }

    #[tokio::test]
    async fn test_white_hints_swap_in_light_mode() {
        let catalog = Catalog::load().unwrap();
        let dark = render(catalog.clone(), ThemeMode::Dark).await;
        let light = render(catalog, ThemeMode::Light).await;

        assert!(dark.contains("style=\"background: #FFFFFF;\""));
        assert!(!light.contains("style=\"background: #FFFFFF;\""));
        assert!(light.contains("style=\"background: #0F172A;\""));
    }

    #[tokio::test]
    async fn test_empty_catalog_renders_shell() {
        let html = render(Catalog::empty(), ThemeMode::Dark).await;
        for target in NavTarget::ALL {
            assert!(html.contains(&format!("id=\"{}\"", target.anchor())));
        }
        assert!(!html.contains("See more on GitHub"));
        assert!(!html.contains("Quick facts"));
        assert!(!html.contains("Hover skills to inspect"));
    }

    #[tokio::test]
    async fn test_no_modal_until_a_project_is_selected() {
        let html = render(Catalog::load().unwrap(), ThemeMode::Dark).await;
        assert!(!html.contains("role=\"dialog\""));
    }
}
