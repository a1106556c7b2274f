use gloo::events::EventListener;
use portfolio_shared::catalog::Project;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::config::get_asset_url;
use crate::hooks::use_theme;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ProjectModalProps {
    pub project: Project,
    pub on_close: Callback<()>,
}

/// Detail view for one project. Closes on the backdrop, the close button or Escape.
#[function_component(ProjectModal)]
pub fn project_modal(props: &ProjectModalProps) -> Html {
    let mode = use_theme();

    {
        let on_close = props.on_close.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().and_then(|w| w.document()).map(|document| {
                EventListener::new(&document, "keydown", move |event| {
                    let is_escape = event
                        .dyn_ref::<KeyboardEvent>()
                        .is_some_and(|e| e.key() == "Escape");
                    if is_escape {
                        on_close.emit(());
                    }
                })
            });
            move || drop(listener)
        });
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let project = &props.project;

    html! {
        <div class={styles::MODAL_BACKDROP} onclick={close.clone()}>
            <div class="flex min-h-full items-center justify-center p-4">
                <div
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="project-modal-title"
                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                    class={classes!(styles::MODAL_PANEL, styles::modal_panel(mode))}
                >
                    <button
                        type="button"
                        onclick={close}
                        aria-label="Close project details"
                        class={classes!("absolute", "top-4", "right-4", "z-10", styles::BUTTON_ICON, styles::icon_button(mode))}
                    >
                        {"✕"}
                    </button>
                    <div class="aspect-video w-full overflow-hidden">
                        <img
                            src={get_asset_url(&project.image)}
                            alt={project.title.clone()}
                            class="w-full h-full object-cover select-none"
                        />
                    </div>
                    <div class="p-8">
                        <span class={styles::EYEBROW}>{project.short_label.clone()}</span>
                        <h3 id="project-modal-title" class={classes!("text-3xl", "font-black", "mb-4", styles::text_primary(mode))}>
                            {project.title.clone()}
                        </h3>
                        <p class={classes!("leading-relaxed", "mb-6", styles::text_secondary(mode))}>
                            {project.description.clone()}
                        </p>
                        <ul class="flex flex-wrap gap-2 mb-8" aria-label="Technologies">
                            {for project.tech.iter().map(|tag| html! {
                                <li
                                    key={tag.name.clone()}
                                    class={classes!(styles::BADGE, styles::tag(mode))}
                                    style={format!("color: {};", tag.color.for_theme(mode))}
                                >
                                    {tag.name.clone()}
                                </li>
                            })}
                        </ul>
                        <div class="flex flex-wrap gap-4">
                            <a href={project.live_url.clone()} target="_blank" rel="noopener noreferrer" class={styles::BUTTON_PRIMARY}>
                                {"Live Demo"}
                            </a>
                            <a
                                href={project.repo_url.clone()}
                                target="_blank"
                                rel="noopener noreferrer"
                                class={classes!("inline-flex", "items-center", "px-6", "py-3", "rounded-xl", "border", "font-bold", "text-sm", styles::icon_button(mode))}
                            >
                                {"Source"}
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_shared::Catalog;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn test_modal_shows_only_selected_project() {
        let catalog = Catalog::load().unwrap();
        let selected = catalog.projects[1].clone();
        let expected = selected.clone();

        let html = ServerRenderer::<ProjectModal>::with_props(move || ProjectModalProps {
            project: selected,
            on_close: Callback::noop(),
        })
        .render()
        .await;

        assert!(html.contains(&expected.title));
        assert!(html.contains(&expected.description.replace('&', "&amp;")));
        for tag in &expected.tech {
            assert!(html.contains(&tag.name));
        }
        for other in catalog.projects.iter().filter(|p| p.id != expected.id) {
            assert!(!html.contains(&other.title));
        }
        assert!(!html.contains("MongoDB"));
        assert!(!html.contains("GSAP"));
    }
}
