use portfolio_shared::animation::{stagger, Reveal as RevealEffect};
use portfolio_shared::catalog::Project;
use portfolio_shared::nav::NavTarget;
use portfolio_shared::selection::ProjectModal as ModalState;
use std::rc::Rc;
use yew::prelude::*;

use crate::components::project_modal::ProjectModal;
use crate::components::reveal::Reveal;
use crate::components::section_header::SectionHeader;
use crate::components::tilted_card::TiltedCard;
use crate::config::get_asset_url;
use crate::hooks::use_theme;
use crate::styles;

const TILE_STAGGER: f64 = 0.1;

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub projects: Vec<Project>,
    /// "See more" destination, usually the code-hosting profile.
    #[prop_or_default]
    pub more_url: Option<AttrValue>,
}

pub enum GalleryAction {
    Select(Project),
    Close,
}

/// Reducer over the gallery's modal state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryStore {
    pub modal: ModalState,
}

impl Reducible for GalleryStore {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut modal = self.modal.clone();
        match action {
            GalleryAction::Select(project) => {
                log::debug!("Opening project {}", project.id);
                modal.select(&project);
            }
            GalleryAction::Close => {
                log::debug!("Closing project modal");
                modal.close();
            }
        }
        Rc::new(GalleryStore { modal })
    }
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    let mode = use_theme();
    let gallery = use_reducer(GalleryStore::default);

    if props.projects.is_empty() {
        return html! { <section id={NavTarget::Projects.anchor()} class={styles::SECTION}></section> };
    }

    let on_select = {
        let gallery = gallery.dispatcher();
        Callback::from(move |project: Project| gallery.dispatch(GalleryAction::Select(project)))
    };

    let on_close = {
        let gallery = gallery.dispatcher();
        Callback::from(move |_: ()| gallery.dispatch(GalleryAction::Close))
    };

    html! {
        <section id={NavTarget::Projects.anchor()} class={styles::SECTION}>
            <div class={styles::CONTAINER}>
                <SectionHeader
                    eyebrow="Portfolio"
                    title="Selected"
                    highlight={Some(AttrValue::from("work"))}
                    lead={Some(AttrValue::from("A few things I have designed and built. Open a tile for the details."))}
                />
                <div class="grid md:grid-cols-2 gap-8">
                    {for props.projects.iter().enumerate().map(|(index, project)| html! {
                        <Reveal key={project.id} effect={RevealEffect::fade_up().with_delay(stagger(index, TILE_STAGGER, 0.0))}>
                            <ProjectTile project={project.clone()} on_select={on_select.clone()} />
                        </Reveal>
                    })}
                </div>
                if let Some(more_url) = props.more_url.clone() {
                    <div class="mt-16 text-center">
                        <a
                            href={more_url}
                            target="_blank"
                            rel="noopener noreferrer"
                            class={classes!(styles::NAV_LINK, styles::text_secondary(mode), "hover:text-blue-500")}
                        >
                            {"See more on GitHub →"}
                        </a>
                    </div>
                }
            </div>
            <ProjectDialog modal={gallery.modal.clone()} {on_close} />
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectDialogProps {
    pub modal: ModalState,
    pub on_close: Callback<()>,
}

/// Renders the detail modal while a project is selected.
#[function_component(ProjectDialog)]
pub fn project_dialog(props: &ProjectDialogProps) -> Html {
    match props.modal.selected() {
        Some(project) => html! {
            <ProjectModal project={project.clone()} on_close={props.on_close.clone()} />
        },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
struct ProjectTileProps {
    project: Project,
    on_select: Callback<Project>,
}

#[function_component(ProjectTile)]
fn project_tile(props: &ProjectTileProps) -> Html {
    let mode = use_theme();
    let project = &props.project;

    let onclick = {
        let on_select = props.on_select.clone();
        let project = project.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(project.clone()))
    };

    html! {
        <TiltedCard caption={Some(AttrValue::from(project.short_label.clone()))}>
            <button
                type="button"
                {onclick}
                aria-haspopup="dialog"
                class={classes!("group", "block", "w-full", "text-left", "rounded-[2rem]", "border", "overflow-hidden", styles::card(mode))}
            >
                <div class="aspect-video overflow-hidden">
                    <img
                        src={get_asset_url(&project.image)}
                        alt={project.title.clone()}
                        loading="lazy"
                        class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-105"
                    />
                </div>
                <div class="p-6">
                    <h3 class={classes!("text-2xl", "font-black", "mb-2", styles::text_primary(mode))}>{project.title.clone()}</h3>
                    <p class={classes!("text-sm", "mb-4", "line-clamp-2", styles::text_secondary(mode))}>{project.description.clone()}</p>
                    <ul class="flex flex-wrap gap-2">
                        {for project.tech.iter().map(|tag| html! {
                            <li key={tag.name.clone()} class={classes!(styles::BADGE, styles::tag(mode))}>{tag.name.clone()}</li>
                        })}
                    </ul>
                </div>
            </button>
        </TiltedCard>
    }
}
