use portfolio_shared::nav::NavTarget;
use yew::prelude::*;

use crate::components::anchor::anchor_onclick;
use crate::components::bubble_menu::BubbleMenu;
use crate::components::theme_toggle::ThemeToggle;
use crate::hooks::{use_scrolled, use_theme};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub short_name: AttrValue,
    pub resume_url: AttrValue,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let mode = use_theme();
    let scrolled = use_scrolled();

    html! {
        <>
            <nav class={classes!(styles::NAV, styles::nav_surface(mode, scrolled))}>
                <div class={styles::NAV_INNER}>
                    <Brand short_name={props.short_name.clone()} />
                    <div class="flex items-center gap-10">
                        <ul class="flex items-center gap-8">
                            {for NavTarget::ALL.iter().map(|target| {
                                let href = target.href();
                                html! {
                                    <li key={target.anchor()}>
                                        <a
                                            href={href.clone()}
                                            onclick={anchor_onclick(href, None)}
                                            class={classes!(styles::NAV_LINK, styles::text_secondary(mode), "hover:text-blue-500")}
                                        >
                                            {target.label()}
                                            <span class={styles::NAV_UNDERLINE}></span>
                                        </a>
                                    </li>
                                }
                            })}
                        </ul>
                        <div class="flex items-center gap-4">
                            <ThemeToggle />
                            <a
                                href={props.resume_url.clone()}
                                onclick={anchor_onclick(props.resume_url.to_string(), None)}
                                class={styles::BUTTON_PRIMARY}
                            >
                                {"Resume"}
                            </a>
                        </div>
                    </div>
                </div>
            </nav>
            <BubbleMenu short_name={props.short_name.clone()} resume_url={props.resume_url.clone()} />
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct BrandProps {
    pub short_name: AttrValue,
}

#[function_component(Brand)]
pub fn brand(props: &BrandProps) -> Html {
    let mode = use_theme();
    let href = NavTarget::Home.href();
    html! {
        <a href={href.clone()} onclick={anchor_onclick(href, None)} class={classes!(styles::NAV_BRAND, styles::text_primary(mode))}>
            {props.short_name.clone()}
            <span class="text-blue-500">{"."}</span>
        </a>
    }
}
