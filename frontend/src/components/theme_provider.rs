use portfolio_shared::{ThemeMode, ThemeState};
use yew::prelude::*;

use crate::hooks::{ThemeContext, ThemeStore};
use crate::{storage, styles};

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    /// Skips the stored preference when set.
    #[prop_or_default]
    pub initial: Option<ThemeMode>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let initial = props.initial;
    let store = use_reducer(move || ThemeStore(ThemeState::new(initial.unwrap_or_else(storage::load_theme))));
    let mode = store.0.mode();

    use_effect_with(mode, |mode| {
        storage::apply_theme(*mode);
        || ()
    });

    html! {
        <ContextProvider<ThemeContext> context={store}>
            <div class={classes!(mode.as_str(), styles::PAGE, styles::page_surface(mode))} data-theme={mode.as_str()}>
                {props.children.clone()}
            </div>
        </ContextProvider<ThemeContext>>
    }
}
