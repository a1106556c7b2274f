use portfolio_shared::{ThemeMode, ThemeState};
use std::rc::Rc;
use yew::prelude::*;

pub enum ThemeAction {
    Toggle,
}

/// Reducer wrapper so the shared `ThemeState` can back a Yew context.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThemeStore(pub ThemeState);

impl Reducible for ThemeStore {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ThemeAction::Toggle => {
                let mut state = self.0;
                let mode = state.toggle();
                log::debug!("Theme toggled to {}", mode);
                Rc::new(ThemeStore(state))
            }
        }
    }
}

pub type ThemeContext = UseReducerHandle<ThemeStore>;

/// Current mode, or the default when rendered outside a provider.
#[hook]
pub fn use_theme() -> ThemeMode {
    use_context::<ThemeContext>()
        .map(|ctx| ctx.0.mode())
        .unwrap_or_default()
}

#[hook]
pub fn use_theme_toggle() -> Callback<MouseEvent> {
    let ctx = use_context::<ThemeContext>();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        match &ctx {
            Some(ctx) => ctx.dispatch(ThemeAction::Toggle),
            None => log::warn!("Theme toggle used outside of a ThemeProvider"),
        }
    })
}
