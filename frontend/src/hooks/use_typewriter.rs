use gloo_timers::callback::Timeout;
use portfolio_shared::animation::{Typewriter, TypewriterConfig};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct TypewriterStore {
    writer: Typewriter,
    next_delay: Option<u32>,
    step: u64,
}

impl Reducible for TypewriterStore {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        let mut next = (*self).clone();
        next.next_delay = next.writer.tick();
        next.step += 1;
        Rc::new(next)
    }
}

/// Text currently shown by a typewriter cycling through `phrases`.
#[hook]
pub fn use_typewriter(phrases: Vec<String>, config: TypewriterConfig) -> String {
    let store = use_reducer(move || {
        let next_delay = (!phrases.is_empty()).then_some(config.typing_ms);
        TypewriterStore {
            writer: Typewriter::new(phrases, config),
            next_delay,
            step: 0,
        }
    });

    {
        let dispatcher = store.dispatcher();
        use_effect_with((store.step, store.next_delay), move |(_, next_delay)| {
            let timeout = next_delay.map(|delay| Timeout::new(delay, move || dispatcher.dispatch(())));
            move || drop(timeout)
        });
    }

    store.writer.displayed().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_advances_writer() {
        let store = Rc::new(TypewriterStore {
            writer: Typewriter::new(vec!["Hi".to_string()], TypewriterConfig::default()),
            next_delay: Some(70),
            step: 0,
        });
        let next = store.reduce(());
        assert_eq!(next.step, 1);
        assert_eq!(next.writer.displayed(), "H");
        assert_eq!(next.next_delay, Some(70));
    }
}
