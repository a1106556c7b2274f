use portfolio_shared::animation::{distance, Proximity};
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VariableProximityProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub config: Proximity,
    #[prop_or_default]
    pub class: Classes,
}

/// Text whose letters thicken as the pointer approaches them.
#[function_component(VariableProximity)]
pub fn variable_proximity(props: &VariableProximityProps) -> Html {
    let letters: Vec<char> = props.label.chars().collect();
    let refs = use_memo(letters.len(), |count| (0..*count).map(|_| NodeRef::default()).collect::<Vec<_>>());
    let settings = use_state(|| None::<Vec<String>>);

    let onmousemove = {
        let refs = refs.clone();
        let settings = settings.clone();
        let config = props.config;
        Callback::from(move |e: MouseEvent| {
            let (px, py) = (e.client_x() as f64, e.client_y() as f64);
            let next = refs
                .iter()
                .map(|node| match node.cast::<Element>() {
                    Some(element) => {
                        let rect = element.get_bounding_client_rect();
                        let cx = rect.left() + rect.width() / 2.0;
                        let cy = rect.top() + rect.height() / 2.0;
                        config.font_variation(distance(px, py, cx, cy))
                    }
                    None => config.font_variation(f64::INFINITY),
                })
                .collect();
            settings.set(Some(next));
        })
    };

    let onmouseleave = {
        let settings = settings.clone();
        Callback::from(move |_: MouseEvent| settings.set(None))
    };

    let resting = props.config.font_variation(f64::INFINITY);

    html! {
        <span {onmousemove} {onmouseleave} class={props.class.clone()} aria-label={props.label.clone()}>
            {for letters.iter().zip(refs.iter()).enumerate().map(|(index, (letter, node))| {
                let variation = (*settings)
                    .as_ref()
                    .and_then(|s| s.get(index).cloned())
                    .unwrap_or_else(|| resting.clone());
                html! {
                    <span
                        key={index}
                        ref={node.clone()}
                        aria-hidden="true"
                        class="inline-block whitespace-pre"
                        style={format!("font-variation-settings: {};", variation)}
                    >
                        {letter.to_string()}
                    </span>
                }
            })}
        </span>
    }
}
