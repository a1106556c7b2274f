use portfolio_shared::animation::{Tilt, TiltPose};
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TiltedCardProps {
    #[prop_or_default]
    pub tilt: Tilt,
    /// Tooltip that follows the pointer while hovering.
    #[prop_or_default]
    pub caption: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[derive(Clone, Copy, PartialEq)]
struct Hover {
    pose: TiltPose,
    x: f64,
    y: f64,
}

#[function_component(TiltedCard)]
pub fn tilted_card(props: &TiltedCardProps) -> Html {
    let node = use_node_ref();
    let hover = use_state(|| None::<Hover>);

    let onmousemove = {
        let node = node.clone();
        let hover = hover.clone();
        let tilt = props.tilt;
        Callback::from(move |e: MouseEvent| {
            let Some(element) = node.cast::<Element>() else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            let x = e.client_x() as f64 - rect.left();
            let y = e.client_y() as f64 - rect.top();
            hover.set(Some(Hover {
                pose: tilt.pose(x, y, rect.width(), rect.height()),
                x,
                y,
            }));
        })
    };

    let onmouseleave = {
        let hover = hover.clone();
        Callback::from(move |_: MouseEvent| hover.set(None))
    };

    let pose = hover.map(|h| h.pose).unwrap_or(TiltPose::REST);

    html! {
        <figure
            ref={node}
            {onmousemove}
            {onmouseleave}
            class={classes!("relative", "[perspective:800px]", props.class.clone())}
        >
            <div
                class="w-full h-full [transform-style:preserve-3d] transition-transform duration-200 ease-out will-change-transform"
                style={format!("transform: {};", pose.css())}
            >
                {props.children.clone()}
            </div>
            if let (Some(caption), Some(h)) = (props.caption.clone(), *hover) {
                <figcaption
                    class="pointer-events-none absolute left-0 top-0 z-10 hidden sm:block rounded bg-white px-2.5 py-1 text-[10px] text-slate-800"
                    style={format!("transform: translate3d({:.0}px, {:.0}px, 0);", h.x + 12.0, h.y + 12.0)}
                >
                    {caption}
                </figcaption>
            }
        </figure>
    }
}
