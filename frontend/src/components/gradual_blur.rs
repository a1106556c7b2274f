use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GradualBlurProps {
    #[prop_or(2.0)]
    pub strength: f64,
    #[prop_or(5)]
    pub layers: u32,
    #[prop_or(AttrValue::Static("6rem"))]
    pub height: AttrValue,
}

/// Fixed strip at the bottom of the viewport that blurs content scrolling under it.
#[function_component(GradualBlur)]
pub fn gradual_blur(props: &GradualBlurProps) -> Html {
    let layers = props.layers.max(1);
    let step = 100.0 / layers as f64;

    html! {
        <div
            aria-hidden="true"
            class="pointer-events-none fixed bottom-0 left-0 w-full z-[900]"
            style={format!("height: {};", props.height)}
        >
            {for (0..layers).map(|i| {
                let blur = props.strength * 2f64.powi(i as i32) / 2f64.powi(layers as i32 - 1);
                let start = i as f64 * step;
                let mask = format!(
                    "linear-gradient(to bottom, transparent {:.1}%, black {:.1}%)",
                    start,
                    start + step
                );
                html! {
                    <div
                        key={i}
                        class="absolute inset-0"
                        style={format!(
                            "backdrop-filter: blur({:.3}rem); -webkit-backdrop-filter: blur({:.3}rem); mask-image: {}; -webkit-mask-image: {};",
                            blur, blur, mask, mask
                        )}
                    ></div>
                }
            })}
        </div>
    }
}
