use gloo_timers::callback::Timeout;
use portfolio_shared::animation::PixelTransition as PixelGrid;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PixelTransitionProps {
    pub first: Html,
    pub second: Html,
    #[prop_or_default]
    pub grid: PixelGrid,
    #[prop_or(AttrValue::Static("#3b82f6"))]
    pub pixel_color: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Swaps `first` for `second` on hover behind a randomly ordered pixel flash.
#[function_component(PixelTransition)]
pub fn pixel_transition(props: &PixelTransitionProps) -> Html {
    let seed = use_state(rand::random::<u64>);
    let grid = props.grid;
    let delays = use_memo((grid, *seed), |(grid, seed)| grid.cell_delays(*seed));
    let active = use_state(|| false);
    let flashing = use_state(|| false);
    let pending = use_mut_ref(|| None::<Timeout>);

    let transition_to = {
        let active = active.clone();
        let flashing = flashing.clone();
        let pending = pending.clone();
        move |target: bool| {
            if *active == target {
                return;
            }
            flashing.set(true);
            let active = active.clone();
            let flashing = flashing.clone();
            let swap_ms = (grid.step_duration * 1000.0) as u32;
            // replacing a pending swap cancels it
            *pending.borrow_mut() = Some(Timeout::new(swap_ms, move || {
                active.set(target);
                flashing.set(false);
            }));
        }
    };

    let onmouseenter = {
        let transition_to = transition_to.clone();
        Callback::from(move |_: MouseEvent| transition_to(true))
    };
    let onmouseleave = {
        let transition_to = transition_to.clone();
        Callback::from(move |_: MouseEvent| transition_to(false))
    };
    let onclick = {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| transition_to(!*active))
    };

    let size = grid.cell_size_percent();
    let cell_duration = grid.step_duration / 4.0;

    html! {
        <div
            {onmouseenter}
            {onmouseleave}
            {onclick}
            class={classes!("relative", "overflow-hidden", "cursor-pointer", props.class.clone())}
        >
            <div class="absolute inset-0">
                if *active { {props.second.clone()} } else { {props.first.clone()} }
            </div>
            <div class="absolute inset-0 pointer-events-none z-10" aria-hidden="true">
                {for delays.iter().enumerate().map(|(index, delay)| {
                    let row = index / grid.grid.max(1);
                    let col = index % grid.grid.max(1);
                    let style = format!(
                        "left: {:.4}%; top: {:.4}%; width: {:.4}%; height: {:.4}%; background: {}; opacity: {}; transition: opacity {:.2}s linear {:.3}s;",
                        col as f64 * size,
                        row as f64 * size,
                        size,
                        size,
                        props.pixel_color,
                        if *flashing { 1 } else { 0 },
                        cell_duration,
                        delay,
                    );
                    html! { <div key={index} class="absolute" {style}></div> }
                })}
            </div>
        </div>
    }
}
