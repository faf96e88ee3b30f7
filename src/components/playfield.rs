use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::config::{TARGET_LIFETIME_MS, TARGET_SIZE_PX};
use crate::state::{Target, TargetId};

#[derive(Properties, PartialEq, Clone)]
pub struct PlayfieldProps {
    pub targets: Vec<Target>,
    pub on_hit: Callback<TargetId>,
    pub on_expire: Callback<TargetId>,
}

#[function_component(Playfield)]
pub fn playfield(props: &PlayfieldProps) -> Html {
    html! {
        <div id="playfield" class="playfield" style="position:relative;">
            { for props.targets.iter().map(|t| html! {
                <HeartTarget
                    key={t.id.0}
                    target={*t}
                    on_hit={props.on_hit.clone()}
                    on_expire={props.on_expire.clone()}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
struct HeartTargetProps {
    target: Target,
    on_hit: Callback<TargetId>,
    on_expire: Callback<TargetId>,
}

#[function_component(HeartTarget)]
fn heart_target(props: &HeartTargetProps) -> Html {
    // Lifetime timer lives exactly as long as the heart is mounted.
    {
        let on_expire = props.on_expire.clone();
        use_effect_with(props.target.id, move |id| {
            let id = *id;
            let timer = Timeout::new(TARGET_LIFETIME_MS, move || on_expire.emit(id));
            move || drop(timer)
        });
    }
    let onclick = {
        let cb = props.on_hit.clone();
        let id = props.target.id;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(id);
        })
    };
    let size = TARGET_SIZE_PX;
    let spot = props.target.spot;
    let style = format!(
        "position:absolute; width:{size}px; height:{size}px; left:calc((100% - {size}px) * {:.4}); top:calc((100% - {size}px) * {:.4});",
        spot.fx, spot.fy
    );
    html! {
        <button type="button" class="game-heart" aria-label="Catch heart" {style} {onclick}>{"💖"}</button>
    }
}
