use yew::prelude::*;

use super::{playfield::Playfield, status_badge::StatusBadge};
use crate::state::{OverlayPhase, Status, Target, TargetId};

pub const OVERLAY_ID: &str = "gameOverlay";

#[derive(Properties, PartialEq, Clone)]
pub struct GameOverlayProps {
    pub phase: OverlayPhase,
    /// False once the fade has finished; the overlay then leaves layout.
    pub in_layout: bool,
    pub shaking: bool,
    pub score: u32,
    pub target: u32,
    pub remaining: u32,
    pub status: Status,
    pub running: bool,
    pub targets: Vec<Target>,
    pub start_ref: NodeRef,
    pub on_reset: Callback<()>,
    pub on_hit: Callback<TargetId>,
    pub on_expire: Callback<TargetId>,
    pub on_faded: Callback<()>,
}

#[function_component(GameOverlay)]
pub fn game_overlay(props: &GameOverlayProps) -> Html {
    let hidden = props.phase != OverlayPhase::Shown;
    let display = if !props.in_layout {
        "display:none;"
    } else {
        "display:flex;"
    };
    // Transitions of the card or hearts bubble up here too; only the
    // overlay's own fade counts.
    let ontransitionend = {
        let cb = props.on_faded.clone();
        Callback::from(move |e: TransitionEvent| {
            let own = e
                .target_dyn_into::<web_sys::Element>()
                .is_some_and(|el| el.id() == OVERLAY_ID);
            if own {
                cb.emit(());
            }
        })
    };
    let reset_btn = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let start_label = match props.status {
        Status::Lost => "Try again",
        _ => "Start",
    };

    html! {
        <div
            id={OVERLAY_ID}
            class={classes!("game-overlay", hidden.then_some("hidden"), props.shaking.then_some("shake"))}
            style={display}
            role="dialog"
            aria-modal="true"
            aria-labelledby="gameTitle"
            aria-hidden={hidden.to_string()}
            {ontransitionend}
        >
            <div class="overlay-card" style="position:relative; max-width:420px; width:92%; padding:20px 22px; border-radius:16px; background:#fff; text-align:center;">
                <StatusBadge status={props.status} />
                <h2 id="gameTitle" style="margin:0 0 8px 0;">{"Catch the hearts"}</h2>
                <p style="margin:4px 0 12px 0;">
                    { format!("Catch {} hearts before the timer runs out to open the letter.", props.target) }
                </p>
                <div class="game-stats" style="display:flex; justify-content:space-between; font-weight:600;">
                    <span>{"Score: "}<span id="score">{ props.score }</span>{" / "}<span id="target">{ props.target }</span></span>
                    <span>{"Time: "}<span id="timer">{ props.remaining }</span>{"s"}</span>
                </div>
                <Playfield
                    targets={props.targets.clone()}
                    on_hit={props.on_hit.clone()}
                    on_expire={props.on_expire.clone()}
                />
                <div class="game-actions" style="margin-top:12px; display:flex; gap:12px; justify-content:center;">
                    <button type="button" id="startGame" tabindex="0" ref={props.start_ref.clone()} disabled={props.running}>
                        { start_label }
                    </button>
                    <button type="button" id="resetGame" onclick={reset_btn}>{"Reset"}</button>
                </div>
            </div>
        </div>
    }
}
