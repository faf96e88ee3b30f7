use gloo::timers::callback::Timeout;
use web_sys::{Element, EventTarget, HtmlElement};
use yew::prelude::*;

use super::{game_overlay::GameOverlay, letter_page::LetterPage};
use crate::config::{
    GameConfig, OVERLAY_FADE_FALLBACK_MS, REVEAL_HINT_MS, SHAKE_MS, WIN_SCROLL_DELAY_MS,
};
use crate::dom::{self, clock::SessionClock, focus, pulse, scroll, scroll_lock::ScrollLock, wiring};
use crate::model::{GateAction, GateState};
use crate::state::{OverlayPhase, Outcome, TargetId};

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: GameConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let gate = use_reducer({
        let config = props.config;
        move || GateState::new(config)
    });
    let start_ref = use_node_ref();
    let main_ref = use_node_ref();
    let secret_ref = use_node_ref();
    let gated = gate.overlay.is_visible();

    // Effect: start control wiring (mount only)
    {
        let dispatcher = gate.dispatcher();
        let start_ref = start_ref.clone();
        use_effect_with((), move |_| {
            let start = Callback::from(move |_: ()| {
                dispatcher.dispatch(GateAction::Start {
                    first: dom::random_spot(),
                })
            });
            let control = start_ref.cast::<Element>().map(EventTarget::from);
            let wiring = dom::document().map(|doc| wiring::wire_start(&doc, control.as_ref(), start));
            move || drop(wiring)
        });
    }

    // Effect: background lock and focus follow overlay visibility
    {
        let start_ref = start_ref.clone();
        let main_ref = main_ref.clone();
        use_effect_with(gated, move |gated| {
            let lock = if *gated {
                focus::focus_ref(&start_ref);
                ScrollLock::engage()
            } else {
                focus::release_into(&main_ref);
                None
            };
            move || drop(lock)
        });
    }

    // Effect: spawn + countdown intervals for the current run
    {
        let dispatcher = gate.dispatcher();
        let run = (gate.session.run_id(), gate.session.is_running());
        use_effect_with(run, move |&(run_id, running)| {
            let clock = running.then(|| SessionClock::start(run_id, dispatcher));
            move || drop(clock)
        });
    }

    // Effect: celebrate and scroll home after a win
    use_effect_with(
        (gate.session.run_id(), gate.session.outcome()),
        move |&(_, outcome)| {
            if outcome == Some(Outcome::Won) {
                pulse::celebrate();
                dom::defer(WIN_SCROLL_DELAY_MS, scroll::converge_to_top);
            }
            || ()
        },
    );

    // Effect: end the overlay shake
    {
        let dispatcher = gate.dispatcher();
        use_effect_with(gate.overlay.is_shaking(), move |shaking| {
            let timer = (*shaking)
                .then(|| Timeout::new(SHAKE_MS, move || dispatcher.dispatch(GateAction::SettleShake)));
            move || drop(timer)
        });
    }

    // Effect: fade fallback when no transitionend arrives
    {
        let dispatcher = gate.dispatcher();
        let fading = gate.overlay.phase() == OverlayPhase::FadingOut;
        use_effect_with(fading, move |fading| {
            let timer = (*fading).then(|| {
                Timeout::new(OVERLAY_FADE_FALLBACK_MS, move || {
                    dispatcher.dispatch(GateAction::OverlayFaded)
                })
            });
            move || drop(timer)
        });
    }

    // Effect: end the locked-reveal hint
    {
        let dispatcher = gate.dispatcher();
        use_effect_with(gate.reveal.is_hinting(), move |hinting| {
            let timer = (*hinting).then(|| {
                Timeout::new(REVEAL_HINT_MS, move || dispatcher.dispatch(GateAction::ClearRevealHint))
            });
            move || drop(timer)
        });
    }

    // Effect: bring the revealed section into view
    {
        let secret_ref = secret_ref.clone();
        use_effect_with(gate.reveal.is_shown(), move |shown| {
            if *shown {
                pulse::emit();
                scroll::settle_on_reveal(secret_ref.cast::<HtmlElement>());
            }
            || ()
        });
    }

    let on_reset = {
        let dispatcher = gate.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(GateAction::Reset))
    };
    let on_hit = {
        let dispatcher = gate.dispatcher();
        Callback::from(move |id: TargetId| {
            pulse::emit();
            dispatcher.dispatch(GateAction::Hit { id });
        })
    };
    let on_expire = {
        let dispatcher = gate.dispatcher();
        Callback::from(move |id: TargetId| dispatcher.dispatch(GateAction::Expire { id }))
    };
    let on_faded = {
        let dispatcher = gate.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(GateAction::OverlayFaded))
    };
    let on_reveal = {
        let dispatcher = gate.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(GateAction::ToggleReveal))
    };

    html! {
        <>
            <GameOverlay
                phase={gate.overlay.phase()}
                in_layout={gate.overlay.in_layout()}
                shaking={gate.overlay.is_shaking()}
                score={gate.session.score()}
                target={gate.session.target()}
                remaining={gate.session.remaining()}
                status={gate.session.status()}
                running={gate.session.is_running()}
                targets={gate.session.targets().to_vec()}
                start_ref={start_ref}
                on_reset={on_reset}
                on_hit={on_hit}
                on_expire={on_expire}
                on_faded={on_faded}
            />
            <LetterPage
                gated={gated}
                revealed={gate.reveal.is_shown()}
                hinting={gate.reveal.is_hinting()}
                main_ref={main_ref}
                secret_ref={secret_ref}
                on_reveal={on_reveal}
            />
        </>
    }
}
