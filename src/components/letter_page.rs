use yew::prelude::*;

use crate::dom::{self, pulse};

#[derive(Properties, PartialEq, Clone)]
pub struct LetterPageProps {
    /// The game overlay is still in front of the page.
    pub gated: bool,
    pub revealed: bool,
    pub hinting: bool,
    pub main_ref: NodeRef,
    pub secret_ref: NodeRef,
    pub on_reveal: Callback<()>,
}

#[function_component(LetterPage)]
pub fn letter_page(props: &LetterPageProps) -> Html {
    let cute = use_state(|| false);

    let reveal_btn = {
        let cb = props.on_reveal.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let print_btn = Callback::from(|_| dom::print());
    let cute_btn = {
        let cute = cute.clone();
        Callback::from(move |_| {
            cute.set(!*cute);
            pulse::emit();
        })
    };

    let visibility = if props.gated {
        "visibility:hidden;"
    } else {
        "visibility:visible;"
    };
    let reveal_label = if props.revealed {
        "Fold the letter"
    } else {
        "Open the letter"
    };

    html! {
        <main class="page" ref={props.main_ref.clone()} aria-hidden={props.gated.to_string()} style={visibility}>
            <header>
                <h1 id="letter-title">{"A letter for you"}</h1>
                <p class="lede">{"Some words are worth a little game first."}</p>
            </header>
            <div class="letter-actions" style="display:flex; gap:10px; flex-wrap:wrap;">
                <button
                    type="button"
                    id="revealBtn"
                    class={classes!("reveal-btn", props.hinting.then_some("shake"))}
                    aria-controls="secret"
                    aria-pressed={props.revealed.to_string()}
                    aria-expanded={props.revealed.to_string()}
                    disabled={props.gated}
                    onclick={reveal_btn}
                >
                    { reveal_label }
                </button>
                <button type="button" id="shareBtn" disabled={props.gated} onclick={print_btn}>
                    {"Print"}
                </button>
                <button
                    type="button"
                    id="cuteToggle"
                    class={classes!("cute-toggle", (*cute).then_some("activated"))}
                    aria-pressed={(*cute).to_string()}
                    onclick={cute_btn}
                >
                    {"💗"}
                </button>
            </div>
            <section
                id="secret"
                ref={props.secret_ref.clone()}
                class={classes!("secret", (!props.revealed).then_some("hidden"))}
                aria-hidden={(!props.revealed).to_string()}
            >
                <h2>{"Dear you,"}</h2>
                <p>{"You caught every heart I sent. This one was always yours."}</p>
                <p class="signature">{"Always, me"}</p>
            </section>
        </main>
    }
}
