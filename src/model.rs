//! Gate model: session, overlay and reveal composed into one reducer.
//! Every mutation of the interaction state goes through `GateState::reduce`.

use serde::Serialize;
use std::rc::Rc;
use yew::Reducible;

use crate::config::GameConfig;
use crate::state::{self, Outcome, Overlay, Reveal, RevealOutcome, Session, Spot, TargetId};

#[derive(Clone, Debug, PartialEq)]
pub struct GateState {
    pub session: Session,
    pub overlay: Overlay,
    pub reveal: Reveal,
    /// Set only by winning, cleared only by an explicit reset.
    pub unlocked: bool,
}

#[derive(Clone, Debug)]
pub enum GateAction {
    Start { first: Spot },
    Spawn { run_id: u32, spot: Spot },
    Tick { run_id: u32 },
    Hit { id: TargetId },
    Expire { id: TargetId },
    Reset,
    OverlayFaded,
    SettleShake,
    ToggleReveal,
    ClearRevealHint,
}

#[derive(Serialize)]
struct RunReport {
    run: u32,
    won: bool,
    score: u32,
    remaining: u32,
}

impl GateState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            session: Session::new(config),
            overlay: Overlay::default(),
            reveal: Reveal::default(),
            unlocked: false,
        }
    }

    fn report_end(&self, outcome: Outcome) {
        let report = RunReport {
            run: self.session.run_id(),
            won: outcome == Outcome::Won,
            score: self.session.score(),
            remaining: self.session.remaining(),
        };
        match serde_json::to_string(&report) {
            Ok(json) => log::info!("game ended {json}"),
            Err(e) => log::warn!("game ended (report failed: {e})"),
        }
    }
}

impl Reducible for GateState {
    type Action = GateAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            GateAction::Start { first } => {
                if !new.session.start(first) {
                    return self;
                }
                new.overlay.show();
                log::info!("game started (run {})", new.session.run_id());
            }
            GateAction::Spawn { run_id, spot } => {
                if new.session.spawn(run_id, spot).is_none() {
                    return self;
                }
            }
            GateAction::Tick { run_id } => match new.session.tick(run_id) {
                state::Tick::Ignored => return self,
                state::Tick::Counting(_) => {}
                state::Tick::Lost => {
                    new.overlay.shake();
                    new.report_end(Outcome::Lost);
                }
            },
            GateAction::Hit { id } => match new.session.hit(id) {
                state::Hit::Missed => return self,
                state::Hit::Scored(_) => {}
                state::Hit::Won(_) => {
                    new.unlocked = true;
                    new.overlay.hide();
                    new.report_end(Outcome::Won);
                }
            },
            GateAction::Expire { id } => {
                if !new.session.expire(id) {
                    return self;
                }
            }
            GateAction::Reset => {
                new.unlocked = false;
                new.session.reset();
                new.reveal.conceal();
                new.overlay.show();
                log::info!("gate reset");
            }
            GateAction::OverlayFaded => {
                if !new.overlay.finish_fade() {
                    return self;
                }
            }
            GateAction::SettleShake => {
                if !new.overlay.settle() {
                    return self;
                }
            }
            GateAction::ToggleReveal => {
                match new.reveal.toggle(new.overlay.is_visible(), new.unlocked) {
                    RevealOutcome::Blocked => return self,
                    RevealOutcome::Locked => log::debug!("reveal refused: still locked"),
                    RevealOutcome::Shown | RevealOutcome::Hidden => {}
                }
            }
            GateAction::ClearRevealHint => {
                if !new.reveal.clear_hint() {
                    return self;
                }
            }
        }
        Rc::new(new)
    }
}
