use gloo::timers::callback::Interval;
use yew::functional::UseReducerDispatcher;

use crate::config::{COUNTDOWN_INTERVAL_MS, SPAWN_INTERVAL_MS};
use crate::model::{GateAction, GateState};

/// The two periodic timers of a running session. Both stop when this is dropped.
pub struct SessionClock {
    _spawn: Interval,
    _countdown: Interval,
}

impl SessionClock {
    pub fn start(run_id: u32, dispatcher: UseReducerDispatcher<GateState>) -> Self {
        let spawn = {
            let dispatcher = dispatcher.clone();
            Interval::new(SPAWN_INTERVAL_MS, move || {
                dispatcher.dispatch(GateAction::Spawn {
                    run_id,
                    spot: super::random_spot(),
                });
            })
        };
        let countdown = Interval::new(COUNTDOWN_INTERVAL_MS, move || {
            dispatcher.dispatch(GateAction::Tick { run_id });
        });
        log::debug!("session clock started for run {run_id}");
        Self {
            _spawn: spawn,
            _countdown: countdown,
        }
    }
}
