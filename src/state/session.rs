// Timed heart-catching session: the core state machine behind the gate.
use crate::config::{GameConfig, MAX_LIVE_TARGETS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TargetId(pub u32);

/// Where a target sits inside the play surface, as fractions of the free
/// space left once the target's own footprint is subtracted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spot {
    pub fx: f64,
    pub fy: f64,
}

impl Spot {
    pub fn new(fx: f64, fy: f64) -> Self {
        let clamp = |v: f64| if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 };
        Self {
            fx: clamp(fx),
            fy: clamp(fy),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    pub id: TargetId,
    pub spot: Spot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Resolved(Outcome),
}

/// Text shown by the status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Ready,
    InProgress,
    Won,
    Lost,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Ready => "Ready",
            Status::InProgress => "In progress…",
            Status::Won => "Won 🎉",
            Status::Lost => "Lost",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit {
    Missed,
    Scored(u32),
    Won(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Ignored,
    Counting(u32),
    Lost,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    score: u32,
    target: u32,
    time_limit: u32,
    remaining: u32,
    phase: Phase,
    /// Bumped on every start; timer actions carry it so ticks from an older
    /// run are rejected.
    run_id: u32,
    targets: Vec<Target>,
    next_target: u32,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        Self {
            score: 0,
            target: config.target,
            time_limit: config.time_limit,
            remaining: config.time_limit,
            phase: Phase::Idle,
            run_id: 0,
            targets: Vec::new(),
            next_target: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }
    pub fn target(&self) -> u32 {
        self.target
    }
    pub fn remaining(&self) -> u32 {
        self.remaining
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn run_id(&self) -> u32 {
        self.run_id
    }
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Resolved(o) => Some(o),
            _ => None,
        }
    }

    pub fn status(&self) -> Status {
        match self.phase {
            Phase::Idle => Status::Ready,
            Phase::Running => Status::InProgress,
            Phase::Resolved(Outcome::Won) => Status::Won,
            Phase::Resolved(Outcome::Lost) => Status::Lost,
        }
    }

    /// Begins a fresh run with one target already on the surface. Returns
    /// false (and changes nothing) when a run is already in progress.
    pub fn start(&mut self, first: Spot) -> bool {
        if self.is_running() {
            return false;
        }
        self.run_id = self.run_id.wrapping_add(1);
        self.score = 0;
        self.remaining = self.time_limit;
        self.targets.clear();
        self.phase = Phase::Running;
        self.push_target(first);
        true
    }

    pub fn spawn(&mut self, run_id: u32, spot: Spot) -> Option<TargetId> {
        if !self.is_running() || run_id != self.run_id {
            return None;
        }
        if self.targets.len() >= MAX_LIVE_TARGETS {
            return None;
        }
        Some(self.push_target(spot))
    }

    pub fn hit(&mut self, id: TargetId) -> Hit {
        if !self.is_running() {
            return Hit::Missed;
        }
        let Some(pos) = self.targets.iter().position(|t| t.id == id) else {
            return Hit::Missed;
        };
        self.targets.remove(pos);
        self.score = self.score.saturating_add(1);
        if self.score >= self.target {
            self.resolve(Outcome::Won);
            Hit::Won(self.score)
        } else {
            Hit::Scored(self.score)
        }
    }

    pub fn expire(&mut self, id: TargetId) -> bool {
        let before = self.targets.len();
        self.targets.retain(|t| t.id != id);
        self.targets.len() != before
    }

    pub fn tick(&mut self, run_id: u32) -> Tick {
        if !self.is_running() || run_id != self.run_id {
            return Tick::Ignored;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.resolve(Outcome::Lost);
            Tick::Lost
        } else {
            Tick::Counting(self.remaining)
        }
    }

    /// Back to idle with cleared fields. The run id is kept so stale timer
    /// actions from the abandoned run still miss.
    pub fn reset(&mut self) {
        self.score = 0;
        self.remaining = self.time_limit;
        self.targets.clear();
        self.phase = Phase::Idle;
    }

    fn resolve(&mut self, outcome: Outcome) {
        self.targets.clear();
        self.phase = Phase::Resolved(outcome);
    }

    fn push_target(&mut self, spot: Spot) -> TargetId {
        let id = TargetId(self.next_target);
        self.next_target = self.next_target.wrapping_add(1);
        self.targets.push(Target { id, spot });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(target: u32, time_limit: u32) -> GameConfig {
        GameConfig { target, time_limit }
    }

    fn centre() -> Spot {
        Spot::new(0.5, 0.5)
    }

    fn running(target: u32, time_limit: u32) -> Session {
        let mut s = Session::new(config(target, time_limit));
        assert!(s.start(centre()));
        s
    }

    #[test]
    fn start_spawns_one_target_and_resets_fields() {
        let s = running(5, 15);
        assert!(s.is_running());
        assert_eq!(s.score(), 0);
        assert_eq!(s.remaining(), 15);
        assert_eq!(s.targets().len(), 1);
        assert_eq!(s.run_id(), 1);
        assert_eq!(s.status(), Status::InProgress);
    }

    #[test]
    fn duplicate_start_is_ignored() {
        let mut s = running(5, 15);
        s.spawn(1, centre());
        assert!(!s.start(centre()));
        assert!(!s.start(centre()));
        assert_eq!(s.run_id(), 1);
        assert_eq!(s.targets().len(), 2);
    }

    #[test]
    fn hit_scores_once_per_target() {
        let mut s = running(5, 15);
        let id = s.targets()[0].id;
        assert_eq!(s.hit(id), Hit::Scored(1));
        assert_eq!(s.hit(id), Hit::Missed);
        assert_eq!(s.score(), 1);
        assert!(s.targets().is_empty());
    }

    #[test]
    fn expiry_removes_without_scoring() {
        let mut s = running(5, 15);
        let id = s.targets()[0].id;
        assert!(s.expire(id));
        assert!(!s.expire(id));
        assert_eq!(s.score(), 0);
        assert_eq!(s.hit(id), Hit::Missed);
    }

    #[test]
    fn reaching_threshold_wins_mid_interval() {
        let mut s = running(2, 15);
        let first = s.targets()[0].id;
        let second = s.spawn(1, centre()).unwrap();
        let extra = s.spawn(1, centre()).unwrap();
        assert_eq!(s.hit(first), Hit::Scored(1));
        assert_eq!(s.hit(second), Hit::Won(2));
        assert_eq!(s.outcome(), Some(Outcome::Won));
        assert!(s.targets().is_empty());
        assert_eq!(s.hit(extra), Hit::Missed);
        assert_eq!(s.tick(1), Tick::Ignored);
    }

    #[test]
    fn countdown_to_zero_loses() {
        let mut s = running(5, 3);
        assert_eq!(s.tick(1), Tick::Counting(2));
        assert_eq!(s.tick(1), Tick::Counting(1));
        assert_eq!(s.tick(1), Tick::Lost);
        assert_eq!(s.status(), Status::Lost);
        assert!(s.targets().is_empty());
        assert_eq!(s.tick(1), Tick::Ignored);
        assert_eq!(s.remaining(), 0);
    }

    #[test]
    fn resolved_session_can_start_again() {
        let mut s = running(5, 1);
        assert_eq!(s.tick(1), Tick::Lost);
        assert!(s.start(centre()));
        assert_eq!(s.run_id(), 2);
        assert_eq!(s.remaining(), 1);
    }

    #[test]
    fn stale_run_actions_are_rejected() {
        let mut s = running(5, 10);
        s.reset();
        assert!(s.start(centre()));
        assert_eq!(s.tick(1), Tick::Ignored);
        assert_eq!(s.spawn(1, centre()), None);
        assert_eq!(s.remaining(), 10);
        assert_eq!(s.targets().len(), 1);
    }

    #[test]
    fn spawn_respects_live_cap() {
        let mut s = running(100, 10);
        while s.targets().len() < MAX_LIVE_TARGETS {
            assert!(s.spawn(1, centre()).is_some());
        }
        assert_eq!(s.spawn(1, centre()), None);
        let id = s.targets()[0].id;
        s.expire(id);
        assert!(s.spawn(1, centre()).is_some());
    }

    #[test]
    fn target_ids_are_never_reused() {
        let mut s = running(5, 10);
        let first = s.targets()[0].id;
        s.reset();
        s.start(centre());
        assert_ne!(s.targets()[0].id, first);
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut s = running(5, 15);
        s.tick(1);
        s.reset();
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.remaining(), 15);
        assert_eq!(s.status(), Status::Ready);
        assert!(s.targets().is_empty());
    }

    #[test]
    fn spot_is_clamped() {
        assert_eq!(Spot::new(-1.0, 2.0), Spot { fx: 0.0, fy: 1.0 });
        assert_eq!(Spot::new(f64::NAN, 0.25), Spot { fx: 0.0, fy: 0.25 });
    }
}
