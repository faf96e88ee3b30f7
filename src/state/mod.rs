pub mod overlay;
pub mod retry;
pub mod reveal;
pub mod session;

pub use overlay::{Overlay, OverlayPhase};
pub use retry::{RetryBudget, RetryStep};
pub use reveal::{Reveal, RevealOutcome};
pub use session::{Hit, Outcome, Phase, Session, Spot, Status, Target, TargetId, Tick};
