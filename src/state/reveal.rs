// Reveal toggle for the hidden letter content.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The overlay is up; nothing happens at all.
    Blocked,
    /// Not unlocked yet; only a negative hint is shown.
    Locked,
    Shown,
    Hidden,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Reveal {
    shown: bool,
    hinting: bool,
}

impl Reveal {
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn is_hinting(&self) -> bool {
        self.hinting
    }

    pub fn toggle(&mut self, overlay_visible: bool, unlocked: bool) -> RevealOutcome {
        if overlay_visible {
            return RevealOutcome::Blocked;
        }
        if !unlocked {
            self.hinting = true;
            return RevealOutcome::Locked;
        }
        self.shown = !self.shown;
        if self.shown {
            RevealOutcome::Shown
        } else {
            RevealOutcome::Hidden
        }
    }

    pub fn clear_hint(&mut self) -> bool {
        std::mem::replace(&mut self.hinting, false)
    }

    pub fn conceal(&mut self) {
        self.shown = false;
        self.hinting = false;
    }
}
