// Gating overlay visibility. Hiding is two-phase: the overlay first fades
// (still in layout), then leaves layout once the fade completes.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayPhase {
    Shown,
    FadingOut,
    Gone,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Overlay {
    phase: OverlayPhase,
    shaking: bool,
}

impl Default for Overlay {
    fn default() -> Self {
        Self {
            phase: OverlayPhase::Shown,
            shaking: false,
        }
    }
}

impl Overlay {
    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// Visible means the gate is up and the background must stay inert.
    pub fn is_visible(&self) -> bool {
        self.phase == OverlayPhase::Shown
    }

    pub fn in_layout(&self) -> bool {
        self.phase != OverlayPhase::Gone
    }

    pub fn is_shaking(&self) -> bool {
        self.shaking
    }

    pub fn show(&mut self) -> bool {
        let changed = self.phase != OverlayPhase::Shown || self.shaking;
        self.phase = OverlayPhase::Shown;
        self.shaking = false;
        changed
    }

    pub fn hide(&mut self) -> bool {
        if self.phase != OverlayPhase::Shown {
            return false;
        }
        self.phase = OverlayPhase::FadingOut;
        self.shaking = false;
        true
    }

    pub fn finish_fade(&mut self) -> bool {
        if self.phase != OverlayPhase::FadingOut {
            return false;
        }
        self.phase = OverlayPhase::Gone;
        true
    }

    pub fn shake(&mut self) -> bool {
        if !self.is_visible() || self.shaking {
            return false;
        }
        self.shaking = true;
        true
    }

    pub fn settle(&mut self) -> bool {
        std::mem::replace(&mut self.shaking, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_visible() {
        let o = Overlay::default();
        assert!(o.is_visible());
        assert!(o.in_layout());
    }

    #[test]
    fn hide_is_two_phase() {
        let mut o = Overlay::default();
        assert!(o.hide());
        assert!(!o.is_visible());
        assert!(o.in_layout());
        assert!(o.finish_fade());
        assert!(!o.in_layout());
        assert_eq!(o.phase(), OverlayPhase::Gone);
    }

    #[test]
    fn show_and_hide_are_idempotent() {
        let mut o = Overlay::default();
        assert!(!o.show());
        assert!(o.hide());
        assert!(!o.hide());
        assert!(o.finish_fade());
        assert!(!o.hide());
        assert!(o.show());
        assert!(!o.show());
    }

    #[test]
    fn stray_fade_end_while_shown_is_ignored() {
        let mut o = Overlay::default();
        assert!(!o.finish_fade());
        assert!(o.is_visible());
    }

    #[test]
    fn reshow_during_fade_cancels_it() {
        let mut o = Overlay::default();
        o.hide();
        assert!(o.show());
        assert!(!o.finish_fade());
        assert!(o.is_visible());
    }

    #[test]
    fn shake_only_while_visible_and_cleared_by_show() {
        let mut o = Overlay::default();
        assert!(o.shake());
        assert!(!o.shake());
        assert!(o.is_shaking());
        assert!(o.show());
        assert!(!o.is_shaking());
        o.hide();
        assert!(!o.shake());
    }

    #[test]
    fn settle_reports_previous_flag() {
        let mut o = Overlay::default();
        assert!(!o.settle());
        o.shake();
        assert!(o.settle());
        assert!(!o.is_shaking());
    }
}
