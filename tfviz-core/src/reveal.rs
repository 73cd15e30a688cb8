//! Hover-activated reveal — visibility of a tooltip-style content region.
//!
//! Each instance owns a single `visible` flag. The anchor (trigger) writes it
//! on pointer enter/leave, the content region reads it. Both parts borrow the
//! same instance explicitly; there is no shared state between instances.

/// Visibility state for one anchor/content pair. Starts hidden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverReveal {
    visible: bool,
}

impl HoverReveal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered the anchor.
    pub fn on_enter(&mut self) {
        self.visible = true;
    }

    /// Pointer left the anchor.
    pub fn on_leave(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed a pointer position test: enter when inside the anchor, leave otherwise.
    /// Returns whether visibility changed.
    pub fn track(&mut self, inside: bool) -> bool {
        let before = self.visible;
        if inside {
            self.on_enter();
        } else {
            self.on_leave();
        }
        before != self.visible
    }

    /// The anchor side of this reveal.
    pub fn trigger(&mut self) -> RevealTrigger<'_> {
        RevealTrigger { reveal: self }
    }

    /// The content side of this reveal.
    pub fn content(&self) -> RevealContent<'_> {
        RevealContent { reveal: self }
    }
}

/// Write access for the anchor element.
pub struct RevealTrigger<'a> {
    reveal: &'a mut HoverReveal,
}

impl RevealTrigger<'_> {
    pub fn enter(&mut self) {
        self.reveal.on_enter();
    }

    pub fn leave(&mut self) {
        self.reveal.on_leave();
    }
}

/// Read access for the revealed content.
#[derive(Clone, Copy)]
pub struct RevealContent<'a> {
    reveal: &'a HoverReveal,
}

impl RevealContent<'_> {
    /// Whether the content should be drawn.
    pub fn is_shown(&self) -> bool {
        self.reveal.is_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert!(!HoverReveal::new().is_visible());
    }

    #[test]
    fn enter_then_leave() {
        let mut reveal = HoverReveal::new();
        reveal.on_enter();
        assert!(reveal.is_visible());
        reveal.on_leave();
        assert!(!reveal.is_visible());
    }

    #[test]
    fn last_event_wins() {
        let mut reveal = HoverReveal::new();
        for _ in 0..5 {
            reveal.on_enter();
            reveal.on_leave();
        }
        reveal.on_enter();
        assert!(reveal.is_visible());
    }

    #[test]
    fn instances_are_independent() {
        let mut a = HoverReveal::new();
        let b = HoverReveal::new();
        a.on_enter();
        assert!(a.is_visible());
        assert!(!b.is_visible());
    }

    #[test]
    fn track_reports_changes_only() {
        let mut reveal = HoverReveal::new();
        assert!(!reveal.track(false));
        assert!(reveal.track(true));
        assert!(!reveal.track(true));
        assert!(reveal.track(false));
    }

    #[test]
    fn trigger_and_content_share_the_instance() {
        let mut reveal = HoverReveal::new();
        reveal.trigger().enter();
        assert!(reveal.content().is_shown());
        reveal.trigger().leave();
        assert!(!reveal.content().is_shown());
    }
}
