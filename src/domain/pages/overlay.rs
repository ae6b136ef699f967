use crate::shortcuts::{Effect, Reaction};

/// Visibility of the keyboard shortcuts help overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShortcutsOverlay {
    visible: bool,
}

impl ShortcutsOverlay {
    pub fn new(visible: bool) -> Self {
        ShortcutsOverlay { visible }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) -> Reaction {
        self.visible = !self.visible;
        Reaction::handled(vec![Effect::ShowShortcuts { visible: self.visible }])
    }

    pub fn close(&mut self) -> Reaction {
        self.visible = false;
        Reaction::handled(vec![Effect::ShowShortcuts { visible: false }])
    }
}
