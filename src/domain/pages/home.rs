use super::overlay::ShortcutsOverlay;
use crate::shortcuts::{Effect, Reaction, Section, ShortcutHandlers};

/// Landing page: owns the projects, skills and contact sections plus the
/// help overlay.
#[derive(Debug, Clone, Default)]
pub struct HomePage {
    pub overlay: ShortcutsOverlay,
}

impl HomePage {
    pub fn new(overlay: ShortcutsOverlay) -> Self {
        HomePage { overlay }
    }
}

impl ShortcutHandlers for HomePage {
    fn scroll_to_section(&mut self, section: Section) -> Reaction {
        Reaction::noted(
            vec![Effect::ScrollIntoView { section }],
            format!("Navigated to {}", section.id()),
        )
    }

    fn toggle_shortcuts(&mut self) -> Reaction {
        self.overlay.toggle()
    }

    fn close_dialogs(&mut self) -> Reaction {
        self.overlay.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::theme::ThemeContext;
    use crate::shortcuts::{KeyEvent, ShortcutDispatcher};

    #[test]
    fn question_mark_toggles_and_escape_closes() {
        let mut page = HomePage::default();
        let mut dispatcher = ShortcutDispatcher::new();
        let mut theme = ThemeContext::default();

        dispatcher.handle(&KeyEvent::down("?", 0), &mut page, &mut theme);
        assert!(page.overlay.is_visible());

        dispatcher.handle(&KeyEvent::down("Escape", 10), &mut page, &mut theme);
        assert!(!page.overlay.is_visible());

        dispatcher.handle(&KeyEvent::down("?", 20), &mut page, &mut theme);
        dispatcher.handle(&KeyEvent::down("?", 30), &mut page, &mut theme);
        assert!(!page.overlay.is_visible());
    }

    #[test]
    fn section_keys_scroll_to_home_sections() {
        let mut page = HomePage::default();
        let mut dispatcher = ShortcutDispatcher::new();
        let mut theme = ThemeContext::default();

        dispatcher.handle(&KeyEvent::down("s", 0), &mut page, &mut theme);
        dispatcher.handle(&KeyEvent::down("c", 1), &mut page, &mut theme);
        let prev = dispatcher.handle(&KeyEvent::down("p", 2), &mut page, &mut theme);

        assert_eq!(prev.effects, vec![Effect::ScrollIntoView { section: Section::Projects }]);
        let notes: Vec<_> = dispatcher.history().entries().collect();
        assert_eq!(notes, vec!["Navigated to skills", "Navigated to contact", "Navigated to projects"]);
    }
}
