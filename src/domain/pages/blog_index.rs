use tracing::debug;

use super::overlay::ShortcutsOverlay;
use crate::entities::{
    blog_post::{BlogFilter, BlogPost},
    category::category_key_at,
};
use crate::shortcuts::{Effect, KeyEvent, Reaction, ShortcutHandlers};

/// View state of the blog listing.
#[derive(Debug, Clone)]
pub struct BlogIndexPage {
    posts: Vec<BlogPost>,
    pub filter: BlogFilter,
    pub search_focused: bool,
    pub overlay: ShortcutsOverlay,
}

impl BlogIndexPage {
    pub fn new(posts: Vec<BlogPost>, filter: BlogFilter) -> Self {
        BlogIndexPage {
            posts,
            filter,
            search_focused: false,
            overlay: ShortcutsOverlay::default(),
        }
    }

    pub fn with_overlay(mut self, overlay: ShortcutsOverlay) -> Self {
        self.overlay = overlay;
        self
    }

    pub fn filtered(&self) -> Vec<&BlogPost> {
        self.posts.iter().filter(|p| self.filter.matches(p)).collect()
    }

    pub fn select_category(&mut self, key: &str) {
        self.filter.category = key.to_string();
    }

    /// Listing-only keys: `/` focuses search and `1`..`6` pick a category.
    /// Nothing fires while the search input has focus.
    pub fn handle_page_key(&mut self, event: &KeyEvent) -> Vec<Effect> {
        if !event.is_down() || event.in_text_input || self.search_focused {
            return Vec::new();
        }

        if event.key.is_char('/') {
            self.search_focused = true;
            return vec![Effect::FocusSearch];
        }

        let Some(category) = event
            .key
            .digit()
            .and_then(|d| category_key_at(d as usize))
        else {
            return Vec::new();
        };
        debug!(category, "Blog category selected by key");
        self.select_category(category);
        vec![Effect::SelectCategory { category: category.to_string() }]
    }
}

impl ShortcutHandlers for BlogIndexPage {
    fn navigate_next(&mut self) -> Reaction {
        match self.filtered().first() {
            Some(post) => Reaction::handled(vec![Effect::navigate(post.path())]),
            None => Reaction::nothing(),
        }
    }

    fn navigate_prev(&mut self) -> Reaction {
        match self.filtered().last() {
            Some(post) => Reaction::handled(vec![Effect::navigate(post.path())]),
            None => Reaction::nothing(),
        }
    }

    fn refresh(&mut self) -> Reaction {
        Reaction::handled(vec![Effect::Reload])
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
    use crate::entities::blog_post::fixtures::post;
    use crate::entities::theme::ThemeContext;
    use crate::shortcuts::ShortcutDispatcher;

    fn page() -> BlogIndexPage {
        BlogIndexPage::new(
            vec![
                post(1, "Responsive Layouts", "Flutter", &["Flutter"]),
                post(2, "Profiling Widgets", "Performance", &["Flutter"]),
                post(3, "Golden Tests", "Testing", &["Testing"]),
            ],
            BlogFilter::new("", "Testing"),
        )
    }

    #[test]
    fn key_one_selects_all_articles() {
        let mut page = page();

        let effects = page.handle_page_key(&KeyEvent::down("1", 0));

        assert_eq!(page.filter.category, "all");
        assert_eq!(effects, vec![Effect::SelectCategory { category: "all".into() }]);
        assert_eq!(page.filtered().len(), 3);
    }

    #[test]
    fn page_keys_are_ignored_while_searching() {
        let mut page = page();

        assert_eq!(page.handle_page_key(&KeyEvent::down("/", 0)), vec![Effect::FocusSearch]);
        assert!(page.search_focused);
        assert!(page.handle_page_key(&KeyEvent::down("2", 10)).is_empty());
        assert_eq!(page.filter.category, "Testing");
    }

    #[test]
    fn digits_outside_the_list_do_nothing() {
        let mut page = page();
        assert!(page.handle_page_key(&KeyEvent::down("7", 0)).is_empty());
        assert!(page.handle_page_key(&KeyEvent::down("0", 0)).is_empty());
    }

    #[test]
    fn next_and_prev_jump_to_the_ends_of_the_filtered_list() {
        let mut page = page();
        page.select_category("all");
        let mut dispatcher = ShortcutDispatcher::new();
        let mut theme = ThemeContext::default();

        let next = dispatcher.handle(&KeyEvent::down("n", 0), &mut page, &mut theme);
        let prev = dispatcher.handle(&KeyEvent::down("p", 1), &mut page, &mut theme);

        assert_eq!(next.effects, vec![Effect::navigate("/blog/1")]);
        assert_eq!(prev.effects, vec![Effect::navigate("/blog/3")]);
        assert!(dispatcher.history().is_empty());
    }

    #[test]
    fn refresh_reloads_without_a_note() {
        let mut page = page();
        let mut dispatcher = ShortcutDispatcher::new();
        let mut theme = ThemeContext::default();

        let dispatch = dispatcher.handle(&KeyEvent::down("r", 0), &mut page, &mut theme);

        assert_eq!(dispatch.effects, vec![Effect::Reload]);
        assert!(dispatch.note.is_none());
    }
}
