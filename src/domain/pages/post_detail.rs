use super::overlay::ShortcutsOverlay;
use crate::entities::blog_post::{BlogPostDetail, BlogPostLink};
use crate::shortcuts::{Effect, Reaction, ShortcutHandlers};

/// View state of a single article.
#[derive(Debug, Clone)]
pub struct PostDetailPage {
    pub current: BlogPostLink,
    pub previous: Option<BlogPostLink>,
    pub next: Option<BlogPostLink>,
    pub overlay: ShortcutsOverlay,
}

impl PostDetailPage {
    pub fn new(detail: &BlogPostDetail) -> Self {
        PostDetailPage {
            current: detail.post.link(),
            previous: detail.previous.as_ref().map(|p| p.link()),
            next: detail.next.as_ref().map(|p| p.link()),
            overlay: ShortcutsOverlay::default(),
        }
    }

    pub fn with_overlay(mut self, overlay: ShortcutsOverlay) -> Self {
        self.overlay = overlay;
        self
    }
}

fn go_to(target: Option<&BlogPostLink>, note: &str) -> Reaction {
    match target {
        Some(link) => Reaction::noted(vec![Effect::navigate(format!("/blog/{}", link.id))], note),
        None => Reaction::nothing(),
    }
}

impl ShortcutHandlers for PostDetailPage {
    fn navigate_next(&mut self) -> Reaction {
        go_to(self.next.as_ref(), "Navigated to next article")
    }

    fn navigate_prev(&mut self) -> Reaction {
        go_to(self.previous.as_ref(), "Navigated to previous article")
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
    use crate::shortcuts::{KeyEvent, ShortcutDispatcher};

    fn first_post_page() -> PostDetailPage {
        PostDetailPage::new(&BlogPostDetail {
            post: post(1, "First", "Flutter", &[]),
            previous: None,
            next: Some(post(2, "Second", "Flutter", &[])),
        })
    }

    #[test]
    fn next_goes_to_the_adjacent_post() {
        let mut page = first_post_page();
        let mut dispatcher = ShortcutDispatcher::new();
        let mut theme = ThemeContext::default();

        let dispatch = dispatcher.handle(&KeyEvent::down("n", 0), &mut page, &mut theme);

        assert_eq!(dispatch.effects, vec![Effect::navigate("/blog/2")]);
        assert_eq!(dispatcher.history().last(), Some("Navigated to next article"));
    }

    #[test]
    fn prev_on_the_first_post_does_nothing() {
        let mut page = first_post_page();
        let mut dispatcher = ShortcutDispatcher::new();
        let mut theme = ThemeContext::default();

        let dispatch = dispatcher.handle(&KeyEvent::down("p", 0), &mut page, &mut theme);

        assert!(dispatch.effects.is_empty());
        assert!(dispatcher.history().is_empty());
    }
}
