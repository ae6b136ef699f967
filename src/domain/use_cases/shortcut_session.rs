use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use crate::{
    entities::{
        blog_post::{BlogFilter, ALL_CATEGORIES},
        theme::{Theme, ThemeContext, ThemeControl},
    },
    errors::AppError,
    pages::{BlogIndexPage, HomePage, PostDetailPage, ShortcutsOverlay},
    repositories::blog_post::BlogPostRepository,
    shortcuts::{CommandHistory, Dispatch, Effect, KeyEvent, ShortcutDispatcher, ShortcutHandlers},
    use_cases::blog::BlogPostHandler,
};

pub const MAX_EVENTS_PER_BATCH: u64 = 64;

/// Page the key events were captured on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageContext {
    Home,
    BlogIndex {
        #[serde(default)]
        q: String,
        #[serde(default = "all_categories")]
        category: String,
    },
    Post {
        id: u32,
    },
}

fn all_categories() -> String {
    ALL_CATEGORIES.to_string()
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DispatchRequest {
    pub page: PageContext,

    #[validate(length(min = 1, max = MAX_EVENTS_PER_BATCH, message = "Between 1 and 64 events per batch"))]
    pub events: Vec<KeyEvent>,

    /// Starting theme; the theme cookie is used when absent.
    #[serde(default)]
    pub theme: Option<Theme>,

    #[serde(default)]
    pub shortcuts_visible: bool,

    #[serde(default)]
    pub history: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DispatchResponse {
    pub dispatches: Vec<Dispatch>,
    pub theme: Theme,
    pub theme_changed: bool,
    pub shortcuts_visible: bool,
    pub history: CommandHistory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_focused: Option<bool>,
}

enum SessionPage {
    Home(HomePage),
    BlogIndex(BlogIndexPage),
    Post(PostDetailPage),
}

impl SessionPage {
    fn handlers(&mut self) -> &mut dyn ShortcutHandlers {
        match self {
            SessionPage::Home(page) => page,
            SessionPage::BlogIndex(page) => page,
            SessionPage::Post(page) => page,
        }
    }

    fn overlay(&self) -> ShortcutsOverlay {
        match self {
            SessionPage::Home(page) => page.overlay,
            SessionPage::BlogIndex(page) => page.overlay,
            SessionPage::Post(page) => page.overlay,
        }
    }
}

/// Replays a batch of key events for one page through a fresh dispatcher.
/// Chord state starts idle on every batch.
pub struct ShortcutSession<'a, R>
where
    R: BlogPostRepository,
{
    blog: &'a BlogPostHandler<R>,
}

impl<'a, R> ShortcutSession<'a, R>
where
    R: BlogPostRepository,
{
    pub fn new(blog: &'a BlogPostHandler<R>) -> Self {
        ShortcutSession { blog }
    }

    pub async fn run(&self, request: DispatchRequest, cookie_theme: Theme) -> Result<DispatchResponse, AppError> {
        request.validate()?;

        let overlay = ShortcutsOverlay::new(request.shortcuts_visible);
        let mut page = self.open_page(&request.page, overlay).await?;
        let mut theme = ThemeContext::new(request.theme.unwrap_or(cookie_theme));
        let mut dispatcher = ShortcutDispatcher::with_history(CommandHistory::from(request.history));

        let dispatches = request
            .events
            .iter()
            .map(|event| replay(&mut dispatcher, &mut page, &mut theme, event))
            .collect::<Vec<_>>();

        debug!(
            events = dispatches.len(),
            theme_changed = theme.changed(),
            "Shortcut batch replayed"
        );

        let (selected_category, search_focused) = match &page {
            SessionPage::BlogIndex(index) => (Some(index.filter.category.clone()), Some(index.search_focused)),
            _ => (None, None),
        };

        Ok(DispatchResponse {
            dispatches,
            theme: theme.current(),
            theme_changed: theme.changed(),
            shortcuts_visible: page.overlay().is_visible(),
            history: dispatcher.into_history(),
            selected_category,
            search_focused,
        })
    }

    async fn open_page(&self, context: &PageContext, overlay: ShortcutsOverlay) -> Result<SessionPage, AppError> {
        let page = match context {
            PageContext::Home => SessionPage::Home(HomePage::new(overlay)),
            PageContext::BlogIndex { q, category } => {
                let posts = self.blog.list(&BlogFilter::default()).await?;
                let index = BlogIndexPage::new(posts, BlogFilter::new(q.clone(), category.clone()));
                SessionPage::BlogIndex(index.with_overlay(overlay))
            }
            PageContext::Post { id } => {
                let detail = self.blog.get_detail_by_id(*id).await?;
                SessionPage::Post(PostDetailPage::new(&detail).with_overlay(overlay))
            }
        };
        Ok(page)
    }
}

fn replay(
    dispatcher: &mut ShortcutDispatcher,
    page: &mut SessionPage,
    theme: &mut dyn ThemeControl,
    event: &KeyEvent,
) -> Dispatch {
    let mut event = event.clone();
    let mut page_effects: Vec<Effect> = Vec::new();

    if let SessionPage::BlogIndex(index) = &mut *page {
        // Once the search box has focus, later keys are typed into it.
        event.in_text_input |= index.search_focused;
        page_effects = index.handle_page_key(&event);
    }

    let mut dispatch = dispatcher.handle(&event, page.handlers(), theme);
    if !page_effects.is_empty() {
        dispatch.prevent_default = true;
        page_effects.append(&mut dispatch.effects);
        dispatch.effects = page_effects;
    }
    dispatch
}
