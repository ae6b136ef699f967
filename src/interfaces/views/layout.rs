//! Page shell shared by every HTML route.

use maud::{html, Markup, DOCTYPE};

use crate::constants::COPY_RESET;
use crate::entities::theme::Theme;
use crate::shortcuts::reference::grouped_shortcuts;
use crate::use_cases::shortcut_session::PageContext;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fragment id that opens the shortcuts overlay.
pub const SHORTCUTS_ANCHOR: &str = "shortcuts";

pub struct LayoutContext<'a> {
    pub title: &'a str,
    pub site_title: &'a str,
    pub theme: Theme,
    /// Page the key listener reports with every dispatched batch.
    pub page: PageContext,
}

impl<'a> LayoutContext<'a> {
    pub fn new(title: &'a str, site_title: &'a str, theme: Theme, page: PageContext) -> Self {
        LayoutContext { title, site_title, theme, page }
    }
}

pub fn page_shell(ctx: &LayoutContext, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" class=[(ctx.theme == Theme::Dark).then_some("dark")] {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="generator" content=(format!("portfolio_site v{}", VERSION));
                meta name="color-scheme" content=(ctx.theme.as_str());
                title { (ctx.title) " | " (ctx.site_title) }
                link rel="stylesheet" href="/style.css";
            }
            body data-theme=(ctx.theme.as_str())
                data-shortcuts-endpoint="/api/v1/shortcuts/dispatch"
                data-page=(serde_json::to_string(&ctx.page).unwrap_or_default())
                data-copy-reset-ms=(COPY_RESET.as_millis()) {
                div class="scroll-progress" aria-hidden="true" {}
                (header(ctx))
                main { (content) }
                footer class="site-footer" {
                    p { "Press " kbd { "?" } " for shortcuts" }
                    ol class="command-history" aria-label="Recent shortcuts" aria-live="polite" {}
                }
                (shortcuts_overlay())
                script src="/site.js" defer {}
            }
        }
    }
}

fn header(ctx: &LayoutContext) -> Markup {
    html! {
        header class="site-header" {
            a class="brand" href="/" { (ctx.site_title) }
            nav {
                a href="/" { "Home" }
                a href="/blog" { "Blog" }
                a href=(format!("#{}", SHORTCUTS_ANCHOR)) { "Shortcuts" }
            }
            (theme_switcher(ctx.theme))
        }
    }
}

fn theme_switcher(current: Theme) -> Markup {
    html! {
        div class="theme-switcher" role="group" aria-label="Theme" {
            @for theme in [Theme::Light, Theme::Dark] {
                a href=(format!("/theme/{}", theme))
                    class=[(theme == current).then_some("active")]
                    aria-current=[(theme == current).then_some("true")] {
                    @if theme == Theme::Light { "Light" } @else { "Dark" }
                }
            }
        }
    }
}

/// Help overlay, shown while the URL fragment targets it.
pub fn shortcuts_overlay() -> Markup {
    html! {
        div id=(SHORTCUTS_ANCHOR) class="shortcuts-overlay" role="dialog" aria-label="Keyboard Shortcuts" {
            div class="shortcuts-panel" {
                div class="shortcuts-header" {
                    h2 { "Keyboard Shortcuts" }
                    a class="close" href="#" aria-label="Close" { "×" }
                }
                @for group in grouped_shortcuts() {
                    section class="shortcut-group" {
                        h3 { (group.name) }
                        dl {
                            @for shortcut in &group.shortcuts {
                                dt { kbd { (shortcut.keys) } }
                                dd { (shortcut.description) }
                            }
                        }
                    }
                }
            }
        }
    }
}
