use maud::{html, Markup};

use super::{
    layout::{page_shell, LayoutContext},
    markdown::render_markdown,
};
use crate::entities::{
    blog_post::{BlogFilter, BlogPost, BlogPostDetail},
    category::BlogCategory,
    theme::Theme,
};
use crate::use_cases::shortcut_session::PageContext;

pub const NO_RESULTS: &str = "No articles found matching your search criteria.";

pub struct BlogIndexView<'a> {
    pub site_title: &'a str,
    pub filter: &'a BlogFilter,
    pub categories: &'a [BlogCategory],
    pub posts: &'a [BlogPost],
    pub theme: Theme,
}

pub struct PostDetailView<'a> {
    pub site_title: &'a str,
    pub detail: &'a BlogPostDetail,
    pub theme: Theme,
}

/// Listing URL that keeps the current search text and selects `category`.
fn category_href(filter: &BlogFilter, category: &str) -> String {
    if filter.query.is_empty() {
        format!("/blog?category={}", urlencoding::encode(category))
    } else {
        format!(
            "/blog?q={}&category={}",
            urlencoding::encode(&filter.query),
            urlencoding::encode(category)
        )
    }
}

pub fn post_card(post: &BlogPost) -> Markup {
    html! {
        article class="post-card" {
            a href=(post.path()) {
                h3 { (post.title) }
            }
            p class="excerpt" { (post.excerpt) }
            div class="meta" {
                time datetime=(post.date.to_string()) { (post.long_date()) }
                span { (post.read_time) }
                span class="category" { (post.category) }
            }
            ul class="tags" {
                @for tag in &post.tags {
                    li { (tag) }
                }
            }
        }
    }
}

pub fn render_blog_index(view: &BlogIndexView) -> Markup {
    let page = PageContext::BlogIndex {
        q: view.filter.query.clone(),
        category: view.filter.category.clone(),
    };
    let ctx = LayoutContext::new("Blog", view.site_title, view.theme, page);
    page_shell(
        &ctx,
        html! {
            section class="blog-index" {
                h1 { "Blog" }
                form class="search" method="get" action="/blog" role="search" {
                    input id="search-input" type="search" name="q" value=(view.filter.query)
                        placeholder="Search articles... (press / to focus)";
                    input type="hidden" name="category" value=(view.filter.category);
                    button type="submit" { "Search" }
                }
                nav class="categories" aria-label="Categories" {
                    @for (position, category) in view.categories.iter().enumerate() {
                        a href=(category_href(view.filter, &category.key))
                            class=[(category.key == view.filter.category).then_some("active")]
                            title=(format!("Press {}", position + 1)) {
                            (category.name) " (" (category.count) ")"
                        }
                    }
                }
                @if view.posts.is_empty() {
                    p class="empty" { (NO_RESULTS) }
                } @else {
                    div class="post-grid" {
                        @for post in view.posts {
                            (post_card(post))
                        }
                    }
                }
            }
        },
    )
}

pub fn render_post_detail(view: &PostDetailView) -> Markup {
    let post = &view.detail.post;
    let ctx = LayoutContext::new(&post.title, view.site_title, view.theme, PageContext::Post { id: post.id });
    page_shell(
        &ctx,
        html! {
            article class="post" {
                a class="back" href="/blog" { "← Back to blog" }
                header {
                    h1 { (post.title) }
                    div class="meta" {
                        time datetime=(post.date.to_string()) { (post.long_date()) }
                        span { (post.read_time) }
                        span { "By " (post.author) }
                        span class="category" { (post.category) }
                    }
                    p class="hints" {
                        kbd { "n" } " next · " kbd { "p" } " previous · " kbd { "?" } " all shortcuts"
                    }
                }
                div class="post-body" {
                    (render_markdown(&post.content))
                }
                nav class="more-articles" aria-label="More Articles" {
                    h2 { "More Articles" }
                    @if let Some(previous) = &view.detail.previous {
                        a class="previous" rel="prev" href=(previous.path()) {
                            span { "Previous" }
                            strong { (previous.title) }
                        }
                    }
                    @if let Some(next) = &view.detail.next {
                        a class="next" rel="next" href=(next.path()) {
                            span { "Next" }
                            strong { (next.title) }
                        }
                    }
                }
            }
        },
    )
}
