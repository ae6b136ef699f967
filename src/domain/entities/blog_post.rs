use std::borrow::Cow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::utils::markdown::{parse_blocks, Block};

// ───── Constants ──────────────────────────────────────────────────────
const MIN_TITLE_LENGTH: u64 = 3;
const MAX_TITLE_LENGTH: u64 = 120;
const MIN_SLUG_LENGTH: u64 = 3;
const MAX_SLUG_LENGTH: u64 = 80;
const MIN_EXCERPT_LENGTH: u64 = 10;
const MAX_EXCERPT_LENGTH: u64 = 300;
const MAX_TAGS: usize = 10;
const MAX_TAG_LENGTH: usize = 30;

/// Key of the category entry that matches every post.
pub const ALL_CATEGORIES: &str = "all";

// ───── Content Model ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct BlogPost {
    pub id: u32,

    #[validate(
        length(min = MIN_TITLE_LENGTH, max = MAX_TITLE_LENGTH),
        custom(function = "validate_title")
    )]
    pub title: String,

    #[validate(length(min = MIN_EXCERPT_LENGTH, max = MAX_EXCERPT_LENGTH))]
    pub excerpt: String,

    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: String,

    pub date: NaiveDate,

    #[validate(length(min = 1, message = "Read time cannot be empty"))]
    pub read_time: String,

    #[validate(length(min = 1, message = "Category cannot be empty"))]
    pub category: String,

    #[validate(custom(function = "validate_tags"))]
    pub tags: Vec<String>,

    #[validate(length(min = 1, message = "Author cannot be empty"))]
    pub author: String,

    #[validate(
        length(min = MIN_SLUG_LENGTH, max = MAX_SLUG_LENGTH),
        custom(function = "validate_slug")
    )]
    pub slug: String,
}

// ───── Filtering ─────────────────────────────────────────────────────

/// Search text plus category selection applied to the blog index.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BlogFilter {
    #[serde(default, rename = "q")]
    pub query: String,

    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    ALL_CATEGORIES.to_string()
}

impl Default for BlogFilter {
    fn default() -> Self {
        BlogFilter {
            query: String::new(),
            category: default_category(),
        }
    }
}

impl BlogFilter {
    pub fn new(query: impl Into<String>, category: impl Into<String>) -> Self {
        BlogFilter {
            query: query.into(),
            category: category.into(),
        }
    }

    pub fn matches(&self, post: &BlogPost) -> bool {
        self.matches_search(post) && self.matches_category(post)
    }

    /// An empty query matches everything; otherwise the query must appear,
    /// ignoring case, in the title, the excerpt or one of the tags.
    pub fn matches_search(&self, post: &BlogPost) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        post.title.to_lowercase().contains(&needle)
            || post.excerpt.to_lowercase().contains(&needle)
            || post.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
    }

    pub fn matches_category(&self, post: &BlogPost) -> bool {
        self.category == ALL_CATEGORIES || post.category == self.category
    }

    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty() && self.category == ALL_CATEGORIES
    }
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlogPostListResponse {
    pub id: u32,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub date: NaiveDate,
    pub read_time: String,
    pub category: String,
    pub tags: Vec<String>,
    pub author: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlogPostLink {
    pub id: u32,
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct BlogPostDetailResponse {
    pub id: u32,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub date: NaiveDate,
    pub read_time: String,
    pub category: String,
    pub tags: Vec<String>,
    pub author: String,
    pub content_blocks: Vec<Block>,
    pub content_html: String,
    pub previous: Option<BlogPostLink>,
    pub next: Option<BlogPostLink>,
}

/// A post together with its neighbours in list order.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPostDetail {
    pub post: BlogPost,
    pub previous: Option<BlogPost>,
    pub next: Option<BlogPost>,
}

// ───── Validation Helpers ───────────────────────────────────────────

pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if slug.is_empty() {
        return Err(new_validation_error("slug_empty", "Slug cannot be empty"));
    }
    if !slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-') {
        return Err(new_validation_error("slug_invalid_chars", "Slug must contain only lowercase letters, digits, or hyphens"));
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(new_validation_error("slug_edge_hyphen", "Slug must not start or end with a hyphen"));
    }
    if slug.contains("--") {
        return Err(new_validation_error("slug_double_hyphen", "Slug must not contain consecutive hyphens"));
    }
    Ok(())
}

pub fn validate_tags(tags: &[String]) -> Result<(), ValidationError> {
    if tags.len() > MAX_TAGS {
        return Err(new_validation_error("too_many_tags", "Too many tags provided"));
    }
    for tag in tags {
        if tag.trim().is_empty() || tag.chars().count() > MAX_TAG_LENGTH {
            return Err(new_validation_error("invalid_tag_length", "Tag length must be within allowed range"));
        }
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().len() != title.len() {
        return Err(new_validation_error("title_whitespace", "Title must not have leading or trailing whitespace"));
    }
    Ok(())
}

pub(crate) fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}

// ───── Conversions ──────────────────────────────────────────────────

impl BlogPost {
    /// Date in the long form used on article pages, e.g. "January 15, 2024".
    pub fn long_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }

    pub fn link(&self) -> BlogPostLink {
        BlogPostLink {
            id: self.id,
            title: self.title.clone(),
        }
    }

    pub fn path(&self) -> String {
        format!("/blog/{}", self.id)
    }

    pub fn to_list_response(&self) -> BlogPostListResponse {
        BlogPostListResponse {
            id: self.id,
            title: self.title.clone(),
            slug: self.slug.clone(),
            excerpt: self.excerpt.clone(),
            date: self.date,
            read_time: self.read_time.clone(),
            category: self.category.clone(),
            tags: self.tags.clone(),
            author: self.author.clone(),
        }
    }
}

impl BlogPostDetail {
    pub fn to_detail_response(&self, content_html: String) -> BlogPostDetailResponse {
        let post = &self.post;
        BlogPostDetailResponse {
            id: post.id,
            title: post.title.clone(),
            slug: post.slug.clone(),
            excerpt: post.excerpt.clone(),
            date: post.date,
            read_time: post.read_time.clone(),
            category: post.category.clone(),
            tags: post.tags.clone(),
            author: post.author.clone(),
            content_blocks: parse_blocks(&post.content),
            content_html,
            previous: self.previous.as_ref().map(BlogPost::link),
            next: self.next.as_ref().map(BlogPost::link),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn post(id: u32, title: &str, category: &str, tags: &[&str]) -> BlogPost {
        BlogPost {
            id,
            title: title.to_string(),
            excerpt: format!("An excerpt about {}", title.to_lowercase()),
            content: format!("# {}\n\nBody text.", title),
            date: NaiveDate::from_ymd_opt(2024, 1, id.min(28)).unwrap_or_default(),
            read_time: "5 min read".to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            author: "Test Author".to_string(),
            slug: slug::slugify(title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::post;
    use super::*;

    #[test]
    fn empty_query_and_all_category_match_everything() {
        let filter = BlogFilter::default();
        assert!(filter.is_unfiltered());
        assert!(filter.matches(&post(1, "Anything", "Flutter", &[])));
    }

    #[test]
    fn search_is_case_insensitive_over_title_excerpt_and_tags() {
        let p = post(1, "State Management Guide", "Flutter", &["Riverpod"]);

        assert!(BlogFilter::new("state", "all").matches(&p));
        assert!(BlogFilter::new("EXCERPT ABOUT", "all").matches(&p));
        assert!(BlogFilter::new("riverPOD", "all").matches(&p));
        assert!(!BlogFilter::new("bloc", "all").matches(&p));
    }

    #[test]
    fn category_must_match_exactly() {
        let p = post(1, "Profiling", "Performance", &[]);

        assert!(BlogFilter::new("", "Performance").matches(&p));
        assert!(!BlogFilter::new("", "performance").matches(&p));
        assert!(!BlogFilter::new("", "Testing").matches(&p));
    }

    #[test]
    fn slug_rules() {
        assert!(validate_slug("flutter-tips").is_ok());
        assert!(validate_slug("Flutter").is_err());
        assert!(validate_slug("-edge").is_err());
        assert!(validate_slug("double--hyphen").is_err());
    }

    #[test]
    fn long_date_spells_out_the_month() {
        let mut p = post(1, "Dates", "Flutter", &[]);
        p.date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(p.long_date(), "January 5, 2024");
    }

    #[test]
    fn fixture_posts_validate() {
        assert!(post(3, "Valid Title", "Testing", &["Flutter", "Quality Assurance"]).validate().is_ok());
    }
}
