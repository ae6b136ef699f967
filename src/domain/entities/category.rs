use serde::Serialize;

use super::blog_post::{BlogPost, ALL_CATEGORIES};

/// Fixed category list of the blog index as `(display name, key)`.
/// Position `n` is selected by the digit key `n + 1`.
pub const BLOG_CATEGORIES: [(&str, &str); 6] = [
    ("All Articles", ALL_CATEGORIES),
    ("Flutter", "Flutter"),
    ("Performance", "Performance"),
    ("UI/UX", "UI/UX"),
    ("Testing", "Testing"),
    ("Comparison", "Comparison"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogCategory {
    pub name: String,
    pub key: String,
    pub count: usize,
}

/// The fixed category list with per-category post counts.
pub fn categories_with_counts(posts: &[BlogPost]) -> Vec<BlogCategory> {
    BLOG_CATEGORIES
        .iter()
        .map(|(name, key)| BlogCategory {
            name: name.to_string(),
            key: key.to_string(),
            count: if *key == ALL_CATEGORIES {
                posts.len()
            } else {
                posts.iter().filter(|p| p.category == *key).count()
            },
        })
        .collect()
}

/// Category key for a 1-based position, as typed on the number row.
pub fn category_key_at(position: usize) -> Option<&'static str> {
    position
        .checked_sub(1)
        .and_then(|index| BLOG_CATEGORIES.get(index))
        .map(|(_, key)| *key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::blog_post::fixtures::post;

    #[test]
    fn counts_per_category() {
        let posts = vec![
            post(1, "One", "Flutter", &[]),
            post(2, "Two", "Flutter", &[]),
            post(3, "Three", "Testing", &[]),
        ];

        let categories = categories_with_counts(&posts);

        assert_eq!(categories[0].name, "All Articles");
        assert_eq!(categories[0].count, 3);
        assert_eq!(categories[1].count, 2);
        assert_eq!(categories[4].count, 1);
        assert_eq!(categories[5].count, 0);
    }

    #[test]
    fn positions_are_one_based() {
        assert_eq!(category_key_at(1), Some("all"));
        assert_eq!(category_key_at(6), Some("Comparison"));
        assert_eq!(category_key_at(0), None);
        assert_eq!(category_key_at(7), None);
    }
}
