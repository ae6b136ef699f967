use async_trait::async_trait;

use crate::{
    entities::{
        blog_post::{BlogFilter, BlogPost},
        category::{categories_with_counts, BlogCategory},
    },
    errors::AppError,
    repositories::static_repo::StaticContentRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogPostRepository: Sync + Send {
    async fn get_all_blog_posts(&self) -> Result<Vec<BlogPost>, AppError>;
    async fn get_blog_post_by_id(&self, id: u32) -> Result<BlogPost, AppError>;
    /// Neighbours of `id` in list order as `(previous, next)`.
    async fn get_adjacent_blog_posts(&self, id: u32) -> Result<(Option<BlogPost>, Option<BlogPost>), AppError>;
    async fn search_blog_posts(&self, filter: &BlogFilter) -> Result<Vec<BlogPost>, AppError>;
    async fn get_recent_blog_posts(&self, limit: u32) -> Result<Vec<BlogPost>, AppError>;
    async fn get_categories(&self) -> Result<Vec<BlogCategory>, AppError>;
}

impl StaticContentRepo {
    fn position_of(&self, id: u32) -> Result<usize, AppError> {
        self.catalog
            .posts
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Blog post {} not found", id)))
    }
}

#[async_trait]
impl BlogPostRepository for StaticContentRepo {
    async fn get_all_blog_posts(&self) -> Result<Vec<BlogPost>, AppError> {
        Ok(self.catalog.posts.clone())
    }

    async fn get_blog_post_by_id(&self, id: u32) -> Result<BlogPost, AppError> {
        let index = self.position_of(id)?;
        Ok(self.catalog.posts[index].clone())
    }

    async fn get_adjacent_blog_posts(&self, id: u32) -> Result<(Option<BlogPost>, Option<BlogPost>), AppError> {
        let index = self.position_of(id)?;
        let posts = &self.catalog.posts;

        let previous = index.checked_sub(1).and_then(|i| posts.get(i)).cloned();
        let next = posts.get(index + 1).cloned();
        Ok((previous, next))
    }

    async fn search_blog_posts(&self, filter: &BlogFilter) -> Result<Vec<BlogPost>, AppError> {
        Ok(self
            .catalog
            .posts
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn get_recent_blog_posts(&self, limit: u32) -> Result<Vec<BlogPost>, AppError> {
        Ok(self
            .catalog
            .posts
            .iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn get_categories(&self) -> Result<Vec<BlogCategory>, AppError> {
        Ok(categories_with_counts(&self.catalog.posts))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::content::ContentCatalog;

    fn repo() -> StaticContentRepo {
        StaticContentRepo::new(Arc::new(ContentCatalog::load().unwrap()))
    }

    #[actix_rt::test]
    async fn first_post_has_no_previous_and_last_has_no_next() {
        let repo = repo();

        let (previous, next) = repo.get_adjacent_blog_posts(1).await.unwrap();
        assert!(previous.is_none());
        assert_eq!(next.map(|p| p.id), Some(2));

        let (previous, next) = repo.get_adjacent_blog_posts(6).await.unwrap();
        assert_eq!(previous.map(|p| p.id), Some(5));
        assert!(next.is_none());
    }

    #[actix_rt::test]
    async fn unknown_ids_are_not_found() {
        let err = repo().get_blog_post_by_id(99).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[actix_rt::test]
    async fn search_returns_exactly_the_matching_posts() {
        let repo = repo();

        let all = repo.search_blog_posts(&BlogFilter::default()).await.unwrap();
        assert_eq!(all.len(), 6);

        let hits = repo.search_blog_posts(&BlogFilter::new("REACT", "all")).await.unwrap();
        assert_eq!(hits.iter().map(|p| p.id).collect::<Vec<_>>(), vec![4]);

        let flutter = repo.search_blog_posts(&BlogFilter::new("", "Flutter")).await.unwrap();
        assert_eq!(flutter.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
    }
}
