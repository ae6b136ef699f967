use crate::{
    entities::{
        blog_post::{BlogFilter, BlogPost, BlogPostDetail},
        category::BlogCategory,
    },
    errors::AppError,
    repositories::blog_post::BlogPostRepository,
    utils::valid_id::valid_post_id,
};

/// Upper bound for `recent` requests coming from the API.
pub const MAX_RECENT_LIMIT: u32 = 50;

pub struct BlogPostHandler<R>
where
    R: BlogPostRepository,
{
    pub blog_post_repo: R,
}

impl<R> BlogPostHandler<R>
where
    R: BlogPostRepository,
{
    pub fn new(blog_post_repo: R) -> Self {
        BlogPostHandler { blog_post_repo }
    }

    /// Posts matching the search text and category, in list order
    pub async fn list(&self, filter: &BlogFilter) -> Result<Vec<BlogPost>, AppError> {
        if filter.is_unfiltered() {
            return self.blog_post_repo.get_all_blog_posts().await;
        }
        self.blog_post_repo.search_blog_posts(filter).await
    }

    /// Retrieves a post and its neighbours from a raw path segment
    pub async fn get_detail(&self, post_id: &str) -> Result<BlogPostDetail, AppError> {
        let id = valid_post_id(post_id)?;
        self.get_detail_by_id(id).await
    }

    pub async fn get_detail_by_id(&self, id: u32) -> Result<BlogPostDetail, AppError> {
        let post = self.blog_post_repo.get_blog_post_by_id(id).await?;
        let (previous, next) = self.blog_post_repo.get_adjacent_blog_posts(id).await?;

        Ok(BlogPostDetail { post, previous, next })
    }

    /// First `limit` posts, capped at [`MAX_RECENT_LIMIT`]
    pub async fn recent(&self, limit: u32) -> Result<Vec<BlogPost>, AppError> {
        self.blog_post_repo
            .get_recent_blog_posts(limit.min(MAX_RECENT_LIMIT))
            .await
    }

    pub async fn categories(&self) -> Result<Vec<BlogCategory>, AppError> {
        self.blog_post_repo.get_categories().await
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::entities::blog_post::fixtures::post;
    use crate::repositories::blog_post::MockBlogPostRepository;

    #[actix_rt::test]
    async fn unfiltered_list_skips_search() {
        let mut repo = MockBlogPostRepository::new();
        repo.expect_get_all_blog_posts()
            .times(1)
            .returning(|| Ok(vec![post(1, "One", "Flutter", &[])]));
        repo.expect_search_blog_posts().never();

        let handler = BlogPostHandler::new(repo);
        let posts = handler.list(&BlogFilter::default()).await.unwrap();

        assert_eq!(posts.len(), 1);
    }

    #[actix_rt::test]
    async fn filtered_list_delegates_to_search() {
        let mut repo = MockBlogPostRepository::new();
        repo.expect_search_blog_posts()
            .withf(|f| f.query == "bloc" && f.category == "all")
            .times(1)
            .returning(|_| Ok(vec![]));

        let handler = BlogPostHandler::new(repo);
        let posts = handler.list(&BlogFilter::new("bloc", "all")).await.unwrap();

        assert!(posts.is_empty());
    }

    #[actix_rt::test]
    async fn detail_rejects_non_integer_ids_before_lookup() {
        let mut repo = MockBlogPostRepository::new();
        repo.expect_get_blog_post_by_id().never();

        let handler = BlogPostHandler::new(repo);
        let err = handler.get_detail("3abc").await.unwrap_err();

        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[actix_rt::test]
    async fn detail_combines_post_and_neighbours() {
        let mut repo = MockBlogPostRepository::new();
        repo.expect_get_blog_post_by_id()
            .with(eq(2))
            .returning(|id| Ok(post(id, "Two", "Flutter", &[])));
        repo.expect_get_adjacent_blog_posts()
            .with(eq(2))
            .returning(|_| Ok((Some(post(1, "One", "Flutter", &[])), None)));

        let handler = BlogPostHandler::new(repo);
        let detail = handler.get_detail("2").await.unwrap();

        assert_eq!(detail.post.id, 2);
        assert_eq!(detail.previous.map(|p| p.id), Some(1));
        assert!(detail.next.is_none());
    }

    #[actix_rt::test]
    async fn recent_is_capped() {
        let mut repo = MockBlogPostRepository::new();
        repo.expect_get_recent_blog_posts()
            .with(eq(MAX_RECENT_LIMIT))
            .times(1)
            .returning(|_| Ok(vec![]));

        let handler = BlogPostHandler::new(repo);
        handler.recent(500).await.unwrap();
    }
}
