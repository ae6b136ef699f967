use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    constants::DEFAULT_RECENT_LIMIT,
    entities::blog_post::{BlogFilter, BlogPost},
    errors::AppError,
    views::markdown::render_markdown,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<u32>,
}

#[instrument(skip(state))]
pub async fn get_all_blog_posts(
    state: web::Data<AppState>,
    filter: web::Query<BlogFilter>,
) -> Result<impl Responder, AppError> {
    let blog_post_handler = &state.blog_handler;

    let posts = blog_post_handler.list(&filter).await?;
    let response: Vec<_> = posts.iter().map(BlogPost::to_list_response).collect();

    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(state))]
pub async fn get_recent_blog_posts(
    state: web::Data<AppState>,
    query: web::Query<RecentQuery>,
) -> Result<impl Responder, AppError> {
    let blog_post_handler = &state.blog_handler;

    let limit = query.limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    let posts = blog_post_handler.recent(limit).await?;
    let response: Vec<_> = posts.iter().map(BlogPost::to_list_response).collect();

    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(state))]
pub async fn get_blog_post_by_id(
    post_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let blog_post_handler = &state.blog_handler;

    let detail = blog_post_handler.get_detail(&post_id).await?;
    let content_html = render_markdown(&detail.post.content).into_string();

    Ok(HttpResponse::Ok().json(detail.to_detail_response(content_html)))
}

#[instrument(skip(state))]
pub async fn get_categories(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let categories = state.blog_handler.categories().await?;
    Ok(HttpResponse::Ok().json(categories))
}
