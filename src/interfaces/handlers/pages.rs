use actix_web::{
    http::header::{self, ContentType},
    web, HttpRequest, HttpResponse, Responder,
};
use maud::Markup;
use tracing::{info, instrument};

use crate::{
    constants::HOME_RECENT_POSTS,
    entities::{blog_post::BlogFilter, theme::Theme},
    errors::PageError,
    use_cases::extractors::{theme_cookie, ThemePreference},
    views::{
        blog::{render_blog_index, render_post_detail, BlogIndexView, PostDetailView},
        home::{render_home, HomeView},
        not_found::render_not_found,
    },
    AppState,
};

fn html_page(markup: Markup) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(markup.into_string())
}

#[instrument(skip(state))]
pub async fn home(
    state: web::Data<AppState>,
    theme: ThemePreference,
) -> Result<impl Responder, PageError> {
    let portfolio = &state.portfolio_handler;

    let skills = portfolio.skill_groups().await?;
    let projects = portfolio.projects().await?;
    let contact = portfolio.contact().await?;
    let recent_posts = state.blog_handler.recent(HOME_RECENT_POSTS).await?;

    Ok(html_page(render_home(&HomeView {
        profile: portfolio.profile(),
        skills: &skills,
        projects: &projects,
        recent_posts: &recent_posts,
        contact: &contact,
        theme: theme.0,
    })))
}

#[instrument(skip(state))]
pub async fn blog_index(
    state: web::Data<AppState>,
    filter: web::Query<BlogFilter>,
    theme: ThemePreference,
) -> Result<impl Responder, PageError> {
    let blog_handler = &state.blog_handler;

    let posts = blog_handler.list(&filter).await?;
    let categories = blog_handler.categories().await?;

    Ok(html_page(render_blog_index(&BlogIndexView {
        site_title: &state.profile.site_title,
        filter: &filter,
        categories: &categories,
        posts: &posts,
        theme: theme.0,
    })))
}

#[instrument(skip(state))]
pub async fn post_detail(
    post_id: web::Path<String>,
    state: web::Data<AppState>,
    theme: ThemePreference,
) -> Result<impl Responder, PageError> {
    let detail = state.blog_handler.get_detail(&post_id).await?;

    Ok(html_page(render_post_detail(&PostDetailView {
        site_title: &state.profile.site_title,
        detail: &detail,
        theme: theme.0,
    })))
}

/// Stores the chosen theme and sends the visitor back where they came from.
#[instrument(skip(req))]
pub async fn switch_theme(
    req: HttpRequest,
    choice: web::Path<String>,
    current: ThemePreference,
) -> Result<impl Responder, PageError> {
    let theme = match choice.as_str() {
        "toggle" => current.0.toggled(),
        other => other
            .parse::<Theme>()
            .map_err(PageError::NotFound)?,
    };
    info!(from = %current.0, to = %theme, "Theme switched");

    Ok(HttpResponse::SeeOther()
        .cookie(theme_cookie(theme))
        .insert_header((header::LOCATION, return_path(&req)))
        .finish())
}

/// Path of a same-site `Referer`, or `/`.
fn return_path(req: &HttpRequest) -> String {
    let referer = match req
        .headers()
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
    {
        Some(referer) => referer,
        None => return "/".to_string(),
    };

    if referer.starts_with('/') && !referer.starts_with("//") {
        return referer.to_string();
    }

    let host = req.connection_info().host().to_string();
    match url::Url::parse(referer) {
        Ok(url) if same_host(&url, &host) => match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        },
        _ => "/".to_string(),
    }
}

fn same_host(url: &url::Url, host: &str) -> bool {
    let authority = match (url.host_str(), url.port()) {
        (Some(h), Some(port)) => format!("{}:{}", h, port),
        (Some(h), None) => h.to_string(),
        _ => return false,
    };
    authority.eq_ignore_ascii_case(host)
}

/// Fallback for every unmatched route.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    tracing::debug!(path = %req.path(), "No route matched");
    HttpResponse::NotFound()
        .content_type(ContentType::html())
        .body(render_not_found(actix_web::http::StatusCode::NOT_FOUND).into_string())
}
