use actix_web::{http::header, HttpRequest, HttpResponse};
use rust_embed::Embed;
use tracing::{debug, trace};

use crate::errors::PageError;

/// Stylesheet and key/copy script compiled into the binary.
#[derive(Embed)]
#[folder = "static/"]
struct SiteAssets;

pub async fn serve_asset(req: HttpRequest) -> Result<HttpResponse, PageError> {
    let name = req.path().trim_start_matches('/');
    trace!("Serving asset: {}", name);

    match SiteAssets::get(name) {
        Some(asset) => Ok(HttpResponse::Ok()
            .content_type(content_type(name))
            .insert_header((header::CACHE_CONTROL, "public, max-age=3600"))
            .body(asset.data.into_owned())),
        None => {
            debug!("Asset not bundled: {}", name);
            Err(PageError::NotFound(name.to_string()))
        }
    }
}

fn content_type(name: &str) -> &'static str {
    match name.rsplit('.').next() {
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "application/javascript; charset=utf-8",
        _ => "application/octet-stream",
    }
}
