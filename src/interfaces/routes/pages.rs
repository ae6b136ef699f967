use actix_web::web;

use crate::{
    errors::PageError,
    handlers::{assets, pages},
};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        PageError::BadRequest(err.to_string()).into()
    }));

    cfg.route("/", web::get().to(pages::home))
        .route("/blog", web::get().to(pages::blog_index))
        .route("/blog/{post_id}", web::get().to(pages::post_detail))
        .route("/theme/{choice}", web::get().to(pages::switch_theme))
        .route("/style.css", web::get().to(assets::serve_asset))
        .route("/site.js", web::get().to(assets::serve_asset))
        .default_service(web::to(pages::not_found));
}
