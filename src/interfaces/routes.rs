use actix_web::web;

use crate::handlers::json_error::api_not_found;

mod blog;
mod json_error;
mod pages;
mod portfolio;
mod shortcuts;
mod system;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(json_error::config_routes)
            .configure(blog::config_routes)
            .configure(portfolio::config_routes)
            .configure(shortcuts::config_routes)
            .configure(system::config_routes)
            .default_service(web::to(api_not_found))
    );

    cfg.configure(pages::config_routes);
}
