use actix_web::web;

use crate::handlers::portfolio;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/projects", web::get().to(portfolio::get_projects))
        .route("/skills", web::get().to(portfolio::get_skills))
        .route("/contact", web::get().to(portfolio::get_contact))
        .route("/profile", web::get().to(portfolio::get_profile));
}
