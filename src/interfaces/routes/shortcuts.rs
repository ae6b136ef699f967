use actix_web::web;

use crate::handlers::shortcuts;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/shortcuts")
            .service(
                web::resource("")
                    .route(web::get().to(shortcuts::get_shortcuts))
            )
            .service(
                web::resource("/dispatch")
                    .route(web::post().to(shortcuts::dispatch_shortcuts))
            )
    );
}
