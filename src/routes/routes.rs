use actix_web::web;

use crate::handlers::health_handlers::health_check;
use crate::handlers::profile_handlers::{get_profile, save_profile};

/// Configure the routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health/check", web::get().to(health_check));
    // Every other path reaches the profile handlers, favicon probes included
    cfg.service(
        web::resource("/{tail:.*}")
            .route(web::get().to(get_profile))
            .route(web::post().to(save_profile)),
    );
}
