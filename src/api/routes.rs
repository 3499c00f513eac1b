// src/api/routes.rs
use actix_web::web;
use super::handlers;
use super::utils::json_config;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    cfg.route("/", web::get().to(handlers::system::root));

    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::system::health_check))
            // Password generation
            .route("/generate", web::post().to(handlers::generator::generate_password))
            .route("/generate/bulk", web::post().to(handlers::generator::generate_bulk))
            .route("/generate/readable", web::post().to(handlers::generator::generate_readable))
            .route("/generate/pronounceable", web::post().to(handlers::generator::generate_pronounceable))
            .route("/generate/passphrase", web::post().to(handlers::generator::generate_passphrase))
            // Breach lookup
            .route("/check-compromised", web::post().to(handlers::breach::check_compromised))
    );
}
