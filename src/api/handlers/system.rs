// src/api/handlers/system.rs
use actix_web::{HttpResponse, Responder};
use chrono::Utc;
use crate::api::types::{HealthResponse, RootResponse};

/// Service banner
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    responses(
        (status = 200, description = "Service name and version", body = RootResponse)
    )
)]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(RootResponse {
        message: "Secure Password Generator API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health check
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "System",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};
    use serde_json::Value;
    use crate::api::{routes, testing};

    #[actix_web::test]
    async fn health_and_root() {
        let app = test::init_service(
            App::new()
                .app_data(testing::state_with_body(String::new()))
                .configure(routes::configure_routes),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request()).await;
        assert!(resp.status().is_success());
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Secure Password Generator API");
        assert_eq!(body["version"], "1.0.0");
    }
}
