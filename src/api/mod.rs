// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};
use crate::breach::{BreachChecker, PwnedRangeClient, RateLimiter};
use crate::core::config::Config;

/// State shared by every worker: the breach checker and, through it, the
/// single process-wide rate limiter.
pub struct AppState {
    pub checker: BreachChecker,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self, crate::breach::LookupError> {
        let source = PwnedRangeClient::new(config)?;
        let limiter = Arc::new(RateLimiter::new(config.hibp_min_interval));
        Ok(Self {
            checker: BreachChecker::new(Arc::new(source), limiter, config.hibp_timeout),
        })
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        // System endpoints
        crate::api::handlers::system::root,
        crate::api::handlers::system::health_check,

        // Generator endpoints
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::generate_bulk,
        crate::api::handlers::generator::generate_readable,
        crate::api::handlers::generator::generate_pronounceable,
        crate::api::handlers::generator::generate_passphrase,

        // Breach endpoints
        crate::api::handlers::breach::check_compromised
    ),
    components(
        schemas(
            crate::api::types::PasswordRequest,
            crate::api::types::BulkPasswordRequest,
            crate::api::types::ReadablePasswordRequest,
            crate::api::types::PassphraseRequest,
            crate::api::types::CheckCompromisedRequest,
            crate::api::types::CompromiseFields,
            crate::api::types::PasswordResponse,
            crate::api::types::BulkPasswordItem,
            crate::api::types::BulkPasswordResponse,
            crate::api::types::ReadablePasswordResponse,
            crate::api::types::PronounceablePasswordResponse,
            crate::api::types::PassphraseResponse,
            crate::api::types::CompromiseCheckResponse,
            crate::api::types::ErrorResponse,
            crate::api::types::RootResponse,
            crate::api::types::HealthResponse,
            crate::breach::CheckOutcome,
            crate::models::SecurityStandard,
            crate::models::PasswordKind,
            crate::models::Strength
        )
    ),
    tags(
        (name = "Generator", description = "Password generation endpoints"),
        (name = "Breach", description = "Breach corpus lookup"),
        (name = "System", description = "Service status")
    ),
    info(
        title = "Secure Password Generator API",
        version = "1.0.0",
        description = "Policy-driven password generation with entropy scoring and breach lookups",
        license(name = "MIT")
    )
)]
struct ApiDoc;

pub async fn start_server(state: AppState, config: &Config) -> std::io::Result<()> {
    log::info!("Starting password generator API on {}:{}", config.web_address, config.web_port);

    // Built once so every worker shares the same limiter
    let state = web::Data::new(state);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((config.web_address.as_str(), config.web_port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::time::Duration;
    use futures::future::BoxFuture;
    use crate::breach::{LookupError, RangeSource};

    pub struct StaticSource(pub Result<String, u16>);

    impl RangeSource for StaticSource {
        fn fetch_range<'a>(&'a self, _prefix: &'a str) -> BoxFuture<'a, Result<String, LookupError>> {
            let reply = self.0.clone().map_err(LookupError::Status);
            Box::pin(async move { reply })
        }
    }

    /// Range body containing "password123".
    pub fn corpus() -> String {
        "0018A45C4D1DEF81644B54AB7F969B88D65:1\r\nC6008F9CAB4083784CBD1874F76618D2A97:251682\r\n".to_string()
    }

    fn state(source: StaticSource) -> web::Data<AppState> {
        let limiter = Arc::new(RateLimiter::new(Duration::ZERO));
        web::Data::new(AppState {
            checker: BreachChecker::new(Arc::new(source), limiter, Duration::from_secs(5)),
        })
    }

    pub fn state_with_body(body: String) -> web::Data<AppState> {
        state(StaticSource(Ok(body)))
    }

    pub fn failing_state() -> web::Data<AppState> {
        state(StaticSource(Err(502)))
    }

    #[test]
    fn openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/",
            "/api/health",
            "/api/generate",
            "/api/generate/bulk",
            "/api/generate/readable",
            "/api/generate/pronounceable",
            "/api/generate/passphrase",
            "/api/check-compromised",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
        assert_eq!(doc.info.version, env!("CARGO_PKG_VERSION"));
    }
}
