// src/api/handlers/breach.rs

use actix_web::{web, HttpResponse};
use crate::api::types::{CheckCompromisedRequest, CompromiseCheckResponse, ErrorResponse};
use crate::api::utils::{bad_request, compromise_fields};
use crate::api::AppState;

/// Check whether a password appears in known breaches
///
/// Only the first five characters of the password's SHA-1 hash leave the
/// server. A failed lookup is reported as `inconclusive`, never as clean.
#[utoipa::path(
    post,
    path = "/api/check-compromised",
    tag = "Breach",
    request_body = CheckCompromisedRequest,
    responses(
        (status = 200, description = "Lookup result", body = CompromiseCheckResponse),
        (status = 400, description = "Missing password", body = ErrorResponse)
    )
)]
pub async fn check_compromised(
    state: web::Data<AppState>,
    req: web::Json<CheckCompromisedRequest>,
) -> HttpResponse {
    match state.checker.check(&req.password).await {
        Ok(result) => HttpResponse::Ok().json(CompromiseCheckResponse {
            compromise: compromise_fields(&result),
            checked_at: result.checked_at,
        }),
        Err(e) => bad_request(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use serde_json::{json, Value};
    use crate::api::{routes, testing, AppState};

    async fn check(state: web::Data<AppState>, password: &str) -> (u16, Value) {
        let app = test::init_service(App::new().app_data(state).configure(routes::configure_routes)).await;
        let req = test::TestRequest::post()
            .uri("/api/check-compromised")
            .set_json(json!({ "password": password }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn known_password_is_reported() {
        let (status, body) = check(testing::state_with_body(testing::corpus()), "password123").await;
        assert_eq!(status, 200);
        assert_eq!(body["is_compromised"], true);
        assert_eq!(body["compromise_count"], 251682);
        assert_eq!(body["compromise_check"], "compromised");
        assert!(body["checked_at"].is_string());
    }

    #[actix_web::test]
    async fn failed_lookup_is_inconclusive() {
        let (status, body) = check(testing::failing_state(), "password123").await;
        assert_eq!(status, 200);
        assert_eq!(body["is_compromised"], false);
        assert!(body["compromise_count"].is_null());
        assert_eq!(body["compromise_check"], "inconclusive");
    }

    #[actix_web::test]
    async fn empty_password_is_rejected() {
        let (status, body) = check(testing::state_with_body(testing::corpus()), "").await;
        assert_eq!(status, 400);
        assert_eq!(body["detail"], "Password is required");
    }
}
