// src/api/utils.rs

use actix_web::{error::InternalError, web, HttpResponse};
use log::{error, info};
use crate::api::types::{CompromiseFields, ErrorResponse};
use crate::breach::{BreachChecker, CompromiseResult};
use crate::generators::GeneratorError;

/// Entropy is reported with two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn compromise_fields(result: &CompromiseResult) -> CompromiseFields {
    CompromiseFields {
        is_compromised: result.is_compromised(),
        compromise_count: result.compromise_count(),
        compromise_check: Some(result.outcome()),
    }
}

/// Runs the breach check only when the caller asked for it.
pub async fn check_if_requested(checker: &BreachChecker, password: &str, requested: bool) -> CompromiseFields {
    if !requested {
        return CompromiseFields::default();
    }
    match checker.check(password).await {
        Ok(result) => compromise_fields(&result),
        // Generated passwords are never empty
        Err(e) => {
            error!("Breach check rejected a generated password: {}", e);
            CompromiseFields::default()
        }
    }
}

pub fn bad_request(detail: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse { detail: detail.into() })
}

pub fn generator_error_response(e: GeneratorError) -> HttpResponse {
    match e {
        GeneratorError::Policy(policy) => {
            info!("Rejected generation policy: {}", policy);
            bad_request(policy.to_string())
        }
        GeneratorError::GenerationFailure(_) => {
            error!("Password generation failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse { detail: e.to_string() })
        }
    }
}

/// Malformed JSON bodies get the same error shape as policy rejections.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        InternalError::from_response(err, bad_request(detail)).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round2(95.27152), 95.27);
        assert_eq!(round2(24.0), 24.0);
        assert_eq!(round2(12.3456), 12.35);
    }
}
