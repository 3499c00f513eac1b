// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse};
use rand::rngs::OsRng;
use crate::api::types::{
    BulkPasswordItem, BulkPasswordRequest, BulkPasswordResponse, ErrorResponse,
    PassphraseRequest, PassphraseResponse, PasswordRequest, PasswordResponse,
    PronounceablePasswordResponse, ReadablePasswordRequest, ReadablePasswordResponse,
};
use crate::api::utils::{check_if_requested, generator_error_response, round2};
use crate::api::AppState;
use crate::generators;
use crate::models::PasswordKind;

/// Generate a secure password
///
/// Draws every character uniformly from the selected character classes.
#[utoipa::path(
    post,
    path = "/api/generate",
    tag = "Generator",
    request_body = PasswordRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordResponse),
        (status = 400, description = "Invalid policy", body = ErrorResponse),
        (status = 500, description = "Generation failure", body = ErrorResponse)
    )
)]
pub async fn generate_password(
    state: web::Data<AppState>,
    req: web::Json<PasswordRequest>,
) -> HttpResponse {
    let generated = match generators::generate(PasswordKind::Random, &req.policy(), &mut OsRng) {
        Ok(generated) => generated,
        Err(e) => return generator_error_response(e),
    };

    let compromise = check_if_requested(&state.checker, &generated.text, req.check_compromised).await;

    HttpResponse::Ok().json(PasswordResponse {
        length: generated.length,
        entropy_bits: round2(generated.entropy_bits),
        strength: generated.strength,
        charset_size: generated.charset_size,
        password: generated.text,
        compromise,
        security_standard: req.security_standard,
    })
}

/// Generate multiple passwords
#[utoipa::path(
    post,
    path = "/api/generate/bulk",
    tag = "Generator",
    request_body = BulkPasswordRequest,
    responses(
        (status = 200, description = "Generated passwords", body = BulkPasswordResponse),
        (status = 400, description = "Invalid policy or count", body = ErrorResponse),
        (status = 500, description = "Generation failure", body = ErrorResponse)
    )
)]
pub async fn generate_bulk(
    state: web::Data<AppState>,
    req: web::Json<BulkPasswordRequest>,
) -> HttpResponse {
    let policy = req.password.policy();
    let generated = match generators::generate_bulk(PasswordKind::Random, &policy, req.count, &mut OsRng) {
        Ok(generated) => generated,
        Err(e) => return generator_error_response(e),
    };
    let charset_size = generated.first().map(|p| p.charset_size).unwrap_or_default();

    // Checks share one limiter, so they run one after another.
    let mut passwords = Vec::with_capacity(generated.len());
    for password in generated {
        let compromise =
            check_if_requested(&state.checker, &password.text, req.password.check_compromised).await;
        passwords.push(BulkPasswordItem {
            length: password.length,
            entropy_bits: round2(password.entropy_bits),
            strength: password.strength,
            password: password.text,
            compromise,
        });
    }

    HttpResponse::Ok().json(BulkPasswordResponse {
        count: passwords.len(),
        passwords,
        charset_size,
        security_standard: req.password.security_standard,
    })
}

/// Generate a readable password
///
/// correct-horse-battery-staple style words, optionally followed by a number.
#[utoipa::path(
    post,
    path = "/api/generate/readable",
    tag = "Generator",
    request_body = ReadablePasswordRequest,
    responses(
        (status = 200, description = "Generated password", body = ReadablePasswordResponse),
        (status = 400, description = "Invalid word count", body = ErrorResponse)
    )
)]
pub async fn generate_readable(
    state: web::Data<AppState>,
    req: web::Json<ReadablePasswordRequest>,
) -> HttpResponse {
    let generated = match generators::generate(PasswordKind::Readable, &req.policy(), &mut OsRng) {
        Ok(generated) => generated,
        Err(e) => return generator_error_response(e),
    };

    let compromise = check_if_requested(&state.checker, &generated.text, req.check_compromised).await;

    HttpResponse::Ok().json(ReadablePasswordResponse {
        length: generated.length,
        word_count: req.word_count,
        entropy_bits: round2(generated.entropy_bits),
        strength: generated.strength,
        password: generated.text,
        compromise,
        kind: generated.kind,
    })
}

/// Generate a pronounceable password
#[utoipa::path(
    post,
    path = "/api/generate/pronounceable",
    tag = "Generator",
    request_body = PasswordRequest,
    responses(
        (status = 200, description = "Generated password", body = PronounceablePasswordResponse),
        (status = 400, description = "Invalid policy", body = ErrorResponse)
    )
)]
pub async fn generate_pronounceable(
    state: web::Data<AppState>,
    req: web::Json<PasswordRequest>,
) -> HttpResponse {
    let generated = match generators::generate(PasswordKind::Pronounceable, &req.policy(), &mut OsRng) {
        Ok(generated) => generated,
        Err(e) => return generator_error_response(e),
    };

    let compromise = check_if_requested(&state.checker, &generated.text, req.check_compromised).await;

    HttpResponse::Ok().json(PronounceablePasswordResponse {
        length: generated.length,
        entropy_bits: round2(generated.entropy_bits),
        strength: generated.strength,
        password: generated.text,
        compromise,
        kind: generated.kind,
    })
}

/// Generate a passphrase
///
/// Words padded to an exact character length, for MFA or SSH keys.
#[utoipa::path(
    post,
    path = "/api/generate/passphrase",
    tag = "Generator",
    request_body = PassphraseRequest,
    responses(
        (status = 200, description = "Generated passphrase", body = PassphraseResponse),
        (status = 400, description = "Invalid length", body = ErrorResponse)
    )
)]
pub async fn generate_passphrase(
    state: web::Data<AppState>,
    req: web::Json<PassphraseRequest>,
) -> HttpResponse {
    let generated = match generators::generate(PasswordKind::Passphrase, &req.policy(), &mut OsRng) {
        Ok(generated) => generated,
        Err(e) => return generator_error_response(e),
    };

    let compromise = check_if_requested(&state.checker, &generated.text, req.check_compromised).await;

    HttpResponse::Ok().json(PassphraseResponse {
        length: generated.length,
        entropy_bits: round2(generated.entropy_bits),
        strength: generated.strength,
        passphrase: generated.text,
        compromise,
        kind: generated.kind,
    })
}
