// src/breach/mod.rs
use std::sync::Arc;
use std::time::Duration;
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use sha1::{Digest, Sha1};
use thiserror::Error;
use utoipa::ToSchema;
use log::{debug, warn};

pub mod rate_limiter;
pub mod source;

pub use rate_limiter::RateLimiter;
pub use source::{LookupError, PwnedRangeClient, RangeSource};

pub const PREFIX_LEN: usize = 5;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckError {
    #[error("Password is required")]
    EmptyPassword,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompromiseStatus {
    Compromised { count: u64 },
    NotCompromised,
    /// The lookup failed; nothing is known about the password.
    Inconclusive { reason: String },
}

/// Serialized outcome tag, kept separate from `is_compromised` so a failed
/// lookup is never reported as a clean one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CheckOutcome {
    Compromised,
    Clean,
    Inconclusive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompromiseResult {
    pub status: CompromiseStatus,
    pub checked_at: DateTime<Utc>,
}

impl CompromiseResult {
    pub fn is_compromised(&self) -> bool {
        matches!(self.status, CompromiseStatus::Compromised { .. })
    }

    pub fn is_inconclusive(&self) -> bool {
        matches!(self.status, CompromiseStatus::Inconclusive { .. })
    }

    pub fn compromise_count(&self) -> Option<u64> {
        match self.status {
            CompromiseStatus::Compromised { count } => Some(count),
            _ => None,
        }
    }

    pub fn outcome(&self) -> CheckOutcome {
        match self.status {
            CompromiseStatus::Compromised { .. } => CheckOutcome::Compromised,
            CompromiseStatus::NotCompromised => CheckOutcome::Clean,
            CompromiseStatus::Inconclusive { .. } => CheckOutcome::Inconclusive,
        }
    }
}

/// Upper-case hex SHA-1 split into the transmitted prefix and the
/// locally matched suffix.
pub fn hash_parts(password: &str) -> (String, String) {
    let digest = hex::encode_upper(Sha1::digest(password.as_bytes()));
    let (prefix, suffix) = digest.split_at(PREFIX_LEN);
    (prefix.to_string(), suffix.to_string())
}

/// Finds `suffix` in a range response body and returns its count.
///
/// Padding rows carry a count of zero and never match.
pub fn find_suffix(body: &str, suffix: &str) -> Result<Option<u64>, LookupError> {
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (candidate, count) = line
            .split_once(':')
            .ok_or_else(|| LookupError::MalformedResponse(format!("missing count in line '{}'", line)))?;
        if !candidate.trim().eq_ignore_ascii_case(suffix) {
            continue;
        }
        let count: u64 = count
            .trim()
            .parse()
            .map_err(|_| LookupError::MalformedResponse(format!("invalid count in line '{}'", line)))?;
        return Ok(if count > 0 { Some(count) } else { None });
    }
    Ok(None)
}

/// Checks passwords against a breach corpus without sending the password
/// or its full hash anywhere.
pub struct BreachChecker {
    source: Arc<dyn RangeSource>,
    limiter: Arc<RateLimiter>,
    timeout: Duration,
}

impl BreachChecker {
    pub fn new(source: Arc<dyn RangeSource>, limiter: Arc<RateLimiter>, timeout: Duration) -> Self {
        Self { source, limiter, timeout }
    }

    /// Network faults and timeouts come back as an inconclusive result;
    /// only an empty password is an error.
    pub async fn check(&self, password: &str) -> Result<CompromiseResult, CheckError> {
        if password.is_empty() {
            return Err(CheckError::EmptyPassword);
        }

        let (prefix, suffix) = hash_parts(password);
        self.limiter.acquire().await;

        let lookup = tokio::time::timeout(self.timeout, self.source.fetch_range(&prefix)).await;
        let status = match lookup {
            Ok(Ok(body)) => match find_suffix(&body, &suffix) {
                Ok(Some(count)) => CompromiseStatus::Compromised { count },
                Ok(None) => CompromiseStatus::NotCompromised,
                Err(e) => CompromiseStatus::Inconclusive { reason: e.to_string() },
            },
            Ok(Err(e)) => CompromiseStatus::Inconclusive { reason: e.to_string() },
            Err(_) => CompromiseStatus::Inconclusive {
                reason: LookupError::Timeout(self.timeout).to_string(),
            },
        };

        let result = CompromiseResult { status, checked_at: Utc::now() };
        match &result.status {
            CompromiseStatus::Inconclusive { reason } => {
                warn!("Breach lookup for prefix {} inconclusive: {}", prefix, reason);
            }
            _ => debug!("Breach lookup for prefix {}: {:?}", prefix, result.outcome()),
        }
        Ok(result)
    }
}
