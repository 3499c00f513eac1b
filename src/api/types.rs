// src/api/types.rs
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;
use crate::breach::CheckOutcome;
use crate::models::{GenerationPolicy, PasswordKind, SecurityStandard, Strength};

// Generation requests
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PasswordRequest {
    /// Password length (8-128, default: 16)
    pub length: usize,
    /// Include uppercase letters (default: true)
    pub include_uppercase: bool,
    /// Include lowercase letters (default: true)
    pub include_lowercase: bool,
    /// Include numbers (default: true)
    pub include_numbers: bool,
    /// Include symbols (default: true)
    pub include_symbols: bool,
    /// Exclude ambiguous characters such as 1, l, 0, O (default: true)
    pub exclude_ambiguous: bool,
    /// Symbol set to draw from (default: NIST)
    pub security_standard: SecurityStandard,
    /// Check the result against the breach corpus (default: false)
    pub check_compromised: bool,
}

impl Default for PasswordRequest {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_ambiguous: true,
            security_standard: SecurityStandard::Nist,
            check_compromised: false,
        }
    }
}

impl PasswordRequest {
    pub fn policy(&self) -> GenerationPolicy {
        GenerationPolicy {
            length: self.length,
            include_uppercase: self.include_uppercase,
            include_lowercase: self.include_lowercase,
            include_numbers: self.include_numbers,
            include_symbols: self.include_symbols,
            exclude_ambiguous: self.exclude_ambiguous,
            security_standard: self.security_standard,
            ..Default::default()
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BulkPasswordRequest {
    /// Number of passwords to generate (1-100, default: 1)
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(flatten)]
    pub password: PasswordRequest,
}

fn default_count() -> usize {
    1
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ReadablePasswordRequest {
    /// Number of words (2-8, default: 4)
    pub word_count: usize,
    /// Word separator (default: "-")
    pub separator: String,
    /// Append a numeric suffix (default: true)
    pub include_numbers: bool,
    /// Capitalize the first letter of each word (default: true)
    pub capitalize: bool,
    /// Check the result against the breach corpus (default: false)
    pub check_compromised: bool,
}

impl Default for ReadablePasswordRequest {
    fn default() -> Self {
        Self {
            word_count: 4,
            separator: "-".to_string(),
            include_numbers: true,
            capitalize: true,
            check_compromised: false,
        }
    }
}

impl ReadablePasswordRequest {
    pub fn policy(&self) -> GenerationPolicy {
        GenerationPolicy {
            word_count: self.word_count,
            separator: self.separator.clone(),
            include_numbers: self.include_numbers,
            capitalize: self.capitalize,
            ..Default::default()
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PassphraseRequest {
    /// Total passphrase length in characters (8-128, default: 32)
    pub length: usize,
    /// Separate words with spaces (default: true)
    pub include_spaces: bool,
    /// Capitalize the first letter of each word (default: true)
    pub capitalize: bool,
    /// Check the result against the breach corpus (default: false)
    pub check_compromised: bool,
}

impl Default for PassphraseRequest {
    fn default() -> Self {
        Self { length: 32, include_spaces: true, capitalize: true, check_compromised: false }
    }
}

impl PassphraseRequest {
    pub fn policy(&self) -> GenerationPolicy {
        GenerationPolicy {
            length: self.length,
            include_spaces: self.include_spaces,
            capitalize: self.capitalize,
            ..Default::default()
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CheckCompromisedRequest {
    /// Password to look up
    pub password: String,
}

// Breach check fields shared by every generation response
#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompromiseFields {
    /// True only when the lookup found the password
    pub is_compromised: bool,
    /// Number of breaches the password appears in (only when found)
    pub compromise_count: Option<u64>,
    /// Outcome of the lookup; absent when no check was requested
    pub compromise_check: Option<CheckOutcome>,
}

// Generation responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PasswordResponse {
    pub password: String,
    pub length: usize,
    pub entropy_bits: f64,
    pub strength: Strength,
    pub charset_size: usize,
    #[serde(flatten)]
    pub compromise: CompromiseFields,
    pub security_standard: SecurityStandard,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BulkPasswordItem {
    pub password: String,
    pub length: usize,
    pub entropy_bits: f64,
    pub strength: Strength,
    #[serde(flatten)]
    pub compromise: CompromiseFields,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BulkPasswordResponse {
    pub passwords: Vec<BulkPasswordItem>,
    pub count: usize,
    pub charset_size: usize,
    pub security_standard: SecurityStandard,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReadablePasswordResponse {
    pub password: String,
    pub length: usize,
    pub word_count: usize,
    pub entropy_bits: f64,
    pub strength: Strength,
    #[serde(flatten)]
    pub compromise: CompromiseFields,
    #[serde(rename = "type")]
    pub kind: PasswordKind,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PronounceablePasswordResponse {
    pub password: String,
    pub length: usize,
    pub entropy_bits: f64,
    pub strength: Strength,
    #[serde(flatten)]
    pub compromise: CompromiseFields,
    #[serde(rename = "type")]
    pub kind: PasswordKind,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PassphraseResponse {
    pub passphrase: String,
    pub length: usize,
    pub entropy_bits: f64,
    pub strength: Strength,
    #[serde(flatten)]
    pub compromise: CompromiseFields,
    #[serde(rename = "type")]
    pub kind: PasswordKind,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CompromiseCheckResponse {
    #[serde(flatten)]
    pub compromise: CompromiseFields,
    pub checked_at: DateTime<Utc>,
}

// Service responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// What was wrong with the request
    pub detail: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}
