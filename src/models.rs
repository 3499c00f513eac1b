// src/models.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

/// Which symbol set a policy draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum SecurityStandard {
    #[default]
    #[serde(rename = "NIST")]
    Nist,
    #[serde(rename = "OWASP")]
    Owasp,
}

impl std::fmt::Display for SecurityStandard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecurityStandard::Nist => write!(f, "NIST"),
            SecurityStandard::Owasp => write!(f, "OWASP"),
        }
    }
}

/// The generator algorithm that produced a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PasswordKind {
    Random,
    Readable,
    Pronounceable,
    Passphrase,
}

impl std::fmt::Display for PasswordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PasswordKind::Random => write!(f, "random"),
            PasswordKind::Readable => write!(f, "readable"),
            PasswordKind::Pronounceable => write!(f, "pronounceable"),
            PasswordKind::Passphrase => write!(f, "passphrase"),
        }
    }
}

/// Discrete strength tier derived from entropy bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strength::Weak => write!(f, "weak"),
            Strength::Medium => write!(f, "medium"),
            Strength::Strong => write!(f, "strong"),
            Strength::VeryStrong => write!(f, "very_strong"),
        }
    }
}

// Password generation policy.
//
// `length` is read by the random, pronounceable and passphrase generators,
// `word_count` only by the readable one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct GenerationPolicy {
    pub length: usize,
    pub word_count: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub exclude_ambiguous: bool,
    pub security_standard: SecurityStandard,
    pub separator: String,
    pub capitalize: bool,
    pub include_spaces: bool,
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            length: 16,
            word_count: 4,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_ambiguous: true,
            security_standard: SecurityStandard::Nist,
            separator: "-".to_string(),
            capitalize: true,
            include_spaces: true,
        }
    }
}

impl GenerationPolicy {
    pub fn has_character_class(&self) -> bool {
        self.include_uppercase || self.include_lowercase || self.include_numbers || self.include_symbols
    }
}

/// A generated password together with its strength assessment.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct GeneratedPassword {
    pub text: String,
    /// Length in characters, not bytes
    pub length: usize,
    pub entropy_bits: f64,
    pub strength: Strength,
    pub charset_size: usize,
    pub kind: PasswordKind,
}
