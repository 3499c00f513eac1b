// src/charset.rs
use std::ops::RangeInclusive;
use thiserror::Error;
use crate::models::{GenerationPolicy, SecurityStandard};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const NIST_SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";
pub const OWASP_SYMBOLS: &str = "!@#$%^&*";

/// Characters easily confused with one another when read back.
pub const AMBIGUOUS: &str = "1l0OiI";

pub const LENGTH_RANGE: RangeInclusive<usize> = 8..=128;
pub const WORD_COUNT_RANGE: RangeInclusive<usize> = 2..=8;
pub const BULK_COUNT_RANGE: RangeInclusive<usize> = 1..=100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("At least one character type must be selected")]
    NoCharacterClasses,

    #[error("No valid characters available with current settings")]
    EmptyAlphabet,

    #[error("Length must be between {min} and {max}, got {actual}")]
    LengthOutOfRange { min: usize, max: usize, actual: usize },

    #[error("Word count must be between {min} and {max}, got {actual}")]
    WordCountOutOfRange { min: usize, max: usize, actual: usize },

    #[error("Count must be between {min} and {max}, got {actual}")]
    CountOutOfRange { min: usize, max: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, PolicyError>;

pub fn validate_length(length: usize) -> Result<()> {
    if LENGTH_RANGE.contains(&length) {
        Ok(())
    } else {
        Err(PolicyError::LengthOutOfRange {
            min: *LENGTH_RANGE.start(),
            max: *LENGTH_RANGE.end(),
            actual: length,
        })
    }
}

pub fn validate_word_count(word_count: usize) -> Result<()> {
    if WORD_COUNT_RANGE.contains(&word_count) {
        Ok(())
    } else {
        Err(PolicyError::WordCountOutOfRange {
            min: *WORD_COUNT_RANGE.start(),
            max: *WORD_COUNT_RANGE.end(),
            actual: word_count,
        })
    }
}

pub fn validate_bulk_count(count: usize) -> Result<()> {
    if BULK_COUNT_RANGE.contains(&count) {
        Ok(())
    } else {
        Err(PolicyError::CountOutOfRange {
            min: *BULK_COUNT_RANGE.start(),
            max: *BULK_COUNT_RANGE.end(),
            actual: count,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lower,
    Upper,
    Digit,
    Symbol,
}

pub fn symbols_for(standard: SecurityStandard) -> &'static str {
    match standard {
        SecurityStandard::Nist => NIST_SYMBOLS,
        SecurityStandard::Owasp => OWASP_SYMBOLS,
    }
}

pub fn is_ambiguous(c: char) -> bool {
    AMBIGUOUS.contains(c)
}

/// Returns the characters of `set`, minus ambiguous ones when `exclude_ambiguous`.
pub fn filtered(set: &str, exclude_ambiguous: bool) -> Vec<char> {
    set.chars()
        .filter(|c| !(exclude_ambiguous && is_ambiguous(*c)))
        .collect()
}

/// Ordered set of distinct characters, each tagged with its class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    entries: Vec<(char, CharClass)>,
}

impl Alphabet {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.entries.iter().any(|(e, _)| *e == c)
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.iter().map(|(c, _)| *c)
    }

    pub fn class_of(&self, c: char) -> Option<CharClass> {
        self.entries.iter().find(|(e, _)| *e == c).map(|(_, class)| *class)
    }

    pub fn class_size(&self, class: CharClass) -> usize {
        self.entries.iter().filter(|(_, c)| *c == class).count()
    }
}

/// Builds the alphabet for a policy.
///
/// Fails before anything else happens when no class is enabled, or when
/// ambiguous-character exclusion leaves nothing to draw from.
pub fn build_alphabet(policy: &GenerationPolicy) -> Result<Alphabet> {
    if !policy.has_character_class() {
        return Err(PolicyError::NoCharacterClasses);
    }

    let classes = [
        (policy.include_lowercase, LOWERCASE, CharClass::Lower),
        (policy.include_uppercase, UPPERCASE, CharClass::Upper),
        (policy.include_numbers, DIGITS, CharClass::Digit),
        (policy.include_symbols, symbols_for(policy.security_standard), CharClass::Symbol),
    ];

    let mut entries: Vec<(char, CharClass)> = Vec::new();
    for (enabled, set, class) in classes {
        if !enabled {
            continue;
        }
        for c in filtered(set, policy.exclude_ambiguous) {
            if !entries.iter().any(|(e, _)| *e == c) {
                entries.push((c, class));
            }
        }
    }

    if entries.is_empty() {
        return Err(PolicyError::EmptyAlphabet);
    }

    log::debug!("Built alphabet of {} characters ({})", entries.len(), policy.security_standard);
    Ok(Alphabet { entries })
}
