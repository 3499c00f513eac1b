// src/generators/mod.rs
use rand::{CryptoRng, Rng};
use thiserror::Error;
use crate::charset::{self, PolicyError};
use crate::models::{GeneratedPassword, GenerationPolicy, PasswordKind};

pub mod passphrase;
pub mod pronounceable;
pub mod random;
pub mod readable;
pub mod wordlist;

pub use wordlist::{WordList, WORD_LIST};

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Invalid policy: {0}")]
    Policy(#[from] PolicyError),

    #[error("Generation failure: {0}")]
    GenerationFailure(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Generates one password of the given kind.
///
/// Every generator validates the policy before drawing any randomness.
pub fn generate<R>(kind: PasswordKind, policy: &GenerationPolicy, rng: &mut R) -> Result<GeneratedPassword>
where
    R: Rng + CryptoRng + ?Sized,
{
    let generated = match kind {
        PasswordKind::Random => random::generate(policy, rng),
        PasswordKind::Readable => readable::generate(policy, rng),
        PasswordKind::Pronounceable => pronounceable::generate(policy, rng),
        PasswordKind::Passphrase => passphrase::generate(policy, rng),
    }?;

    log::debug!(
        "Generated {} password: {} chars, {:.2} bits ({})",
        kind, generated.length, generated.entropy_bits, generated.strength
    );
    Ok(generated)
}

/// Generates `count` independent passwords with the same policy.
pub fn generate_bulk<R>(
    kind: PasswordKind,
    policy: &GenerationPolicy,
    count: usize,
    rng: &mut R,
) -> Result<Vec<GeneratedPassword>>
where
    R: Rng + CryptoRng + ?Sized,
{
    charset::validate_bulk_count(count)?;
    (0..count).map(|_| generate(kind, policy, rng)).collect()
}

// `gen_range` rejects samples outside the largest multiple of the domain
// size, so draws are uniform for any pool length.
pub(crate) fn draw<T, R>(pool: &[T], rng: &mut R) -> Result<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if pool.is_empty() {
        return Err(GeneratorError::GenerationFailure(
            "cannot draw from an empty pool".to_string(),
        ));
    }
    Ok(pool[rng.gen_range(0..pool.len())].clone())
}

pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
