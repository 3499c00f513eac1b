// src/generators/passphrase.rs
use rand::{CryptoRng, Rng};
use crate::charset::{filtered, validate_length, LOWERCASE};
use crate::entropy::{charset_entropy, evaluate_strength, word_entropy};
use crate::models::{GeneratedPassword, GenerationPolicy, PasswordKind};
use super::{capitalize, draw, GeneratorError, Result, WordList, WORD_LIST};

pub fn generate<R>(policy: &GenerationPolicy, rng: &mut R) -> Result<GeneratedPassword>
where
    R: Rng + CryptoRng + ?Sized,
{
    generate_from(&WORD_LIST, policy, rng)
}

/// Passphrase targeting an exact character length.
///
/// Words are appended while they fit. The first word that would overshoot
/// the target is discarded, so cuts only ever happen on word boundaries,
/// and the remainder is padded from a small lowercase alphabet. With spaces
/// on, padding is always its own space-separated token; if only the space
/// itself would fit, the last word is dropped to make room.
pub fn generate_from<R>(words: &WordList, policy: &GenerationPolicy, rng: &mut R) -> Result<GeneratedPassword>
where
    R: Rng + CryptoRng + ?Sized,
{
    validate_length(policy.length)?;
    if words.is_empty() {
        return Err(GeneratorError::GenerationFailure("word list is empty".to_string()));
    }

    let target = policy.length;
    let separator = if policy.include_spaces { " " } else { "" };
    let separator_len = separator.chars().count();

    let mut text = String::new();
    let mut text_len = 0usize;
    // (byte length, char length) of `text` before each word was appended
    let mut boundaries: Vec<(usize, usize)> = Vec::new();
    loop {
        let word = draw(words.words(), rng)?;
        let word = if policy.capitalize { capitalize(&word) } else { word };
        let joint = if boundaries.is_empty() { 0 } else { separator_len };
        let next_len = text_len + joint + word.chars().count();
        if next_len > target {
            break;
        }
        boundaries.push((text.len(), text_len));
        if joint > 0 {
            text.push_str(separator);
        }
        text.push_str(&word);
        text_len = next_len;
        if text_len == target {
            break;
        }
    }

    if separator_len > 0 && text_len < target && target - text_len <= separator_len {
        if let Some((bytes, chars)) = boundaries.pop() {
            text.truncate(bytes);
            text_len = chars;
        }
    }
    let words_used = boundaries.len();

    let padding = filtered(LOWERCASE, policy.exclude_ambiguous);
    if words_used > 0 && separator_len > 0 && target > text_len {
        text.push_str(separator);
        text_len += separator_len;
    }
    let pad_len = target - text_len;
    for _ in 0..pad_len {
        text.push(draw(&padding, rng)?);
    }

    let entropy_bits = word_entropy(words_used, words.len(), &[]) + charset_entropy(pad_len, padding.len());
    Ok(GeneratedPassword {
        length: text.chars().count(),
        text,
        entropy_bits,
        strength: evaluate_strength(entropy_bits),
        charset_size: words.len(),
        kind: PasswordKind::Passphrase,
    })
}
