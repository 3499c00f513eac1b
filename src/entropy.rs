// src/entropy.rs
use crate::models::Strength;

pub const MEDIUM_THRESHOLD: f64 = 40.0;
pub const STRONG_THRESHOLD: f64 = 60.0;
pub const VERY_STRONG_THRESHOLD: f64 = 80.0;

/// Entropy of `length` independent draws from an alphabet of `charset_size`.
pub fn charset_entropy(length: usize, charset_size: usize) -> f64 {
    if length == 0 || charset_size == 0 {
        return 0.0;
    }
    length as f64 * (charset_size as f64).log2()
}

/// Entropy of `word_count` independent draws from a word list, plus one
/// log2 factor for each optional feature that was actually applied.
///
/// A feature contributing a single possible outcome adds nothing.
pub fn word_entropy(word_count: usize, wordlist_size: usize, extra_choices: &[usize]) -> f64 {
    let words = charset_entropy(word_count, wordlist_size);
    let extras: f64 = extra_choices
        .iter()
        .filter(|&&choices| choices > 0)
        .map(|&choices| (choices as f64).log2())
        .sum();
    words + extras
}

pub fn evaluate_strength(entropy_bits: f64) -> Strength {
    if entropy_bits < MEDIUM_THRESHOLD {
        Strength::Weak
    } else if entropy_bits < STRONG_THRESHOLD {
        Strength::Medium
    } else if entropy_bits < VERY_STRONG_THRESHOLD {
        Strength::Strong
    } else {
        Strength::VeryStrong
    }
}
