// src/generators/pronounceable.rs
use rand::{seq::index, CryptoRng, Rng};
use crate::charset::{filtered, is_ambiguous, symbols_for, validate_length, PolicyError, DIGITS};
use crate::entropy::{charset_entropy, evaluate_strength};
use crate::models::{GeneratedPassword, GenerationPolicy, PasswordKind};
use super::{draw, Result};

pub const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";
pub const VOWELS: &str = "aeiou";

const UPPERCASE_PROBABILITY: f64 = 0.3;
const MAX_DIGITS: usize = 2;

/// Consonant/vowel alternation starting with a consonant, so odd lengths
/// end on a consonant. Digits and a symbol overwrite distinct positions,
/// which keeps the output exactly `length` characters long.
pub fn generate<R>(policy: &GenerationPolicy, rng: &mut R) -> Result<GeneratedPassword>
where
    R: Rng + CryptoRng + ?Sized,
{
    validate_length(policy.length)?;
    if !policy.has_character_class() {
        return Err(PolicyError::NoCharacterClasses.into());
    }

    let exclude = policy.exclude_ambiguous;
    let consonants = filtered(CONSONANTS, exclude);
    let vowels = filtered(VOWELS, exclude);
    let digits = filtered(DIGITS, exclude);
    let symbols = filtered(symbols_for(policy.security_standard), exclude);

    let mut chars = Vec::with_capacity(policy.length);
    for i in 0..policy.length {
        let pool = if i % 2 == 0 { &consonants } else { &vowels };
        let mut c = draw(pool, rng)?;
        if policy.include_uppercase && rng.gen_bool(UPPERCASE_PROBABILITY) {
            let upper = c.to_ascii_uppercase();
            if !(exclude && is_ambiguous(upper)) {
                c = upper;
            }
        }
        chars.push(c);
    }

    let digit_count = if policy.include_numbers { MAX_DIGITS.min(policy.length / 4) } else { 0 };
    let symbol_count = usize::from(policy.include_symbols);
    let positions = index::sample(rng, policy.length, digit_count + symbol_count).into_vec();
    for (n, &pos) in positions.iter().enumerate() {
        chars[pos] = if n < digit_count { draw(&digits, rng)? } else { draw(&symbols, rng)? };
    }

    let text: String = chars.into_iter().collect();

    let letters = consonants.len() + vowels.len();
    let mut charset_size = letters;
    if policy.include_uppercase {
        charset_size += consonants
            .iter()
            .chain(vowels.iter())
            .filter(|c| !(exclude && is_ambiguous(c.to_ascii_uppercase())))
            .count();
    }
    if digit_count > 0 {
        charset_size += digits.len();
    }
    if symbol_count > 0 {
        charset_size += symbols.len();
    }

    let entropy_bits = charset_entropy(policy.length, charset_size);
    Ok(GeneratedPassword {
        length: text.chars().count(),
        text,
        entropy_bits,
        strength: evaluate_strength(entropy_bits),
        charset_size,
        kind: PasswordKind::Pronounceable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::AMBIGUOUS;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn length_is_exact_for_both_parities() {
        let mut rng = ChaCha20Rng::seed_from_u64(14);
        for length in [8, 13, 14, 15, 128] {
            let policy = GenerationPolicy { length, ..Default::default() };
            let generated = generate(&policy, &mut rng).unwrap();
            assert_eq!(generated.text.chars().count(), length);
            assert_eq!(generated.length, length);
        }
    }

    #[test]
    fn plain_letters_alternate_consonant_vowel() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let policy = GenerationPolicy {
            length: 15,
            include_uppercase: false,
            include_numbers: false,
            include_symbols: false,
            exclude_ambiguous: false,
            ..Default::default()
        };
        let generated = generate(&policy, &mut rng).unwrap();
        for (i, c) in generated.text.chars().enumerate() {
            if i % 2 == 0 {
                assert!(CONSONANTS.contains(c), "{} at {}", c, i);
            } else {
                assert!(VOWELS.contains(c), "{} at {}", c, i);
            }
        }
        assert!(CONSONANTS.contains(generated.text.chars().last().unwrap()));
        assert_eq!(generated.charset_size, 26);
    }

    #[test]
    fn excludes_ambiguous_characters() {
        let mut rng = ChaCha20Rng::seed_from_u64(77);
        let policy = GenerationPolicy { length: 64, exclude_ambiguous: true, ..Default::default() };
        for _ in 0..50 {
            let generated = generate(&policy, &mut rng).unwrap();
            assert!(!generated.text.chars().any(|c| AMBIGUOUS.contains(c)), "{}", generated.text);
        }
    }

    #[test]
    fn injects_digits_and_symbol() {
        let mut rng = ChaCha20Rng::seed_from_u64(12);
        let policy = GenerationPolicy {
            length: 16,
            include_uppercase: false,
            include_numbers: true,
            include_symbols: true,
            ..Default::default()
        };
        let generated = generate(&policy, &mut rng).unwrap();
        assert_eq!(generated.text.chars().filter(|c| c.is_ascii_digit()).count(), 2);
        assert_eq!(generated.text.chars().filter(|c| !c.is_ascii_alphanumeric()).count(), 1);
    }

    #[test]
    fn rejects_policy_without_classes() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let policy = GenerationPolicy {
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
            ..Default::default()
        };
        assert!(generate(&policy, &mut rng).is_err());
    }
}
