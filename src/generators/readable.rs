// src/generators/readable.rs
use rand::{CryptoRng, Rng};
use crate::charset::validate_word_count;
use crate::entropy::{evaluate_strength, word_entropy};
use crate::models::{GeneratedPassword, GenerationPolicy, PasswordKind};
use super::{capitalize, draw, Result, WordList, WORD_LIST};

/// Number of distinct numeric suffixes (0..=99).
pub const SUFFIX_CHOICES: usize = 100;

pub fn generate<R>(policy: &GenerationPolicy, rng: &mut R) -> Result<GeneratedPassword>
where
    R: Rng + CryptoRng + ?Sized,
{
    generate_from(&WORD_LIST, policy, rng)
}

/// Diceware-style password: `word_count` words drawn with replacement.
pub fn generate_from<R>(words: &WordList, policy: &GenerationPolicy, rng: &mut R) -> Result<GeneratedPassword>
where
    R: Rng + CryptoRng + ?Sized,
{
    validate_word_count(policy.word_count)?;

    let mut selected = Vec::with_capacity(policy.word_count);
    for _ in 0..policy.word_count {
        let word = draw(words.words(), rng)?;
        selected.push(if policy.capitalize { capitalize(&word) } else { word });
    }

    let mut text = selected.join(&policy.separator);
    let mut extra_choices = Vec::new();
    if policy.include_numbers {
        let suffix = rng.gen_range(0..SUFFIX_CHOICES);
        text.push_str(&suffix.to_string());
        extra_choices.push(SUFFIX_CHOICES);
    }

    let entropy_bits = word_entropy(policy.word_count, words.len(), &extra_choices);
    Ok(GeneratedPassword {
        length: text.chars().count(),
        text,
        entropy_bits,
        strength: evaluate_strength(entropy_bits),
        charset_size: words.len(),
        kind: PasswordKind::Readable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::PolicyError;
    use crate::generators::GeneratorError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn four_capitalized_words_without_digits() {
        let mut rng = ChaCha20Rng::seed_from_u64(21);
        let policy = GenerationPolicy {
            word_count: 4,
            separator: "-".to_string(),
            include_numbers: false,
            capitalize: true,
            ..Default::default()
        };
        let generated = generate(&policy, &mut rng).unwrap();
        let parts: Vec<&str> = generated.text.split('-').collect();
        assert_eq!(parts.len(), 4);
        for part in parts {
            let mut chars = part.chars();
            assert!(chars.next().unwrap().is_ascii_uppercase());
            assert!(chars.all(|c| c.is_ascii_lowercase()));
            assert!(WORD_LIST.words().contains(&part.to_lowercase()));
        }
        assert!(!generated.text.ends_with(|c: char| c.is_ascii_digit()));
        assert_eq!(generated.entropy_bits, 24.0);
    }

    #[test]
    fn numeric_suffix_is_one_or_two_digits() {
        let mut rng = ChaCha20Rng::seed_from_u64(8);
        let policy = GenerationPolicy {
            word_count: 3,
            separator: ".".to_string(),
            include_numbers: true,
            capitalize: false,
            ..Default::default()
        };
        for _ in 0..50 {
            let generated = generate(&policy, &mut rng).unwrap();
            let digits: String = generated.text.chars().rev().take_while(|c| c.is_ascii_digit()).collect();
            assert!((1..=2).contains(&digits.len()), "{}", generated.text);
            assert_eq!(generated.text.split('.').count(), 3);
            assert_eq!(generated.length, generated.text.chars().count());
        }
    }

    #[test]
    fn suffix_adds_entropy() {
        let mut rng = ChaCha20Rng::seed_from_u64(8);
        let policy = GenerationPolicy { word_count: 4, include_numbers: true, ..Default::default() };
        let generated = generate(&policy, &mut rng).unwrap();
        assert!((generated.entropy_bits - (24.0 + 100f64.log2())).abs() < 1e-9);
        assert_eq!(generated.charset_size, 64);
    }

    #[test]
    fn multibyte_separator_length_in_chars() {
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let words = WordList::from_words(["ab", "cd"]);
        let policy = GenerationPolicy {
            word_count: 2,
            separator: "·".to_string(),
            include_numbers: false,
            capitalize: false,
            ..Default::default()
        };
        let generated = generate_from(&words, &policy, &mut rng).unwrap();
        assert_eq!(generated.length, 5);
    }

    #[test]
    fn rejects_word_count_out_of_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        for word_count in [1, 9] {
            let policy = GenerationPolicy { word_count, ..Default::default() };
            assert!(matches!(
                generate(&policy, &mut rng),
                Err(GeneratorError::Policy(PolicyError::WordCountOutOfRange { .. }))
            ));
        }
    }

    #[test]
    fn empty_word_list_is_a_generation_failure() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let words = WordList::from_words(std::iter::empty());
        let policy = GenerationPolicy::default();
        assert!(matches!(
            generate_from(&words, &policy, &mut rng),
            Err(GeneratorError::GenerationFailure(_))
        ));
    }
}
