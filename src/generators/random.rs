// src/generators/random.rs
use rand::{CryptoRng, Rng};
use crate::charset::{build_alphabet, validate_length};
use crate::entropy::{charset_entropy, evaluate_strength};
use crate::models::{GeneratedPassword, GenerationPolicy, PasswordKind};
use super::{draw, Result};

/// Uniform sampling with replacement from the policy's alphabet.
///
/// Individual classes are not guaranteed to appear in the output.
pub fn generate<R>(policy: &GenerationPolicy, rng: &mut R) -> Result<GeneratedPassword>
where
    R: Rng + CryptoRng + ?Sized,
{
    validate_length(policy.length)?;
    let alphabet = build_alphabet(policy)?;
    let pool: Vec<char> = alphabet.chars().collect();

    let mut text = String::with_capacity(policy.length);
    for _ in 0..policy.length {
        text.push(draw(&pool, rng)?);
    }

    let entropy_bits = charset_entropy(policy.length, pool.len());
    Ok(GeneratedPassword {
        length: text.chars().count(),
        text,
        entropy_bits,
        strength: evaluate_strength(entropy_bits),
        charset_size: pool.len(),
        kind: PasswordKind::Random,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::{PolicyError, AMBIGUOUS};
    use crate::generators::GeneratorError;
    use crate::models::{SecurityStandard, Strength};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn output_has_exact_length_and_stays_in_alphabet() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        for (length, standard) in [(8, SecurityStandard::Nist), (57, SecurityStandard::Owasp), (128, SecurityStandard::Nist)] {
            let policy = GenerationPolicy {
                length,
                security_standard: standard,
                exclude_ambiguous: false,
                ..Default::default()
            };
            let alphabet = build_alphabet(&policy).unwrap();
            let generated = generate(&policy, &mut rng).unwrap();
            assert_eq!(generated.text.chars().count(), length);
            assert_eq!(generated.length, length);
            assert!(generated.text.chars().all(|c| alphabet.contains(c)));
            assert_eq!(generated.charset_size, alphabet.len());
        }
    }

    #[test]
    fn excludes_ambiguous_characters() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let policy = GenerationPolicy { length: 128, exclude_ambiguous: true, ..Default::default() };
        for _ in 0..20 {
            let generated = generate(&policy, &mut rng).unwrap();
            assert!(!generated.text.chars().any(|c| AMBIGUOUS.contains(c)));
        }
    }

    #[test]
    fn entropy_and_strength_follow_alphabet() {
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        let policy = GenerationPolicy {
            length: 16,
            include_uppercase: false,
            include_symbols: false,
            include_numbers: false,
            exclude_ambiguous: false,
            ..Default::default()
        };
        let generated = generate(&policy, &mut rng).unwrap();
        assert_eq!(generated.charset_size, 26);
        assert!((generated.entropy_bits - 16.0 * 26f64.log2()).abs() < 1e-9);
        assert_eq!(generated.strength, Strength::Strong);
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
        assert!(matches!(
            generate(&policy, &mut rng),
            Err(GeneratorError::Policy(PolicyError::NoCharacterClasses))
        ));
    }

    #[test]
    fn rejects_out_of_range_length() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        for length in [0, 7, 129] {
            let policy = GenerationPolicy { length, ..Default::default() };
            assert!(matches!(
                generate(&policy, &mut rng),
                Err(GeneratorError::Policy(PolicyError::LengthOutOfRange { .. }))
            ));
        }
    }
}
