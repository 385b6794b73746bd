//! Character-class mode.

use rand::{CryptoRng, Rng};

use super::config::GeneratorConfig;
use crate::errors::{PassmanError, Result};

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &[u8] = b"1234567890";
pub const SYMBOLS: &[u8] = b"!@#$%^&*?-_=+";

/// Upper bound on whole-password regenerations.
pub const MAX_ATTEMPTS: usize = 1000;

/// The enabled classes, in alphabet order.
fn enabled_classes(config: &GeneratorConfig) -> Vec<&'static [u8]> {
    [
        (config.lowercase, LOWERCASE),
        (config.uppercase, UPPERCASE),
        (config.numbers, NUMBERS),
        (config.symbols, SYMBOLS),
    ]
    .into_iter()
    .filter_map(|(on, class)| on.then_some(class))
    .collect()
}

/// Draw `config.length` characters until every enabled class shows up.
pub fn generate<R: CryptoRng>(config: &GeneratorConfig, rng: &mut R) -> Result<String> {
    config.check_length()?;

    let classes = enabled_classes(config);
    let alphabet: Vec<u8> = classes.concat();
    if alphabet.is_empty() {
        return Err(PassmanError::GenerationExhausted { attempts: 0 });
    }

    for attempt in 1..=MAX_ATTEMPTS {
        let password: Vec<u8> = (0..config.length)
            .map(|_| alphabet[rng.random_range(0..alphabet.len())])
            .collect();

        let covered = classes
            .iter()
            .all(|class| password.iter().any(|b| class.contains(b)));
        if covered {
            tracing::debug!(attempt, "generated password covering all classes");
            // Every byte comes from an ASCII alphabet.
            return Ok(password.into_iter().map(char::from).collect());
        }
    }

    tracing::warn!(
        length = config.length,
        classes = classes.len(),
        "password generation exhausted its retries"
    );
    Err(PassmanError::GenerationExhausted {
        attempts: MAX_ATTEMPTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn alphabet_follows_class_order() {
        let config = GeneratorConfig::parse("cl");
        let classes = enabled_classes(&config);
        assert_eq!(classes, vec![LOWERCASE, SYMBOLS]);
    }

    #[test]
    fn length_shorter_than_class_count_is_exhausted() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = GeneratorConfig::parse("lunc3");
        assert!(matches!(
            generate(&config, &mut rng),
            Err(PassmanError::GenerationExhausted { attempts: MAX_ATTEMPTS })
        ));
    }

    #[test]
    fn zero_length_with_classes_is_exhausted() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = GeneratorConfig::parse("l0");
        assert!(generate(&config, &mut rng).is_err());
    }

    #[test]
    fn huge_length_is_rejected_without_allocating() {
        let mut rng = StdRng::seed_from_u64(2);
        let config = GeneratorConfig::parse("l18446744073709551615");
        assert!(matches!(
            generate(&config, &mut rng),
            Err(PassmanError::LengthTooLong { .. })
        ));
    }

    #[test]
    fn single_class_uses_only_that_class() {
        let mut rng = StdRng::seed_from_u64(42);
        let password = generate(&GeneratorConfig::parse("n30"), &mut rng).unwrap();
        assert_eq!(password.len(), 30);
        assert!(password.bytes().all(|b| NUMBERS.contains(&b)));
    }

    #[test]
    fn same_seed_same_password() {
        let config = GeneratorConfig::parse("lunc16");
        let a = generate(&config, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = generate(&config, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }
}
