//! Account code generator.
//!
//! Produces BCANs that fit a country's structure and full codes with correct
//! MOD 97-10 check digits.

use ican_core::{PatternClass, Specification, Structure, countries};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const UPPER_ALPHANUM: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER_ALPHANUM: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Configuration for the code generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of codes to produce.
    pub count: usize,
    /// Whether to include crypto specifications in the rotation.
    pub include_crypto: bool,
}

/// Predefined batch sizes for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 100 codes
    Small,
    /// 10 000 codes
    Medium,
    /// 100 000 codes
    Large,
}

impl SizeTier {
    /// Returns the generator configuration for this tier with the given seed.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let count = match self {
            Self::Small => 100,
            Self::Medium => 10_000,
            Self::Large => 100_000,
        };
        GeneratorConfig {
            seed,
            count,
            include_crypto: true,
        }
    }
}

/// Characters a block of `class` may draw from.
///
/// Upper-case letters are preferred so the result survives electronic
/// formatting; lower-case is used only where the class demands it.
fn alphabet(class: PatternClass) -> Vec<u8> {
    let upper: Vec<u8> = UPPER_ALPHANUM
        .iter()
        .copied()
        .filter(|&b| class.contains(char::from(b)))
        .collect();
    if upper.iter().any(u8::is_ascii_alphabetic) || class == PatternClass::Numeric {
        return upper;
    }
    LOWER_ALPHANUM
        .iter()
        .copied()
        .filter(|&b| class.contains(char::from(b)))
        .collect()
}

/// Generates a random BCAN matching `structure`.
pub fn gen_bcan(rng: &mut StdRng, structure: &Structure) -> String {
    let mut bcan = String::with_capacity(structure.bcan_length());
    for block in structure.blocks() {
        let chars = alphabet(block.class);
        for _ in 0..block.repeats {
            let idx = rng.gen_range(0..chars.len());
            bcan.push(char::from(chars[idx]));
        }
    }
    bcan
}

/// Generates a random valid full code for `spec`.
///
/// Returns `None` only if the generated BCAN is rejected, which indicates a
/// generator bug.
pub fn gen_code(rng: &mut StdRng, spec: &Specification) -> Option<String> {
    let bcan = gen_bcan(rng, spec.structure());
    spec.from_bcan(&bcan).ok()
}

/// Generates a batch of valid codes, rotating through the registered
/// countries in code order.
pub fn generate_codes(config: &GeneratorConfig) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let specs: Vec<&Specification> = countries()
        .iter()
        .filter(|spec| config.include_crypto || !spec.crypto().is_crypto())
        .collect();
    if specs.is_empty() {
        return Vec::new();
    }
    (0..config.count)
        .filter_map(|i| gen_code(&mut rng, specs[i % specs.len()]))
        .collect()
}

/// Returns `code` with its check digits replaced by a different pair.
///
/// The result always fails checksum validation. Codes shorter than four
/// characters are returned unchanged.
pub fn corrupt_check_digits(code: &str) -> String {
    let (Some(prefix), Some(digits), Some(rest)) = (code.get(..2), code.get(2..4), code.get(4..))
    else {
        return code.to_owned();
    };
    let current: u32 = digits.parse().unwrap_or(0);
    // A shift of 50 is never a multiple of 97.
    let replacement = (current + 50) % 100;
    format!("{prefix}{replacement:02}{rest}")
}
