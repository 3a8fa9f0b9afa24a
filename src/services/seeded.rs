//! Seeded pseudo-randomness for reproducible predictions.
//!
//! The scoring engine jitters each prediction with a small offset derived
//! from the temple id, date, and slot label, so the same inputs always show
//! the same crowd level. The hash and sine-fraction formulas are a wire-level
//! compatibility contract with the rest of the system: the hosted backend and
//! the frontend both expect the levels these exact formulas produce. Do not
//! substitute a general-purpose RNG here.

/// 32-bit string hash, `hash = ((hash << 5) - hash) + char` per character.
///
/// Arithmetic wraps at 32 bits each step; the final value is the absolute
/// value of the signed result.
pub fn hash_string(s: &str) -> u32 {
    let mut hash: i32 = 0;
    for ch in s.chars() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(ch as i32);
    }
    hash.unsigned_abs()
}

/// Sine-based pseudo-random value in `[0, 1)` for a given seed.
///
/// `x = sin(seed) * 10000`, result is the fractional part of `x`. Sensitive
/// to the platform's `f64::sin` in the low bits; IEEE-754 double precision is
/// assumed.
pub fn seeded_random(seed: u32) -> f64 {
    let x = f64::from(seed).sin() * 10000.0;
    x - x.floor()
}

/// Integer jitter in `[-5, 5]` for a prediction seed string.
pub fn seeded_offset(seed_str: &str) -> i32 {
    let seed = hash_string(seed_str);
    (seeded_random(seed) * 11.0).floor() as i32 - 5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_empty() {
        assert_eq!(hash_string(""), 0);
    }

    #[test]
    fn test_hash_single_char() {
        assert_eq!(hash_string("a"), 97);
    }

    #[test]
    fn test_hash_known_values() {
        // Pinned so a change to the wrapping arithmetic shows up immediately.
        assert_eq!(hash_string("mahakaleshwar"), 574_462_569);
        assert_eq!(hash_string("2025-03-08"), 274_221_638);
        assert_eq!(
            hash_string("mahakaleshwar-2025-03-08-Morning (6-10 AM)"),
            998_620_366
        );
    }

    #[test]
    fn test_hash_deterministic() {
        let a = hash_string("khajrana-2025-03-05-Night (8 PM onwards)");
        let b = hash_string("khajrana-2025-03-05-Night (8 PM onwards)");
        assert_eq!(a, b);
    }

    #[test]
    fn test_seeded_random_unit_interval() {
        for seed in [0, 1, 42, 998_620_366, u32::MAX] {
            let r = seeded_random(seed);
            assert!((0.0..1.0).contains(&r), "seed {} gave {}", seed, r);
        }
    }

    #[test]
    fn test_seeded_random_deterministic() {
        assert_eq!(seeded_random(12345), seeded_random(12345));
    }

    #[test]
    fn test_seeded_offset_range() {
        for s in ["a", "b", "c", "mahakaleshwar-2025-03-08-Morning (6-10 AM)"] {
            let off = seeded_offset(s);
            assert!((-5..=5).contains(&off), "{} gave {}", s, off);
        }
    }

    #[test]
    fn test_seeded_offset_pinned() {
        assert_eq!(
            seeded_offset("mahakaleshwar-2025-03-08-Morning (6-10 AM)"),
            3
        );
        assert_eq!(
            seeded_offset("mahakaleshwar-2025-03-08-Night (8 PM onwards)"),
            -4
        );
    }
}
