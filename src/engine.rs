//! Word-to-colour derivation.
//!
//! Maps `(word, seed, parameters)` to an HSL colour through a 32-bit
//! hash. The recurrence wraps in two's complement at every step; the
//! wraparound is part of the contract, since a widened or saturating
//! accumulator produces different colours for the same inputs and breaks
//! the round-trip guarantee of embedded projects.

use crate::types::{Colour, ColorParameters};

/// Result of one derivation: the HSL triple plus the raw hash behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedColor {
    /// Hue in degrees, in `[0, 360)`.
    pub hue: f64,
    /// Saturation percent, in `[0, 100]`.
    pub saturation: f64,
    /// Lightness percent, in `[0, 100]`.
    pub lightness: f64,
    /// The signed 32-bit hash the triple was derived from.
    pub hash: i32,
}

impl DerivedColor {
    /// Convert to an opaque RGBA colour.
    pub fn colour(&self) -> Colour {
        Colour::from_hsl(self.hue, self.saturation, self.lightness)
    }
}

/// Derive the colour for one word.
///
/// Pure and deterministic: identical inputs always yield a bit-identical
/// triple. An empty word has no colour (`None`); cells reserved for
/// missing entries are filled by the caller, not derived.
///
/// `params` must already be validated at the boundary; see
/// [`ColorParameters::validate`].
pub fn derive(word: &str, seed: i32, params: &ColorParameters) -> Option<DerivedColor> {
    if word.is_empty() {
        return None;
    }

    let hash = hash_word(word, seed, params);
    // unsigned_abs keeps i32::MIN meaningful (maps to 2^31).
    let abs = hash.unsigned_abs();

    let mut hue = f64::from(abs) * params.hue_multiplier + params.hue_offset;
    if params.first_char_bias != 0.0 {
        if let Some(first) = word.chars().next() {
            hue += f64::from(first as u32) * params.first_char_bias;
        }
    }
    if params.sine_influence != 0.0 {
        hue += f64::from(abs).sin() * params.sine_influence;
    }
    let hue = hue.rem_euclid(360.0);

    let len = word.chars().count() as f64;
    let sat_jitter = f64::from((abs >> 8) % 20) - 10.0;
    let saturation =
        (params.saturation_base + len * params.length_influence + sat_jitter).clamp(0.0, 100.0);

    let light_jitter = f64::from((abs >> 16) % 20) - 10.0;
    let lightness = (params.lightness_base + light_jitter).clamp(0.0, 100.0);

    Some(DerivedColor {
        hue,
        saturation,
        lightness,
        hash,
    })
}

/// The raw hash recurrence, wrapping at 32 bits on every step.
fn hash_word(word: &str, seed: i32, params: &ColorParameters) -> i32 {
    let mut acc: i32 = 0;
    for ch in word.chars() {
        acc = acc
            .wrapping_shl(params.bit_shift_amount)
            .wrapping_sub(acc)
            .wrapping_add(ch as i32)
            .wrapping_add(seed);
    }

    if params.xor_mask > 0 {
        acc ^= params.xor_mask as i32;
    }
    if params.prime_modulus > 1 {
        // Truncated remainder, sign follows the accumulator. Done in i64
        // so a modulus above i32::MAX behaves like the source's number
        // semantics.
        acc = (i64::from(acc) % i64::from(params.prime_modulus)) as i32;
    }

    acc
}
