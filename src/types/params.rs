//! Colour derivation parameters.
//!
//! One `ColorParameters` record drives every cell of a render pass. The
//! record is immutable per derivation call; callers snapshot it once per
//! pass so payload capture and rendering observe the same values.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordpxError};

/// Parameter set for the word-to-colour hash.
///
/// Field names serialize in camelCase, matching the project record
/// embedded in exported images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorParameters {
    /// Scales the absolute hash before hue wrapping.
    pub hue_multiplier: f64,
    /// Constant added to the hue, in degrees.
    pub hue_offset: f64,
    /// Weight of the first character's code point in the hue.
    pub first_char_bias: f64,
    /// Weight of `sin(absHash)` in the hue.
    pub sine_influence: f64,
    /// Base saturation, percent (0-100).
    pub saturation_base: f64,
    /// Base lightness, percent (0-100).
    pub lightness_base: f64,
    /// Saturation contribution per character of word length.
    pub length_influence: f64,
    /// Left-shift applied per character in the hash recurrence (0-31).
    pub bit_shift_amount: u32,
    /// Modulus applied after hashing; disabled when < 2.
    pub prime_modulus: u32,
    /// XOR mask applied after hashing; disabled when 0.
    pub xor_mask: u32,
}

impl Default for ColorParameters {
    fn default() -> Self {
        Self {
            hue_multiplier: 1.0,
            hue_offset: 0.0,
            first_char_bias: 0.0,
            sine_influence: 0.0,
            saturation_base: 60.0,
            lightness_base: 40.0,
            length_influence: 0.0,
            bit_shift_amount: 5,
            prime_modulus: 0,
            xor_mask: 0,
        }
    }
}

impl ColorParameters {
    /// Validate the record at the configuration boundary.
    ///
    /// The derivation engine itself has no failure modes; anything that
    /// would make it misbehave (non-finite floats, an over-wide shift,
    /// out-of-range bases) is rejected here instead.
    pub fn validate(&self) -> Result<()> {
        let floats = [
            ("hueMultiplier", self.hue_multiplier),
            ("hueOffset", self.hue_offset),
            ("firstCharBias", self.first_char_bias),
            ("sineInfluence", self.sine_influence),
            ("saturationBase", self.saturation_base),
            ("lightnessBase", self.lightness_base),
            ("lengthInfluence", self.length_influence),
        ];
        for (name, value) in floats {
            if !value.is_finite() {
                return Err(invalid(format!("{} must be finite, got {}", name, value)));
            }
        }

        if self.bit_shift_amount > 31 {
            return Err(invalid(format!(
                "bitShiftAmount must be between 0 and 31, got {}",
                self.bit_shift_amount
            )));
        }
        if !(0.0..=100.0).contains(&self.saturation_base) {
            return Err(invalid(format!(
                "saturationBase must be between 0 and 100, got {}",
                self.saturation_base
            )));
        }
        if !(0.0..=100.0).contains(&self.lightness_base) {
            return Err(invalid(format!(
                "lightnessBase must be between 0 and 100, got {}",
                self.lightness_base
            )));
        }

        Ok(())
    }
}

fn invalid(message: String) -> WordpxError {
    WordpxError::InvalidParameter {
        message,
        help: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        ColorParameters::default().validate().unwrap();
    }

    #[test]
    fn test_shift_out_of_range() {
        let params = ColorParameters {
            bit_shift_amount: 32,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        let params = ColorParameters {
            hue_multiplier: f64::NAN,
            ..Default::default()
        };
        assert!(params.validate().is_err());

        let params = ColorParameters {
            sine_influence: f64::INFINITY,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_base_range_rejected() {
        let params = ColorParameters {
            saturation_base: 101.0,
            ..Default::default()
        };
        assert!(params.validate().is_err());

        let params = ColorParameters {
            lightness_base: -1.0,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_serde_camel_case() {
        let json = serde_json::to_value(ColorParameters::default()).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "hueMultiplier",
            "hueOffset",
            "firstCharBias",
            "sineInfluence",
            "saturationBase",
            "lightnessBase",
            "lengthInfluence",
            "bitShiftAmount",
            "primeModulus",
            "xorMask",
        ] {
            assert!(obj.contains_key(key), "missing key {}", key);
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let params = ColorParameters {
            hue_multiplier: 2.5,
            hue_offset: 180.0,
            xor_mask: 0xDEAD,
            ..Default::default()
        };
        let json = serde_json::to_string(&params).unwrap();
        let back: ColorParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
