//! Per-call generation options and their accepted ranges.

use std::ops::RangeInclusive;

use super::language::Language;
use crate::error::AssistantError;

pub const TEMPERATURE_RANGE: RangeInclusive<f32> = 0.0..=1.0;
pub const MAX_TOKENS_RANGE: RangeInclusive<u32> = 50..=500;

pub const DEFAULT_TEMPERATURE: f32 = 0.5;
pub const DEFAULT_MAX_TOKENS: u32 = 200;

/// Sampling settings and target language for one generation.
///
/// Values are always inside [`TEMPERATURE_RANGE`] and [`MAX_TOKENS_RANGE`];
/// both constructors enforce this, one by rejecting and one by clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    temperature: f32,
    max_tokens: u32,
    language: Language,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            language: Language::default(),
        }
    }
}

impl GenerationOptions {
    /// Builds options, rejecting any out-of-range value.
    pub fn new(temperature: f32, max_tokens: u32, language: Language) -> Result<Self, AssistantError> {
        Ok(Self {
            temperature: check_temperature(temperature)?,
            max_tokens: check_max_tokens(max_tokens)?,
            language,
        })
    }

    /// Builds options, pulling out-of-range values to the nearest bound.
    ///
    /// A NaN temperature falls back to the default.
    pub fn clamped(temperature: f32, max_tokens: u32, language: Language) -> Self {
        Self {
            temperature: clamp_temperature(temperature),
            max_tokens: clamp_max_tokens(max_tokens),
            language,
        }
    }

    pub const fn temperature(&self) -> f32 {
        self.temperature
    }

    pub const fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub const fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn with_temperature(self, temperature: f32) -> Self {
        Self {
            temperature: clamp_temperature(temperature),
            ..self
        }
    }

    #[must_use]
    pub fn with_max_tokens(self, max_tokens: u32) -> Self {
        Self {
            max_tokens: clamp_max_tokens(max_tokens),
            ..self
        }
    }

    #[must_use]
    pub const fn with_language(self, language: Language) -> Self {
        Self { language, ..self }
    }
}

fn check_temperature(value: f32) -> Result<f32, AssistantError> {
    if TEMPERATURE_RANGE.contains(&value) {
        Ok(value)
    } else {
        Err(AssistantError::InvalidOption {
            name: "temperature",
            value: value.to_string(),
            min: TEMPERATURE_RANGE.start().to_string(),
            max: TEMPERATURE_RANGE.end().to_string(),
        })
    }
}

fn check_max_tokens(value: u32) -> Result<u32, AssistantError> {
    if MAX_TOKENS_RANGE.contains(&value) {
        Ok(value)
    } else {
        Err(AssistantError::InvalidOption {
            name: "max_tokens",
            value: value.to_string(),
            min: MAX_TOKENS_RANGE.start().to_string(),
            max: MAX_TOKENS_RANGE.end().to_string(),
        })
    }
}

fn clamp_temperature(value: f32) -> f32 {
    if value.is_nan() {
        DEFAULT_TEMPERATURE
    } else {
        value.clamp(*TEMPERATURE_RANGE.start(), *TEMPERATURE_RANGE.end())
    }
}

fn clamp_max_tokens(value: u32) -> u32 {
    value.clamp(*MAX_TOKENS_RANGE.start(), *MAX_TOKENS_RANGE.end())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = GenerationOptions::default();
        assert_eq!(options.temperature(), 0.5);
        assert_eq!(options.max_tokens(), 200);
        assert_eq!(options.language(), Language::English);
    }

    #[test]
    fn test_new_accepts_bounds() {
        assert!(GenerationOptions::new(0.0, 50, Language::Thai).is_ok());
        assert!(GenerationOptions::new(1.0, 500, Language::Thai).is_ok());
    }

    #[test]
    fn test_new_rejects_out_of_range_temperature() {
        for value in [-0.1, 1.01, f32::NAN, f32::INFINITY] {
            let err = GenerationOptions::new(value, 200, Language::English).unwrap_err();
            assert!(matches!(
                err,
                AssistantError::InvalidOption {
                    name: "temperature",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_new_rejects_out_of_range_max_tokens() {
        for value in [0, 49, 501, u32::MAX] {
            let err = GenerationOptions::new(0.5, value, Language::English).unwrap_err();
            assert!(matches!(
                err,
                AssistantError::InvalidOption {
                    name: "max_tokens",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_clamped_pulls_values_into_range() {
        let options = GenerationOptions::clamped(3.5, 10, Language::Hindi);
        assert_eq!(options.temperature(), 1.0);
        assert_eq!(options.max_tokens(), 50);

        let options = GenerationOptions::clamped(-1.0, 10_000, Language::Hindi);
        assert_eq!(options.temperature(), 0.0);
        assert_eq!(options.max_tokens(), 500);
        assert_eq!(options.language(), Language::Hindi);
    }

    #[test]
    fn test_clamped_nan_falls_back_to_default() {
        let options = GenerationOptions::clamped(f32::NAN, 200, Language::English);
        assert_eq!(options.temperature(), DEFAULT_TEMPERATURE);
    }

    #[test]
    fn test_with_setters_clamp() {
        let options = GenerationOptions::default()
            .with_temperature(2.0)
            .with_max_tokens(1)
            .with_language(Language::Spanish);
        assert_eq!(options.temperature(), 1.0);
        assert_eq!(options.max_tokens(), 50);
        assert_eq!(options.language(), Language::Spanish);
    }
}
