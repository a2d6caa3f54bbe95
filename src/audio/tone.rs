//! Victory tone synthesis.
//!
//! A sine wave shaped by a linear envelope: silence at the start, full gain
//! after the fade-in, then a straight ramp back to silence at the end.

use crate::error::ConfigError;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;
use tracing::{debug, instrument};

/// Highest sample rate a tone may be rendered at.
pub const MAX_SAMPLE_RATE: u32 = 192_000;

/// Longest tone, in milliseconds.
pub const MAX_DURATION_MS: u32 = 10_000;

/// Parameters of the victory tone.
#[derive(Debug, Clone, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct ToneSpec {
    /// Pitch of the sine wave.
    frequency_hz: f32,
    /// Total length of the tone.
    duration_ms: u32,
    /// Length of the initial ramp from silence to full gain.
    fade_in_ms: u32,
    /// Samples per second of rendered audio.
    sample_rate: u32,
    /// Peak gain, 0.0-1.0.
    amplitude: f32,
}

impl Default for ToneSpec {
    /// 440 Hz for half a second, 10 ms fade-in, CD sample rate.
    fn default() -> Self {
        Self {
            frequency_hz: 440.0,
            duration_ms: 500,
            fade_in_ms: 10,
            sample_rate: 44_100,
            amplitude: 1.0,
        }
    }
}

impl ToneSpec {
    /// Rejects tones that cannot be rendered.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.frequency_hz > 0.0) {
            return Err(ConfigError::new(format!(
                "tone frequency must be positive, got {}",
                self.frequency_hz
            )));
        }
        if self.duration_ms == 0 || self.sample_rate == 0 {
            return Err(ConfigError::new("tone duration and sample rate must be non-zero"));
        }
        if self.sample_rate > MAX_SAMPLE_RATE {
            return Err(ConfigError::new(format!(
                "sample rate of {} Hz exceeds the {} Hz limit",
                self.sample_rate, MAX_SAMPLE_RATE
            )));
        }
        if self.duration_ms > MAX_DURATION_MS {
            return Err(ConfigError::new(format!(
                "tone duration of {} ms exceeds the {} ms limit",
                self.duration_ms, MAX_DURATION_MS
            )));
        }
        if self.fade_in_ms > self.duration_ms {
            return Err(ConfigError::new(format!(
                "fade-in of {} ms exceeds tone duration of {} ms",
                self.fade_in_ms, self.duration_ms
            )));
        }
        if !(0.0..=1.0).contains(&self.amplitude) {
            return Err(ConfigError::new(format!(
                "tone amplitude must be within 0.0-1.0, got {}",
                self.amplitude
            )));
        }
        Ok(())
    }

    /// Number of samples in the rendered tone.
    pub fn sample_count(&self) -> usize {
        (u64::from(self.duration_ms) * u64::from(self.sample_rate) / 1000) as usize
    }

    /// Envelope gain at `t` seconds from the start.
    pub fn gain_at(&self, t: f32) -> f32 {
        let duration = self.duration_ms as f32 / 1000.0;
        let fade_in = self.fade_in_ms as f32 / 1000.0;

        if t <= 0.0 || t >= duration {
            0.0
        } else if t < fade_in {
            t / fade_in
        } else {
            (duration - t) / (duration - fade_in)
        }
    }

    /// Renders the tone as mono samples in -1.0..=1.0.
    #[instrument(skip(self), fields(frequency_hz = self.frequency_hz, duration_ms = self.duration_ms))]
    pub fn samples(&self) -> Vec<f32> {
        let rate = self.sample_rate as f32;
        let samples: Vec<f32> = (0..self.sample_count())
            .map(|i| {
                let t = i as f32 / rate;
                self.amplitude * self.gain_at(t) * (TAU * self.frequency_hz * t).sin()
            })
            .collect();
        debug!(count = samples.len(), "Rendered tone");
        samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tone() {
        let tone = ToneSpec::default();
        assert_eq!(*tone.frequency_hz(), 440.0);
        assert_eq!(*tone.duration_ms(), 500);
        assert_eq!(*tone.fade_in_ms(), 10);
        assert_eq!(tone.sample_count(), 22_050);
        assert!(tone.validate().is_ok());
    }

    #[test]
    fn test_envelope_shape() {
        let tone = ToneSpec::default();
        assert_eq!(tone.gain_at(0.0), 0.0);
        assert!((tone.gain_at(0.005) - 0.5).abs() < 1e-4);
        assert!((tone.gain_at(0.01) - 1.0).abs() < 1e-4);
        assert!((tone.gain_at(0.255) - 0.5).abs() < 1e-4);
        assert_eq!(tone.gain_at(0.5), 0.0);
        assert_eq!(tone.gain_at(0.75), 0.0);
    }

    #[test]
    fn test_samples_stay_within_amplitude() {
        let tone = ToneSpec::default().with_amplitude(0.25);
        let samples = tone.samples();
        assert_eq!(samples.len(), tone.sample_count());
        assert_eq!(samples[0], 0.0);
        assert!(samples.iter().all(|s| s.abs() <= 0.25 + 1e-6));
        assert!(samples.iter().any(|s| s.abs() > 0.2));
    }

    #[test]
    fn test_fade_in_without_fade_out() {
        let tone = ToneSpec::default().with_duration_ms(10);
        assert!(tone.validate().is_ok());
        assert!((tone.gain_at(0.005) - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_validate_rejects_bad_tones() {
        assert!(ToneSpec::default().with_frequency_hz(0.0).validate().is_err());
        assert!(ToneSpec::default().with_frequency_hz(f32::NAN).validate().is_err());
        assert!(ToneSpec::default().with_sample_rate(0).validate().is_err());
        assert!(ToneSpec::default().with_fade_in_ms(600).validate().is_err());
        assert!(ToneSpec::default().with_amplitude(1.5).validate().is_err());
    }

    #[test]
    fn test_validate_bounds_sample_rate_and_duration() {
        assert!(ToneSpec::default().with_sample_rate(MAX_SAMPLE_RATE).validate().is_ok());

        let err = ToneSpec::default().with_sample_rate(3_000_000_000).validate().unwrap_err();
        assert!(err.message.contains("sample rate"));

        assert!(ToneSpec::default().with_duration_ms(MAX_DURATION_MS + 1).validate().is_err());
    }
}
