//! Sine tone synthesis
//!
//! A [`ToneSynthesizer`] accumulates [`Tone`] events and renders
//! them, in order, into interleaved 16-bit little-endian PCM wrapped
//! in a RIFF/WAVE container. Tones may
//! mix several simultaneous frequencies; the mix is amplitude
//! normalized by the frequency count so it cannot clip.
//!
//! All numeric parameters are range-checked at the API boundary and
//! every violated constraint is reported in one aggregate
//! [`ParameterError`]. A failed call leaves the tone buffer
//! untouched.

use std::fmt;

use arrayvec::ArrayVec;
use log::trace;
use thiserror::Error;

use crate::riff;

/// Maximum number of simultaneous frequencies in one [`Tone`]
///
/// SAME itself mixes at most two (the EAS attention tone).
pub const MAX_TONE_MIX: usize = 4;

/// Maximum tone volume (positive full scale of an `i16` sample)
pub const MAX_VOLUME: u16 = i16::MAX as u16;

/// One violated numeric constraint
#[derive(Error, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ParameterViolation {
    /// Channel count of zero
    #[error("\"channels\" must be an integer > 0")]
    Channels,

    /// Sampling rate of zero
    #[error("\"sample_rate\" must be an integer > 0")]
    SampleRate,

    /// Bit depth of zero
    #[error("\"bits_per_sample\" must be an integer > 0")]
    BitsPerSample,

    /// Empty frequency mix
    #[error("at least one frequency is required")]
    NoFrequencies,

    /// More than [`MAX_TONE_MIX`] simultaneous frequencies
    #[error("at most {MAX_TONE_MIX} frequencies may be mixed (got {0})")]
    TooManyFrequencies(usize),

    /// A frequency which is negative, NaN, or infinite
    #[error("frequency must be a finite number >= 0 (got {0})")]
    Frequency(f64),

    /// A duration which is not a positive real
    #[error("length must be a real > 0 (got {0})")]
    Length(f64),

    /// A volume above [`MAX_VOLUME`]
    #[error("volume must be an integer 0 <= i <= {MAX_VOLUME} (got {0})")]
    Volume(u16),
}

/// Aggregate out-of-range parameter failure
///
/// Carries every [`ParameterViolation`] found in the call.
#[derive(Error, Clone, Debug, PartialEq)]
pub struct ParameterError {
    violations: Vec<ParameterViolation>,
}

impl ParameterError {
    /// Every violated constraint
    pub fn violations(&self) -> &[ParameterViolation] {
        &self.violations
    }

    fn check(violations: Vec<ParameterViolation>) -> Result<(), ParameterError> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ParameterError { violations })
        }
    }
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid parameters: ")?;
        for (n, violation) in self.violations.iter().enumerate() {
            if n > 0 {
                write!(f, "; ")?;
            }
            violation.fmt(f)?;
        }
        Ok(())
    }
}

/// Audio stream parameters
///
/// Immutable for the lifetime of a [`ToneSynthesizer`]. All fields
/// are checked nonzero at construction; an `AudioParams` in hand is
/// always renderable. Samples are always *rendered* at 16 bits;
/// `bits_per_sample` is written to the container header as given.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AudioParams {
    channels: u16,
    sample_rate: u32,
    bits_per_sample: u16,
}

impl AudioParams {
    /// Checked constructor
    ///
    /// Fails with one aggregate error naming every zero field.
    pub fn new(channels: u16, sample_rate: u32, bits_per_sample: u16) -> Result<Self, ParameterError> {
        let mut violations = Vec::new();
        if channels == 0 {
            violations.push(ParameterViolation::Channels);
        }
        if sample_rate == 0 {
            violations.push(ParameterViolation::SampleRate);
        }
        if bits_per_sample == 0 {
            violations.push(ParameterViolation::BitsPerSample);
        }
        ParameterError::check(violations)?;

        Ok(AudioParams {
            channels,
            sample_rate,
            bits_per_sample,
        })
    }

    /// Number of interleaved channels
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Samples per second, per channel
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Container bit depth
    pub fn bits_per_sample(&self) -> u16 {
        self.bits_per_sample
    }
}

impl Default for AudioParams {
    /// Stereo, 44100 Hz, 16-bit
    fn default() -> Self {
        AudioParams {
            channels: 2,
            sample_rate: 44100,
            bits_per_sample: 16,
        }
    }
}

/// One tone event: a frequency mix, a duration, and a volume
///
/// Produced by [`ToneSynthesizer::append`] and consumed by
/// rendering; a frequency of zero (at any volume) renders silence.
#[derive(Clone, Debug, PartialEq)]
pub struct Tone {
    freqs: ArrayVec<f64, MAX_TONE_MIX>,
    seconds: f64,
    volume: u16,
}

impl Tone {
    /// Simultaneous frequencies, in Hz
    pub fn frequencies(&self) -> &[f64] {
        &self.freqs
    }

    /// Duration, in seconds
    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Volume, 0 to [`MAX_VOLUME`]
    pub fn volume(&self) -> u16 {
        self.volume
    }
}

/// Accumulates tones and renders them to a RIFF/WAVE byte stream
///
/// ```
/// use samegen::{AudioParams, ToneSynthesizer};
///
/// let mut synth = ToneSynthesizer::new(AudioParams::default());
/// synth.append(1050.0, 10.0, 4096).unwrap();
/// synth.append_silence(1.0).unwrap();
/// let wav = synth.render();
/// assert_eq!(&wav[..4], b"RIFF");
/// ```
#[derive(Clone, Debug)]
pub struct ToneSynthesizer {
    params: AudioParams,
    tones: Vec<Tone>,
}

impl ToneSynthesizer {
    /// New synthesizer with an empty tone buffer
    pub fn new(params: AudioParams) -> Self {
        ToneSynthesizer {
            params,
            tones: Vec::new(),
        }
    }

    /// Audio parameters this synthesizer renders with
    pub fn params(&self) -> &AudioParams {
        &self.params
    }

    /// Number of buffered tones
    pub fn len(&self) -> usize {
        self.tones.len()
    }

    /// True if no tones are buffered
    pub fn is_empty(&self) -> bool {
        self.tones.is_empty()
    }

    /// Append a single-frequency tone
    pub fn append(&mut self, frequency: f64, seconds: f64, volume: u16) -> Result<(), ParameterError> {
        self.append_mix(&[frequency], seconds, volume)
    }

    /// Append `seconds` of silence
    pub fn append_silence(&mut self, seconds: f64) -> Result<(), ParameterError> {
        self.append_mix(&[0.0], seconds, 0)
    }

    /// Append a multi-frequency tone
    ///
    /// All frequencies play simultaneously for `seconds`, amplitude
    /// normalized by the mix size. Fails, without modifying the
    /// buffer, if any frequency is negative or non-finite, if
    /// `seconds` is not a positive real, or if `volume` exceeds
    /// [`MAX_VOLUME`]; the error names every violated constraint.
    pub fn append_mix(
        &mut self,
        frequencies: &[f64],
        seconds: f64,
        volume: u16,
    ) -> Result<(), ParameterError> {
        let mut violations = Vec::new();

        if frequencies.is_empty() {
            violations.push(ParameterViolation::NoFrequencies);
        } else if frequencies.len() > MAX_TONE_MIX {
            violations.push(ParameterViolation::TooManyFrequencies(frequencies.len()));
        }
        for &freq in frequencies.iter().take(MAX_TONE_MIX) {
            if !freq.is_finite() || freq < 0.0 {
                violations.push(ParameterViolation::Frequency(freq));
            }
        }
        if !seconds.is_finite() || seconds <= 0.0 {
            violations.push(ParameterViolation::Length(seconds));
        }
        if volume > MAX_VOLUME {
            violations.push(ParameterViolation::Volume(volume));
        }
        ParameterError::check(violations)?;

        self.tones.push(Tone {
            freqs: frequencies.iter().copied().collect(),
            seconds,
            volume,
        });
        Ok(())
    }

    /// Render every buffered tone, in order, into a complete
    /// RIFF/WAVE file
    pub fn render(&self) -> Vec<u8> {
        let mut sample_count: u64 = 0;
        let mut pcm = Vec::new();

        for tone in &self.tones {
            sample_count += self.render_tone(tone, &mut pcm);
        }

        trace!(
            "rendered {} tones, {} samples at {} Hz",
            self.tones.len(),
            sample_count,
            self.params.sample_rate
        );

        riff::render(&self.params, sample_count, &pcm)
    }

    // Render one tone as interleaved i16 LE samples appended to
    // `pcm`. Returns the number of samples written, counting each
    // channel.
    fn render_tone(&self, tone: &Tone, pcm: &mut Vec<u8>) -> u64 {
        let rate = self.params.sample_rate as f64;
        let frames = (rate * tone.seconds).floor() as u64;
        let mix = tone.freqs.len() as f64;

        pcm.reserve(frames as usize * self.params.channels as usize * 2);
        for i in 0..frames {
            let t = i as f64 / rate;
            let mut sample = 0.0f64;
            for &freq in &tone.freqs {
                sample += (std::f64::consts::TAU * t * freq).sin();
            }

            let value = (sample / mix * tone.volume as f64) as i16;
            for _ in 0..self.params.channels {
                pcm.extend_from_slice(&value.to_le_bytes());
            }
        }

        frames * self.params.channels as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use assert_approx_eq::assert_approx_eq;

    fn violations_of(err: ParameterError) -> Vec<ParameterViolation> {
        err.violations().to_vec()
    }

    #[test]
    fn test_params_checked() {
        assert!(AudioParams::new(2, 44100, 16).is_ok());

        let err = AudioParams::new(0, 0, 16).unwrap_err();
        assert_eq!(
            vec![ParameterViolation::Channels, ParameterViolation::SampleRate],
            violations_of(err)
        );

        let err = AudioParams::new(0, 0, 0).unwrap_err();
        assert_eq!(3, err.violations().len());
        assert!(format!("{}", err).starts_with("invalid parameters: "));
    }

    #[test]
    fn test_params_always_renderable() {
        // the checked constructor is the only public way to build
        // AudioParams, so a synthesizer never sees a zero field
        let err = AudioParams::new(0, 44100, 16).unwrap_err();
        assert_eq!(vec![ParameterViolation::Channels], violations_of(err));

        let params = AudioParams::new(1, 8000, 16).unwrap();
        assert_eq!(1, params.channels());
        assert_eq!(8000, params.sample_rate());
        assert_eq!(16, params.bits_per_sample());

        let wav = ToneSynthesizer::new(params).render();
        assert_ne!(0, u16::from_le_bytes([wav[22], wav[23]]));
    }

    #[test]
    fn test_append_rejects_and_leaves_buffer() {
        let mut synth = ToneSynthesizer::new(AudioParams::default());

        let err = synth.append(1050.0, 10.0, 40000).unwrap_err();
        assert_eq!(vec![ParameterViolation::Volume(40000)], violations_of(err));
        assert!(synth.is_empty());

        let err = synth.append(-1.0, 10.0, 4096).unwrap_err();
        assert_eq!(vec![ParameterViolation::Frequency(-1.0)], violations_of(err));
        assert!(synth.is_empty());

        let err = synth.append(1050.0, 0.0, 4096).unwrap_err();
        assert_eq!(vec![ParameterViolation::Length(0.0)], violations_of(err));

        let err = synth.append_mix(&[], 1.0, 0).unwrap_err();
        assert_eq!(vec![ParameterViolation::NoFrequencies], violations_of(err));

        let err = synth
            .append_mix(&[1.0, 2.0, 3.0, 4.0, 5.0], 1.0, 0)
            .unwrap_err();
        assert_eq!(
            vec![ParameterViolation::TooManyFrequencies(5)],
            violations_of(err)
        );

        // multiple violations aggregate into one error
        let err = synth.append(f64::NAN, -1.0, 40000).unwrap_err();
        assert_eq!(3, err.violations().len());

        assert!(synth.is_empty());
        synth.append(1050.0, 1.0, MAX_VOLUME).unwrap();
        assert_eq!(1, synth.len());
    }

    #[test]
    fn test_render_tone_sine() {
        let params = AudioParams::new(1, 8, 16).unwrap();
        let synth = ToneSynthesizer::new(params);

        // 2 Hz at 8 samples/s: sin(2π·i/4) = 0, 1, 0, -1, …
        let tone = Tone {
            freqs: [2.0].into_iter().collect(),
            seconds: 1.0,
            volume: 1000,
        };

        let mut pcm = Vec::new();
        let count = synth.render_tone(&tone, &mut pcm);
        assert_eq!(8, count);
        assert_eq!(16, pcm.len());

        let samples: Vec<i16> = pcm
            .chunks_exact(2)
            .map(|b| i16::from_le_bytes([b[0], b[1]]))
            .collect();
        for (i, &s) in samples.iter().enumerate() {
            let expect = (std::f64::consts::TAU * (i as f64 / 8.0) * 2.0).sin() * 1000.0;
            assert_approx_eq!(expect, s as f64, 1.0);
        }
    }

    #[test]
    fn test_render_mix_normalizes() {
        let params = AudioParams::new(1, 100, 16).unwrap();
        let synth = ToneSynthesizer::new(params);

        // two identical frequencies must render like one
        let single = Tone {
            freqs: [10.0].into_iter().collect(),
            seconds: 0.5,
            volume: 20000,
        };
        let double = Tone {
            freqs: [10.0, 10.0].into_iter().collect(),
            seconds: 0.5,
            volume: 20000,
        };

        let mut pcm_single = Vec::new();
        let mut pcm_double = Vec::new();
        assert_eq!(
            synth.render_tone(&single, &mut pcm_single),
            synth.render_tone(&double, &mut pcm_double)
        );
        assert_eq!(pcm_single, pcm_double);
    }

    #[test]
    fn test_fractional_durations_floor() {
        let synth = ToneSynthesizer::new(AudioParams::default());

        // 0.00192 s at 44100 Hz is 84.672 samples per channel
        let tone = Tone {
            freqs: [2083.333].into_iter().collect(),
            seconds: 0.00192,
            volume: 4096,
        };

        let mut pcm = Vec::new();
        let count = synth.render_tone(&tone, &mut pcm);
        assert_eq!(84 * 2, count);
        assert_eq!(84 * 2 * 2, pcm.len());
    }

    #[test]
    fn test_render_empty_buffer_is_header_only() {
        let synth = ToneSynthesizer::new(AudioParams::default());
        assert_eq!(44, synth.render().len());
    }

    #[test]
    fn test_silence_is_zero_samples() {
        let params = AudioParams::new(2, 10, 16).unwrap();
        let mut synth = ToneSynthesizer::new(params);
        synth.append_silence(1.0).unwrap();

        let wav = synth.render();
        assert_eq!(44 + 10 * 2 * 2, wav.len());
        assert!(wav[44..].iter().all(|&b| b == 0));
    }
}
