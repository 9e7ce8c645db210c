//! Builder for the SAME encoder

use crate::encoder::SameEncoder;
use crate::synth::{AudioParams, MAX_VOLUME};
use crate::waveform::MAX_BURST_REPEATS;

/// Default tone volume
///
/// Loud enough for reliable decoding with ample headroom below full
/// scale.
pub const DEFAULT_VOLUME: u16 = 4096;

/// Attention tone appended after the header bursts
///
/// Parses from "`nws`" and "`eas`" for command-line use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum_macros::EnumString, strum_macros::EnumIter)]
pub enum AttentionTone {
    /// The single 1050 Hz tone used on NOAA Weather Radio
    #[strum(serialize = "nws")]
    WeatherRadio,

    /// The 853 Hz + 960 Hz two-tone EAS signal
    #[strum(serialize = "eas")]
    TwoTone,
}

/// Builds a SAME/EAS encoder
///
/// The builder comes with a sensible set of defaults: a complete
/// transmission of three header bursts and a trailing end-of-message
/// burst, no attention tone, rendered as 16-bit stereo at 44100 Hz.
///
/// ```
/// use samegen::{AttentionTone, SameEncoderBuilder};
///
/// let encoder = SameEncoderBuilder::new()
///     .with_header_repeats(3)
///     .with_attention_tone(Some(AttentionTone::TwoTone))
///     .with_trailer(true)
///     .build();
/// # let _ = encoder;
/// ```
///
/// The builder API is part of this crate's API; the default *values*
/// are not, and may be revised in any minor release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SameEncoderBuilder {
    audio: AudioParams,
    volume: u16,
    header_repeats: u8,
    attention: Option<AttentionTone>,
    trailer: bool,
}

impl SameEncoderBuilder {
    /// New encoder builder with default options
    pub fn new() -> Self {
        Self {
            audio: AudioParams::default(),
            volume: DEFAULT_VOLUME,
            header_repeats: MAX_BURST_REPEATS,
            attention: None,
            trailer: true,
        }
    }

    /// Build the encoder
    pub fn build(&self) -> SameEncoder {
        SameEncoder::from(self)
    }

    /// Rendered audio stream parameters
    pub fn with_audio_params(&mut self, audio: AudioParams) -> &mut Self {
        self.audio = audio;
        self
    }

    /// Tone volume, clamped to
    /// [`MAX_VOLUME`](crate::synth::MAX_VOLUME)
    pub fn with_volume(&mut self, volume: u16) -> &mut Self {
        self.volume = volume.min(MAX_VOLUME);
        self
    }

    /// Times the header burst is transmitted, clamped to `1..=3`
    ///
    /// Live transmissions repeat the header three times.
    pub fn with_header_repeats(&mut self, repeats: u8) -> &mut Self {
        self.header_repeats = repeats.clamp(1, MAX_BURST_REPEATS);
        self
    }

    /// Attention tone appended after the header bursts, if any
    pub fn with_attention_tone(&mut self, attention: Option<AttentionTone>) -> &mut Self {
        self.attention = attention;
        self
    }

    /// Whether to append the end-of-message trailer bursts
    pub fn with_trailer(&mut self, trailer: bool) -> &mut Self {
        self.trailer = trailer;
        self
    }

    pub(crate) fn audio(&self) -> AudioParams {
        self.audio
    }

    pub(crate) fn volume(&self) -> u16 {
        self.volume
    }

    pub(crate) fn header_repeats(&self) -> u8 {
        self.header_repeats
    }

    pub(crate) fn attention(&self) -> Option<AttentionTone> {
        self.attention
    }

    pub(crate) fn trailer(&self) -> bool {
        self.trailer
    }
}

impl Default for SameEncoderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    #[test]
    fn test_setters_clamp() {
        let mut builder = SameEncoderBuilder::new();

        builder.with_header_repeats(0);
        assert_eq!(1, builder.header_repeats());

        builder.with_header_repeats(200);
        assert_eq!(3, builder.header_repeats());

        builder.with_volume(u16::MAX);
        assert_eq!(MAX_VOLUME, builder.volume());
    }

    #[test]
    fn test_attention_from_str() {
        assert_eq!(
            Ok(AttentionTone::WeatherRadio),
            AttentionTone::from_str("nws")
        );
        assert_eq!(Ok(AttentionTone::TwoTone), AttentionTone::from_str("eas"));
        assert!(AttentionTone::from_str("beep").is_err());
    }
}
