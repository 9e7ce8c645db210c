//! The encoding pipeline orchestrator

use log::{debug, info};
use thiserror::Error;

use crate::builder::{AttentionTone, SameEncoderBuilder};
use crate::fips::CountyIndex;
use crate::framing;
use crate::message::Message;
use crate::synth::{AudioParams, ParameterError, ToneSynthesizer};
use crate::validate::{validate, ValidationError};
use crate::waveform;

/// A fully rendered SAME transmission
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedMessage {
    /// Complete RIFF/WAVE file contents
    pub audio: Vec<u8>,

    /// The header burst as printable text, for display and logging
    pub header: String,
}

/// Failure to encode a message
///
/// Encoding is atomic: on any error, no audio is produced.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum EncodeError {
    /// The message violates SAME field rules
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An encoder option is out of range
    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

/// Encodes SAME/EAS messages into audio
///
/// Created via [`SameEncoderBuilder`]. The encoder is stateless
/// between calls: every [`encode`](SameEncoder::encode) renders into
/// a fresh tone buffer, and identical inputs produce byte-identical
/// output.
///
/// ```
/// use samegen::{
///     AnyCounty, EventCode, IssueTime, Message, Originator,
///     PurgeTime, SameEncoderBuilder,
/// };
///
/// let message = Message {
///     originator: Originator::WeatherService,
///     event: EventCode::RequiredWeeklyTest,
///     areas: vec!["036059".parse().unwrap()],
///     purge: PurgeTime::new(0, 30),
///     issue: IssueTime::new(32, 11, 15),
///     sender: "KLOX/NWS".to_owned(),
/// };
///
/// let encoder = SameEncoderBuilder::new().build();
/// let out = encoder.encode(&message, AnyCounty).expect("valid message");
/// assert_eq!(b"RIFF", &out.audio[..4]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SameEncoder {
    audio: AudioParams,
    volume: u16,
    header_repeats: u8,
    attention: Option<AttentionTone>,
    trailer: bool,
}

impl SameEncoder {
    /// Builder with default options
    pub fn builder() -> SameEncoderBuilder {
        SameEncoderBuilder::new()
    }

    /// Encode a message into a complete SAME transmission
    ///
    /// Validates `message` (county membership comes from
    /// `counties`), frames and modulates the header bursts, appends
    /// the attention tone and trailer bursts if configured, and
    /// renders the whole transmission to a RIFF/WAVE file. The
    /// input message is not modified; the emitted sender identifier
    /// is the space-padded normalized form.
    ///
    /// Fails atomically: an invalid message produces an error
    /// listing every violated rule and no audio.
    pub fn encode<C: CountyIndex>(
        &self,
        message: &Message,
        counties: C,
    ) -> Result<EncodedMessage, EncodeError> {
        let message = validate(message, counties)?;
        let burst = framing::header(&message);
        debug!("encoding header: {}", burst.text());

        let mut synth = ToneSynthesizer::new(self.audio);
        waveform::modulate_into(&mut synth, burst.bytes(), self.volume, self.header_repeats)?;

        if let Some(attention) = self.attention {
            match attention {
                AttentionTone::WeatherRadio => synth.append(
                    waveform::ATTENTION_NWS_HZ,
                    waveform::ATTENTION_SECONDS,
                    self.volume,
                )?,
                AttentionTone::TwoTone => synth.append_mix(
                    &waveform::ATTENTION_EAS_HZ,
                    waveform::ATTENTION_SECONDS,
                    self.volume,
                )?,
            }
            synth.append_silence(waveform::BURST_GAP_SECONDS)?;
        }

        if self.trailer {
            let eom = framing::end_of_message();
            waveform::modulate_into(&mut synth, eom.bytes(), self.volume, self.header_repeats)?;
        }

        let audio = synth.render();
        info!(
            "encoded {} ({} bytes of audio)",
            message.event,
            audio.len()
        );

        Ok(EncodedMessage {
            audio,
            header: burst.text().to_owned(),
        })
    }

    /// Encode a standalone end-of-message transmission
    ///
    /// Some stations transmit a bare trailer to end a long-running
    /// alert. The trailer needs no message and always validates;
    /// the configured repeat count applies.
    pub fn encode_end_of_message(&self) -> Result<EncodedMessage, EncodeError> {
        let burst = framing::end_of_message();

        let mut synth = ToneSynthesizer::new(self.audio);
        waveform::modulate_into(&mut synth, burst.bytes(), self.volume, self.header_repeats)?;

        Ok(EncodedMessage {
            audio: synth.render(),
            header: burst.text().to_owned(),
        })
    }
}

impl From<&SameEncoderBuilder> for SameEncoder {
    fn from(builder: &SameEncoderBuilder) -> Self {
        SameEncoder {
            audio: builder.audio(),
            volume: builder.volume(),
            header_repeats: builder.header_repeats(),
            attention: builder.attention(),
            trailer: builder.trailer(),
        }
    }
}
