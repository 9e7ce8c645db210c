//! # samegen: SAME/EAS Alert Audio Encoding
//!
//! This crate encodes
//! [Specific Area Message Encoding](https://en.wikipedia.org/wiki/Specific_Area_Message_Encoding)
//! (SAME) emergency alert messages into audio. Given a structured
//! [`Message`], it validates the fields against the SAME protocol
//! rules, frames the digital header and trailer bursts, modulates
//! them with audio frequency-shift keying, optionally appends an
//! attention tone, and renders the whole transmission to a
//! RIFF/WAVE file in memory.
//!
//! ## Disclaimer
//!
//! This crate is dual-licensed MIT and Apache 2.0. Read these
//! licenses carefully as they may affect your rights.
//!
//! Broadcasting SAME messages over the air can trigger emergency
//! alert equipment and may be **illegal** outside of a closed,
//! shielded test environment. You are responsible for how the audio
//! this crate produces is used.
//!
//! ## Example
//!
//! ```
//! use samegen::{
//!     AnyCounty, AttentionTone, EventCode, IssueTime, Message,
//!     Originator, PurgeTime, SameEncoderBuilder,
//! };
//!
//! let message = Message {
//!     originator: Originator::WeatherService,
//!     event: EventCode::RequiredWeeklyTest,
//!     areas: vec!["012345".parse().unwrap(), "036059".parse().unwrap()],
//!     purge: PurgeTime::new(0, 15),
//!     issue: IssueTime::new(32, 11, 15),
//!     sender: "KLOX/NWS".to_owned(),
//! };
//!
//! let encoder = SameEncoderBuilder::new()
//!     .with_header_repeats(3)                          // live transmissions use 3
//!     .with_attention_tone(Some(AttentionTone::TwoTone)) // 853 + 960 Hz EAS tone
//!     .with_trailer(true)                              // end with NNNN
//!     .build();
//!
//! // county tables are externally supplied; AnyCounty skips the
//! // county membership check
//! let out = encoder.encode(&message, AnyCounty).expect("message is valid");
//!
//! assert_eq!(b"RIFF", &out.audio[..4]);
//! println!("{}", out.header); // «×16 then ZCZC-WXR-RWT-012345-…
//! ```
//!
//! Messages which violate the protocol rules are rejected whole,
//! with every violation reported:
//!
//! ```
//! # use samegen::{
//! #     AnyCounty, EventCode, IssueTime, Message, Originator,
//! #     PurgeTime, SameEncoderBuilder,
//! # };
//! # let mut message = Message {
//! #     originator: Originator::WeatherService,
//! #     event: EventCode::RequiredWeeklyTest,
//! #     areas: vec!["036059".parse().unwrap()],
//! #     purge: PurgeTime::new(0, 15),
//! #     issue: IssueTime::new(32, 11, 15),
//! #     sender: "KLOX/NWS".to_owned(),
//! # };
//! message.purge = PurgeTime::new(0, 50); // not a 15-minute increment
//! message.sender = "lower".to_owned();   // lowercase is not permitted
//!
//! let encoder = SameEncoderBuilder::new().build();
//! let err = encoder.encode(&message, AnyCounty).unwrap_err();
//! assert_eq!(2, format!("{}", err).matches("message.").count());
//! ```
//!
//! ## Anatomy of a SAME transmission
//!
//! 1. The digital header burst, transmitted one to three times:
//!    sixteen `0xAB` preamble bytes, then an ASCII control string
//!    like
//!
//!    ```txt
//!    ZCZC-WXR-RWT-012345-567890-888990+0015-0321115-KLOX/NWS-
//!    ```
//!
//! 2. Optionally, an attention tone, to draw the listener's ear.
//!
//! 3. The voice message (not produced by this crate).
//!
//! 4. The digital trailer burst, the preamble followed by "`NNNN`",
//!    which ends the alert.
//!
//! Bursts are keyed at 520.83 baud with 2083.333 Hz mark and
//! 1562.5 Hz space tones, one second of silence after each
//! transmission.
//!
//! For the receiving side of this protocol, see
//! [`sameold`](https://docs.rs/sameold/latest/sameold/).
//!
//! ## Crate features
//!
//! * `chrono`: build [issuance times](IssueTime::from_datetime) from
//!   true UTC timestamps. If enabled, `chrono` becomes part of this
//!   crate's public API.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod encoder;
mod fips;
mod message;
mod riff;
mod samecodes;
mod synth;

pub mod framing;
pub mod validate;
pub mod waveform;

pub use builder::{AttentionTone, SameEncoderBuilder, DEFAULT_VOLUME};
pub use encoder::{EncodeError, EncodedMessage, SameEncoder};
pub use fips::{
    is_state_code, AnyCounty, AreaCode, CountyIndex, CountyTable, InvalidAreaCode, Subdivision,
};
pub use message::{InvalidIssueTime, IssueTime, Message, PurgeTime, MAX_AREAS, SENDER_LEN};
pub use samecodes::{EventCode, Originator, UnknownEventCode, UnknownOriginator};
pub use synth::{
    AudioParams, ParameterError, ParameterViolation, Tone, ToneSynthesizer, MAX_TONE_MIX,
    MAX_VOLUME,
};
pub use validate::{validate, ValidationError, Violation};
