//! SAME digital header and trailer framing
//!
//! Converts a validated [`Message`] into the byte burst that gets
//! modulated: sixteen preamble bytes for receiver bit
//! synchronization, then the ASCII control string. A header burst
//! looks like
//!
//! ```txt
//! «×16 ZCZC-WXR-RWT-012345-567890-888990+0015-0321115-KLOX/NWS-
//! ```
//!
//! and the end-of-message burst is the preamble followed by
//! "`NNNN`".

use std::fmt::Write;

use crate::message::Message;

/// Preamble byte
///
/// Repeated [`PREAMBLE_LEN`] times before every burst. It has many
/// bit transitions so that receivers can acquire bit and byte sync
/// quickly.
pub const PREAMBLE: u8 = 0xab;

/// Number of preamble bytes before each burst
pub const PREAMBLE_LEN: usize = 16;

/// Start-of-header marker
pub const HEADER_PREFIX: &str = "ZCZC";

/// End-of-message marker
pub const EOM: &str = "NNNN";

/// One framed SAME burst, ready for modulation
///
/// Holds both the raw bytes put on the air and the same content as
/// text for display and logging. The text renders the preamble
/// bytes as `U+00AB` characters, so `text().len()` in bytes differs
/// from the on-air length; use [`bytes`](Burst::bytes) for anything
/// that feeds the modulator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Burst {
    bytes: Vec<u8>,
    text: String,
}

impl Burst {
    /// The on-air byte sequence
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The burst as printable text, preamble included
    pub fn text(&self) -> &str {
        &self.text
    }

    // preamble + ASCII body
    fn from_body(body: String) -> Self {
        debug_assert!(body.is_ascii());

        let mut bytes = vec![PREAMBLE; PREAMBLE_LEN];
        bytes.extend_from_slice(body.as_bytes());

        let mut text = String::with_capacity(2 * PREAMBLE_LEN + body.len());
        for _ in 0..PREAMBLE_LEN {
            text.push(PREAMBLE as char);
        }
        text.push_str(&body);

        Burst { bytes, text }
    }
}

/// Frame a message header burst
///
/// `message` must already be validated: fields are emitted without
/// further checking, and an out-of-range field produces a
/// protocol-invalid burst. Areas appear in the order given, joined
/// with "`-`"; the purge time, issuance time, and sender follow the
/// fixed `+HHMM-DDDHHMM-SSSSSSSS-` layout.
pub fn header(message: &Message) -> Burst {
    let mut body = String::with_capacity(64);

    write!(
        body,
        "{}-{}-{}-",
        HEADER_PREFIX,
        message.originator.as_str(),
        message.event.as_str()
    )
    .expect("infallible write");

    for (n, area) in message.areas.iter().enumerate() {
        if n > 0 {
            body.push('-');
        }
        write!(body, "{}", area).expect("infallible write");
    }

    write!(
        body,
        "+{}-{}-{}-",
        message.purge, message.issue, message.sender
    )
    .expect("infallible write");

    Burst::from_body(body)
}

/// Frame an end-of-message (trailer) burst
pub fn end_of_message() -> Burst {
    Burst::from_body(EOM.to_owned())
}
