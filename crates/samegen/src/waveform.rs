//! AFSK waveform parameters and modulation
//!
//! SAME bursts are audio frequency-shift keyed at 520.83 baud: each
//! bit is one [`BIT_SECONDS`]-long tone at [`MARK_HZ`] (one) or
//! [`SPACE_HZ`] (zero), least-significant bit first. A one second
//! gap of silence follows every transmission of a burst.
//!
//! Also defined here are the attention tones which may follow the
//! header: the single-frequency NWS tone and the two-tone EAS
//! signal.

use log::debug;

use crate::synth::{ParameterError, ToneSynthesizer};

/// Mark (bit one) frequency, Hz
pub const MARK_HZ: f64 = 2083.333;

/// Space (bit zero) frequency, Hz
pub const SPACE_HZ: f64 = 1562.5;

/// Duration of one bit, seconds (520.83 baud)
pub const BIT_SECONDS: f64 = 0.00192;

/// Silence between burst repeats, seconds
pub const BURST_GAP_SECONDS: f64 = 1.0;

/// NWS attention tone frequency, Hz
pub const ATTENTION_NWS_HZ: f64 = 1050.0;

/// EAS two-tone attention signal frequencies, Hz
pub const ATTENTION_EAS_HZ: [f64; 2] = [853.0, 960.0];

/// Attention tone duration, seconds
pub const ATTENTION_SECONDS: f64 = 10.0;

/// Most times a burst may be repeated
pub const MAX_BURST_REPEATS: u8 = 3;

/// Modulate a byte burst into `synth`
///
/// Appends, for each of `repeats` transmissions, one bit tone per
/// bit of every byte (LSB first) followed by
/// [`BURST_GAP_SECONDS`] of silence. `repeats` is clamped to
/// `1..=`[`MAX_BURST_REPEATS`]. Tone order is significant and fully
/// deterministic.
///
/// The only way this fails is `volume` above
/// [`MAX_VOLUME`](crate::synth::MAX_VOLUME); nothing is appended in
/// that case.
pub fn modulate_into(
    synth: &mut ToneSynthesizer,
    bytes: &[u8],
    volume: u16,
    repeats: u8,
) -> Result<(), ParameterError> {
    let repeats = repeats.clamp(1, MAX_BURST_REPEATS);

    for _ in 0..repeats {
        for &byte in bytes {
            for bit in 0..8 {
                let freq = if byte & (1 << bit) != 0 {
                    MARK_HZ
                } else {
                    SPACE_HZ
                };
                synth.append(freq, BIT_SECONDS, volume)?;
            }
        }
        synth.append_silence(BURST_GAP_SECONDS)?;
    }

    debug!(
        "modulated {} bytes, {} transmissions",
        bytes.len(),
        repeats
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::synth::AudioParams;

    fn new_synth() -> ToneSynthesizer {
        ToneSynthesizer::new(AudioParams::default())
    }

    #[test]
    fn test_tone_count_per_repeat() {
        for repeats in 1..=3u8 {
            let mut synth = new_synth();
            modulate_into(&mut synth, b"NNNN", 4096, repeats).unwrap();
            assert_eq!((4 * 8 + 1) * repeats as usize, synth.len());
        }
    }

    #[test]
    fn test_repeats_clamped() {
        let mut lo = new_synth();
        let mut one = new_synth();
        modulate_into(&mut lo, b"AB", 4096, 0).unwrap();
        modulate_into(&mut one, b"AB", 4096, 1).unwrap();
        assert_eq!(one.len(), lo.len());

        let mut hi = new_synth();
        let mut three = new_synth();
        modulate_into(&mut hi, b"AB", 4096, 5).unwrap();
        modulate_into(&mut three, b"AB", 4096, 3).unwrap();
        assert_eq!(three.len(), hi.len());
    }

    #[test]
    fn test_bit_order_lsb_first() {
        // 'Z' = 0x5a = 0b0101_1010, so LSB-first the bit tones run
        // space mark space mark mark space mark space
        let mut synth = new_synth();
        modulate_into(&mut synth, b"Z", 4096, 1).unwrap();

        let expect = [
            SPACE_HZ, MARK_HZ, SPACE_HZ, MARK_HZ, MARK_HZ, SPACE_HZ, MARK_HZ, SPACE_HZ,
        ];

        // tone buffer renders deterministically: compare against a
        // synthesizer loaded by hand
        let mut manual = new_synth();
        for freq in expect {
            manual.append(freq, BIT_SECONDS, 4096).unwrap();
        }
        manual.append_silence(BURST_GAP_SECONDS).unwrap();

        assert_eq!(manual.render(), synth.render());
    }

    #[test]
    fn test_volume_checked() {
        let mut synth = new_synth();
        assert!(modulate_into(&mut synth, b"Z", 40000, 1).is_err());
        assert!(synth.is_empty());
    }
}
