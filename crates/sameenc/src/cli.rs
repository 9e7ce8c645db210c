use std::fmt::Display;

use clap::{error::ErrorKind, CommandFactory, Parser};

use samegen::{AreaCode, AttentionTone, EventCode, IssueTime, Originator};

/// Standard output filename
const STDOUT_FILE: &str = "-";

const USAGE_SHORT: &str = r#"
This program encodes a SAME/EAS alert message into a RIFF WAVE (.wav) file: the digital header bursts, an optional attention tone, and the end-of-message bursts. The header is printed in its ASCII representation for confirmation.

See --help for more details.

NEVER BROADCAST THE OUTPUT OVER THE AIR!
"#;

const USAGE_LONG: &str = r#"
This program encodes a SAME/EAS alert message into a RIFF WAVE (.wav) file: the digital header bursts, an optional attention tone, and the end-of-message bursts. The header is printed in its ASCII representation for confirmation.

Encode a Required Weekly Test for Nassau County, NY:

    sameenc --event RWT --location 036059 \
        --sender 'KLOX/NWS' --output test.wav

Locations are six-digit PSSCCC codes: subdivision digit, two-digit FIPS state, three-digit FIPS county. Repeat --location for up to 31 areas. County codes are NOT checked against census tables; verify them yourself.

Pipe the output straight into a player:

    sameenc -e RWT -l 036059 -s 'KLOX/NWS' -o - | paplay

Playing the output aloud can trigger real emergency alert equipment within earshot, and broadcasting it may be illegal.

NEVER BROADCAST THE OUTPUT OVER THE AIR!
"#;

/// Top-level program arguments
#[derive(Parser, Clone, Debug)]
#[command(version)]
#[command(about, long_about = None)]
#[command(after_help = USAGE_SHORT, after_long_help = USAGE_LONG)]
#[command(max_term_width = 100)]
pub struct Args {
    /// Verbosity level (-vvv for more)
    #[arg(short, long, default_value_t = 0, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print nothing but the audio itself
    #[arg(short, long)]
    pub quiet: bool,

    /// Originator code (PEP, CIV, WXR, or EAS)
    #[arg(short = 'g', long, default_value = "WXR")]
    pub originator: Originator,

    /// Event code, like RWT or TOR
    #[arg(short, long)]
    pub event: EventCode,

    /// Area of applicability, as six digits PSSCCC
    ///
    /// Repeat for up to 31 areas. Emitted in the order given.
    #[arg(short, long = "location", required = true)]
    pub location: Vec<AreaCode>,

    /// Purge time, as packed HHMM (30 = half an hour, 0130 = 1h30m)
    ///
    /// Under one hour, must be a 15-minute increment; otherwise a
    /// 30-minute increment.
    #[arg(short, long, default_value_t = 30)]
    pub purge: u16,

    /// Issuance time, as DDDHHMM (UTC). Defaults to now.
    #[arg(short, long)]
    pub issue: Option<IssueTime>,

    /// Sender identifier, like KLOX/NWS
    ///
    /// Up to eight characters of A-Z, 0-9, space, and slash; shorter
    /// identifiers are space-padded.
    #[arg(short, long)]
    pub sender: String,

    /// Times to transmit the header burst (1 to 3)
    #[arg(long, default_value_t = 3)]
    pub repeats: u8,

    /// Attention tone following the header ("nws" or "eas")
    #[arg(short, long)]
    pub attention: Option<AttentionTone>,

    /// Do not append the NNNN end-of-message bursts
    #[arg(long)]
    pub no_eom: bool,

    /// Output sampling rate (Hz)
    #[arg(short, long, default_value_t = 44100)]
    pub rate: u32,

    /// Output channel count
    #[arg(long, default_value_t = 2)]
    pub channels: u16,

    /// Tone volume (0 to 32767)
    #[arg(long, default_value_t = samegen::DEFAULT_VOLUME)]
    pub volume: u16,

    /// Output file (or "-" for stdout)
    #[arg(short, long, default_value_t = STDOUT_FILE.to_string())]
    pub output: String,
}

impl Args {
    /// Return true if the user requests output to stdout
    pub fn output_is_stdout(&self) -> bool {
        self.output == STDOUT_FILE
    }
}

/// A program-level error with exit code
#[derive(Debug)]
pub struct CliError {
    error: anyhow::Error,
    exit_code: i32,
}

impl CliError {
    /// Create new error with a custom exit code
    pub fn new(error: anyhow::Error, code: i32) -> CliError {
        CliError {
            error,
            exit_code: code,
        }
    }

    /// Print this error to the terminal
    ///
    /// Errors from clap are printed verbatim. Other types of errors
    /// are printed indirectly via clap's fancy formatter.
    pub fn print(&self) -> std::io::Result<()> {
        if let Some(e) = self.error.downcast_ref::<clap::Error>() {
            e.print()
        } else {
            Args::command()
                .error(ErrorKind::Format, self.to_string())
                .print()
        }
    }

    /// Print this error to the terminal and exit
    pub fn exit(&self) -> ! {
        drop(self.print());
        std::process::exit(self.exit_code);
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.error)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> CliError {
        CliError::new(err, 1)
    }
}

impl From<clap::Error> for CliError {
    fn from(err: clap::Error) -> CliError {
        let code = if err.use_stderr() { 1 } else { 0 };
        CliError::new(err.into(), code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clap() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_minimal() {
        let args = Args::try_parse_from([
            "sameenc", "-e", "RWT", "-l", "036059", "-s", "KLOX/NWS",
        ])
        .expect("parse");

        assert_eq!(Originator::WeatherService, args.originator);
        assert_eq!(EventCode::RequiredWeeklyTest, args.event);
        assert_eq!(1, args.location.len());
        assert_eq!(3, args.repeats);
        assert!(args.attention.is_none());
        assert!(args.output_is_stdout());
    }

    #[test]
    fn test_parse_rejects_bad_codes() {
        assert!(Args::try_parse_from([
            "sameenc", "-e", "XYZ", "-l", "036059", "-s", "KLOX/NWS",
        ])
        .is_err());

        assert!(Args::try_parse_from([
            "sameenc", "-e", "RWT", "-l", "36059", "-s", "KLOX/NWS",
        ])
        .is_err());
    }
}
