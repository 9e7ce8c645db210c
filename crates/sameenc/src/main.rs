use std::io::{self, Write};

use anyhow::{anyhow, Context};
use chrono::Utc;
use clap::Parser;
use log::{info, warn, LevelFilter};

use samegen::{AnyCounty, AudioParams, IssueTime, Message, PurgeTime, SameEncoderBuilder};

mod cli;

use cli::{Args, CliError};

fn main() {
    match sameenc() {
        Ok(()) => {}
        Err(cli_error) => cli_error.exit(),
    }
}

fn sameenc() -> Result<(), CliError> {
    // Parse options and start logging
    let args = Args::try_parse()?;
    log_setup(&args);

    let message = Message {
        originator: args.originator,
        event: args.event,
        areas: args.location.clone(),
        purge: PurgeTime::from(args.purge),
        issue: args
            .issue
            .unwrap_or_else(|| IssueTime::from_datetime(&Utc::now())),
        sender: args.sender.clone(),
    };

    let audio = AudioParams::new(args.channels, args.rate, 16).map_err(anyhow::Error::new)?;

    let encoder = SameEncoderBuilder::new()
        .with_audio_params(audio)
        .with_volume(args.volume)
        .with_header_repeats(args.repeats)
        .with_attention_tone(args.attention)
        .with_trailer(!args.no_eom)
        .build();

    // this program carries no census tables
    warn!("county membership is not checked; verify your location codes");

    let out = encoder
        .encode(&message, AnyCounty)
        .map_err(anyhow::Error::new)?;

    if !args.quiet {
        // the header for confirmation, minus the unprintable preamble
        let text = out.header.trim_start_matches('\u{ab}');
        if args.output_is_stdout() {
            info!("{}", text);
        } else {
            println!("{}", text);
        }
    }

    write_output(&args, &out.audio)
}

fn log_setup(args: &Args) {
    if args.quiet {
        // no logging
        return;
    } else if std::env::var_os("RUST_LOG").is_none() {
        // parameter controls
        let log_filter = match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };

        pretty_env_logger::formatted_builder()
            .filter_module("samegen", log_filter)
            .filter_module("sameenc", log_filter)
            .init();
    } else {
        // environment controls
        pretty_env_logger::init();
    }
}

fn write_output(args: &Args, audio: &[u8]) -> Result<(), CliError> {
    if args.output_is_stdout() {
        if is_terminal(&io::stdout()) {
            return Err(anyhow!(
                "cowardly refusing to write WAVE data to a terminal.

Redirect standard output to a file or a player, or use --output."
            )
            .into());
        }
        io::stdout()
            .write_all(audio)
            .context("unable to write audio to standard output")?;
    } else {
        std::fs::write(&args.output, audio)
            .with_context(|| format!("Unable to write --output \"{}\"", args.output))?;
        info!("wrote {} bytes to \"{}\"", audio.len(), args.output);
    }
    Ok(())
}

#[cfg(not(target_os = "windows"))]
fn is_terminal<S>(stream: &S) -> bool
where
    S: std::os::fd::AsRawFd,
{
    terminal_size::terminal_size_using_fd(stream.as_raw_fd()).is_some()
}

#[cfg(target_os = "windows")]
fn is_terminal<S>(stream: &S) -> bool
where
    S: std::os::windows::io::AsRawHandle,
{
    terminal_size::terminal_size_using_handle(stream.as_raw_handle()).is_some()
}
