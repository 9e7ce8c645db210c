//! Message validation
//!
//! [`validate`] checks a [`Message`] against the SAME field rules
//! and returns a normalized copy of it on success. Every violated
//! rule is collected and reported; there is no fail-fast
//! truncation. The encoder refuses to modulate a message which does
//! not pass.
//!
//! Checks which the dynamically-typed reference encoder performed at
//! runtime (originator/event/subdivision membership, field shapes)
//! are unrepresentable here: those fields are enums and cannot hold
//! an undefined code.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::fips::{is_state_code, AreaCode, CountyIndex};
use crate::message::{IssueTime, Message, PurgeTime, MAX_AREAS, SENDER_LEN};

/// One violated SAME field rule
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Violation {
    /// The area list is empty
    #[error("message.areas must be a non-empty list")]
    NoAreas,

    /// The area list exceeds [`MAX_AREAS`]
    #[error("there must be no more than {MAX_AREAS} areas in message.areas (got {0})")]
    TooManyAreas(usize),

    /// Areas whose state code is not a defined FIPS state, territory,
    /// or marine area
    #[error("wrong state code at area {}", join_areas(.0))]
    UnknownState(Vec<AreaCode>),

    /// Areas whose county code does not exist within their state
    #[error("wrong county code at area {}", join_areas(.0))]
    UnknownCounty(Vec<AreaCode>),

    /// Purge time not on a permitted 15/30-minute increment
    #[error("message.purge must be a valid SAME event length value (got {0})")]
    PurgeIncrement(PurgeTime),

    /// Issuance day outside 1..=366
    #[error("message.issue.day must be a valid Julian date (1 <= n <= 366; got {0})")]
    IssueDay(u16),

    /// Issuance hour outside 0..=23
    #[error("message.issue.hour must be a valid hour (0 <= n <= 23; got {0})")]
    IssueHour(u8),

    /// Issuance minute outside 0..=59
    #[error("message.issue.minute must be a valid minute (0 <= n <= 59; got {0})")]
    IssueMinute(u8),

    /// Sender identifier does not match `[A-Z0-9 /]{8}` after
    /// padding
    #[error("message.sender must be a valid SAME sender identifier (got \"{0}\")")]
    Sender(String),
}

/// Aggregate validation failure
///
/// Carries every [`Violation`] found in the message, in field
/// order.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Every violated rule, in field order
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "message failed to validate: ")?;
        for (n, violation) in self.violations.iter().enumerate() {
            if n > 0 {
                write!(f, "; ")?;
            }
            violation.fmt(f)?;
        }
        Ok(())
    }
}

/// Validate a message, returning a normalized copy
///
/// On success, the returned `Message` is the input with its sender
/// identifier right-padded to [`SENDER_LEN`] characters: the form
/// the encoder emits. The input is never modified. On failure, the
/// error lists every violated rule.
///
/// County membership is checked against `counties`; state codes are
/// checked against the bundled table. Per the SAME area rules,
/// state `00` with county `000` addresses the entire country, and
/// county `000` within a real state addresses the entire state;
/// county lookups only happen for nonzero pairs.
pub fn validate<C: CountyIndex>(message: &Message, counties: C) -> Result<Message, ValidationError> {
    let mut violations = Vec::new();

    if message.areas.is_empty() {
        violations.push(Violation::NoAreas);
    } else if message.areas.len() > MAX_AREAS {
        violations.push(Violation::TooManyAreas(message.areas.len()));
    }

    // every offending area is reported, bucketed by the sub-rule
    // it fails
    let mut wrong_state = Vec::new();
    let mut wrong_county = Vec::new();
    for area in &message.areas {
        match (area.state, area.county) {
            // entire country
            (0, 0) => {}
            // nonzero county demands a real state
            (0, _) => wrong_county.push(*area),
            (state, county) => {
                if !is_state_code(state) {
                    wrong_state.push(*area);
                } else if county != 0 && !counties.contains(state, county) {
                    wrong_county.push(*area);
                }
            }
        }
    }
    if !wrong_state.is_empty() {
        violations.push(Violation::UnknownState(wrong_state));
    }
    if !wrong_county.is_empty() {
        violations.push(Violation::UnknownCounty(wrong_county));
    }

    if !message.purge.has_valid_increment() {
        violations.push(Violation::PurgeIncrement(message.purge));
    }

    let IssueTime { day, hour, minute } = message.issue;
    if !(1..=366).contains(&day) {
        violations.push(Violation::IssueDay(day));
    }
    if hour > 23 {
        violations.push(Violation::IssueHour(hour));
    }
    if minute > 59 {
        violations.push(Violation::IssueMinute(minute));
    }

    lazy_static! {
        static ref SENDER_RE: Regex =
            Regex::new(r"^[A-Z0-9 /]{8}$").expect("bad sender regexp");
    }

    let sender = format!("{:<width$}", message.sender, width = SENDER_LEN);
    if !SENDER_RE.is_match(&sender) {
        violations.push(Violation::Sender(message.sender.clone()));
    }

    if violations.is_empty() {
        Ok(Message {
            sender,
            ..message.clone()
        })
    } else {
        Err(ValidationError { violations })
    }
}

// "012345, 036059" — for the per-sub-rule area reports
fn join_areas(areas: &[AreaCode]) -> String {
    let mut out = String::with_capacity(areas.len() * 8);
    for (n, area) in areas.iter().enumerate() {
        if n > 0 {
            out.push_str(", ");
        }
        out.push_str(&area.to_string());
    }
    out
}
