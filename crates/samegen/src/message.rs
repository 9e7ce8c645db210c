//! The SAME message data model
//!
//! A [`Message`] carries everything that appears in a SAME digital
//! header except the preamble: originator, event code, areas of
//! applicability, purge time, issuance time, and the sender
//! identifier. Construct one, [`validate`](crate::validate::validate)
//! it, and hand it to a [`SameEncoder`](crate::SameEncoder).

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, Timelike, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::fips::AreaCode;
use crate::samecodes::{EventCode, Originator};

/// Maximum number of areas permitted in one SAME header
pub const MAX_AREAS: usize = 31;

/// Length of the sender identifier, in characters
pub const SENDER_LEN: usize = 8;

/// An outgoing SAME alert message
///
/// All fields are public; this type is plain data. Nothing about it
/// is guaranteed valid until it passes
/// [`validate`](crate::validate::validate), and the encoder will not
/// emit audio for a message which does not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// Originating organization
    pub originator: Originator,

    /// Event type
    pub event: EventCode,

    /// Areas of applicability, 1 to [`MAX_AREAS`] entries, emitted in
    /// the order given
    pub areas: Vec<AreaCode>,

    /// Time after which the alert expires
    pub purge: PurgeTime,

    /// Issuance time (UTC)
    pub issue: IssueTime,

    /// Sender identifier, like "`KLOX/NWS`"
    ///
    /// At most eight characters of uppercase letters, digits, space,
    /// and slash. Validation right-pads shorter identifiers with
    /// spaces.
    pub sender: String,
}

/// Alert purge time, in SAME's packed `HHMM` form
///
/// The wire value `0130` means one hour and thirty minutes after the
/// issuance time. Purge times under one hour must fall on a
/// 15-minute increment; longer ones on a 30-minute increment.
///
/// ```
/// use samegen::PurgeTime;
///
/// let purge = PurgeTime::new(1, 30);
/// assert_eq!(130, purge.packed());
/// assert_eq!("0130", &purge.to_string());
/// assert!(purge.has_valid_increment());
/// assert!(!PurgeTime::from(115).has_valid_increment());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PurgeTime(u16);

impl PurgeTime {
    /// Purge time of `hours` and `minutes` after issuance
    pub fn new(hours: u16, minutes: u16) -> Self {
        PurgeTime(hours * 100 + minutes)
    }

    /// Hours component
    pub fn hours(&self) -> u16 {
        self.0 / 100
    }

    /// Minutes component
    pub fn minutes(&self) -> u16 {
        self.0 - 100 * self.hours()
    }

    /// The packed `HHMM` wire value, like `130` for 1h30m
    pub fn packed(&self) -> u16 {
        self.0
    }

    /// True if the minutes fall on a permitted increment
    ///
    /// Under one hour: 15-minute increments. One hour or more:
    /// 30-minute increments.
    pub fn has_valid_increment(&self) -> bool {
        if self.hours() < 1 {
            self.minutes() % 15 == 0
        } else {
            self.minutes() % 30 == 0
        }
    }
}

impl From<u16> for PurgeTime {
    /// Interpret a packed `HHMM` value, like `130` for 1h30m
    fn from(packed: u16) -> Self {
        PurgeTime(packed)
    }
}

impl fmt::Display for PurgeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// Alert issuance time: Julian day of year plus UTC wall clock
///
/// SAME headers do not carry a year. Day 1 is January 1st; day 366
/// only occurs in leap years.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IssueTime {
    /// Julian day of year, 1 to 366
    pub day: u16,

    /// Hour, 0 to 23
    pub hour: u8,

    /// Minute, 0 to 59
    pub minute: u8,
}

impl IssueTime {
    /// Issuance time from components
    pub fn new(day: u16, hour: u8, minute: u8) -> Self {
        IssueTime { day, hour, minute }
    }

    /// Issuance time of a UTC timestamp
    ///
    /// Seconds are discarded; SAME time resolution is one minute.
    #[cfg(feature = "chrono")]
    pub fn from_datetime(when: &DateTime<Utc>) -> Self {
        IssueTime {
            day: when.ordinal() as u16,
            hour: when.hour() as u8,
            minute: when.minute() as u8,
        }
    }
}

impl fmt::Display for IssueTime {
    /// The wire form `DDDHHMM`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}{:02}{:02}", self.day, self.hour, self.minute)
    }
}

impl FromStr for IssueTime {
    type Err = InvalidIssueTime;

    /// Parse the wire form `DDDHHMM`
    ///
    /// Only the digit layout is checked here; range checking is the
    /// validator's job.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref ISSUE_RE: Regex =
                Regex::new(r"^([0-9]{3})([0-9]{2})([0-9]{2})$").expect("bad issue regexp");
        }

        let caps = ISSUE_RE
            .captures(s)
            .ok_or_else(|| InvalidIssueTime(s.to_owned()))?;

        Ok(IssueTime {
            day: caps[1].parse().expect("three digits"),
            hour: caps[2].parse().expect("two digits"),
            minute: caps[3].parse().expect("two digits"),
        })
    }
}

/// A string which is not a seven-digit `DDDHHMM` issuance time
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("\"{0}\" is not a DDDHHMM issuance time")]
pub struct InvalidIssueTime(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purge_time() {
        assert_eq!(PurgeTime::new(0, 45), PurgeTime::from(45));
        assert_eq!(0, PurgeTime::from(45).hours());
        assert_eq!(45, PurgeTime::from(45).minutes());
        assert_eq!("0045", &PurgeTime::from(45).to_string());

        assert_eq!(1, PurgeTime::from(130).hours());
        assert_eq!(30, PurgeTime::from(130).minutes());

        // under one hour: quarter-hour increments
        assert!(PurgeTime::from(45).has_valid_increment());
        assert!(!PurgeTime::from(50).has_valid_increment());

        // one hour and up: half-hour increments
        assert!(PurgeTime::from(130).has_valid_increment());
        assert!(PurgeTime::from(600).has_valid_increment());
        assert!(!PurgeTime::from(115).has_valid_increment());
    }

    #[test]
    fn test_issue_time_display() {
        assert_eq!("0321115", &IssueTime::new(32, 11, 15).to_string());
        assert_eq!("3660000", &IssueTime::new(366, 0, 0).to_string());
    }

    #[test]
    fn test_issue_time_parse() {
        assert_eq!(Ok(IssueTime::new(32, 11, 15)), "0321115".parse());
        assert_eq!(Ok(IssueTime::new(1, 0, 0)), "0010000".parse());

        assert!("032111".parse::<IssueTime>().is_err());
        assert!("03211150".parse::<IssueTime>().is_err());
        assert_eq!(
            InvalidIssueTime("aaa1115".to_owned()),
            "aaa1115".parse::<IssueTime>().unwrap_err()
        );
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_issue_time_from_datetime() {
        use chrono::TimeZone;

        let when = Utc.with_ymd_and_hms(2021, 2, 1, 11, 15, 42).unwrap();
        let issue = IssueTime::from_datetime(&when);
        assert_eq!(IssueTime::new(32, 11, 15), issue);
    }
}
