//! Geographic area codes
//!
//! SAME messages target one or more areas, each written on the wire
//! as a six-digit `PSSCCC` code:
//!
//! * `P` — a [subdivision](Subdivision) digit. `0` addresses the
//!   whole county; `1`–`9` address a ninth of it.
//! * `SS` — a two-digit FIPS state (or NWS marine area) code. `00`
//!   combined with county `000` means the entire country.
//! * `CCC` — a three-digit FIPS county code. `000` means the entire
//!   state.
//!
//! State codes are small, stable ANSI/NWS data and are bundled here
//! as a static set. County tables are large and change with the
//! census; they are supplied by the caller through the
//! [`CountyIndex`] trait.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use phf::phf_set;
use regex::Regex;
use strum::EnumMessage;
use thiserror::Error;

/// County subdivision digit (`P` of `PSSCCC`)
///
/// Addresses either a whole county or one of its ninths. `1` is the
/// northwest ninth; the remaining ninths proceed west-to-east,
/// north-to-south.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumMessage,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
pub enum Subdivision {
    /// The entire area ("0")
    #[default]
    #[strum(serialize = "0", detailed_message = "entire area")]
    EntireArea,

    /// Northwest ninth
    #[strum(serialize = "1", detailed_message = "northwest portion")]
    Northwest,

    /// North-central ninth
    #[strum(serialize = "2", detailed_message = "north portion")]
    North,

    /// Northeast ninth
    #[strum(serialize = "3", detailed_message = "northeast portion")]
    Northeast,

    /// West-central ninth
    #[strum(serialize = "4", detailed_message = "west portion")]
    West,

    /// Central ninth
    #[strum(serialize = "5", detailed_message = "central portion")]
    Central,

    /// East-central ninth
    #[strum(serialize = "6", detailed_message = "east portion")]
    East,

    /// Southwest ninth
    #[strum(serialize = "7", detailed_message = "southwest portion")]
    Southwest,

    /// South-central ninth
    #[strum(serialize = "8", detailed_message = "south portion")]
    South,

    /// Southeast ninth
    #[strum(serialize = "9", detailed_message = "southeast portion")]
    Southeast,
}

impl Subdivision {
    /// Wire digit, like "`0`"
    pub fn as_str(&self) -> &'static str {
        self.get_serializations()[0]
    }

    /// Human-readable description, like "`northwest portion`"
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }
}

impl fmt::Display for Subdivision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

/// A single SAME area of applicability
///
/// `AreaCode` round-trips with its six-digit wire form:
///
/// ```
/// use samegen::{AreaCode, Subdivision};
///
/// let area: AreaCode = "036059".parse().unwrap();
/// assert_eq!(Subdivision::EntireArea, area.subdivision);
/// assert_eq!(36, area.state);
/// assert_eq!(59, area.county);
/// assert_eq!("036059", &area.to_string());
/// ```
///
/// Construction does not imply validity. Membership of the state and
/// county codes is checked by
/// [`validate`](crate::validate::validate).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AreaCode {
    /// Subdivision digit
    pub subdivision: Subdivision,

    /// Two-digit FIPS state code (0 = entire country)
    pub state: u16,

    /// Three-digit FIPS county code (0 = entire state)
    pub county: u16,
}

impl AreaCode {
    /// Area addressing an entire state
    pub fn whole_state(state: u16) -> Self {
        AreaCode {
            subdivision: Subdivision::EntireArea,
            state,
            county: 0,
        }
    }

    /// Area addressing a whole county
    pub fn whole_county(state: u16, county: u16) -> Self {
        AreaCode {
            subdivision: Subdivision::EntireArea,
            state,
            county,
        }
    }

    /// True if this area addresses the entire country (`SS` and
    /// `CCC` both zero)
    pub fn is_national(&self) -> bool {
        self.state == 0 && self.county == 0
    }
}

impl fmt::Display for AreaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}{:03}", self.subdivision, self.state, self.county)
    }
}

impl FromStr for AreaCode {
    type Err = InvalidAreaCode;

    /// Parse a six-digit `PSSCCC` string
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref AREA_RE: Regex =
                Regex::new(r"^([0-9])([0-9]{2})([0-9]{3})$").expect("bad area regexp");
        }

        let caps = AREA_RE
            .captures(s)
            .ok_or_else(|| InvalidAreaCode(s.to_owned()))?;

        // the regex guarantees the digit counts; the numeric parses
        // cannot fail
        Ok(AreaCode {
            subdivision: Subdivision::from_str(&caps[1])
                .map_err(|_| InvalidAreaCode(s.to_owned()))?,
            state: caps[2].parse().expect("two digits"),
            county: caps[3].parse().expect("three digits"),
        })
    }
}

/// A string which is not a six-digit `PSSCCC` area code
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("\"{0}\" is not a six-digit PSSCCC area code")]
pub struct InvalidAreaCode(pub String);

/// FIPS state and territory codes, plus the NWS offshore marine
/// areas, which SAME addresses like states.
static STATE_CODES: phf::Set<u16> = phf_set! {
    // the fifty states plus DC
    1u16, 2u16, 4u16, 5u16, 6u16, 8u16, 9u16, 10u16, 11u16, 12u16,
    13u16, 15u16, 16u16, 17u16, 18u16, 19u16, 20u16, 21u16, 22u16,
    23u16, 24u16, 25u16, 26u16, 27u16, 28u16, 29u16, 30u16, 31u16,
    32u16, 33u16, 34u16, 35u16, 36u16, 37u16, 38u16, 39u16, 40u16,
    41u16, 42u16, 44u16, 45u16, 46u16, 47u16, 48u16, 49u16, 50u16,
    51u16, 53u16, 54u16, 55u16, 56u16,
    // territories
    60u16, 66u16, 69u16, 72u16, 78u16,
    // NWS marine areas (NWSI 10-1712)
    57u16, 58u16, 59u16, 61u16, 65u16, 73u16, 75u16, 77u16,
    91u16, 92u16, 93u16, 94u16, 96u16, 97u16, 98u16,
};

/// True if `code` is a known state, territory, or marine area code
///
/// Code `0` ("entire country") is *not* a state code; the validator
/// treats it specially.
pub fn is_state_code(code: u16) -> bool {
    STATE_CODES.contains(&code)
}

/// County membership queries
///
/// The validator only ever asks one question of the county tables:
/// does county `CCC` exist within state `SS`? Implement this trait
/// over whatever census data source you have. County code `0`
/// ("entire state") never reaches this trait.
pub trait CountyIndex {
    /// True if `county` is a defined county of `state`
    fn contains(&self, state: u16, county: u16) -> bool;
}

impl<C: CountyIndex + ?Sized> CountyIndex for &C {
    fn contains(&self, state: u16, county: u16) -> bool {
        (**self).contains(state, county)
    }
}

/// A static slice-backed county table
///
/// Entries are `(state, counties)` pairs. Both the outer slice (by
/// state) and each county slice must be sorted ascending, which
/// permits binary search.
///
/// ```
/// use samegen::{CountyIndex, CountyTable};
///
/// static COUNTIES: CountyTable =
///     CountyTable(&[(12, &[11, 57, 86]), (36, &[59, 119])]);
///
/// assert!(COUNTIES.contains(36, 59));
/// assert!(!COUNTIES.contains(12, 999));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct CountyTable(pub &'static [(u16, &'static [u16])]);

impl CountyIndex for CountyTable {
    fn contains(&self, state: u16, county: u16) -> bool {
        match self.0.binary_search_by_key(&state, |(s, _)| *s) {
            Ok(idx) => self.0[idx].1.binary_search(&county).is_ok(),
            Err(_) => false,
        }
    }
}

/// A county index which accepts any three-digit county
///
/// Use when no census table is available. State codes are still
/// checked against the bundled set; county codes are only checked
/// structurally (at most three digits).
#[derive(Clone, Copy, Debug, Default)]
pub struct AnyCounty;

impl CountyIndex for AnyCounty {
    fn contains(&self, _state: u16, county: u16) -> bool {
        county <= 999
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use strum::IntoEnumIterator;

    #[test]
    fn test_subdivision_digits() {
        for (n, sub) in Subdivision::iter().enumerate() {
            assert_eq!(format!("{}", n), sub.as_str());
            assert_eq!(Ok(sub), Subdivision::from_str(sub.as_str()));
        }
    }

    #[test]
    fn test_area_roundtrip() {
        let area = AreaCode {
            subdivision: Subdivision::Northwest,
            state: 6,
            county: 37,
        };
        assert_eq!("106037", &area.to_string());
        assert_eq!(Ok(area), "106037".parse());

        assert_eq!("000000", &AreaCode::whole_state(0).to_string());
        assert!(AreaCode::whole_state(0).is_national());
        assert!(!AreaCode::whole_county(12, 86).is_national());
    }

    #[test]
    fn test_area_parse_rejects() {
        assert!("".parse::<AreaCode>().is_err());
        assert!("03605".parse::<AreaCode>().is_err());
        assert!("0360590".parse::<AreaCode>().is_err());
        assert!("03605A".parse::<AreaCode>().is_err());
        assert_eq!(
            InvalidAreaCode("36-59".to_owned()),
            "36-59".parse::<AreaCode>().unwrap_err()
        );
    }

    #[test]
    fn test_state_codes() {
        assert!(is_state_code(1)); // Alabama
        assert!(is_state_code(36)); // New York
        assert!(is_state_code(77)); // Gulf of Mexico
        assert!(!is_state_code(0));
        assert!(!is_state_code(3));
        assert!(!is_state_code(99));
    }

    #[test]
    fn test_county_table() {
        static TABLE: CountyTable = CountyTable(&[(12, &[11, 57, 86]), (36, &[59, 119])]);

        assert!(TABLE.contains(12, 57));
        assert!(TABLE.contains(36, 119));
        assert!(!TABLE.contains(12, 999));
        assert!(!TABLE.contains(48, 1));

        // references to an index are an index
        fn takes_index(idx: impl CountyIndex) -> bool {
            idx.contains(36, 59)
        }
        assert!(takes_index(&TABLE));

        assert!(AnyCounty.contains(12, 999));
        assert!(!AnyCounty.contains(12, 1000));
    }
}
