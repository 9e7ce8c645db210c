//! SAME/EAS originator and event codes
//!
//! SAME headers identify the sending organization with a
//! three-character [originator code](Originator) and the alert type
//! with a three-character [event code](EventCode). An encoder must
//! only ever emit codes from the published lists; unlike a receiver,
//! there is no "accept anything" escape hatch here. Both enums
//! convert from their wire representation with
//! [`Originator::from_code`] / [`EventCode::from_code`], which
//! doubles as the membership test the validator uses.
//!
//! Event codes were obtained from
//! <https://docs.fcc.gov/public/attachments/FCC-16-80A1.pdf> and
//! NWSI 10-1712.

use std::fmt;
use std::str::FromStr;

use strum::EnumMessage;
use thiserror::Error;

/// SAME message originator code
///
/// The organization which originates an alert. Unlike a receiver,
/// which must tolerate unknown originators, an encoder refuses to
/// emit one: conversion from string fails with
/// [`UnknownOriginator`].
///
/// ```
/// use samegen::Originator;
///
/// let orig = Originator::from_code("WXR").unwrap();
/// assert_eq!(Originator::WeatherService, orig);
/// assert_eq!("WXR", orig.as_str());
/// assert_eq!("National Weather Service", &format!("{}", orig));
///
/// assert!(Originator::from_code("HUH").is_err());
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumMessage,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
pub enum Originator {
    /// Primary Entry Point station for national activations
    #[strum(serialize = "PEP", detailed_message = "Primary Entry Point System")]
    PrimaryEntryPoint,

    /// Civil authorities
    #[strum(serialize = "CIV", detailed_message = "Civil authorities")]
    CivilAuthority,

    /// National Weather Service or Environment Canada
    #[strum(serialize = "WXR", detailed_message = "National Weather Service")]
    WeatherService,

    /// EAS participant (usu. broadcast station)
    #[strum(
        serialize = "EAS",
        detailed_message = "Broadcast station or cable system"
    )]
    BroadcastStation,
}

impl Originator {
    /// Look up a three-character SAME code, like "`WXR`"
    ///
    /// The membership test: fails with [`UnknownOriginator`] for
    /// anything not on the published list.
    pub fn from_code(code: &str) -> Result<Self, UnknownOriginator> {
        Originator::from_str(code).map_err(|_| UnknownOriginator(code.to_owned()))
    }

    /// Three-character SAME code, like "`WXR`"
    pub fn as_str(&self) -> &'static str {
        self.get_serializations()[0]
    }

    /// Human-readable name, like "`National Weather Service`"
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }
}

impl AsRef<str> for Originator {
    fn as_ref(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for Originator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_display_str().fmt(f)
    }
}

/// A string which is not a defined SAME originator code
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("\"{0}\" is not a defined SAME originator code")]
pub struct UnknownOriginator(pub String);

/// SAME message event code
///
/// The alert type. The list below follows NWSI 10-1712 and
/// FCC Part 11, including the state/local codes. Conversion from
/// the three-character wire form is the membership check:
///
/// ```
/// use samegen::EventCode;
///
/// let evt = EventCode::from_code("RWT").unwrap();
/// assert_eq!(EventCode::RequiredWeeklyTest, evt);
/// assert_eq!("RWT", evt.as_str());
/// assert_eq!("Required Weekly Test", evt.as_display_str());
///
/// assert!(EventCode::from_code("XYZ").is_err());
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumMessage,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[non_exhaustive]
pub enum EventCode {
    /// Administrative Message
    #[strum(serialize = "ADR", detailed_message = "Administrative Message")]
    AdministrativeMessage,

    /// Avalanche Watch
    #[strum(serialize = "AVA", detailed_message = "Avalanche Watch")]
    AvalancheWatch,

    /// Avalanche Warning
    #[strum(serialize = "AVW", detailed_message = "Avalanche Warning")]
    AvalancheWarning,

    /// Blue Alert
    #[strum(serialize = "BLU", detailed_message = "Blue Alert")]
    BlueAlert,

    /// Blizzard Warning
    #[strum(serialize = "BZW", detailed_message = "Blizzard Warning")]
    BlizzardWarning,

    /// Child Abduction Emergency
    #[strum(serialize = "CAE", detailed_message = "Child Abduction Emergency")]
    ChildAbductionEmergency,

    /// Civil Danger Warning
    #[strum(serialize = "CDW", detailed_message = "Civil Danger Warning")]
    CivilDangerWarning,

    /// Civil Emergency Message
    #[strum(serialize = "CEM", detailed_message = "Civil Emergency Message")]
    CivilEmergencyMessage,

    /// Coastal Flood Watch
    #[strum(serialize = "CFA", detailed_message = "Coastal Flood Watch")]
    CoastalFloodWatch,

    /// Coastal Flood Warning
    #[strum(serialize = "CFW", detailed_message = "Coastal Flood Warning")]
    CoastalFloodWarning,

    /// Practice/Demo Warning
    #[strum(serialize = "DMO", detailed_message = "Practice/Demo Warning")]
    PracticeDemoWarning,

    /// Dust Storm Warning
    #[strum(serialize = "DSW", detailed_message = "Dust Storm Warning")]
    DustStormWarning,

    /// National Emergency Message (begins national activation)
    #[strum(serialize = "EAN", detailed_message = "National Emergency Message")]
    NationalEmergencyMessage,

    /// Earthquake Warning
    #[strum(serialize = "EQW", detailed_message = "Earthquake Warning")]
    EarthquakeWarning,

    /// Evacuation Immediate
    #[strum(serialize = "EVI", detailed_message = "Evacuation Immediate")]
    EvacuationImmediate,

    /// Extreme Wind Warning
    #[strum(serialize = "EWW", detailed_message = "Extreme Wind Warning")]
    ExtremeWindWarning,

    /// Flash Flood Watch
    #[strum(serialize = "FFA", detailed_message = "Flash Flood Watch")]
    FlashFloodWatch,

    /// Flash Flood Statement
    #[strum(serialize = "FFS", detailed_message = "Flash Flood Statement")]
    FlashFloodStatement,

    /// Flash Flood Warning
    #[strum(serialize = "FFW", detailed_message = "Flash Flood Warning")]
    FlashFloodWarning,

    /// Flood Watch
    #[strum(serialize = "FLA", detailed_message = "Flood Watch")]
    FloodWatch,

    /// Flood Statement
    #[strum(serialize = "FLS", detailed_message = "Flood Statement")]
    FloodStatement,

    /// Flood Warning
    #[strum(serialize = "FLW", detailed_message = "Flood Warning")]
    FloodWarning,

    /// Fire Warning
    #[strum(serialize = "FRW", detailed_message = "Fire Warning")]
    FireWarning,

    /// Flash Freeze Warning (Canada)
    #[strum(serialize = "FSW", detailed_message = "Flash Freeze Warning")]
    FlashFreezeWarning,

    /// Freeze Warning
    #[strum(serialize = "FZW", detailed_message = "Freeze Warning")]
    FreezeWarning,

    /// Hurricane Local Statement
    #[strum(serialize = "HLS", detailed_message = "Hurricane Local Statement")]
    HurricaneLocalStatement,

    /// Hazardous Materials Warning
    #[strum(serialize = "HMW", detailed_message = "Hazardous Materials Warning")]
    HazardousMaterialsWarning,

    /// Hurricane Watch
    #[strum(serialize = "HUA", detailed_message = "Hurricane Watch")]
    HurricaneWatch,

    /// Hurricane Warning
    #[strum(serialize = "HUW", detailed_message = "Hurricane Warning")]
    HurricaneWarning,

    /// High Wind Watch
    #[strum(serialize = "HWA", detailed_message = "High Wind Watch")]
    HighWindWatch,

    /// High Wind Warning
    #[strum(serialize = "HWW", detailed_message = "High Wind Warning")]
    HighWindWarning,

    /// Local Area Emergency
    #[strum(serialize = "LAE", detailed_message = "Local Area Emergency")]
    LocalAreaEmergency,

    /// Law Enforcement Warning
    #[strum(serialize = "LEW", detailed_message = "Law Enforcement Warning")]
    LawEnforcementWarning,

    /// National Audible Test
    #[strum(serialize = "NAT", detailed_message = "National Audible Test")]
    NationalAudibleTest,

    /// National Information Center
    #[strum(serialize = "NIC", detailed_message = "National Information Center")]
    NationalInformationCenter,

    /// Network Message Notification
    #[strum(serialize = "NMN", detailed_message = "Network Message Notification")]
    NetworkMessageNotification,

    /// National Periodic Test
    #[strum(serialize = "NPT", detailed_message = "National Periodic Test")]
    NationalPeriodicTest,

    /// National Silent Test
    #[strum(serialize = "NST", detailed_message = "National Silent Test")]
    NationalSilentTest,

    /// Nuclear Power Plant Warning
    #[strum(serialize = "NUW", detailed_message = "Nuclear Power Plant Warning")]
    NuclearPowerPlantWarning,

    /// Radiological Hazard Warning
    #[strum(serialize = "RHW", detailed_message = "Radiological Hazard Warning")]
    RadiologicalHazardWarning,

    /// Required Monthly Test
    #[strum(serialize = "RMT", detailed_message = "Required Monthly Test")]
    RequiredMonthlyTest,

    /// Required Weekly Test
    #[strum(serialize = "RWT", detailed_message = "Required Weekly Test")]
    RequiredWeeklyTest,

    /// Special Marine Warning
    #[strum(serialize = "SMW", detailed_message = "Special Marine Warning")]
    SpecialMarineWarning,

    /// Special Weather Statement
    #[strum(serialize = "SPS", detailed_message = "Special Weather Statement")]
    SpecialWeatherStatement,

    /// Shelter In Place Warning
    #[strum(serialize = "SPW", detailed_message = "Shelter In Place Warning")]
    ShelterInPlaceWarning,

    /// Snow Squall Warning
    #[strum(serialize = "SQW", detailed_message = "Snow Squall Warning")]
    SnowSquallWarning,

    /// Storm Surge Watch
    #[strum(serialize = "SSA", detailed_message = "Storm Surge Watch")]
    StormSurgeWatch,

    /// Storm Surge Warning
    #[strum(serialize = "SSW", detailed_message = "Storm Surge Warning")]
    StormSurgeWarning,

    /// Severe Thunderstorm Watch
    #[strum(serialize = "SVA", detailed_message = "Severe Thunderstorm Watch")]
    SevereThunderstormWatch,

    /// Severe Thunderstorm Warning
    #[strum(serialize = "SVR", detailed_message = "Severe Thunderstorm Warning")]
    SevereThunderstormWarning,

    /// Severe Weather Statement
    #[strum(serialize = "SVS", detailed_message = "Severe Weather Statement")]
    SevereWeatherStatement,

    /// Tornado Watch
    #[strum(serialize = "TOA", detailed_message = "Tornado Watch")]
    TornadoWatch,

    /// 911 Telephone Outage Emergency
    #[strum(serialize = "TOE", detailed_message = "911 Telephone Outage Emergency")]
    TelephoneOutageEmergency,

    /// Tornado Warning
    #[strum(serialize = "TOR", detailed_message = "Tornado Warning")]
    TornadoWarning,

    /// Tropical Storm Watch
    #[strum(serialize = "TRA", detailed_message = "Tropical Storm Watch")]
    TropicalStormWatch,

    /// Tropical Storm Warning
    #[strum(serialize = "TRW", detailed_message = "Tropical Storm Warning")]
    TropicalStormWarning,

    /// Tsunami Watch
    #[strum(serialize = "TSA", detailed_message = "Tsunami Watch")]
    TsunamiWatch,

    /// Tsunami Warning
    #[strum(serialize = "TSW", detailed_message = "Tsunami Warning")]
    TsunamiWarning,

    /// Volcano Warning
    #[strum(serialize = "VOW", detailed_message = "Volcano Warning")]
    VolcanoWarning,

    /// Winter Storm Watch
    #[strum(serialize = "WSA", detailed_message = "Winter Storm Watch")]
    WinterStormWatch,

    /// Winter Storm Warning
    #[strum(serialize = "WSW", detailed_message = "Winter Storm Warning")]
    WinterStormWarning,
}

impl EventCode {
    /// Look up a three-character SAME code, like "`RWT`"
    ///
    /// The membership test: fails with [`UnknownEventCode`] for
    /// anything not on the published list.
    pub fn from_code(code: &str) -> Result<Self, UnknownEventCode> {
        Self::from_str(code).map_err(|_| UnknownEventCode(code.to_owned()))
    }

    /// Three-character SAME code, like "`RWT`"
    pub fn as_str(&self) -> &'static str {
        self.get_serializations()[0]
    }

    /// Human-readable name, like "`Required Weekly Test`"
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message()
            .expect("missing human-readable definition")
    }
}

impl AsRef<str> for EventCode {
    fn as_ref(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for EventCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_display_str().fmt(f)
    }
}

/// A string which is not a defined SAME event code
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("\"{0}\" is not a defined SAME event type code")]
pub struct UnknownEventCode(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    #[test]
    fn test_originator_api() {
        for orig in Originator::iter() {
            let wire = orig.as_str();
            assert_eq!(3, wire.len());
            assert_eq!(Ok(orig), Originator::from_code(wire));
        }

        assert_eq!(
            Err(UnknownOriginator("OOO".to_owned())),
            Originator::from_code("OOO")
        );
        assert_eq!(
            "\"wxr\" is not a defined SAME originator code",
            &format!("{}", Originator::from_code("wxr").unwrap_err())
        );

        // the derive supplies string conversions of its own;
        // from_code only layers the typed error on top
        assert_eq!(Ok(Originator::WeatherService), "WXR".parse());
        let converted: Result<Originator, _> = std::convert::TryFrom::try_from("WXR");
        assert_eq!(Ok(Originator::WeatherService), converted);
    }

    #[test]
    fn test_event_codes_unique_and_roundtrip() {
        let mut codes = HashSet::new();
        let mut names = HashSet::new();

        for evt in EventCode::iter() {
            let wire = evt.as_str();
            assert_eq!(3, wire.len());
            assert!(wire.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()));

            // wire codes and display names must be unique
            assert!(codes.insert(wire));
            assert!(names.insert(evt.as_display_str()));

            // back-conversion must yield the same variant
            assert_eq!(Ok(evt), EventCode::from_code(wire));
        }
    }

    #[test]
    fn test_event_rejects_unknown() {
        assert!(EventCode::from_code("").is_err());
        assert!(EventCode::from_code("rwt").is_err());
        let err = EventCode::from_code("DEW").unwrap_err();
        assert_eq!(UnknownEventCode("DEW".to_owned()), err);
    }
}
