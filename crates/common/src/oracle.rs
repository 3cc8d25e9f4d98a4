//! Allow-list oracle data.
//!
//! The dashboard renders domain values as plain strings; the suites compare
//! what they observe against this module. Categorical values are closed enums
//! so a typo in an expectation fails at compile time, not at 2am in CI. Name
//! sets (sites, zones, devices) track the seeded test environment and are
//! expected to drift — suites consult them through the soft-validation
//! checker, not through hard equality.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Raised when an observed UI string is not a member of a closed enum.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized {kind} value: {value:?}")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

/// Outcome of an access attempt, as rendered in activity tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessResult {
    Granted,
    Denied,
    DeniedNotScheduled,
    DeniedSpoofAttack,
    DeniedSuspended,
    Doorbell,
}

impl AccessResult {
    pub const ALL: &'static [AccessResult] = &[
        AccessResult::Granted,
        AccessResult::Denied,
        AccessResult::DeniedNotScheduled,
        AccessResult::DeniedSpoofAttack,
        AccessResult::DeniedSuspended,
        AccessResult::Doorbell,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessResult::Granted => "Granted",
            AccessResult::Denied => "Denied",
            AccessResult::DeniedNotScheduled => "Denied - Not scheduled",
            AccessResult::DeniedSpoofAttack => "Denied - Spoof Attack",
            AccessResult::DeniedSuspended => "Denied - Suspended",
            AccessResult::Doorbell => "Doorbell",
        }
    }
}

impl fmt::Display for AccessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessResult {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownValue {
                kind: "access result",
                value: s.to_string(),
            })
    }
}

/// Credential kind shown in the CREDENTIALS column of activity tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialType {
    Face,
    Card,
    Mobile,
    CloudKey,
    Web,
    ExternalCard,
}

impl CredentialType {
    pub const ALL: &'static [CredentialType] = &[
        CredentialType::Face,
        CredentialType::Card,
        CredentialType::Mobile,
        CredentialType::CloudKey,
        CredentialType::Web,
        CredentialType::ExternalCard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialType::Face => "Face",
            CredentialType::Card => "Card",
            CredentialType::Mobile => "Mobile",
            CredentialType::CloudKey => "Cloud Key",
            CredentialType::Web => "Web",
            CredentialType::ExternalCard => "External Card",
        }
    }
}

impl fmt::Display for CredentialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CredentialType {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownValue {
                kind: "credential type",
                value: s.to_string(),
            })
    }
}

/// Lock state of a door row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockState {
    Locked,
    Unlocked,
}

impl LockState {
    pub const ALL: &'static [LockState] = &[LockState::Locked, LockState::Unlocked];

    pub fn as_str(&self) -> &'static str {
        match self {
            LockState::Locked => "Locked",
            LockState::Unlocked => "Unlocked",
        }
    }
}

impl fmt::Display for LockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LockState {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownValue {
                kind: "lock state",
                value: s.to_string(),
            })
    }
}

/// Sensor-reported door state. The seeded environment has produced states
/// outside this set before; treat membership as drift-prone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoorState {
    NoSensor,
    OpenForcedEntry,
}

impl DoorState {
    pub const ALL: &'static [DoorState] = &[DoorState::NoSensor, DoorState::OpenForcedEntry];

    pub fn as_str(&self) -> &'static str {
        match self {
            DoorState::NoSensor => "No Sensor",
            DoorState::OpenForcedEntry => "Open Forced Entry",
        }
    }
}

impl fmt::Display for DoorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DoorState {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownValue {
                kind: "door state",
                value: s.to_string(),
            })
    }
}

/// Role of a dashboard user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserRole {
    Admin,
    Standard,
    Guest,
}

impl UserRole {
    pub const ALL: &'static [UserRole] = &[UserRole::Admin, UserRole::Standard, UserRole::Guest];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Standard => "Standard",
            UserRole::Guest => "Guest",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownValue {
                kind: "user role",
                value: s.to_string(),
            })
    }
}

/// Sites provisioned in the shared test environment.
pub const VALID_SITE_NAMES: &[&str] = &["Clovis Site", "Pune Site"];

/// Zones provisioned in the shared test environment.
pub const VALID_ZONE_NAMES: &[&str] =
    &["Clovis Offices", "Clovis Remote", "MH, India", "Pune Office"];

/// Door devices provisioned in the shared test environment.
pub const VALID_DEVICE_NAMES: &[&str] = &[
    "Door 0002",
    "Door 0012",
    "Door 0020",
    "Door 0031",
    "Pune Door 03",
    "Pune Door 05",
    "Pune Door 57",
];

/// Hubs provisioned in the shared test environment.
pub const VALID_HUB_NAMES: &[&str] = &[
    "Hub 1501",
    "Hub 1582",
    "Hub 2806",
    "Hub 2810",
    "Hub 2859",
    "Pune Hub 1350",
    "Pune Hub 2826",
    "Quad Hub 1363",
];

/// Cameras provisioned in the shared test environment.
pub const VALID_CAMERA_NAMES: &[&str] = &[
    "Camera 0009-Hub 2859",
    "Camera 0011-Hub 2806",
    "Camera 1091-Hub 1363",
    "Camera 1111-Hub 1363",
    "Camera 1129-Hub 1363",
    "Camera 1156-Hub 1363",
    "Camera 1166-Pune Hub 2826",
    "Pune NEXT 08-Hub 2826",
    "Pune 6789-Pune Hub 1350",
];

/// The only door reader model deployed in the test environment.
pub const DOOR_MODEL: &str = "VA-UIR02A";

/// `<12 hex digits>-<serial>` as rendered in the MAC ADDRESS - SERIAL # column.
pub static MAC_SERIAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9A-Fa-f]{12}-[A-Z0-9]+$").expect("mac/serial pattern"));

pub fn is_known_site(name: &str) -> bool {
    VALID_SITE_NAMES.contains(&name)
}

pub fn is_known_zone(name: &str) -> bool {
    VALID_ZONE_NAMES.contains(&name)
}

pub fn is_known_device(name: &str) -> bool {
    VALID_DEVICE_NAMES.contains(&name)
}

pub fn is_known_hub(name: &str) -> bool {
    VALID_HUB_NAMES.contains(&name)
}

pub fn is_known_camera(name: &str) -> bool {
    VALID_CAMERA_NAMES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Granted", AccessResult::Granted)]
    #[test_case("Denied", AccessResult::Denied)]
    #[test_case("Denied - Not scheduled", AccessResult::DeniedNotScheduled)]
    #[test_case("Denied - Spoof Attack", AccessResult::DeniedSpoofAttack)]
    #[test_case("Denied - Suspended", AccessResult::DeniedSuspended)]
    #[test_case("Doorbell", AccessResult::Doorbell)]
    fn access_result_round_trips(rendered: &str, expected: AccessResult) {
        let parsed: AccessResult = rendered.parse().unwrap();
        assert_eq!(parsed, expected);
        assert_eq!(parsed.to_string(), rendered);
    }

    #[test]
    fn unknown_access_result_reports_value() {
        let err = "Denied - Badge Expired".parse::<AccessResult>().unwrap_err();
        assert_eq!(err.kind, "access result");
        assert_eq!(err.value, "Denied - Badge Expired");
    }

    #[test_case("Cloud Key", CredentialType::CloudKey)]
    #[test_case("External Card", CredentialType::ExternalCard)]
    #[test_case("Face", CredentialType::Face)]
    fn credential_type_round_trips(rendered: &str, expected: CredentialType) {
        let parsed: CredentialType = rendered.parse().unwrap();
        assert_eq!(parsed, expected);
        assert_eq!(parsed.to_string(), rendered);
    }

    #[test]
    fn lock_state_is_closed() {
        assert!("Locked".parse::<LockState>().is_ok());
        assert!("Unlocked".parse::<LockState>().is_ok());
        assert!("Ajar".parse::<LockState>().is_err());
    }

    #[test]
    fn door_state_matches_rendered_strings() {
        assert_eq!("No Sensor".parse::<DoorState>().unwrap(), DoorState::NoSensor);
        assert_eq!(
            "Open Forced Entry".parse::<DoorState>().unwrap(),
            DoorState::OpenForcedEntry
        );
    }

    #[test]
    fn name_sets_answer_membership() {
        assert!(is_known_site("Clovis Site"));
        assert!(!is_known_site("Fresno Site"));
        assert!(is_known_zone("MH, India"));
        assert!(is_known_device("Pune Door 57"));
        assert!(is_known_hub("Quad Hub 1363"));
        assert!(is_known_camera("Pune 6789-Pune Hub 1350"));
    }

    #[test_case("04786310a2b0-FCR12345678"; "typical reader")]
    #[test_case("AABBCCDDEEFF-X1"; "upper hex")]
    fn mac_serial_accepts(value: &str) {
        assert!(MAC_SERIAL_RE.is_match(value));
    }

    #[test_case("0478:6310:a2b0-FCR1"; "colon separated")]
    #[test_case("04786310a2b0"; "missing serial")]
    #[test_case("04786310a2b0-fcr1"; "lowercase serial")]
    fn mac_serial_rejects(value: &str) {
        assert!(!MAC_SERIAL_RE.is_match(value));
    }
}
