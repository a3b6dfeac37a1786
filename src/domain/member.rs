//! Attendee membership categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::guest::StoredLabel;

/// The category an attendee is registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberType {
    Guest,
    Member,
    #[serde(rename = "Master of Ceremonies")]
    MasterOfCeremonies,
    #[serde(rename = "Keynote Speaker")]
    KeynoteSpeaker,
    #[serde(rename = "Kitchen Staff")]
    KitchenStaff,
    Waiter,
    Usher,
}

impl MemberType {
    /// Every category, in the order front ends present them.
    pub const ALL: [MemberType; 7] = [
        MemberType::Guest,
        MemberType::Member,
        MemberType::MasterOfCeremonies,
        MemberType::KeynoteSpeaker,
        MemberType::KitchenStaff,
        MemberType::Waiter,
        MemberType::Usher,
    ];

    /// The label stored in the table and shown in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Guest => "Guest",
            Self::Member => "Member",
            Self::MasterOfCeremonies => "Master of Ceremonies",
            Self::KeynoteSpeaker => "Keynote Speaker",
            Self::KitchenStaff => "Kitchen Staff",
            Self::Waiter => "Waiter",
            Self::Usher => "Usher",
        }
    }

    /// Whether the category counts toward the attendee report's staff total.
    ///
    /// Waiters are not counted in any summary bucket.
    #[must_use]
    pub const fn is_staff(self) -> bool {
        matches!(
            self,
            Self::MasterOfCeremonies | Self::KeynoteSpeaker | Self::Usher | Self::KitchenStaff
        )
    }
}

impl StoredLabel for MemberType {
    const VARIANTS: &'static [Self] = &Self::ALL;

    fn stored_label(self) -> &'static str {
        self.label()
    }
}

impl fmt::Display for MemberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MemberType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|kind| normalize(kind.label()) == wanted)
            .ok_or_else(|| ValidationError::UnknownMemberType(s.trim().to_string()))
    }
}

fn normalize(label: &str) -> String {
    label
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_str() {
        for kind in MemberType::ALL {
            assert_eq!(kind.label().parse::<MemberType>().unwrap(), kind);
        }
    }

    #[test]
    fn parsing_ignores_case_and_separators() {
        assert_eq!(
            "keynote-speaker".parse::<MemberType>().unwrap(),
            MemberType::KeynoteSpeaker
        );
        assert_eq!(
            " master_of_CEREMONIES ".parse::<MemberType>().unwrap(),
            MemberType::MasterOfCeremonies
        );
    }

    #[test]
    fn unknown_member_type_is_rejected() {
        assert_eq!(
            "Bouncer".parse::<MemberType>(),
            Err(ValidationError::UnknownMemberType("Bouncer".into()))
        );
    }

    #[test]
    fn waiter_is_not_staff() {
        assert!(!MemberType::Waiter.is_staff());
        assert!(MemberType::Usher.is_staff());
        assert!(!MemberType::Guest.is_staff());
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&MemberType::KitchenStaff).unwrap();
        assert_eq!(json, "\"Kitchen Staff\"");
    }
}
