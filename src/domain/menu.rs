//! Meal selections offered at the event.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::guest::StoredLabel;

/// A meal an attendee can choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MenuItem {
    Beef,
    Chicken,
    Fish,
    Pork,
    Pasta,
    Vegan,
}

impl MenuItem {
    /// Every meal, in menu order.
    pub const ALL: [MenuItem; 6] = [
        MenuItem::Beef,
        MenuItem::Chicken,
        MenuItem::Fish,
        MenuItem::Pork,
        MenuItem::Pasta,
        MenuItem::Vegan,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beef => "BEEF",
            Self::Chicken => "CHICKEN",
            Self::Fish => "FISH",
            Self::Pork => "PORK",
            Self::Pasta => "PASTA",
            Self::Vegan => "VEGAN",
        }
    }
}

impl StoredLabel for MenuItem {
    const VARIANTS: &'static [Self] = &Self::ALL;

    fn stored_label(self) -> &'static str {
        self.label()
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MenuItem {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|item| item.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::UnknownMenuItem(wanted.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("beef".parse::<MenuItem>().unwrap(), MenuItem::Beef);
        assert_eq!(" Vegan ".parse::<MenuItem>().unwrap(), MenuItem::Vegan);
    }

    #[test]
    fn unknown_menu_item_is_rejected() {
        assert_eq!(
            "LOBSTER".parse::<MenuItem>(),
            Err(ValidationError::UnknownMenuItem("LOBSTER".into()))
        );
    }

    #[test]
    fn menu_order_is_stable() {
        let labels: Vec<_> = MenuItem::ALL.iter().map(|item| item.label()).collect();
        assert_eq!(labels, ["BEEF", "CHICKEN", "FISH", "PORK", "PASTA", "VEGAN"]);
    }
}
