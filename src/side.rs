//! Position hints for a floating badge.
//!
//! [`Side`] is the strict set of anchors a badge understands. [`Placement`]
//! is what a badge is actually rendered with: hosts may hand us arbitrary
//! strings, and anything outside the known anchors becomes
//! [`Placement::Floating`] instead of an error.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use yew::html::IntoPropValue;

use crate::error::BadgeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Side {
    /// Bottom-left corner of the positioned ancestor.
    Left,
    /// Top-right corner of the positioned ancestor.
    Right,
    /// Bottom-right corner of the positioned ancestor.
    BottomRight,
}

impl Side {
    pub const ALL: [Side; 3] = [Side::Left, Side::Right, Side::BottomRight];

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = BadgeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Side::ALL
            .into_iter()
            .find(|side| side.as_str() == raw)
            .ok_or_else(|| BadgeError::UnknownSide(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Placement {
    Anchored(Side),
    /// No positional offset; only the shared visual effects apply.
    #[default]
    Floating,
}

impl Placement {
    /// Lenient counterpart of [`Side::from_str`]: unknown sides float.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<Side>() {
            Ok(side) => Placement::Anchored(side),
            Err(err) => {
                log::debug!("{}; rendering badge without positional offset", err);
                Placement::Floating
            }
        }
    }

    pub fn side(self) -> Option<Side> {
        match self {
            Placement::Anchored(side) => Some(side),
            Placement::Floating => None,
        }
    }
}

impl From<Side> for Placement {
    fn from(side: Side) -> Self {
        Placement::Anchored(side)
    }
}

impl IntoPropValue<Placement> for Side {
    fn into_prop_value(self) -> Placement {
        Placement::Anchored(self)
    }
}

impl IntoPropValue<Placement> for &str {
    fn into_prop_value(self) -> Placement {
        Placement::parse(self)
    }
}

impl Serialize for Placement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Placement::Anchored(side) => serializer.serialize_str(side.as_str()),
            Placement::Floating => serializer.serialize_str("floating"),
        }
    }
}

impl<'de> Deserialize<'de> for Placement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Placement::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_names_round_trip() {
        for side in Side::ALL {
            assert_eq!(side.as_str().parse::<Side>(), Ok(side));
        }
    }

    #[test]
    fn test_side_names_must_match_exactly() {
        for raw in ["LEFT", " left ", "Bottom-Right", "right\n"] {
            assert!(raw.parse::<Side>().is_err(), "{raw:?} should not parse");
            assert_eq!(Placement::parse(raw), Placement::Floating);
        }
    }

    #[test]
    fn test_unknown_side_is_an_error() {
        assert_eq!(
            "up".parse::<Side>(),
            Err(BadgeError::UnknownSide("up".to_string()))
        );
        assert!("bottom_right".parse::<Side>().is_err());
        assert!("".parse::<Side>().is_err());
    }

    #[test]
    fn test_placement_falls_back_to_floating() {
        assert_eq!(Placement::parse("up"), Placement::Floating);
        assert_eq!(Placement::parse("right"), Placement::Anchored(Side::Right));
        assert_eq!(Placement::Floating.side(), None);
    }

    #[test]
    fn test_placement_deserializes_leniently() {
        let placements: Vec<Placement> =
            serde_json::from_str(r#"["left", "bottom-right", "up"]"#).unwrap();
        assert_eq!(
            placements,
            vec![
                Placement::Anchored(Side::Left),
                Placement::Anchored(Side::BottomRight),
                Placement::Floating,
            ]
        );
    }

    #[test]
    fn test_placement_serializes_side_name() {
        let json = serde_json::to_string(&Placement::Anchored(Side::BottomRight)).unwrap();
        assert_eq!(json, r#""bottom-right""#);
    }
}
