//! Distance units and conversion factors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DispatchError;

/// Unit for reported distances.
///
/// All great-circle math happens in kilometers; the unit applies a single
/// conversion factor to the result. Parsing is case-insensitive and accepts
/// the common aliases (`kilometers`, `metres`, `m`, `ft`).
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::DistanceUnit;
///
/// assert_eq!("km".parse::<DistanceUnit>().unwrap(), DistanceUnit::Kilometers);
/// assert_eq!("MILES".parse::<DistanceUnit>().unwrap(), DistanceUnit::Miles);
/// assert_eq!("m".parse::<DistanceUnit>().unwrap(), DistanceUnit::Meters);
/// assert!("furlongs".parse::<DistanceUnit>().is_err());
///
/// assert_eq!(DistanceUnit::default(), DistanceUnit::Kilometers);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    /// Kilometers (canonical unit, factor 1.0).
    #[default]
    #[serde(rename = "km", alias = "kilometers")]
    Kilometers,
    /// Statute miles.
    Miles,
    /// Meters.
    #[serde(alias = "metres", alias = "m")]
    Meters,
    /// Feet.
    #[serde(alias = "ft")]
    Feet,
}

impl DistanceUnit {
    /// Multiplier applied to a distance computed in kilometers.
    pub fn factor(&self) -> f64 {
        match self {
            DistanceUnit::Kilometers => 1.0,
            DistanceUnit::Miles => 0.621371,
            DistanceUnit::Meters => 1000.0,
            DistanceUnit::Feet => 3280.84,
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "km" | "kilometers" => Ok(DistanceUnit::Kilometers),
            "miles" => Ok(DistanceUnit::Miles),
            "meters" | "metres" | "m" => Ok(DistanceUnit::Meters),
            "feet" | "ft" => Ok(DistanceUnit::Feet),
            _ => Err(DispatchError::InvalidUnit(s.to_string())),
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "miles",
            DistanceUnit::Meters => "meters",
            DistanceUnit::Feet => "feet",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factors() {
        assert_eq!(DistanceUnit::Kilometers.factor(), 1.0);
        assert_eq!(DistanceUnit::Miles.factor(), 0.621371);
        assert_eq!(DistanceUnit::Meters.factor(), 1000.0);
        assert_eq!(DistanceUnit::Feet.factor(), 3280.84);
    }

    #[test]
    fn test_parse_aliases() {
        for (s, unit) in [
            ("km", DistanceUnit::Kilometers),
            ("kilometers", DistanceUnit::Kilometers),
            ("miles", DistanceUnit::Miles),
            ("meters", DistanceUnit::Meters),
            ("metres", DistanceUnit::Meters),
            ("m", DistanceUnit::Meters),
            ("feet", DistanceUnit::Feet),
            ("ft", DistanceUnit::Feet),
        ] {
            assert_eq!(s.parse::<DistanceUnit>().expect(s), unit);
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(
            "KM".parse::<DistanceUnit>().expect("uppercase km"),
            DistanceUnit::Kilometers
        );
        assert_eq!(
            "Feet".parse::<DistanceUnit>().expect("mixed-case feet"),
            DistanceUnit::Feet
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "lightyears".parse::<DistanceUnit>().unwrap_err();
        assert_eq!(err, DispatchError::InvalidUnit("lightyears".to_string()));
    }

    #[test]
    fn test_display_round_trip() {
        for unit in [
            DistanceUnit::Kilometers,
            DistanceUnit::Miles,
            DistanceUnit::Meters,
            DistanceUnit::Feet,
        ] {
            let parsed: DistanceUnit = unit.to_string().parse().expect("display parses back");
            assert_eq!(parsed, unit);
        }
    }

    #[test]
    fn test_serde_shape() {
        assert_eq!(
            serde_json::to_string(&DistanceUnit::Kilometers).expect("serializable"),
            "\"km\""
        );
        let unit: DistanceUnit = serde_json::from_str("\"ft\"").expect("alias accepted");
        assert_eq!(unit, DistanceUnit::Feet);
    }
}
