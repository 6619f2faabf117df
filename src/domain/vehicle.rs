use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Car,
    Motorcycle,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCondition {
    New,
    Old,
}

/// Returned when a string names no known vehicle type or condition.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct UnknownVariant(pub String);

impl FromStr for VehicleType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "car" => Ok(Self::Car),
            "motorcycle" => Ok(Self::Motorcycle),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

impl FromStr for VehicleCondition {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new" => Ok(Self::New),
            "old" => Ok(Self::Old),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Car => f.write_str("car"),
            Self::Motorcycle => f.write_str("motorcycle"),
        }
    }
}

impl fmt::Display for VehicleCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::New => f.write_str("new"),
            Self::Old => f.write_str("old"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_type_parse_ignores_case() {
        assert_eq!("CAR".parse::<VehicleType>(), Ok(VehicleType::Car));
        assert_eq!("Motorcycle".parse::<VehicleType>(), Ok(VehicleType::Motorcycle));
        assert!("truck".parse::<VehicleType>().is_err());
    }

    #[test]
    fn test_vehicle_condition_parse_ignores_case() {
        assert_eq!("New".parse::<VehicleCondition>(), Ok(VehicleCondition::New));
        assert_eq!("old".parse::<VehicleCondition>(), Ok(VehicleCondition::Old));
        assert_eq!(
            "used".parse::<VehicleCondition>(),
            Err(UnknownVariant("used".to_string()))
        );
    }
}
