// Copyright 2025 Cowboy AI, LLC.

//! Value objects for the zoo domain.
//!
//! Value Objects are immutable, compared by value, and validated on
//! construction. Deserialization goes through the same constructors, so an
//! invalid value can never be loaded from the wire either.

use crate::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowercase wire names, `Display` and `FromStr` for a closed set of variants
macro_rules! wire_enum {
    ($name:ident, $label:literal, { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $name {
            /// All variants in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The lowercase wire name
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($wire => Ok($name::$variant),)+
                    other => Err(DomainError::validation(format!(
                        concat!("unknown ", $label, ": {}"),
                        other
                    ))),
                }
            }
        }
    };
}

/// Gender of an animal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
}

wire_enum!(Gender, "gender", { Male => "male", Female => "female" });

/// Health status of an animal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Healthy, can be fed
    Healthy,
    /// Sick, must be treated before feeding
    Sick,
}

wire_enum!(HealthStatus, "health status", { Healthy => "healthy", Sick => "sick" });

/// Kind of enclosure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EnclosureType {
    /// Predator enclosure
    Predator,
    /// Herbivore enclosure
    Herbivore,
    /// Bird aviary
    Aviary,
    /// Aquarium
    Aquarium,
    /// Terrarium
    Terrarium,
}

wire_enum!(EnclosureType, "enclosure type", {
    Predator => "predator",
    Herbivore => "herbivore",
    Aviary => "aviary",
    Aquarium => "aquarium",
    Terrarium => "terrarium",
});

/// Kind of food
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FoodType {
    /// Meat
    Meat,
    /// Vegetables
    Vegetables,
    /// Fruits
    Fruits,
    /// Insects
    Insects,
    /// Seeds
    Seeds,
}

wire_enum!(FoodType, "food type", {
    Meat => "meat",
    Vegetables => "vegetables",
    Fruits => "fruits",
    Insects => "insects",
    Seeds => "seeds",
});

/// Species of an animal, never blank
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "String", into = "String")]
pub struct Species(String);

impl Species {
    /// Create a species, rejecting blank input
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("species cannot be empty"));
        }
        Ok(Self(value))
    }

    /// The species name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Species {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Species> for String {
    fn from(species: Species) -> Self {
        species.0
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of an animal, never blank
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "String", into = "String")]
pub struct AnimalName(String);

impl AnimalName {
    /// Create a name, rejecting blank input
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("animal name cannot be empty"));
        }
        Ok(Self(value))
    }

    /// The name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AnimalName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AnimalName> for String {
    fn from(name: AnimalName) -> Self {
        name.0
    }
}

impl fmt::Display for AnimalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Birth date of an animal, never in the future
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "DateTime<Utc>", into = "DateTime<Utc>")]
pub struct BirthDate(DateTime<Utc>);

impl BirthDate {
    /// Create a birth date, rejecting dates after now
    pub fn new(value: DateTime<Utc>) -> DomainResult<Self> {
        if value > Utc::now() {
            return Err(DomainError::validation("birth date cannot be in the future"));
        }
        Ok(Self(value))
    }

    /// The birth instant
    pub fn value(&self) -> DateTime<Utc> {
        self.0
    }
}

impl TryFrom<DateTime<Utc>> for BirthDate {
    type Error = DomainError;

    fn try_from(value: DateTime<Utc>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BirthDate> for DateTime<Utc> {
    fn from(date: BirthDate) -> Self {
        date.0
    }
}

fn positive(value: i64, what: &str) -> DomainResult<usize> {
    if value <= 0 {
        return Err(DomainError::validation(format!("{what} must be positive, got {value}")));
    }
    usize::try_from(value)
        .map_err(|_| DomainError::validation(format!("{what} {value} is out of range")))
}

/// Size of an enclosure, strictly positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "i64", into = "i64")]
pub struct EnclosureSize(usize);

impl EnclosureSize {
    /// Create a size, rejecting zero and negatives
    pub fn new(value: i64) -> DomainResult<Self> {
        positive(value, "enclosure size").map(Self)
    }

    /// The size
    pub fn value(&self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for EnclosureSize {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EnclosureSize> for i64 {
    fn from(size: EnclosureSize) -> Self {
        size.0 as i64
    }
}

/// Maximum number of simultaneous occupants, strictly positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "i64", into = "i64")]
pub struct Capacity(usize);

impl Capacity {
    /// Create a capacity, rejecting zero and negatives
    pub fn new(value: i64) -> DomainResult<Self> {
        positive(value, "capacity").map(Self)
    }

    /// The capacity
    pub fn value(&self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for Capacity {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Capacity> for i64 {
    fn from(capacity: Capacity) -> Self {
        capacity.0 as i64
    }
}

/// Scheduled feeding instant; any instant is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct FeedingTime(DateTime<Utc>);

impl FeedingTime {
    /// Wrap an instant
    pub fn new(value: DateTime<Utc>) -> Self {
        Self(value)
    }

    /// The instant
    pub fn value(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for FeedingTime {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use test_case::test_case;

    #[test_case("Lion", true; "plain species")]
    #[test_case("", false; "empty species")]
    #[test_case("   ", false; "blank species")]
    fn species_validation(input: &str, ok: bool) {
        assert_eq!(Species::new(input).is_ok(), ok);
    }

    #[test_case(1, true)]
    #[test_case(100, true)]
    #[test_case(0, false)]
    #[test_case(-5, false)]
    fn capacity_and_size_validation(value: i64, ok: bool) {
        assert_eq!(Capacity::new(value).is_ok(), ok);
        assert_eq!(EnclosureSize::new(value).is_ok(), ok);
    }

    #[test]
    fn birth_date_rejects_future() {
        assert!(BirthDate::new(Utc::now() - Duration::days(365)).is_ok());

        let err = BirthDate::new(Utc::now() + Duration::days(1)).unwrap_err();
        assert!(err.is_validation_error());
    }

    #[test_case("male", Gender::Male)]
    #[test_case("Female", Gender::Female)]
    fn gender_parses_wire_names(input: &str, expected: Gender) {
        assert_eq!(input.parse::<Gender>().unwrap(), expected);
    }

    #[test]
    fn unknown_enum_value_is_validation_error() {
        let err = "dragonfruit".parse::<FoodType>().unwrap_err();
        assert_eq!(
            err,
            DomainError::ValidationError("unknown food type: dragonfruit".to_string())
        );
    }

    #[test]
    fn enums_display_their_wire_names() {
        for food in FoodType::ALL {
            assert_eq!(food.to_string().parse::<FoodType>().unwrap(), *food);
        }
        assert_eq!(EnclosureType::Aviary.to_string(), "aviary");
        assert_eq!(HealthStatus::Sick.as_str(), "sick");
    }

    #[test]
    fn enums_serialize_lowercase() {
        let json = serde_json::to_string(&EnclosureType::Terrarium).unwrap();
        assert_eq!(json, "\"terrarium\"");
    }

    #[test]
    fn deserialization_validates() {
        assert!(serde_json::from_str::<Capacity>("3").is_ok());
        assert!(serde_json::from_str::<Capacity>("0").is_err());
        assert!(serde_json::from_str::<AnimalName>("\"\"").is_err());
        assert_eq!(
            serde_json::from_str::<Species>("\"Zebra\"").unwrap().as_str(),
            "Zebra"
        );
    }
}
