//! Record types used by the drills.
//!
//! Plain immutable values with structural equality. The query engine itself is generic and does
//! not depend on any of these.

use serde::{Deserialize, Serialize};

use crate::error::{DrillError, DrillResult};
use crate::optional::Optional;

/// Broad category of a [`Dish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DishKind {
    Meat,
    Fish,
    Other,
}

/// A dish on a menu.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,
    pub vegetarian: bool,
    pub calories: u32,
    pub kind: DishKind,
    /// Country the dish comes from, when known.
    #[serde(default)]
    pub origin: Option<String>,
}

impl Dish {
    pub fn new(name: impl Into<String>, vegetarian: bool, calories: u32, kind: DishKind) -> Self {
        Self {
            name: name.into(),
            vegetarian,
            calories,
            kind,
            origin: None,
        }
    }

    /// Set the country of origin.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// The dish's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` for vegetarian dishes.
    pub fn is_vegetarian(&self) -> bool {
        self.vegetarian
    }

    /// The dish's country of origin.
    ///
    /// Fails with [`DrillError::UnknownOrigin`] when none is recorded.
    pub fn country_of_origin(&self) -> DrillResult<&str> {
        match self.origin.as_deref() {
            Some(origin) => Ok(origin),
            None => Err(DrillError::UnknownOrigin {
                dish: self.name.clone(),
            }),
        }
    }
}

/// A trader and the city they work in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Trader {
    pub name: String,
    pub city: String,
}

impl Trader {
    pub fn new(name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
        }
    }
}

/// A single trade.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    pub trader: Trader,
    pub year: u32,
    pub value: u32,
}

impl Transaction {
    pub fn new(trader: Trader, year: u32, value: u32) -> Self {
        Self {
            trader,
            year,
            value,
        }
    }
}

/// An insurance policy, identified by its insurer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Insurance {
    pub name: String,
}

impl Insurance {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The insurer's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A car that may or may not be insured.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Car {
    pub model: String,
    #[serde(default)]
    pub insurance: Option<Insurance>,
}

impl Car {
    pub fn new(model: impl Into<String>, insurance: Option<Insurance>) -> Self {
        Self {
            model: model.into(),
            insurance,
        }
    }

    /// The car's insurance, wrapped for chaining.
    pub fn insurance(&self) -> Optional<&Insurance> {
        Optional::wrap(self.insurance.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::{Car, Dish, DishKind, Insurance};
    use crate::DrillError;

    #[test]
    fn country_of_origin_fails_when_unknown() {
        let dish = Dish::new("rice", true, 350, DishKind::Other);
        match dish.country_of_origin() {
            Err(DrillError::UnknownOrigin { dish }) => assert_eq!(dish, "rice"),
            other => panic!("unexpected: {other:?}"),
        }
        let dish = dish.with_origin("China");
        assert_eq!(dish.country_of_origin().unwrap(), "China");
    }

    #[test]
    fn car_insurance_is_optional() {
        let insured = Car::new("Roadster", Some(Insurance::new("Acme")));
        let insurer = insured.insurance().map(Insurance::name);
        assert_eq!(insurer.into_option(), Some("Acme"));
        assert!(Car::new("Hatchback", None).insurance().is_absent());
    }

    #[test]
    fn dish_json_defaults_missing_origin() {
        let json = r#"{"name":"pizza","vegetarian":true,"calories":550,"kind":"other"}"#;
        let dish: Dish = serde_json::from_str(json).unwrap();
        assert_eq!(dish.origin, None);
        assert_eq!(dish.kind, DishKind::Other);
    }
}
