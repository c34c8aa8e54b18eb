//! Sample datasets.
//!
//! Each fixture is a plain value built by the caller (or test) and passed into the drills. The
//! `standard()` constructors return the classic sample data; `from_json_str` accepts
//! caller-supplied data in the same shape.

use serde::{Deserialize, Serialize};

use crate::error::DrillResult;
use crate::records::{Car, Dish, DishKind, Insurance, Trader, Transaction};
use crate::types::Sequence;

/// A restaurant menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Menu {
    pub dishes: Sequence<Dish>,
}

impl Menu {
    pub fn new(dishes: Vec<Dish>) -> Self {
        Self {
            dishes: Sequence::new(dishes),
        }
    }

    /// The nine-dish sample menu. Chicken and season fruit have no recorded origin.
    pub fn standard() -> Self {
        Self::new(vec![
            Dish::new("pork", false, 800, DishKind::Meat)
                .with_origin("Germany"),
            Dish::new("beef", false, 700, DishKind::Meat)
                .with_origin("Argentina"),
            Dish::new("chicken", false, 400, DishKind::Meat),
            Dish::new("french fries", true, 530, DishKind::Other)
                .with_origin("Belgium"),
            Dish::new("rice", true, 350, DishKind::Other)
                .with_origin("China"),
            Dish::new("season fruit", true, 120, DishKind::Other),
            Dish::new("pizza", true, 550, DishKind::Other)
                .with_origin("Italy"),
            Dish::new("prawns", false, 300, DishKind::Fish)
                .with_origin("Thailand"),
            Dish::new("salmon", false, 450, DishKind::Fish)
                .with_origin("Norway"),
        ])
    }

    /// Parse a menu from a JSON array of dishes.
    pub fn from_json_str(input: &str) -> DrillResult<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

/// Traders and their transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeBook {
    pub transactions: Sequence<Transaction>,
}

impl TradeBook {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: Sequence::new(transactions),
        }
    }

    /// Four traders, six transactions across 2011 and 2012.
    pub fn standard() -> Self {
        let raoul = Trader::new("Raoul", "Cambridge");
        let mario = Trader::new("Mario", "Milan");
        let alan = Trader::new("Alan", "Cambridge");
        let brian = Trader::new("Brian", "Cambridge");

        Self::new(vec![
            Transaction::new(brian, 2011, 300),
            Transaction::new(raoul.clone(), 2012, 1000),
            Transaction::new(raoul, 2011, 400),
            Transaction::new(mario.clone(), 2012, 710),
            Transaction::new(mario, 2012, 700),
            Transaction::new(alan, 2012, 950),
        ])
    }

    /// Parse a trade book from a JSON array of transactions.
    pub fn from_json_str(input: &str) -> DrillResult<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

/// A handful of cars, insured and not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Garage {
    pub cars: Sequence<Car>,
}

impl Garage {
    pub fn new(cars: Vec<Car>) -> Self {
        Self {
            cars: Sequence::new(cars),
        }
    }

    /// One insured car and one uninsured.
    pub fn standard() -> Self {
        Self::new(vec![
            Car::new("Roadster", Some(Insurance::new("Cambridge Mutual"))),
            Car::new("Hatchback", None),
        ])
    }

    /// Parse a garage from a JSON array of cars.
    pub fn from_json_str(input: &str) -> DrillResult<Self> {
        Ok(serde_json::from_str(input)?)
    }
}
