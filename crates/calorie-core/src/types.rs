//! # Domain Types
//!
//! Core domain types used throughout the calorie tracker.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │     ItemId      │   │    Calories     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │──►│  u64            │   │  i64, >= 0      │       │
//! │  │  name           │   │  store-assigned │   │  parsed from    │       │
//! │  │  calories       │──────────────────────────►  raw input     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Shape
//! `Item` serializes to `{"id": 0, "name": "Egg", "calories": 300}`; both
//! newtypes serialize as bare integers so the persisted snapshot stays a
//! plain array of records.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::validation::{parse_calories, validate_calories, ValidationResult};

// =============================================================================
// Item Id
// =============================================================================

/// Store-assigned item identifier.
///
/// Ids are handed out by [`crate::ItemStore::add`] and never change after
/// creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// Wraps a raw id.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        ItemId(raw)
    }

    /// Returns the raw id.
    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns the id that follows this one, or `None` at `u64::MAX`.
    #[inline]
    pub const fn next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(ItemId(raw)),
            None => None,
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(raw: u64) -> Self {
        ItemId(raw)
    }
}

// =============================================================================
// Calories
// =============================================================================

/// A calorie count for a single item.
///
/// Always constructed through validation, so a `Calories` value is never
/// negative and never above [`crate::MAX_ITEM_CALORIES`]. Deserialization
/// goes through the same check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Calories(i64);

impl Calories {
    /// Creates a calorie count, validating its range.
    pub fn new(count: i64) -> ValidationResult<Self> {
        validate_calories(count)?;
        Ok(Calories(count))
    }

    /// Zero calories.
    #[inline]
    pub const fn zero() -> Self {
        Calories(0)
    }

    /// Returns the raw count.
    #[inline]
    pub const fn count(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Calories {
    type Error = ValidationError;

    fn try_from(count: i64) -> ValidationResult<Self> {
        Calories::new(count)
    }
}

impl From<Calories> for i64 {
    fn from(calories: Calories) -> Self {
        calories.0
    }
}

impl fmt::Display for Calories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Conversion from the raw shapes calories arrive in.
///
/// The presentation surface hands over strings straight from an input
/// field; programmatic callers pass integers.
pub trait IntoCalories {
    fn into_calories(self) -> ValidationResult<Calories>;
}

impl IntoCalories for Calories {
    fn into_calories(self) -> ValidationResult<Calories> {
        Ok(self)
    }
}

impl IntoCalories for i64 {
    fn into_calories(self) -> ValidationResult<Calories> {
        Calories::new(self)
    }
}

impl IntoCalories for i32 {
    fn into_calories(self) -> ValidationResult<Calories> {
        Calories::new(i64::from(self))
    }
}

impl IntoCalories for &str {
    fn into_calories(self) -> ValidationResult<Calories> {
        parse_calories(self)
    }
}

impl IntoCalories for &String {
    fn into_calories(self) -> ValidationResult<Calories> {
        parse_calories(self)
    }
}

impl IntoCalories for String {
    fn into_calories(self) -> ValidationResult<Calories> {
        parse_calories(&self)
    }
}

// =============================================================================
// Item
// =============================================================================

/// A single tracked food entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// Store-assigned identifier, immutable after creation.
    #[ts(type = "number")]
    pub id: ItemId,

    /// Display name.
    pub name: String,

    /// Calorie count.
    #[ts(type = "number")]
    pub calories: Calories,
}

impl Item {
    /// Creates an item.
    pub fn new(id: ItemId, name: impl Into<String>, calories: Calories) -> Self {
        Item {
            id,
            name: name.into(),
            calories,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
