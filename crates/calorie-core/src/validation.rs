//! # Validation Module
//!
//! Input validation and calorie parsing for the calorie tracker.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation surface                                         │
//! │  └── Hands over raw strings from the item form                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Tracker (orchestrator)                                       │
//! │  ├── Blank name / calories → submission ignored                        │
//! │  └── validate_item_name                                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: ItemStore                                                    │
//! │  └── parse_calories (every add / update)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Calorie Parsing
//! Calorie input is read as an integer prefix, the way a form field is
//! usually interpreted: surrounding whitespace is ignored, an optional sign is
//! accepted, and parsing stops at the first non-digit. Input with no leading
//! digits is rejected rather than coerced into a sentinel value, so the
//! running total can never be poisoned.
//!
//! ```rust
//! use calorie_core::validation::parse_calories;
//!
//! assert_eq!(parse_calories("300").unwrap().count(), 300);
//! assert_eq!(parse_calories(" 250kcal").unwrap().count(), 250);
//! assert_eq!(parse_calories("12.9").unwrap().count(), 12);
//! assert!(parse_calories("lots").is_err());
//! ```

use crate::error::ValidationError;
use crate::types::Calories;
use crate::{MAX_ITEM_CALORIES, MAX_ITEM_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most `MAX_ITEM_NAME_LEN` characters
///
/// ## Returns
/// The trimmed name.
pub fn validate_item_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a calorie count.
///
/// ## Rules
/// - Must be non-negative (zero is allowed: water, black coffee)
/// - Must not exceed `MAX_ITEM_CALORIES`
pub fn validate_calories(count: i64) -> ValidationResult<()> {
    if !(0..=MAX_ITEM_CALORIES).contains(&count) {
        return Err(out_of_range());
    }

    Ok(())
}

/// Parses raw calorie input into a validated [`Calories`].
///
/// ## Rules
/// ```text
/// "  300 "   → 300
/// "300kcal"  → 300          (digits prefix)
/// "+42"      → 42
/// "12.9"     → 12           (stops at '.')
/// ""         → Required
/// "abc"      → InvalidFormat
/// "-5"       → OutOfRange
/// ```
pub fn parse_calories(raw: &str) -> ValidationResult<Calories> {
    let trimmed = raw.trim_start();

    if trimmed.trim_end().is_empty() {
        return Err(ValidationError::Required {
            field: "calories".to_string(),
        });
    }

    let (negative, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digit_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digit_len == 0 {
        return Err(ValidationError::InvalidFormat {
            field: "calories".to_string(),
            reason: "must start with a whole number".to_string(),
        });
    }

    // Digits alone can still overflow i64; anything that large is out of range.
    let magnitude: i64 = unsigned[..digit_len].parse().map_err(|_| out_of_range())?;
    let count = if negative { -magnitude } else { magnitude };

    Calories::new(count)
}

fn out_of_range() -> ValidationError {
    ValidationError::OutOfRange {
        field: "calories".to_string(),
        min: 0,
        max: MAX_ITEM_CALORIES,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
