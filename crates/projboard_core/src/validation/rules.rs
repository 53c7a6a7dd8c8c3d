//! Constraint checks for one input value.
//!
//! # Invariants
//! - Constraints are combined with logical AND; absent ones are skipped.
//! - `min_length` and `min` are exclusive bounds; `max_length` and `max` are
//!   inclusive.
//! - Length rules apply to text only, range rules to numbers only.
//! - Conflicting constraint combinations are not reported, just evaluated.

use std::fmt::{Display, Formatter};

/// Raw value under validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationValue {
    Text(String),
    Number(f64),
}

impl Display for ValidationValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Number(value) if value.is_nan() => f.write_str("NaN"),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

/// A value plus the constraints it must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: ValidationValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    /// Text value with no constraints.
    pub fn text(value: impl Into<String>) -> Self {
        Self::unconstrained(ValidationValue::Text(value.into()))
    }

    /// Numeric value with no constraints.
    pub fn number(value: f64) -> Self {
        Self::unconstrained(ValidationValue::Number(value))
    }

    fn unconstrained(value: ValidationValue) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Returns whether `input` satisfies every constraint it declares.
pub fn validate(input: &Validatable) -> bool {
    let mut is_valid = true;

    if input.required {
        is_valid = is_valid && trimmed_len(&input.value.to_string()) != 0;
    }

    match &input.value {
        ValidationValue::Text(text) => {
            let len = trimmed_len(text);
            if let Some(min_length) = input.min_length {
                is_valid = is_valid && len > min_length;
            }
            if let Some(max_length) = input.max_length {
                is_valid = is_valid && len <= max_length;
            }
        }
        ValidationValue::Number(number) => {
            // NaN fails both comparisons, matching numeric coercion of junk input.
            if let Some(min) = input.min {
                is_valid = is_valid && *number > min;
            }
            if let Some(max) = input.max {
                is_valid = is_valid && *number <= max;
            }
        }
    }

    is_valid
}

/// Counts Unicode scalar values, not UTF-16 units: one emoji is length 1.
fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}
