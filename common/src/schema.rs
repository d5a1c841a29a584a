//! Field rules for [`Breed`](crate::model::breed::Breed) records.
//!
//! Validation happens at write time. The upper bound for `year` is derived from
//! the wall clock on every call, so the accepted range moves forward when the
//! calendar year changes without needing a restart.

use crate::model::breed::{NewBreed, ValidBreed, DEFAULT_IMAGE};
use chrono::{Datelike, Utc};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Earliest accepted breed recognition year.
pub const MIN_YEAR: i32 = 1700;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("breed field `{0}` is required")]
    MissingField(&'static str),

    #[error("breed field `{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("breed field `year` is required")]
    MissingYear,

    #[error("breed year {year} is outside the accepted range {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },
}

/// Accepted `year` values when the current calendar year is `current_year`.
pub fn year_range(current_year: i32) -> RangeInclusive<i32> {
    MIN_YEAR..=current_year + 1
}

impl NewBreed {
    /// Validates against the current UTC year.
    pub fn validate(&self) -> Result<ValidBreed, ValidationError> {
        self.validate_for_year(Utc::now().year())
    }

    /// Validates as if the current calendar year were `current_year`.
    pub fn validate_for_year(&self, current_year: i32) -> Result<ValidBreed, ValidationError> {
        let title = required_text("title", self.title.as_deref())?;
        let origin = required_text("origin", self.origin.as_deref())?;
        let image = required_text("image", Some(self.image.as_deref().unwrap_or(DEFAULT_IMAGE)))?;
        let description = required_text("description", self.description.as_deref())?;

        let year = self.year.ok_or(ValidationError::MissingYear)?;
        let range = year_range(current_year);
        if !range.contains(&year) {
            return Err(ValidationError::YearOutOfRange {
                year,
                min: *range.start(),
                max: *range.end(),
            });
        }

        Ok(ValidBreed {
            title,
            origin,
            image,
            description,
            year,
        })
    }
}

fn required_text(field: &'static str, value: Option<&str>) -> Result<String, ValidationError> {
    match value {
        None => Err(ValidationError::MissingField(field)),
        Some(v) if v.trim().is_empty() => Err(ValidationError::EmptyField(field)),
        Some(v) => Ok(v.to_string()),
    }
}
