//! Grading configuration
//!
//! Grade scale bounds and the `GradeScale` validator built from them.

use serde::Serialize;

use crate::error::{ConfigError, GradingError};

/// Lowest grade accepted by default
pub const DEFAULT_MIN_GRADE: i32 = 1;

/// Highest grade accepted by default
pub const DEFAULT_MAX_GRADE: i32 = 10;

/// Inclusive range of accepted grades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeScale {
    min: i32,
    max: i32,
}

impl GradeScale {
    pub fn new(min: i32, max: i32) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::EmptyScale { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn contains(&self, grade: i64) -> bool {
        (i64::from(self.min)..=i64::from(self.max)).contains(&grade)
    }

    /// Accept a grade if it lies on the scale
    pub fn validate(&self, grade: i64) -> Result<i32, GradingError> {
        if !self.contains(grade) {
            return Err(GradingError::GradeOutOfRange {
                grade,
                min: self.min,
                max: self.max,
            });
        }
        // In range, so it fits the i32 bounds.
        i32::try_from(grade).map_err(|_| GradingError::GradeOutOfRange {
            grade,
            min: self.min,
            max: self.max,
        })
    }

    /// Parse a text token into a grade on this scale
    pub fn parse(&self, token: &str) -> Result<i32, GradingError> {
        let grade: i64 = token
            .trim()
            .parse()
            .map_err(|_| GradingError::NonNumericGrade(token.to_string()))?;
        self.validate(grade)
    }
}

impl Default for GradeScale {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_GRADE,
            max: DEFAULT_MAX_GRADE,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn default_scale_is_one_to_ten() {
        let scale = GradeScale::default();
        assert_eq!(scale.min(), 1);
        assert_eq!(scale.max(), 10);
    }

    #[rstest]
    #[case(1, true)]
    #[case(10, true)]
    #[case(5, true)]
    #[case(0, false)]
    #[case(11, false)]
    #[case(-3, false)]
    fn default_scale_bounds_are_inclusive(#[case] grade: i64, #[case] accepted: bool) {
        assert_eq!(GradeScale::default().validate(grade).is_ok(), accepted);
    }

    #[test]
    fn inverted_scale_is_rejected() {
        assert_eq!(
            GradeScale::new(10, 1),
            Err(ConfigError::EmptyScale { min: 10, max: 1 })
        );
    }

    #[test]
    fn single_point_scale_is_allowed() {
        let scale = GradeScale::new(5, 5).unwrap();
        assert!(scale.contains(5));
        assert!(!scale.contains(4));
    }

    #[test]
    fn parse_accepts_padded_numbers() {
        assert_eq!(GradeScale::default().parse(" 7 "), Ok(7));
    }

    #[test]
    fn parse_rejects_non_numeric_tokens() {
        assert_eq!(
            GradeScale::default().parse("ten"),
            Err(GradingError::NonNumericGrade("ten".to_string()))
        );
        assert_eq!(
            GradeScale::default().parse("9.5"),
            Err(GradingError::NonNumericGrade("9.5".to_string()))
        );
    }

    #[test]
    fn parse_rejects_out_of_range_numbers() {
        assert_eq!(
            GradeScale::default().parse("99999999999"),
            Err(GradingError::GradeOutOfRange {
                grade: 99_999_999_999,
                min: 1,
                max: 10,
            })
        );
    }
}
