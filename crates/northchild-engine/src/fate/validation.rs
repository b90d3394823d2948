use super::domain::{Animal, AnimalPoints, MAX_POINTS_PER_ANIMAL, TOTAL_POINTS};
use serde::{Serialize, Serializer};

/// A violated allocation constraint. Violations are collected, never raised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Total points must be 15. Currently {total}.")]
    TotalMismatch { total: i64 },
    #[error("{0} must be >= 0.")]
    Negative(Animal),
    #[error("{0} must be <= 4.")]
    OverCap(Animal),
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Runs every check and returns all violations in a stable order: the total
/// first, then per-animal checks in allocation order.
pub fn validate(points: &AnimalPoints) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let total = points.total();
    if total != i64::from(TOTAL_POINTS) {
        errors.push(ValidationError::TotalMismatch { total });
    }

    for (animal, value) in points.iter() {
        if value < 0 {
            errors.push(ValidationError::Negative(animal));
        }
        if value > MAX_POINTS_PER_ANIMAL {
            errors.push(ValidationError::OverCap(animal));
        }
    }

    errors
}
