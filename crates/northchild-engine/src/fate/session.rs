use super::domain::{
    Animal, AnimalPoints, AugmentKind, Augments, MAX_AUGMENTS, MAX_POINTS_PER_ANIMAL,
    TOTAL_POINTS,
};
use super::{evaluate, tables::FATES, FateReading};
use tracing::debug;

/// Refusals raised by [`AllocationSession`] mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session is sealed; allocation can no longer change")]
    Sealed,
    #[error("session was already sealed")]
    AlreadySealed,
    #[error("all 15 points are already placed")]
    BudgetExhausted,
    #[error("{0} already holds the maximum of 4 points")]
    AnimalAtCap(Animal),
    #[error("{0} holds no points to release")]
    AnimalEmpty(Animal),
    #[error("{0:?} stack is full")]
    AugmentAtCap(AugmentKind),
    #[error("{0:?} stack is empty")]
    AugmentEmpty(AugmentKind),
    #[error("{remaining} point(s) remain unplaced")]
    Incomplete { remaining: i64 },
}

/// Interactive point allocation that enforces the budget while building,
/// then seals once into a reading.
#[derive(Debug, Clone, Default)]
pub struct AllocationSession {
    points: AnimalPoints,
    augments: Augments,
    sealed: bool,
}

impl AllocationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &AnimalPoints {
        &self.points
    }

    pub fn augments(&self) -> Augments {
        self.augments
    }

    pub fn total(&self) -> i64 {
        self.points.total()
    }

    pub fn remaining(&self) -> i64 {
        i64::from(TOTAL_POINTS) - self.total()
    }

    pub fn is_ready(&self) -> bool {
        self.remaining() == 0
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub fn allocate(&mut self, animal: Animal) -> Result<i32, SessionError> {
        self.ensure_open()?;
        if self.remaining() <= 0 {
            return Err(SessionError::BudgetExhausted);
        }
        let current = self.points.get(animal);
        if current >= MAX_POINTS_PER_ANIMAL {
            return Err(SessionError::AnimalAtCap(animal));
        }
        self.points.set(animal, current + 1);
        Ok(current + 1)
    }

    pub fn release(&mut self, animal: Animal) -> Result<i32, SessionError> {
        self.ensure_open()?;
        let current = self.points.get(animal);
        if current <= 0 {
            return Err(SessionError::AnimalEmpty(animal));
        }
        self.points.set(animal, current - 1);
        Ok(current - 1)
    }

    pub fn augment(&mut self, kind: AugmentKind) -> Result<u8, SessionError> {
        self.ensure_open()?;
        let slot = self.augments.slot_mut(kind);
        if *slot >= MAX_AUGMENTS {
            return Err(SessionError::AugmentAtCap(kind));
        }
        *slot += 1;
        Ok(*slot)
    }

    pub fn diminish(&mut self, kind: AugmentKind) -> Result<u8, SessionError> {
        self.ensure_open()?;
        let slot = self.augments.slot_mut(kind);
        if *slot == 0 {
            return Err(SessionError::AugmentEmpty(kind));
        }
        *slot -= 1;
        Ok(*slot)
    }

    /// Locks the allocation and computes the reading. Fails until every point
    /// is placed.
    pub fn seal(&mut self) -> Result<FateReading, SessionError> {
        if self.sealed {
            return Err(SessionError::AlreadySealed);
        }
        if !self.is_ready() {
            return Err(SessionError::Incomplete {
                remaining: self.remaining(),
            });
        }

        self.sealed = true;
        let reading = evaluate(&self.points, self.augments, &FATES);
        debug!(winner = reading.winner.id, "allocation sealed");
        Ok(reading)
    }

    fn ensure_open(&self) -> Result<(), SessionError> {
        if self.sealed {
            Err(SessionError::Sealed)
        } else {
            Ok(())
        }
    }
}
