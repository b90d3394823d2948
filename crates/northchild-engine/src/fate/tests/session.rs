use super::common::*;
use crate::fate::domain::{Animal, AugmentKind, FateVariant};
use crate::fate::{compute, AllocationSession, SessionError};

fn filled_session() -> AllocationSession {
    let mut session = AllocationSession::new();
    for (animal, points) in shieldwall().iter() {
        for _ in 0..points {
            session.allocate(animal).expect("within budget");
        }
    }
    session
}

#[test]
fn tracks_remaining_points() {
    let mut session = AllocationSession::new();
    assert_eq!(session.remaining(), 15);
    assert!(!session.is_ready());

    assert_eq!(session.allocate(Animal::Owl), Ok(1));
    assert_eq!(session.allocate(Animal::Owl), Ok(2));
    assert_eq!(session.release(Animal::Owl), Ok(1));

    assert_eq!(session.total(), 1);
    assert_eq!(session.remaining(), 14);
}

#[test]
fn refuses_to_exceed_animal_cap() {
    let mut session = AllocationSession::new();
    for _ in 0..4 {
        session.allocate(Animal::Bear).expect("under cap");
    }

    assert_eq!(
        session.allocate(Animal::Bear),
        Err(SessionError::AnimalAtCap(Animal::Bear))
    );
    assert_eq!(session.points().bear, 4);
}

#[test]
fn refuses_to_exceed_budget() {
    let mut session = filled_session();
    assert!(session.is_ready());

    assert_eq!(
        session.allocate(Animal::Eagle),
        Err(SessionError::BudgetExhausted)
    );
    assert_eq!(session.total(), 15);
}

#[test]
fn refuses_to_release_empty_animal() {
    let mut session = AllocationSession::new();

    assert_eq!(
        session.release(Animal::Serpent),
        Err(SessionError::AnimalEmpty(Animal::Serpent))
    );
}

#[test]
fn augment_stacks_are_bounded() {
    let mut session = AllocationSession::new();
    for expected in 1..=5 {
        assert_eq!(session.augment(AugmentKind::Gravesong), Ok(expected));
    }

    assert_eq!(
        session.augment(AugmentKind::Gravesong),
        Err(SessionError::AugmentAtCap(AugmentKind::Gravesong))
    );
    assert_eq!(
        session.diminish(AugmentKind::Highflame),
        Err(SessionError::AugmentEmpty(AugmentKind::Highflame))
    );
    assert_eq!(session.diminish(AugmentKind::Gravesong), Ok(4));
}

#[test]
fn seal_requires_a_complete_allocation() {
    let mut session = AllocationSession::new();
    session.allocate(Animal::Wolf).expect("allocates");

    let error = session.seal().expect_err("incomplete");

    assert_eq!(error, SessionError::Incomplete { remaining: 14 });
    assert_eq!(error.to_string(), "14 point(s) remain unplaced");
    assert!(!session.is_sealed());
}

#[test]
fn sealing_matches_direct_computation_and_locks_the_session() {
    let mut session = filled_session();
    for _ in 0..5 {
        session.augment(AugmentKind::Highflame).expect("stack grows");
    }

    let reading = session.seal().expect("seals");

    assert_eq!(reading, compute(&shieldwall(), 5, 0));
    assert_eq!(reading.variant, FateVariant::Highflame);
    assert!(session.is_sealed());
    assert_eq!(session.release(Animal::Wolf), Err(SessionError::Sealed));
    assert_eq!(
        session.augment(AugmentKind::Gravesong),
        Err(SessionError::Sealed)
    );
    assert_eq!(session.seal(), Err(SessionError::AlreadySealed));
}
