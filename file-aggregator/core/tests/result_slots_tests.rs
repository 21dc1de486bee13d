// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use file_aggregator_core::{CollectorError, Outcome, ResultSlots};

// ============================================================
// placement
// ============================================================

#[test]
fn test_liveness_out_of_order_writes_land_in_position_order() {
    let mut slots = ResultSlots::new(4);

    slots.place(3, Outcome::Success("d")).unwrap();
    slots.place(0, Outcome::Success("a")).unwrap();
    slots.place(2, Outcome::Timeout).unwrap();
    assert!(!slots.is_complete());
    slots.place(1, Outcome::Success("b")).unwrap();

    assert!(slots.is_complete());
    assert_eq!(
        slots.into_outcomes().unwrap(),
        vec![
            Outcome::Success("a"),
            Outcome::Success("b"),
            Outcome::Timeout,
            Outcome::Success("d"),
        ]
    );
}

#[test]
fn test_liveness_filled_counts_each_write_once() {
    let mut slots = ResultSlots::<u32>::new(3);
    assert_eq!(slots.len(), 3);
    assert_eq!(slots.filled(), 0);

    slots.place(1, Outcome::Success(7)).unwrap();
    assert_eq!(slots.filled(), 1);

    slots.place(0, Outcome::Timeout).unwrap();
    assert_eq!(slots.filled(), 2);
}

#[test]
fn test_liveness_empty_slots_are_complete() {
    let slots = ResultSlots::<u32>::new(0);

    assert!(slots.is_empty());
    assert!(slots.is_complete());
    assert!(slots.into_outcomes().unwrap().is_empty());
}

// ============================================================
// invariant violations
// ============================================================

#[test]
fn test_safety_reject_second_write_to_same_position() {
    let mut slots = ResultSlots::new(2);
    slots.place(1, Outcome::Success(1)).unwrap();

    let result = slots.place(1, Outcome::Timeout);

    assert_eq!(result, Err(CollectorError::AlreadyFilled(1)));
    assert_eq!(slots.filled(), 1, "Rejected write must not count");
}

#[test]
fn test_safety_reject_position_out_of_range() {
    let mut slots = ResultSlots::new(2);

    let result = slots.place(2, Outcome::Success(0));

    assert_eq!(
        result,
        Err(CollectorError::OutOfRange {
            position: 2,
            len: 2
        })
    );
}

#[test]
fn test_safety_never_release_partial_sequence() {
    let mut slots = ResultSlots::new(3);
    slots.place(0, Outcome::Success(0)).unwrap();
    slots.place(2, Outcome::Success(2)).unwrap();

    let result = slots.into_outcomes();

    assert_eq!(
        result,
        Err(CollectorError::Unfilled {
            filled: 2,
            expected: 3
        })
    );
}
