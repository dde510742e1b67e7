use std::cell::Cell;
use vista::Vista;

const NUMBERS: [i32; 12] = [-3, -2, -1, 0, 1, 2, 3, 4, 5, 6, 7, 8];

#[test]
fn test_empty_source_yields_nothing() {
    let empty: Vec<i32> = Vec::new();
    let matches: Vec<i32> = empty.iter().copied().keep(|_| true).to_vec();
    assert!(matches.is_empty());
}

#[test]
fn test_no_matches_yields_nothing() {
    let over_ten: Vec<i32> = NUMBERS.iter().copied().keep(|n| *n > 10).to_vec();
    assert!(over_ten.is_empty());
}

#[test]
fn test_some_matches_in_source_order() {
    let evens: Vec<i32> = NUMBERS.iter().copied().keep(|n| n % 2 == 0).to_vec();
    assert_eq!(evens, vec![-2, 0, 2, 4, 6, 8]);
}

#[test]
fn test_predicate_runs_once_per_inspected_element() {
    let calls = Cell::new(0);
    let evens: Vec<i32> = NUMBERS
        .iter()
        .copied()
        .keep(|n| {
            calls.set(calls.get() + 1);
            n % 2 == 0
        })
        .to_vec();
    assert_eq!(evens.len(), 6);
    // Inspected, not yielded: all 12 elements were examined exactly once.
    assert_eq!(calls.get(), 12);
}

#[test]
fn test_mutation_through_yielded_references() {
    let mut numbers = vec![1, 2, 3, 4];
    numbers.iter_mut().keep(|n| **n % 2 == 0).each(|n| *n *= 10);
    assert_eq!(numbers, vec![1, 20, 3, 40]);
}

#[test]
fn test_exhausted_stage_stays_exhausted() {
    let mut stage = [1, 2, 3].iter().copied().keep(|n| *n > 1);
    assert_eq!(stage.next(), Some(2));
    assert_eq!(stage.next(), Some(3));
    assert_eq!(stage.next(), None);
    assert_eq!(stage.next(), None);
}

#[test]
fn test_stateful_predicate_via_moved_closure() {
    // A predicate carrying its own state, the closure analogue of a
    // stateful functor.
    let mut budget = 3;
    let taken: Vec<i32> = NUMBERS
        .iter()
        .copied()
        .keep(move |_| {
            let ok = budget > 0;
            budget -= 1;
            ok
        })
        .to_vec();
    assert_eq!(taken, vec![-3, -2, -1]);
}
