//! Supply tests - queue/reserve operations through the public API

use tetris_supply::core::{CyclePieceFactory, PieceFactory, PieceSupply, SimpleRng};
use tetris_supply::types::{
    Piece, PieceKind, SupplyAction, SupplyError, QUEUE_CAPACITY, RESERVE_CAPACITY,
};

fn cycle_supply() -> PieceSupply<CyclePieceFactory> {
    PieceSupply::with_factory(CyclePieceFactory::default())
}

fn ids(pieces: impl Iterator<Item = Piece>) -> Vec<u32> {
    pieces.map(|p| p.id).collect()
}

fn assert_bounds<F: PieceFactory>(s: &PieceSupply<F>) {
    assert!(s.queue().len() <= QUEUE_CAPACITY);
    assert!(s.reserve_stack().len() <= RESERVE_CAPACITY);
    match s.reserve_stack().top() {
        Some(top) => assert!(top < RESERVE_CAPACITY),
        None => assert!(s.reserve_stack().is_empty()),
    }
}

// ============== Startup ==============

#[test]
fn test_refill_from_empty_stamps_ids_in_order() {
    let mut s = PieceSupply::empty(CyclePieceFactory::default());
    assert!(s.queue().is_empty());
    assert!(s.reserve_stack().is_empty());

    s.refill_to_capacity();

    assert_eq!(s.queue().len(), 5);
    assert_eq!(ids(s.queue().iter()), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_random_supply_starts_full() {
    let s = PieceSupply::new(2024);
    assert!(s.queue().is_full());
    assert!(s.reserve_stack().is_empty());
    assert_eq!(s.next_id(), QUEUE_CAPACITY as u32);
}

// ============== Play ==============

#[test]
fn test_play_keeps_queue_length() {
    let mut s = cycle_supply();
    for expected in 0..20 {
        let played = s.play().unwrap();
        assert_eq!(played.id, expected);
        assert_eq!(s.queue().len(), QUEUE_CAPACITY);
    }
}

#[test]
fn test_play_on_empty_queue_changes_nothing() {
    let mut s = PieceSupply::empty(CyclePieceFactory::default());
    assert_eq!(s.play(), Err(SupplyError::EmptyQueue));
    assert_eq!(s.next_id(), 0);
    assert!(s.queue().is_empty());
}

// ============== Reserve ==============

#[test]
fn test_reserve_three_times_fills_stack() {
    let mut s = cycle_supply();
    for _ in 0..3 {
        s.reserve().unwrap();
        assert_eq!(s.queue().len(), QUEUE_CAPACITY);
    }
    assert_eq!(s.reserve_stack().top(), Some(2));
    assert!(s.reserve_stack().is_full());
    assert_eq!(ids(s.reserve_stack().iter()), vec![2, 1, 0]);
}

#[test]
fn test_reserve_on_full_stack_changes_nothing() {
    let mut s = cycle_supply();
    for _ in 0..3 {
        s.reserve().unwrap();
    }
    let before = s.snapshot();

    assert_eq!(s.reserve(), Err(SupplyError::StackFull));
    assert_eq!(s.snapshot(), before);
}

// ============== Use reserve ==============

#[test]
fn test_use_reserve_drains_exactly_top_plus_one() {
    let mut s = cycle_supply();
    s.reserve().unwrap();
    s.reserve().unwrap();
    let initial = s.reserve_stack().top().map_or(0, |t| t + 1);

    let mut used = Vec::new();
    loop {
        match s.use_reserve() {
            Ok(p) => used.push(p.id),
            Err(e) => {
                assert_eq!(e, SupplyError::EmptyStack);
                break;
            }
        }
    }
    assert_eq!(used.len(), initial);
    assert_eq!(used, vec![1, 0]);
    assert_eq!(s.queue().len(), QUEUE_CAPACITY);
}

// ============== Swaps ==============

#[test]
fn test_swap_one_twice_restores_state() {
    let mut s = cycle_supply();
    s.reserve().unwrap();
    let before = s.snapshot();

    s.swap_one().unwrap();
    assert_ne!(s.snapshot(), before);
    s.swap_one().unwrap();
    assert_eq!(s.snapshot(), before);
}

#[test]
fn test_swap_one_on_empty_reserve() {
    let mut s = cycle_supply();
    assert_eq!(s.swap_one(), Err(SupplyError::InvalidState));
}

#[test]
fn test_swap_three_with_two_queued_is_rejected() {
    // Play and reserve replenish one-for-one, so a queue started with two
    // pieces stays at two.
    let mut s = PieceSupply::empty(CyclePieceFactory::default());
    s.insert().unwrap();
    s.insert().unwrap();
    for _ in 0..RESERVE_CAPACITY {
        s.reserve().unwrap();
        assert_eq!(s.queue().len(), 2);
    }
    assert!(s.reserve_stack().is_full());
    let before = s.snapshot();

    assert_eq!(s.swap_three(), Err(SupplyError::InvalidState));
    assert_eq!(s.snapshot(), before);
}

#[test]
fn test_swap_three_with_partial_reserve_is_rejected() {
    let mut s = cycle_supply();
    s.reserve().unwrap();
    s.reserve().unwrap();
    assert_eq!(
        s.apply_action(SupplyAction::SwapThree),
        Err(SupplyError::InvalidState)
    );
}

#[test]
fn test_swap_three_is_elementwise() {
    let mut s = cycle_supply();
    for _ in 0..3 {
        s.reserve().unwrap();
    }
    let queue_before = ids(s.queue().iter());
    let reserve_before = ids(s.reserve_stack().iter());

    s.swap_three().unwrap();

    let queue_after = ids(s.queue().iter());
    let reserve_after = ids(s.reserve_stack().iter());
    assert_eq!(&queue_after[..3], &reserve_before[..]);
    assert_eq!(&reserve_after[..], &queue_before[..3]);
    assert_eq!(&queue_after[3..], &queue_before[3..]);
}

// ============== Insert ==============

#[test]
fn test_insert_on_full_queue_consumes_no_id() {
    let mut s = cycle_supply();
    let next = s.next_id();
    assert_eq!(s.insert(), Err(SupplyError::QueueFull));
    assert_eq!(s.next_id(), next);
}

#[test]
fn test_insert_into_empty_queue() {
    let mut s = PieceSupply::empty(CyclePieceFactory::new(&[PieceKind::O]));
    let p = s.insert().unwrap();
    assert_eq!(p, Piece::new(PieceKind::O, 0));
    assert_eq!(s.queue().len(), 1);
}

// ============== Invariants ==============

#[test]
fn test_random_walk_preserves_bounds() {
    const ACTIONS: [SupplyAction; 6] = [
        SupplyAction::Play,
        SupplyAction::Reserve,
        SupplyAction::UseReserve,
        SupplyAction::SwapOne,
        SupplyAction::SwapThree,
        SupplyAction::Insert,
    ];

    let mut rng = SimpleRng::new(777);
    let mut s = PieceSupply::new(777);
    let mut last_id = s.next_id();

    for _ in 0..5_000 {
        let action = ACTIONS[rng.next_range(ACTIONS.len() as u32) as usize];
        let before = s.snapshot();
        let result = s.apply_action(action);

        assert_bounds(&s);
        assert!(s.next_id() >= last_id, "ids must never go backwards");
        last_id = s.next_id();

        match (action, result) {
            (SupplyAction::Play | SupplyAction::Reserve, Ok(_)) => {
                assert_eq!(s.queue().len(), before.queue.len());
            }
            (_, Err(_)) => assert_eq!(s.snapshot(), before),
            _ => {}
        }
    }
}
