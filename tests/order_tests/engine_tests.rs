//! Tests for the order engine
//!
//! These tests verify:
//! - Stock validation against current (already decremented) stock
//! - Running total over fulfilled lines only
//! - Exactly one menu save per order, even with no lines
//! - Receipt rendering
//! - Session state machine and save failures

use campusbites::catalog::{Catalog, MenuItemUpdate};
use campusbites::model::{MenuItem, Price};
use campusbites::order::{LineOutcome, OrderEngine, OrderSession, SessionState};
use campusbites::store::{MemBackend, RecordStore};
use campusbites::CafeError;

// =============================================================================
// Helper Functions
// =============================================================================

fn stock_of(store: &RecordStore<&MemBackend>, id: i64) -> u32 {
    store.menu().get(id).unwrap().stock
}

fn reopen(backend: &MemBackend) -> RecordStore<MemBackend> {
    let copy = MemBackend::with_menu_text(backend.menu_text().unwrap());
    RecordStore::open(copy, true).unwrap()
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[test]
fn test_buddha_bowl_scenario() {
    let backend = MemBackend::new();
    let mut store = RecordStore::open(&backend, true).unwrap();

    let placed = OrderEngine::new(&mut store)
        .place_order(vec![(5, 3), (5, 20), (-1, 0)])
        .unwrap();

    assert!(placed.outcomes[0].is_fulfilled());
    assert_eq!(
        placed.outcomes[1],
        LineOutcome::InsufficientStock {
            item_id: 5,
            name: "Vegan Buddha Bowl".to_string(),
            requested: 20,
            available: 12,
        }
    );

    assert_eq!(placed.receipt.lines().len(), 1);
    assert_eq!(placed.receipt.total().to_string(), "32.97");
    assert_eq!(
        placed.receipt.to_string(),
        "\n=== Order Summary ===\n\
         - Vegan Buddha Bowl x3 @ $10.99 each\n\
         Total: $32.97\n"
    );

    assert_eq!(stock_of(&store, 5), 12);
    assert_eq!(reopen(&backend).menu().get(5).unwrap().stock, 12);
}

#[test]
fn test_sentinel_only_order() {
    let backend = MemBackend::new();
    let mut store = RecordStore::open(&backend, true).unwrap();
    let before = backend.menu_text();

    let placed = OrderEngine::new(&mut store)
        .place_order(vec![(-1, 0)])
        .unwrap();

    assert!(placed.outcomes.is_empty());
    assert!(placed.receipt.is_empty());
    assert_eq!(placed.receipt.total(), Price::ZERO);
    assert_eq!(
        placed.receipt.to_string(),
        "\n=== Order Summary ===\nTotal: $0.00\n"
    );

    // Rewritten, with identical content
    assert_eq!(backend.menu_saves(), 2);
    assert_eq!(backend.menu_text(), before);
}

#[test]
fn test_empty_request_sequence_still_saves() {
    let backend = MemBackend::new();
    let mut store = RecordStore::open(&backend, true).unwrap();

    let placed = OrderEngine::new(&mut store)
        .place_order(Vec::<(i64, u32)>::new())
        .unwrap();

    assert!(placed.receipt.is_empty());
    assert_eq!(store.menu_revision(), 1);
}

// =============================================================================
// Line Validation Tests
// =============================================================================

#[test]
fn test_unknown_item_is_skipped() {
    let backend = MemBackend::new();
    let mut store = RecordStore::open(&backend, true).unwrap();

    let placed = OrderEngine::new(&mut store)
        .place_order(vec![(404, 1), (1, 2)])
        .unwrap();

    assert_eq!(placed.outcomes[0], LineOutcome::NotFound { item_id: 404 });
    assert_eq!(
        placed.outcomes[0].rejection_notice().unwrap(),
        "Item with ID 404 not found."
    );
    assert_eq!(placed.receipt.total().to_string(), "17.98");
    assert_eq!(stock_of(&store, 1), 23);
}

#[test]
fn test_insufficient_stock_changes_nothing() {
    let backend = MemBackend::new();
    let mut store = RecordStore::open(&backend, true).unwrap();

    let placed = OrderEngine::new(&mut store)
        .place_order(vec![(9, 11)])
        .unwrap();

    assert_eq!(
        placed.outcomes[0].rejection_notice().unwrap(),
        "Insufficient stock for Gluten-Free Margherita Pizza."
    );
    assert!(placed.receipt.is_empty());
    assert_eq!(stock_of(&store, 9), 10);
}

#[test]
fn test_exact_stock_is_fulfilled() {
    let backend = MemBackend::new();
    let mut store = RecordStore::open(&backend, true).unwrap();

    let placed = OrderEngine::new(&mut store)
        .place_order(vec![(9, 10), (9, 1)])
        .unwrap();

    assert!(placed.outcomes[0].is_fulfilled());
    assert!(!placed.outcomes[1].is_fulfilled());
    assert_eq!(stock_of(&store, 9), 0);
    assert_eq!(placed.receipt.total().to_string(), "114.90");
}

#[test]
fn test_zero_quantity_is_rejected() {
    let backend = MemBackend::new();
    let mut store = RecordStore::open(&backend, true).unwrap();

    let placed = OrderEngine::new(&mut store)
        .place_order(vec![(1, 0)])
        .unwrap();

    assert_eq!(placed.outcomes[0], LineOutcome::ZeroQuantity { item_id: 1 });
    assert!(placed.receipt.is_empty());
    assert_eq!(stock_of(&store, 1), 25);
}

#[test]
fn test_requests_after_sentinel_are_ignored() {
    let backend = MemBackend::new();
    let mut store = RecordStore::open(&backend, true).unwrap();

    let placed = OrderEngine::new(&mut store)
        .place_order(vec![(1, 1), (-1, 0), (2, 1)])
        .unwrap();

    assert_eq!(placed.outcomes.len(), 1);
    assert_eq!(stock_of(&store, 1), 24);
    assert_eq!(stock_of(&store, 2), 20);
}

#[test]
fn test_subtotal_overflow_is_rejected() {
    let backend = MemBackend::new();
    let mut store = RecordStore::open(&backend, true).unwrap();
    Catalog::new(&mut store)
        .add_menu_item(MenuItem::new(42, "Gold Plate", "Luxury", Price::MAX, 5))
        .unwrap();

    let placed = OrderEngine::new(&mut store)
        .place_order(vec![(42, 2), (1, 1)])
        .unwrap();

    assert_eq!(
        placed.outcomes[0],
        LineOutcome::AmountTooLarge {
            item_id: 42,
            name: "Gold Plate".to_string(),
        }
    );
    assert_eq!(
        placed.outcomes[0].rejection_notice().unwrap(),
        "Order amount too large for Gold Plate."
    );
    assert!(placed.outcomes[1].is_fulfilled());
    assert_eq!(stock_of(&store, 42), 5);
    assert_eq!(placed.receipt.total().to_string(), "8.99");
}

#[test]
fn test_running_total_overflow_is_rejected() {
    let backend = MemBackend::new();
    let mut store = RecordStore::open(&backend, true).unwrap();
    Catalog::new(&mut store)
        .add_menu_item(MenuItem::new(42, "Gold Plate", "Luxury", Price::MAX, 5))
        .unwrap();

    let placed = OrderEngine::new(&mut store)
        .place_order(vec![(42, 1), (42, 1)])
        .unwrap();

    assert!(placed.outcomes[0].is_fulfilled());
    assert!(matches!(
        placed.outcomes[1],
        LineOutcome::AmountTooLarge { item_id: 42, .. }
    ));
    assert_eq!(placed.receipt.total(), Price::MAX);
    assert_eq!(stock_of(&store, 42), 4);
}

// =============================================================================
// Invariant Tests
// =============================================================================

#[test]
fn test_stock_and_total_over_mixed_order() {
    let backend = MemBackend::new();
    let mut store = RecordStore::open(&backend, true).unwrap();
    let initial: Vec<(i64, u32)> = store.menu().iter().map(|i| (i.id, i.stock)).collect();

    let requests = vec![
        (7, 5),
        (7, 5),
        (7, 5), // 12 in stock: third line rejected
        (1, 25),
        (1, 1), // sold out
        (3, 2),
        (99, 4),
        (10, 18),
    ];
    let placed = OrderEngine::new(&mut store).place_order(requests).unwrap();

    // Every item: initial stock minus what was fulfilled for it
    for (id, before) in initial {
        let sold: u32 = placed
            .receipt
            .lines()
            .iter()
            .filter(|l| l.item_id == id)
            .map(|l| l.quantity)
            .sum();
        assert_eq!(stock_of(&store, id), before - sold, "item {}", id);
    }

    // Total: sum of fulfilled subtotals only
    let expected: Price = placed.receipt.lines().iter().map(|l| l.subtotal()).sum();
    assert_eq!(placed.receipt.total(), expected);
    assert_eq!(placed.receipt.lines().len(), 5);
    assert_eq!(
        placed.outcomes.iter().filter(|o| !o.is_fulfilled()).count(),
        3
    );
}

#[test]
fn test_receipt_keeps_price_snapshot() {
    let backend = MemBackend::new();
    let mut store = RecordStore::open(&backend, true).unwrap();

    let mut session = OrderSession::new(&mut store);
    session.add_line(2, 1).unwrap();
    let receipt = session.finish().unwrap();

    Catalog::new(&mut store)
        .update_menu_item(
            2,
            MenuItemUpdate {
                name: "Veggie Wrap".to_string(),
                category: "Vegetarian".to_string(),
                price: Price::from_cents(100),
                stock: 19,
            },
        )
        .unwrap();

    assert_eq!(receipt.lines()[0].unit_price, Price::from_cents(749));
    assert_eq!(
        receipt.lines()[0].to_string(),
        "Veggie Wrap x1 @ $7.49 each"
    );
}

// =============================================================================
// Session Lifecycle Tests
// =============================================================================

#[test]
fn test_session_state_transitions() {
    let backend = MemBackend::new();
    let mut store = RecordStore::open(&backend, true).unwrap();
    let mut session = OrderSession::new(&mut store);

    assert_eq!(session.state(), SessionState::Collecting);
    session.add_line(6, 2).unwrap();
    session.add_line(6, 100).unwrap();
    assert_eq!(session.total().to_string(), "16.98");
    assert_eq!(session.rejected(), 1);
    assert_eq!(session.lines().len(), 1);

    session.finish().unwrap();
    assert_eq!(session.state(), SessionState::Done);

    assert!(matches!(
        session.add_line(6, 1),
        Err(CafeError::InvalidInput(_))
    ));
    assert!(matches!(session.finish(), Err(CafeError::InvalidInput(_))));
}

#[test]
fn test_failed_save_can_be_retried() {
    let backend = MemBackend::new();
    let mut store = RecordStore::open(&backend, true).unwrap();

    {
        let mut session = OrderSession::new(&mut store);
        session.add_line(8, 4).unwrap();

        backend.set_simulate_write_error(true);
        assert!(matches!(session.finish(), Err(CafeError::Storage(_))));
        assert_eq!(session.state(), SessionState::Collecting);

        backend.set_simulate_write_error(false);
        let receipt = session.finish().unwrap();
        assert_eq!(receipt.total().to_string(), "31.96");
    }

    assert_eq!(stock_of(&store, 8), 21);
    assert_eq!(reopen(&backend).menu().get(8).unwrap().stock, 21);
}

#[test]
fn test_engine_session_saves_once() {
    let backend = MemBackend::new();
    let mut store = RecordStore::open(&backend, true).unwrap();

    {
        let mut engine = OrderEngine::new(&mut store);
        let mut session = engine.session();
        for _ in 0..5 {
            session.add_line(4, 1).unwrap();
        }
        assert_eq!(backend.menu_saves(), 1);
        session.finish().unwrap();
    }

    assert_eq!(backend.menu_saves(), 2);
    assert_eq!(stock_of(&store, 4), 13);
}
