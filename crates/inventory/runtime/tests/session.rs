use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use inventory_content::ItemCatalog;
use inventory_core::{Cell, InventoryConfig, ItemId, ShapeKind};
use inventory_runtime::{
    AddItemError, InventoryEvent, InventoryListener, InventorySession, RestoreError,
};

fn session_10x8() -> InventorySession {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    InventorySession::new(InventoryConfig::default(), Arc::new(ItemCatalog::builtin()))
}

/// Listener that records every delivered event for later assertions.
#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<InventoryEvent>>>);

impl Recorder {
    fn events(&self) -> Vec<InventoryEvent> {
        self.0.borrow().clone()
    }
}

impl InventoryListener for Recorder {
    fn on_event(&mut self, event: &InventoryEvent) {
        self.0.borrow_mut().push(event.clone());
    }
}

/// The canonical placement scenario on a 10x8 grid: an L-shape in the
/// corner, a single item wedged against it, and a rotation blocked by the
/// collision.
#[test]
fn l_shape_and_single_scenario() {
    let mut session = session_10x8();

    // L-shape at the origin: cells (0,0) (1,0) (2,0) (0,1).
    let machete = session
        .add_item("machete", Some(Cell::ORIGIN))
        .expect("corner placement should succeed");
    let record = session.grid().get(machete).unwrap().clone();
    assert_eq!(record.shape, ShapeKind::LShape);
    assert_eq!(record.anchor, Cell::ORIGIN);
    assert_eq!(record.rotation_index, 0);

    // (1,0) is occupied by the L-shape, so a single cannot land there.
    assert!(!session
        .grid()
        .is_valid_placement(Cell::new(1, 0), ShapeKind::Single, 0, None));

    // (0,2) is free.
    let stone = session
        .add_item("stone", Some(Cell::new(0, 2)))
        .expect("free cell should accept the single");
    assert_eq!(session.grid().get(stone).unwrap().anchor, Cell::new(0, 2));

    // Rotation 1 of the L occupies (0,0) (1,0) (1,1) (1,2) at this anchor;
    // none of those touch (0,2), so the rotate commits.
    assert!(session.rotate_item(machete));
    assert_eq!(session.grid().get(machete).unwrap().rotation_index, 1);
    assert_eq!(session.grid().owner_at(Cell::new(1, 2)), Some(machete));

    // Block the way back: rotation 2 occupies (2,0) (0,1) (1,1) (2,1), and
    // a single parked at (2,1) collides, so the rotate must roll back.
    let blocker = session
        .add_item("canteen", Some(Cell::new(2, 1)))
        .expect("free cell should accept the blocker");
    assert!(!session.rotate_item(machete));
    let unchanged = session.grid().get(machete).unwrap();
    assert_eq!(unchanged.rotation_index, 1);
    assert_eq!(unchanged.anchor, Cell::ORIGIN);
    assert_eq!(session.grid().owner_at(Cell::new(2, 1)), Some(blocker));
}

#[test]
fn preferred_anchor_falls_back_to_first_fit() {
    let mut session = session_10x8();
    let machete = session.add_item("machete", Some(Cell::ORIGIN)).unwrap();
    assert_eq!(session.grid().get(machete).unwrap().anchor, Cell::ORIGIN);

    // (1,0) is taken by the L-shape; the single falls back to the first
    // row-major fit, which is (3,0).
    let stone = session.add_item("stone", Some(Cell::new(1, 0))).unwrap();
    assert_eq!(session.grid().get(stone).unwrap().anchor, Cell::new(3, 0));
}

#[test]
fn unresolvable_ref_is_surfaced() {
    let mut session = session_10x8();
    let err = session.add_item("compass", None).unwrap_err();
    assert_eq!(
        err,
        AddItemError::UnresolvedRef {
            external_ref: "compass".into()
        }
    );
    assert!(session.grid().is_empty());
}

#[test]
fn full_grid_reports_no_space() {
    let mut session = InventorySession::new(
        InventoryConfig::new(2, 2),
        Arc::new(ItemCatalog::builtin()),
    );
    session
        .add_item("tackle_box", None)
        .expect("2x2 box fills the 2x2 grid");
    let err = session.add_item("stone", None).unwrap_err();
    assert_eq!(
        err,
        AddItemError::NoSpace {
            external_ref: "stone".into(),
            shape: ShapeKind::Single,
        }
    );
}

#[test]
fn events_fire_exactly_once_per_successful_mutation() {
    let mut session = session_10x8();
    let recorder = Recorder::default();
    session.subscribe(Box::new(recorder.clone()));

    let rope = session.add_item("rope", Some(Cell::ORIGIN)).unwrap();
    assert!(session.move_item(rope, Cell::new(4, 4)));
    assert!(session.rotate_item(rope));
    assert!(session.remove_item(rope));

    // Failed attempts are silent.
    assert!(!session.remove_item(rope));
    assert!(!session.move_item(ItemId(99), Cell::ORIGIN));
    assert!(session.add_item("compass", None).is_err());

    let events = recorder.events();
    assert_eq!(events.len(), 4);
    assert!(matches!(&events[0], InventoryEvent::ItemAdded(r) if r.id == rope));
    assert!(matches!(&events[1], InventoryEvent::ItemChanged(r) if r.anchor == Cell::new(4, 4)));
    assert!(matches!(&events[2], InventoryEvent::ItemChanged(r) if r.rotation_index == 1));
    assert!(matches!(&events[3], InventoryEvent::ItemRemoved(id) if *id == rope));
}

#[test]
fn snapshot_restore_round_trip() {
    let mut session = session_10x8();
    session.add_item("machete", Some(Cell::ORIGIN)).unwrap();
    let rope = session.add_item("rope", Some(Cell::new(4, 0))).unwrap();
    session.add_item("tackle_box", Some(Cell::new(0, 4))).unwrap();
    assert!(session.rotate_item(rope));
    assert!(session.move_item(rope, Cell::new(8, 2)));

    let snapshot = session.snapshot();

    // The snapshot survives binary serialization intact.
    let bytes = bincode::serialize(&snapshot).expect("snapshot serializes");
    let decoded = bincode::deserialize(&bytes).expect("snapshot deserializes");
    assert_eq!(snapshot, decoded);

    // Restoring into a fresh session reproduces the grid cell for cell.
    let mut restored = session_10x8();
    let recorder = Recorder::default();
    restored.subscribe(Box::new(recorder.clone()));
    restored.restore(decoded).expect("restore should succeed");
    assert_eq!(restored.grid(), session.grid());

    // One DataReplaced, then one ItemAdded per record.
    let events = recorder.events();
    assert_eq!(events.len(), 1 + snapshot.entries.len());
    assert!(matches!(&events[0], InventoryEvent::DataReplaced(s) if *s == snapshot));
    assert!(events[1..]
        .iter()
        .all(|e| matches!(e, InventoryEvent::ItemAdded(_))));

    // Fresh identities continue where the saved session left off.
    let next = restored.add_item("stone", None).unwrap();
    assert_eq!(next, ItemId(3));
}

#[test]
fn restore_replays_in_any_order() {
    let mut session = session_10x8();
    session.add_item("machete", Some(Cell::ORIGIN)).unwrap();
    session.add_item("stone", Some(Cell::new(5, 5))).unwrap();
    session.add_item("plank", Some(Cell::new(0, 6))).unwrap();

    let mut snapshot = session.snapshot();
    snapshot.entries.reverse();

    let mut restored = session_10x8();
    restored.restore(snapshot).expect("order must not matter");
    assert_eq!(restored.grid(), session.grid());
}

#[test]
fn restore_rejects_unknown_refs_and_leaves_session_untouched() {
    let mut session = session_10x8();
    let stone = session.add_item("stone", Some(Cell::ORIGIN)).unwrap();

    let mut snapshot = session.snapshot();
    snapshot.entries[0].external_ref = "compass".into();

    let before_items = session.grid().items();
    let err = session.restore(snapshot).unwrap_err();
    assert!(matches!(err, RestoreError::UnresolvedRef { .. }));
    assert_eq!(session.grid().items(), before_items);
    assert_eq!(session.grid().owner_at(Cell::ORIGIN), Some(stone));
}

#[test]
fn restore_rejects_colliding_snapshots() {
    let mut session = session_10x8();
    session.add_item("stone", Some(Cell::ORIGIN)).unwrap();
    let mut snapshot = session.snapshot();

    // Forge a second entry on top of the first.
    let mut forged = snapshot.entries[0].clone();
    forged.id = ItemId(7);
    snapshot.entries.push(forged);

    let err = session.restore(snapshot).unwrap_err();
    assert_eq!(
        err,
        RestoreError::InvalidPlacement {
            id: ItemId(7),
            anchor: Cell::ORIGIN,
        }
    );
}
