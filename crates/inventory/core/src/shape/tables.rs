//! Static rotation-state tables.
//!
//! Offsets are normalized so every state's minimum column and row are zero;
//! the anchor is the top-left corner of the bounding box. State `i + 1` is
//! state `i` turned 90 degrees clockwise, with symmetric duplicates removed.

use super::{RotationState, Tint};
use crate::types::CellOffset;

const fn off(dx: i32, dy: i32) -> CellOffset {
    CellOffset::new(dx, dy)
}

pub(super) static SINGLE: [RotationState; 1] =
    [RotationState::new(&[off(0, 0)], Tint::Ivory)];

pub(super) static DOMINO: [RotationState; 2] = [
    RotationState::new(&[off(0, 0), off(1, 0)], Tint::Amber),
    RotationState::new(&[off(0, 0), off(0, 1)], Tint::Amber),
];

pub(super) static SQUARE: [RotationState; 1] = [RotationState::new(
    &[off(0, 0), off(1, 0), off(0, 1), off(1, 1)],
    Tint::Moss,
)];

pub(super) static LINE: [RotationState; 2] = [
    RotationState::new(&[off(0, 0), off(1, 0), off(2, 0), off(3, 0)], Tint::Sky),
    RotationState::new(&[off(0, 0), off(0, 1), off(0, 2), off(0, 3)], Tint::Sky),
];

pub(super) static L_SHAPE: [RotationState; 4] = [
    RotationState::new(&[off(0, 0), off(1, 0), off(2, 0), off(0, 1)], Tint::Rust),
    RotationState::new(&[off(0, 0), off(1, 0), off(1, 1), off(1, 2)], Tint::Rust),
    RotationState::new(&[off(2, 0), off(0, 1), off(1, 1), off(2, 1)], Tint::Rust),
    RotationState::new(&[off(0, 0), off(0, 1), off(0, 2), off(1, 2)], Tint::Rust),
];

pub(super) static COMB: [RotationState; 4] = [
    RotationState::new(
        &[off(0, 0), off(2, 0), off(0, 1), off(1, 1), off(2, 1)],
        Tint::Slate,
    ),
    RotationState::new(
        &[off(0, 0), off(1, 0), off(0, 1), off(0, 2), off(1, 2)],
        Tint::Slate,
    ),
    RotationState::new(
        &[off(0, 0), off(1, 0), off(2, 0), off(0, 1), off(2, 1)],
        Tint::Slate,
    ),
    RotationState::new(
        &[off(0, 0), off(1, 0), off(1, 1), off(0, 2), off(1, 2)],
        Tint::Slate,
    ),
];

pub(super) static CORNER: [RotationState; 4] = [
    RotationState::new(&[off(0, 0), off(1, 0), off(0, 1)], Tint::Plum),
    RotationState::new(&[off(0, 0), off(1, 0), off(1, 1)], Tint::Plum),
    RotationState::new(&[off(1, 0), off(0, 1), off(1, 1)], Tint::Plum),
    RotationState::new(&[off(0, 0), off(0, 1), off(1, 1)], Tint::Plum),
];
