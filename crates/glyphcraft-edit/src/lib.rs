//! World access for placement, and an in-memory world that implements it.
#![forbid(unsafe_code)]

mod actor;
mod store;

pub use actor::{Actor, SLOT_COUNT, Slot};
pub use store::{EditStore, EditStoreStats};

use glyphcraft_blocks::MaterialId;
use glyphcraft_geom::{BlockPos, Facing};

/// How `fill_range` treats cells that already hold material.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FillMode {
    /// Overwrite everything in the range.
    Replace,
    /// Only fill cells that are empty.
    Keep,
}

/// Grid queries and mutations the placement engine needs.
///
/// Calls are applied in order: a cell written by one call is visible to the
/// next `is_empty`.
pub trait WorldAccess {
    fn is_empty(&self, pos: BlockPos) -> bool;

    /// Sets one cell. Returns whether the cell was written.
    fn place_unit(&mut self, material: MaterialId, pos: BlockPos) -> bool;

    /// The actor places one unit from its selected slot into the cell next to
    /// it in direction `dir`. Returns whether a unit was placed.
    fn place_ahead(&mut self, material: MaterialId, dir: Facing) -> bool;

    /// Fills the inclusive box between `from` and `to`. Returns cells written.
    fn fill_range(&mut self, material: MaterialId, from: BlockPos, to: BlockPos, mode: FillMode)
    -> usize;

    fn move_actor_to(&mut self, pos: BlockPos, facing: Facing);

    /// Puts `quantity` of `material` in `slot` and selects that slot.
    fn set_actor_stock(&mut self, material: MaterialId, quantity: u32, slot: usize);

    fn report_message(&mut self, text: &str);
}
