use glyphcraft_blocks::MaterialId;
use glyphcraft_geom::{BlockPos, Facing};

/// Inventory slots available to the actor.
pub const SLOT_COUNT: usize = 27;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Slot {
    pub material: MaterialId,
    pub count: u32,
}

/// The movable placing agent.
#[derive(Clone, Debug)]
pub struct Actor {
    pub pos: BlockPos,
    pub facing: Facing,
    slots: [Slot; SLOT_COUNT],
    selected: usize,
}

impl Default for Actor {
    fn default() -> Self {
        Self {
            pos: BlockPos::ORIGIN,
            facing: Facing::North,
            slots: [Slot::default(); SLOT_COUNT],
            selected: 0,
        }
    }
}

impl Actor {
    #[inline]
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn slot(&self, index: usize) -> Option<Slot> {
        self.slots.get(index).copied()
    }

    /// Out-of-range slots are clamped to the last one.
    pub fn set_stock(&mut self, material: MaterialId, quantity: u32, slot: usize) {
        let slot = slot.min(SLOT_COUNT - 1);
        self.slots[slot] = Slot {
            material,
            count: quantity,
        };
        self.selected = slot;
    }

    /// Takes one `material` from the selected slot.
    pub fn take_one(&mut self, material: MaterialId) -> bool {
        let s = &mut self.slots[self.selected];
        if s.count == 0 || s.material != material {
            return false;
        }
        s.count -= 1;
        if s.count == 0 {
            s.material = MaterialId::AIR;
        }
        true
    }
}
