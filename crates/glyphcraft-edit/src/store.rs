use glyphcraft_blocks::MaterialId;
use glyphcraft_geom::{BlockPos, BlockRange, Facing};
use hashbrown::HashMap;

use crate::actor::Actor;
use crate::{FillMode, WorldAccess};

pub const DEFAULT_CHUNK_EDGE: i32 = 32;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditStoreStats {
    pub chunk_entries: usize,
    pub blocks: usize,
    pub unit_placements: usize,
    pub actor_placements: usize,
    pub fill_calls: usize,
}

/// Sparse chunk-keyed world held in memory. Absent cells are empty.
pub struct EditStore {
    sx: i32,
    sy: i32,
    sz: i32,
    // Map per-chunk: key=(cx,cy,cz) -> map of world coords -> material
    inner: HashMap<(i32, i32, i32), HashMap<BlockPos, MaterialId>>,
    actor: Actor,
    messages: Vec<String>,
    unit_placements: usize,
    actor_placements: usize,
    fill_calls: usize,
}

impl Default for EditStore {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_EDGE, DEFAULT_CHUNK_EDGE, DEFAULT_CHUNK_EDGE)
    }
}

impl EditStore {
    pub fn new(sx: i32, sy: i32, sz: i32) -> Self {
        Self {
            sx: sx.max(1),
            sy: sy.max(1),
            sz: sz.max(1),
            inner: HashMap::new(),
            actor: Actor::default(),
            messages: Vec::new(),
            unit_placements: 0,
            actor_placements: 0,
            fill_calls: 0,
        }
    }

    pub fn stats(&self) -> EditStoreStats {
        EditStoreStats {
            chunk_entries: self.inner.len(),
            blocks: self.inner.values().map(|m| m.len()).sum(),
            unit_placements: self.unit_placements,
            actor_placements: self.actor_placements,
            fill_calls: self.fill_calls,
        }
    }

    #[inline]
    fn chunk_key(&self, p: BlockPos) -> (i32, i32, i32) {
        (
            p.x.div_euclid(self.sx),
            p.y.div_euclid(self.sy),
            p.z.div_euclid(self.sz),
        )
    }

    pub fn get(&self, p: BlockPos) -> MaterialId {
        let k = self.chunk_key(p);
        self.inner
            .get(&k)
            .and_then(|m| m.get(&p).copied())
            .unwrap_or(MaterialId::AIR)
    }

    /// Writing air clears the cell.
    pub fn set(&mut self, p: BlockPos, material: MaterialId) {
        let k = self.chunk_key(p);
        if material.is_air() {
            if let Some(m) = self.inner.get_mut(&k) {
                m.remove(&p);
                if m.is_empty() {
                    self.inner.remove(&k);
                }
            }
            return;
        }
        self.inner.entry(k).or_default().insert(p, material);
    }

    /// Every non-empty cell, sorted by position.
    pub fn blocks(&self) -> Vec<(BlockPos, MaterialId)> {
        let mut out: Vec<(BlockPos, MaterialId)> = self
            .inner
            .values()
            .flat_map(|m| m.iter().map(|(p, b)| (*p, *b)))
            .collect();
        out.sort();
        out
    }

    #[inline]
    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl WorldAccess for EditStore {
    fn is_empty(&self, pos: BlockPos) -> bool {
        self.get(pos).is_air()
    }

    fn place_unit(&mut self, material: MaterialId, pos: BlockPos) -> bool {
        self.set(pos, material);
        self.unit_placements += 1;
        true
    }

    fn place_ahead(&mut self, material: MaterialId, dir: Facing) -> bool {
        let Some(target) = self.actor.pos.checked_step(dir) else {
            log::trace!(target: "world", "no cell {:?} of {:?}", dir, self.actor.pos);
            return false;
        };
        if !self.actor.take_one(material) {
            log::trace!(target: "world", "actor out of {:?} at {:?}", material, target);
            return false;
        }
        self.set(target, material);
        self.actor_placements += 1;
        true
    }

    fn fill_range(
        &mut self,
        material: MaterialId,
        from: BlockPos,
        to: BlockPos,
        mode: FillMode,
    ) -> usize {
        self.fill_calls += 1;
        let range = BlockRange::new(from, to);
        let mut written = 0;
        for p in range.iter() {
            if mode == FillMode::Keep && !self.is_empty(p) {
                continue;
            }
            self.set(p, material);
            written += 1;
        }
        written
    }

    fn move_actor_to(&mut self, pos: BlockPos, facing: Facing) {
        self.actor.pos = pos;
        self.actor.facing = facing;
    }

    fn set_actor_stock(&mut self, material: MaterialId, quantity: u32, slot: usize) {
        self.actor.set_stock(material, quantity, slot);
    }

    fn report_message(&mut self, text: &str) {
        log::info!(target: "world", "message: {}", text);
        self.messages.push(text.to_string());
    }
}
