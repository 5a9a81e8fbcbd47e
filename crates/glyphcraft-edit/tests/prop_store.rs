use glyphcraft_blocks::MaterialId;
use glyphcraft_edit::{EditStore, FillMode, WorldAccess};
use glyphcraft_geom::{BlockPos, BlockRange};
use proptest::prelude::*;

fn small_i32() -> impl Strategy<Value = i32> {
    -100i32..=100
}

fn arb_pos() -> impl Strategy<Value = BlockPos> {
    (small_i32(), small_i32(), small_i32()).prop_map(|(x, y, z)| BlockPos::new(x, y, z))
}

fn edge() -> impl Strategy<Value = i32> {
    1i32..=40
}

proptest! {
    // get returns what set stored regardless of chunk size
    #[test]
    fn set_get_roundtrip(sx in edge(), sy in edge(), sz in edge(), cells in proptest::collection::vec((arb_pos(), 1u16..10), 1..40)) {
        let mut store = EditStore::new(sx, sy, sz);
        for (p, m) in &cells {
            store.set(*p, MaterialId(*m));
        }
        for (p, _) in &cells {
            let last = cells.iter().rev().find(|(q, _)| q == p).map(|(_, m)| MaterialId(*m)).unwrap();
            prop_assert_eq!(store.get(*p), last);
        }
        let mut distinct: Vec<BlockPos> = cells.iter().map(|(p, _)| *p).collect();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(store.stats().blocks, distinct.len());
        prop_assert_eq!(store.blocks().len(), distinct.len());
    }

    // Replace fills exactly the range volume
    #[test]
    fn replace_fill_writes_volume(a in arb_pos(), dx in 0i32..4, dy in 0i32..4, dz in 0i32..4) {
        let mut store = EditStore::default();
        let b = a.offset(dx, dy, dz);
        let n = store.fill_range(MaterialId(1), a, b, FillMode::Replace);
        prop_assert_eq!(n, BlockRange::new(a, b).volume());
        prop_assert_eq!(store.stats().blocks, n);
    }

    // Keep never changes an occupied cell
    #[test]
    fn keep_fill_preserves(a in arb_pos(), dz in 0i32..6, hole in 0i32..6) {
        let mut store = EditStore::default();
        let occupied = a.offset(0, 0, hole.min(dz));
        store.set(occupied, MaterialId(2));
        let n = store.fill_range(MaterialId(1), a, a.offset(0, 0, dz), FillMode::Keep);
        prop_assert_eq!(n, dz as usize);
        prop_assert_eq!(store.get(occupied), MaterialId(2));
    }
}
