//! Walks laid-out glyphs and issues world writes per occupied cell.

use glyphcraft_edit::{FillMode, WorldAccess};
use glyphcraft_geom::BlockPos;
use glyphcraft_glyph::Glyph;

use crate::config::PlaceSettings;
use crate::layout::PlacementRun;
use crate::mapper::{Plane, extrusion, map_cell};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// The actor stands next to each cell and places it. Thickness is 1.
    Point,
    /// Direct range writes, extruded to the given thickness.
    Bulk { thickness: i32 },
}

/// Places every set bit of `glyphs`. Returns the number of cells written.
pub fn place<W: WorldAccess + ?Sized>(
    world: &mut W,
    settings: &PlaceSettings,
    glyphs: &[Glyph],
    plane: Plane,
    origin: BlockPos,
    strategy: Strategy,
) -> usize {
    let run = PlacementRun::layout(glyphs);
    let placed = match strategy {
        Strategy::Point => place_points(world, settings, &run, plane, origin),
        Strategy::Bulk { thickness } => {
            place_bulk(world, settings, &run, plane, origin, thickness.max(1))
        }
    };
    log::info!(
        target: "place",
        "{:?} {:?} at ({},{},{}): {} glyph(s), {} cell(s) written",
        strategy,
        plane,
        origin.x,
        origin.y,
        origin.z,
        glyphs.len(),
        placed
    );
    placed
}

/// Target cells for every set bit, in run order. Cells that fall outside the
/// `i32` grid are logged and left out.
fn targets<'a>(
    run: &'a PlacementRun<'a>,
    plane: Plane,
    origin: BlockPos,
) -> impl Iterator<Item = BlockPos> + 'a {
    run.entries.iter().flat_map(move |(glyph, at)| {
        let at = *at;
        glyph.occupied().filter_map(move |(x, y)| {
            let cell = i32::try_from(at + x)
                .ok()
                .zip(i32::try_from(y).ok())
                .and_then(|(lx, ly)| map_cell(origin, plane, lx, ly));
            if cell.is_none() {
                log::warn!(target: "place", "skip cell ({}, {}): outside the grid", at + x, y);
            }
            cell
        })
    })
}

fn place_points<W: WorldAccess + ?Sized>(
    world: &mut W,
    settings: &PlaceSettings,
    run: &PlacementRun<'_>,
    plane: Plane,
    origin: BlockPos,
) -> usize {
    let interval = settings.refill_interval.max(1) as usize;
    world.set_actor_stock(settings.material, settings.stock_quantity, settings.stock_slot);

    let mut issued = 0usize;
    let mut placed = 0usize;
    for target in targets(run, plane, origin) {
        if settings.place_only_empty && !world.is_empty(target) {
            log::trace!(target: "place", "skip occupied {:?}", target);
            continue;
        }
        let Some(stand) = target.checked_step(plane.normal()) else {
            log::warn!(target: "place", "skip {:?}: no room for the actor", target);
            continue;
        };
        world.move_actor_to(stand, plane.stand_facing());
        if issued % interval == 0 {
            world.set_actor_stock(settings.material, settings.stock_quantity, settings.stock_slot);
        }
        if world.place_ahead(settings.material, plane.place_direction()) {
            placed += 1;
        }
        issued += 1;
    }
    if placed < issued {
        log::warn!(target: "place", "actor placed {} of {} cells", placed, issued);
    }
    placed
}

fn place_bulk<W: WorldAccess + ?Sized>(
    world: &mut W,
    settings: &PlaceSettings,
    run: &PlacementRun<'_>,
    plane: Plane,
    origin: BlockPos,
    thickness: i32,
) -> usize {
    let mut placed = 0;
    for face in targets(run, plane, origin) {
        let Some(range) = extrusion(face, plane, thickness) else {
            log::warn!(target: "place", "skip {:?}: extrusion leaves the grid", face);
            continue;
        };
        if settings.place_only_empty {
            for p in range.iter() {
                if world.is_empty(p) && world.place_unit(settings.material, p) {
                    placed += 1;
                }
            }
        } else {
            placed += world.fill_range(settings.material, range.min, range.max, FillMode::Replace);
        }
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphcraft_blocks::MaterialId;
    use glyphcraft_edit::EditStore;
    use glyphcraft_glyph::decode;

    const IRON: MaterialId = MaterialId(1);
    const STONE: MaterialId = MaterialId(3);

    fn settings(place_only_empty: bool) -> PlaceSettings {
        PlaceSettings {
            place_only_empty,
            ..PlaceSettings::new(IRON)
        }
    }

    #[test]
    fn point_wall_places_diagonal() {
        let mut world = EditStore::default();
        let glyphs = vec![decode("2x2:6").unwrap()];
        let n = place(&mut world, &settings(true), &glyphs, Plane::Wall, BlockPos::ORIGIN, Strategy::Point);
        assert_eq!(n, 2);
        assert_eq!(
            world.blocks(),
            vec![(BlockPos::new(0, -1, 0), IRON), (BlockPos::new(1, 0, 0), IRON)]
        );
        // Left standing in front of the last cell, not restored.
        assert_eq!(world.actor().pos, BlockPos::new(0, -1, 1));
    }

    #[test]
    fn point_floor_places_from_above() {
        let mut world = EditStore::default();
        let glyphs = vec![decode("2x2:6").unwrap()];
        let origin = BlockPos::new(5, 10, 5);
        let n = place(&mut world, &settings(true), &glyphs, Plane::Floor, origin, Strategy::Point);
        assert_eq!(n, 2);
        assert_eq!(world.get(BlockPos::new(6, 10, 5)), IRON);
        assert_eq!(world.get(BlockPos::new(5, 10, 6)), IRON);
        assert_eq!(world.actor().pos, BlockPos::new(5, 11, 6));
    }

    #[test]
    fn point_safety_skips_occupied() {
        let mut world = EditStore::default();
        world.set(BlockPos::new(1, 0, 0), STONE);
        let glyphs = vec![decode("2x2:6").unwrap()];
        let n = place(&mut world, &settings(true), &glyphs, Plane::Wall, BlockPos::ORIGIN, Strategy::Point);
        assert_eq!(n, 1);
        assert_eq!(world.get(BlockPos::new(1, 0, 0)), STONE);
    }

    #[test]
    fn point_without_safety_overwrites() {
        let mut world = EditStore::default();
        world.set(BlockPos::new(1, 0, 0), STONE);
        let glyphs = vec![decode("2x2:6").unwrap()];
        let n = place(&mut world, &settings(false), &glyphs, Plane::Wall, BlockPos::ORIGIN, Strategy::Point);
        assert_eq!(n, 2);
        assert_eq!(world.get(BlockPos::new(1, 0, 0)), IRON);
    }

    #[test]
    fn refill_cadence_bounds_stock() {
        // 16 set cells, refills of 3 every 5 placements: 3+3+3+1 placed.
        let glyphs = vec![decode("4x4:FFFF").unwrap()];
        let s = PlaceSettings {
            refill_interval: 5,
            stock_quantity: 3,
            ..settings(true)
        };
        let mut world = EditStore::default();
        let n = place(&mut world, &s, &glyphs, Plane::Wall, BlockPos::ORIGIN, Strategy::Point);
        assert_eq!(n, 10);
    }

    #[test]
    fn bulk_replace_extrudes_wall() {
        let mut world = EditStore::default();
        world.set(BlockPos::new(1, 0, 2), STONE);
        let glyphs = vec![decode("2x2:6").unwrap()];
        let n = place(
            &mut world,
            &settings(false),
            &glyphs,
            Plane::Wall,
            BlockPos::ORIGIN,
            Strategy::Bulk { thickness: 3 },
        );
        assert_eq!(n, 6);
        assert_eq!(world.get(BlockPos::new(1, 0, 2)), IRON);
        assert_eq!(world.stats().fill_calls, 2);
    }

    #[test]
    fn bulk_keep_extrudes_floor_around_existing() {
        let mut world = EditStore::default();
        world.set(BlockPos::new(1, 1, 0), STONE);
        let glyphs = vec![decode("2x2:6").unwrap()];
        let n = place(
            &mut world,
            &settings(true),
            &glyphs,
            Plane::Floor,
            BlockPos::ORIGIN,
            Strategy::Bulk { thickness: 2 },
        );
        assert_eq!(n, 3);
        assert_eq!(world.get(BlockPos::new(1, 1, 0)), STONE);
        assert_eq!(world.get(BlockPos::new(0, 1, 1)), IRON);
        assert_eq!(world.stats().fill_calls, 0);
    }

    #[test]
    fn bulk_thickness_clamped() {
        let mut world = EditStore::default();
        let glyphs = vec![decode("1x1:8").unwrap()];
        let n = place(
            &mut world,
            &settings(false),
            &glyphs,
            Plane::Wall,
            BlockPos::ORIGIN,
            Strategy::Bulk { thickness: 0 },
        );
        assert_eq!(n, 1);
    }

    #[test]
    fn bulk_at_grid_edge_skips_unrepresentable_cells() {
        // Second cell would sit at x = i32::MAX + 1.
        let mut world = EditStore::default();
        let glyphs = vec![decode("2x1:C").unwrap()];
        let edge = BlockPos::new(i32::MAX, 0, 0);
        let n = place(
            &mut world,
            &settings(false),
            &glyphs,
            Plane::Wall,
            edge,
            Strategy::Bulk { thickness: 1 },
        );
        assert_eq!(n, 1);
        assert_eq!(world.blocks(), vec![(edge, IRON)]);
    }

    #[test]
    fn bulk_extrusion_past_edge_is_skipped() {
        let mut world = EditStore::default();
        let glyphs = vec![decode("1x1:8").unwrap()];
        let n = place(
            &mut world,
            &settings(true),
            &glyphs,
            Plane::Wall,
            BlockPos::new(0, 0, i32::MAX),
            Strategy::Bulk { thickness: 2 },
        );
        assert_eq!(n, 0);
        assert_eq!(world.stats().blocks, 0);
    }

    #[test]
    fn point_without_standing_room_is_skipped() {
        // The actor would stand at z = i32::MAX + 1.
        let mut world = EditStore::default();
        let glyphs = vec![decode("1x1:8").unwrap()];
        let n = place(
            &mut world,
            &settings(true),
            &glyphs,
            Plane::Wall,
            BlockPos::new(0, 0, i32::MAX),
            Strategy::Point,
        );
        assert_eq!(n, 0);
        assert_eq!(world.stats().blocks, 0);
    }

    #[test]
    fn second_glyph_starts_after_gap() {
        let mut world = EditStore::default();
        let glyphs = vec![decode("4x1:8").unwrap(), decode("6x1:80").unwrap()];
        place(
            &mut world,
            &settings(false),
            &glyphs,
            Plane::Floor,
            BlockPos::ORIGIN,
            Strategy::Bulk { thickness: 1 },
        );
        assert_eq!(
            world.blocks(),
            vec![(BlockPos::new(0, 0, 0), IRON), (BlockPos::new(5, 0, 0), IRON)]
        );
    }
}
