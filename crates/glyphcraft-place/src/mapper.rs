//! Glyph-local cells to grid positions.
//!
//! Row 0 of a glyph is its top edge and the grid's +Y points up, so on a wall
//! rows go to -Y. On a floor rows go to +Z.

use glyphcraft_geom::{BlockPos, BlockRange, Facing};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Plane {
    /// Vertical X-Y plane, extruded toward +Z.
    Wall,
    /// Horizontal X-Z plane, extruded toward +Y.
    Floor,
}

impl Plane {
    /// Direction of extrusion and of the actor's standing cell.
    #[inline]
    pub fn normal(self) -> Facing {
        match self {
            Plane::Wall => Facing::South,
            Plane::Floor => Facing::Up,
        }
    }

    /// Where the actor looks while standing one cell off the target.
    #[inline]
    pub fn stand_facing(self) -> Facing {
        match self {
            Plane::Wall => Facing::North,
            Plane::Floor => Facing::South,
        }
    }

    /// Direction the actor places in; always back toward the target.
    #[inline]
    pub fn place_direction(self) -> Facing {
        self.normal().opposite()
    }
}

impl std::str::FromStr for Plane {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wall" => Ok(Plane::Wall),
            "floor" => Ok(Plane::Floor),
            other => Err(format!("unknown plane '{}', expected wall or floor", other)),
        }
    }
}

/// `None` when the cell falls outside the `i32` grid.
#[inline]
pub fn map_cell(origin: BlockPos, plane: Plane, local_x: i32, local_y: i32) -> Option<BlockPos> {
    match plane {
        Plane::Wall => origin.checked_offset(local_x, local_y.checked_neg()?, 0),
        Plane::Floor => origin.checked_offset(local_x, 0, local_y),
    }
}

/// Cells from `face` out to `thickness - 1` along the plane normal.
///
/// `None` when the far face falls outside the `i32` grid.
pub fn extrusion(face: BlockPos, plane: Plane, thickness: i32) -> Option<BlockRange> {
    let depth = thickness.max(1) - 1;
    let n = plane.normal().unit();
    let far = face.checked_offset(n.x * depth, n.y * depth, n.z * depth)?;
    Some(BlockRange::new(face, far))
}
