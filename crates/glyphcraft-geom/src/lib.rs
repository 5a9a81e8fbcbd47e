//! Integer block-grid geometry shared by the glyph crates.
#![forbid(unsafe_code)]

use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A cell coordinate in the block grid. +Y is up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct BlockPos {
    #[cfg_attr(test, proptest(strategy = "-1_000_000i32..=1_000_000"))]
    pub x: i32,
    #[cfg_attr(test, proptest(strategy = "-1_000_000i32..=1_000_000"))]
    pub y: i32,
    #[cfg_attr(test, proptest(strategy = "-1_000_000i32..=1_000_000"))]
    pub z: i32,
}

impl BlockPos {
    pub const ORIGIN: BlockPos = BlockPos { x: 0, y: 0, z: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Overflows like plain `i32` addition; see [`BlockPos::checked_offset`].
    #[inline]
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// `None` if any axis leaves the `i32` range.
    #[inline]
    pub fn checked_offset(self, dx: i32, dy: i32, dz: i32) -> Option<Self> {
        Some(Self::new(
            self.x.checked_add(dx)?,
            self.y.checked_add(dy)?,
            self.z.checked_add(dz)?,
        ))
    }

    /// One step in `facing`.
    #[inline]
    pub fn step(self, facing: Facing) -> Self {
        self + facing.unit()
    }

    #[inline]
    pub fn checked_step(self, facing: Facing) -> Option<Self> {
        let u = facing.unit();
        self.checked_offset(u.x, u.y, u.z)
    }
}

impl Add for BlockPos {
    type Output = BlockPos;
    #[inline]
    fn add(self, rhs: BlockPos) -> BlockPos {
        BlockPos::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for BlockPos {
    #[inline]
    fn add_assign(&mut self, rhs: BlockPos) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for BlockPos {
    type Output = BlockPos;
    #[inline]
    fn sub(self, rhs: BlockPos) -> BlockPos {
        BlockPos::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for BlockPos {
    #[inline]
    fn sub_assign(&mut self, rhs: BlockPos) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Neg for BlockPos {
    type Output = BlockPos;
    #[inline]
    fn neg(self) -> BlockPos {
        BlockPos::new(-self.x, -self.y, -self.z)
    }
}

impl From<(i32, i32, i32)> for BlockPos {
    fn from(value: (i32, i32, i32)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<BlockPos> for (i32, i32, i32) {
    fn from(value: BlockPos) -> Self {
        (value.x, value.y, value.z)
    }
}

/// Axis-aligned direction. North is -Z, East is +X.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Facing {
    North,
    South,
    East,
    West,
    Up,
    Down,
}

impl Facing {
    #[inline]
    pub const fn unit(self) -> BlockPos {
        match self {
            Facing::North => BlockPos::new(0, 0, -1),
            Facing::South => BlockPos::new(0, 0, 1),
            Facing::East => BlockPos::new(1, 0, 0),
            Facing::West => BlockPos::new(-1, 0, 0),
            Facing::Up => BlockPos::new(0, 1, 0),
            Facing::Down => BlockPos::new(0, -1, 0),
        }
    }

    #[inline]
    pub const fn opposite(self) -> Facing {
        match self {
            Facing::North => Facing::South,
            Facing::South => Facing::North,
            Facing::East => Facing::West,
            Facing::West => Facing::East,
            Facing::Up => Facing::Down,
            Facing::Down => Facing::Up,
        }
    }
}

/// Inclusive axis-aligned box of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockRange {
    pub min: BlockPos,
    pub max: BlockPos,
}

impl BlockRange {
    /// Box spanning both corners, in any order.
    pub fn new(a: BlockPos, b: BlockPos) -> Self {
        Self {
            min: BlockPos::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: BlockPos::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    #[inline]
    pub fn single(p: BlockPos) -> Self {
        Self { min: p, max: p }
    }

    #[inline]
    pub fn contains(&self, p: BlockPos) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Number of cells in the box.
    pub fn volume(&self) -> usize {
        let dx = (self.max.x - self.min.x) as usize + 1;
        let dy = (self.max.y - self.min.y) as usize + 1;
        let dz = (self.max.z - self.min.z) as usize + 1;
        dx * dy * dz
    }

    /// Cells in y, z, x order (x fastest).
    pub fn iter(&self) -> impl Iterator<Item = BlockPos> + '_ {
        let (min, max) = (self.min, self.max);
        (min.y..=max.y).flat_map(move |y| {
            (min.z..=max.z).flat_map(move |z| (min.x..=max.x).map(move |x| BlockPos::new(x, y, z)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn step_then_opposite_is_identity(p in any::<BlockPos>()) {
            for f in [Facing::North, Facing::South, Facing::East, Facing::West, Facing::Up, Facing::Down] {
                prop_assert_eq!(p.step(f).step(f.opposite()), p);
            }
        }

        #[test]
        fn checked_offset_agrees_in_range(p in any::<BlockPos>(), d in any::<BlockPos>()) {
            prop_assert_eq!(p.checked_offset(d.x, d.y, d.z), Some(p + d));
        }

        #[test]
        fn neg_is_sub_from_origin(p in any::<BlockPos>()) {
            prop_assert_eq!(-p, BlockPos::ORIGIN - p);
        }
    }
}
