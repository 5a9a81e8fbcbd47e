/// Index into a [`MaterialCatalog`](crate::MaterialCatalog). Zero is the empty cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(pub u16);

impl MaterialId {
    pub const AIR: MaterialId = MaterialId(0);

    #[inline]
    pub fn is_air(self) -> bool {
        self == Self::AIR
    }
}
