/// Largest accepted width or height.
pub const MAX_GLYPH_SIZE: usize = 64;

/// A decoded rectangular bitmap, row-major with row 0 at the top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl Glyph {
    /// `bits.len()` must equal `width * height`; callers in this crate guarantee it.
    pub(crate) fn from_bits(width: usize, height: usize, bits: Vec<bool>) -> Self {
        debug_assert_eq!(bits.len(), width * height);
        Self {
            width,
            height,
            bits,
        }
    }

    /// Builds a glyph from explicit rows; `None` if the rows are ragged, empty,
    /// or larger than [`MAX_GLYPH_SIZE`] on either axis.
    pub fn from_rows(rows: &[Vec<bool>]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if width == 0 || width > MAX_GLYPH_SIZE || height > MAX_GLYPH_SIZE {
            return None;
        }
        if rows.iter().any(|r| r.len() != width) {
            return None;
        }
        Some(Self::from_bits(width, height, rows.concat()))
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.bits[y * self.width + x]
    }

    /// Row `y`, or `None` past the last row.
    pub fn row(&self, y: usize) -> Option<&[bool]> {
        (y < self.height).then(|| &self.bits[y * self.width..(y + 1) * self.width])
    }

    /// Set cells as `(x, y)`, row by row.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, b)| **b)
            .map(|(i, _)| (i % self.width, i / self.width))
    }

    pub fn count_set(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }

    /// The canonical `"<w>x<h>:<hex>"` form of this glyph.
    pub fn to_code(&self) -> String {
        format!("{}x{}:{}", self.width, self.height, encode_hex(self))
    }
}

/// Packs a glyph's bits MSB-first into uppercase hex, zero-padding the final digit.
pub fn encode_hex(glyph: &Glyph) -> String {
    glyph
        .bits
        .chunks(4)
        .map(|nibble| {
            let v = nibble
                .iter()
                .enumerate()
                .fold(0u32, |acc, (k, b)| acc | (u32::from(*b) << (3 - k)));
            char::from_digit(v, 16).map_or('0', |c| c.to_ascii_uppercase())
        })
        .collect()
}
