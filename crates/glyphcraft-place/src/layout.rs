use glyphcraft_glyph::Glyph;

/// Blank columns between neighbouring glyphs.
pub const GLYPH_GAP: usize = 1;

/// Glyphs laid left to right with their x offsets.
pub struct PlacementRun<'a> {
    pub entries: Vec<(&'a Glyph, usize)>,
}

impl<'a> PlacementRun<'a> {
    pub fn layout(glyphs: &'a [Glyph]) -> Self {
        let mut offset = 0;
        let entries = glyphs
            .iter()
            .map(|g| {
                let at = offset;
                offset += g.width() + GLYPH_GAP;
                (g, at)
            })
            .collect();
        Self { entries }
    }

    /// Total width spanned, without a trailing gap.
    pub fn width(&self) -> usize {
        self.entries
            .last()
            .map(|(g, at)| at + g.width())
            .unwrap_or(0)
    }

    pub fn offsets(&self) -> Vec<usize> {
        self.entries.iter().map(|(_, at)| *at).collect()
    }
}
