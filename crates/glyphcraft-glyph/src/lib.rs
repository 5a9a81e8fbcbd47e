//! Glyph codes: `"<w>x<h>:<hex>"` bitmaps and concatenated `16x16:` streams.
#![forbid(unsafe_code)]

pub mod error;
pub mod glyph;
pub mod header;
pub mod multi;
pub mod scan;

pub use error::DecodeError;
pub use glyph::{Glyph, MAX_GLYPH_SIZE, encode_hex};
pub use header::decode;
pub use multi::scan_all;

/// Decodes every glyph in `code`.
///
/// Concatenated `16x16:` units win when at least one is well formed; otherwise
/// the whole input is decoded as a single header and its error is returned.
pub fn decode_code(code: &str) -> Result<Vec<Glyph>, DecodeError> {
    let many = scan_all(code);
    if !many.is_empty() {
        log::debug!(target: "glyph", "multi-glyph scan found {} glyph(s)", many.len());
        return Ok(many);
    }
    let single = decode(code)?;
    log::debug!(target: "glyph", "single glyph {}x{}", single.width(), single.height());
    Ok(vec![single])
}
