//! Resynchronizing scan over concatenated `16x16:` units.

use crate::glyph::Glyph;
use crate::header::{decode_fixed, hex_digits_for};
use crate::scan::is_hex_char;

pub const UNIT_MARKER: &str = "16x16:";
pub const UNIT_SIZE: usize = 16;

/// Every well-formed `16x16:` + 64 hex unit in `code`, in source order.
///
/// A unit broken by a non-hex character is dropped and the search resumes just
/// past that character. A unit cut short by the end of input ends the scan.
pub fn scan_all(code: &str) -> Vec<Glyph> {
    let need = hex_digits_for(UNIT_SIZE, UNIT_SIZE);
    let mut out = Vec::new();
    let mut cursor = 0;
    while let Some(found) = code[cursor..].find(UNIT_MARKER) {
        let body_start = cursor + found + UNIT_MARKER.len();
        let mut hex = String::with_capacity(need);
        let mut next = body_start;
        let mut aborted = false;
        for (i, c) in code[body_start..].char_indices() {
            if hex.len() == need {
                break;
            }
            next = body_start + i + c.len_utf8();
            if !is_hex_char(c) {
                aborted = true;
                break;
            }
            hex.push(c);
        }
        if aborted {
            log::trace!(target: "glyph", "dropped 16x16 unit at byte {}", cursor + found);
            cursor = next;
            continue;
        }
        if hex.len() < need {
            break;
        }
        out.push(decode_fixed(UNIT_SIZE, UNIT_SIZE, &hex));
        cursor = next;
    }
    out
}
