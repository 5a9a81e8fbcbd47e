//! Single `"<w>x<h>:<hex>"` header decoding.
//!
//! The body is fixed-length: exactly `ceil(w*h/4)` digits are read after the
//! colon and anything beyond them is ignored, so a header can sit at the front
//! of a longer stream.

use crate::error::DecodeError;
use crate::glyph::{Glyph, MAX_GLYPH_SIZE};
use crate::scan::{bounded_slice, is_digits_only, is_hex_only};

/// Shortest string that can hold a header, e.g. `1x1:0`.
pub const MIN_CODE_LEN: usize = 5;

pub fn decode(code: &str) -> Result<Glyph, DecodeError> {
    let chars: Vec<char> = code.chars().collect();
    if chars.len() < MIN_CODE_LEN {
        return Err(DecodeError::EmptyOrTooShortCode);
    }

    let idx_x = chars.iter().position(|c| *c == 'x' || *c == 'X');
    let idx_colon = chars.iter().position(|c| *c == ':');
    let (idx_x, idx_colon) = match (idx_x, idx_colon) {
        (Some(x), Some(c)) if x > 0 && c > x + 1 => (x as isize, c as isize),
        _ => return Err(DecodeError::MalformedHeader),
    };

    let w_str = bounded_slice(code, 0, idx_x);
    let h_str = bounded_slice(code, idx_x + 1, idx_colon);
    if !is_digits_only(w_str) || !is_digits_only(h_str) {
        return Err(DecodeError::NonNumericSize);
    }
    let w = parse_size(w_str)?;
    let h = parse_size(h_str)?;

    let need = hex_digits_for(w, h);
    let hex_start = idx_colon as usize + 1;
    if hex_start + need > chars.len() {
        return Err(DecodeError::InsufficientHex { need });
    }
    let hex = bounded_slice(code, hex_start as isize, (hex_start + need) as isize);
    if !is_hex_only(hex) {
        return Err(DecodeError::InvalidHexCharacter);
    }
    Ok(decode_fixed(w, h, hex))
}

/// Digits needed to carry `w * h` bits.
#[inline]
pub fn hex_digits_for(w: usize, h: usize) -> usize {
    (w * h).div_ceil(4)
}

fn parse_size(s: &str) -> Result<usize, DecodeError> {
    // Overflowing digit strings are out of range too.
    match s.parse::<usize>() {
        Ok(v) if (1..=MAX_GLYPH_SIZE).contains(&v) => Ok(v),
        _ => Err(DecodeError::SizeOutOfRange),
    }
}

/// Unpacks pre-validated hex digits MSB-first into a `w` x `h` grid.
///
/// Stops after `w * h` bits; non-hex characters read as zero.
pub(crate) fn decode_fixed(w: usize, h: usize, hex: &str) -> Glyph {
    let total = w * h;
    let mut bits = vec![false; total];
    let mut bit_index = 0;
    'digits: for c in hex.chars() {
        let v = c.to_digit(16).unwrap_or(0);
        for k in (0..4).rev() {
            if bit_index >= total {
                break 'digits;
            }
            bits[bit_index] = (v >> k) & 1 == 1;
            bit_index += 1;
        }
    }
    Glyph::from_bits(w, h, bits)
}
