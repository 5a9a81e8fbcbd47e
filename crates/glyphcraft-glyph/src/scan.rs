//! Bounded slicing and character-class tests. Never panics.

/// Characters `start..end_exclusive` of `s`, with both bounds clamped.
pub fn bounded_slice(s: &str, start: isize, end_exclusive: isize) -> &str {
    let len = s.chars().count() as isize;
    let start = start.clamp(0, len) as usize;
    let end = end_exclusive.clamp(0, len) as usize;
    if start >= end {
        return "";
    }
    // Map char positions to byte offsets.
    let mut offsets = s.char_indices().map(|(i, _)| i).chain(std::iter::once(s.len()));
    let lo = offsets.nth(start).unwrap_or(s.len());
    let hi = offsets.nth(end - start - 1).unwrap_or(s.len());
    &s[lo..hi]
}

#[inline]
pub fn is_hex_char(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Non-empty and ASCII `0-9` only.
pub fn is_digits_only(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Non-empty and ASCII hex digits only, either case.
pub fn is_hex_only(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_hex_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_clamps_both_ends() {
        assert_eq!(bounded_slice("abcdef", -3, 2), "ab");
        assert_eq!(bounded_slice("abcdef", 4, 100), "ef");
        assert_eq!(bounded_slice("abcdef", 1, 4), "bcd");
        assert_eq!(bounded_slice("abcdef", 5, 2), "");
        assert_eq!(bounded_slice("", 0, 3), "");
    }

    #[test]
    fn slice_counts_characters_not_bytes() {
        assert_eq!(bounded_slice("漢字ab", 1, 3), "字a");
        assert_eq!(bounded_slice("漢字", 0, 2), "漢字");
    }

    #[test]
    fn empty_is_not_content() {
        assert!(!is_digits_only(""));
        assert!(!is_hex_only(""));
    }

    #[test]
    fn classes() {
        assert!(is_digits_only("0123456789"));
        assert!(!is_digits_only("12a"));
        assert!(!is_digits_only("-1"));
        assert!(is_hex_only("09afAF"));
        assert!(!is_hex_only("0g"));
        assert!(!is_hex_only(" f"));
    }
}
