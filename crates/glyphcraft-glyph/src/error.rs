use thiserror::Error;

/// Why a glyph code was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("code is empty or shorter than a minimal header")]
    EmptyOrTooShortCode,

    #[error("malformed header, expected a code like 16x16:HEX...")]
    MalformedHeader,

    #[error("glyph size is not numeric")]
    NonNumericSize,

    #[error("glyph size must be between 1 and 64")]
    SizeOutOfRange,

    #[error("not enough hex digits ({need} required)")]
    InsufficientHex { need: usize },

    #[error("code body contains a non-hex character")]
    InvalidHexCharacter,
}
