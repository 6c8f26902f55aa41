//! ASCII symbol classification
//!
//! A character is an ASCII symbol when it sits in one of the four printable
//! gaps around the alphanumeric blocks:
//!
//! | Range       | Characters          |
//! |-------------|---------------------|
//! | 0x21..=0x2F | `!"#$%&'()*+,-./`   |
//! | 0x3A..=0x40 | `:;<=>?@`           |
//! | 0x5B..=0x60 | ``[\]^_` ``          |
//! | 0x7B..=0x7E | `{\|}~`             |
//!
//! Unicode symbols and punctuation never match; callers treat them as
//! literal text when deciding what a backslash may escape.

/// Returns `true` if `c` is an ASCII punctuation/symbol character.
///
/// Space, DEL, control characters, digits, letters and every non-ASCII
/// character return `false`.
#[inline]
pub const fn is_ascii_symbol(c: char) -> bool {
    // Bounds are the exclusive neighbours: space, '0', '9', 'A', 'Z', 'a', 'z', DEL
    (c > ' ' && c < '0') || (c > '9' && c < 'A') || (c > 'Z' && c < 'a') || (c > 'z' && c < '\x7f')
}

/// Byte form of [`is_ascii_symbol`] for scanners working on `&[u8]`.
///
/// Bytes at or above 0x80 return `false`.
#[inline]
pub const fn is_ascii_symbol_byte(b: u8) -> bool {
    matches!(b, b'!'..=b'/' | b':'..=b'@' | b'['..=b'`' | b'{'..=b'~')
}
