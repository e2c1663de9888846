//! Left-padding for strings (both `&str` and `String`).
//!
//! Widths are counted in Unicode scalar values, not bytes, so `"é"` has a
//! width of one.
//!
//! ```
//! use left_pad::{leftpad, leftpad_with};
//!
//! assert_eq!(leftpad("blubb", 7), "  blubb");
//! assert_eq!(leftpad_with("blubb", 7, '.'), "..blubb");
//!
//! let s: String = "blubb".to_owned();
//! assert_eq!(leftpad(s, 7), "  blubb");
//! ```

#![deny(missing_docs)]

use std::borrow::Cow;
use std::iter;

pub mod config;
pub mod error;
pub mod io_utils;

pub use config::PadConfig;
pub use error::LeftPadError;

/// Number of fill characters needed to bring `s` up to `width`, or `None`
/// when it is already wide enough.
fn padding_needed(s: &str, width: usize) -> Option<usize> {
    let len = s.chars().count();
    (len < width).then(|| width - len)
}

fn pad_into(buf: &mut String, s: &str, to_pad: usize, pad_char: char) {
    buf.extend(iter::repeat(pad_char).take(to_pad));
    buf.push_str(s);
}

/// Pads a string to `len` characters by inserting `pad_char` from the left.
///
/// If the string is already `len` characters or longer it is returned as-is,
/// without copying.
///
/// # Panics
///
/// Panics if the padded string would not fit in memory. Use
/// [`try_leftpad_with`] when `len` comes from untrusted input.
///
/// # Examples
///
/// ```
/// use left_pad::leftpad_with;
///
/// assert_eq!(leftpad_with("blubb", 7, ' '), "  blubb");
/// assert_eq!(leftpad_with("blubb", 7, '.'), "..blubb");
///
/// assert_eq!(leftpad_with("blubb", 5, ' '), "blubb");
/// assert_eq!(leftpad_with("blubb", 3, ' '), "blubb");
/// ```
pub fn leftpad_with<'a, S>(string: S, len: usize, pad_char: char) -> Cow<'a, str>
where
    S: Into<Cow<'a, str>>,
{
    let cow = string.into();
    let Some(to_pad) = padding_needed(&cow, len) else {
        return cow;
    };
    log::trace!("padding {} chars with {} x {:?}", len - to_pad, to_pad, pad_char);

    let capacity = to_pad
        .saturating_mul(pad_char.len_utf8())
        .saturating_add(cow.len());
    let mut padded = String::with_capacity(capacity);
    pad_into(&mut padded, &cow, to_pad, pad_char);
    padded.into()
}

/// Pads a string to `len` characters by inserting spaces from the left.
///
/// Equal to calling `leftpad_with(string, len, ' ')`.
///
/// ```
/// use left_pad::{leftpad, leftpad_with};
///
/// assert_eq!(leftpad("blubb", 7), "  blubb");
/// assert_eq!(leftpad("blubb", 3), "blubb");
/// assert_eq!(leftpad("blubb", 7), leftpad_with("blubb", 7, ' '));
/// ```
pub fn leftpad<'a, S>(string: S, len: usize) -> Cow<'a, str>
where
    S: Into<Cow<'a, str>>,
{
    leftpad_with(string, len, ' ')
}

/// Fallible form of [`leftpad_with`].
///
/// Fails instead of aborting when `len` is above `max_width`, when the
/// padded size overflows `usize`, or when the buffer cannot be reserved.
/// A string that needs no padding is returned unchanged whatever the limit.
///
/// ```
/// use left_pad::{try_leftpad_with, LeftPadError};
///
/// assert_eq!(try_leftpad_with("7", 3, '0', Some(8)).unwrap(), "007");
/// assert!(matches!(
///     try_leftpad_with("7", 9, '0', Some(8)),
///     Err(LeftPadError::WidthTooLarge { width: 9, limit: 8 })
/// ));
/// ```
pub fn try_leftpad_with<'a, S>(
    string: S,
    len: usize,
    pad_char: char,
    max_width: Option<usize>,
) -> Result<Cow<'a, str>, LeftPadError>
where
    S: Into<Cow<'a, str>>,
{
    let cow = string.into();
    let Some(to_pad) = padding_needed(&cow, len) else {
        return Ok(cow);
    };
    if let Some(limit) = max_width {
        if len > limit {
            return Err(LeftPadError::WidthTooLarge { width: len, limit });
        }
    }

    let capacity = to_pad
        .checked_mul(pad_char.len_utf8())
        .and_then(|n| n.checked_add(cow.len()))
        .ok_or(LeftPadError::CapacityOverflow { width: len })?;
    let mut padded = String::new();
    padded.try_reserve_exact(capacity)?;
    log::trace!("padding {} chars with {} x {:?}", len - to_pad, to_pad, pad_char);
    pad_into(&mut padded, &cow, to_pad, pad_char);
    Ok(padded.into())
}

/// Parse a fill argument that must be exactly one character.
pub fn parse_pad_char(s: &str) -> Result<char, LeftPadError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(LeftPadError::InvalidFill(s.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_needed_counts_chars() {
        assert_eq!(padding_needed("héllo", 6), Some(1));
        assert_eq!(padding_needed("héllo", 5), None);
        assert_eq!(padding_needed("", 0), None);
    }

    #[test]
    fn parse_single_char() {
        assert_eq!(parse_pad_char("0").unwrap(), '0');
        assert_eq!(parse_pad_char("→").unwrap(), '→');
        assert!(parse_pad_char("").is_err());
        assert!(parse_pad_char("ab").is_err());
    }
}
