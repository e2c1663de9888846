//! Reusable padding settings.

use std::borrow::Cow;

use crate::{leftpad_with, try_leftpad_with, LeftPadError};

/// A reusable padding request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadConfig {
    /// Target width in characters.
    pub width: usize,
    /// Character inserted on the left.
    pub pad_char: char,
    /// Upper bound on `width` enforced by [`PadConfig::try_pad`].
    pub max_width: Option<usize>,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            width: 0,
            pad_char: ' ',
            max_width: None,
        }
    }
}

impl PadConfig {
    /// Pad to `width` with spaces and no width limit.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Replace the fill character.
    pub fn with_pad_char(mut self, pad_char: char) -> Self {
        self.pad_char = pad_char;
        self
    }

    /// Cap the width accepted by [`PadConfig::try_pad`].
    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = Some(max_width);
        self
    }

    /// Pad `s` ignoring `max_width`.
    pub fn pad<'a, S>(&self, s: S) -> Cow<'a, str>
    where
        S: Into<Cow<'a, str>>,
    {
        leftpad_with(s, self.width, self.pad_char)
    }

    /// Pad `s`, rejecting widths above `max_width`.
    pub fn try_pad<'a, S>(&self, s: S) -> Result<Cow<'a, str>, LeftPadError>
    where
        S: Into<Cow<'a, str>>,
    {
        try_leftpad_with(s, self.width, self.pad_char, self.max_width)
    }
}
