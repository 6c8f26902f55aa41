//! Tab expansion at fixed tab stops
//!
//! A tab advances the output column to the next multiple of the tab size,
//! counting from column 0 at the start of the line. Every other character,
//! whatever its display width, occupies exactly one column.
//!
//! Input is expected to be a single line, optionally ending in one line
//! terminator. Nothing here looks for embedded newlines.

use crate::error::{CoreError, Result};
use crate::warning;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Extra capacity reserved on top of the input length when a tab forces a copy
const BUFFER_SLACK: usize = 12;

/// Width of a tab stop, guaranteed to lie in `1..=8`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct TabSize(u8);

impl TabSize {
    /// Smallest accepted tab size
    pub const MIN: u8 = 1;
    /// Largest accepted tab size
    pub const MAX: u8 = 8;
    /// Tab size used when none is given
    pub const DEFAULT: TabSize = TabSize(4);

    /// Validate a tab size.
    ///
    /// Out-of-range values are rejected, never clamped.
    pub fn new(size: u8) -> Result<Self> {
        Self::try_from(size as usize)
    }

    /// The tab size as an integer
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Number of spaces a tab contributes when it starts at `column`.
    ///
    /// Always in `1..=size`: a tab sitting exactly on a stop still emits a
    /// full run.
    #[inline]
    pub const fn step_at(self, column: usize) -> usize {
        let size = self.0 as usize;
        size - (column % size)
    }

    /// Column reached after a tab that starts at `column`
    #[inline]
    pub const fn next_stop(self, column: usize) -> usize {
        column + self.step_at(column)
    }
}

impl Default for TabSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for TabSize {
    type Error = CoreError;

    fn try_from(value: usize) -> Result<Self> {
        if !(Self::MIN as usize..=Self::MAX as usize).contains(&value) {
            warning!("rejected tab size {}", value);
            return Err(CoreError::TabSizeOutOfRange { value });
        }
        Ok(Self(value as u8))
    }
}

impl TryFrom<u8> for TabSize {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self> {
        Self::try_from(value as usize)
    }
}

impl From<TabSize> for u8 {
    fn from(size: TabSize) -> Self {
        size.0
    }
}

impl FromStr for TabSize {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let value: usize = s
            .trim()
            .parse()
            .map_err(|_| CoreError::InvalidTabSize(s.to_string()))?;
        Self::try_from(value)
    }
}

impl fmt::Display for TabSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Replaces tabs with spaces for a fixed [`TabSize`].
///
/// The expander holds no state between calls; it is `Copy` and can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabExpander {
    tab_size: TabSize,
}

impl TabExpander {
    /// Create an expander for the given tab size
    pub const fn new(tab_size: TabSize) -> Self {
        Self { tab_size }
    }

    /// The tab size this expander uses
    pub const fn tab_size(&self) -> TabSize {
        self.tab_size
    }

    /// Expand every tab in `text`.
    ///
    /// Returns `Cow::Borrowed(text)` (the same slice, no allocation) when
    /// `text` contains no tab. Otherwise a new string is built in which each
    /// tab is replaced by [`TabSize::step_at`] spaces for the column it falls
    /// on in the expanded output.
    pub fn expand<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut expanded: Option<String> = None;
        // Column of the expanded output just before the pending span
        let mut real_column = 0;
        // Byte offset of the first character after the previous tab
        let mut last_scan_pos = 0;

        for (pos, _) in text.match_indices('\t') {
            let literal = &text[last_scan_pos..pos];
            real_column += literal.chars().count();

            let step = self.tab_size.step_at(real_column);
            real_column += step;

            let buf = expanded
                .get_or_insert_with(|| String::with_capacity(text.len() + BUFFER_SLACK));
            buf.push_str(literal);
            buf.extend(std::iter::repeat(' ').take(step));

            last_scan_pos = pos + 1;
        }

        match expanded {
            None => Cow::Borrowed(text),
            Some(mut buf) => {
                buf.push_str(&text[last_scan_pos..]);
                Cow::Owned(buf)
            }
        }
    }

    /// Expand an optional text; `None` stays `None`.
    pub fn expand_opt<'a>(&self, text: Option<&'a str>) -> Option<Cow<'a, str>> {
        text.map(|text| self.expand(text))
    }
}

/// Validate `tab_size` and expand the tabs in `text`.
///
/// # Errors
///
/// Returns [`CoreError::TabSizeOutOfRange`] when `tab_size` is outside
/// `1..=8`, regardless of the text.
///
/// ```rust
/// use untabify_core::expand_tabs;
///
/// assert_eq!(expand_tabs("ab\tcd", 8).unwrap(), "ab      cd");
/// assert!(expand_tabs("", 0).is_err());
/// ```
pub fn expand_tabs(text: &str, tab_size: usize) -> Result<Cow<'_, str>> {
    let tab_size = TabSize::try_from(tab_size)?;
    Ok(TabExpander::new(tab_size).expand(text))
}

/// [`expand_tabs`] for input that may be absent.
///
/// The tab size is validated first, so `None` with an invalid size is still
/// an error.
pub fn expand_tabs_opt(text: Option<&str>, tab_size: usize) -> Result<Option<Cow<'_, str>>> {
    let tab_size = TabSize::try_from(tab_size)?;
    Ok(TabExpander::new(tab_size).expand_opt(text))
}
