//! Column-stable tab expansion for line-oriented text parsers
//!
//! Parsers that make decisions based on indentation (list continuation,
//! indented code blocks and so on) need every line to be expressed in the
//! same column space before those rules run. This crate provides that single
//! normalization step, plus the ASCII punctuation test used by the same
//! family of text utilities.
//!
//! # Components
//!
//! - **Tab expansion** ([`tabs`]): replaces each tab with the number of spaces
//!   that reaches the next tab stop, borrowing the input unchanged when it
//!   contains no tab.
//! - **Symbol classification** ([`symbol`]): a closed ASCII range test for
//!   characters that may be backslash-escaped.
//! - **Diagnostics** ([`diagnostics`]): a debug-only warning macro that is
//!   compiled out of release builds.
//!
//! # Example
//!
//! ```rust
//! use std::borrow::Cow;
//! use untabify_core::{expand_tabs, is_ascii_symbol, TabExpander, TabSize};
//!
//! let expander = TabExpander::new(TabSize::new(4).unwrap());
//! assert_eq!(expander.expand("a\tb"), "a   b");
//!
//! // Text without tabs is handed back as-is
//! assert!(matches!(expander.expand("no tabs"), Cow::Borrowed("no tabs")));
//!
//! // The validating entry point rejects tab sizes outside 1..=8
//! assert!(expand_tabs("x", 9).is_err());
//!
//! assert!(is_ascii_symbol('#'));
//! assert!(!is_ascii_symbol('A'));
//! ```

#![warn(missing_docs)]

pub mod diagnostics;
pub mod error;
pub mod symbol;
pub mod tabs;

pub use error::{CoreError, Result};
pub use symbol::{is_ascii_symbol, is_ascii_symbol_byte};
pub use tabs::{expand_tabs, expand_tabs_opt, TabExpander, TabSize};

#[doc(hidden)]
pub mod __private {
    pub use tracing;
}
