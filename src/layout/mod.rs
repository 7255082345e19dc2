//! Text layout utilities for positioning content on panels.
//!
//! This module provides the word-wrapping engine and the helpers that turn its
//! output into positioned line spans ready for rasterization. Wrapping is
//! greedy: each line is filled with as many whole words as fit within the
//! maximum width before moving on, and explicit newlines in the input always
//! force a hard break.
//!
//! Widths are supplied by the caller through the [`Measure`] trait, so the
//! engine is agnostic to font metrics: hand it a [`SizedFont`](crate::SizedFont)
//! for real glyph advances, or any `Fn(&str) -> Px` closure.
//!
//! # Example
//!
//! ```
//! use panel_text::layout::wrap_text;
//! use panel_text::Px;
//!
//! // a toy measurer: every character is 10px wide
//! let measure = |s: &str| Px(s.chars().count() as f32 * 10.0);
//!
//! let lines = wrap_text(&measure, "the quick brown fox", Px(160.0)).unwrap();
//! assert_eq!(lines, vec!["the quick brown".to_string(), "fox".to_string()]);
//! ```

mod lines;
mod margins;
mod wrap;

pub use lines::*;
pub use margins::*;
pub use wrap::*;
