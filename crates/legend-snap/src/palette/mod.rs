//! Legend palette types and utilities
//!
//! This module provides the [`Palette`] type (the fixed, ordered set of
//! allowed output colors with labels) and the error types for parsing and
//! validation.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::Palette;
