//! Common types and utilities shared across the writer layers.

pub mod error;
pub mod style;
pub mod unit;
pub mod xml;

pub use error::{Error, Result};
pub use style::RGBColor;
pub use unit::Emu;
