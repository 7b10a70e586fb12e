//! Style value types shared by the writers.

pub mod color;

pub use color::RGBColor;
