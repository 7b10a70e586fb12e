//! Unified error type for the crate.
//!
//! Layer-specific errors ([`OpcError`](crate::ooxml::opc::error::OpcError),
//! [`OoxmlError`](crate::ooxml::error::OoxmlError)) convert into [`Error`].

pub mod conversions;
pub mod types;

pub use types::{Error, Result};
