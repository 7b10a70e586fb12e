//! Office Open XML support.
//!
//! - [`opc`]: the package container (parts, relationships, ZIP)
//! - [`pptx`]: PresentationML writing and read-back inspection

pub mod error;
pub mod opc;
pub mod pptx;

pub use error::{OoxmlError, Result};
pub use opc::{OpcPackage, PackURI};
