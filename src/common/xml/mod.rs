//! XML text helpers shared by the writers and the package reader.

mod escape;

pub use escape::escape_xml;
