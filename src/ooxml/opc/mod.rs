/// Open Packaging Conventions (OPC) implementation.
///
/// OPC is the container format underneath `.pptx`: a ZIP archive of parts,
/// a `[Content_Types].xml` map, and `.rels` files that link parts together.
/// This module covers what writing (and verifying) a presentation needs:
///
/// - Package structure (parts, relationships)
/// - Content type management
/// - ZIP-based physical packaging with deterministic output
pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgreader;
pub mod pkgwriter;
pub mod rel;

pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::{Part, XmlPart};
pub use pkgreader::PackageReader;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
