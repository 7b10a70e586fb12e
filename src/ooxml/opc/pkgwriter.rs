//! Package writer for OPC packages.
//!
//! Serializes an [`OpcPackage`] to a ZIP archive: `[Content_Types].xml`,
//! the package relationships, then every part followed by its own `.rels`.

use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::{content_type as ct, namespace};
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::package::OpcPackage;
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PACKAGE_URI, PackURI};
use crate::ooxml::opc::phys_pkg::PhysPkgWriter;
use std::collections::BTreeMap;
use std::fmt::Write as FmtWrite;
use std::io::Write;
use std::path::Path;

/// Package writer that serializes an OPC package to a ZIP file.
///
/// # Example
///
/// ```no_run
/// use insight_deck::ooxml::opc::{OpcPackage, PackageWriter};
///
/// let pkg = OpcPackage::new();
/// PackageWriter::write("output.pptx", &pkg)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct PackageWriter;

impl PackageWriter {
    /// Write an OPC package to a file.
    ///
    /// The archive is written to a temporary file next to `path` and renamed
    /// into place, so a failed write never leaves a truncated package behind.
    /// A replaced file keeps its permissions; a new one gets the same mode a
    /// plain create would.
    pub fn write<P: AsRef<Path>>(path: P, package: &OpcPackage) -> Result<()> {
        let path = path.as_ref();
        let bytes = Self::to_bytes(package)?;

        let persist_err = |source: std::io::Error| OpcError::Persist {
            path: path.display().to_string(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        #[cfg_attr(not(unix), allow(unused_mut))]
        let mut builder = tempfile::Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            // Masked by the umask like any other create
            builder.permissions(std::fs::Permissions::from_mode(0o666));
        }
        let mut tmp = builder.tempfile_in(dir).map_err(persist_err)?;
        if let Ok(existing) = std::fs::metadata(path) {
            tmp.as_file()
                .set_permissions(existing.permissions())
                .map_err(persist_err)?;
        }
        tmp.write_all(&bytes).map_err(persist_err)?;
        tmp.as_file().sync_all().map_err(persist_err)?;
        tmp.persist(path).map_err(|e| persist_err(e.error))?;

        log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }

    /// Serialize an OPC package to bytes.
    pub fn to_bytes(package: &OpcPackage) -> Result<Vec<u8>> {
        let mut phys_writer = PhysPkgWriter::new();

        Self::write_content_types(&mut phys_writer, package)?;
        Self::write_pkg_rels(&mut phys_writer, package)?;
        Self::write_parts(&mut phys_writer, package)?;

        phys_writer.finish()
    }

    fn write_content_types(phys_writer: &mut PhysPkgWriter, package: &OpcPackage) -> Result<()> {
        let blob = ContentTypesItem::from_package(package).to_xml()?;
        let uri = PackURI::new(CONTENT_TYPES_URI).map_err(OpcError::InvalidPackUri)?;
        phys_writer.write(&uri, blob.as_bytes())
    }

    fn write_pkg_rels(phys_writer: &mut PhysPkgWriter, package: &OpcPackage) -> Result<()> {
        let rels_uri = PackURI::new(PACKAGE_URI)
            .and_then(|uri| uri.rels_uri())
            .map_err(OpcError::InvalidPackUri)?;
        phys_writer.write(&rels_uri, package.rels().to_xml()?.as_bytes())
    }

    fn write_parts(phys_writer: &mut PhysPkgWriter, package: &OpcPackage) -> Result<()> {
        for part in package.iter_parts() {
            phys_writer.write(part.partname(), part.blob())?;

            if !part.rels().is_empty() {
                let rels_uri = part
                    .partname()
                    .rels_uri()
                    .map_err(OpcError::InvalidPackUri)?;
                phys_writer.write(&rels_uri, part.rels().to_xml()?.as_bytes())?;
            }
        }

        log::debug!("serialized {} parts", package.part_count());
        Ok(())
    }
}

/// Builder for `[Content_Types].xml`.
///
/// Both maps are ordered so the output is stable.
struct ContentTypesItem {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,

    /// Override content types by partname
    overrides: BTreeMap<String, String>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    fn from_package(package: &OpcPackage) -> Self {
        let mut cti = Self::new();
        for part in package.iter_parts() {
            cti.add_content_type(part.partname(), part.content_type());
        }
        cti
    }

    /// Use the extension default when it already matches, otherwise an override.
    fn add_content_type(&mut self, partname: &PackURI, content_type: &str) {
        let ext = partname.ext().to_ascii_lowercase();
        if self.defaults.get(&ext).map(String::as_str) == Some(content_type) {
            return;
        }
        self.overrides
            .insert(partname.to_string(), content_type.to_string());
    }

    fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(256 + 160 * (self.defaults.len() + self.overrides.len()));

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        write!(xml, r#"<Types xmlns="{}">"#, namespace::OPC_CONTENT_TYPES)?;

        for (ext, content_type) in &self.defaults {
            write!(
                xml,
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(content_type)
            )?;
        }

        for (partname, content_type) in &self.overrides {
            write!(
                xml,
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type)
            )?;
        }

        xml.push_str("</Types>");
        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;
    use crate::ooxml::opc::part::XmlPart;
    use crate::ooxml::opc::pkgreader::PackageReader;

    fn sample_package() -> OpcPackage {
        let mut pkg = OpcPackage::new();
        let pres = PackURI::new("/ppt/presentation.xml").unwrap();
        pkg.add_part(Box::new(XmlPart::from_xml(
            pres.clone(),
            ct::PML_PRESENTATION_MAIN,
            "<p:presentation/>".to_string(),
        )))
        .unwrap();
        pkg.relate_to(&pres, rt::OFFICE_DOCUMENT);
        pkg
    }

    #[test]
    fn test_content_types_xml() {
        let xml = ContentTypesItem::from_package(&sample_package()).to_xml().unwrap();

        assert!(xml.contains(r#"<Default Extension="xml" ContentType="application/xml"/>"#));
        assert!(xml.contains(r#"<Override PartName="/ppt/presentation.xml""#));
    }

    #[test]
    fn test_plain_xml_part_uses_default() {
        let mut cti = ContentTypesItem::new();
        cti.add_content_type(&PackURI::new("/customXml/item1.xml").unwrap(), ct::XML);
        assert!(cti.overrides.is_empty());
    }

    #[test]
    fn test_to_bytes_reads_back() {
        let bytes = PackageWriter::to_bytes(&sample_package()).unwrap();
        let pkg = PackageReader::from_bytes(bytes).unwrap();

        let main = pkg.main_document_part().unwrap();
        assert_eq!(main.content_type(), ct::PML_PRESENTATION_MAIN);
        assert_eq!(main.blob(), b"<p:presentation/>");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.pptx");
        std::fs::write(&target, b"old").unwrap();
        std::fs::set_permissions(&target, std::fs::Permissions::from_mode(0o640)).unwrap();

        PackageWriter::write(&target, &sample_package()).unwrap();
        let mode = std::fs::metadata(&target).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }

    #[test]
    fn test_write_to_missing_directory_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing").join("out.pptx");

        let err = PackageWriter::write(&target, &sample_package()).unwrap_err();
        assert!(matches!(err, OpcError::Persist { .. }));
        assert!(!target.exists());
    }
}
