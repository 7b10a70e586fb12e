//! Loads an OPC package back from its ZIP form.
//!
//! Only what verification needs is supported: every member becomes an
//! [`XmlPart`] with its content type and relationships resolved.

use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::package::OpcPackage;
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::{Part, XmlPart};
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use crate::ooxml::opc::rel::Relationships;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::HashMap;

/// Content type lookup built from `[Content_Types].xml`.
#[derive(Debug, Default)]
pub struct ContentTypeMap {
    /// Extension (lowercase, no dot) to content type
    defaults: HashMap<String, String>,
    /// Partname to content type
    overrides: HashMap<String, String>,
}

impl ContentTypeMap {
    /// Parse `[Content_Types].xml`.
    pub fn from_xml(xml: &[u8]) -> Result<Self> {
        let mut map = Self::default();
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                    let mut key = None;
                    let mut content_type = None;
                    for attr in e.attributes().flatten() {
                        let value = attr
                            .unescape_value()
                            .map_err(|err| OpcError::XmlError(err.to_string()))?
                            .into_owned();
                        match attr.key.as_ref() {
                            b"Extension" | b"PartName" => key = Some(value),
                            b"ContentType" => content_type = Some(value),
                            _ => {},
                        }
                    }

                    if let (Some(key), Some(content_type)) = (key, content_type) {
                        match e.local_name().as_ref() {
                            b"Default" => {
                                map.defaults.insert(key.to_ascii_lowercase(), content_type);
                            },
                            b"Override" => {
                                map.overrides.insert(key, content_type);
                            },
                            _ => {},
                        }
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OpcError::XmlError(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        Ok(map)
    }

    /// Content type for a partname: override first, then extension default.
    pub fn content_type(&self, partname: &PackURI) -> Option<&str> {
        self.overrides
            .get(partname.as_str())
            .or_else(|| self.defaults.get(&partname.ext().to_ascii_lowercase()))
            .map(String::as_str)
    }
}

/// Reads a physical package into an [`OpcPackage`].
pub struct PackageReader;

impl PackageReader {
    /// Load an OPC package from ZIP bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<OpcPackage> {
        let mut phys = PhysPkgReader::from_bytes(data)?;
        Self::read(&mut phys)
    }

    /// Load an OPC package from a physical reader.
    pub fn read(phys: &mut PhysPkgReader) -> Result<OpcPackage> {
        let content_types = ContentTypeMap::from_xml(&phys.content_types_xml()?)?;
        let mut package = OpcPackage::new();

        let root = PackURI::new(PACKAGE_URI).map_err(OpcError::InvalidPackUri)?;
        if let Some(xml) = phys.rels_xml_for(&root)? {
            for rel in Relationships::from_xml(PACKAGE_URI, &xml)?.iter() {
                package.rels_mut().add_relationship(
                    rel.reltype().to_string(),
                    rel.target_ref().to_string(),
                    rel.r_id().to_string(),
                );
            }
        }

        for member in phys.member_names() {
            let partname = PackURI::new(format!("/{}", member)).map_err(OpcError::InvalidPackUri)?;
            if partname.as_str() == CONTENT_TYPES_URI || partname.ext() == "rels" {
                continue;
            }

            let content_type = content_types
                .content_type(&partname)
                .ok_or_else(|| OpcError::XmlError(format!("No content type for {}", partname)))?
                .to_string();
            let blob = phys.blob_for(&partname)?;
            let mut part = XmlPart::new(partname.clone(), content_type, blob);

            if let Some(xml) = phys.rels_xml_for(&partname)? {
                for rel in Relationships::from_xml(partname.base_uri(), &xml)?.iter() {
                    part.rels_mut().add_relationship(
                        rel.reltype().to_string(),
                        rel.target_ref().to_string(),
                        rel.r_id().to_string(),
                    );
                }
            }

            package.add_part(Box::new(part))?;
        }

        Ok(package)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_lookup() {
        let xml = br#"<?xml version="1.0"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/ppt/presentation.xml" ContentType="application/pres"/>
</Types>"#;
        let map = ContentTypeMap::from_xml(xml).unwrap();

        let pres = PackURI::new("/ppt/presentation.xml").unwrap();
        assert_eq!(map.content_type(&pres), Some("application/pres"));

        let other = PackURI::new("/ppt/other.XML").unwrap();
        assert_eq!(map.content_type(&other), Some("application/xml"));

        let png = PackURI::new("/ppt/media/image1.png").unwrap();
        assert_eq!(map.content_type(&png), None);
    }
}
