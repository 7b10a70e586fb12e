use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;
use memchr::memmem;
/// Open Packaging Convention (OPC) objects related to package parts.
///
/// Parts are the units of content in an OPC package, each with a unique
/// partname, a content type, and optional relationships to other parts.

/// Trait representing a part in an OPC package.
pub trait Part: std::fmt::Debug {
    /// Get the partname of this part.
    fn partname(&self) -> &PackURI;

    /// Get the content type of this part.
    fn content_type(&self) -> &str;

    /// Get the binary content of this part.
    fn blob(&self) -> &[u8];

    /// Get the relationships for this part.
    fn rels(&self) -> &Relationships;

    /// Get mutable access to the relationships for this part.
    fn rels_mut(&mut self) -> &mut Relationships;

    /// Add or get a relationship to another part and return its rId.
    ///
    /// The target is given as an absolute partname; it is stored relative
    /// to this part's directory.
    fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        let target_ref = target.relative_ref(self.partname().base_uri());
        self.rels_mut().get_or_add(reltype, &target_ref).r_id().to_string()
    }

    /// Count `r:id`/`r:embed` style references to a relationship ID in the content.
    fn rel_ref_count(&self, r_id: &str) -> usize {
        let pattern = format!(r#"="{}""#, r_id);
        memmem::Finder::new(pattern.as_bytes())
            .find_iter(self.blob())
            .count()
    }
}

/// An XML part whose content is held as UTF-8 bytes.
#[derive(Debug)]
pub struct XmlPart {
    partname: PackURI,
    content_type: String,
    xml_bytes: Vec<u8>,
    rels: Relationships,
}

impl XmlPart {
    /// Create a new XmlPart.
    pub fn new(partname: PackURI, content_type: impl Into<String>, xml_bytes: Vec<u8>) -> Self {
        let rels = Relationships::new(partname.base_uri().to_string());
        Self {
            partname,
            content_type: content_type.into(),
            xml_bytes,
            rels,
        }
    }

    /// Create an XmlPart from generated XML text.
    pub fn from_xml(partname: PackURI, content_type: impl Into<String>, xml: String) -> Self {
        Self::new(partname, content_type, xml.into_bytes())
    }

    /// The XML content as a string slice.
    pub fn xml(&self) -> &str {
        // Constructed only from `String`s or validated UTF-8.
        std::str::from_utf8(&self.xml_bytes).unwrap_or_default()
    }
}

impl Part for XmlPart {
    fn partname(&self) -> &PackURI {
        &self.partname
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn blob(&self) -> &[u8] {
        &self.xml_bytes
    }

    fn rels(&self) -> &Relationships {
        &self.rels
    }

    fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    #[test]
    fn test_relate_to_uses_relative_target() {
        let mut slide = XmlPart::from_xml(
            PackURI::new("/ppt/slides/slide1.xml").unwrap(),
            "application/xml",
            "<p:sld/>".to_string(),
        );
        let layout = PackURI::new("/ppt/slideLayouts/slideLayout1.xml").unwrap();

        let r_id = slide.relate_to(&layout, rt::SLIDE_LAYOUT);
        assert_eq!(r_id, "rId1");
        assert_eq!(
            slide.rels().get("rId1").unwrap().target_ref(),
            "../slideLayouts/slideLayout1.xml"
        );

        // Relating again returns the same id
        assert_eq!(slide.relate_to(&layout, rt::SLIDE_LAYOUT), "rId1");
    }

    #[test]
    fn test_rel_ref_count() {
        let part = XmlPart::from_xml(
            PackURI::new("/ppt/presentation.xml").unwrap(),
            "application/xml",
            r#"<a r:id="rId1"/><b r:id="rId1"/><c r:id="rId2"/>"#.to_string(),
        );
        assert_eq!(part.rel_ref_count("rId1"), 2);
        assert_eq!(part.rel_ref_count("rId3"), 0);
    }
}
