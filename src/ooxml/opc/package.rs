/// The in-memory OPC package.
///
/// OpcPackage holds the package-level relationships and every part, in the
/// order the parts were added. Insertion order is also the order parts are
/// written to the ZIP archive, which keeps serialization deterministic.
use crate::ooxml::opc::constants::relationship_type;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::rel::Relationships;

/// Main API type for working with OPC packages.
#[derive(Debug)]
pub struct OpcPackage {
    /// Package-level relationships (`/_rels/.rels`)
    rels: Relationships,

    parts: Vec<Box<dyn Part>>,
}

impl OpcPackage {
    /// Create a new empty OPC package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI.to_string()),
            parts: Vec::new(),
        }
    }

    /// Add a part. Partnames must be unique within the package.
    pub fn add_part(&mut self, part: Box<dyn Part>) -> Result<()> {
        if self.contains(part.partname()) {
            return Err(OpcError::DuplicatePart(part.partname().to_string()));
        }
        self.parts.push(part);
        Ok(())
    }

    /// Relate the package itself to a part and return the rId.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        let target_ref = target.relative_ref(PACKAGE_URI);
        self.rels.get_or_add(reltype, &target_ref).r_id().to_string()
    }

    /// Whether a part with this partname exists.
    pub fn contains(&self, partname: &PackURI) -> bool {
        self.parts.iter().any(|p| p.partname() == partname)
    }

    /// Get a part by its partname.
    pub fn part(&self, partname: &PackURI) -> Result<&dyn Part> {
        self.parts
            .iter()
            .find(|p| p.partname() == partname)
            .map(|b| &**b)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// The main document part (for a presentation, `/ppt/presentation.xml`).
    pub fn main_document_part(&self) -> Result<&dyn Part> {
        let rel = self.rels.part_with_reltype(relationship_type::OFFICE_DOCUMENT)?;
        let partname = rel.target_partname()?;
        self.part(&partname)
    }

    /// Resolve a relationship of `source` by rId to the target part.
    pub fn related_part(&self, source: &dyn Part, r_id: &str) -> Result<&dyn Part> {
        let rel = source
            .rels()
            .get(r_id)
            .ok_or_else(|| OpcError::RelationshipNotFound(format!("{} in {}", r_id, source.partname())))?;
        self.part(&rel.target_partname()?)
    }

    /// Iterate over parts in insertion order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &dyn Part> {
        self.parts.iter().map(|b| &**b)
    }

    /// Number of parts in the package.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Package-level relationships.
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    pub(crate) fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::content_type as ct;
    use crate::ooxml::opc::part::XmlPart;

    fn xml_part(name: &str) -> Box<dyn Part> {
        Box::new(XmlPart::from_xml(
            PackURI::new(name).unwrap(),
            ct::XML,
            "<x/>".to_string(),
        ))
    }

    #[test]
    fn test_add_part_rejects_duplicates() {
        let mut pkg = OpcPackage::new();
        pkg.add_part(xml_part("/ppt/presentation.xml")).unwrap();
        let err = pkg.add_part(xml_part("/ppt/presentation.xml")).unwrap_err();
        assert!(matches!(err, OpcError::DuplicatePart(_)));
        assert_eq!(pkg.part_count(), 1);
    }

    #[test]
    fn test_main_document_part() {
        let mut pkg = OpcPackage::new();
        let partname = PackURI::new("/ppt/presentation.xml").unwrap();
        pkg.add_part(xml_part(partname.as_str())).unwrap();
        assert!(pkg.main_document_part().is_err());

        let r_id = pkg.relate_to(&partname, relationship_type::OFFICE_DOCUMENT);
        assert_eq!(r_id, "rId1");
        assert_eq!(
            pkg.rels().get("rId1").unwrap().target_ref(),
            "ppt/presentation.xml"
        );
        assert_eq!(pkg.main_document_part().unwrap().partname(), &partname);
    }

    #[test]
    fn test_parts_keep_insertion_order() {
        let mut pkg = OpcPackage::new();
        for name in ["/b.xml", "/a.xml", "/c.xml"] {
            pkg.add_part(xml_part(name)).unwrap();
        }
        let names: Vec<&str> = pkg.iter_parts().map(|p| p.partname().as_str()).collect();
        assert_eq!(names, ["/b.xml", "/a.xml", "/c.xml"]);
    }
}
