use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
/// Relationship-related objects for OPC packages.
///
/// A relationship connects a source (a part, or the package itself) to a
/// target part, identified by an `rId` that is unique within the source.
use std::fmt::Write as FmtWrite;

/// A single relationship from a source part to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference, relative to the source's base URI
    target_ref: String,

    /// Base URI for resolving the relative target
    base_uri: String,
}

impl Relationship {
    pub fn new(r_id: String, reltype: String, target_ref: String, base_uri: String) -> Self {
        Self {
            r_id,
            reltype,
            target_ref,
            base_uri,
        }
    }

    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }

    /// Absolute partname of the target.
    pub fn target_partname(&self) -> Result<PackURI> {
        PackURI::from_rel_ref(&self.base_uri, &self.target_ref).map_err(OpcError::InvalidPackUri)
    }

    /// Numeric suffix of the rId, used for ordering.
    fn number(&self) -> Option<u32> {
        parse_r_id(&self.r_id)
    }
}

/// Extract the number from an `rId123` style identifier.
fn parse_r_id(r_id: &str) -> Option<u32> {
    r_id.strip_prefix("rId")
        .and_then(|digits| atoi_simd::parse::<u32, false, false>(digits.as_bytes()).ok())
}

/// Collection of relationships from a single source.
///
/// Relationships are kept in insertion order so that serialization never
/// depends on hash iteration order.
#[derive(Debug, Clone)]
pub struct Relationships {
    /// Base URI for resolving relative references
    base_uri: String,

    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    pub fn new(base_uri: String) -> Self {
        Self {
            base_uri,
            rels: Vec::new(),
        }
    }

    /// Add a relationship with an explicit rId.
    pub fn add_relationship(&mut self, reltype: String, target_ref: String, r_id: String) -> &Relationship {
        let rel = Relationship::new(r_id, reltype, target_ref, self.base_uri.clone());
        self.rels.push(rel);
        &self.rels[self.rels.len() - 1]
    }

    #[inline]
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id() == r_id)
    }

    /// Get or add a relationship to a target part.
    ///
    /// An existing relationship with the same type and target is reused;
    /// otherwise a new one is created with the lowest free rId.
    pub fn get_or_add(&mut self, reltype: &str, target_ref: &str) -> &Relationship {
        if let Some(idx) = self
            .rels
            .iter()
            .position(|rel| rel.reltype() == reltype && rel.target_ref() == target_ref)
        {
            return &self.rels[idx];
        }

        let r_id = self.next_r_id();
        self.add_relationship(reltype.to_string(), target_ref.to_string(), r_id)
    }

    /// Lowest unused `rIdN`, filling gaps.
    fn next_r_id(&self) -> String {
        let mut used: Vec<u32> = self.rels.iter().filter_map(Relationship::number).collect();
        used.sort_unstable();

        let mut next = 1u32;
        for num in used {
            match num.cmp(&next) {
                std::cmp::Ordering::Equal => next += 1,
                std::cmp::Ordering::Greater => break,
                std::cmp::Ordering::Less => {},
            }
        }

        format!("rId{}", next)
    }

    /// The single relationship of a given type.
    pub fn part_with_reltype(&self, reltype: &str) -> Result<&Relationship> {
        self.rels
            .iter()
            .find(|rel| rel.reltype() == reltype)
            .ok_or_else(|| OpcError::RelationshipNotFound(format!("No relationship of type '{}'", reltype)))
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize to the XML of a `.rels` part, ordered by rId number.
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        write!(xml, r#"<Relationships xmlns="{}">"#, namespace::OPC_RELATIONSHIPS)?;

        let mut rels: Vec<&Relationship> = self.rels.iter().collect();
        rels.sort_by_key(|rel| (rel.number().unwrap_or(u32::MAX), rel.r_id().to_string()));

        for rel in rels {
            write!(
                xml,
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(rel.r_id()),
                escape_xml(rel.reltype()),
                escape_xml(rel.target_ref()),
            )?;
        }

        xml.push_str("</Relationships>");
        Ok(xml)
    }

    /// Parse the XML of a `.rels` part.
    pub fn from_xml(base_uri: &str, xml: &[u8]) -> Result<Self> {
        use quick_xml::Reader;
        use quick_xml::events::Event;

        let mut rels = Self::new(base_uri.to_string());
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                    if e.local_name().as_ref() == b"Relationship" =>
                {
                    let mut r_id = String::new();
                    let mut reltype = String::new();
                    let mut target = String::new();
                    for attr in e.attributes().flatten() {
                        let value = attr
                            .unescape_value()
                            .map_err(|err| OpcError::XmlError(err.to_string()))?
                            .into_owned();
                        match attr.key.as_ref() {
                            b"Id" => r_id = value,
                            b"Type" => reltype = value,
                            b"Target" => target = value,
                            _ => {},
                        }
                    }
                    rels.add_relationship(reltype, target, r_id);
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OpcError::XmlError(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        Ok(rels)
    }
}

impl Default for Relationships {
    fn default() -> Self {
        Self::new("/".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_r_id_fills_gaps() {
        let mut rels = Relationships::new("/ppt".to_string());
        assert_eq!(rels.next_r_id(), "rId1");

        rels.add_relationship("type".to_string(), "a.xml".to_string(), "rId1".to_string());
        rels.add_relationship("type".to_string(), "c.xml".to_string(), "rId3".to_string());
        assert_eq!(rels.next_r_id(), "rId2");
    }

    #[test]
    fn test_get_or_add_reuses_matching_target() {
        let mut rels = Relationships::new("/ppt".to_string());

        assert_eq!(rels.get_or_add("type1", "target1").r_id(), "rId1");
        assert_eq!(rels.get_or_add("type1", "target1").r_id(), "rId1");
        assert_eq!(rels.get_or_add("type1", "target2").r_id(), "rId2");
        assert_eq!(rels.len(), 2);
    }

    #[test]
    fn test_parse_r_id() {
        assert_eq!(parse_r_id("rId12"), Some(12));
        assert_eq!(parse_r_id("rId"), None);
        assert_eq!(parse_r_id("rIdx"), None);
        assert_eq!(parse_r_id("id3"), None);
    }

    #[test]
    fn test_to_xml_orders_numerically() {
        let mut rels = Relationships::new("/ppt".to_string());
        for i in [10, 2, 1] {
            rels.add_relationship("t".to_string(), format!("p{}.xml", i), format!("rId{}", i));
        }

        let xml = rels.to_xml().unwrap();
        let first = xml.find(r#"Id="rId1""#).unwrap();
        let second = xml.find(r#"Id="rId2""#).unwrap();
        let tenth = xml.find(r#"Id="rId10""#).unwrap();
        assert!(first < second && second < tenth);
    }

    #[test]
    fn test_xml_round_trip_resolves_targets() {
        let mut rels = Relationships::new("/ppt/slides".to_string());
        rels.get_or_add(
            crate::ooxml::opc::constants::relationship_type::SLIDE_LAYOUT,
            "../slideLayouts/slideLayout1.xml",
        );

        let xml = rels.to_xml().unwrap();
        let parsed = Relationships::from_xml("/ppt/slides", xml.as_bytes()).unwrap();
        let rel = parsed.get("rId1").unwrap();
        assert_eq!(
            rel.target_partname().unwrap().as_str(),
            "/ppt/slideLayouts/slideLayout1.xml"
        );
    }
}
