/// Presentation part - the main part in a .pptx package.
///
/// Corresponds to `/ppt/presentation.xml` in the package.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::part::Part;
use quick_xml::Reader;
use quick_xml::events::Event;

/// The main presentation part.
///
/// Holds the slide list and the slide size.
///
/// # Example
///
/// ```rust,ignore
/// let pres_part = PresentationPart::from_part(opc_part)?;
/// let slide_count = pres_part.slide_count()?;
/// ```
pub struct PresentationPart<'a> {
    /// The underlying OPC part
    part: &'a dyn Part,
}

impl<'a> PresentationPart<'a> {
    /// Create a PresentationPart from an OPC Part.
    pub fn from_part(part: &'a dyn Part) -> Result<Self> {
        Ok(Self { part })
    }

    /// Get the XML bytes of the presentation.
    #[inline]
    fn xml_bytes(&self) -> &[u8] {
        self.part.blob()
    }

    /// Get the number of slides in the presentation.
    pub fn slide_count(&self) -> Result<usize> {
        Ok(self.slide_rids()?.len())
    }

    /// Get the slide size `(cx, cy)` in EMUs.
    ///
    /// Returns None if the slide size is not defined.
    pub fn slide_size(&self) -> Result<Option<(i64, i64)>> {
        let mut reader = Reader::from_reader(self.xml_bytes());
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) if e.local_name().as_ref() == b"sldSz" => {
                    let mut cx = None;
                    let mut cy = None;
                    for attr in e.attributes().flatten() {
                        let target = match attr.key.as_ref() {
                            b"cx" => &mut cx,
                            b"cy" => &mut cy,
                            _ => continue,
                        };
                        let value = std::str::from_utf8(&attr.value)
                            .map_err(|e| OoxmlError::Xml(e.to_string()))?;
                        *target = Some(value.parse::<i64>().map_err(|e| {
                            OoxmlError::Xml(format!("Invalid slide size: {}", e))
                        })?);
                    }
                    return Ok(cx.zip(cy));
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        Ok(None)
    }

    /// Get the relationship IDs of all slides in presentation order.
    pub fn slide_rids(&self) -> Result<Vec<String>> {
        let mut reader = Reader::from_reader(self.xml_bytes());
        reader.config_mut().trim_text(true);

        let mut rids = Vec::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) if e.local_name().as_ref() == b"sldId" => {
                    for attr in e.attributes().flatten() {
                        // r:id, not the numeric slide id
                        if attr.key.as_ref() == b"r:id" {
                            let rid = std::str::from_utf8(&attr.value)
                                .map_err(|e| OoxmlError::Xml(e.to_string()))?;
                            rids.push(rid.to_string());
                            break;
                        }
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        Ok(rids)
    }

    /// Get the underlying OPC part.
    #[inline]
    pub fn part(&self) -> &'a dyn Part {
        self.part
    }
}
