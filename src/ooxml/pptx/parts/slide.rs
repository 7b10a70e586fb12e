/// Slide part - one `/ppt/slides/slideN.xml` in the package.
use crate::common::RGBColor;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::part::Part;
use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, BytesStart, Event};

/// What a reader needs to know about one `p:sp` shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeSummary {
    pub id: u32,
    pub name: String,
    pub is_text_box: bool,
    /// `p:ph/@type`, `"obj"` when the placeholder has no type
    pub placeholder: Option<String>,
    /// Solid shape fill from `p:spPr`
    pub fill: Option<RGBColor>,
    /// Text per paragraph
    pub paragraphs: Vec<String>,
}

impl ShapeSummary {
    pub fn is_title(&self) -> bool {
        matches!(self.placeholder.as_deref(), Some("title" | "ctrTitle"))
    }

    pub fn text(&self) -> String {
        self.paragraphs.join("\n")
    }
}

/// A slide part.
pub struct SlidePart<'a> {
    /// The underlying OPC part
    part: &'a dyn Part,
}

fn attr_value(e: &BytesStart, name: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == name {
            let value = attr
                .unescape_value()
                .map_err(|e| OoxmlError::Xml(e.to_string()))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn color_value(e: &BytesStart) -> Result<Option<RGBColor>> {
    Ok(attr_value(e, b"val")?.and_then(|val| RGBColor::from_hex(&val)))
}

/// Text of an entity or character reference inside `a:t`.
fn resolve_reference(e: &BytesRef) -> Result<String> {
    if let Some(ch) = e.resolve_char_ref().map_err(|e| OoxmlError::Xml(e.to_string()))? {
        return Ok(ch.to_string());
    }
    let name = e.decode().map_err(|e| OoxmlError::Xml(e.to_string()))?;
    resolve_predefined_entity(&name)
        .map(str::to_string)
        .ok_or_else(|| OoxmlError::Xml(format!("Unknown entity: &{};", name)))
}

impl<'a> SlidePart<'a> {
    /// Create a SlidePart from an OPC Part.
    pub fn from_part(part: &'a dyn Part) -> Result<Self> {
        Ok(Self { part })
    }

    #[inline]
    fn xml_bytes(&self) -> &[u8] {
        self.part.blob()
    }

    /// Parse every `p:sp` on the slide, in document order.
    pub fn shapes(&self) -> Result<Vec<ShapeSummary>> {
        let mut reader = Reader::from_reader(self.xml_bytes());
        // Leading and trailing spaces in runs are content
        reader.config_mut().trim_text(false);

        let mut shapes = Vec::new();
        let mut current: Option<ShapeSummary> = None;
        let mut in_sp_pr = false;
        let mut in_line = false;
        let mut in_text = false;
        let mut buf = Vec::new();

        loop {
            let event = reader
                .read_event_into(&mut buf)
                .map_err(|e| OoxmlError::Xml(e.to_string()))?;
            match event {
                Event::Start(ref e) | Event::Empty(ref e) => {
                    let is_empty = matches!(event, Event::Empty(_));
                    match e.local_name().as_ref() {
                        b"sp" if !is_empty => current = Some(ShapeSummary::default()),
                        b"cNvPr" => {
                            if let Some(shape) = current.as_mut() {
                                if let Some(id) = attr_value(e, b"id")? {
                                    shape.id = id.parse().map_err(|_| {
                                        OoxmlError::Xml(format!("Invalid shape id: {}", id))
                                    })?;
                                }
                                shape.name = attr_value(e, b"name")?.unwrap_or_default();
                            }
                        },
                        b"cNvSpPr" => {
                            if let Some(shape) = current.as_mut() {
                                shape.is_text_box = attr_value(e, b"txBox")?.as_deref() == Some("1");
                            }
                        },
                        b"ph" => {
                            if let Some(shape) = current.as_mut() {
                                let kind = attr_value(e, b"type")?.unwrap_or_else(|| "obj".to_string());
                                shape.placeholder = Some(kind);
                            }
                        },
                        b"spPr" if !is_empty => in_sp_pr = true,
                        b"ln" if !is_empty => in_line = true,
                        b"srgbClr" if in_sp_pr && !in_line => {
                            if let Some(shape) = current.as_mut() {
                                if shape.fill.is_none() {
                                    shape.fill = color_value(e)?;
                                }
                            }
                        },
                        b"p" => {
                            if let Some(shape) = current.as_mut() {
                                shape.paragraphs.push(String::new());
                            }
                        },
                        b"t" if !is_empty => in_text = true,
                        _ => {},
                    }
                },
                Event::End(ref e) => match e.local_name().as_ref() {
                    b"sp" => {
                        if let Some(shape) = current.take() {
                            shapes.push(shape);
                        }
                    },
                    b"spPr" => in_sp_pr = false,
                    b"ln" => in_line = false,
                    b"t" => in_text = false,
                    _ => {},
                },
                Event::Text(ref e) if in_text => {
                    let text = e.decode().map_err(|e| OoxmlError::Xml(e.to_string()))?;
                    if let Some(para) = current.as_mut().and_then(|s| s.paragraphs.last_mut()) {
                        para.push_str(&text);
                    }
                },
                Event::GeneralRef(ref e) if in_text => {
                    let text = resolve_reference(e)?;
                    if let Some(para) = current.as_mut().and_then(|s| s.paragraphs.last_mut()) {
                        para.push_str(&text);
                    }
                },
                Event::Eof => break,
                _ => {},
            }
            buf.clear();
        }

        Ok(shapes)
    }

    /// Extract all text content from the slide, one paragraph per line.
    pub fn extract_text(&self) -> Result<String> {
        let lines: Vec<String> = self
            .shapes()?
            .into_iter()
            .flat_map(|shape| shape.paragraphs)
            .collect();
        Ok(lines.join("\n"))
    }

    /// Solid background color from `p:cSld/p:bg`, if the slide sets one.
    pub fn background_color(&self) -> Result<Option<RGBColor>> {
        let mut reader = Reader::from_reader(self.xml_bytes());
        reader.config_mut().trim_text(true);

        let mut in_bg = false;
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) if e.local_name().as_ref() == b"bg" => in_bg = true,
                Ok(Event::End(e)) if e.local_name().as_ref() == b"bg" => break,
                Ok(Event::Start(e)) | Ok(Event::Empty(e))
                    if in_bg && e.local_name().as_ref() == b"srgbClr" =>
                {
                    return color_value(&e);
                },
                // Shapes follow the background
                Ok(Event::Start(e)) if e.local_name().as_ref() == b"spTree" => break,
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        Ok(None)
    }

    /// Get the underlying OPC part.
    #[inline]
    pub fn part(&self) -> &'a dyn Part {
        self.part
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::{PackURI, XmlPart};

    fn part(xml: &str) -> XmlPart {
        XmlPart::from_xml(
            PackURI::new("/ppt/slides/slide1.xml").unwrap(),
            "application/xml",
            xml.to_string(),
        )
    }

    const SLIDE: &str = concat!(
        r#"<p:sld xmlns:a="a" xmlns:p="p"><p:cSld>"#,
        r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="FFFFFF"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#,
        r#"<p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/></p:nvGrpSpPr>"#,
        r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Rounded Rectangle 1"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr>"#,
        r#"<p:spPr><a:solidFill><a:srgbClr val="BFE7C6"/></a:solidFill><a:ln><a:noFill/></a:ln></p:spPr>"#,
        r#"<p:txBody><a:bodyPr/><a:p><a:r><a:rPr><a:solidFill><a:srgbClr val="222222"/></a:solidFill></a:rPr>"#,
        r#"<a:t>Pros &amp; cons</a:t></a:r></a:p></p:txBody></p:sp>"#,
        r#"<p:sp><p:nvSpPr><p:cNvPr id="3" name="TextBox 2"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>"#,
        r#"<p:spPr><a:noFill/></p:spPr><p:txBody><a:bodyPr/>"#,
        r#"<a:p><a:r><a:t>• first</a:t></a:r></a:p><a:p><a:r><a:t> second</a:t></a:r></a:p>"#,
        r#"</p:txBody></p:sp></p:spTree></p:cSld></p:sld>"#
    );

    #[test]
    fn test_shapes() {
        let xml = part(SLIDE);
        let slide = SlidePart::from_part(&xml).unwrap();
        let shapes = slide.shapes().unwrap();

        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].id, 2);
        assert_eq!(shapes[0].fill, Some(RGBColor::new(0xBF, 0xE7, 0xC6)));
        assert_eq!(shapes[0].text(), "Pros & cons");
        assert!(!shapes[0].is_title());

        assert!(shapes[1].is_text_box);
        assert_eq!(shapes[1].fill, None);
        assert_eq!(shapes[1].paragraphs, vec!["• first", " second"]);
    }

    #[test]
    fn test_background_and_text() {
        let xml = part(SLIDE);
        let slide = SlidePart::from_part(&xml).unwrap();

        assert_eq!(slide.background_color().unwrap(), Some(RGBColor::new(0xFF, 0xFF, 0xFF)));
        assert_eq!(slide.extract_text().unwrap(), "Pros & cons\n• first\n second");
    }

    #[test]
    fn test_title_placeholder_detected() {
        let xml = part(concat!(
            r#"<p:sld xmlns:a="a" xmlns:p="p"><p:cSld><p:spTree>"#,
            r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Title 1"/><p:cNvSpPr/>"#,
            r#"<p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr><p:spPr/></p:sp>"#,
            r#"</p:spTree></p:cSld></p:sld>"#
        ));
        let slide = SlidePart::from_part(&xml).unwrap();

        assert!(slide.shapes().unwrap()[0].is_title());
        assert_eq!(slide.background_color().unwrap(), None);
    }
}
