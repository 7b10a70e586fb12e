/// Shape types and XML serialization for PPTX slides.
use crate::common::RGBColor;
use crate::common::unit::{Emu, pt_to_centipoints};
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

pub use super::super::format::{Alignment, Paragraph, TextFormat, TextRun};

/// Preset geometry of an auto shape (`a:prstGeom/@prst`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetGeometry {
    Rectangle,
    RoundedRectangle,
}

impl PresetGeometry {
    pub fn prst(&self) -> &'static str {
        match self {
            Self::Rectangle => "rect",
            Self::RoundedRectangle => "roundRect",
        }
    }

    /// Base of the default shape name, e.g. "Rounded Rectangle 3".
    fn base_name(&self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::RoundedRectangle => "Rounded Rectangle",
        }
    }
}

/// Vertical anchoring of text inside a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Top,
    Center,
    Bottom,
}

impl TextAnchor {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "t",
            Self::Center => "ctr",
            Self::Bottom => "b",
        }
    }
}

/// Text content of a shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextBody {
    pub paragraphs: Vec<Paragraph>,
    /// `None` leaves `wrap` off so the body inherits square wrapping
    pub word_wrap: Option<bool>,
    pub anchor: Option<TextAnchor>,
}

/// Position and size in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub x: Emu,
    pub y: Emu,
    pub width: Emu,
    pub height: Emu,
}

impl Frame {
    pub fn new(x: Emu, y: Emu, width: Emu, height: Emu) -> Self {
        Self { x, y, width, height }
    }
}

/// A shape on a slide.
#[derive(Debug, Clone)]
pub struct MutableShape {
    pub(crate) shape_id: u32,
    pub(crate) frame: Frame,
    pub(crate) shape_type: ShapeType,
}

#[derive(Debug, Clone)]
pub(crate) enum ShapeType {
    TextBox {
        body: TextBody,
    },
    AutoShape {
        geometry: PresetGeometry,
        fill: Option<RGBColor>,
        /// `false` writes an explicit `<a:ln><a:noFill/></a:ln>`
        outline: bool,
        body: Option<TextBody>,
    },
}

impl MutableShape {
    pub(crate) fn new_text_box(shape_id: u32, frame: Frame) -> Self {
        Self {
            shape_id,
            frame,
            shape_type: ShapeType::TextBox {
                body: TextBody {
                    word_wrap: Some(false),
                    ..TextBody::default()
                },
            },
        }
    }

    pub(crate) fn new_auto_shape(shape_id: u32, geometry: PresetGeometry, frame: Frame) -> Self {
        Self {
            shape_id,
            frame,
            shape_type: ShapeType::AutoShape {
                geometry,
                fill: None,
                outline: true,
                body: None,
            },
        }
    }

    /// Shape ID, unique within the slide.
    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Default display name, e.g. "TextBox 2".
    pub fn name(&self) -> String {
        let base = match &self.shape_type {
            ShapeType::TextBox { .. } => "TextBox",
            ShapeType::AutoShape { geometry, .. } => geometry.base_name(),
        };
        format!("{} {}", base, self.shape_id.saturating_sub(1))
    }

    /// Solid fill color, for auto shapes.
    pub fn fill_color(&self) -> Option<RGBColor> {
        match &self.shape_type {
            ShapeType::AutoShape { fill, .. } => *fill,
            ShapeType::TextBox { .. } => None,
        }
    }

    /// Builder method: solid fill (auto shapes only).
    pub fn fill(&mut self, color: RGBColor) -> &mut Self {
        if let ShapeType::AutoShape { ref mut fill, .. } = self.shape_type {
            *fill = Some(color);
        }
        self
    }

    /// Builder method: remove the outline (auto shapes only).
    pub fn no_line(&mut self) -> &mut Self {
        if let ShapeType::AutoShape { ref mut outline, .. } = self.shape_type {
            *outline = false;
        }
        self
    }

    /// Mutable text body, created on first use for auto shapes.
    pub fn text_body_mut(&mut self) -> &mut TextBody {
        match self.shape_type {
            ShapeType::TextBox { ref mut body } => body,
            ShapeType::AutoShape { ref mut body, .. } => body.get_or_insert_with(|| TextBody {
                anchor: Some(TextAnchor::Center),
                ..TextBody::default()
            }),
        }
    }

    /// The text body, if the shape has one.
    pub fn text_body(&self) -> Option<&TextBody> {
        match &self.shape_type {
            ShapeType::TextBox { body } => Some(body),
            ShapeType::AutoShape { body, .. } => body.as_ref(),
        }
    }

    /// Builder method: word wrap on or off.
    pub fn word_wrap(&mut self, wrap: bool) -> &mut Self {
        self.text_body_mut().word_wrap = Some(wrap);
        self
    }

    /// Builder method: append a paragraph.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> &mut Self {
        self.text_body_mut().paragraphs.push(paragraph);
        self
    }

    /// All text, paragraphs separated by newlines.
    pub fn text(&self) -> String {
        self.text_body()
            .map(|body| {
                body.paragraphs
                    .iter()
                    .map(Paragraph::text)
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default()
    }

    /// Append the `<p:sp>` element for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:sp><p:nvSpPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{}"/>"#,
            self.shape_id,
            escape_xml(&self.name())
        )?;
        match &self.shape_type {
            ShapeType::TextBox { .. } => xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#),
            ShapeType::AutoShape { .. } => xml.push_str("<p:cNvSpPr/>"),
        }
        xml.push_str("<p:nvPr/></p:nvSpPr>");

        xml.push_str("<p:spPr>");
        self.write_xfrm(xml)?;
        match &self.shape_type {
            ShapeType::TextBox { .. } => {
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("<a:noFill/>");
            },
            ShapeType::AutoShape {
                geometry,
                fill,
                outline,
                ..
            } => {
                write!(xml, r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#, geometry.prst())?;
                if let Some(color) = fill {
                    write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color.to_hex())?;
                }
                if !outline {
                    xml.push_str("<a:ln><a:noFill/></a:ln>");
                }
            },
        }
        xml.push_str("</p:spPr>");

        if let Some(body) = self.text_body() {
            let is_text_box = matches!(self.shape_type, ShapeType::TextBox { .. });
            write_text_body(xml, body, is_text_box)?;
        }

        xml.push_str("</p:sp>");
        Ok(())
    }

    fn write_xfrm(&self, xml: &mut String) -> Result<()> {
        let Frame { x, y, width, height } = self.frame;
        write!(
            xml,
            r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
            x, y, width, height
        )?;
        Ok(())
    }
}

fn write_text_body(xml: &mut String, body: &TextBody, auto_fit: bool) -> Result<()> {
    xml.push_str("<p:txBody>");

    xml.push_str("<a:bodyPr");
    match body.word_wrap {
        Some(true) => xml.push_str(r#" wrap="square""#),
        Some(false) => xml.push_str(r#" wrap="none""#),
        None => {},
    }
    xml.push_str(r#" rtlCol="0""#);
    if let Some(anchor) = body.anchor {
        write!(xml, r#" anchor="{}""#, anchor.as_str())?;
    }
    if auto_fit {
        xml.push_str("><a:spAutoFit/></a:bodyPr>");
    } else {
        xml.push_str("/>");
    }
    xml.push_str("<a:lstStyle/>");

    if body.paragraphs.is_empty() {
        // A text body needs at least one paragraph
        xml.push_str("<a:p/>");
    }
    for paragraph in &body.paragraphs {
        write_paragraph(xml, paragraph)?;
    }

    xml.push_str("</p:txBody>");
    Ok(())
}

fn write_paragraph(xml: &mut String, paragraph: &Paragraph) -> Result<()> {
    xml.push_str("<a:p>");

    let has_props =
        paragraph.level > 0 || paragraph.alignment.is_some() || paragraph.space_after.is_some();
    if has_props {
        xml.push_str("<a:pPr");
        if paragraph.level > 0 {
            write!(xml, r#" lvl="{}""#, paragraph.level)?;
        }
        if let Some(alignment) = paragraph.alignment {
            write!(xml, r#" algn="{}""#, alignment.as_str())?;
        }
        match paragraph.space_after {
            Some(points) => write!(
                xml,
                r#"><a:spcAft><a:spcPts val="{}"/></a:spcAft></a:pPr>"#,
                pt_to_centipoints(points)
            )?,
            None => xml.push_str("/>"),
        }
    }

    for run in &paragraph.runs {
        write_run(xml, run)?;
    }

    xml.push_str("</a:p>");
    Ok(())
}

fn write_run(xml: &mut String, run: &TextRun) -> Result<()> {
    let format = &run.format;

    xml.push_str(r#"<a:r><a:rPr lang="en-US""#);
    if let Some(size) = format.size {
        write!(xml, r#" sz="{}""#, pt_to_centipoints(size))?;
    }
    if let Some(bold) = format.bold {
        write!(xml, r#" b="{}""#, u8::from(bold))?;
    }
    if let Some(italic) = format.italic {
        write!(xml, r#" i="{}""#, u8::from(italic))?;
    }
    xml.push_str(r#" dirty="0">"#);

    // Fill comes before typefaces in CT_TextCharacterProperties
    if let Some(color) = format.color {
        write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color.to_hex())?;
    }
    if let Some(ref font) = format.font {
        write!(xml, r#"<a:latin typeface="{}"/>"#, escape_xml(font))?;
    }
    xml.push_str("</a:rPr>");

    write!(xml, "<a:t>{}</a:t></a:r>", escape_xml(&run.text))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Frame {
        Frame::new(457_200, 274_320, 5_455_767, 457_200)
    }

    #[test]
    fn test_badge_xml() {
        let mut shape = MutableShape::new_auto_shape(2, PresetGeometry::RoundedRectangle, frame());
        shape
            .fill(RGBColor::new(0xBF, 0xE7, 0xC6))
            .no_line()
            .add_paragraph(
                Paragraph::with_run("Badge", TextFormat::new().with_bold(true).with_size(18.0))
                    .align(Alignment::Center),
            );

        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();

        assert!(xml.contains(r#"<p:cNvPr id="2" name="Rounded Rectangle 1"/>"#));
        assert!(xml.contains(r#"<a:prstGeom prst="roundRect">"#));
        assert!(xml.contains(r#"<a:solidFill><a:srgbClr val="BFE7C6"/></a:solidFill><a:ln><a:noFill/></a:ln>"#));
        assert!(xml.contains(r#"<a:bodyPr rtlCol="0" anchor="ctr"/>"#));
        assert!(xml.contains(r#"<a:pPr algn="ctr"/>"#));
        assert!(xml.contains(r#"sz="1800" b="1""#));
        assert!(xml.contains("<a:t>Badge</a:t>"));
    }

    #[test]
    fn test_text_box_paragraph_properties() {
        let mut shape = MutableShape::new_text_box(3, frame());
        shape.word_wrap(true).add_paragraph(
            Paragraph::with_run(
                "Sub <item> & more",
                TextFormat::new()
                    .with_font("Segoe UI")
                    .with_size(14.0)
                    .with_bold(false)
                    .with_color(RGBColor::new(0x22, 0x22, 0x22)),
            )
            .level(1)
            .space_after(2.0),
        );

        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();

        assert!(xml.contains(r#"<p:cNvSpPr txBox="1"/>"#));
        assert!(xml.contains(r#"<a:bodyPr wrap="square" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#));
        assert!(xml.contains(r#"<a:pPr lvl="1"><a:spcAft><a:spcPts val="200"/></a:spcAft></a:pPr>"#));
        assert!(xml.contains(r#"sz="1400" b="0""#));
        assert!(xml.contains(
            r#"<a:solidFill><a:srgbClr val="222222"/></a:solidFill><a:latin typeface="Segoe UI"/>"#
        ));
        assert!(xml.contains("<a:t>Sub &lt;item&gt; &amp; more</a:t>"));
        assert_eq!(shape.text(), "Sub <item> & more");
    }

    #[test]
    fn test_text_box_defaults_to_no_wrap() {
        let mut shape = MutableShape::new_text_box(2, frame());
        shape.add_paragraph(Paragraph::with_run("x", TextFormat::new()));

        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"<a:bodyPr wrap="none" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#));
    }

    #[test]
    fn test_plain_rectangle_has_no_text_body() {
        let mut shape = MutableShape::new_auto_shape(4, PresetGeometry::Rectangle, frame());
        shape.fill(RGBColor::new(0xCC, 0xCC, 0xCC)).no_line();

        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();

        assert!(!xml.contains("<p:txBody>"));
        assert_eq!(shape.name(), "Rectangle 3");
        assert_eq!(shape.fill_color(), Some(RGBColor::new(0xCC, 0xCC, 0xCC)));
    }
}
