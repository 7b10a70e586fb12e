/// Slide types and implementation for PPTX presentations.
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::pptx::backgrounds::SlideBackground;
use crate::ooxml::pptx::template::shape_tree_header;
use std::fmt::Write as FmtWrite;

use super::shape::{Frame, MutableShape, PresetGeometry};

/// A mutable slide in a presentation.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique identifier)
    pub(crate) slide_id: u32,
    /// Slide title (stored in title placeholder)
    pub(crate) title: Option<String>,
    /// Shapes on the slide, in z-order
    pub(crate) shapes: Vec<MutableShape>,
    /// Slide background
    pub(crate) background: SlideBackground,
    /// Next free shape ID; 1 is the shape tree itself
    next_shape_id: u32,
}

impl MutableSlide {
    /// Create a new empty slide.
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            title: None,
            shapes: Vec::new(),
            background: SlideBackground::None,
            next_shape_id: 2,
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Set the slide title.
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    /// Get the slide title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set a background for the slide.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use insight_deck::common::RGBColor;
    /// use insight_deck::ooxml::pptx::{MutablePresentation, SlideBackground};
    ///
    /// let mut pres = MutablePresentation::new();
    /// let slide = pres.add_slide()?;
    /// slide.set_background(SlideBackground::solid(RGBColor::new(0xFF, 0xFF, 0xFF)));
    /// # Ok::<(), insight_deck::ooxml::OoxmlError>(())
    /// ```
    pub fn set_background(&mut self, background: SlideBackground) {
        self.background = background;
    }

    /// Get the slide background.
    pub fn background(&self) -> SlideBackground {
        self.background
    }

    fn allocate_shape_id(&mut self) -> u32 {
        let id = self.next_shape_id;
        self.next_shape_id += 1;
        id
    }

    fn push_shape(&mut self, shape: MutableShape) -> &mut MutableShape {
        let index = self.shapes.len();
        self.shapes.push(shape);
        &mut self.shapes[index]
    }

    /// Add an empty text box.
    ///
    /// Returns the new shape so paragraphs can be appended to it.
    pub fn add_text_box(&mut self, x: i64, y: i64, width: i64, height: i64) -> &mut MutableShape {
        let id = self.allocate_shape_id();
        self.push_shape(MutableShape::new_text_box(id, Frame::new(x, y, width, height)))
    }

    /// Add a preset-geometry shape.
    pub fn add_auto_shape(
        &mut self,
        geometry: PresetGeometry,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> &mut MutableShape {
        let id = self.allocate_shape_id();
        self.push_shape(MutableShape::new_auto_shape(
            id,
            geometry,
            Frame::new(x, y, width, height),
        ))
    }

    /// Add a rectangle.
    pub fn add_rectangle(&mut self, x: i64, y: i64, width: i64, height: i64) -> &mut MutableShape {
        self.add_auto_shape(PresetGeometry::Rectangle, x, y, width, height)
    }

    /// Add a rounded rectangle.
    pub fn add_rounded_rectangle(
        &mut self,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> &mut MutableShape {
        self.add_auto_shape(PresetGeometry::RoundedRectangle, x, y, width, height)
    }

    /// Shapes in z-order.
    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    /// Get the number of shapes on the slide.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Generate slide XML content.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096 + self.shapes.len() * 1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;

        xml.push_str("<p:cSld>");

        // Background must come before spTree
        self.background.write_xml(&mut xml);

        xml.push_str("<p:spTree>");
        xml.push_str(shape_tree_header());

        if let Some(ref title) = self.title {
            self.write_title_shape(&mut xml, title)?;
        }

        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }

    /// Title placeholder, placed after the last allocated shape ID.
    fn write_title_shape(&self, xml: &mut String, title: &str) -> Result<()> {
        write!(
            xml,
            concat!(
                r#"<p:sp><p:nvSpPr><p:cNvPr id="{}" name="Title {}"/>"#,
                r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#,
                r#"<p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr><p:spPr/>"#,
                r#"<p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:r><a:rPr lang="en-US" dirty="0"/>"#,
                r#"<a:t>{}</a:t></a:r></a:p></p:txBody></p:sp>"#
            ),
            self.next_shape_id,
            self.next_shape_id - 1,
            escape_xml(title)
        )?;
        Ok(())
    }
}
