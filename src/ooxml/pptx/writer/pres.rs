/// Presentation writer for PPTX.
use crate::common::unit::Emu;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, namespace, relationship_type as rt};
use crate::ooxml::opc::{OpcPackage, PackURI, PackageWriter, Part, XmlPart};
use crate::ooxml::pptx::template::{self, ThemeSpec};
use std::fmt::Write as FmtWrite;
use std::path::Path;

use super::slide::MutableSlide;

const PRESENTATION_URI: &str = "/ppt/presentation.xml";
const SLIDE_MASTER_URI: &str = "/ppt/slideMasters/slideMaster1.xml";
const SLIDE_LAYOUT_URI: &str = "/ppt/slideLayouts/slideLayout1.xml";
const THEME_URI: &str = "/ppt/theme/theme1.xml";
const PRES_PROPS_URI: &str = "/ppt/presProps.xml";
const VIEW_PROPS_URI: &str = "/ppt/viewProps.xml";
const TABLE_STYLES_URI: &str = "/ppt/tableStyles.xml";
const CORE_PROPS_URI: &str = "/docProps/core.xml";
const APP_PROPS_URI: &str = "/docProps/app.xml";

fn pack_uri(uri: &str) -> Result<PackURI> {
    PackURI::new(uri).map_err(OoxmlError::InvalidFormat)
}

/// A mutable PowerPoint presentation for writing.
///
/// Holds the canvas size, theme, document title and slides, and turns them
/// into a complete OPC package.
#[derive(Debug)]
pub struct MutablePresentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: Emu,
    /// Slide height in EMUs
    slide_height: Emu,
    /// Written to `docProps/core.xml`
    title: String,
    theme: ThemeSpec,
}

impl MutablePresentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: 9144000,  // 10 inches
            slide_height: 6858000, // 7.5 inches
            title: String::new(),
            theme: ThemeSpec::default(),
        }
    }

    /// Add a new slide using the blank layout.
    pub fn add_slide(&mut self) -> Result<&mut MutableSlide> {
        let slide_id = u32::try_from(self.slides.len() + 256)
            .map_err(|_| OoxmlError::InvalidFormat("too many slides".to_string()))?;
        self.slides.push(MutableSlide::new(slide_id));
        let index = self.slides.len() - 1;
        Ok(&mut self.slides[index])
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get a slide by index (0-based).
    pub fn slide(&self, index: usize) -> Option<&MutableSlide> {
        self.slides.get(index)
    }

    /// Get a mutable reference to a slide by index (0-based).
    pub fn slide_mut(&mut self, index: usize) -> Option<&mut MutableSlide> {
        self.slides.get_mut(index)
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> Emu {
        self.slide_width
    }

    /// Set the slide width in EMUs.
    pub fn set_slide_width(&mut self, width: Emu) {
        self.slide_width = width;
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> Emu {
        self.slide_height
    }

    /// Set the slide height in EMUs.
    pub fn set_slide_height(&mut self, height: Emu) {
        self.slide_height = height;
    }

    /// Document title.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn theme(&self) -> &ThemeSpec {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: ThemeSpec) {
        self.theme = theme;
    }

    /// Generate presentation.xml content with actual relationship IDs.
    ///
    /// # Arguments
    /// * `master_rel_id` - Relationship ID of the slide master
    /// * `slide_rel_ids` - One relationship ID per slide, in slide order
    pub(crate) fn generate_presentation_xml_with_rels(
        &self,
        master_rel_id: &str,
        slide_rel_ids: &[String],
    ) -> Result<String> {
        if slide_rel_ids.len() != self.slides.len() {
            return Err(OoxmlError::Xml(format!(
                "expected {} slide relationship IDs, got {}",
                self.slides.len(),
                slide_rel_ids.len()
            )));
        }

        let mut xml = String::with_capacity(4096 + 64 * self.slides.len());

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;

        write!(
            xml,
            r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="{}"/></p:sldMasterIdLst>"#,
            master_rel_id
        )?;

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(xml, r#"<p:sldId id="{}" r:id="{}"/>"#, slide.slide_id(), rel_id)?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;

        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("<p:defaultTextStyle>");
        template::write_level_styles(&mut xml)?;
        xml.push_str("</p:defaultTextStyle></p:presentation>");

        Ok(xml)
    }

    /// Assemble the complete OPC package.
    pub fn to_package(&self) -> Result<OpcPackage> {
        let pres_uri = pack_uri(PRESENTATION_URI)?;
        let master_uri = pack_uri(SLIDE_MASTER_URI)?;
        let layout_uri = pack_uri(SLIDE_LAYOUT_URI)?;
        let theme_uri = pack_uri(THEME_URI)?;
        let pres_props_uri = pack_uri(PRES_PROPS_URI)?;
        let view_props_uri = pack_uri(VIEW_PROPS_URI)?;
        let table_styles_uri = pack_uri(TABLE_STYLES_URI)?;
        let core_uri = pack_uri(CORE_PROPS_URI)?;
        let app_uri = pack_uri(APP_PROPS_URI)?;

        let slide_uris = (1..=self.slides.len())
            .map(|n| pack_uri(&format!("/ppt/slides/slide{}.xml", n)))
            .collect::<Result<Vec<_>>>()?;

        // Relationship IDs have to exist before presentation.xml can name them
        let mut pres_part = XmlPart::new(pres_uri.clone(), ct::PML_PRESENTATION_MAIN, Vec::new());
        let master_rel_id = pres_part.relate_to(&master_uri, rt::SLIDE_MASTER);
        let slide_rel_ids: Vec<String> = slide_uris
            .iter()
            .map(|uri| pres_part.relate_to(uri, rt::SLIDE))
            .collect();
        pres_part.relate_to(&pres_props_uri, rt::PRES_PROPS);
        pres_part.relate_to(&view_props_uri, rt::VIEW_PROPS);
        pres_part.relate_to(&theme_uri, rt::THEME);
        pres_part.relate_to(&table_styles_uri, rt::TABLE_STYLES);

        let pres_xml = self.generate_presentation_xml_with_rels(&master_rel_id, &slide_rel_ids)?;
        let pres_rels = std::mem::take(pres_part.rels_mut());
        let mut pres_part = XmlPart::from_xml(pres_uri.clone(), ct::PML_PRESENTATION_MAIN, pres_xml);
        *pres_part.rels_mut() = pres_rels;

        for r_id in &slide_rel_ids {
            if pres_part.rel_ref_count(r_id) != 1 {
                return Err(OoxmlError::InvalidFormat(format!(
                    "slide relationship {} is not referenced exactly once",
                    r_id
                )));
            }
        }

        let mut package = OpcPackage::new();
        package.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);
        package.relate_to(&core_uri, rt::CORE_PROPERTIES);
        package.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);
        package.add_part(Box::new(pres_part))?;

        // The master's layout list is written against rId1
        let mut master = XmlPart::from_xml(
            master_uri.clone(),
            ct::PML_SLIDE_MASTER,
            template::slide_master_xml()?,
        );
        let layout_rel_id = master.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
        debug_assert_eq!(layout_rel_id, "rId1");
        master.relate_to(&theme_uri, rt::THEME);
        package.add_part(Box::new(master))?;

        let mut layout = XmlPart::from_xml(
            layout_uri.clone(),
            ct::PML_SLIDE_LAYOUT,
            template::blank_layout_xml()?,
        );
        layout.relate_to(&master_uri, rt::SLIDE_MASTER);
        package.add_part(Box::new(layout))?;

        package.add_part(Box::new(XmlPart::from_xml(
            theme_uri,
            ct::OFC_THEME,
            template::theme_xml(&self.theme)?,
        )))?;

        for (slide, uri) in self.slides.iter().zip(slide_uris) {
            let mut part = XmlPart::from_xml(uri, ct::PML_SLIDE, slide.to_xml()?);
            part.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
            package.add_part(Box::new(part))?;
        }

        package.add_part(Box::new(XmlPart::from_xml(
            pres_props_uri,
            ct::PML_PRES_PROPS,
            template::pres_props_xml(),
        )))?;
        package.add_part(Box::new(XmlPart::from_xml(
            view_props_uri,
            ct::PML_VIEW_PROPS,
            template::view_props_xml(),
        )))?;
        package.add_part(Box::new(XmlPart::from_xml(
            table_styles_uri,
            ct::PML_TABLE_STYLES,
            template::table_styles_xml(),
        )))?;
        package.add_part(Box::new(XmlPart::from_xml(
            core_uri,
            ct::OPC_CORE_PROPERTIES,
            template::core_props_xml(&self.title),
        )))?;
        package.add_part(Box::new(XmlPart::from_xml(
            app_uri,
            ct::OFC_EXTENDED_PROPERTIES,
            template::app_props_xml(self.slides.len()),
        )))?;

        Ok(package)
    }

    /// Serialize the presentation to `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let package = self.to_package()?;
        Ok(PackageWriter::to_bytes(&package)?)
    }

    /// Save the presentation to a file.
    ///
    /// The file is replaced atomically; on error no partial file remains.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let package = self.to_package()?;
        PackageWriter::write(path, &package)?;
        Ok(())
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::PackageReader;

    #[test]
    fn test_create_presentation() {
        let pres = MutablePresentation::new();
        assert_eq!(pres.slide_count(), 0);
        assert_eq!(pres.slide_width(), 9144000);
        assert_eq!(pres.slide_height(), 6858000);
    }

    #[test]
    fn test_add_slide() {
        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide().unwrap();
        assert_eq!(slide.slide_id(), 256);
        assert_eq!(pres.slide_count(), 1);
    }

    #[test]
    fn test_presentation_xml_requires_matching_ids() {
        let mut pres = MutablePresentation::new();
        pres.add_slide().unwrap();
        assert!(pres.generate_presentation_xml_with_rels("rId1", &[]).is_err());

        let xml = pres
            .generate_presentation_xml_with_rels("rId1", &["rId2".to_string()])
            .unwrap();
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="6858000"/>"#));
        assert!(xml.contains(r#"<p:defaultTextStyle><a:defPPr>"#));
        assert!(xml.ends_with("</p:defaultTextStyle></p:presentation>"));
    }

    #[test]
    fn test_package_wiring() {
        let mut pres = MutablePresentation::new();
        pres.add_slide().unwrap().add_text_box(0, 0, 100, 100);
        let package = pres.to_package().unwrap();

        let main = package.main_document_part().unwrap();
        assert_eq!(main.content_type(), ct::PML_PRESENTATION_MAIN);

        let slide_rel = main.rels().get("rId2").unwrap();
        assert_eq!(slide_rel.reltype(), rt::SLIDE);
        let slide = package.related_part(main, "rId2").unwrap();
        assert_eq!(slide.partname().as_str(), "/ppt/slides/slide1.xml");

        let layout_rel = slide.rels().part_with_reltype(rt::SLIDE_LAYOUT).unwrap();
        assert_eq!(layout_rel.target_ref(), "../slideLayouts/slideLayout1.xml");
        assert_eq!(package.part_count(), 10);
    }

    #[test]
    fn test_bytes_are_repeatable_and_readable() {
        let mut pres = MutablePresentation::new();
        pres.set_title("Deck");
        pres.add_slide().unwrap().add_rectangle(0, 0, 10, 10);

        let first = pres.to_bytes().unwrap();
        let second = pres.to_bytes().unwrap();
        assert_eq!(first, second);

        let package = PackageReader::from_bytes(first).unwrap();
        assert_eq!(package.part_count(), 10);
    }
}
