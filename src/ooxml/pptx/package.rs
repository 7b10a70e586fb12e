/// Package implementation for PowerPoint presentations.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::content_type as ct;
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use crate::ooxml::opc::{OpcPackage, PackageReader};
use crate::ooxml::pptx::parts::PresentationPart;
use crate::ooxml::pptx::presentation::Presentation;
use std::path::Path;

/// A PowerPoint (.pptx) package opened for reading.
///
/// # Examples
///
/// ```rust,no_run
/// use insight_deck::ooxml::pptx::Package;
///
/// let pkg = Package::open("presentation.pptx")?;
/// let pres = pkg.presentation()?;
/// println!("Presentation has {} slides", pres.slide_count()?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Package {
    /// The underlying OPC package
    opc: OpcPackage,
}

impl Package {
    /// Open a .pptx package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut phys = PhysPkgReader::open(path)?;
        Self::from_opc(PackageReader::read(&mut phys)?)
    }

    /// Open a .pptx package held in memory.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Self::from_opc(PackageReader::from_bytes(data)?)
    }

    /// Verify the main part is a presentation.
    fn from_opc(opc: OpcPackage) -> Result<Self> {
        let main_part = opc
            .main_document_part()
            .map_err(|e| OoxmlError::PartNotFound(format!("main presentation part: {}", e)))?;

        let content_type = main_part.content_type();
        if content_type != ct::PML_PRESENTATION_MAIN {
            return Err(OoxmlError::InvalidFormat(format!(
                "expected {}, got {}",
                ct::PML_PRESENTATION_MAIN,
                content_type
            )));
        }

        Ok(Self { opc })
    }

    /// Get the main presentation.
    pub fn presentation(&self) -> Result<Presentation<'_>> {
        let main_part = self
            .opc
            .main_document_part()
            .map_err(|e| OoxmlError::PartNotFound(format!("main presentation part: {}", e)))?;

        let pres_part = PresentationPart::from_part(main_part)?;
        Ok(Presentation::new(pres_part, &self.opc))
    }

    /// Get the underlying OPC package.
    #[inline]
    pub fn opc_package(&self) -> &OpcPackage {
        &self.opc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use crate::ooxml::opc::{PackURI, PackageWriter, XmlPart};
    use crate::ooxml::opc::constants::relationship_type as rt;
    use crate::ooxml::pptx::{MutablePresentation, SlideBackground};

    #[test]
    fn test_round_trip_through_bytes() {
        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide().unwrap();
        slide.set_background(SlideBackground::solid(RGBColor::new(0xFF, 0xFF, 0xFF)));
        slide
            .add_rectangle(0, 0, 100, 100)
            .fill(RGBColor::new(0xA7, 0xD3, 0xF1));

        let pkg = Package::from_bytes(pres.to_bytes().unwrap()).unwrap();
        let read = pkg.presentation().unwrap();
        let slides = read.slides().unwrap();

        assert_eq!(read.slide_count().unwrap(), 1);
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].shape_count().unwrap(), 1);
        assert!(!slides[0].has_title().unwrap());
        assert_eq!(
            slides[0].fill_colors().unwrap(),
            vec![RGBColor::new(0xA7, 0xD3, 0xF1)]
        );
        assert_eq!(
            slides[0].background_color().unwrap(),
            Some(RGBColor::new(0xFF, 0xFF, 0xFF))
        );
    }

    #[test]
    fn test_rejects_non_presentation() {
        let mut opc = OpcPackage::new();
        let doc = PackURI::new("/word/document.xml").unwrap();
        opc.add_part(Box::new(XmlPart::from_xml(
            doc.clone(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
            "<w:document/>".to_string(),
        )))
        .unwrap();
        opc.relate_to(&doc, rt::OFFICE_DOCUMENT);
        let bytes = PackageWriter::to_bytes(&opc).unwrap();

        assert!(matches!(
            Package::from_bytes(bytes),
            Err(OoxmlError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_open_saved_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");

        let mut pres = MutablePresentation::new();
        pres.add_slide().unwrap();
        pres.save(&path).unwrap();

        let pkg = Package::open(&path).unwrap();
        assert_eq!(pkg.presentation().unwrap().slide_count().unwrap(), 1);
    }
}
