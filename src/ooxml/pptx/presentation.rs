/// Main presentation object - the read-side API for a saved presentation.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::OpcPackage;
use crate::ooxml::opc::constants::relationship_type as rt;
use crate::ooxml::pptx::parts::{PresentationPart, SlidePart, Theme, ThemePart};
use crate::ooxml::pptx::slide::Slide;

/// A PowerPoint presentation read back from a package.
///
/// Not intended to be constructed directly. Use `Package::presentation()` to
/// access a presentation.
///
/// # Examples
///
/// ```rust,no_run
/// use insight_deck::ooxml::pptx::Package;
///
/// let pkg = Package::open("presentation.pptx")?;
/// let pres = pkg.presentation()?;
///
/// if let Some((width, height)) = pres.slide_size()? {
///     println!("Slide size: {}x{} EMUs", width, height);
/// }
///
/// for slide in pres.slides()? {
///     println!("Slide: {}", slide.text()?);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Presentation<'a> {
    /// The underlying presentation part
    part: PresentationPart<'a>,
    /// Reference to the OPC package for accessing related parts
    package: &'a OpcPackage,
}

impl<'a> Presentation<'a> {
    #[inline]
    pub(crate) fn new(part: PresentationPart<'a>, package: &'a OpcPackage) -> Self {
        Self { part, package }
    }

    /// Get the number of slides in the presentation.
    pub fn slide_count(&self) -> Result<usize> {
        self.part.slide_count()
    }

    /// Get the slide size `(width, height)` in EMUs.
    pub fn slide_size(&self) -> Result<Option<(i64, i64)>> {
        self.part.slide_size()
    }

    /// Get all slides in presentation order.
    pub fn slides(&self) -> Result<Vec<Slide<'a>>> {
        let pres_part = self.part.part();
        let slide_rids = self.part.slide_rids()?;
        let mut slides = Vec::with_capacity(slide_rids.len());

        for rid in slide_rids {
            let part = self.package.related_part(pres_part, &rid).map_err(|e| {
                OoxmlError::PartNotFound(format!("slide {}: {}", rid, e))
            })?;
            slides.push(Slide::new(SlidePart::from_part(part)?));
        }

        Ok(slides)
    }

    /// Parse the presentation's theme.
    pub fn theme(&self) -> Result<Theme> {
        let pres_part = self.part.part();
        let rel = pres_part.rels().part_with_reltype(rt::THEME)?;
        let part = self.package.related_part(pres_part, rel.r_id())?;
        ThemePart::from_part(part)?.theme()
    }
}
