/// A slide read back from a package.
use crate::common::RGBColor;
use crate::ooxml::error::Result;
use crate::ooxml::pptx::parts::{ShapeSummary, SlidePart};

/// A slide in a presentation.
///
/// # Examples
///
/// ```rust,no_run
/// use insight_deck::ooxml::pptx::Package;
///
/// let pkg = Package::open("presentation.pptx")?;
/// let pres = pkg.presentation()?;
///
/// for slide in pres.slides()?.iter() {
///     println!("{} shapes, title: {}", slide.shape_count()?, slide.has_title()?);
///     println!("Text content: {}", slide.text()?);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Slide<'a> {
    /// The underlying slide part
    part: SlidePart<'a>,
}

impl<'a> Slide<'a> {
    #[inline]
    pub(crate) fn new(part: SlidePart<'a>) -> Self {
        Self { part }
    }

    /// Extract all text content from the slide, one paragraph per line.
    pub fn text(&self) -> Result<String> {
        self.part.extract_text()
    }

    /// Shapes on the slide, in z-order.
    pub fn shapes(&self) -> Result<Vec<ShapeSummary>> {
        self.part.shapes()
    }

    pub fn shape_count(&self) -> Result<usize> {
        Ok(self.part.shapes()?.len())
    }

    /// Whether the slide has a title placeholder with any text in it.
    pub fn has_title(&self) -> Result<bool> {
        Ok(self
            .part
            .shapes()?
            .iter()
            .any(|shape| shape.is_title() && !shape.text().is_empty()))
    }

    /// Solid fills of all shapes, in z-order.
    pub fn fill_colors(&self) -> Result<Vec<RGBColor>> {
        Ok(self
            .part
            .shapes()?
            .into_iter()
            .filter_map(|shape| shape.fill)
            .collect())
    }

    /// Solid background color, if the slide sets one.
    pub fn background_color(&self) -> Result<Option<RGBColor>> {
        self.part.background_color()
    }

    /// Get access to the underlying slide part.
    #[inline]
    pub fn part(&self) -> &SlidePart<'a> {
        &self.part
    }
}
