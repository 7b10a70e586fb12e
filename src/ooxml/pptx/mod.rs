//! PowerPoint (.pptx) presentation support.
//!
//! The writer side (`MutablePresentation`, `MutableSlide`, `MutableShape`)
//! builds PresentationML parts and assembles them into an OPC package.
//! The read side (`Package`, `Presentation`, `Slide`) opens a saved package
//! again to inspect slide count, shapes, fills and text.
//!
//! # Example
//!
//! ```rust
//! use insight_deck::common::RGBColor;
//! use insight_deck::ooxml::pptx::{MutablePresentation, Package, Paragraph, TextFormat};
//!
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide()?;
//! slide
//!     .add_rounded_rectangle(457_200, 274_320, 3_000_000, 457_200)
//!     .fill(RGBColor::new(0xA7, 0xD3, 0xF1))
//!     .no_line()
//!     .add_paragraph(Paragraph::with_run("Hello", TextFormat::new().with_bold(true)));
//!
//! let pkg = Package::from_bytes(pres.to_bytes()?)?;
//! let slides = pkg.presentation()?.slides()?;
//! assert_eq!(slides[0].text()?, "Hello");
//! # Ok::<(), insight_deck::ooxml::OoxmlError>(())
//! ```

pub mod backgrounds;
pub mod format;
pub mod package;
pub mod parts;
pub mod presentation;
pub mod slide;
pub mod template;
pub mod writer;

pub use backgrounds::SlideBackground;
pub use format::{Alignment, Paragraph, TextFormat, TextRun};
pub use package::Package;
pub use presentation::Presentation;
pub use slide::Slide;
pub use template::ThemeSpec;
pub use writer::{
    Frame, MutablePresentation, MutableShape, MutableSlide, PresetGeometry, TextAnchor, TextBody,
};
