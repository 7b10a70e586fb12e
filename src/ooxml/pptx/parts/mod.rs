/// Read-side wrappers around the parts of a .pptx package.
pub mod presentation;
pub mod slide;
pub mod theme;

pub use presentation::PresentationPart;
pub use slide::{ShapeSummary, SlidePart};
pub use theme::{Theme, ThemeColor, ThemePart};
