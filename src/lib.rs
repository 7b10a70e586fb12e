//! insight-deck - builds the "MobileViT2 anomaly detector: key insights" slide
//!
//! The crate writes a single-slide PowerPoint (`.pptx`) presentation from a
//! static layout description. It carries its own small PresentationML writer:
//!
//! - [`ooxml::opc`]: the package container (part names, relationships,
//!   content types, deterministic ZIP output, atomic save)
//! - [`ooxml::pptx`]: presentation, slide and shape model, template parts,
//!   and a read side for inspecting saved files
//! - [`deck`]: the slide specification and the builder that renders it
//!
//! # Example
//!
//! ```no_run
//! use insight_deck::deck::{BuildOptions, SlideBuilder, SlideSpec};
//!
//! # fn main() -> Result<(), insight_deck::Error> {
//! let builder = SlideBuilder::new(BuildOptions::new().with_output_dir("out"));
//! let path = builder.write(&SlideSpec::key_insights())?;
//! println!("Saved: {}", path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Inspecting the output
//!
//! ```
//! use insight_deck::deck::{SlideBuilder, SlideSpec};
//! use insight_deck::ooxml::pptx::Package;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = SlideBuilder::default().to_bytes(&SlideSpec::key_insights())?;
//! let pkg = Package::from_bytes(bytes)?;
//! let pres = pkg.presentation()?;
//!
//! assert_eq!(pres.slide_count()?, 1);
//! assert!(!pres.slides()?[0].has_title()?);
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod deck;
pub mod ooxml;

pub use common::{Error, Result};
