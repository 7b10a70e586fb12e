//! The slide specification and the builder that renders it.
//!
//! ```rust
//! use insight_deck::deck::{SlideBuilder, SlideSpec};
//!
//! let bytes = SlideBuilder::default().to_bytes(&SlideSpec::key_insights())?;
//! assert!(bytes.starts_with(b"PK"));
//! # Ok::<(), insight_deck::Error>(())
//! ```

pub mod builder;
pub mod options;
pub mod spec;

pub use builder::SlideBuilder;
pub use options::{BuildOptions, DEFAULT_FILE_NAME};
pub use spec::{BulletSection, Column, ContentBlock, Palette, SlideSpec, Typography};
