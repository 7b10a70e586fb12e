//! The slide builder: turns a [`SlideSpec`] into a presentation and saves it.

use super::options::BuildOptions;
use super::spec::{BulletSection, Column, ContentBlock, SlideSpec, Typography, column_frames};
use crate::common::error::Result;
use crate::common::RGBColor;
use crate::ooxml::pptx::{
    Alignment, Frame, MutablePresentation, MutableSlide, Paragraph, SlideBackground, TextFormat,
    ThemeSpec,
};
use std::path::PathBuf;

/// Builds the one-slide presentation described by a [`SlideSpec`].
///
/// # Examples
///
/// ```rust,no_run
/// use insight_deck::deck::{SlideBuilder, SlideSpec};
///
/// let path = SlideBuilder::default().write(&SlideSpec::key_insights())?;
/// println!("Saved: {}", path.display());
/// # Ok::<(), insight_deck::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SlideBuilder {
    options: BuildOptions,
}

impl SlideBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Validate the layout and place it on a single blank slide.
    pub fn build(&self, spec: &SlideSpec) -> Result<MutablePresentation> {
        spec.validate()?;

        let mut pres = MutablePresentation::new();
        pres.set_slide_width(spec.width);
        pres.set_slide_height(spec.height);
        pres.set_title(self.options.document_title.clone());
        pres.set_theme(ThemeSpec {
            name: "Key Insights".to_string(),
            dark: spec.palette.text_dark,
            light: spec.palette.background,
            accent1: spec.palette.pastel_blue,
            accent2: spec.palette.pastel_green,
            font: spec.typography.font.clone(),
        });

        let slide = pres.add_slide()?;
        slide.set_background(SlideBackground::solid(spec.palette.background));

        let painter = Painter {
            typography: &spec.typography,
            text_color: spec.palette.text_dark,
        };
        for block in &spec.blocks {
            painter.place(slide, block)?;
        }

        log::debug!(
            "laid out {} blocks as {} shapes on a {}x{} canvas",
            spec.blocks.len(),
            slide.shape_count(),
            spec.width,
            spec.height
        );
        Ok(pres)
    }

    /// Build and serialize to `.pptx` bytes.
    pub fn to_bytes(&self, spec: &SlideSpec) -> Result<Vec<u8>> {
        Ok(self.build(spec)?.to_bytes()?)
    }

    /// Build and save atomically to [`BuildOptions::output_path`].
    ///
    /// Returns the path written. On error nothing is left at that path.
    pub fn write(&self, spec: &SlideSpec) -> Result<PathBuf> {
        let pres = self.build(spec)?;
        let path = self.options.output_path();
        pres.save(&path)?;

        log::info!("saved {}", path.display());
        Ok(path)
    }
}

/// Places blocks with shared text styling.
struct Painter<'a> {
    typography: &'a Typography,
    text_color: RGBColor,
}

impl Painter<'_> {
    fn format(&self, size: f64, bold: bool) -> TextFormat {
        TextFormat::new()
            .with_font(self.typography.font.as_str())
            .with_size(size)
            .with_bold(bold)
            .with_color(self.text_color)
    }

    fn place(&self, slide: &mut MutableSlide, block: &ContentBlock) -> Result<()> {
        match block {
            ContentBlock::Badge { frame, text, fill } => self.badge(slide, *frame, text, *fill),
            ContentBlock::BulletList { frame, sections } => self.bullets(slide, *frame, sections),
            ContentBlock::Divider { frame, color } => {
                slide
                    .add_rectangle(frame.x, frame.y, frame.width, frame.height)
                    .fill(*color)
                    .no_line();
            },
            ContentBlock::ColumnBand {
                frame,
                gutter,
                badge_height,
                body_offset,
                columns,
            } => {
                let frames = column_frames(*frame, *gutter, columns.len())?;
                for (col_frame, column) in frames.into_iter().zip(columns) {
                    self.column(slide, col_frame, *badge_height, *body_offset, column);
                }
            },
        }
        Ok(())
    }

    fn badge(&self, slide: &mut MutableSlide, frame: Frame, text: &str, fill: RGBColor) {
        let paragraph = Paragraph::with_run(text, self.format(self.typography.badge_size, true))
            .align(Alignment::Center);
        slide
            .add_rounded_rectangle(frame.x, frame.y, frame.width, frame.height)
            .fill(fill)
            .no_line()
            .add_paragraph(paragraph);
    }

    fn bullets(&self, slide: &mut MutableSlide, frame: Frame, sections: &[BulletSection]) {
        let t = self.typography;
        let shape = slide.add_text_box(frame.x, frame.y, frame.width, frame.height);
        shape.word_wrap(true);

        for section in sections {
            shape.add_paragraph(
                Paragraph::with_run(section.title.as_str(), self.format(t.section_size, true))
                    .level(0)
                    .space_after(t.section_space_after),
            );
            for item in &section.items {
                shape.add_paragraph(
                    Paragraph::with_run(item.as_str(), self.format(t.item_size, false))
                        .level(1)
                        .space_after(t.item_space_after),
                );
            }
        }
    }

    fn column(
        &self,
        slide: &mut MutableSlide,
        frame: Frame,
        badge_height: i64,
        body_offset: i64,
        column: &Column,
    ) {
        let t = self.typography;
        self.badge(
            slide,
            Frame::new(frame.x, frame.y, frame.width, badge_height),
            &column.badge,
            column.fill,
        );

        let shape = slide.add_text_box(
            frame.x,
            frame.y + body_offset,
            frame.width,
            frame.height - body_offset,
        );
        shape.word_wrap(true);
        for item in &column.items {
            shape.add_paragraph(
                Paragraph::with_run(format!("• {}", item), self.format(t.column_item_size, false))
                    .space_after(t.column_item_space_after),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::Error;

    #[test]
    fn test_build_places_every_block() {
        let spec = SlideSpec::key_insights();
        let pres = SlideBuilder::default().build(&spec).unwrap();

        assert_eq!(pres.slide_count(), 1);
        assert_eq!(pres.slide_width(), 12_191_695);
        let slide = pres.slide(0).unwrap();
        assert_eq!(slide.shape_count(), spec.shape_count());
        assert_eq!(slide.title(), None);
        assert_eq!(slide.background(), SlideBackground::solid(RGBColor::new(0xFF, 0xFF, 0xFF)));
    }

    #[test]
    fn test_shapes_follow_block_order() {
        let pres = SlideBuilder::default().build(&SlideSpec::key_insights()).unwrap();
        let shapes = pres.slide(0).unwrap().shapes();

        assert_eq!(shapes[0].text(), "Advantages / Strengths");
        assert_eq!(shapes[0].fill_color(), Some(RGBColor::new(0xBF, 0xE7, 0xC6)));
        assert!(shapes[1].text().starts_with("High Recall Focus ✅\n"));
        assert_eq!(shapes[2].fill_color(), Some(RGBColor::new(0xA7, 0xD3, 0xF1)));
        assert_eq!(shapes[4].fill_color(), Some(RGBColor::new(0xCC, 0xCC, 0xCC)));
        assert_eq!(shapes[4].text(), "");
        assert_eq!(shapes[5].text(), "Dataset Observations 📸");
        assert_eq!(
            shapes[6].text(),
            "• Classifier handles varied conditions (day/night)\n• More diseased samples → better performance"
        );
        assert_eq!(shapes[10].frame(), Frame::new(8_127_796, 5_943_600, 3_606_698, 548_640));
    }

    #[test]
    fn test_bullet_levels() {
        let pres = SlideBuilder::default().build(&SlideSpec::key_insights()).unwrap();
        let body = pres.slide(0).unwrap().shapes()[3].text_body().unwrap();

        let levels: Vec<u8> = body.paragraphs.iter().map(|p| p.level).collect();
        assert_eq!(levels, vec![0, 1, 1, 0, 1, 1, 1]);
        assert_eq!(body.word_wrap, Some(true));
    }

    #[test]
    fn test_invalid_spec_is_rejected_before_layout() {
        let mut spec = SlideSpec::key_insights();
        spec.width = -1;
        assert!(matches!(
            SlideBuilder::default().build(&spec),
            Err(Error::InvalidLayout(_))
        ));
    }

    #[test]
    fn test_write_uses_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let builder = SlideBuilder::new(BuildOptions::new().with_output_dir(dir.path()));

        let path = builder.write(&SlideSpec::key_insights()).unwrap();
        assert_eq!(path, dir.path().join(crate::deck::DEFAULT_FILE_NAME));
        assert!(path.is_file());
    }
}
