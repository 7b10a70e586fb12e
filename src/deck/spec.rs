//! The slide specification: canvas, palette, typography and content blocks.
//!
//! A [`SlideSpec`] is plain data. [`SlideSpec::key_insights`] returns the
//! fixed "MobileViT2 anomaly detector: key insights" layout; the builder
//! turns any valid layout into a one-slide presentation.

use crate::common::error::{Error, Result};
use crate::common::unit::{Emu, inches};
use crate::common::RGBColor;
use crate::ooxml::pptx::Frame;

/// Colors used on the slide and written into the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: RGBColor,
    pub pastel_blue: RGBColor,
    pub pastel_green: RGBColor,
    pub text_dark: RGBColor,
    pub line_light: RGBColor,
}

impl Palette {
    /// Light theme with pastel blue and green accents.
    pub const PASTEL: Self = Self {
        background: RGBColor::new(0xFF, 0xFF, 0xFF),
        pastel_blue: RGBColor::new(0xA7, 0xD3, 0xF1),
        pastel_green: RGBColor::new(0xBF, 0xE7, 0xC6),
        text_dark: RGBColor::new(0x22, 0x22, 0x22),
        line_light: RGBColor::new(0xCC, 0xCC, 0xCC),
    };

    /// Build a palette from hex strings, in field order.
    ///
    /// Fails with [`Error::InvalidColor`] on the first value that is not six
    /// hex digits.
    pub fn from_hex(
        background: &str,
        pastel_blue: &str,
        pastel_green: &str,
        text_dark: &str,
        line_light: &str,
    ) -> Result<Self> {
        Ok(Self {
            background: background.parse()?,
            pastel_blue: pastel_blue.parse()?,
            pastel_green: pastel_green.parse()?,
            text_dark: text_dark.parse()?,
            line_light: line_light.parse()?,
        })
    }
}

/// Font and point sizes for every kind of text on the slide.
#[derive(Debug, Clone, PartialEq)]
pub struct Typography {
    pub font: String,
    pub badge_size: f64,
    pub section_size: f64,
    pub section_space_after: f64,
    pub item_size: f64,
    pub item_space_after: f64,
    pub column_item_size: f64,
    pub column_item_space_after: f64,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font: "Segoe UI".to_string(),
            badge_size: 18.0,
            section_size: 18.0,
            section_space_after: 4.0,
            item_size: 14.0,
            item_space_after: 2.0,
            column_item_size: 16.0,
            column_item_space_after: 2.0,
        }
    }
}

/// A bold heading followed by indented items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletSection {
    pub title: String,
    pub items: Vec<String>,
}

impl BulletSection {
    pub fn new<I, S>(title: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

/// One column of a [`ContentBlock::ColumnBand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub badge: String,
    pub fill: RGBColor,
    pub items: Vec<String>,
}

impl Column {
    pub fn new<I, S>(badge: impl Into<String>, fill: RGBColor, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            badge: badge.into(),
            fill,
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

/// A block placed on the slide, in list order.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    /// Rounded, filled label with one centered line of bold text
    Badge {
        frame: Frame,
        text: String,
        fill: RGBColor,
    },
    /// Text box of bullet sections
    BulletList {
        frame: Frame,
        sections: Vec<BulletSection>,
    },
    /// Thin filled rectangle
    Divider { frame: Frame, color: RGBColor },
    /// Equal-width columns, each a badge above a text box of items
    ColumnBand {
        frame: Frame,
        gutter: Emu,
        badge_height: Emu,
        /// Distance from the band top to the top of each item box
        body_offset: Emu,
        columns: Vec<Column>,
    },
}

impl ContentBlock {
    pub fn frame(&self) -> Frame {
        match self {
            Self::Badge { frame, .. }
            | Self::BulletList { frame, .. }
            | Self::Divider { frame, .. }
            | Self::ColumnBand { frame, .. } => *frame,
        }
    }

    /// Short name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Badge { .. } => "badge",
            Self::BulletList { .. } => "bullet list",
            Self::Divider { .. } => "divider",
            Self::ColumnBand { .. } => "column band",
        }
    }

    /// Number of shapes the block places on the slide.
    pub fn shape_count(&self) -> usize {
        match self {
            Self::ColumnBand { columns, .. } => columns.len() * 2,
            _ => 1,
        }
    }
}

/// Frames of `count` equal columns across `frame`, separated by `gutter`.
///
/// Offsets are computed from the exact fractional width and truncated, so
/// the last column ends within a unit of the band's right edge. Fails with
/// [`Error::InvalidLayout`] when the arithmetic leaves the EMU range.
pub fn column_frames(frame: Frame, gutter: Emu, count: usize) -> Result<Vec<Frame>> {
    if count == 0 {
        return Ok(Vec::new());
    }
    let overflow = || {
        Error::InvalidLayout(format!(
            "column band at ({}, {}) with {} columns overflows",
            frame.x, frame.y, count
        ))
    };

    let n = Emu::try_from(count).map_err(|_| overflow())?;
    let usable = (n - 1)
        .checked_mul(gutter)
        .and_then(|gutters| frame.width.checked_sub(gutters))
        .ok_or_else(overflow)?;
    let width = usable / n;

    (0..n)
        .map(|i| {
            let offset = i.checked_mul(gutter)?.checked_add(i.checked_mul(usable)? / n)?;
            let x = frame.x.checked_add(offset)?;
            Some(Frame::new(x, frame.y, width, frame.height))
        })
        .map(|col| col.ok_or_else(overflow))
        .collect()
}

/// Static description of the single output slide.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideSpec {
    /// Canvas width in EMU
    pub width: Emu,
    /// Canvas height in EMU
    pub height: Emu,
    pub palette: Palette,
    pub typography: Typography,
    pub blocks: Vec<ContentBlock>,
}

impl SlideSpec {
    /// The key-insights slide: two badge-headed columns of bullet sections,
    /// a divider, and a three-column takeaway band.
    pub fn key_insights() -> Self {
        let palette = Palette::PASTEL;
        let width = inches(13.333);
        let height = inches(7.5);

        let margin = inches(0.5);
        let content_top = inches(0.9);
        let column_height = inches(4.6);
        let col_gap = inches(0.4);
        let col_width = (width - 2 * margin - col_gap) / 2;
        let badge_top = inches(0.3);
        let badge_height = inches(0.5);

        let left_x = margin;
        let right_x = margin + col_width + col_gap;

        let divider_y = content_top + column_height + inches(0.2);
        let content_width = width - 2 * margin;
        let bottom_top = divider_y + inches(0.2);
        let bottom_height = height - bottom_top - inches(0.4);

        let blocks = vec![
            ContentBlock::Badge {
                frame: Frame::new(left_x, badge_top, col_width, badge_height),
                text: "Advantages / Strengths".to_string(),
                fill: palette.pastel_green,
            },
            ContentBlock::BulletList {
                frame: Frame::new(left_x, content_top, col_width, column_height),
                sections: vec![
                    BulletSection::new(
                        "High Recall Focus ✅",
                        ["Critical for field deployment to reduce disease spread"],
                    ),
                    BulletSection::new(
                        "Modular Architecture 🔄",
                        ["Autoencoder and classifier can work independently or together"],
                    ),
                    BulletSection::new(
                        "Ease of Data Acquisition 🌱",
                        [
                            "Autoencoder requires few or no diseased images",
                            "Classifier trained only on images autoencoder fails to detect",
                        ],
                    ),
                ],
            },
            ContentBlock::Badge {
                frame: Frame::new(right_x, badge_top, col_width, badge_height),
                text: "Limitations / Recommendations".to_string(),
                fill: palette.pastel_blue,
            },
            ContentBlock::BulletList {
                frame: Frame::new(right_x, content_top, col_width, column_height),
                sections: vec![
                    BulletSection::new(
                        "Autoencoder Limitations ⚠️",
                        [
                            "Weak decoder reduces standalone performance",
                            "Normalization may worsen results",
                        ],
                    ),
                    BulletSection::new(
                        "Improvement Opportunities 💡",
                        [
                            "Enhanced decoder (skip connections + attention mechanisms)",
                            "Robust loss functions and tailored training strategies",
                            "Ensemble with classifier for sparse proprietary data",
                        ],
                    ),
                ],
            },
            ContentBlock::Divider {
                frame: Frame::new(margin, divider_y, content_width, inches(0.02)),
                color: palette.line_light,
            },
            ContentBlock::ColumnBand {
                frame: Frame::new(margin, bottom_top, content_width, bottom_height),
                gutter: inches(0.25),
                badge_height,
                body_offset: inches(0.6),
                columns: vec![
                    Column::new(
                        "Dataset Observations 📸",
                        palette.pastel_blue,
                        [
                            "Classifier handles varied conditions (day/night)",
                            "More diseased samples → better performance",
                        ],
                    ),
                    Column::new(
                        "Model Choice 🏎️",
                        palette.pastel_green,
                        ["Lightweight MobileViT2 outperforms larger models like EfficientNet"],
                    ),
                    Column::new(
                        "Takeaway ✔️",
                        palette.pastel_blue,
                        [
                            "Lightweight anomaly detector + classifier is optimal for deployment",
                            "Reduces data collection effort and maintains high recall",
                        ],
                    ),
                ],
            },
        ];

        Self {
            width,
            height,
            palette,
            typography: Typography::default(),
            blocks,
        }
    }

    /// Total shapes the slide will carry.
    pub fn shape_count(&self) -> usize {
        self.blocks.iter().map(ContentBlock::shape_count).sum()
    }

    /// Check every block can be placed on the canvas.
    ///
    /// Rejects a non-positive canvas, blocks with non-positive extents or
    /// that leave the canvas, empty badge text, and empty lists.
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(Error::InvalidLayout(format!(
                "canvas must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.typography.font.trim().is_empty() {
            return Err(Error::InvalidLayout("font name is empty".to_string()));
        }

        for (index, block) in self.blocks.iter().enumerate() {
            self.check_frame(index, block.kind(), block.frame())?;

            match block {
                ContentBlock::Badge { text, .. } if text.trim().is_empty() => {
                    return Err(Error::InvalidLayout(format!("block {}: badge text is empty", index)));
                },
                ContentBlock::BulletList { sections, .. } if sections.is_empty() => {
                    return Err(Error::InvalidLayout(format!(
                        "block {}: bullet list has no sections",
                        index
                    )));
                },
                ContentBlock::ColumnBand {
                    frame,
                    gutter,
                    badge_height,
                    body_offset,
                    columns,
                } => {
                    if columns.is_empty() {
                        return Err(Error::InvalidLayout(format!(
                            "block {}: column band has no columns",
                            index
                        )));
                    }
                    if *gutter < 0
                        || *badge_height <= 0
                        || *body_offset < 0
                        || *body_offset >= frame.height
                    {
                        return Err(Error::InvalidLayout(format!(
                            "block {}: column band spacing does not fit its height",
                            index
                        )));
                    }
                    if column_frames(*frame, *gutter, columns.len())?
                        .iter()
                        .any(|col| col.width <= 0)
                    {
                        return Err(Error::InvalidLayout(format!(
                            "block {}: columns are too narrow for the gutters",
                            index
                        )));
                    }
                    if let Some(col) = columns.iter().position(|c| c.badge.trim().is_empty()) {
                        return Err(Error::InvalidLayout(format!(
                            "block {}: column {} badge text is empty",
                            index, col
                        )));
                    }
                },
                _ => {},
            }
        }

        Ok(())
    }

    fn check_frame(&self, index: usize, kind: &str, frame: Frame) -> Result<()> {
        if frame.width <= 0 || frame.height <= 0 {
            return Err(Error::InvalidLayout(format!(
                "block {} ({}): extent must be positive, got {}x{}",
                index, kind, frame.width, frame.height
            )));
        }
        let fits = frame.x >= 0
            && frame.y >= 0
            && frame.x.checked_add(frame.width).is_some_and(|right| right <= self.width)
            && frame.y.checked_add(frame.height).is_some_and(|bottom| bottom <= self.height);
        if !fits {
            return Err(Error::InvalidLayout(format!(
                "block {} ({}): ({}, {}) {}x{} is off the {}x{} canvas",
                index, kind, frame.x, frame.y, frame.width, frame.height, self.width, self.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_insights_geometry() {
        let spec = SlideSpec::key_insights();
        assert_eq!((spec.width, spec.height), (12_191_695, 6_858_000));
        assert_eq!(spec.blocks.len(), 6);
        assert_eq!(spec.shape_count(), 11);

        assert_eq!(spec.blocks[0].frame(), Frame::new(457_200, 274_320, 5_455_767, 457_200));
        assert_eq!(spec.blocks[2].frame().x, 6_278_727);
        assert_eq!(
            spec.blocks[4].frame(),
            Frame::new(457_200, 5_212_080, 11_277_295, 18_288)
        );
        assert_eq!(
            spec.blocks[5].frame(),
            Frame::new(457_200, 5_394_960, 11_277_295, 1_097_280)
        );
    }

    #[test]
    fn test_key_insights_is_valid() {
        SlideSpec::key_insights().validate().unwrap();
    }

    #[test]
    fn test_column_frames_truncate_like_fractional_layout() {
        let band = Frame::new(457_200, 5_394_960, 11_277_295, 1_097_280);
        let xs: Vec<Emu> = column_frames(band, 228_600, 3).unwrap().iter().map(|f| f.x).collect();

        assert_eq!(xs, vec![457_200, 4_292_498, 8_127_796]);
        assert!(column_frames(band, 228_600, 3).unwrap().iter().all(|f| f.width == 3_606_698));
        assert!(column_frames(band, 228_600, 0).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_off_canvas_block() {
        let mut spec = SlideSpec::key_insights();
        spec.blocks.push(ContentBlock::Divider {
            frame: Frame::new(spec.width - 10, 0, 20, 10),
            color: spec.palette.line_light,
        });
        assert!(matches!(spec.validate(), Err(Error::InvalidLayout(_))));
    }

    #[test]
    fn test_rejects_extent_past_emu_range() {
        let mut spec = SlideSpec::key_insights();
        spec.blocks.push(ContentBlock::Divider {
            frame: Frame::new(Emu::MAX - 1, 0, 10, 10),
            color: spec.palette.line_light,
        });
        assert!(matches!(spec.validate(), Err(Error::InvalidLayout(_))));
    }

    #[test]
    fn test_column_frames_report_overflow() {
        let band = Frame::new(0, 0, 1_000, 1_000);
        assert!(matches!(
            column_frames(band, Emu::MAX, 3),
            Err(Error::InvalidLayout(_))
        ));

        let mut spec = SlideSpec::key_insights();
        if let ContentBlock::ColumnBand { gutter, .. } = &mut spec.blocks[5] {
            *gutter = Emu::MAX;
        }
        assert!(matches!(spec.validate(), Err(Error::InvalidLayout(_))));
    }

    #[test]
    fn test_rejects_empty_badge() {
        let mut spec = SlideSpec::key_insights();
        if let ContentBlock::Badge { text, .. } = &mut spec.blocks[0] {
            text.clear();
        }
        assert!(matches!(spec.validate(), Err(Error::InvalidLayout(_))));
    }

    #[test]
    fn test_rejects_zero_canvas() {
        let mut spec = SlideSpec::key_insights();
        spec.height = 0;
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_palette_from_hex() {
        let palette = Palette::from_hex("FFFFFF", "A7D3F1", "#BFE7C6", "222222", "CCCCCC").unwrap();
        assert_eq!(palette, Palette::PASTEL);

        let err = Palette::from_hex("FFFFFF", "A7D3F", "BFE7C6", "222222", "CCCCCC").unwrap_err();
        assert!(matches!(err, Error::InvalidColor(_)));
    }
}
