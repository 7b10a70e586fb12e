//! Text formatting types for PPTX shapes.

use crate::common::RGBColor;

/// Character formatting for a text run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFormat {
    /// Latin typeface
    pub font: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Bold. `Some(false)` writes an explicit `b="0"`.
    pub bold: Option<bool>,
    /// Italic
    pub italic: Option<bool>,
    /// Solid text color
    pub color: Option<RGBColor>,
}

impl TextFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    pub fn with_color(mut self, color: RGBColor) -> Self {
        self.color = Some(color);
        self
    }
}

/// Horizontal paragraph alignment (`algn`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// Attribute value for `a:pPr/@algn`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
            Self::Justify => "just",
        }
    }
}

/// A run of uniformly formatted text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub format: TextFormat,
}

impl TextRun {
    pub fn new(text: impl Into<String>, format: TextFormat) -> Self {
        Self {
            text: text.into(),
            format,
        }
    }
}

/// A paragraph in a text body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub runs: Vec<TextRun>,
    /// Outline level, 0 to 8
    pub level: u8,
    /// Explicit alignment; `None` inherits
    pub alignment: Option<Alignment>,
    /// Space after the paragraph in points
    pub space_after: Option<f64>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// A paragraph holding a single run.
    pub fn with_run(text: impl Into<String>, format: TextFormat) -> Self {
        Self {
            runs: vec![TextRun::new(text, format)],
            ..Self::default()
        }
    }

    pub fn level(mut self, level: u8) -> Self {
        self.level = level.min(8);
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn space_after(mut self, points: f64) -> Self {
        self.space_after = Some(points);
        self
    }

    pub fn add_run(&mut self, run: TextRun) -> &mut Self {
        self.runs.push(run);
        self
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_builder() {
        let mut para = Paragraph::with_run("Hello", TextFormat::new().with_bold(true))
            .level(12)
            .align(Alignment::Center)
            .space_after(4.0);
        para.add_run(TextRun::new(" world", TextFormat::new()));

        assert_eq!(para.level, 8);
        assert_eq!(para.alignment, Some(Alignment::Center));
        assert_eq!(para.text(), "Hello world");
    }
}
