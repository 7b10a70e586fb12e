//! Slide background fills.

use crate::common::RGBColor;

/// Background of a single slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideBackground {
    /// Inherit from the layout/master
    #[default]
    None,
    /// Solid color fill
    Solid { color: RGBColor },
}

impl SlideBackground {
    /// A solid color background.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use insight_deck::common::RGBColor;
    /// use insight_deck::ooxml::pptx::SlideBackground;
    ///
    /// let bg = SlideBackground::solid(RGBColor::new(0xFF, 0xFF, 0xFF));
    /// assert_eq!(bg.color(), Some(RGBColor::new(0xFF, 0xFF, 0xFF)));
    /// ```
    pub fn solid(color: RGBColor) -> Self {
        Self::Solid { color }
    }

    /// The fill color, if any.
    pub fn color(&self) -> Option<RGBColor> {
        match self {
            Self::None => None,
            Self::Solid { color } => Some(*color),
        }
    }

    /// Append the `<p:bg>` element. Writes nothing for [`SlideBackground::None`].
    pub(crate) fn write_xml(&self, xml: &mut String) {
        if let Self::Solid { color } = self {
            xml.push_str("<p:bg><p:bgPr><a:solidFill><a:srgbClr val=\"");
            xml.push_str(&color.to_hex());
            xml.push_str("\"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_xml() {
        let mut xml = String::new();
        SlideBackground::solid(RGBColor::new(0xA7, 0xD3, 0xF1)).write_xml(&mut xml);
        assert_eq!(
            xml,
            r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="A7D3F1"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#
        );
    }

    #[test]
    fn test_none_writes_nothing() {
        let mut xml = String::new();
        SlideBackground::None.write_xml(&mut xml);
        assert!(xml.is_empty());
    }
}
