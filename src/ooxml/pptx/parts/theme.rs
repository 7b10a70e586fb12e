/// Theme parts for PowerPoint presentations.
use crate::common::RGBColor;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::part::Part;
use quick_xml::Reader;
use quick_xml::events::Event;

/// Color information from a theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColor {
    /// Color name (e.g., "accent1", "dk1", "lt1")
    pub name: String,
    /// RGB value, when the slot uses `a:srgbClr`
    pub rgb: Option<RGBColor>,
}

/// Theme information extracted from a theme part.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    /// Theme name
    pub name: String,
    /// Major (heading) latin typeface
    pub major_font: Option<String>,
    /// Minor (body) latin typeface
    pub minor_font: Option<String>,
    /// Color scheme colors
    pub colors: Vec<ThemeColor>,
}

impl Theme {
    /// Look up a color scheme slot by name.
    pub fn color(&self, name: &str) -> Option<RGBColor> {
        self.colors
            .iter()
            .find(|c| c.name == name)
            .and_then(|c| c.rgb)
    }
}

const COLOR_SLOTS: [&[u8]; 12] = [
    b"dk1", b"lt1", b"dk2", b"lt2", b"accent1", b"accent2", b"accent3", b"accent4",
    b"accent5", b"accent6", b"hlink", b"folHlink",
];

/// Theme part - defines the visual styling of a presentation.
///
/// Corresponds to `/ppt/theme/themeN.xml` in the package.
pub struct ThemePart<'a> {
    /// The underlying OPC part
    part: &'a dyn Part,
}

impl<'a> ThemePart<'a> {
    /// Create a ThemePart from an OPC Part.
    pub fn from_part(part: &'a dyn Part) -> Result<Self> {
        Ok(Self { part })
    }

    /// Parse and return the theme information.
    pub fn theme(&self) -> Result<Theme> {
        let mut reader = Reader::from_reader(self.part.blob());
        reader.config_mut().trim_text(true);

        let mut theme = Theme::default();
        let mut in_clr_scheme = false;
        let mut current_slot: Option<String> = None;
        let mut in_major_font = false;
        let mut in_minor_font = false;
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                    let local = e.local_name();
                    let local = local.as_ref();
                    match local {
                        b"theme" => {
                            for attr in e.attributes().flatten() {
                                if attr.key.as_ref() == b"name" {
                                    theme.name = attr
                                        .unescape_value()
                                        .map_err(|e| OoxmlError::Xml(e.to_string()))?
                                        .into_owned();
                                }
                            }
                        },
                        b"clrScheme" => in_clr_scheme = true,
                        slot if in_clr_scheme && COLOR_SLOTS.contains(&slot) => {
                            let name = String::from_utf8_lossy(slot).into_owned();
                            theme.colors.push(ThemeColor {
                                name: name.clone(),
                                rgb: None,
                            });
                            current_slot = Some(name);
                        },
                        b"srgbClr" if current_slot.is_some() => {
                            for attr in e.attributes().flatten() {
                                if attr.key.as_ref() == b"val" {
                                    let val = std::str::from_utf8(&attr.value)
                                        .map_err(|e| OoxmlError::Xml(e.to_string()))?;
                                    if let Some(color) = theme.colors.last_mut() {
                                        color.rgb = RGBColor::from_hex(val);
                                    }
                                }
                            }
                        },
                        b"majorFont" => in_major_font = true,
                        b"minorFont" => in_minor_font = true,
                        b"latin" if in_major_font || in_minor_font => {
                            for attr in e.attributes().flatten() {
                                if attr.key.as_ref() == b"typeface" {
                                    let face = attr
                                        .unescape_value()
                                        .map_err(|e| OoxmlError::Xml(e.to_string()))?
                                        .into_owned();
                                    if in_major_font {
                                        theme.major_font = Some(face);
                                    } else {
                                        theme.minor_font = Some(face);
                                    }
                                }
                            }
                        },
                        _ => {},
                    }
                },
                Ok(Event::End(e)) => match e.local_name().as_ref() {
                    b"clrScheme" => in_clr_scheme = false,
                    b"majorFont" => in_major_font = false,
                    b"minorFont" => in_minor_font = false,
                    slot if COLOR_SLOTS.contains(&slot) => current_slot = None,
                    _ => {},
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::{PackURI, XmlPart};
    use crate::ooxml::pptx::template::{ThemeSpec, theme_xml};

    #[test]
    fn test_reads_generated_theme() {
        let spec = ThemeSpec {
            name: "Insights".to_string(),
            accent1: RGBColor::new(0xA7, 0xD3, 0xF1),
            accent2: RGBColor::new(0xBF, 0xE7, 0xC6),
            font: "Segoe UI".to_string(),
            ..ThemeSpec::default()
        };
        let part = XmlPart::from_xml(
            PackURI::new("/ppt/theme/theme1.xml").unwrap(),
            "application/xml",
            theme_xml(&spec).unwrap(),
        );
        let theme = ThemePart::from_part(&part).unwrap().theme().unwrap();

        assert_eq!(theme.name, "Insights");
        assert_eq!(theme.colors.len(), 12);
        assert_eq!(theme.color("accent1"), Some(RGBColor::new(0xA7, 0xD3, 0xF1)));
        assert_eq!(theme.color("accent2"), Some(RGBColor::new(0xBF, 0xE7, 0xC6)));
        assert_eq!(theme.major_font.as_deref(), Some("Segoe UI"));
        assert_eq!(theme.minor_font.as_deref(), Some("Segoe UI"));
    }
}
