//! Presentation template parts.
//!
//! The fixed parts every package needs besides its slides: theme, slide
//! master, the blank layout, presentation/view properties, table styles and
//! the document property parts. Only the theme and core properties vary.

use crate::common::RGBColor;
use crate::common::unit::Emu;
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Colors and typeface written into `ppt/theme/theme1.xml`.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeSpec {
    pub name: String,
    pub dark: RGBColor,
    pub light: RGBColor,
    pub accent1: RGBColor,
    pub accent2: RGBColor,
    /// Major and minor latin typeface
    pub font: String,
}

impl Default for ThemeSpec {
    fn default() -> Self {
        Self {
            name: "Office Theme".to_string(),
            dark: RGBColor::new(0x00, 0x00, 0x00),
            light: RGBColor::new(0xFF, 0xFF, 0xFF),
            accent1: RGBColor::new(0x44, 0x72, 0xC4),
            accent2: RGBColor::new(0xED, 0x7D, 0x31),
            font: "Calibri".to_string(),
        }
    }
}

/// `ppt/theme/theme1.xml` for the given theme.
pub fn theme_xml(theme: &ThemeSpec) -> Result<String> {
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECL);
    write!(
        xml,
        r#"<a:theme xmlns:a="{}" name="{}"><a:themeElements>"#,
        namespace::DML_MAIN,
        escape_xml(&theme.name)
    )?;

    write!(
        xml,
        concat!(
            r#"<a:clrScheme name="{name}">"#,
            r#"<a:dk1><a:srgbClr val="{dk1}"/></a:dk1>"#,
            r#"<a:lt1><a:srgbClr val="{lt1}"/></a:lt1>"#,
            r#"<a:dk2><a:srgbClr val="44546A"/></a:dk2>"#,
            r#"<a:lt2><a:srgbClr val="E7E6E6"/></a:lt2>"#,
            r#"<a:accent1><a:srgbClr val="{accent1}"/></a:accent1>"#,
            r#"<a:accent2><a:srgbClr val="{accent2}"/></a:accent2>"#,
            r#"<a:accent3><a:srgbClr val="A5A5A5"/></a:accent3>"#,
            r#"<a:accent4><a:srgbClr val="FFC000"/></a:accent4>"#,
            r#"<a:accent5><a:srgbClr val="5B9BD5"/></a:accent5>"#,
            r#"<a:accent6><a:srgbClr val="70AD47"/></a:accent6>"#,
            r#"<a:hlink><a:srgbClr val="0563C1"/></a:hlink>"#,
            r#"<a:folHlink><a:srgbClr val="954F72"/></a:folHlink>"#,
            r#"</a:clrScheme>"#
        ),
        name = escape_xml(&theme.name),
        dk1 = theme.dark.to_hex(),
        lt1 = theme.light.to_hex(),
        accent1 = theme.accent1.to_hex(),
        accent2 = theme.accent2.to_hex(),
    )?;

    let font = escape_xml(&theme.font);
    write!(
        xml,
        concat!(
            r#"<a:fontScheme name="{font}">"#,
            r#"<a:majorFont><a:latin typeface="{font}"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#,
            r#"<a:minorFont><a:latin typeface="{font}"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#,
            r#"</a:fontScheme>"#
        ),
        font = font
    )?;

    xml.push_str(FORMAT_SCHEME);
    xml.push_str("</a:themeElements><a:objectDefaults/><a:extraClrSchemeLst/></a:theme>");
    Ok(xml)
}

/// Three entries per style list, the schema minimum.
const FORMAT_SCHEME: &str = concat!(
    r#"<a:fmtScheme name="Office">"#,
    r#"<a:fillStyleLst>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"><a:tint val="50000"/></a:schemeClr></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"><a:shade val="80000"/></a:schemeClr></a:solidFill>"#,
    r#"</a:fillStyleLst>"#,
    r#"<a:lnStyleLst>"#,
    r#"<a:ln w="6350" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/><a:miter lim="800000"/></a:ln>"#,
    r#"<a:ln w="12700" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/><a:miter lim="800000"/></a:ln>"#,
    r#"<a:ln w="19050" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/><a:miter lim="800000"/></a:ln>"#,
    r#"</a:lnStyleLst>"#,
    r#"<a:effectStyleLst>"#,
    r#"<a:effectStyle><a:effectLst/></a:effectStyle>"#,
    r#"<a:effectStyle><a:effectLst/></a:effectStyle>"#,
    r#"<a:effectStyle><a:effectLst/></a:effectStyle>"#,
    r#"</a:effectStyleLst>"#,
    r#"<a:bgFillStyleLst>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"><a:tint val="95000"/></a:schemeClr></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"><a:shade val="90000"/></a:schemeClr></a:solidFill>"#,
    r#"</a:bgFillStyleLst>"#,
    r#"</a:fmtScheme>"#
);

const GROUP_HEADER: &str = concat!(
    r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#
);

/// Opening of every slide-like part's shape tree, through the group properties.
pub fn shape_tree_header() -> &'static str {
    GROUP_HEADER
}

/// `ppt/slideMasters/slideMaster1.xml`. The layout list points at `rId1`.
pub fn slide_master_xml() -> Result<String> {
    let mut xml = String::with_capacity(6144);
    xml.push_str(XML_DECL);
    write!(
        xml,
        r#"<p:sldMaster xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
        namespace::DML_MAIN,
        namespace::OFC_RELATIONSHIPS,
        namespace::PML_MAIN
    )?;
    xml.push_str(r#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg><p:spTree>"#);
    xml.push_str(GROUP_HEADER);
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str(concat!(
        r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
        r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" "#,
        r#"hlink="hlink" folHlink="folHlink"/>"#,
        r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>"#,
        r#"<p:txStyles>"#,
        r#"<p:titleStyle><a:lvl1pPr algn="l"><a:defRPr sz="4400" kern="1200">"#,
        r#"<a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mj-lt"/></a:defRPr></a:lvl1pPr></p:titleStyle>"#,
        r#"<p:bodyStyle><a:lvl1pPr marL="0" indent="0" algn="l"><a:buNone/><a:defRPr sz="1800" kern="1200">"#,
        r#"<a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mn-lt"/></a:defRPr></a:lvl1pPr>"#,
        r#"<a:lvl2pPr marL="457200" indent="0" algn="l"><a:buNone/><a:defRPr sz="1600" kern="1200">"#,
        r#"<a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mn-lt"/></a:defRPr></a:lvl2pPr></p:bodyStyle>"#,
        r#"<p:otherStyle>"#,
    ));
    write_level_styles(&mut xml)?;
    xml.push_str("</p:otherStyle></p:txStyles></p:sldMaster>");
    Ok(xml)
}

/// Left margin added per outline level: half an inch.
pub const LEVEL_INDENT: Emu = 457_200;

/// `<a:defPPr>` plus `<a:lvl1pPr>` through `<a:lvl9pPr>`, each level
/// indented [`LEVEL_INDENT`] further than the one before.
///
/// Shared by the presentation's `defaultTextStyle` and the master's
/// `otherStyle`, which text boxes inherit from.
pub fn write_level_styles(xml: &mut String) -> Result<()> {
    xml.push_str(r#"<a:defPPr><a:defRPr lang="en-US"/></a:defPPr>"#);
    for level in 1..=9 {
        write!(
            xml,
            concat!(
                r#"<a:lvl{n}pPr marL="{mar}" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1">"#,
                r#"<a:defRPr sz="1800" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#,
                r#"<a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr>"#,
                r#"</a:lvl{n}pPr>"#
            ),
            n = level,
            mar = (level - 1) * LEVEL_INDENT
        )?;
    }
    Ok(())
}

/// `ppt/slideLayouts/slideLayout1.xml`: a blank layout with no placeholders.
pub fn blank_layout_xml() -> Result<String> {
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECL);
    write!(
        xml,
        r#"<p:sldLayout xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" type="blank" preserve="1">"#,
        namespace::DML_MAIN,
        namespace::OFC_RELATIONSHIPS,
        namespace::PML_MAIN
    )?;
    xml.push_str(r#"<p:cSld name="Blank"><p:spTree>"#);
    xml.push_str(GROUP_HEADER);
    xml.push_str("</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>");
    Ok(xml)
}

/// `ppt/presProps.xml`
pub fn pres_props_xml() -> String {
    format!(
        r#"{}<p:presentationPr xmlns:a="{}" xmlns:r="{}" xmlns:p="{}"/>"#,
        XML_DECL,
        namespace::DML_MAIN,
        namespace::OFC_RELATIONSHIPS,
        namespace::PML_MAIN
    )
}

/// `ppt/viewProps.xml`
pub fn view_props_xml() -> String {
    format!(
        concat!(
            r#"{}<p:viewPr xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            r#"<p:normalViewPr><p:restoredLeft sz="15620"/><p:restoredTop sz="94660"/></p:normalViewPr>"#,
            r#"<p:gridSpacing cx="76200" cy="76200"/></p:viewPr>"#
        ),
        XML_DECL,
        namespace::DML_MAIN,
        namespace::OFC_RELATIONSHIPS,
        namespace::PML_MAIN
    )
}

/// `ppt/tableStyles.xml`, defaulting to "Medium Style 2 - Accent 1".
pub fn table_styles_xml() -> String {
    format!(
        r#"{}<a:tblStyleLst xmlns:a="{}" def="{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}"/>"#,
        XML_DECL,
        namespace::DML_MAIN
    )
}

/// `docProps/core.xml`. No created/modified dates, so output is repeatable.
pub fn core_props_xml(title: &str) -> String {
    format!(
        concat!(
            r#"{}<cp:coreProperties "#,
            r#"xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
            r#"xmlns:dc="http://purl.org/dc/elements/1.1/" "#,
            r#"xmlns:dcterms="http://purl.org/dc/terms/" "#,
            r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" "#,
            r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
            r#"<dc:title>{}</dc:title><cp:revision>1</cp:revision></cp:coreProperties>"#
        ),
        XML_DECL,
        escape_xml(title)
    )
}

/// `docProps/app.xml`
pub fn app_props_xml(slide_count: usize) -> String {
    format!(
        concat!(
            r#"{}<Properties "#,
            r#"xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
            r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
            r#"<TotalTime>0</TotalTime><Application>{}</Application>"#,
            r#"<PresentationFormat>Custom</PresentationFormat>"#,
            r#"<Slides>{}</Slides><Notes>0</Notes><HiddenSlides>0</HiddenSlides>"#,
            r#"<ScaleCrop>false</ScaleCrop><LinksUpToDate>false</LinksUpToDate>"#,
            r#"<SharedDoc>false</SharedDoc><HyperlinksChanged>false</HyperlinksChanged>"#,
            r#"<AppVersion>16.0000</AppVersion></Properties>"#
        ),
        XML_DECL,
        env!("CARGO_PKG_NAME"),
        slide_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_carries_accents_and_font() {
        let theme = ThemeSpec {
            accent1: RGBColor::new(0xA7, 0xD3, 0xF1),
            accent2: RGBColor::new(0xBF, 0xE7, 0xC6),
            font: "Segoe UI".to_string(),
            ..ThemeSpec::default()
        };
        let xml = theme_xml(&theme).unwrap();

        assert!(xml.contains(r#"<a:accent1><a:srgbClr val="A7D3F1"/></a:accent1>"#));
        assert!(xml.contains(r#"<a:accent2><a:srgbClr val="BFE7C6"/></a:accent2>"#));
        assert!(xml.contains(r#"<a:majorFont><a:latin typeface="Segoe UI"/>"#));
        assert!(xml.contains(r#"<a:minorFont><a:latin typeface="Segoe UI"/>"#));
        assert_eq!(xml.matches("<a:effectStyle>").count(), 3);
    }

    #[test]
    fn test_blank_layout_has_no_placeholders() {
        let xml = blank_layout_xml().unwrap();
        assert!(xml.contains(r#"type="blank""#));
        assert!(!xml.contains("<p:ph"));
    }

    #[test]
    fn test_level_styles_indent_each_level() {
        let mut xml = String::new();
        write_level_styles(&mut xml).unwrap();

        assert!(xml.contains(r#"<a:lvl1pPr marL="0" "#));
        assert!(xml.contains(r#"<a:lvl2pPr marL="457200" "#));
        assert!(xml.contains(r#"<a:lvl9pPr marL="3657600" "#));
        assert!(!xml.contains("<a:lvl10pPr"));
    }

    #[test]
    fn test_master_other_style_covers_nested_levels() {
        let xml = slide_master_xml().unwrap();
        let other = &xml[xml.find("<p:otherStyle>").unwrap()..];

        assert!(other.contains(r#"<a:lvl2pPr marL="457200" "#));
        assert!(other.ends_with("</p:otherStyle></p:txStyles></p:sldMaster>"));
    }

    #[test]
    fn test_core_props_escape_title_and_omit_dates() {
        let xml = core_props_xml("A & B");
        assert!(xml.contains("<dc:title>A &amp; B</dc:title>"));
        assert!(!xml.contains("dcterms:created"));
        assert!(!xml.contains("dcterms:modified"));
    }

    #[test]
    fn test_table_styles_default_guid() {
        assert!(table_styles_xml().contains(r#"def="{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}""#));
    }
}
