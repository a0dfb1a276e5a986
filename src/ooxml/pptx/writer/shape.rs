/// Shape types and implementation for PPTX presentations.
use crate::common::xml::escape_xml;
use crate::common::{Emu, RGBColor};
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

pub use super::super::format::{Alignment, ImageFormat, TextFormat};
use super::text::{Paragraph, TextBody};

/// Position and size of a shape, in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: Emu,
    pub y: Emu,
    pub width: Emu,
    pub height: Emu,
}

impl Bounds {
    pub const fn new(x: Emu, y: Emu, width: Emu, height: Emu) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    fn write_xfrm(&self, xml: &mut String, flip_h: bool, flip_v: bool) -> Result<()> {
        xml.push_str("<a:xfrm");
        if flip_h {
            xml.push_str(r#" flipH="1""#);
        }
        if flip_v {
            xml.push_str(r#" flipV="1""#);
        }
        xml.push('>');
        write!(xml, r#"<a:off x="{}" y="{}"/>"#, self.x, self.y)?;
        write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, self.width, self.height)?;
        xml.push_str("</a:xfrm>");
        Ok(())
    }
}

/// Preset geometry of an auto shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    Rectangle,
    Ellipse,
}

impl Geometry {
    fn prst(&self) -> &'static str {
        match self {
            Self::Rectangle => "rect",
            Self::Ellipse => "ellipse",
        }
    }

    fn base_name(&self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::Ellipse => "Oval",
        }
    }
}

/// Outline of a shape or connector.
///
/// Unset properties fall back to the theme line style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineStyle {
    pub color: Option<RGBColor>,
    /// Width in EMUs
    pub width: Option<Emu>,
    /// Hide the outline entirely
    pub hidden: bool,
}

impl LineStyle {
    fn to_xml(&self, xml: &mut String) -> Result<()> {
        if self.hidden {
            xml.push_str("<a:ln><a:noFill/></a:ln>");
            return Ok(());
        }
        if self.color.is_none() && self.width.is_none() {
            return Ok(());
        }

        xml.push_str("<a:ln");
        if let Some(width) = self.width {
            write!(xml, r#" w="{}""#, width)?;
        }
        xml.push('>');
        if let Some(color) = self.color {
            write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                color.to_hex()
            )?;
        }
        xml.push_str("</a:ln>");
        Ok(())
    }
}

/// Which layout placeholder a shape inherits from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    Title,
    Body,
}

/// A shape on a slide.
#[derive(Debug, Clone)]
pub struct MutableShape {
    /// Shape ID
    pub(crate) shape_id: u32,
    /// Shape type
    pub(crate) shape_type: ShapeType,
}

#[derive(Debug, Clone)]
pub(crate) enum ShapeType {
    TextBox {
        bounds: Bounds,
        text: TextBody,
    },
    AutoShape {
        geometry: Geometry,
        bounds: Bounds,
        fill: Option<RGBColor>,
        line: LineStyle,
        text: TextBody,
    },
    Connector {
        begin: (Emu, Emu),
        end: (Emu, Emu),
        line: LineStyle,
    },
    Picture {
        data: Vec<u8>,
        format: ImageFormat,
        bounds: Bounds,
        description: String,
    },
    Placeholder {
        kind: PlaceholderKind,
        text: TextBody,
    },
}

impl MutableShape {
    /// Create a new text box shape.
    pub(crate) fn new_text_box(shape_id: u32, bounds: Bounds) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::TextBox {
                bounds,
                text: TextBody::new(),
            },
        }
    }

    /// Create a new auto shape (rectangle or oval).
    pub(crate) fn new_auto_shape(shape_id: u32, geometry: Geometry, bounds: Bounds) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::AutoShape {
                geometry,
                bounds,
                fill: None,
                line: LineStyle::default(),
                text: TextBody::new(),
            },
        }
    }

    /// Create a straight connector between two points.
    pub(crate) fn new_connector(shape_id: u32, begin: (Emu, Emu), end: (Emu, Emu)) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::Connector {
                begin,
                end,
                line: LineStyle::default(),
            },
        }
    }

    /// Create a new picture shape.
    pub(crate) fn new_picture(
        shape_id: u32,
        data: Vec<u8>,
        format: ImageFormat,
        bounds: Bounds,
        description: String,
    ) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::Picture {
                data,
                format,
                bounds,
                description,
            },
        }
    }

    /// Create a layout placeholder.
    pub(crate) fn new_placeholder(shape_id: u32, kind: PlaceholderKind) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::Placeholder {
                kind,
                text: TextBody::new(),
            },
        }
    }

    /// Get the shape ID.
    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    /// Whether this shape is an embedded picture.
    pub fn is_picture(&self) -> bool {
        matches!(self.shape_type, ShapeType::Picture { .. })
    }

    /// The text body of shapes that carry text.
    pub fn text_body(&self) -> Option<&TextBody> {
        match &self.shape_type {
            ShapeType::TextBox { text, .. }
            | ShapeType::AutoShape { text, .. }
            | ShapeType::Placeholder { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Mutable text body of shapes that carry text.
    pub fn text_body_mut(&mut self) -> Option<&mut TextBody> {
        match &mut self.shape_type {
            ShapeType::TextBox { text, .. }
            | ShapeType::AutoShape { text, .. }
            | ShapeType::Placeholder { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Shape text, or `None` for connectors and pictures.
    pub fn text(&self) -> Option<String> {
        self.text_body().map(TextBody::text)
    }

    /// Builder method: replace the text, one paragraph per line.
    pub fn set_text(&mut self, text: &str) -> &mut Self {
        if let Some(body) = self.text_body_mut() {
            body.set_text(text);
        }
        self
    }

    /// Get a paragraph of the text body for individual formatting.
    pub fn paragraph(&mut self, index: usize) -> Option<&mut Paragraph> {
        self.text_body_mut()
            .and_then(|body| body.paragraph_mut(index))
    }

    /// Append a paragraph to the text body.
    pub fn add_paragraph(&mut self, text: &str) -> Option<&mut Paragraph> {
        self.text_body_mut().map(|body| body.add_paragraph(text))
    }

    fn for_each_paragraph(&mut self, f: impl Fn(&mut Paragraph)) -> &mut Self {
        if let Some(body) = self.text_body_mut() {
            body.paragraphs_mut().for_each(f);
        }
        self
    }

    /// Builder method: set font size on every paragraph.
    pub fn font_size(&mut self, size: f64) -> &mut Self {
        self.for_each_paragraph(|p| {
            p.font_size(size);
        })
    }

    /// Builder method: set bold on every paragraph.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.for_each_paragraph(|p| {
            p.bold(bold);
        })
    }

    /// Builder method: set text color on every paragraph.
    pub fn color(&mut self, color: RGBColor) -> &mut Self {
        self.for_each_paragraph(|p| {
            p.color(color);
        })
    }

    /// Builder method: set alignment on every paragraph.
    pub fn align(&mut self, alignment: Alignment) -> &mut Self {
        self.for_each_paragraph(|p| {
            p.align(alignment);
        })
    }

    /// Builder method: solid fill (auto shapes only).
    pub fn fill(&mut self, color: RGBColor) -> &mut Self {
        if let ShapeType::AutoShape {
            fill: ref mut f, ..
        } = self.shape_type
        {
            *f = Some(color);
        }
        self
    }

    fn line_mut(&mut self) -> Option<&mut LineStyle> {
        match &mut self.shape_type {
            ShapeType::AutoShape { line, .. } | ShapeType::Connector { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Builder method: outline color.
    pub fn line_color(&mut self, color: RGBColor) -> &mut Self {
        if let Some(line) = self.line_mut() {
            line.color = Some(color);
            line.hidden = false;
        }
        self
    }

    /// Builder method: outline width in EMUs.
    pub fn line_width(&mut self, width: Emu) -> &mut Self {
        if let Some(line) = self.line_mut() {
            line.width = Some(width);
            line.hidden = false;
        }
        self
    }

    /// Builder method: remove the outline.
    pub fn no_line(&mut self) -> &mut Self {
        if let Some(line) = self.line_mut() {
            *line = LineStyle {
                hidden: true,
                ..LineStyle::default()
            };
        }
        self
    }

    /// Get image data if this shape is a picture.
    pub(crate) fn get_image_data(&self) -> Option<(&[u8], ImageFormat)> {
        match &self.shape_type {
            ShapeType::Picture { data, format, .. } => Some((data.as_slice(), *format)),
            _ => None,
        }
    }

    /// Generate XML for this shape.
    ///
    /// Pictures need the relationship ID of their media part.
    pub(crate) fn to_xml(&self, xml: &mut String, rel_id: Option<&str>) -> Result<()> {
        match &self.shape_type {
            ShapeType::TextBox { bounds, text } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="TextBox {}"/>"#,
                    self.shape_id,
                    self.shape_id - 1
                )?;
                xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                bounds.write_xfrm(xml, false, false)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("<a:noFill/>");
                xml.push_str("</p:spPr>");

                xml.push_str("<p:txBody>");
                xml.push_str(r#"<a:bodyPr wrap="none"><a:spAutoFit/></a:bodyPr>"#);
                xml.push_str("<a:lstStyle/>");
                text.write_paragraphs(xml)?;
                xml.push_str("</p:txBody>");
                xml.push_str("</p:sp>");
            },
            ShapeType::AutoShape {
                geometry,
                bounds,
                fill,
                line,
                text,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="{} {}"/>"#,
                    self.shape_id,
                    geometry.base_name(),
                    self.shape_id - 1
                )?;
                xml.push_str("<p:cNvSpPr/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                bounds.write_xfrm(xml, false, false)?;
                write!(
                    xml,
                    r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#,
                    geometry.prst()
                )?;
                if let Some(color) = fill {
                    write!(
                        xml,
                        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                        color.to_hex()
                    )?;
                }
                line.to_xml(xml)?;
                xml.push_str("</p:spPr>");

                xml.push_str("<p:style>");
                xml.push_str(r#"<a:lnRef idx="1"><a:schemeClr val="accent1"/></a:lnRef>"#);
                xml.push_str(r#"<a:fillRef idx="3"><a:schemeClr val="accent1"/></a:fillRef>"#);
                xml.push_str(r#"<a:effectRef idx="2"><a:schemeClr val="accent1"/></a:effectRef>"#);
                xml.push_str(r#"<a:fontRef idx="minor"><a:schemeClr val="lt1"/></a:fontRef>"#);
                xml.push_str("</p:style>");

                xml.push_str("<p:txBody>");
                xml.push_str(r#"<a:bodyPr rtlCol="0" anchor="ctr"/>"#);
                xml.push_str("<a:lstStyle/>");
                text.write_paragraphs(xml)?;
                xml.push_str("</p:txBody>");
                xml.push_str("</p:sp>");
            },
            ShapeType::Connector { begin, end, line } => {
                let bounds = Bounds::new(
                    begin.0.min(end.0),
                    begin.1.min(end.1),
                    (end.0 - begin.0).abs(),
                    (end.1 - begin.1).abs(),
                );

                xml.push_str("<p:cxnSp>");
                xml.push_str("<p:nvCxnSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Connector {}"/>"#,
                    self.shape_id,
                    self.shape_id - 1
                )?;
                xml.push_str("<p:cNvCxnSpPr/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvCxnSpPr>");

                xml.push_str("<p:spPr>");
                bounds.write_xfrm(xml, end.0 < begin.0, end.1 < begin.1)?;
                xml.push_str(r#"<a:prstGeom prst="line"><a:avLst/></a:prstGeom>"#);
                line.to_xml(xml)?;
                xml.push_str("</p:spPr>");

                xml.push_str("<p:style>");
                xml.push_str(r#"<a:lnRef idx="1"><a:schemeClr val="accent1"/></a:lnRef>"#);
                xml.push_str(r#"<a:fillRef idx="0"><a:schemeClr val="accent1"/></a:fillRef>"#);
                xml.push_str(r#"<a:effectRef idx="0"><a:schemeClr val="accent1"/></a:effectRef>"#);
                xml.push_str(r#"<a:fontRef idx="minor"><a:schemeClr val="tx1"/></a:fontRef>"#);
                xml.push_str("</p:style>");
                xml.push_str("</p:cxnSp>");
            },
            ShapeType::Picture {
                bounds,
                description,
                ..
            } => {
                xml.push_str("<p:pic>");
                xml.push_str("<p:nvPicPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Picture {}" descr="{}"/>"#,
                    self.shape_id,
                    self.shape_id - 1,
                    escape_xml(description)
                )?;
                xml.push_str(r#"<p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvPicPr>");

                xml.push_str("<p:blipFill>");
                let rid = rel_id.unwrap_or("rIdImagePlaceholder");
                write!(xml, r#"<a:blip r:embed="{}"/>"#, rid)?;
                xml.push_str("<a:stretch><a:fillRect/></a:stretch>");
                xml.push_str("</p:blipFill>");

                xml.push_str("<p:spPr>");
                bounds.write_xfrm(xml, false, false)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("</p:spPr>");
                xml.push_str("</p:pic>");
            },
            ShapeType::Placeholder { kind, text } => {
                let (name, ph) = match kind {
                    PlaceholderKind::Title => ("Title", r#"<p:ph type="title"/>"#),
                    PlaceholderKind::Body => ("Content Placeholder", r#"<p:ph idx="1"/>"#),
                };

                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="{} {}"/>"#,
                    self.shape_id,
                    name,
                    self.shape_id - 1
                )?;
                xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
                write!(xml, "<p:nvPr>{}</p:nvPr>", ph)?;
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr/>");

                xml.push_str("<p:txBody>");
                xml.push_str("<a:bodyPr/>");
                xml.push_str("<a:lstStyle/>");
                text.write_paragraphs(xml)?;
                xml.push_str("</p:txBody>");
                xml.push_str("</p:sp>");
            },
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: RGBColor = RGBColor::new(18, 65, 145);

    #[test]
    fn test_auto_shape_xml() {
        let mut shape =
            MutableShape::new_auto_shape(2, Geometry::Rectangle, Bounds::new(0, 0, 100, 50));
        shape.fill(BLUE).no_line().set_text("NOKIA LOGO").font_size(14.0);

        let mut xml = String::new();
        shape.to_xml(&mut xml, None).unwrap();

        assert!(xml.contains(r#"<p:cNvPr id="2" name="Rectangle 1"/>"#));
        assert!(xml.contains(
            r#"<a:solidFill><a:srgbClr val="124191"/></a:solidFill><a:ln><a:noFill/></a:ln>"#
        ));
        assert!(xml.contains("<a:t>NOKIA LOGO</a:t>"));
        assert_eq!(shape.text().as_deref(), Some("NOKIA LOGO"));
    }

    #[test]
    fn test_text_box_does_not_wrap() {
        let mut shape = MutableShape::new_text_box(7, Bounds::new(0, 0, 914400, 457200));
        shape.set_text("2007: iPhone launch").font_size(14.0);

        let mut xml = String::new();
        shape.to_xml(&mut xml, None).unwrap();

        assert!(xml.contains(r#"<p:cNvPr id="7" name="TextBox 6"/><p:cNvSpPr txBox="1"/>"#));
        assert!(xml.contains(
            r#"<p:txBody><a:bodyPr wrap="none"><a:spAutoFit/></a:bodyPr><a:lstStyle/><a:p>"#
        ));
        assert!(!xml.contains("square"));
    }

    #[test]
    fn test_line_style_after_no_line() {
        let mut shape =
            MutableShape::new_auto_shape(3, Geometry::Ellipse, Bounds::new(0, 0, 10, 10));
        shape.no_line().line_color(BLUE).line_width(38100);

        let mut xml = String::new();
        shape.to_xml(&mut xml, None).unwrap();
        assert!(xml.contains(r#"<a:prstGeom prst="ellipse">"#));
        assert!(xml.contains(
            r#"<a:ln w="38100"><a:solidFill><a:srgbClr val="124191"/></a:solidFill></a:ln>"#
        ));
    }

    #[test]
    fn test_connector_flips() {
        let mut shape = MutableShape::new_connector(4, (200, 100), (100, 300));
        shape.line_color(BLUE);

        let mut xml = String::new();
        shape.to_xml(&mut xml, None).unwrap();
        assert!(xml.contains(r#"<a:xfrm flipH="1"><a:off x="100" y="100"/><a:ext cx="100" cy="200"/>"#));
        assert!(xml.starts_with("<p:cxnSp>"));
        assert_eq!(shape.text(), None);
    }

    #[test]
    fn test_picture_uses_rel_id() {
        let shape = MutableShape::new_picture(
            5,
            vec![0x89, b'P', b'N', b'G'],
            ImageFormat::Png,
            Bounds::new(1, 2, 3, 4),
            "chart".to_string(),
        );
        assert!(shape.is_picture());

        let mut xml = String::new();
        shape.to_xml(&mut xml, Some("rId3")).unwrap();
        assert!(xml.contains(r#"<a:blip r:embed="rId3"/>"#));
        assert!(xml.contains(r#"descr="chart""#));
    }

    #[test]
    fn test_text_format_ignored_on_picture() {
        let mut shape = MutableShape::new_picture(
            2,
            Vec::new(),
            ImageFormat::Png,
            Bounds::new(0, 0, 1, 1),
            String::new(),
        );
        shape.set_text("ignored").font_size(12.0).fill(BLUE);
        assert!(shape.text_body().is_none());
        assert!(shape.paragraph(0).is_none());
    }

    #[test]
    fn test_placeholder_xml() {
        let mut shape = MutableShape::new_placeholder(2, PlaceholderKind::Title);
        shape.set_text("Agenda").font_size(36.0);

        let mut xml = String::new();
        shape.to_xml(&mut xml, None).unwrap();
        assert!(xml.contains(r#"<p:nvPr><p:ph type="title"/></p:nvPr>"#));
        assert!(xml.contains(r#"sz="3600""#));
    }
}
