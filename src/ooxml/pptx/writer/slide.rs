/// Slide types and implementation for PPTX presentations.
use crate::common::Emu;
use crate::ooxml::error::{OoxmlError, Result};
use std::path::Path;

use super::super::format::ImageFormat;
use super::relmap::RelationshipMapper;
use super::shape::{Bounds, Geometry, MutableShape, PlaceholderKind, ShapeType};

/// Slide layouts provided by the built-in slide master.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideLayout {
    /// Title placeholder above a bulleted body placeholder
    TitleAndContent,
    /// No placeholders
    Blank,
}

impl SlideLayout {
    /// All layouts, in slide master order.
    pub const ALL: [SlideLayout; 2] = [SlideLayout::TitleAndContent, SlideLayout::Blank];

    /// 1-based number of the layout part (`slideLayoutN.xml`).
    pub fn part_number(&self) -> usize {
        match self {
            Self::TitleAndContent => 1,
            Self::Blank => 2,
        }
    }

    /// Placeholders a new slide of this layout starts with.
    fn placeholders(&self) -> &'static [PlaceholderKind] {
        match self {
            Self::TitleAndContent => &[PlaceholderKind::Title, PlaceholderKind::Body],
            Self::Blank => &[],
        }
    }
}

/// A mutable slide in a presentation.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique identifier)
    pub(crate) slide_id: u32,
    /// Layout the slide is based on
    pub(crate) layout: SlideLayout,
    /// Shapes on the slide, in z-order
    pub(crate) shapes: Vec<MutableShape>,
}

impl MutableSlide {
    /// Create a new slide, populated with the layout's placeholders.
    pub(crate) fn new(slide_id: u32, layout: SlideLayout) -> Self {
        let mut slide = Self {
            slide_id,
            layout,
            shapes: Vec::new(),
        };
        for &kind in layout.placeholders() {
            let shape_id = slide.next_shape_id();
            slide
                .shapes
                .push(MutableShape::new_placeholder(shape_id, kind));
        }
        slide
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Get the slide layout.
    pub fn layout(&self) -> SlideLayout {
        self.layout
    }

    // IDs: 1=group, 2+=shapes
    fn next_shape_id(&self) -> u32 {
        (self.shapes.len() + 2) as u32
    }

    fn push(&mut self, shape: MutableShape) -> &mut MutableShape {
        self.shapes.push(shape);
        let last = self.shapes.len() - 1;
        &mut self.shapes[last]
    }

    /// Add an empty text box to the slide.
    pub fn add_text_box(&mut self, x: Emu, y: Emu, width: Emu, height: Emu) -> &mut MutableShape {
        let shape = MutableShape::new_text_box(self.next_shape_id(), Bounds::new(x, y, width, height));
        self.push(shape)
    }

    /// Add an auto shape (rectangle or oval).
    pub fn add_shape(
        &mut self,
        geometry: Geometry,
        x: Emu,
        y: Emu,
        width: Emu,
        height: Emu,
    ) -> &mut MutableShape {
        let shape = MutableShape::new_auto_shape(
            self.next_shape_id(),
            geometry,
            Bounds::new(x, y, width, height),
        );
        self.push(shape)
    }

    /// Add a straight connector from (x1, y1) to (x2, y2).
    pub fn add_connector(&mut self, x1: Emu, y1: Emu, x2: Emu, y2: Emu) -> &mut MutableShape {
        let shape = MutableShape::new_connector(self.next_shape_id(), (x1, y1), (x2, y2));
        self.push(shape)
    }

    /// Add a picture to the slide from a file.
    pub fn add_picture<P: AsRef<Path>>(
        &mut self,
        image_path: P,
        x: Emu,
        y: Emu,
        width: Emu,
        height: Emu,
    ) -> Result<&mut MutableShape> {
        let image_path = image_path.as_ref();
        let data = std::fs::read(image_path)?;
        let description = image_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        self.add_picture_from_bytes(data, x, y, width, height, description)
    }

    /// Add a picture to the slide from bytes.
    pub fn add_picture_from_bytes(
        &mut self,
        data: Vec<u8>,
        x: Emu,
        y: Emu,
        width: Emu,
        height: Emu,
        description: Option<String>,
    ) -> Result<&mut MutableShape> {
        let format = ImageFormat::detect_from_bytes(&data)
            .ok_or_else(|| OoxmlError::InvalidFormat("Unknown image format".to_string()))?;

        let desc = description.unwrap_or_else(|| "Picture".to_string());
        let shape = MutableShape::new_picture(
            self.next_shape_id(),
            data,
            format,
            Bounds::new(x, y, width, height),
            desc,
        );
        Ok(self.push(shape))
    }

    /// Get a layout placeholder on this slide.
    pub fn placeholder_mut(&mut self, kind: PlaceholderKind) -> Option<&mut MutableShape> {
        self.shapes.iter_mut().find(|shape| {
            matches!(shape.shape_type, ShapeType::Placeholder { kind: k, .. } if k == kind)
        })
    }

    /// Shapes on the slide, in z-order.
    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    /// Text of every text-bearing shape, in z-order.
    pub fn texts(&self) -> Vec<String> {
        self.shapes.iter().filter_map(MutableShape::text).collect()
    }

    /// Collect all images from this slide.
    pub(crate) fn collect_images(&self) -> Vec<(&[u8], ImageFormat)> {
        self.shapes
            .iter()
            .filter_map(MutableShape::get_image_data)
            .collect()
    }

    /// Generate slide XML content with relationship IDs from the mapper.
    pub(crate) fn to_xml_with_rels(
        &self,
        slide_index: usize,
        rel_mapper: &RelationshipMapper,
    ) -> Result<String> {
        let mut xml = String::with_capacity(4096 + self.shapes.len() * 1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
        );
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
        );
        xml.push_str(r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#);

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");

        // Group shape properties (required)
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        let mut image_counter = 0;
        for shape in &self.shapes {
            let rel_id = if shape.is_picture() {
                let rid = rel_mapper.get_image_id(slide_index, image_counter);
                image_counter += 1;
                if rid.is_none() {
                    return Err(OoxmlError::Xml(format!(
                        "no image relationship for picture {} on slide {}",
                        image_counter,
                        slide_index + 1
                    )));
                }
                rid
            } else {
                None
            };

            shape.to_xml(&mut xml, rel_id)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::inches;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_title_and_content_has_placeholders() {
        let mut slide = MutableSlide::new(256, SlideLayout::TitleAndContent);
        assert_eq!(slide.shapes().len(), 2);

        slide
            .placeholder_mut(PlaceholderKind::Title)
            .unwrap()
            .set_text("Agenda");
        slide
            .placeholder_mut(PlaceholderKind::Body)
            .unwrap()
            .set_text("First");
        assert_eq!(slide.texts(), vec!["Agenda".to_string(), "First".to_string()]);

        let blank = MutableSlide::new(257, SlideLayout::Blank);
        assert_eq!(blank.shapes().len(), 0);
    }

    #[test]
    fn test_shape_ids_are_sequential() {
        let mut slide = MutableSlide::new(256, SlideLayout::Blank);
        let id1 = slide.add_text_box(0, 0, 10, 10).shape_id();
        let id2 = slide
            .add_shape(Geometry::Ellipse, 0, 0, 10, 10)
            .shape_id();
        let id3 = slide.add_connector(0, 0, 10, 0).shape_id();
        assert_eq!((id1, id2, id3), (2, 3, 4));
    }

    #[test]
    fn test_add_picture_rejects_unknown_format() {
        let mut slide = MutableSlide::new(256, SlideLayout::Blank);
        let result = slide.add_picture_from_bytes(b"not an image".to_vec(), 0, 0, 1, 1, None);
        assert!(matches!(result, Err(OoxmlError::InvalidFormat(_))));
        assert_eq!(slide.shapes().len(), 0);
    }

    #[test]
    fn test_xml_uses_mapped_image_ids() {
        let mut slide = MutableSlide::new(256, SlideLayout::Blank);
        slide
            .add_picture_from_bytes(
                PNG_MAGIC.to_vec(),
                inches(1.0),
                inches(1.5),
                inches(6.0),
                inches(3.5),
                Some("chart".to_string()),
            )
            .unwrap();
        slide.add_text_box(0, 0, 1, 1).set_text("Key Industry Disruptions:");
        assert_eq!(slide.collect_images().len(), 1);

        let mut mapper = RelationshipMapper::new();
        assert!(slide.to_xml_with_rels(0, &mapper).is_err());

        mapper.add_image(0, 0, "rId2".to_string());
        let xml = slide.to_xml_with_rels(0, &mapper).unwrap();
        assert!(xml.contains(r#"<a:blip r:embed="rId2"/>"#));
        assert!(xml.contains("Key Industry Disruptions:"));
        assert!(xml.ends_with("</p:sld>"));
    }
}
