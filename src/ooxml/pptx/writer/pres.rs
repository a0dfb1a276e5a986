/// Presentation writer for PPTX.
use crate::common::{Emu, inches};
use crate::ooxml::common::DocumentProperties;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{OpcPackage, PackURI, PackageWriter, Part};
use crate::ooxml::pptx::template;
use std::fmt::Write as FmtWrite;
use std::path::Path;
use tracing::debug;

use super::relmap::RelationshipMapper;
use super::slide::{MutableSlide, SlideLayout};

const PRESENTATION_URI: &str = "/ppt/presentation.xml";
const SLIDE_MASTER_URI: &str = "/ppt/slideMasters/slideMaster1.xml";
const THEME_URI: &str = "/ppt/theme/theme1.xml";
const APPLICATION_NAME: &str = "nokia-deck";

/// A mutable PowerPoint presentation for writing.
///
/// Holds the slides, the slide size and the document properties; [`save`]
/// assembles the full OPC package (master, layouts, theme, slides, media).
///
/// [`save`]: MutablePresentation::save
#[derive(Debug)]
pub struct MutablePresentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: Emu,
    /// Slide height in EMUs
    slide_height: Emu,
    properties: DocumentProperties,
}

impl MutablePresentation {
    /// Create a new empty presentation.
    ///
    /// Default size is 13.33" x 7.5" (16:9 widescreen).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: inches(13.33),
            slide_height: inches(7.5),
            properties: DocumentProperties::new(),
        }
    }

    /// Add a new slide based on a layout.
    pub fn add_slide(&mut self, layout: SlideLayout) -> &mut MutableSlide {
        let slide_id = (self.slides.len() + 256) as u32;
        self.slides.push(MutableSlide::new(slide_id, layout));
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Slides in presentation order.
    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> Emu {
        self.slide_width
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> Emu {
        self.slide_height
    }

    /// Set the slide size in EMUs.
    pub fn set_slide_size(&mut self, width: Emu, height: Emu) {
        self.slide_width = width;
        self.slide_height = height;
    }

    /// Set the core document properties written to `docProps/core.xml`.
    pub fn set_properties(&mut self, properties: DocumentProperties) {
        self.properties = properties;
    }

    /// Save the presentation to a file, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let package = self.to_package()?;
        debug!(
            path = %path.as_ref().display(),
            parts = package.part_count(),
            "writing presentation package"
        );
        PackageWriter::write(path, &package)
    }

    /// Serialize the presentation to `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        PackageWriter::to_bytes(&self.to_package()?)
    }

    /// Assemble the OPC package for this presentation.
    pub fn to_package(&self) -> Result<OpcPackage> {
        let mut package = OpcPackage::new();

        let pres_uri = PackURI::new(PRESENTATION_URI)?;
        let master_uri = PackURI::new(SLIDE_MASTER_URI)?;
        let theme_uri = PackURI::new(THEME_URI)?;
        let core_uri = PackURI::new("/docProps/core.xml")?;
        let app_uri = PackURI::new("/docProps/app.xml")?;

        package.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);
        package.relate_to(&core_uri, rt::CORE_PROPERTIES);
        package.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

        let mut pres_part = Part::new(pres_uri, ct::PML_PRESENTATION_MAIN, Vec::new());
        pres_part.relate_to(&master_uri, rt::SLIDE_MASTER);

        // Master relates to layouts first (rId1, rId2), then the theme.
        let mut master_part = Part::xml(
            master_uri.clone(),
            ct::PML_SLIDE_MASTER,
            template::slide_master_xml(),
        );
        let layout_uris = SlideLayout::ALL
            .iter()
            .map(|layout| layout_uri(*layout))
            .collect::<Result<Vec<_>>>()?;
        for uri in &layout_uris {
            master_part.relate_to(uri, rt::SLIDE_LAYOUT);
        }
        master_part.relate_to(&theme_uri, rt::THEME);

        let mut slide_parts = Vec::with_capacity(self.slides.len());
        let mut media_parts = Vec::new();
        let mut rel_mapper = RelationshipMapper::new();
        let mut slide_rel_ids = Vec::with_capacity(self.slides.len());

        for (slide_index, slide) in self.slides.iter().enumerate() {
            let slide_uri = PackURI::new(format!("/ppt/slides/slide{}.xml", slide_index + 1))?;
            slide_rel_ids.push(pres_part.relate_to(&slide_uri, rt::SLIDE));

            let mut slide_part = Part::new(slide_uri, ct::PML_SLIDE, Vec::new());
            slide_part.relate_to(&layout_uri(slide.layout())?, rt::SLIDE_LAYOUT);

            for (image_index, (data, format)) in slide.collect_images().into_iter().enumerate() {
                let media_uri = PackURI::new(format!(
                    "/ppt/media/image{}.{}",
                    media_parts.len() + 1,
                    format.extension()
                ))?;
                let r_id = slide_part.relate_to(&media_uri, rt::IMAGE);
                rel_mapper.add_image(slide_index, image_index, r_id);
                media_parts.push(Part::new(media_uri, format.mime_type(), data.to_vec()));
            }

            slide_part.set_blob(
                slide
                    .to_xml_with_rels(slide_index, &rel_mapper)?
                    .into_bytes(),
            );
            slide_parts.push(slide_part);
        }

        for (uri, ct_, reltype, xml) in [
            ("/ppt/presProps.xml", ct::PML_PRES_PROPS, rt::PRES_PROPS, template::pres_props_xml()),
            ("/ppt/viewProps.xml", ct::PML_VIEW_PROPS, rt::VIEW_PROPS, template::view_props_xml()),
            (THEME_URI, ct::OFC_THEME, rt::THEME, template::theme_xml()),
            (
                "/ppt/tableStyles.xml",
                ct::PML_TABLE_STYLES,
                rt::TABLE_STYLES,
                template::table_styles_xml(),
            ),
        ] {
            let uri = PackURI::new(uri)?;
            pres_part.relate_to(&uri, reltype);
            package.add_part(Part::xml(uri, ct_, xml))?;
        }

        pres_part.set_blob(self.generate_presentation_xml(&slide_rel_ids)?.into_bytes());

        package.add_part(pres_part)?;
        package.add_part(master_part)?;
        for (layout, uri) in SlideLayout::ALL.iter().zip(layout_uris) {
            let xml = match layout {
                SlideLayout::TitleAndContent => template::title_and_content_layout_xml(),
                SlideLayout::Blank => template::blank_layout_xml(),
            };
            let mut layout_part = Part::xml(uri, ct::PML_SLIDE_LAYOUT, xml);
            layout_part.relate_to(&master_uri, rt::SLIDE_MASTER);
            package.add_part(layout_part)?;
        }
        for part in slide_parts.into_iter().chain(media_parts) {
            package.add_part(part)?;
        }

        let core_xml = self.properties.to_xml();
        package.add_part(Part::xml(core_uri, ct::OPC_CORE_PROPERTIES, core_xml))?;
        package.add_part(Part::xml(
            app_uri,
            ct::OFC_EXTENDED_PROPERTIES,
            template::app_props_xml(self.slides.len(), APPLICATION_NAME),
        ))?;

        debug!(
            slides = self.slides.len(),
            images = rel_mapper.image_count(),
            "assembled presentation package"
        );

        Ok(package)
    }

    /// Generate presentation.xml content with the slides' relationship IDs.
    fn generate_presentation_xml(&self, slide_rel_ids: &[String]) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" saveSubsetFonts="1">"#);

        // Write slide master ID list
        xml.push_str("<p:sldMasterIdLst>");
        xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
        xml.push_str("</p:sldMasterIdLst>");

        // Write slide ID list
        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("<p:defaultTextStyle>");
        xml.push_str(r#"<a:defPPr><a:defRPr lang="en-US"/></a:defPPr>"#);
        xml.push_str("</p:defaultTextStyle>");
        xml.push_str("</p:presentation>");

        Ok(xml)
    }
}

fn layout_uri(layout: SlideLayout) -> Result<PackURI> {
    PackURI::new(format!(
        "/ppt/slideLayouts/slideLayout{}.xml",
        layout.part_number()
    ))
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}
