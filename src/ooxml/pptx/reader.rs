//! Read-back of saved presentations.
//!
//! Extracts just enough of a `.pptx` package to check what a deck contains:
//! slides in presentation order, the text of every shape and the number of
//! embedded pictures.

use crate::common::xml::unescape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::{PackURI, PhysPkgReader};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::HashMap;
use std::path::Path;

/// Contents of one slide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideSummary {
    /// Text of each text-bearing shape, paragraphs joined with `\n`
    pub texts: Vec<String>,
    /// Number of `<p:pic>` elements
    pub picture_count: usize,
}

/// Contents of a saved presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresentationSummary {
    pub slides: Vec<SlideSummary>,
    /// Number of parts under `/ppt/media/`
    pub media_count: usize,
}

impl PresentationSummary {
    /// Read a `.pptx` file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_bytes(std::fs::read(path)?)
    }

    /// Read `.pptx` bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let mut package = PhysPkgReader::new(data)?;

        let media_count = package
            .member_names()
            .iter()
            .filter(|name| name.starts_with("ppt/media/"))
            .count();

        let pres_uri = PackURI::new("/ppt/presentation.xml")?;
        let pres_xml = read_part_text(&mut package, &pres_uri)?;
        let rels_xml = read_part_text(&mut package, &pres_uri.rels_uri()?)?;
        let targets = parse_relationship_targets(&rels_xml)?;

        let mut slides = Vec::new();
        for r_id in parse_slide_rel_ids(&pres_xml)? {
            let target = targets.get(&r_id).ok_or_else(|| {
                OoxmlError::InvalidFormat(format!("slide relationship {} has no target", r_id))
            })?;
            let slide_uri = PackURI::new(format!("{}/{}", pres_uri.base_uri(), target))?;
            let slide_xml = read_part_text(&mut package, &slide_uri)?;
            slides.push(parse_slide(&slide_xml)?);
        }

        Ok(Self {
            slides,
            media_count,
        })
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Total pictures across all slides.
    pub fn picture_count(&self) -> usize {
        self.slides.iter().map(|s| s.picture_count).sum()
    }
}

fn read_part_text(package: &mut PhysPkgReader, uri: &PackURI) -> Result<String> {
    String::from_utf8(package.blob_for(uri)?).map_err(|e| OoxmlError::Xml(e.to_string()))
}

fn attribute(e: &quick_xml::events::BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .map(|attr| unescape_xml(&String::from_utf8_lossy(&attr.value)).into_owned())
}

/// Map relationship IDs to targets.
fn parse_relationship_targets(xml: &str) -> Result<HashMap<String, String>> {
    let mut reader = Reader::from_str(xml);
    let mut targets = HashMap::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                if let (Some(id), Some(target)) = (attribute(&e, b"Id"), attribute(&e, b"Target"))
                {
                    targets.insert(id, target);
                }
            },
            Event::Eof => break,
            _ => {},
        }
    }

    Ok(targets)
}

/// Slide relationship IDs in `<p:sldIdLst>` order.
fn parse_slide_rel_ids(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut ids = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"sldId" => {
                if let Some(r_id) = attribute(&e, b"r:id") {
                    ids.push(r_id);
                }
            },
            Event::Eof => break,
            _ => {},
        }
    }

    Ok(ids)
}

fn parse_slide(xml: &str) -> Result<SlideSummary> {
    let mut reader = Reader::from_str(xml);
    let mut summary = SlideSummary::default();

    let mut in_body = false;
    let mut in_text = false;
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"txBody" => {
                    in_body = true;
                    paragraphs.clear();
                },
                b"p" if in_body => current.clear(),
                b"t" if in_body => in_text = true,
                b"pic" => summary.picture_count += 1,
                _ => {},
            },
            Event::Empty(e) if in_body && e.local_name().as_ref() == b"p" => {
                paragraphs.push(String::new());
            },
            Event::Text(t) if in_text => {
                current.push_str(&String::from_utf8_lossy(&t));
            },
            Event::GeneralRef(r) if in_text => {
                let entity = format!("&{};", String::from_utf8_lossy(&r));
                current.push_str(&unescape_xml(&entity));
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" if in_body => paragraphs.push(std::mem::take(&mut current)),
                b"txBody" => {
                    in_body = false;
                    summary.texts.push(paragraphs.join("\n"));
                },
                _ => {},
            },
            Event::Eof => break,
            _ => {},
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::writer::{Geometry, MutablePresentation, SlideLayout};

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_parse_slide_text_and_pictures() {
        let xml = concat!(
            r#"<p:sld xmlns:a="a" xmlns:p="p" xmlns:r="r"><p:cSld><p:spTree>"#,
            r#"<p:sp><p:txBody><a:bodyPr/><a:p><a:r><a:t>R&amp;D</a:t></a:r></a:p><a:p/>"#,
            r#"<a:p><a:r><a:t>line</a:t></a:r><a:r><a:t> two</a:t></a:r></a:p></p:txBody></p:sp>"#,
            r#"<p:pic><p:nvPicPr/></p:pic>"#,
            r#"</p:spTree></p:cSld></p:sld>"#,
        );

        let summary = parse_slide(xml).unwrap();
        assert_eq!(summary.texts, vec!["R&D\n\nline two".to_string()]);
        assert_eq!(summary.picture_count, 1);
    }

    #[test]
    fn test_round_trip_through_writer() {
        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide(SlideLayout::Blank);
        slide
            .add_shape(Geometry::Rectangle, 0, 0, 100, 100)
            .set_text("Apple\nLOGO");
        slide
            .add_picture_from_bytes(PNG_MAGIC.to_vec(), 0, 0, 10, 10, None)
            .unwrap();
        slide.add_connector(0, 0, 10, 10);
        pres.add_slide(SlideLayout::TitleAndContent)
            .add_text_box(0, 0, 10, 10)
            .set_text("Q&A <now>");

        let summary = PresentationSummary::from_bytes(pres.to_bytes().unwrap()).unwrap();
        assert_eq!(summary.slide_count(), 2);
        assert_eq!(summary.media_count, 1);
        assert_eq!(summary.picture_count(), 1);
        assert!(summary.slides[0].texts.contains(&"Apple\nLOGO".to_string()));
        // Title and body placeholders are empty text bodies.
        assert_eq!(
            summary.slides[1].texts,
            vec![String::new(), String::new(), "Q&A <now>".to_string()]
        );
    }
}
