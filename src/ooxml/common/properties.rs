//! Document properties stored in `docProps/core.xml`.

use crate::common::xml::escape_xml;
use chrono::{DateTime, SecondsFormat, Utc};

/// Document core properties (metadata).
#[derive(Debug, Clone, Default)]
pub struct DocumentProperties {
    /// Document title
    pub title: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Document creator/author
    pub creator: Option<String>,
    /// Last modified by
    pub last_modified_by: Option<String>,
    /// Revision number
    pub revision: Option<u32>,
    /// Creation date
    pub created: Option<DateTime<Utc>>,
    /// Last modification date
    pub modified: Option<DateTime<Utc>>,
}

impl DocumentProperties {
    /// Create a new empty document properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title.
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the document subject.
    pub fn subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    /// Set the document creator/author. Also used as `lastModifiedBy`.
    pub fn creator(mut self, creator: &str) -> Self {
        self.creator = Some(creator.to_string());
        self.last_modified_by = Some(creator.to_string());
        self
    }

    /// Stamp creation and modification time with the current UTC time.
    pub fn stamped_now(mut self) -> Self {
        let now = Utc::now();
        self.created = Some(now);
        self.modified = Some(now);
        self.revision = Some(1);
        self
    }

    /// Generate core.xml content for this properties set.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);

        push_element(&mut xml, "dc:title", self.title.as_deref());
        push_element(&mut xml, "dc:subject", self.subject.as_deref());
        push_element(&mut xml, "dc:creator", self.creator.as_deref());
        push_element(
            &mut xml,
            "cp:lastModifiedBy",
            self.last_modified_by.as_deref(),
        );
        if let Some(revision) = self.revision {
            xml.push_str(&format!("<cp:revision>{}</cp:revision>", revision));
        }

        if let Some(ref created) = self.created {
            xml.push_str("<dcterms:created xsi:type=\"dcterms:W3CDTF\">");
            xml.push_str(&created.to_rfc3339_opts(SecondsFormat::Secs, true));
            xml.push_str("</dcterms:created>");
        }

        if let Some(ref modified) = self.modified {
            xml.push_str("<dcterms:modified xsi:type=\"dcterms:W3CDTF\">");
            xml.push_str(&modified.to_rfc3339_opts(SecondsFormat::Secs, true));
            xml.push_str("</dcterms:modified>");
        }

        xml.push_str("</cp:coreProperties>");
        xml
    }
}

fn push_element(xml: &mut String, tag: &str, value: Option<&str>) {
    if let Some(value) = value {
        xml.push('<');
        xml.push_str(tag);
        xml.push('>');
        xml.push_str(&escape_xml(value));
        xml.push_str("</");
        xml.push_str(tag);
        xml.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_document_properties_builder() {
        let props = DocumentProperties::new()
            .title("Nokia & Friends")
            .creator("Deck Builder");

        assert_eq!(props.title.as_deref(), Some("Nokia & Friends"));
        assert_eq!(props.last_modified_by.as_deref(), Some("Deck Builder"));

        let xml = props.to_xml();
        assert!(xml.contains("<dc:title>Nokia &amp; Friends</dc:title>"));
        assert!(xml.contains("<cp:lastModifiedBy>Deck Builder</cp:lastModifiedBy>"));
        assert!(!xml.contains("dcterms:created"));
    }

    #[test]
    fn test_timestamps_use_utc_designator() {
        let mut props = DocumentProperties::new();
        props.created = Some(Utc.with_ymd_and_hms(2014, 4, 25, 12, 0, 0).unwrap());

        let xml = props.to_xml();
        assert!(xml.contains(
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">2014-04-25T12:00:00Z</dcterms:created>"#
        ));
    }
}
