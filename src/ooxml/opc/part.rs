/// A part in an OPC package: a partname, a content type, the serialized
/// content and the part's outgoing relationships.
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;

#[derive(Debug, Clone)]
pub struct Part {
    partname: PackURI,
    content_type: String,
    blob: Vec<u8>,
    rels: Relationships,
}

impl Part {
    /// Create a part with no relationships.
    pub fn new(partname: PackURI, content_type: &str, blob: Vec<u8>) -> Self {
        let rels = Relationships::new(partname.base_uri().to_string());
        Self {
            partname,
            content_type: content_type.to_string(),
            blob,
            rels,
        }
    }

    /// Create an XML part from generated markup.
    pub fn xml(partname: PackURI, content_type: &str, xml: impl Into<String>) -> Self {
        Self::new(partname, content_type, xml.into().into_bytes())
    }

    #[inline]
    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    #[inline]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    #[inline]
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Add or get a relationship to another part, returning its rId.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        self.rels.relate_to(target, reltype)
    }

    /// Replace the part content.
    ///
    /// Used when markup can only be generated after relationship IDs are known.
    pub fn set_blob(&mut self, blob: Vec<u8>) {
        self.blob = blob;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};

    #[test]
    fn test_part_relationships_use_part_base() {
        let mut slide = Part::xml(
            PackURI::new("/ppt/slides/slide1.xml").unwrap(),
            ct::PML_SLIDE,
            "<p:sld/>",
        );
        let image = PackURI::new("/ppt/media/image1.png").unwrap();

        let r_id = slide.relate_to(&image, rt::IMAGE);
        assert_eq!(r_id, "rId1");
        assert_eq!(
            slide.rels().get(&r_id).unwrap().target_ref(),
            "../media/image1.png"
        );
        assert_eq!(slide.blob(), b"<p:sld/>");
    }
}
