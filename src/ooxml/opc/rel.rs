/// Relationship-related objects for OPC packages.
///
/// Every part (and the package itself) owns a collection of relationships to
/// the parts it references. The collection is serialized to the part's
/// `_rels/*.rels` companion.
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::opc::packuri::PackURI;

/// A single relationship from a source part to a target part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference, relative to the source part's base URI
    target_ref: String,
}

impl Relationship {
    /// Create a new relationship.
    pub fn new(r_id: String, reltype: String, target_ref: String) -> Self {
        Self {
            r_id,
            reltype,
            target_ref,
        }
    }

    /// Get the relationship ID.
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    /// Get the relationship type.
    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Get the target reference.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }
}

/// Collection of relationships from a single source.
///
/// Relationships keep insertion order so that generated `.rels` parts are
/// stable from run to run.
#[derive(Debug, Clone)]
pub struct Relationships {
    /// Base URI of the source part, used to compute relative targets
    base_uri: String,

    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    pub fn new(base_uri: String) -> Self {
        Self {
            base_uri,
            rels: Vec::new(),
        }
    }

    /// Number of relationships.
    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    /// Check whether the collection is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Iterate relationships in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    /// Look up a relationship by its ID.
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id == r_id)
    }

    /// Get the next available rId ("rId1", "rId2", ...).
    ///
    /// Fills the first gap so IDs stay dense.
    pub fn next_r_id(&self) -> String {
        (1..)
            .map(|n| format!("rId{}", n))
            .find(|candidate| self.get(candidate).is_none())
            .unwrap_or_else(|| format!("rId{}", self.rels.len() + 1))
    }

    /// Relate to a target part, returning the relationship ID.
    ///
    /// An existing relationship of the same type to the same target is reused.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        let target_ref = target.relative_ref(&self.base_uri);
        if let Some(existing) = self
            .rels
            .iter()
            .find(|rel| rel.reltype == reltype && rel.target_ref == target_ref)
        {
            return existing.r_id.clone();
        }

        let r_id = self.next_r_id();
        self.rels.push(Relationship::new(
            r_id.clone(),
            reltype.to_string(),
            target_ref,
        ));
        r_id
    }

    /// Serialize relationships to XML format.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<Relationships xmlns="{}">"#,
            namespace::OPC_RELATIONSHIPS
        ));

        for rel in &self.rels {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(rel.r_id()),
                escape_xml(rel.reltype()),
                escape_xml(rel.target_ref()),
            ));
        }

        xml.push_str("</Relationships>");

        xml
    }
}

impl Default for Relationships {
    fn default() -> Self {
        Self::new("/".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    #[test]
    fn test_relate_to_computes_relative_target() {
        let mut rels = Relationships::new("/ppt/slides".to_string());
        let layout = PackURI::new("/ppt/slideLayouts/slideLayout7.xml").unwrap();

        let r_id = rels.relate_to(&layout, rt::SLIDE_LAYOUT);
        assert_eq!(r_id, "rId1");
        assert_eq!(
            rels.get("rId1").unwrap().target_ref(),
            "../slideLayouts/slideLayout7.xml"
        );
    }

    #[test]
    fn test_relate_to_reuses_existing() {
        let mut rels = Relationships::new("/ppt".to_string());
        let slide1 = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        let slide2 = PackURI::new("/ppt/slides/slide2.xml").unwrap();

        assert_eq!(rels.relate_to(&slide1, rt::SLIDE), "rId1");
        assert_eq!(rels.relate_to(&slide1, rt::SLIDE), "rId1");
        assert_eq!(rels.relate_to(&slide2, rt::SLIDE), "rId2");
        assert_eq!(rels.len(), 2);
    }

    #[test]
    fn test_to_xml() {
        let mut rels = Relationships::default();
        let pres = PackURI::new("/ppt/presentation.xml").unwrap();
        rels.relate_to(&pres, rt::OFFICE_DOCUMENT);

        let xml = rels.to_xml();
        assert!(xml.contains(r#"Id="rId1""#));
        assert!(xml.contains(r#"Target="ppt/presentation.xml""#));
        assert!(xml.ends_with("</Relationships>"));
    }
}
