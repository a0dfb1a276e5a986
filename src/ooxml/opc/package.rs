/// In-memory OPC package assembled before serialization.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::rel::Relationships;

/// An OPC package under construction: package-level relationships plus an
/// ordered list of parts.
#[derive(Debug)]
pub struct OpcPackage {
    rels: Relationships,
    parts: Vec<Part>,
}

impl OpcPackage {
    /// Create an empty package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI.to_string()),
            parts: Vec::new(),
        }
    }

    /// Package-level relationships (`/_rels/.rels`).
    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate the package itself to a part.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        self.rels.relate_to(target, reltype)
    }

    /// Add a part. Part names must be unique.
    pub fn add_part(&mut self, part: Part) -> Result<()> {
        if self.contains(part.partname()) {
            return Err(OoxmlError::InvalidPackUri(format!(
                "duplicate part name {}",
                part.partname()
            )));
        }
        self.parts.push(part);
        Ok(())
    }

    /// Check whether a part with this name exists.
    pub fn contains(&self, partname: &PackURI) -> bool {
        self.parts.iter().any(|p| p.partname() == partname)
    }

    /// Iterate parts in insertion order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    #[inline]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::content_type as ct;

    #[test]
    fn test_duplicate_part_rejected() {
        let mut pkg = OpcPackage::new();
        let name = PackURI::new("/ppt/presentation.xml").unwrap();
        pkg.add_part(Part::xml(name.clone(), ct::PML_PRESENTATION_MAIN, "<a/>"))
            .unwrap();
        assert!(pkg
            .add_part(Part::xml(name.clone(), ct::PML_PRESENTATION_MAIN, "<b/>"))
            .is_err());
        assert_eq!(pkg.part_count(), 1);
        assert!(pkg.contains(&name));
    }
}
