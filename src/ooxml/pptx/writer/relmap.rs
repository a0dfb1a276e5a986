/// Relationship ID mapper for pictures.
///
/// Slide parts relate to their media parts before the slide XML is
/// generated, so the `r:embed` attribute of each `<p:pic>` carries the real
/// relationship ID.
use std::collections::HashMap;

/// Maps (slide_index, image_index_in_slide) to the slide's relationship ID.
#[derive(Debug, Default)]
pub struct RelationshipMapper {
    image_ids: HashMap<(usize, usize), String>,
}

impl RelationshipMapper {
    /// Create a new empty relationship mapper.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an image relationship mapping for a specific slide.
    pub fn add_image(&mut self, slide_index: usize, image_index_in_slide: usize, rel_id: String) {
        self.image_ids
            .insert((slide_index, image_index_in_slide), rel_id);
    }

    /// Get the relationship ID for an image in a specific slide.
    pub fn get_image_id(&self, slide_index: usize, image_index_in_slide: usize) -> Option<&str> {
        self.image_ids
            .get(&(slide_index, image_index_in_slide))
            .map(|s| s.as_str())
    }

    /// Number of mapped images across all slides.
    pub fn image_count(&self) -> usize {
        self.image_ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_ids_are_per_slide() {
        let mut mapper = RelationshipMapper::new();
        mapper.add_image(4, 0, "rId2".to_string());
        mapper.add_image(5, 0, "rId2".to_string());
        mapper.add_image(5, 1, "rId3".to_string());

        assert_eq!(mapper.get_image_id(5, 1), Some("rId3"));
        assert_eq!(mapper.get_image_id(4, 1), None);
        assert_eq!(mapper.image_count(), 3);
    }
}
