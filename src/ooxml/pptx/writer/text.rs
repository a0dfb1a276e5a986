/// Text frames: the paragraphs of a text box, auto shape or placeholder.
use crate::common::RGBColor;
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use crate::ooxml::pptx::format::{Alignment, TextFormat};
use std::fmt::Write as FmtWrite;

/// One paragraph: a single run of text plus paragraph and run properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub(crate) text: String,
    pub(crate) level: u32,
    pub(crate) alignment: Option<Alignment>,
    pub(crate) format: TextFormat,
}

impl Paragraph {
    /// Create a paragraph with unformatted text.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Default::default()
        }
    }

    /// Get the paragraph text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the character formatting.
    pub fn format(&self) -> &TextFormat {
        &self.format
    }

    /// Get the alignment, if set.
    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    /// Builder method: set font size in points.
    pub fn font_size(&mut self, size: f64) -> &mut Self {
        self.format.size = Some(size);
        self
    }

    /// Builder method: set bold.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.format.bold = Some(bold);
        self
    }

    /// Builder method: set text color.
    pub fn color(&mut self, color: RGBColor) -> &mut Self {
        self.format.color = Some(color);
        self
    }

    /// Builder method: set horizontal alignment.
    pub fn align(&mut self, alignment: Alignment) -> &mut Self {
        self.alignment = Some(alignment);
        self
    }

    /// Builder method: set the outline level (0 is top level).
    pub fn level(&mut self, level: u32) -> &mut Self {
        self.level = level;
        self
    }

    fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:p>");

        if self.alignment.is_some() || self.level > 0 {
            xml.push_str("<a:pPr");
            if self.level > 0 {
                write!(xml, r#" lvl="{}""#, self.level)?;
            }
            if let Some(alignment) = self.alignment {
                write!(xml, r#" algn="{}""#, alignment.as_attr())?;
            }
            xml.push_str("/>");
        }

        if !self.text.is_empty() {
            xml.push_str("<a:r>");
            write_run_properties(xml, "a:rPr", &self.format)?;
            write!(xml, "<a:t>{}</a:t>", escape_xml(&self.text))?;
            xml.push_str("</a:r>");
        }

        write_run_properties(xml, "a:endParaRPr", &self.format)?;
        xml.push_str("</a:p>");

        Ok(())
    }
}

/// Write `<a:rPr>` or `<a:endParaRPr>`.
///
/// Child order follows CT_TextCharacterProperties: fill before typeface.
fn write_run_properties(xml: &mut String, tag: &str, format: &TextFormat) -> Result<()> {
    write!(xml, r#"<{} lang="en-US""#, tag)?;

    if let Some(size) = format.size {
        write!(xml, r#" sz="{}""#, (size * 100.0).round() as u32)?;
    }

    if let Some(bold) = format.bold {
        xml.push_str(if bold { r#" b="1""# } else { r#" b="0""# });
    }

    xml.push_str(r#" dirty="0""#);

    match format.color {
        Some(color) => {
            write!(
                xml,
                r#"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></{}>"#,
                color.to_hex(),
                tag
            )?;
        },
        None => xml.push_str("/>"),
    }

    Ok(())
}

/// The text of a shape as a list of paragraphs.
///
/// A text body always holds at least one paragraph, matching DrawingML
/// where `<p:txBody>` requires one `<a:p>`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBody {
    paragraphs: Vec<Paragraph>,
}

impl TextBody {
    /// Create a text body with one empty paragraph.
    pub fn new() -> Self {
        Self {
            paragraphs: vec![Paragraph::default()],
        }
    }

    /// Replace all text. Each `\n`-separated line becomes a paragraph.
    pub fn set_text(&mut self, text: &str) {
        self.paragraphs = text.split('\n').map(Paragraph::new).collect();
    }

    /// Append a paragraph and return it for formatting.
    pub fn add_paragraph(&mut self, text: &str) -> &mut Paragraph {
        self.paragraphs.push(Paragraph::new(text));
        let last = self.paragraphs.len() - 1;
        &mut self.paragraphs[last]
    }

    /// Get a paragraph by index.
    pub fn paragraph_mut(&mut self, index: usize) -> Option<&mut Paragraph> {
        self.paragraphs.get_mut(index)
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn paragraphs_mut(&mut self) -> impl Iterator<Item = &mut Paragraph> {
        self.paragraphs.iter_mut()
    }

    /// All text, paragraphs joined with `\n`.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Write the paragraphs (not the enclosing `<p:txBody>`).
    pub(crate) fn write_paragraphs(&self, xml: &mut String) -> Result<()> {
        for paragraph in &self.paragraphs {
            paragraph.to_xml(xml)?;
        }
        Ok(())
    }
}

impl Default for TextBody {
    fn default() -> Self {
        Self::new()
    }
}
