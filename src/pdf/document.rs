use anyhow::{Context, Result};
use lopdf::Document;
use std::path::Path;

use crate::page_range::PageRange;

/// Read-only handle on the opened source document. This is the whole
/// capability surface the splitter needs from lopdf: open, count pages,
/// copy a page span out, save.
pub struct PdfDocument {
    doc: Document,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let doc = Document::load(&path)
            .with_context(|| format!("failed to open PDF: {}", path.as_ref().display()))?;
        Ok(PdfDocument { doc })
    }

    #[cfg(test)]
    pub fn from_document(doc: Document) -> Self {
        PdfDocument { doc }
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Build a new document holding pages `range.start..=range.end`
    /// (1-indexed, inclusive) in their original order, by cloning the
    /// source and deleting the complement.
    pub fn extract_range(&self, range: PageRange) -> Result<Document> {
        let total = self.page_count();
        if range.start == 0 || range.end > total || range.start > range.end {
            anyhow::bail!(
                "pages {}-{} are out of range (1-{})",
                range.start,
                range.end,
                total
            );
        }

        let mut new_doc = self.doc.clone();
        let pages_to_delete: Vec<u32> = (1..=total)
            .filter(|page| *page < range.start || *page > range.end)
            .collect();
        if !pages_to_delete.is_empty() {
            new_doc.delete_pages(&pages_to_delete);
        }

        Ok(new_doc)
    }

    pub fn save<P: AsRef<Path>>(doc: &mut Document, path: P) -> Result<()> {
        doc.save(&path)
            .with_context(|| format!("failed to save PDF: {}", path.as_ref().display()))?;
        Ok(())
    }
}
