mod document;

pub use document::PdfDocument;

#[cfg(test)]
pub use document::fixtures;
