use super::ExtractionError;

/// Text extraction seam between raw document bytes and the validators.
///
/// Failure contract: pages without a text layer contribute empty text;
/// only an unparseable byte stream is an error, and the orchestrator
/// converts that into a per-document error field rather than aborting
/// the request.
pub trait TextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// PDF text extractor using the pdf-extract crate.
/// Handles digital PDFs with embedded text layers.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| ExtractionError::PdfParsing(e.to_string()))?;
        Ok(pages.join("\n"))
    }
}

/// Mock extractor for orchestrator tests: echoes the payload bytes back as
/// text, and fails on payloads starting with the `%unreadable%` marker.
pub struct MockTextExtractor;

impl MockTextExtractor {
    pub const UNREADABLE: &'static [u8] = b"%unreadable%";
}

impl TextExtractor for MockTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        if bytes.starts_with(Self::UNREADABLE) {
            return Err(ExtractionError::PdfParsing("no readable objects".into()));
        }
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}
