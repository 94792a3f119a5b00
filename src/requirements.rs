//! Fixed requirement table for the KTP intake flow.
//!
//! The set of required documents is closed: adding a kind means adding a
//! `DocumentKind` member, a description here, and a token list in `sanity`.

use std::collections::HashMap;

use crate::models::{DocumentKind, NeededDocument, UploadedFile};

/// Human-readable description of each required document.
pub fn description(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Kk => "Fotokopi KK terbaru",
        DocumentKind::Akta => "Akta Kelahiran (asli & fotokopi)",
        DocumentKind::SuratPengantar => "Surat Pengantar RT/RW dan Kelurahan/Desa",
    }
}

/// Kinds not supplied by the request, in fixed enumeration order.
///
/// A file with an empty payload counts as absent. Pure read-only query
/// against the request's own contents.
pub fn missing_kinds(files: &HashMap<DocumentKind, UploadedFile>) -> Vec<DocumentKind> {
    DocumentKind::ALL
        .into_iter()
        .filter(|kind| files.get(kind).map_or(true, |f| f.bytes.is_empty()))
        .collect()
}

/// Outstanding requirements paired with their descriptions, in fixed order.
pub fn needed_documents(missing: &[DocumentKind]) -> Vec<NeededDocument> {
    missing
        .iter()
        .map(|&kind| NeededDocument {
            kind,
            description: description(kind).to_string(),
        })
        .collect()
}
