//! Token-presence pre-filter for declared document kinds.
//!
//! Cheap first tier of the two-tier validation policy: a genuine document
//! of a given kind is expected to contain a handful of characteristic
//! phrases. The filter is intentionally weak: false positives are caught
//! downstream by the semantic check, and the result is advisory: the
//! semantic verdict alone decides `is_valid`.

use crate::models::DocumentKind;

/// Lowercase substrings expected in a genuine document of each kind,
/// strongest signals first.
fn required_tokens(kind: DocumentKind) -> &'static [&'static str] {
    match kind {
        DocumentKind::Kk => &["kartu keluarga", "nomor kk", "nik"],
        DocumentKind::Akta => &[
            "akta kelahiran",
            "tempat/tanggal lahir",
            "nama ayah",
            "nama ibu",
        ],
        DocumentKind::SuratPengantar => &["rt", "rw", "kelurahan", "kecamatan"],
    }
}

/// How many of the leading tokens must all be present.
const MIN_SIGNALS: usize = 2;

/// Does `text` plausibly belong to a document of `kind`?
///
/// Pure function of its inputs; never panics. Unparseable or empty text
/// simply fails the substring checks.
pub fn quick_sanity(kind: DocumentKind, text: &str) -> bool {
    let haystack = text.to_lowercase();
    required_tokens(kind)
        .iter()
        .take(MIN_SIGNALS)
        .all(|token| haystack.contains(token))
}
