use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::enums::DocumentKind;

/// One uploaded file as received from the frontend.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(filename: &str, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.to_string(),
            bytes,
        }
    }
}

/// Per-invocation input to the orchestrator.
///
/// Completeness is recomputed from `files` on every invocation; there is
/// no server-side cursor between calls. At most one file per kind; a second
/// insert for the same kind replaces the first (last-write-wins), and a
/// file with empty `bytes` counts as absent.
#[derive(Debug, Clone, Default)]
pub struct SubmissionRequest {
    pub user_id: String,
    pub message: String,
    pub files: HashMap<DocumentKind, UploadedFile>,
}

/// Structured verdict from the semantic document check.
///
/// Always well-typed at this boundary: the validator adapter substitutes
/// safe defaults for anything the model got wrong (see `ai::validate`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticVerdict {
    pub is_valid: bool,
    pub reason: String,
    pub confidence: f32,
}

impl SemanticVerdict {
    /// Deterministic safe-default verdict used whenever the model's answer
    /// could not be trusted.
    pub fn rejected(reason: &str) -> Self {
        Self {
            is_valid: false,
            reason: reason.to_string(),
            confidence: 0.0,
        }
    }
}

/// Validation record for one document in one request. Never mutated after
/// creation. `semantic` is `None` only when text extraction failed and the
/// semantic stage never ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub sanity: bool,
    pub semantic: Option<SemanticVerdict>,
    pub error: Option<String>,
}

/// Per-kind container with one slot per required document.
///
/// Serializes as an object whose keys always appear in the fixed
/// enumeration order (`kk`, `akta`, `surat_pengantar`), regardless of how
/// the value was built. This is the ordering guarantee for `validation`
/// and `drive_links`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KindMap<T> {
    pub kk: T,
    pub akta: T,
    pub surat_pengantar: T,
}

impl<T> KindMap<T> {
    pub fn get(&self, kind: DocumentKind) -> &T {
        match kind {
            DocumentKind::Kk => &self.kk,
            DocumentKind::Akta => &self.akta,
            DocumentKind::SuratPengantar => &self.surat_pengantar,
        }
    }

    /// Build a map by evaluating `f` once per kind, in fixed order.
    pub fn from_fn(mut f: impl FnMut(DocumentKind) -> T) -> Self {
        Self {
            kk: f(DocumentKind::Kk),
            akta: f(DocumentKind::Akta),
            surat_pengantar: f(DocumentKind::SuratPengantar),
        }
    }
}

/// One outstanding requirement reported back to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeededDocument {
    pub kind: DocumentKind,
    pub description: String,
}

/// Terminal output of one orchestrator invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SubmissionResult {
    Tanya {
        answer: String,
    },
    Ktp {
        #[serde(flatten)]
        outcome: KtpOutcome,
    },
}

/// Outcome of the KTP intake path. `NeedMoreDocs` and `Complete` are both
/// terminal per invocation; there is no failure status. Partial failures
/// surface as degraded fields (null links, invalid verdicts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum KtpOutcome {
    NeedMoreDocs {
        needed: Vec<NeededDocument>,
    },
    Complete {
        drive_links: KindMap<Option<String>>,
        validation: KindMap<ValidationOutcome>,
    },
}

/// One append-only row in the submission ledger. Audit evidence, not a
/// queryable progress store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRow {
    /// UTC, RFC 3339.
    pub timestamp: String,
    pub user_id: String,
    pub flow: String,
    pub status: String,
    pub links: KindMap<Option<String>>,
    pub notes: String,
}
