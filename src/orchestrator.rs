//! Submission orchestrator, the decision core of the intake flow.
//!
//! Owns the per-request flow: intent routing, outstanding-requirement
//! computation, two-tier document validation and the side-effecting
//! persistence steps. Collaborators are injected at construction
//! (constructed once at process start, reused per request); the
//! orchestrator holds no per-user state between invocations, so
//! completeness is recomputed from each request's own files.
//!
//! Every invocation terminates with a structured `SubmissionResult`.
//! There is no failure status: a request that reaches validation always
//! completes, with partial failures surfacing as degraded fields (null
//! links, rejected verdicts, per-document error strings).

use std::collections::HashMap;

use uuid::Uuid;

use crate::ai::{answer_question, classify_intent, validate_document, LlmClient};
use crate::extraction::TextExtractor;
use crate::models::{
    DocumentKind, KindMap, KtpOutcome, LedgerRow, Mode, SubmissionRequest, SubmissionResult,
    UploadedFile, ValidationOutcome,
};
use crate::requirements;
use crate::sanity::quick_sanity;
use crate::storage::{DocumentStore, SubmissionLedger};

/// Flow tag recorded on every ledger row.
const FLOW_TAG: &str = "ktp";

/// Composes the intent router, sanity checker, semantic validator and the
/// persistence collaborators behind a single entry point.
pub struct SubmissionOrchestrator {
    llm: Box<dyn LlmClient + Send + Sync>,
    extractor: Box<dyn TextExtractor + Send + Sync>,
    store: Box<dyn DocumentStore + Send + Sync>,
    ledger: Box<dyn SubmissionLedger + Send + Sync>,
}

impl SubmissionOrchestrator {
    pub fn new(
        llm: Box<dyn LlmClient + Send + Sync>,
        extractor: Box<dyn TextExtractor + Send + Sync>,
        store: Box<dyn DocumentStore + Send + Sync>,
        ledger: Box<dyn SubmissionLedger + Send + Sync>,
    ) -> Self {
        Self {
            llm,
            extractor,
            store,
            ledger,
        }
    }

    /// Entry point for one inbound request.
    pub fn handle(&self, request: &SubmissionRequest) -> SubmissionResult {
        let request_id = Uuid::new_v4();
        let mode = classify_intent(self.llm.as_ref(), &request.message);
        tracing::info!(
            request_id = %request_id,
            user_id = %request.user_id,
            mode = mode.as_str(),
            files = request.files.len(),
            "Routing inbound message"
        );

        match mode {
            Mode::Tanya => SubmissionResult::Tanya {
                answer: answer_question(self.llm.as_ref(), &request.message),
            },
            Mode::Ktp => self.intake(request_id, &request.user_id, &request.files),
        }
    }

    /// KTP intake: completeness check, per-document validation, uploads,
    /// one ledger row.
    fn intake(
        &self,
        request_id: Uuid,
        user_id: &str,
        files: &HashMap<DocumentKind, UploadedFile>,
    ) -> SubmissionResult {
        let missing = requirements::missing_kinds(files);
        if !missing.is_empty() {
            tracing::info!(
                request_id = %request_id,
                missing = missing.len(),
                "Submission incomplete, requesting more documents"
            );
            // Read-only path: no validation, upload or ledger write.
            return SubmissionResult::Ktp {
                outcome: KtpOutcome::NeedMoreDocs {
                    needed: requirements::needed_documents(&missing),
                },
            };
        }

        let validation = KindMap::from_fn(|kind| match files.get(&kind) {
            Some(file) => self.validate_one(kind, file),
            // Unreachable once the missing check passed; kept total.
            None => ValidationOutcome {
                sanity: false,
                semantic: None,
                error: Some("berkas tidak ditemukan".into()),
            },
        });

        let folder_id = match self.store.find_or_create_folder(user_id) {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!(
                    request_id = %request_id,
                    user_id = %user_id,
                    error = %e,
                    "Folder resolution failed, recording null links"
                );
                None
            }
        };

        let drive_links = KindMap::from_fn(|kind| {
            let file = files.get(&kind)?;
            let folder = folder_id.as_deref()?;
            self.store.upload(&file.bytes, &file.filename, folder)
        });

        // Audit trail, not a gate: append regardless of validation or
        // upload failures, and tolerate the append itself failing.
        let row = LedgerRow {
            timestamp: chrono::Utc::now().to_rfc3339(),
            user_id: user_id.to_string(),
            flow: FLOW_TAG.to_string(),
            status: "complete".to_string(),
            links: drive_links.clone(),
            notes: validation_notes(&validation),
        };
        if let Err(e) = self.ledger.append_row(&row) {
            tracing::warn!(
                request_id = %request_id,
                error = %e,
                "Ledger append failed, submission result is unaffected"
            );
        }

        SubmissionResult::Ktp {
            outcome: KtpOutcome::Complete {
                drive_links,
                validation,
            },
        }
    }

    /// Validate one document. Extraction failure short-circuits this kind
    /// only; the semantic check is isolated per document and never
    /// propagates an error.
    fn validate_one(&self, kind: DocumentKind, file: &UploadedFile) -> ValidationOutcome {
        let text = match self.extractor.extract_text(&file.bytes) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(kind = kind.as_str(), error = %e, "Text extraction failed");
                return ValidationOutcome {
                    sanity: false,
                    semantic: None,
                    error: Some(e.to_string()),
                };
            }
        };

        let sanity = quick_sanity(kind, &text);
        if !sanity {
            tracing::debug!(kind = kind.as_str(), "Sanity pre-filter did not match");
        }
        // Advisory only: the semantic verdict decides is_valid.
        let semantic = validate_document(self.llm.as_ref(), kind, &text, &file.filename);

        ValidationOutcome {
            sanity,
            semantic: Some(semantic),
            error: None,
        }
    }
}

/// Compact per-kind validity summary for the ledger notes column.
fn validation_notes(validation: &KindMap<ValidationOutcome>) -> String {
    DocumentKind::ALL
        .iter()
        .map(|&kind| {
            let outcome = validation.get(kind);
            let state = match (&outcome.error, &outcome.semantic) {
                (Some(_), _) => "error",
                (None, Some(verdict)) if verdict.is_valid => "valid",
                _ => "invalid",
            };
            format!("{}={}", kind.as_str(), state)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{AiError, MockLlmClient, QA_FALLBACK, REASON_PARSE_FAILURE, REASON_SHAPE_FAILURE};
    use crate::extraction::MockTextExtractor;
    use crate::storage::{InMemoryDocumentStore, InMemoryLedger};
    use std::sync::Arc;

    const VALID_VERDICT: &str = r#"{"is_valid": true, "reason": "Frasa khas ditemukan", "confidence": 0.9}"#;
    const INVALID_VERDICT: &str = r#"{"is_valid": false, "reason": "Bukan jenis yang diminta", "confidence": 0.8}"#;

    /// Payloads that pass the mock extractor and the sanity tokens.
    fn sane_payload(kind: DocumentKind) -> Vec<u8> {
        match kind {
            DocumentKind::Kk => b"KARTU KELUARGA Nomor KK 3273012345678901 NIK".to_vec(),
            DocumentKind::Akta => {
                b"Kutipan Akta Kelahiran Tempat/Tanggal Lahir Bandung".to_vec()
            }
            DocumentKind::SuratPengantar => b"Surat pengantar RT 05 RW 09 kelurahan".to_vec(),
        }
    }

    fn complete_files() -> HashMap<DocumentKind, UploadedFile> {
        let mut files = HashMap::new();
        for kind in DocumentKind::ALL {
            let filename = format!("{}.pdf", kind.as_str());
            files.insert(kind, UploadedFile::new(&filename, sane_payload(kind)));
        }
        files
    }

    struct Harness {
        orchestrator: SubmissionOrchestrator,
        store: Arc<InMemoryDocumentStore>,
        ledger: Arc<InMemoryLedger>,
    }

    /// Shared-fake wrappers so tests can inspect the store and ledger the
    /// orchestrator wrote to.
    struct SharedStore(Arc<InMemoryDocumentStore>);
    struct SharedLedger(Arc<InMemoryLedger>);

    impl DocumentStore for SharedStore {
        fn find_or_create_folder(&self, user_id: &str) -> Result<String, crate::storage::StorageError> {
            self.0.find_or_create_folder(user_id)
        }
        fn upload(&self, bytes: &[u8], filename: &str, folder_id: &str) -> Option<String> {
            self.0.upload(bytes, filename, folder_id)
        }
    }

    impl SubmissionLedger for SharedLedger {
        fn append_row(&self, row: &LedgerRow) -> Result<(), crate::storage::StorageError> {
            self.0.append_row(row)
        }
    }

    fn harness(llm: MockLlmClient) -> Harness {
        let store = Arc::new(InMemoryDocumentStore::new());
        let ledger = Arc::new(InMemoryLedger::new());
        let orchestrator = SubmissionOrchestrator::new(
            Box::new(llm),
            Box::new(MockTextExtractor),
            Box::new(SharedStore(Arc::clone(&store))),
            Box::new(SharedLedger(Arc::clone(&ledger))),
        );
        Harness {
            orchestrator,
            store,
            ledger,
        }
    }

    fn request(message: &str, files: HashMap<DocumentKind, UploadedFile>) -> SubmissionRequest {
        SubmissionRequest {
            user_id: "warga_001".into(),
            message: message.into(),
            files,
        }
    }

    fn complete_outcome(result: SubmissionResult) -> (KindMap<Option<String>>, KindMap<ValidationOutcome>) {
        match result {
            SubmissionResult::Ktp {
                outcome: KtpOutcome::Complete {
                    drive_links,
                    validation,
                },
            } => (drive_links, validation),
            other => panic!("expected complete ktp outcome, got {other:?}"),
        }
    }

    // ── Intent branch ───────────────────────────────────────

    #[test]
    fn question_routes_to_answer_path() {
        // Scenario C: a question with no files.
        let llm = MockLlmClient::scripted(vec![
            Ok("tanya".into()),
            Ok("Lapor ke Disdukcapil dengan surat kehilangan dari kepolisian.".into()),
        ]);
        let h = harness(llm);
        let result = h
            .orchestrator
            .handle(&request("bagaimana cara mengurus KTP hilang?", HashMap::new()));
        match result {
            SubmissionResult::Tanya { answer } => assert!(!answer.is_empty()),
            other => panic!("expected tanya result, got {other:?}"),
        }
        // The question path never touches persistence.
        assert_eq!(h.store.folder_count(), 0);
        assert!(h.ledger.rows().is_empty());
    }

    #[test]
    fn answer_fallback_passes_through_verbatim() {
        let llm = MockLlmClient::scripted(vec![
            Ok("tanya".into()),
            Err(AiError::HttpClient("down".into())),
        ]);
        let h = harness(llm);
        let result = h.orchestrator.handle(&request("halo", HashMap::new()));
        assert_eq!(
            result,
            SubmissionResult::Tanya {
                answer: QA_FALLBACK.into()
            }
        );
    }

    #[test]
    fn classifier_failure_falls_back_to_question_path() {
        let llm = MockLlmClient::scripted(vec![
            Err(AiError::Connection("https://example.test".into())),
            Ok("Jawaban umum.".into()),
        ]);
        let h = harness(llm);
        let result = h.orchestrator.handle(&request("saya mau buat KTP", HashMap::new()));
        assert!(matches!(result, SubmissionResult::Tanya { .. }));
    }

    #[test]
    fn question_with_files_ignores_documents() {
        // The answer path returns immediately even when files rode along.
        let llm = MockLlmClient::scripted(vec![
            Ok("tanya".into()),
            Ok("Syaratnya KK, akta kelahiran, dan surat pengantar.".into()),
        ]);
        let h = harness(llm);
        let result = h
            .orchestrator
            .handle(&request("apa saja syaratnya?", complete_files()));
        assert!(matches!(result, SubmissionResult::Tanya { .. }));
        assert!(h.store.uploads().is_empty());
        assert!(h.ledger.rows().is_empty());
    }

    // ── Completeness ────────────────────────────────────────

    #[test]
    fn empty_submission_lists_all_requirements_in_order() {
        // Scenario A.
        let llm = MockLlmClient::scripted(vec![Ok("ktp".into())]);
        let h = harness(llm);
        let result = h
            .orchestrator
            .handle(&request("saya mau buat KTP", HashMap::new()));
        match result {
            SubmissionResult::Ktp {
                outcome: KtpOutcome::NeedMoreDocs { needed },
            } => {
                let kinds: Vec<DocumentKind> = needed.iter().map(|n| n.kind).collect();
                assert_eq!(kinds, DocumentKind::ALL);
                assert!(needed.iter().all(|n| !n.description.is_empty()));
            }
            other => panic!("expected need_more_docs, got {other:?}"),
        }
        // Short-circuit: nothing validated, stored or recorded.
        assert_eq!(h.store.folder_count(), 0);
        assert!(h.store.uploads().is_empty());
        assert!(h.ledger.rows().is_empty());
    }

    #[test]
    fn partial_submission_lists_only_missing_kinds() {
        let llm = MockLlmClient::scripted(vec![Ok("ktp".into())]);
        let h = harness(llm);
        let mut files = HashMap::new();
        files.insert(
            DocumentKind::Akta,
            UploadedFile::new("akta.pdf", sane_payload(DocumentKind::Akta)),
        );
        let result = h.orchestrator.handle(&request("lanjut", files));
        match result {
            SubmissionResult::Ktp {
                outcome: KtpOutcome::NeedMoreDocs { needed },
            } => {
                let kinds: Vec<DocumentKind> = needed.iter().map(|n| n.kind).collect();
                assert_eq!(kinds, vec![DocumentKind::Kk, DocumentKind::SuratPengantar]);
            }
            other => panic!("expected need_more_docs, got {other:?}"),
        }
    }

    #[test]
    fn complete_submission_never_reports_missing() {
        let llm = MockLlmClient::scripted(vec![
            Ok("ktp".into()),
            Ok(VALID_VERDICT.into()),
            Ok(VALID_VERDICT.into()),
            Ok(VALID_VERDICT.into()),
        ]);
        let h = harness(llm);
        let result = h.orchestrator.handle(&request("semua sudah", complete_files()));
        assert!(matches!(
            result,
            SubmissionResult::Ktp {
                outcome: KtpOutcome::Complete { .. }
            }
        ));
    }

    // ── Validation ──────────────────────────────────────────

    #[test]
    fn complete_submission_validates_stores_and_records() {
        // Scenario B.
        let llm = MockLlmClient::scripted(vec![
            Ok("ktp".into()),
            Ok(VALID_VERDICT.into()),
            Ok(VALID_VERDICT.into()),
            Ok(VALID_VERDICT.into()),
        ]);
        let h = harness(llm);
        let result = h.orchestrator.handle(&request("sudah lengkap", complete_files()));
        let (links, validation) = complete_outcome(result);

        let kk = validation.get(DocumentKind::Kk);
        assert!(kk.sanity);
        assert!(kk.semantic.as_ref().unwrap().is_valid);
        assert!(kk.error.is_none());
        assert!(links.get(DocumentKind::Kk).is_some());

        assert_eq!(h.store.folder_count(), 1);
        assert_eq!(h.store.uploads().len(), 3);

        let rows = h.ledger.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].flow, "ktp");
        assert_eq!(rows[0].status, "complete");
        assert_eq!(rows[0].user_id, "warga_001");
        assert_eq!(rows[0].notes, "kk=valid akta=valid surat_pengantar=valid");
        assert!(chrono::DateTime::parse_from_rfc3339(&rows[0].timestamp).is_ok());
    }

    #[test]
    fn malformed_validator_output_degrades_one_kind_only() {
        let llm = MockLlmClient::scripted(vec![
            Ok("ktp".into()),
            Ok("bukan json sama sekali".into()),
            Ok(r#"{"reason": "tanpa keputusan"}"#.into()),
            Ok(VALID_VERDICT.into()),
        ]);
        let h = harness(llm);
        let result = h.orchestrator.handle(&request("cek", complete_files()));
        let (_, validation) = complete_outcome(result);

        let kk = validation.get(DocumentKind::Kk).semantic.as_ref().unwrap();
        assert!(!kk.is_valid);
        assert_eq!(kk.reason, REASON_PARSE_FAILURE);
        assert_eq!(kk.confidence, 0.0);

        let akta = validation.get(DocumentKind::Akta).semantic.as_ref().unwrap();
        assert_eq!(akta.reason, REASON_SHAPE_FAILURE);

        // The third kind still validated normally.
        let sp = validation
            .get(DocumentKind::SuratPengantar)
            .semantic
            .as_ref()
            .unwrap();
        assert!(sp.is_valid);
    }

    #[test]
    fn validator_transport_error_does_not_abort_siblings() {
        let llm = MockLlmClient::scripted(vec![
            Ok("ktp".into()),
            Err(AiError::HttpClient("timeout".into())),
            Ok(VALID_VERDICT.into()),
            Ok(VALID_VERDICT.into()),
        ]);
        let h = harness(llm);
        let result = h.orchestrator.handle(&request("cek", complete_files()));
        let (_, validation) = complete_outcome(result);

        let kk = validation.get(DocumentKind::Kk).semantic.as_ref().unwrap();
        assert!(!kk.is_valid);
        assert!(!kk.reason.is_empty());
        assert!(validation.get(DocumentKind::Akta).semantic.as_ref().unwrap().is_valid);
        assert!(
            validation
                .get(DocumentKind::SuratPengantar)
                .semantic
                .as_ref()
                .unwrap()
                .is_valid
        );
    }

    #[test]
    fn extraction_failure_records_error_and_skips_semantic_stage() {
        let mut files = complete_files();
        let mut bytes = MockTextExtractor::UNREADABLE.to_vec();
        bytes.extend_from_slice(b" hasil scan");
        files.insert(DocumentKind::Kk, UploadedFile::new("kk.pdf", bytes));

        // Only two semantic calls expected: kk never reaches the model.
        let llm = MockLlmClient::scripted(vec![
            Ok("ktp".into()),
            Ok(VALID_VERDICT.into()),
            Ok(VALID_VERDICT.into()),
        ]);
        let h = harness(llm);
        let result = h.orchestrator.handle(&request("cek", files));
        let (links, validation) = complete_outcome(result);

        let kk = validation.get(DocumentKind::Kk);
        assert!(!kk.sanity);
        assert!(kk.semantic.is_none());
        assert!(kk.error.as_ref().is_some_and(|e| !e.is_empty()));

        // Siblings validated, and the unreadable file still uploaded.
        assert!(validation.get(DocumentKind::Akta).semantic.as_ref().unwrap().is_valid);
        assert!(links.get(DocumentKind::Kk).is_some());

        let rows = h.ledger.rows();
        assert!(rows[0].notes.starts_with("kk=error"));
    }

    #[test]
    fn sanity_failure_does_not_gate_semantic_verdict() {
        let mut files = complete_files();
        // Text that fails the kk token pre-filter.
        files.insert(
            DocumentKind::Kk,
            UploadedFile::new("kk.pdf", b"halaman kosong tanpa frasa khas".to_vec()),
        );
        let llm = MockLlmClient::scripted(vec![
            Ok("ktp".into()),
            Ok(VALID_VERDICT.into()),
            Ok(VALID_VERDICT.into()),
            Ok(VALID_VERDICT.into()),
        ]);
        let h = harness(llm);
        let result = h.orchestrator.handle(&request("cek", files));
        let (_, validation) = complete_outcome(result);

        let kk = validation.get(DocumentKind::Kk);
        assert!(!kk.sanity, "pre-filter should miss");
        assert!(
            kk.semantic.as_ref().unwrap().is_valid,
            "semantic verdict is authoritative"
        );
    }

    #[test]
    fn invalid_verdict_is_recorded_not_fatal() {
        let llm = MockLlmClient::scripted(vec![
            Ok("ktp".into()),
            Ok(INVALID_VERDICT.into()),
            Ok(VALID_VERDICT.into()),
            Ok(VALID_VERDICT.into()),
        ]);
        let h = harness(llm);
        let result = h.orchestrator.handle(&request("cek", complete_files()));
        let (links, validation) = complete_outcome(result);

        assert!(!validation.get(DocumentKind::Kk).semantic.as_ref().unwrap().is_valid);
        // Invalid documents are still uploaded and recorded.
        assert!(links.get(DocumentKind::Kk).is_some());
        assert_eq!(
            h.ledger.rows()[0].notes,
            "kk=invalid akta=valid surat_pengantar=valid"
        );
    }

    // ── Persistence ─────────────────────────────────────────

    #[test]
    fn upload_failure_nulls_one_link_only() {
        let llm = MockLlmClient::scripted(vec![
            Ok("ktp".into()),
            Ok(VALID_VERDICT.into()),
            Ok(VALID_VERDICT.into()),
            Ok(VALID_VERDICT.into()),
        ]);
        let h = harness(llm);
        h.store.fail_upload_of("akta.pdf");
        let result = h.orchestrator.handle(&request("cek", complete_files()));
        let (links, _) = complete_outcome(result);

        assert!(links.get(DocumentKind::Kk).is_some());
        assert!(links.get(DocumentKind::Akta).is_none());
        assert!(links.get(DocumentKind::SuratPengantar).is_some());

        // Ledger row still written, with an empty akta cell.
        let rows = h.ledger.rows();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].links.akta.is_none());
    }

    #[test]
    fn folder_failure_nulls_all_links_but_still_records() {
        struct BrokenStore;
        impl DocumentStore for BrokenStore {
            fn find_or_create_folder(
                &self,
                _user_id: &str,
            ) -> Result<String, crate::storage::StorageError> {
                Err(crate::storage::StorageError::Api {
                    status: 500,
                    body: "backend error".into(),
                })
            }
            fn upload(&self, _bytes: &[u8], _filename: &str, _folder_id: &str) -> Option<String> {
                panic!("upload must not run without a folder");
            }
        }

        let ledger = Arc::new(InMemoryLedger::new());
        let orchestrator = SubmissionOrchestrator::new(
            Box::new(MockLlmClient::scripted(vec![
                Ok("ktp".into()),
                Ok(VALID_VERDICT.into()),
                Ok(VALID_VERDICT.into()),
                Ok(VALID_VERDICT.into()),
            ])),
            Box::new(MockTextExtractor),
            Box::new(BrokenStore),
            Box::new(SharedLedger(Arc::clone(&ledger))),
        );

        let result = orchestrator.handle(&request("cek", complete_files()));
        let (links, validation) = complete_outcome(result);
        for kind in DocumentKind::ALL {
            assert!(links.get(kind).is_none());
        }
        // Validation already ran and the ledger row is still appended.
        assert!(validation.get(DocumentKind::Kk).semantic.is_some());
        assert_eq!(ledger.rows().len(), 1);
    }

    #[test]
    fn ledger_failure_is_best_effort() {
        let llm = MockLlmClient::scripted(vec![
            Ok("ktp".into()),
            Ok(VALID_VERDICT.into()),
            Ok(VALID_VERDICT.into()),
            Ok(VALID_VERDICT.into()),
        ]);
        let h = harness(llm);
        h.ledger.fail_appends();
        let result = h.orchestrator.handle(&request("cek", complete_files()));
        // The caller still gets a complete, well-formed result.
        let (links, _) = complete_outcome(result);
        assert!(links.get(DocumentKind::Kk).is_some());
    }

    #[test]
    fn resubmission_appends_a_second_row() {
        let llm = MockLlmClient::scripted(vec![
            Ok("ktp".into()),
            Ok(VALID_VERDICT.into()),
            Ok(VALID_VERDICT.into()),
            Ok(VALID_VERDICT.into()),
            Ok("ktp".into()),
            Ok(VALID_VERDICT.into()),
            Ok(VALID_VERDICT.into()),
            Ok(VALID_VERDICT.into()),
        ]);
        let h = harness(llm);
        h.orchestrator.handle(&request("kirim", complete_files()));
        h.orchestrator.handle(&request("kirim ulang", complete_files()));
        assert_eq!(h.ledger.rows().len(), 2);
        // Same user resolves to the same folder both times.
        assert_eq!(h.store.folder_count(), 1);
    }

    // ── Ordering ────────────────────────────────────────────

    #[test]
    fn result_maps_serialize_in_fixed_kind_order() {
        let llm = MockLlmClient::scripted(vec![
            Ok("ktp".into()),
            Ok(VALID_VERDICT.into()),
            Ok(VALID_VERDICT.into()),
            Ok(VALID_VERDICT.into()),
        ]);
        let h = harness(llm);
        let result = h.orchestrator.handle(&request("cek", complete_files()));
        let json = serde_json::to_string(&result).unwrap();

        let kk = json.find("\"kk\"").unwrap();
        let akta = json.find("\"akta\"").unwrap();
        let sp = json.find("\"surat_pengantar\"").unwrap();
        assert!(kk < akta && akta < sp, "key order must be kk, akta, surat_pengantar: {json}");
    }
}
