//! Pandu: conversational intake assistant for KTP applications.
//!
//! Routes free-text resident messages to a question-answering path or a
//! document-collection path, tracks which required documents a submission
//! still lacks, validates supplied documents with a two-tier policy
//! (token pre-filter + semantic model check), and records completed
//! submissions to per-user file storage and an append-only ledger.

pub mod ai; // Gemini client, intent routing, Q&A, semantic document check
pub mod config;
pub mod extraction; // PDF text extraction
pub mod models;
pub mod orchestrator; // per-request decision core
pub mod requirements; // fixed requirement table
pub mod sanity; // token-presence pre-filter
pub mod storage; // Drive file store + Sheets ledger
