//! Command-line driver around the intake orchestrator.
//!
//! Usage: pandu <user_id> <message> [kind=path ...]
//! where kind is one of kk, akta, surat_pengantar and path points at a
//! PDF. Prints the resulting submission JSON on stdout.

use std::collections::HashMap;
use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use pandu::ai::gemini::GeminiClient;
use pandu::config::{self, Config};
use pandu::extraction::PdfTextExtractor;
use pandu::models::{DocumentKind, SubmissionRequest, UploadedFile};
use pandu::orchestrator::SubmissionOrchestrator;
use pandu::storage::{GoogleDriveStore, GoogleSheetsLedger};

const USAGE: &str = "usage: pandu <user_id> <message> [kind=path ...]";

const GEMINI_TIMEOUT_SECS: u64 = 60;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("pandu: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    let mut args = std::env::args().skip(1);
    let user_id = args.next().ok_or(USAGE)?;
    let message = args.next().ok_or(USAGE)?;

    let mut files = HashMap::new();
    for arg in args {
        let (kind, path) = arg.split_once('=').ok_or(USAGE)?;
        let kind: DocumentKind = kind.parse()?;
        let bytes = std::fs::read(path)?;
        let filename = Path::new(path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("{}.pdf", kind.as_str()));
        files.insert(kind, UploadedFile::new(&filename, bytes));
    }

    let orchestrator = SubmissionOrchestrator::new(
        Box::new(GeminiClient::new(
            &config.gemini_base_url,
            &config.gemini_api_key,
            &config.gemini_model,
            GEMINI_TIMEOUT_SECS,
        )),
        Box::new(PdfTextExtractor),
        Box::new(GoogleDriveStore::new(
            &config.google_access_token,
            config.drive_parent_folder_id.clone(),
        )),
        Box::new(GoogleSheetsLedger::new(
            &config.google_access_token,
            &config.sheet_id,
        )),
    );

    let result = orchestrator.handle(&SubmissionRequest {
        user_id,
        message,
        files,
    });
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
