use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use serde_json::json;

use super::drive::check_status;
use super::StorageError;
use crate::models::{DocumentKind, LedgerRow};

const DEFAULT_API_BASE_URL: &str = "https://sheets.googleapis.com";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Worksheet tab holding the submission rows.
pub const WORKSHEET_NAME: &str = "KTP_Submissions";

/// Fixed column layout of the submission worksheet. `row_cells` must stay
/// in sync with this list.
pub const LEDGER_COLUMNS: [&str; 8] = [
    "timestamp",
    "user_id",
    "flow",
    "status",
    "kk_link",
    "akta_link",
    "surat_pengantar_link",
    "notes",
];

/// Append-only record of submission outcomes. Audit evidence only: there
/// is no update-by-key or query path.
pub trait SubmissionLedger {
    fn append_row(&self, row: &LedgerRow) -> Result<(), StorageError>;
}

/// Flatten a row into worksheet cells, one per `LEDGER_COLUMNS` entry.
/// Missing links become empty cells.
fn row_cells(row: &LedgerRow) -> Vec<String> {
    let mut cells = vec![
        row.timestamp.clone(),
        row.user_id.clone(),
        row.flow.clone(),
        row.status.clone(),
    ];
    for kind in DocumentKind::ALL {
        cells.push(row.links.get(kind).clone().unwrap_or_default());
    }
    cells.push(row.notes.clone());
    cells
}

/// Google Sheets v4 ledger: each submission appends one row to the
/// configured spreadsheet.
pub struct GoogleSheetsLedger {
    base_url: String,
    access_token: String,
    sheet_id: String,
    client: reqwest::blocking::Client,
}

impl GoogleSheetsLedger {
    pub fn new(access_token: &str, sheet_id: &str) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            access_token: access_token.to_string(),
            sheet_id: sheet_id.to_string(),
            client,
        }
    }
}

impl SubmissionLedger for GoogleSheetsLedger {
    fn append_row(&self, row: &LedgerRow) -> Result<(), StorageError> {
        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}:append",
            self.base_url, self.sheet_id, WORKSHEET_NAME
        );
        let body = json!({ "values": [row_cells(row)] });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .query(&[
                ("valueInputOption", "USER_ENTERED"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    StorageError::Connection(self.base_url.clone())
                } else {
                    StorageError::HttpClient(e.to_string())
                }
            })?;

        check_status(response)?;
        Ok(())
    }
}

/// In-memory ledger for tests. Appended rows can be read back, and the
/// ledger can be toggled to fail to exercise the best-effort path.
#[derive(Default)]
pub struct InMemoryLedger {
    rows: Mutex<Vec<LedgerRow>>,
    failing: AtomicBool,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_appends(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn rows(&self) -> Vec<LedgerRow> {
        self.rows.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl SubmissionLedger for InMemoryLedger {
    fn append_row(&self, row: &LedgerRow) -> Result<(), StorageError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::Api {
                status: 503,
                body: "ledger unavailable".into(),
            });
        }
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| StorageError::HttpClient("ledger lock poisoned".into()))?;
        rows.push(row.clone());
        Ok(())
    }
}
