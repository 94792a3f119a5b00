use std::collections::HashMap;
use std::sync::Mutex;

use serde::Deserialize;
use serde_json::json;

use super::StorageError;

const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// Durable, user-scoped file storage.
///
/// `find_or_create_folder` must be idempotent: two concurrent callers
/// racing to create the namespace for one user must end up with the same
/// folder (creation is safe to retry, "already exists" is success).
/// `upload` reports failure as `None`; a missing link degrades one kind
/// without aborting the rest of the request.
pub trait DocumentStore {
    fn find_or_create_folder(&self, user_id: &str) -> Result<String, StorageError>;
    fn upload(&self, bytes: &[u8], filename: &str, folder_id: &str) -> Option<String>;
}

/// Google Drive v3 store: one folder per user under a configured parent,
/// files uploaded into it, web view links recorded.
pub struct GoogleDriveStore {
    base_url: String,
    access_token: String,
    parent_folder_id: Option<String>,
    client: reqwest::blocking::Client,
}

impl GoogleDriveStore {
    pub fn new(access_token: &str, parent_folder_id: Option<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            access_token: access_token.to_string(),
            parent_folder_id,
            client,
        }
    }

    fn list_folder(&self, user_id: &str) -> Result<Option<String>, StorageError> {
        let url = format!("{}/drive/v3/files", self.base_url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&[
                ("q", folder_query(user_id, self.parent_folder_id.as_deref())),
                ("spaces", "drive".to_string()),
                ("fields", "files(id, name)".to_string()),
            ])
            .send()
            .map_err(|e| self.map_transport(e))?;

        let parsed: FileListResponse = check_status(response)?
            .json()
            .map_err(|e| StorageError::ResponseParsing(e.to_string()))?;
        Ok(parsed.files.into_iter().next().map(|f| f.id))
    }

    fn create_folder(&self, user_id: &str) -> Result<String, StorageError> {
        let url = format!("{}/drive/v3/files", self.base_url);
        let mut metadata = json!({
            "name": user_id,
            "mimeType": FOLDER_MIME_TYPE,
        });
        if let Some(parent) = &self.parent_folder_id {
            metadata["parents"] = json!([parent]);
        }

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .query(&[("fields", "id")])
            .json(&metadata)
            .send()
            .map_err(|e| self.map_transport(e))?;

        let parsed: FileResource = check_status(response)?
            .json()
            .map_err(|e| StorageError::ResponseParsing(e.to_string()))?;
        Ok(parsed.id)
    }

    fn upload_bytes(
        &self,
        bytes: &[u8],
        filename: &str,
        folder_id: &str,
    ) -> Result<String, StorageError> {
        // Two-step simple upload: push the media, then name it and move it
        // into the user folder in one metadata patch.
        let upload_url = format!(
            "{}/upload/drive/v3/files?uploadType=media",
            self.base_url
        );
        let response = self
            .client
            .post(&upload_url)
            .bearer_auth(&self.access_token)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(bytes.to_vec())
            .send()
            .map_err(|e| self.map_transport(e))?;
        let created: FileResource = check_status(response)?
            .json()
            .map_err(|e| StorageError::ResponseParsing(e.to_string()))?;

        let patch_url = format!("{}/drive/v3/files/{}", self.base_url, created.id);
        let response = self
            .client
            .patch(&patch_url)
            .bearer_auth(&self.access_token)
            .query(&[
                ("addParents", folder_id),
                ("fields", "id, webViewLink"),
            ])
            .json(&json!({ "name": filename }))
            .send()
            .map_err(|e| self.map_transport(e))?;
        let patched: FileResource = check_status(response)?
            .json()
            .map_err(|e| StorageError::ResponseParsing(e.to_string()))?;

        patched
            .web_view_link
            .ok_or_else(|| StorageError::ResponseParsing("missing webViewLink".into()))
    }

    fn map_transport(&self, e: reqwest::Error) -> StorageError {
        if e.is_connect() {
            StorageError::Connection(self.base_url.clone())
        } else {
            StorageError::HttpClient(e.to_string())
        }
    }
}

/// Drive search expression for the per-user folder. Single quotes in the
/// user id are escaped so the expression stays well-formed.
fn folder_query(user_id: &str, parent_folder_id: Option<&str>) -> String {
    let name = user_id.replace('\\', "\\\\").replace('\'', "\\'");
    let mut query = format!(
        "mimeType='{FOLDER_MIME_TYPE}' and name='{name}' and trashed=false"
    );
    if let Some(parent) = parent_folder_id {
        query.push_str(&format!(" and '{parent}' in parents"));
    }
    query
}

pub(crate) fn check_status(
    response: reqwest::blocking::Response,
) -> Result<reqwest::blocking::Response, StorageError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(StorageError::Api {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

#[derive(Deserialize)]
struct FileListResponse {
    #[serde(default)]
    files: Vec<FileResource>,
}

#[derive(Deserialize)]
struct FileResource {
    id: String,
    #[serde(rename = "webViewLink")]
    web_view_link: Option<String>,
}

impl DocumentStore for GoogleDriveStore {
    fn find_or_create_folder(&self, user_id: &str) -> Result<String, StorageError> {
        if let Some(id) = self.list_folder(user_id)? {
            return Ok(id);
        }
        // Lost the race with a concurrent creator at worst; creating is
        // still success for this caller (first-writer-wins).
        self.create_folder(user_id)
    }

    fn upload(&self, bytes: &[u8], filename: &str, folder_id: &str) -> Option<String> {
        match self.upload_bytes(bytes, filename, folder_id) {
            Ok(link) => Some(link),
            Err(e) => {
                tracing::warn!(filename = filename, error = %e, "Drive upload failed");
                None
            }
        }
    }
}

/// In-memory store for tests: folders are handed out idempotently per
/// user, uploads are recorded, and individual filenames can be made to
/// fail to exercise the degraded-link path.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    folders: Mutex<HashMap<String, String>>,
    uploads: Mutex<Vec<(String, String)>>,
    failing: Mutex<Vec<String>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every upload of `filename` fail from now on.
    pub fn fail_upload_of(&self, filename: &str) {
        if let Ok(mut failing) = self.failing.lock() {
            failing.push(filename.to_string());
        }
    }

    /// (folder_id, filename) pairs recorded so far.
    pub fn uploads(&self) -> Vec<(String, String)> {
        self.uploads.lock().map(|u| u.clone()).unwrap_or_default()
    }

    pub fn folder_count(&self) -> usize {
        self.folders.lock().map(|f| f.len()).unwrap_or(0)
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn find_or_create_folder(&self, user_id: &str) -> Result<String, StorageError> {
        let mut folders = self
            .folders
            .lock()
            .map_err(|_| StorageError::HttpClient("store lock poisoned".into()))?;
        let next_id = format!("folder-{}", folders.len() + 1);
        Ok(folders.entry(user_id.to_string()).or_insert(next_id).clone())
    }

    fn upload(&self, _bytes: &[u8], filename: &str, folder_id: &str) -> Option<String> {
        if let Ok(failing) = self.failing.lock() {
            if failing.iter().any(|f| f == filename) {
                return None;
            }
        }
        if let Ok(mut uploads) = self.uploads.lock() {
            uploads.push((folder_id.to_string(), filename.to_string()));
        }
        Some(format!("https://drive.local/{folder_id}/{filename}"))
    }
}
