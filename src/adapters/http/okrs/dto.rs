//! JSON request/response types for the OKR endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{KrScore, ValidationError};
use crate::domain::okr::{KeyResult, Okr, OkrStatus, OkrType, ProgressSnapshot, ProgressUpdate};

use super::super::cycles::dto::{default_limit, default_page};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateOkrRequest {
    pub objective: String,
    pub okr_type: OkrType,
    pub parent_okr_id: Option<String>,
    /// Defaults to the caller when absent.
    pub assigned_to: Option<String>,
    pub key_results: Vec<KeyResultRequest>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeyResultRequest {
    pub title: String,
    pub target_value: f64,
    pub unit: Option<String>,
}

impl KeyResultRequest {
    pub fn into_key_result(self) -> Result<KeyResult, ValidationError> {
        KeyResult::new(self.title, self.target_value, self.unit)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProgressRequest {
    pub key_result_index: usize,
    pub current_value: f64,
    pub score: u8,
}

impl ProgressRequest {
    pub fn into_update(self) -> Result<ProgressUpdate, ValidationError> {
        Ok(ProgressUpdate {
            key_result_index: self.key_result_index,
            current_value: self.current_value,
            score: KrScore::new(self.score)?,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListOkrsParams {
    pub okr_type: Option<OkrType>,
    pub status: Option<OkrStatus>,
    pub assigned_to: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct OkrResponse {
    pub id: String,
    pub objective: String,
    pub okr_type: OkrType,
    pub status: OkrStatus,
    pub parent_okr_id: Option<String>,
    pub assigned_to: String,
    pub created_by: String,
    pub key_results: Vec<KeyResult>,
    pub progress_snapshots: Vec<ProgressSnapshot>,
    pub average_score: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Okr> for OkrResponse {
    fn from(okr: &Okr) -> Self {
        Self {
            id: okr.id().to_string(),
            objective: okr.objective().to_string(),
            okr_type: okr.okr_type(),
            status: okr.status(),
            parent_okr_id: okr.parent_okr_id().map(|id| id.to_string()),
            assigned_to: okr.assigned_to().to_string(),
            created_by: okr.created_by().to_string(),
            key_results: okr.key_results().to_vec(),
            progress_snapshots: okr.progress_snapshots().to_vec(),
            average_score: okr.average_score(),
            created_at: okr.created_at().to_rfc3339(),
            updated_at: okr.updated_at().to_rfc3339(),
        }
    }
}

/// Progress updates return both the new OKR state and the snapshot that
/// was appended.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressResponse {
    pub okr: OkrResponse,
    pub snapshot: ProgressSnapshot,
}
