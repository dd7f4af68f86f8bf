//! Admin panel: login/logout, record listing, CSV export, per-record
//! download and delete. Every handler below `login` requires a live session
//! via the `AdminSession` extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path, State},
    http::{header, request::Parts, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::record::Record;
use crate::models::session::Session;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Session extraction
// ────────────────────────────────────────────────────────────────────────────

/// A validated admin session, extracted from the `Authorization: Bearer`
/// header. Expired tokens are evicted on sight.
pub struct AdminSession {
    pub token: Uuid,
}

#[async_trait]
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or(AppError::Unauthorized)?;
        let mut sessions = state
            .sessions
            .lock()
            .map_err(|_| AppError::Internal(anyhow::anyhow!("session lock poisoned")))?;
        match sessions.get(&token) {
            Some(session) if !session.is_expired(Utc::now()) => Ok(AdminSession { token }),
            Some(_) => {
                sessions.remove(&token);
                Err(AppError::Unauthorized)
            }
            None => Err(AppError::Unauthorized),
        }
    }
}

fn bearer_token(parts: &Parts) -> Option<Uuid> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .and_then(|t| Uuid::parse_str(t.trim()).ok())
}

// ────────────────────────────────────────────────────────────────────────────
// Login / logout
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: Uuid,
    pub expires_at: DateTime<Utc>,
}

/// POST /api/v1/admin/login
///
/// Plaintext credential check against config. A placeholder login, not a
/// security boundary.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    if req.username != state.config.admin_username || req.password != state.config.admin_password {
        warn!(username = %req.username, "rejected admin login");
        return Err(AppError::Unauthorized);
    }

    let session = Session::issue(state.config.session_ttl_minutes);
    let response = LoginResponse {
        token: session.token,
        expires_at: session.expires_at,
    };
    state
        .sessions
        .lock()
        .map_err(|_| AppError::Internal(anyhow::anyhow!("session lock poisoned")))?
        .insert(session.token, session);
    info!("admin login successful");
    Ok(Json(response))
}

/// POST /api/v1/admin/logout
pub async fn handle_logout(
    admin: AdminSession,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .lock()
        .map_err(|_| AppError::Internal(anyhow::anyhow!("session lock poisoned")))?
        .remove(&admin.token);
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Record administration
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RecordListResponse {
    pub records: Vec<Record>,
    pub total: usize,
}

/// GET /api/v1/admin/records
pub async fn handle_list_records(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> Result<Json<RecordListResponse>, AppError> {
    let records = state.store.list()?;
    let total = records.len();
    Ok(Json(RecordListResponse { records, total }))
}

/// GET /api/v1/admin/records/export
pub async fn handle_export_csv(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let records = state.store.list()?;
    let csv = records_to_csv(&records).map_err(AppError::Internal)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"records.csv\"",
            ),
        ],
        csv,
    ))
}

/// GET /api/v1/admin/records/:id/file
pub async fn handle_download(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let records = state.store.list()?;
    let record = records
        .into_iter()
        .find(|r| r.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Record {id} not found")))?;

    let bytes = tokio::fs::read(&record.file_path).await.map_err(|e| {
        warn!(id = %id, path = %record.file_path, error = %e, "stored file unavailable");
        AppError::NotFound(format!("Stored file for record {id} is missing on disk"))
    })?;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        record.filename.replace(['"', '\r', '\n'], "_")
    );
    Ok((
        [
            (
                header::CONTENT_TYPE,
                "application/octet-stream".to_string(),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub id: Uuid,
    /// False when the stored file was already gone; the metadata deletion
    /// proceeds regardless.
    pub file_removed: bool,
}

/// DELETE /api/v1/admin/records/:id
pub async fn handle_delete(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, AppError> {
    let removed = state.store.remove(id)?;
    let file_removed = match tokio::fs::remove_file(&removed.file_path).await {
        Ok(()) => true,
        Err(e) => {
            warn!(id = %id, path = %removed.file_path, error = %e, "stored file could not be removed");
            false
        }
    };
    info!(id = %id, filename = %removed.filename, "record deleted");
    Ok(Json(DeleteResponse { id, file_removed }))
}

fn records_to_csv(records: &[Record]) -> anyhow::Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "id",
        "name",
        "filename",
        "skills",
        "experience",
        "level",
        "timestamp",
        "file_path",
    ])?;
    for record in records {
        writer.write_record([
            record.id.to_string(),
            record.name.clone(),
            record.filename.clone(),
            record.skills.join("; "),
            record.experience.to_string(),
            record.level.to_string(),
            record.timestamp.clone(),
            record.file_path.clone(),
        ])?;
    }
    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush CSV writer: {e}"))
}
