//! Upload pipeline: store file → extract text → analyze → recommend → persist.

use std::path::Path;

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::extract_text;
use crate::models::record::{Record, TIMESTAMP_FORMAT};
use crate::recommend::{recommend, DEFAULT_TOP_N};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub record: Record,
    pub recommended_courses: Vec<String>,
}

/// POST /api/v1/resumes
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let (original_name, data) = read_file_field(&mut multipart).await?;

    // Opaque-id storage: the stored path is derived from the record id, and
    // the client-supplied filename survives only as metadata.
    let record_id = Uuid::new_v4();
    let stored_name = match sanitized_extension(&original_name) {
        Some(ext) => format!("{record_id}.{ext}"),
        None => record_id.to_string(),
    };
    let save_path = state.config.upload_dir.join(&stored_name);
    tokio::fs::write(&save_path, &data)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to store upload: {e}")))?;

    let text = extract_text(&save_path);
    if text.is_empty() {
        // Empty means "no text available" (corrupt, image-only, or zero-byte
        // input), which still produces a record with degraded fields.
        warn!(filename = %original_name, "no text available from upload");
    }

    let analysis = state.analyzer.analyze(&text).await;
    let recommended_courses = recommend(&analysis.skills, DEFAULT_TOP_N);

    let record = Record {
        id: record_id,
        name: if analysis.name.is_empty() {
            original_name.clone()
        } else {
            analysis.name
        },
        filename: original_name,
        skills: analysis.skills,
        experience: analysis.experience_years,
        level: analysis.level,
        timestamp: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
        file_path: save_path.to_string_lossy().into_owned(),
    };
    state.store.append(record.clone())?;
    info!(id = %record.id, filename = %record.filename, "resume analysis stored");

    Ok(Json(UploadResponse {
        record,
        recommended_courses,
    }))
}

async fn read_file_field(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("resume").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
            return Ok((filename, data));
        }
    }
    Err(AppError::Validation("missing 'file' field".to_string()))
}

/// Extension taken from the client filename, restricted to short alphanumeric
/// suffixes so it is safe to embed in the stored name.
fn sanitized_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .filter(|e| !e.is_empty() && e.len() <= 10 && e.chars().all(|c| c.is_ascii_alphanumeric()))
}
