pub mod admin;
pub mod health;
pub mod resumes;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Upload pipeline
        .route("/api/v1/resumes", post(resumes::handle_upload))
        // Admin panel
        .route("/api/v1/admin/login", post(admin::handle_login))
        .route("/api/v1/admin/logout", post(admin::handle_logout))
        .route("/api/v1/admin/records", get(admin::handle_list_records))
        .route(
            "/api/v1/admin/records/export",
            get(admin::handle_export_csv),
        )
        .route(
            "/api/v1/admin/records/:id/file",
            get(admin::handle_download),
        )
        .route("/api/v1/admin/records/:id", delete(admin::handle_delete))
        .with_state(state)
}
