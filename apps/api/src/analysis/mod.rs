//! Heuristic resume analysis — pluggable, trait-based backend.
//!
//! Default: `HeuristicAnalyzer` (pure-Rust, deterministic, fully testable).
//! `DegradedAnalyzer` is the explicit no-model mode: empty skills and an
//! `"N/A"` name, never a crash path.
//!
//! `AppState` holds an `Arc<dyn ResumeAnalyzer>`, swapped at startup via the
//! `ANALYZER` env var.

pub mod entities;
pub mod heuristic;
pub mod phrases;
pub mod tokens;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::models::record::Level;

pub use heuristic::HeuristicAnalyzer;

/// Name sentinel reported when no analysis backend is available.
pub const NO_MODEL_SENTINEL: &str = "N/A";

/// Everything the analyzer can tell about one document's text.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Ordered-unique skill strings (sorted for deterministic output).
    pub skills: Vec<String>,
    /// First Person entity in document order; empty if none found.
    pub name: String,
    pub experience_years: u32,
    pub level: Level,
}

/// The analyzer capability seam. Implement this to swap backends without
/// touching the upload handler.
#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Analysis;
}

/// No-model mode: deliberately degraded output rather than a failure.
pub struct DegradedAnalyzer;

#[async_trait]
impl ResumeAnalyzer for DegradedAnalyzer {
    async fn analyze(&self, _text: &str) -> Analysis {
        Analysis {
            skills: Vec::new(),
            name: NO_MODEL_SENTINEL.to_string(),
            experience_years: 0,
            level: Level::from_years(0),
        }
    }
}

/// Resolves a backend by name; anything other than "degraded" gets the
/// default heuristic backend.
pub fn analyzer_from_name(name: &str) -> Arc<dyn ResumeAnalyzer> {
    match name {
        "degraded" => Arc::new(DegradedAnalyzer),
        _ => Arc::new(HeuristicAnalyzer),
    }
}
