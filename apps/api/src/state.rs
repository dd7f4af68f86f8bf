use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::analysis::ResumeAnalyzer;
use crate::config::Config;
use crate::models::session::Session;
use crate::store::JsonStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: JsonStore,
    /// Pluggable analysis backend. Default: HeuristicAnalyzer. Swap via ANALYZER env.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
    /// Live admin sessions, token → session. Process-local by design; an
    /// explicit session object replaces any global "logged in" flag.
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub config: Config,
}
