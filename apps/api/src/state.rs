use std::sync::Arc;

use crate::config::Config;
use crate::parser::ResumeParser;

/// Shared application state injected into all route handlers via Axum extractors.
/// The parser holds only immutable configuration, so one instance serves
/// all requests concurrently with no coordination.
#[derive(Clone)]
pub struct AppState {
    pub parser: Arc<ResumeParser>,
    pub config: Config,
}
