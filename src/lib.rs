pub mod assembler;
pub mod config;
pub mod error;
pub mod handlers;
pub mod inference;
pub mod models;
pub mod pipeline;
pub mod projection;
pub mod sample;
pub mod store;

use std::sync::Arc;

use crate::inference::InferenceService;
use crate::sample::ChartData;

/// Shared handler state. The model store is loaded once at startup and
/// immutable afterwards; the explorer variant additionally carries the
/// precomputed chart views over the sample dataset.
#[derive(Clone)]
pub struct AppState {
    pub service: InferenceService,
    pub charts: Option<Arc<Vec<ChartData>>>,
}
