//! Model store: loads the two pipeline artifacts once at startup.
//!
//! The store is built explicitly in `main` and shared behind an `Arc`; after
//! construction it is never mutated. A missing or corrupt artifact is fatal —
//! the process cannot serve any request without both pipelines.

use std::fs;

use crate::config::AppConfig;
use crate::pipeline::{InvestmentClassifier, PipelineError, RegressorPipeline};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read model artifact {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse model artifact {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("model artifact {path} is inconsistent: {source}")]
    Invalid {
        path: String,
        source: PipelineError,
    },
}

#[derive(Debug)]
pub struct ModelStore {
    pub regressor: RegressorPipeline,
    pub classifier: InvestmentClassifier,
}

impl ModelStore {
    pub fn load(config: &AppConfig) -> Result<Self, StoreError> {
        log::info!("Loading regressor pipeline from {}", config.regressor_path);
        let regressor: RegressorPipeline = read_artifact(&config.regressor_path)?;
        regressor.validate().map_err(|source| StoreError::Invalid {
            path: config.regressor_path.clone(),
            source,
        })?;

        log::info!("Loading investment classifier from {}", config.classifier_path);
        let classifier: InvestmentClassifier = read_artifact(&config.classifier_path)?;
        classifier.validate().map_err(|source| StoreError::Invalid {
            path: config.classifier_path.clone(),
            source,
        })?;

        log::info!(
            "Model store ready ({} regressor features, {} classifier features)",
            regressor.preprocessor.features.len(),
            classifier.preprocessor.features.len()
        );
        Ok(Self {
            regressor,
            classifier,
        })
    }
}

fn read_artifact<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, StoreError> {
    let text = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| StoreError::Parse {
        path: path.to_string(),
        source,
    })
}
