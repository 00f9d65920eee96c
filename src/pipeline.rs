//! Pre-fitted pipeline artifacts.
//!
//! A pipeline artifact is an opaque serialized object produced by an external
//! training run: a fitted preprocessor (per-column numeric scaling or one-hot
//! encoding) plus a linear head. Nothing outside this module looks inside an
//! artifact; callers hand it a feature row and get a prediction back.

use serde::Deserialize;

use crate::assembler::{FeatureRow, FeatureValue};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("feature row does not match pipeline schema (missing: [{}]; unexpected: [{}])",
        missing.join(", "), unexpected.join(", "))]
    SchemaMismatch {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    #[error("artifact weight vector has {actual} entries but preprocessing produces {expected}")]
    WeightMismatch { expected: usize, actual: usize },

    #[error("column {column} carries a {found} value but the pipeline expects {expected}")]
    ValueKind {
        column: String,
        expected: &'static str,
        found: &'static str,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureSpec {
    pub name: String,
    #[serde(flatten)]
    pub encoding: Encoding,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "encoding", rename_all = "snake_case")]
pub enum Encoding {
    /// Standardized numeric column: `(value - mean) / scale`.
    Numeric { mean: f64, scale: f64 },
    /// One-hot encoded categorical column. Levels not seen during training
    /// encode as all zeros, matching the training-time `handle_unknown`
    /// behaviour, so out-of-vocabulary values extrapolate silently.
    OneHot { levels: Vec<String> },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Preprocessor {
    pub features: Vec<FeatureSpec>,
}

impl Preprocessor {
    /// Width of the encoded vector this preprocessor produces.
    pub fn width(&self) -> usize {
        self.features
            .iter()
            .map(|spec| match &spec.encoding {
                Encoding::Numeric { .. } => 1,
                Encoding::OneHot { levels } => levels.len(),
            })
            .sum()
    }

    /// Encodes one feature row. The row's column set must match the fitted
    /// schema exactly; any drift fails loudly instead of predicting on a
    /// silently misaligned input.
    pub fn encode(&self, row: &FeatureRow) -> Result<Vec<f64>, PipelineError> {
        self.check_schema(row)?;

        let mut encoded = Vec::with_capacity(self.width());
        for spec in &self.features {
            // check_schema guarantees presence
            let value = row.get(&spec.name).unwrap();
            match (&spec.encoding, value) {
                (Encoding::Numeric { mean, scale }, FeatureValue::Num(v)) => {
                    // zero-variance columns are fitted with unit scale
                    let scale = if *scale == 0.0 { 1.0 } else { *scale };
                    encoded.push((v - mean) / scale);
                }
                (Encoding::OneHot { levels }, FeatureValue::Cat(v)) => {
                    for level in levels {
                        encoded.push(if level == v { 1.0 } else { 0.0 });
                    }
                }
                (Encoding::Numeric { .. }, FeatureValue::Cat(_)) => {
                    return Err(PipelineError::ValueKind {
                        column: spec.name.clone(),
                        expected: "numeric",
                        found: "categorical",
                    });
                }
                (Encoding::OneHot { .. }, FeatureValue::Num(_)) => {
                    return Err(PipelineError::ValueKind {
                        column: spec.name.clone(),
                        expected: "categorical",
                        found: "numeric",
                    });
                }
            }
        }
        Ok(encoded)
    }

    fn check_schema(&self, row: &FeatureRow) -> Result<(), PipelineError> {
        let missing: Vec<String> = self
            .features
            .iter()
            .filter(|spec| row.get(&spec.name).is_none())
            .map(|spec| spec.name.clone())
            .collect();
        let unexpected: Vec<String> = row
            .columns()
            .filter(|name| !self.features.iter().any(|spec| &spec.name == *name))
            .map(|name| name.to_string())
            .collect();
        if missing.is_empty() && unexpected.is_empty() {
            Ok(())
        } else {
            Err(PipelineError::SchemaMismatch { missing, unexpected })
        }
    }
}

/// Fitted regression pipeline: preprocessor plus linear head.
#[derive(Debug, Clone, Deserialize)]
pub struct RegressorPipeline {
    pub preprocessor: Preprocessor,
    pub weights: Vec<f64>,
    pub intercept: f64,
}

impl RegressorPipeline {
    pub fn validate(&self) -> Result<(), PipelineError> {
        check_width(&self.preprocessor, &self.weights)
    }

    pub fn predict(&self, row: &FeatureRow) -> Result<f64, PipelineError> {
        linear_score(&self.preprocessor, &self.weights, self.intercept, row)
    }
}

/// Fitted binary classification pipeline: preprocessor plus logistic head.
#[derive(Debug, Clone, Deserialize)]
pub struct InvestmentClassifier {
    pub preprocessor: Preprocessor,
    pub weights: Vec<f64>,
    pub intercept: f64,
}

impl InvestmentClassifier {
    pub fn validate(&self) -> Result<(), PipelineError> {
        check_width(&self.preprocessor, &self.weights)
    }

    /// Probability of the positive ("good investment") class, in [0, 1].
    pub fn predict_proba(&self, row: &FeatureRow) -> Result<f64, PipelineError> {
        let score = linear_score(&self.preprocessor, &self.weights, self.intercept, row)?;
        Ok(1.0 / (1.0 + (-score).exp()))
    }

    pub fn predict(&self, row: &FeatureRow) -> Result<bool, PipelineError> {
        Ok(self.predict_proba(row)? >= 0.5)
    }
}

fn check_width(preprocessor: &Preprocessor, weights: &[f64]) -> Result<(), PipelineError> {
    let expected = preprocessor.width();
    if weights.len() == expected {
        Ok(())
    } else {
        Err(PipelineError::WeightMismatch {
            expected,
            actual: weights.len(),
        })
    }
}

fn linear_score(
    preprocessor: &Preprocessor,
    weights: &[f64],
    intercept: f64,
    row: &FeatureRow,
) -> Result<f64, PipelineError> {
    let encoded = preprocessor.encode(row)?;
    if encoded.len() != weights.len() {
        return Err(PipelineError::WeightMismatch {
            expected: encoded.len(),
            actual: weights.len(),
        });
    }
    let dot: f64 = encoded.iter().zip(weights).map(|(x, w)| x * w).sum();
    Ok(dot + intercept)
}
