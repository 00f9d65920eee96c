//! Inference invoker: one record in, one prediction out.

use std::sync::Arc;

use crate::assembler::assemble;
use crate::models::PropertyRecord;
use crate::pipeline::PipelineError;
use crate::store::ModelStore;

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Estimated price per square foot, clamped at zero.
    pub price_per_sqft: f64,
    pub good_investment: bool,
    /// Positive-class probability, in [0, 1].
    pub probability: f64,
}

/// Immutable handle over the loaded pipelines. Cheap to clone into handler
/// state; prediction is a pure function of the record and the artifacts.
#[derive(Clone)]
pub struct InferenceService {
    store: Arc<ModelStore>,
}

impl InferenceService {
    pub fn new(store: Arc<ModelStore>) -> Self {
        Self { store }
    }

    pub fn analyze(&self, record: &PropertyRecord) -> Result<Prediction, PipelineError> {
        let row = assemble(record);
        let raw_price = self.store.regressor.predict(&row)?;
        let price_per_sqft = raw_price.max(0.0);
        let probability = self.store.classifier.predict_proba(&row)?;
        Ok(Prediction {
            price_per_sqft,
            good_investment: probability >= 0.5,
            probability,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::pipeline::{
        Encoding, FeatureSpec, InvestmentClassifier, Preprocessor, RegressorPipeline,
    };

    fn fixed_record() -> PropertyRecord {
        serde_json::from_value(serde_json::json!({
            "State": "Maharashtra",
            "City": "Mumbai",
            "Property_Type": "Apartment",
            "BHK": 2,
            "Size_in_SqFt": 1000,
            "Furnished_Status": "Unfurnished",
            "Floor_No": 2,
            "Total_Floors": 10,
            "Nearby_Schools": 3,
            "Nearby_Hospitals": 2,
            "Public_Transport_Accessibility": 4,
            "Parking_Space": "Yes",
            "Security": "Yes",
            "Amenities": 5,
            "Availability_Status": "Ready to Move",
            "Property_Age": 10
        }))
        .unwrap()
    }

    fn checked_in_store() -> ModelStore {
        let config = AppConfig {
            regressor_path: "models/regressor_pipeline.json".to_string(),
            classifier_path: "models/investment_model.json".to_string(),
            sample_dataset_path: "data/sample_properties.csv".to_string(),
            port: 0,
        };
        ModelStore::load(&config).unwrap()
    }

    #[test]
    fn prediction_is_deterministic_for_a_fixed_record() {
        let service = InferenceService::new(Arc::new(checked_in_store()));
        let record = fixed_record();
        let first = service.analyze(&record).unwrap();
        let second = service.analyze(&record).unwrap();
        assert_eq!(first, second);
        assert!(first.price_per_sqft >= 0.0);
        assert!((0.0..=1.0).contains(&first.probability));
        assert_eq!(first.good_investment, first.probability >= 0.5);
    }

    /// Full-schema preprocessor so toy artifacts accept a real record.
    fn full_schema_preprocessor() -> Preprocessor {
        let numeric = |name: &str| FeatureSpec {
            name: name.to_string(),
            encoding: Encoding::Numeric {
                mean: 0.0,
                scale: 1.0,
            },
        };
        let one_hot = |name: &str, levels: &[&str]| FeatureSpec {
            name: name.to_string(),
            encoding: Encoding::OneHot {
                levels: levels.iter().map(|level| level.to_string()).collect(),
            },
        };
        Preprocessor {
            features: vec![
                one_hot("State", &["Maharashtra", "Karnataka", "Delhi", "Tamil Nadu"]),
                one_hot("City", &["Mumbai", "Pune"]),
                one_hot("Property_Type", &["Apartment", "Villa", "Independent House"]),
                numeric("BHK"),
                numeric("Size_in_SqFt"),
                one_hot(
                    "Furnished_Status",
                    &["Unfurnished", "Semi-Furnished", "Furnished"],
                ),
                numeric("Floor_No"),
                numeric("Total_Floors"),
                numeric("Nearby_Schools"),
                numeric("Nearby_Hospitals"),
                numeric("Public_Transport_Accessibility"),
                one_hot("Parking_Space", &["Yes", "No"]),
                one_hot("Security", &["Yes", "No"]),
                numeric("Amenities"),
                one_hot("Availability_Status", &["Ready to Move", "Under Construction"]),
                numeric("Property_Age"),
            ],
        }
    }

    #[test]
    fn negative_regressor_output_is_clamped_to_zero() {
        let preprocessor = full_schema_preprocessor();
        let width = preprocessor.width();
        let store = ModelStore {
            // All-zero weights and a negative intercept: every input predicts
            // a negative raw price.
            regressor: RegressorPipeline {
                preprocessor: preprocessor.clone(),
                weights: vec![0.0; width],
                intercept: -1200.0,
            },
            classifier: InvestmentClassifier {
                preprocessor,
                weights: vec![0.0; width],
                intercept: 0.0,
            },
        };
        let service = InferenceService::new(Arc::new(store));
        let prediction = service.analyze(&fixed_record()).unwrap();
        assert_eq!(prediction.price_per_sqft, 0.0);
        assert!((prediction.probability - 0.5).abs() < 1e-9);
    }
}
