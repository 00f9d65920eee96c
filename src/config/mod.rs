use dotenv::dotenv;
use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub regressor_path: String,
    pub classifier_path: String,
    pub sample_dataset_path: String,
    pub port: u16,
}

impl AppConfig {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        dotenv().ok(); // Load .env file if present
        Ok(Self {
            regressor_path: env::var("REGRESSOR_PATH")
                .unwrap_or_else(|_| "models/regressor_pipeline.json".to_string()),
            classifier_path: env::var("CLASSIFIER_PATH")
                .unwrap_or_else(|_| "models/investment_model.json".to_string()),
            sample_dataset_path: env::var("SAMPLE_DATASET_PATH")
                .unwrap_or_else(|_| "data/sample_properties.csv".to_string()),
            port: match env::var("PORT") {
                Ok(value) => value.parse()?,
                Err(_) => 3000,
            },
        })
    }
}
