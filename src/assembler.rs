//! Feature assembly.
//!
//! Turns one [`PropertyRecord`] into the single-row tabular input the
//! pipelines were fitted on. Column names and order match the training schema
//! verbatim, and every captured field is forwarded as-is; the pipelines reject
//! any row whose column set drifts from their fitted schema.

use crate::models::PropertyRecord;

#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Num(f64),
    Cat(String),
}

/// One named, ordered row of feature values.
#[derive(Debug, Clone, Default)]
pub struct FeatureRow {
    columns: Vec<(String, FeatureValue)>,
}

impl FeatureRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &str, value: FeatureValue) {
        self.columns.push((name.to_string(), value));
    }

    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, value)| value)
    }

    pub fn columns(&self) -> impl Iterator<Item = &String> {
        self.columns.iter().map(|(name, _)| name)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Assembles the prediction-time input row from the submitted record.
pub fn assemble(record: &PropertyRecord) -> FeatureRow {
    let mut row = FeatureRow::new();
    row.push("State", FeatureValue::Cat(record.state.label().to_string()));
    row.push("City", FeatureValue::Cat(record.city.clone()));
    row.push(
        "Property_Type",
        FeatureValue::Cat(record.property_type.label().to_string()),
    );
    row.push("BHK", FeatureValue::Num(record.bhk as f64));
    row.push("Size_in_SqFt", FeatureValue::Num(record.size_in_sqft as f64));
    row.push(
        "Furnished_Status",
        FeatureValue::Cat(record.furnished_status.label().to_string()),
    );
    row.push("Floor_No", FeatureValue::Num(record.floor_no as f64));
    row.push("Total_Floors", FeatureValue::Num(record.total_floors as f64));
    row.push("Nearby_Schools", FeatureValue::Num(record.nearby_schools as f64));
    row.push(
        "Nearby_Hospitals",
        FeatureValue::Num(record.nearby_hospitals as f64),
    );
    row.push(
        "Public_Transport_Accessibility",
        FeatureValue::Num(record.public_transport_accessibility as f64),
    );
    row.push(
        "Parking_Space",
        FeatureValue::Cat(record.parking_space.label().to_string()),
    );
    row.push("Security", FeatureValue::Cat(record.security.label().to_string()));
    row.push("Amenities", FeatureValue::Num(record.amenities as f64));
    row.push(
        "Availability_Status",
        FeatureValue::Cat(record.availability_status.label().to_string()),
    );
    row.push("Property_Age", FeatureValue::Num(record.property_age as f64));
    row
}
