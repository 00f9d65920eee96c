use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One property submission, matching the schema the pipelines were fitted on
/// field for field. Unknown or missing fields are rejected at deserialization
/// time rather than silently defaulted, so a request that drifts from the
/// training schema never reaches the pipelines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyRecord {
    #[serde(rename = "State")]
    pub state: State,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Property_Type")]
    pub property_type: PropertyType,
    #[serde(rename = "BHK")]
    pub bhk: u8,
    #[serde(rename = "Size_in_SqFt")]
    pub size_in_sqft: u32,
    #[serde(rename = "Furnished_Status")]
    pub furnished_status: FurnishedStatus,
    #[serde(rename = "Floor_No")]
    pub floor_no: u8,
    #[serde(rename = "Total_Floors")]
    pub total_floors: u8,
    #[serde(rename = "Nearby_Schools")]
    pub nearby_schools: u8,
    #[serde(rename = "Nearby_Hospitals")]
    pub nearby_hospitals: u8,
    #[serde(rename = "Public_Transport_Accessibility")]
    pub public_transport_accessibility: u8,
    #[serde(rename = "Parking_Space")]
    pub parking_space: YesNo,
    #[serde(rename = "Security")]
    pub security: YesNo,
    #[serde(rename = "Amenities")]
    pub amenities: u8,
    #[serde(rename = "Availability_Status")]
    pub availability_status: AvailabilityStatus,
    #[serde(rename = "Property_Age")]
    pub property_age: u8,
}

impl PropertyRecord {
    /// Checks the numeric fields against the ranges the input widgets allow.
    /// Categorical fields are already constrained by their enums.
    pub fn validate(&self) -> Result<(), AppError> {
        fn check(errors: &mut Vec<String>, name: &str, value: i64, min: i64, max: i64) {
            if value < min || value > max {
                errors.push(format!("{} must be between {} and {}, got {}", name, min, max, value));
            }
        }

        let mut errors = Vec::new();
        check(&mut errors, "BHK", self.bhk as i64, 1, 6);
        check(&mut errors, "Size_in_SqFt", self.size_in_sqft as i64, 300, 10_000);
        check(&mut errors, "Floor_No", self.floor_no as i64, 0, 50);
        check(&mut errors, "Total_Floors", self.total_floors as i64, 1, 60);
        check(&mut errors, "Nearby_Schools", self.nearby_schools as i64, 0, 10);
        check(&mut errors, "Nearby_Hospitals", self.nearby_hospitals as i64, 0, 10);
        check(
            &mut errors,
            "Public_Transport_Accessibility",
            self.public_transport_accessibility as i64,
            1,
            5,
        );
        check(&mut errors, "Amenities", self.amenities as i64, 0, 10);
        check(&mut errors, "Property_Age", self.property_age as i64, 0, 50);
        if self.floor_no as i64 > self.total_floors as i64 {
            errors.push(format!(
                "Floor_No ({}) cannot exceed Total_Floors ({})",
                self.floor_no, self.total_floors
            ));
        }
        if self.city.trim().is_empty() {
            errors.push("City must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::InvalidRecord(errors.join("; ")))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum State {
    Maharashtra,
    Karnataka,
    Delhi,
    #[serde(rename = "Tamil Nadu")]
    TamilNadu,
}

impl State {
    pub fn label(&self) -> &'static str {
        match self {
            State::Maharashtra => "Maharashtra",
            State::Karnataka => "Karnataka",
            State::Delhi => "Delhi",
            State::TamilNadu => "Tamil Nadu",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    Apartment,
    Villa,
    #[serde(rename = "Independent House")]
    IndependentHouse,
}

impl PropertyType {
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::Villa => "Villa",
            PropertyType::IndependentHouse => "Independent House",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FurnishedStatus {
    Unfurnished,
    #[serde(rename = "Semi-Furnished")]
    SemiFurnished,
    Furnished,
}

impl FurnishedStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FurnishedStatus::Unfurnished => "Unfurnished",
            FurnishedStatus::SemiFurnished => "Semi-Furnished",
            FurnishedStatus::Furnished => "Furnished",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvailabilityStatus {
    #[serde(rename = "Ready to Move")]
    ReadyToMove,
    #[serde(rename = "Under Construction")]
    UnderConstruction,
}

impl AvailabilityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AvailabilityStatus::ReadyToMove => "Ready to Move",
            AvailabilityStatus::UnderConstruction => "Under Construction",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn label(&self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub property: PropertyRecord,
    /// Projection horizon in years, 1-10; defaults to 5.
    pub horizon_years: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub price_per_sqft: f64,
    pub price_display: String,
    pub good_investment: bool,
    pub verdict: String,
    pub confidence_pct: f64,
    pub horizon_years: u32,
    pub projected_price_per_sqft: f64,
    pub projected_display: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_json() -> serde_json::Value {
        serde_json::json!({
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
        })
    }

    #[test]
    fn full_record_deserializes() {
        let record: PropertyRecord = serde_json::from_value(record_json()).unwrap();
        assert_eq!(record.state.label(), "Maharashtra");
        assert_eq!(record.bhk, 2);
        assert_eq!(record.availability_status, AvailabilityStatus::ReadyToMove);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn missing_field_is_rejected() {
        let mut value = record_json();
        value.as_object_mut().unwrap().remove("Nearby_Schools");
        let result: Result<PropertyRecord, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut value = record_json();
        value
            .as_object_mut()
            .unwrap()
            .insert("Price_per_SqFt".to_string(), serde_json::json!(5000));
        let result: Result<PropertyRecord, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }

    #[test]
    fn out_of_domain_enum_is_rejected() {
        let mut value = record_json();
        value
            .as_object_mut()
            .unwrap()
            .insert("Furnished_Status".to_string(), serde_json::json!("Luxury"));
        let result: Result<PropertyRecord, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }

    #[test]
    fn out_of_range_numeric_fails_validation() {
        let mut value = record_json();
        value
            .as_object_mut()
            .unwrap()
            .insert("BHK".to_string(), serde_json::json!(9));
        let record: PropertyRecord = serde_json::from_value(value).unwrap();
        let err = record.validate().unwrap_err();
        assert!(err.to_string().contains("BHK"));
    }

    #[test]
    fn floor_above_total_floors_fails_validation() {
        let mut record: PropertyRecord = serde_json::from_value(record_json()).unwrap();
        record.floor_no = 12;
        record.total_floors = 10;
        assert!(record.validate().is_err());
    }
}
