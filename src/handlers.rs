use axum::extract::{Path, State};
use axum::Json;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::models::{PredictRequest, PredictResponse};
use crate::projection::{self, future_price};
use crate::sample::ChartData;
use crate::AppState;

const DEFAULT_HORIZON_YEARS: u32 = 5;

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}

pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> AppResult<Json<PredictResponse>> {
    request.property.validate()?;
    let horizon_years = request.horizon_years.unwrap_or(DEFAULT_HORIZON_YEARS);
    if !projection::horizon_in_range(horizon_years) {
        return Err(AppError::InvalidHorizon(horizon_years));
    }

    let prediction = state.service.analyze(&request.property)?;
    let projected = future_price(prediction.price_per_sqft, horizon_years);
    log::info!(
        "Predicted {:.0}/sqft for {} ({}), confidence {:.1}%",
        prediction.price_per_sqft,
        request.property.city,
        if prediction.good_investment { "good investment" } else { "not a good investment" },
        prediction.probability * 100.0
    );

    Ok(Json(PredictResponse {
        price_per_sqft: prediction.price_per_sqft,
        price_display: format_inr(prediction.price_per_sqft),
        good_investment: prediction.good_investment,
        verdict: if prediction.good_investment {
            "Good Investment".to_string()
        } else {
            "Not a Good Investment".to_string()
        },
        confidence_pct: (prediction.probability * 1000.0).round() / 10.0,
        horizon_years,
        projected_price_per_sqft: projected,
        projected_display: format_inr(projected),
    }))
}

pub async fn list_charts(State(state): State<AppState>) -> Json<serde_json::Value> {
    let charts: &[ChartData] = state.charts.as_deref().map(Vec::as_slice).unwrap_or(&[]);
    let views: Vec<serde_json::Value> = charts
        .iter()
        .map(|chart| json!({"slug": chart.slug, "title": chart.title}))
        .collect();
    Json(json!({"charts": views}))
}

pub async fn get_chart(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<ChartData>> {
    let charts: &[ChartData] = state.charts.as_deref().map(Vec::as_slice).unwrap_or(&[]);
    let chart = charts
        .iter()
        .find(|chart| chart.slug == slug)
        .cloned()
        .ok_or(AppError::UnknownChart(slug))?;
    Ok(Json(chart))
}

/// Formats a non-negative amount for display: rupee sign, rounded to whole
/// units, comma-grouped.
pub fn format_inr(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("\u{20b9} {}", grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rupee_amounts_with_grouping() {
        assert_eq!(format_inr(0.0), "\u{20b9} 0");
        assert_eq!(format_inr(950.4), "\u{20b9} 950");
        assert_eq!(format_inr(5234.0), "\u{20b9} 5,234");
        assert_eq!(format_inr(1_234_567.6), "\u{20b9} 1,234,568");
    }
}
