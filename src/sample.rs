//! Static sample dataset and the five canned chart views.
//!
//! The explorer variant ships a read-only CSV sample of scored listings and
//! serves descriptive statistics over it. The file is simple comma-separated
//! text without quoting, so it is split by hand; views are computed once at
//! startup and served as labels/values pairs, rendering stays client-side.

use std::collections::BTreeMap;
use std::fs;

use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    #[error("failed to read sample dataset {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("sample dataset is missing required column {0}")]
    MissingColumn(&'static str),

    #[error("bad value in sample dataset at line {line}: {message}")]
    BadValue { line: usize, message: String },

    #[error("sample dataset has no data rows")]
    Empty,
}

#[derive(Debug, Clone)]
pub struct SampleRow {
    pub price_per_sqft: f64,
    pub city: String,
    pub bhk: u8,
    pub furnished_status: String,
    pub good_investment: bool,
}

#[derive(Debug)]
pub struct SampleDataset {
    rows: Vec<SampleRow>,
}

/// The five precomputed views the explorer offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartView {
    AvgPriceByCity,
    BhkDistribution,
    FurnishedStatus,
    InvestmentShareByCity,
    PriceHistogram,
}

impl ChartView {
    pub const ALL: [ChartView; 5] = [
        ChartView::AvgPriceByCity,
        ChartView::BhkDistribution,
        ChartView::FurnishedStatus,
        ChartView::InvestmentShareByCity,
        ChartView::PriceHistogram,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            ChartView::AvgPriceByCity => "avg-price-by-city",
            ChartView::BhkDistribution => "bhk-distribution",
            ChartView::FurnishedStatus => "furnished-status",
            ChartView::InvestmentShareByCity => "investment-share-by-city",
            ChartView::PriceHistogram => "price-histogram",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ChartView::AvgPriceByCity => "Average Price per SqFt by City",
            ChartView::BhkDistribution => "BHK Distribution",
            ChartView::FurnishedStatus => "Furnishing Status Breakdown",
            ChartView::InvestmentShareByCity => "Good-Investment Share by City",
            ChartView::PriceHistogram => "Price per SqFt Histogram",
        }
    }

    pub fn from_slug(slug: &str) -> Option<ChartView> {
        ChartView::ALL.iter().copied().find(|view| view.slug() == slug)
    }
}

/// Labels/values payload for one chart view.
#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub slug: &'static str,
    pub title: &'static str,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

const PRICE_BINS: usize = 6;

impl SampleDataset {
    pub fn load(path: &str) -> Result<Self, SampleError> {
        let text = fs::read_to_string(path).map_err(|source| SampleError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, SampleError> {
        let mut lines = text.lines().enumerate().filter(|(_, line)| !line.trim().is_empty());
        let (_, header) = lines.next().ok_or(SampleError::Empty)?;
        let columns: Vec<&str> = header.split(',').map(str::trim).collect();

        let index_of = |name: &'static str| -> Result<usize, SampleError> {
            columns
                .iter()
                .position(|column| *column == name)
                .ok_or(SampleError::MissingColumn(name))
        };
        let price_idx = index_of("Price_per_SqFt")?;
        let city_idx = index_of("City")?;
        let bhk_idx = index_of("BHK")?;
        let furnished_idx = index_of("Furnished_Status")?;
        let investment_idx = index_of("Good_Investment")?;

        let mut rows = Vec::new();
        for (number, line) in lines {
            let line_no = number + 1;
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields.len() != columns.len() {
                return Err(SampleError::BadValue {
                    line: line_no,
                    message: format!(
                        "expected {} fields, found {}",
                        columns.len(),
                        fields.len()
                    ),
                });
            }
            let parse_err = |message: String| SampleError::BadValue {
                line: line_no,
                message,
            };
            let price_per_sqft: f64 = fields[price_idx]
                .parse()
                .map_err(|_| parse_err(format!("bad Price_per_SqFt {:?}", fields[price_idx])))?;
            let bhk: u8 = fields[bhk_idx]
                .parse()
                .map_err(|_| parse_err(format!("bad BHK {:?}", fields[bhk_idx])))?;
            let good_investment = match fields[investment_idx] {
                "1" => true,
                "0" => false,
                other => return Err(parse_err(format!("bad Good_Investment {:?}", other))),
            };
            rows.push(SampleRow {
                price_per_sqft,
                city: fields[city_idx].to_string(),
                bhk,
                furnished_status: fields[furnished_idx].to_string(),
                good_investment,
            });
        }

        if rows.is_empty() {
            return Err(SampleError::Empty);
        }
        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn chart(&self, view: ChartView) -> ChartData {
        match view {
            ChartView::AvgPriceByCity => self.avg_price_by_city(),
            ChartView::BhkDistribution => self.bhk_distribution(),
            ChartView::FurnishedStatus => self.furnished_status(),
            ChartView::InvestmentShareByCity => self.investment_share_by_city(),
            ChartView::PriceHistogram => self.price_histogram(),
        }
    }

    pub fn all_charts(&self) -> Vec<ChartData> {
        ChartView::ALL.iter().map(|view| self.chart(*view)).collect()
    }

    fn avg_price_by_city(&self) -> ChartData {
        let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
        for row in &self.rows {
            let entry = sums.entry(&row.city).or_insert((0.0, 0));
            entry.0 += row.price_per_sqft;
            entry.1 += 1;
        }
        let labels = sums.keys().map(|city| city.to_string()).collect();
        let values = sums
            .values()
            .map(|(total, count)| total / *count as f64)
            .collect();
        ChartData {
            slug: ChartView::AvgPriceByCity.slug(),
            title: ChartView::AvgPriceByCity.title(),
            labels,
            values,
        }
    }

    fn bhk_distribution(&self) -> ChartData {
        let mut counts: BTreeMap<u8, usize> = BTreeMap::new();
        for row in &self.rows {
            *counts.entry(row.bhk).or_insert(0) += 1;
        }
        ChartData {
            slug: ChartView::BhkDistribution.slug(),
            title: ChartView::BhkDistribution.title(),
            labels: counts.keys().map(|bhk| format!("{} BHK", bhk)).collect(),
            values: counts.values().map(|count| *count as f64).collect(),
        }
    }

    fn furnished_status(&self) -> ChartData {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for row in &self.rows {
            *counts.entry(&row.furnished_status).or_insert(0) += 1;
        }
        ChartData {
            slug: ChartView::FurnishedStatus.slug(),
            title: ChartView::FurnishedStatus.title(),
            labels: counts.keys().map(|status| status.to_string()).collect(),
            values: counts.values().map(|count| *count as f64).collect(),
        }
    }

    fn investment_share_by_city(&self) -> ChartData {
        let mut counts: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        for row in &self.rows {
            let entry = counts.entry(&row.city).or_insert((0, 0));
            if row.good_investment {
                entry.0 += 1;
            }
            entry.1 += 1;
        }
        ChartData {
            slug: ChartView::InvestmentShareByCity.slug(),
            title: ChartView::InvestmentShareByCity.title(),
            labels: counts.keys().map(|city| city.to_string()).collect(),
            values: counts
                .values()
                .map(|(good, total)| *good as f64 / *total as f64)
                .collect(),
        }
    }

    fn price_histogram(&self) -> ChartData {
        let min = self
            .rows
            .iter()
            .map(|row| row.price_per_sqft)
            .fold(f64::INFINITY, f64::min);
        let max = self
            .rows
            .iter()
            .map(|row| row.price_per_sqft)
            .fold(f64::NEG_INFINITY, f64::max);

        if max == min {
            return ChartData {
                slug: ChartView::PriceHistogram.slug(),
                title: ChartView::PriceHistogram.title(),
                labels: vec![format!("{:.0}", min)],
                values: vec![self.rows.len() as f64],
            };
        }

        let width = (max - min) / PRICE_BINS as f64;
        let mut counts = vec![0usize; PRICE_BINS];
        for row in &self.rows {
            let mut bin = ((row.price_per_sqft - min) / width) as usize;
            if bin >= PRICE_BINS {
                bin = PRICE_BINS - 1; // max lands in the last bin
            }
            counts[bin] += 1;
        }
        let labels = (0..PRICE_BINS)
            .map(|bin| {
                let low = min + width * bin as f64;
                format!("{:.0} to {:.0}", low, low + width)
            })
            .collect();
        ChartData {
            slug: ChartView::PriceHistogram.slug(),
            title: ChartView::PriceHistogram.title(),
            labels,
            values: counts.iter().map(|count| *count as f64).collect(),
        }
    }
}
