//! Future-value projection at a fixed annual growth rate.

/// Fixed annual compounding rate (8%).
pub const GROWTH_RATE: f64 = 0.08;

pub const MIN_HORIZON_YEARS: u32 = 1;
pub const MAX_HORIZON_YEARS: u32 = 10;

/// `price * (1 + GROWTH_RATE)^years`. A zero-year horizon is the identity.
pub fn future_price(price: f64, years: u32) -> f64 {
    price * (1.0 + GROWTH_RATE).powi(years as i32)
}

pub fn horizon_in_range(years: u32) -> bool {
    (MIN_HORIZON_YEARS..=MAX_HORIZON_YEARS).contains(&years)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_years_is_identity() {
        assert_eq!(future_price(5200.0, 0), 5200.0);
        assert_eq!(future_price(0.0, 0), 0.0);
    }

    #[test]
    fn one_year_applies_the_rate_once() {
        let projected = future_price(100.0, 1);
        assert!((projected - 108.0).abs() < 1e-9);
    }

    #[test]
    fn projection_is_monotonic_in_years_for_positive_price() {
        let mut previous = future_price(4500.0, 0);
        for years in 1..=MAX_HORIZON_YEARS {
            let current = future_price(4500.0, years);
            assert!(current > previous, "projection must grow at year {}", years);
            previous = current;
        }
    }

    #[test]
    fn horizon_bounds() {
        assert!(!horizon_in_range(0));
        assert!(horizon_in_range(1));
        assert!(horizon_in_range(10));
        assert!(!horizon_in_range(11));
    }
}
