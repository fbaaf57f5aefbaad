//! Linear Forecaster: ordinary least squares on one variable
//!
//! Fits y = slope * x + intercept to ordered points and extrapolates.
//! Deterministic: identical input always yields identical output.

use serde::{Deserialize, Serialize};

/// Projection length used when a caller has no preference
pub const DEFAULT_FUTURE_STEPS: usize = 6;

/// An (index, value) point, observed or projected
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub index: f64,
    pub value: f64,
}

impl ForecastPoint {
    pub fn new(index: f64, value: f64) -> Self {
        Self { index, value }
    }
}

/// A fitted line with its goodness of fit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination (1.0 = perfect fit). 0 when the observed
    /// values have no variance.
    pub r_squared: f64,
}

impl LinearFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Least-squares fit
///
/// Returns `None` for fewer than two points or when every x is identical
/// (zero denominator).
pub fn fit_line(points: &[ForecastPoint]) -> Option<LinearFit> {
    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|p| p.index).sum();
    let sum_y: f64 = points.iter().map(|p| p.value).sum();
    let sum_xy: f64 = points.iter().map(|p| p.index * p.value).sum();
    let sum_xx: f64 = points.iter().map(|p| p.index * p.index).sum();

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return None;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    let mean_y = sum_y / n;
    let ss_tot: f64 = points.iter().map(|p| (p.value - mean_y).powi(2)).sum();
    let ss_res: f64 = points
        .iter()
        .map(|p| (p.value - (intercept + slope * p.index)).powi(2))
        .sum();

    let r_squared = if ss_tot > 0.0 {
        (1.0 - ss_res / ss_tot).clamp(0.0, 1.0)
    } else {
        0.0
    };

    Some(LinearFit {
        slope,
        intercept,
        r_squared,
    })
}

/// Project `future_steps` points past the last observed index
///
/// Projections sit at `last_x + 1 ..= last_x + future_steps`. Degenerate
/// input (see [`fit_line`]) yields an empty forecast, which callers treat as
/// "insufficient data".
pub fn linear_forecast(points: &[ForecastPoint], future_steps: usize) -> Vec<ForecastPoint> {
    let (Some(fit), Some(last)) = (fit_line(points), points.last()) else {
        return Vec::new();
    };

    (1..=future_steps)
        .map(|step| {
            let x = last.index + step as f64;
            ForecastPoint::new(x, fit.predict(x))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(raw: &[(f64, f64)]) -> Vec<ForecastPoint> {
        raw.iter().map(|&(x, y)| ForecastPoint::new(x, y)).collect()
    }

    #[test]
    fn test_exact_line() {
        let forecast = linear_forecast(&points(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]), 2);
        assert_eq!(
            forecast,
            vec![ForecastPoint::new(4.0, 8.0), ForecastPoint::new(5.0, 10.0)]
        );
    }

    #[test]
    fn test_identical_x_is_degenerate() {
        assert!(linear_forecast(&points(&[(1.0, 5.0), (1.0, 7.0)]), 6).is_empty());
        assert!(fit_line(&points(&[(1.0, 5.0), (1.0, 7.0)])).is_none());
    }

    #[test]
    fn test_too_few_points() {
        assert!(linear_forecast(&[], 6).is_empty());
        assert!(linear_forecast(&points(&[(1.0, 5.0)]), 6).is_empty());
    }

    #[test]
    fn test_step_count_and_indices() {
        let forecast = linear_forecast(&points(&[(1.0, 3.0), (2.0, 5.0), (3.0, 4.0)]), 6);
        assert_eq!(forecast.len(), 6);
        let indices: Vec<f64> = forecast.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_default_steps() {
        let input = points(&[(1.0, 1.0), (2.0, 2.0)]);
        assert_eq!(linear_forecast(&input, DEFAULT_FUTURE_STEPS).len(), 6);
    }

    #[test]
    fn test_zero_steps() {
        assert!(linear_forecast(&points(&[(1.0, 1.0), (2.0, 2.0)]), 0).is_empty());
    }

    #[test]
    fn test_fit_of_noisy_points() {
        // Best fit of (0,1) (1,3) (2,2): slope 0.5, intercept 1.5
        let fit = fit_line(&points(&[(0.0, 1.0), (1.0, 3.0), (2.0, 2.0)])).unwrap();
        assert!((fit.slope - 0.5).abs() < 1e-12);
        assert!((fit.intercept - 1.5).abs() < 1e-12);
        // ss_tot = 2, ss_res = 1.5
        assert!((fit.r_squared - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_flat_series_has_zero_r_squared() {
        let fit = fit_line(&points(&[(1.0, 4.0), (2.0, 4.0), (3.0, 4.0)])).unwrap();
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.r_squared, 0.0);
        assert_eq!(fit.predict(10.0), 4.0);
    }

    #[test]
    fn test_deterministic() {
        let input = points(&[(1.0, 12.3), (2.0, 9.8), (3.0, 15.1), (4.0, 14.0)]);
        assert_eq!(linear_forecast(&input, 12), linear_forecast(&input, 12));
    }
}
