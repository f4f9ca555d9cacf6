//! Returns math: daily returns, OLS trend slope, volatility, and the
//! risk-weighted score that ranks tickers.

use crate::market::DailyBar;

/// User-selected risk preference. Controls how volatility is weighted
/// when scoring: subtracted, ignored, or added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Parse a user-entered risk string. Trims whitespace and ignores case;
    /// anything outside {low, medium, high} is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "low" => Some(RiskLevel::Low),
            "medium" => Some(RiskLevel::Medium),
            "high" => Some(RiskLevel::High),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// Fractional day-over-day change, preferring adjusted close over raw close.
/// Pairs with a non-finite or non-positive base price are dropped.
pub fn daily_returns(bars: &[DailyBar]) -> Vec<f64> {
    bars.windows(2)
        .filter_map(|pair| {
            let prev = pair[0].adj_close.unwrap_or(pair[0].close);
            let next = pair[1].adj_close.unwrap_or(pair[1].close);
            if prev.is_finite() && next.is_finite() && prev > 0.0 {
                Some((next - prev) / prev)
            } else {
                None
            }
        })
        .collect()
}

/// Ordinary least squares slope of `y` against its index 0, 1, 2, ...
pub fn linear_slope(y: &[f64]) -> f64 {
    let n = y.len() as f64;
    if n < 2.0 {
        return 0.0;
    }
    let x_mean = (n - 1.0) / 2.0;
    let y_mean: f64 = y.iter().sum::<f64>() / n;
    let mut num = 0.0;
    let mut den = 0.0;
    for (i, &yi) in y.iter().enumerate() {
        let xi = i as f64;
        num += (xi - x_mean) * (yi - y_mean);
        den += (xi - x_mean) * (xi - x_mean);
    }
    if den.abs() < 1e-12 {
        return 0.0;
    }
    num / den
}

/// Sample standard deviation (n - 1 denominator). 0.0 for fewer than 2 points.
pub fn std_dev(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values
        .iter()
        .map(|v| (v - mean) * (v - mean))
        .sum::<f64>()
        / (n as f64 - 1.0);
    variance.sqrt()
}

/// Score a returns series: trend slope adjusted for volatility per the
/// chosen risk level.
pub fn score(returns: &[f64], risk: RiskLevel) -> f64 {
    let slope = linear_slope(returns);
    let volatility = std_dev(returns);
    match risk {
        RiskLevel::Low => slope - volatility,
        RiskLevel::Medium => slope,
        RiskLevel::High => slope + volatility,
    }
}
