//! Winner selection: score every ticker in the chosen sector, keep the
//! maximum, and assemble the final recommendation.

use crate::market::{CompanyInfo, DailyBar, MarketData};
use crate::scoring::{daily_returns, score, RiskLevel};
use chrono::NaiveDate;
use log::error;

/// Minimum number of daily returns a series needs to be scored at all.
pub const MIN_RETURN_POINTS: usize = 10;

/// Returns series for a set of bars, or `None` when the ticker should be
/// skipped: no rows from the provider, or fewer than
/// [`MIN_RETURN_POINTS`] valid returns.
pub fn usable_returns(bars: &[DailyBar]) -> Option<Vec<f64>> {
    if bars.is_empty() {
        return None;
    }
    let returns = daily_returns(bars);
    if returns.len() < MIN_RETURN_POINTS {
        return None;
    }
    Some(returns)
}

/// Score every ticker serially and return the best one with its score.
///
/// A provider error excludes that ticker and the run continues; ties go to
/// the first-seen ticker. `None` means no ticker produced a usable series.
pub async fn best_ticker<M: MarketData>(
    market: &M,
    tickers: &[&str],
    risk: RiskLevel,
    start: NaiveDate,
    end: NaiveDate,
) -> Option<(String, f64)> {
    let mut best: Option<(String, f64)> = None;

    for &ticker in tickers {
        let bars = match market.daily_bars(ticker, start, end).await {
            Ok(bars) => bars,
            Err(e) => {
                error!("error retrieving data for {ticker}: {e}");
                continue;
            }
        };
        let Some(returns) = usable_returns(&bars) else {
            continue;
        };

        let ticker_score = score(&returns, risk);
        let replace = match &best {
            Some((_, best_score)) => ticker_score > *best_score,
            None => true,
        };
        if replace {
            best = Some((ticker.to_string(), ticker_score));
        }

        // polite pause to avoid throttling
        tokio::time::sleep(tokio::time::Duration::from_millis(200)).await;
    }

    best
}

/// Human-readable market cap with a T/B/M suffix at two decimals, the raw
/// value for small caps, "N/A" when absent.
pub fn format_market_cap(market_cap: Option<u64>) -> String {
    const TRILLION: f64 = 1_000_000_000_000.0;
    const BILLION: f64 = 1_000_000_000.0;
    const MILLION: f64 = 1_000_000.0;

    match market_cap {
        None => "N/A".to_string(),
        Some(cap) => {
            let value = cap as f64;
            if value >= TRILLION {
                format!("${:.2}T", value / TRILLION)
            } else if value >= BILLION {
                format!("${:.2}B", value / BILLION)
            } else if value >= 100_000.0 {
                format!("${:.2}M", value / MILLION)
            } else {
                format!("${cap}")
            }
        }
    }
}

/// The final pick, with display fields already defaulted.
#[derive(Debug)]
pub struct Recommendation {
    pub ticker: String,
    pub name: String,
    pub market_cap: String,
    pub sector: String,
}

impl Recommendation {
    /// Build from provider metadata; a missing name becomes "N/A" and a
    /// missing sector falls back to the sector the user chose.
    pub fn new(ticker: String, info: CompanyInfo, fallback_sector: &str) -> Self {
        Recommendation {
            ticker,
            name: info.name.unwrap_or_else(|| "N/A".to_string()),
            market_cap: format_market_cap(info.market_cap),
            sector: info.sector.unwrap_or_else(|| fallback_sector.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn bars(closes: &[f64]) -> Vec<DailyBar> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| DailyBar {
                date: start + Duration::days(i as i64),
                close,
                adj_close: None,
            })
            .collect()
    }

    #[test]
    fn short_series_is_excluded() {
        // 6 closes -> 5 returns, below the minimum of 10.
        let series = bars(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert!(usable_returns(&series).is_none());
    }

    #[test]
    fn empty_series_is_excluded() {
        assert!(usable_returns(&[]).is_none());
    }

    #[test]
    fn long_enough_series_is_kept() {
        let closes: Vec<f64> = (0..12).map(|i| 100.0 + i as f64).collect();
        let returns = usable_returns(&bars(&closes)).unwrap();
        assert_eq!(returns.len(), 11);
    }

    #[test]
    fn market_cap_suffixes() {
        assert_eq!(format_market_cap(Some(2_500_000_000_000)), "$2.50T");
        assert_eq!(format_market_cap(Some(15_000_000_000)), "$15.00B");
        assert_eq!(format_market_cap(Some(750_000)), "$0.75M");
        assert_eq!(format_market_cap(Some(500)), "$500");
        assert_eq!(format_market_cap(None), "N/A");
    }

    #[test]
    fn recommendation_defaults_missing_fields() {
        let rec = Recommendation::new("AAPL".to_string(), CompanyInfo::default(), "Technology");
        assert_eq!(rec.name, "N/A");
        assert_eq!(rec.market_cap, "N/A");
        assert_eq!(rec.sector, "Technology");
    }
}
