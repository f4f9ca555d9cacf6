//! End-to-end winner selection against a canned market-data source.

use anyhow::Result;
use chrono::{Duration, NaiveDate};
use sector_recommender::market::{CompanyInfo, DailyBar, MarketData};
use sector_recommender::recommend::best_ticker;
use sector_recommender::scoring::RiskLevel;

struct StubMarket;

fn bars_from_closes(closes: &[f64]) -> Vec<DailyBar> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
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

/// Prices whose daily returns grow over time, so the return-vs-time slope
/// is strictly positive (a constant-percentage ramp would score zero).
fn accelerating_uptrend(days: usize) -> Vec<f64> {
    let mut closes = vec![100.0];
    for i in 0..days {
        let last = *closes.last().unwrap();
        closes.push(last * (1.0 + 0.0005 * i as f64));
    }
    closes
}

impl MarketData for StubMarket {
    async fn daily_bars(
        &self,
        ticker: &str,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<Vec<DailyBar>> {
        Ok(match ticker {
            "AAPL" => bars_from_closes(&accelerating_uptrend(60)),
            "MSFT" | "KO" => bars_from_closes(&[100.0; 61]),
            _ => Vec::new(),
        })
    }

    async fn company_info(&self, ticker: &str) -> Result<CompanyInfo> {
        Ok(CompanyInfo {
            name: Some(format!("{ticker} Inc.")),
            market_cap: Some(1_000_000_000),
            sector: Some("Technology".to_string()),
        })
    }
}

fn window() -> (NaiveDate, NaiveDate) {
    let end = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    (end - Duration::days(180), end)
}

#[tokio::test]
async fn uptrend_beats_flat_at_medium_risk() {
    let (start, end) = window();
    let winner = best_ticker(&StubMarket, &["MSFT", "AAPL"], RiskLevel::Medium, start, end).await;
    assert_eq!(winner.map(|(ticker, _)| ticker).as_deref(), Some("AAPL"));
}

#[tokio::test]
async fn ties_go_to_the_first_seen_ticker() {
    let (start, end) = window();
    let winner = best_ticker(&StubMarket, &["MSFT", "KO"], RiskLevel::Medium, start, end).await;
    assert_eq!(winner.map(|(ticker, _)| ticker).as_deref(), Some("MSFT"));
}

#[tokio::test]
async fn no_usable_data_yields_none() {
    let (start, end) = window();
    let winner = best_ticker(&StubMarket, &["XXXX", "YYYY"], RiskLevel::Low, start, end).await;
    assert!(winner.is_none());
}

#[tokio::test]
async fn failing_tickers_are_skipped_not_fatal() {
    struct FlakyMarket;

    impl MarketData for FlakyMarket {
        async fn daily_bars(
            &self,
            ticker: &str,
            start: NaiveDate,
            end: NaiveDate,
        ) -> Result<Vec<DailyBar>> {
            if ticker == "BAD" {
                anyhow::bail!("connection reset by peer");
            }
            StubMarket.daily_bars(ticker, start, end).await
        }

        async fn company_info(&self, ticker: &str) -> Result<CompanyInfo> {
            StubMarket.company_info(ticker).await
        }
    }

    let (start, end) = window();
    let winner = best_ticker(&FlakyMarket, &["BAD", "AAPL"], RiskLevel::Medium, start, end).await;
    assert_eq!(winner.map(|(ticker, _)| ticker).as_deref(), Some("AAPL"));
}
