//! Market data access via Yahoo Finance.
//!
//! Daily bars come from the v8 chart API, descriptive metadata from the v10
//! quoteSummary API. Yahoo has no official API and the response shape can
//! change without notice, so both parsers tolerate missing fields wherever
//! the caller can degrade gracefully.

use anyhow::{bail, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::time::Duration;

/// One trading day of price data for a ticker.
#[derive(Debug, Clone)]
pub struct DailyBar {
    pub date: NaiveDate,
    pub close: f64,
    pub adj_close: Option<f64>,
}

/// Descriptive metadata for a ticker. Every field is optional; the report
/// layer substitutes "N/A" or the chosen sector label.
#[derive(Debug, Clone, Default)]
pub struct CompanyInfo {
    pub name: Option<String>,
    pub market_cap: Option<u64>,
    pub sector: Option<String>,
}

/// Capability interface over the external data provider, so tests can
/// supply deterministic fixtures instead of live network calls.
#[allow(async_fn_in_trait)]
pub trait MarketData {
    /// Daily bars for `ticker` over `[start, end]`. An empty vec means the
    /// provider had no rows; that is a skip for the caller, not an error.
    async fn daily_bars(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyBar>>;

    /// Display name, market cap, and sector for `ticker`.
    async fn company_info(&self, ticker: &str) -> Result<CompanyInfo>;
}

// Yahoo v8 chart API response.

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartOuter,
}

#[derive(Debug, Deserialize)]
struct ChartOuter {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
    adjclose: Option<Vec<AdjCloseData>>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    close: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct AdjCloseData {
    adjclose: Vec<Option<f64>>,
}

// Yahoo v10 quoteSummary API response.

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    #[serde(rename = "quoteSummary")]
    quote_summary: SummaryOuter,
}

#[derive(Debug, Deserialize)]
struct SummaryOuter {
    result: Option<Vec<SummaryModules>>,
}

#[derive(Debug, Deserialize)]
struct SummaryModules {
    price: Option<PriceModule>,
    #[serde(rename = "assetProfile")]
    asset_profile: Option<AssetProfile>,
}

#[derive(Debug, Deserialize)]
struct PriceModule {
    #[serde(rename = "shortName")]
    short_name: Option<String>,
    #[serde(rename = "marketCap")]
    market_cap: Option<RawNumber>,
}

#[derive(Debug, Deserialize)]
struct RawNumber {
    raw: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct AssetProfile {
    sector: Option<String>,
}

/// Live Yahoo Finance client.
pub struct YahooMarket {
    client: reqwest::Client,
}

impl YahooMarket {
    pub fn new() -> Result<Self> {
        // Yahoo rejects the default reqwest user agent.
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()?;
        Ok(Self { client })
    }

    fn chart_url(ticker: &str, start: NaiveDate, end: NaiveDate) -> String {
        let period1 = start.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp();
        let period2 = end.and_hms_opt(23, 59, 59).unwrap().and_utc().timestamp();
        format!(
            "https://query1.finance.yahoo.com/v8/finance/chart/{ticker}\
             ?period1={period1}&period2={period2}&interval=1d\
             &includeAdjustedClose=true"
        )
    }

    fn summary_url(ticker: &str) -> String {
        format!(
            "https://query1.finance.yahoo.com/v10/finance/quoteSummary/{ticker}\
             ?modules=price%2CassetProfile"
        )
    }

    /// Turn a chart response into bars. Rows without a close are dropped
    /// (holidays and half-days come back as nulls).
    fn parse_chart(ticker: &str, resp: ChartResponse) -> Result<Vec<DailyBar>> {
        let result = match resp.chart.result {
            Some(result) => result,
            None => match resp.chart.error {
                Some(err) => bail!(
                    "chart request for {ticker} failed: {}: {}",
                    err.code,
                    err.description
                ),
                None => bail!("chart response for {ticker} had no result"),
            },
        };

        let Some(data) = result.into_iter().next() else {
            return Ok(Vec::new());
        };
        let timestamps = data.timestamp.unwrap_or_default();
        let Some(quote) = data.indicators.quote.into_iter().next() else {
            return Ok(Vec::new());
        };
        let adj_closes = data
            .indicators
            .adjclose
            .and_then(|v| v.into_iter().next())
            .map(|a| a.adjclose);

        let mut bars = Vec::with_capacity(timestamps.len());
        for (i, &ts) in timestamps.iter().enumerate() {
            let Some(close) = quote.close.get(i).copied().flatten() else {
                continue;
            };
            let Some(date) = chrono::DateTime::from_timestamp(ts, 0)
                .map(|dt| dt.naive_utc().date())
            else {
                continue;
            };
            let adj_close = adj_closes.as_ref().and_then(|v| v.get(i).copied().flatten());
            bars.push(DailyBar {
                date,
                close,
                adj_close,
            });
        }
        Ok(bars)
    }

    fn parse_summary(resp: SummaryResponse) -> CompanyInfo {
        let Some(modules) = resp
            .quote_summary
            .result
            .and_then(|r| r.into_iter().next())
        else {
            return CompanyInfo::default();
        };
        let (name, market_cap) = match modules.price {
            Some(price) => (
                price.short_name,
                price.market_cap.and_then(|m| m.raw).map(|raw| raw as u64),
            ),
            None => (None, None),
        };
        let sector = modules.asset_profile.and_then(|profile| profile.sector);
        CompanyInfo {
            name,
            market_cap,
            sector,
        }
    }
}

impl MarketData for YahooMarket {
    async fn daily_bars(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyBar>> {
        let url = Self::chart_url(ticker, start, end);
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            bail!("HTTP {status} fetching bars for {ticker}");
        }
        let chart: ChartResponse = resp.json().await?;
        Self::parse_chart(ticker, chart)
    }

    async fn company_info(&self, ticker: &str) -> Result<CompanyInfo> {
        let url = Self::summary_url(ticker);
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            bail!("HTTP {status} fetching company info for {ticker}");
        }
        let summary: SummaryResponse = resp.json().await?;
        Ok(Self::parse_summary(summary))
    }
}
