use anyhow::Result;
use chrono::{Duration, Local};
use log::warn;
use std::io;

use sector_recommender::input::{prompt_risk_level, prompt_sector_choice};
use sector_recommender::market::{CompanyInfo, MarketData, YahooMarket};
use sector_recommender::recommend::{best_ticker, Recommendation};
use sector_recommender::sectors::SECTORS;

const LOOKBACK_DAYS: i64 = 180;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    println!("Welcome to the sector stock recommender");
    println!("Choose a sector:");
    for (i, sector) in SECTORS.iter().enumerate() {
        println!("{}. {}", i + 1, sector.name);
    }

    let mut stdin = io::stdin().lock();
    let sector = &SECTORS[prompt_sector_choice(&mut stdin, SECTORS.len())?];
    let risk = prompt_risk_level(&mut stdin)?;

    let end = Local::now().date_naive();
    let start = end - Duration::days(LOOKBACK_DAYS);

    println!(
        "Scoring {} tickers in {} over the last {} days...",
        sector.tickers.len(),
        sector.name,
        LOOKBACK_DAYS
    );

    let market = YahooMarket::new()?;
    let Some((winner, _)) = best_ticker(&market, sector.tickers, risk, start, end).await else {
        println!("No valid data available for your chosen sector.");
        return Ok(());
    };

    // A metadata failure after a winner exists degrades to defaults.
    let info = match market.company_info(&winner).await {
        Ok(info) => info,
        Err(e) => {
            warn!("could not fetch company info for {winner}: {e}");
            CompanyInfo::default()
        }
    };
    let rec = Recommendation::new(winner, info, sector.name);

    println!();
    println!(
        "Best stock for sector '{}' at risk level '{}':",
        rec.sector,
        risk.label()
    );
    println!("{} ({})", rec.name, rec.ticker);
    println!("Market Cap: {}", rec.market_cap);

    Ok(())
}
