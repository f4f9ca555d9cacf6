//! Static sector catalog: six S&P 500 sectors, twenty symbols each.
//!
//! The order of `SECTORS` is part of the contract: menu numbers are derived
//! from it, and score ties go to the first-seen ticker within a sector.

#[derive(Debug)]
pub struct Sector {
    pub name: &'static str,
    pub tickers: &'static [&'static str],
}

pub const SECTORS: &[Sector] = &[
    Sector {
        name: "Consumer Cyclicals",
        tickers: &[
            "AMZN", "TSLA", "NKE", "MCD", "SBUX", "HD", "LOW", "LULU", "ROST", "TJX",
            "BKNG", "MAR", "YUM", "LEG", "EXPE", "ORLY", "CPRI", "DG", "RH", "BBY",
        ],
    },
    Sector {
        name: "Financials",
        tickers: &[
            "JPM", "BAC", "C", "WFC", "GS", "MS", "AXP", "BLK", "SCHW", "PNC",
            "TFC", "USB", "COF", "BK", "FITB", "STT", "ICE", "SPGI", "AON", "MMC",
        ],
    },
    Sector {
        name: "Energy",
        tickers: &[
            "XOM", "CVX", "COP", "SLB", "HAL", "PSX", "VLO", "MPC", "OXY", "PXD",
            "KMI", "EOG", "NOV", "APA", "CPE", "FANG", "OKE", "HES", "BKR", "MRO",
        ],
    },
    Sector {
        name: "Industrials",
        tickers: &[
            "BA", "CAT", "LMT", "HON", "DE", "UPS", "UNP", "MMM", "GD", "EMR",
            "DHR", "GE", "ETN", "ROK", "PH", "PCAR", "XYL", "CTAS", "CSX", "CHRW",
        ],
    },
    Sector {
        name: "Technology",
        tickers: &[
            "AAPL", "MSFT", "GOOGL", "NVDA", "ADBE", "ORCL", "INTC", "CSCO", "CRM", "IBM",
            "QCOM", "TXN", "AVGO", "AMD", "NOW", "SNPS", "ANSS", "ADI", "MU", "LRCX",
        ],
    },
    Sector {
        name: "Healthcare",
        tickers: &[
            "PFE", "JNJ", "MRNA", "ABT", "MRK", "BMY", "AMGN", "GILD", "BIIB", "REGN",
            "VRTX", "ISRG", "MDT", "SYK", "BSX", "EW", "ZTS", "ALXN", "IQV", "HUM",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_six_sectors_of_twenty() {
        assert_eq!(SECTORS.len(), 6);
        for sector in SECTORS {
            assert_eq!(sector.tickers.len(), 20, "sector {}", sector.name);
        }
    }

    #[test]
    fn technology_is_fifth_on_the_menu() {
        assert_eq!(SECTORS[4].name, "Technology");
        assert_eq!(SECTORS[4].tickers[0], "AAPL");
    }
}
