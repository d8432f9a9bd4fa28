use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("market data provider answered with status {0}")]
    Status(reqwest::StatusCode),

    #[error("market data provider error: {0}")]
    Provider(String),

    #[error("no price data returned")]
    NoData,

    #[error("price data is missing the `{0}` field")]
    MissingField(&'static str),
}

/// Source of daily closing prices over the trailing year, oldest first.
#[async_trait]
pub trait PriceHistory: Send + Sync {
    async fn closing_prices(&self, ticker: &str) -> Result<Vec<f64>, MarketDataError>;
}

pub struct YahooFinance {
    base_url: String,
    client: reqwest::Client,
}

impl YahooFinance {
    pub fn new(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.market_data_timeout_secs))
            .user_agent(config.market_data_user_agent.clone())
            .build()
            .expect("Failed to build the market data HTTP client");

        Self {
            base_url: config.market_data_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn chart_url(&self, ticker: &str) -> String {
        format!(
            "{}/v8/finance/chart/{}?range=1y&interval=1d",
            self.base_url, ticker
        )
    }
}

#[async_trait]
impl PriceHistory for YahooFinance {
    async fn closing_prices(&self, ticker: &str) -> Result<Vec<f64>, MarketDataError> {
        let url = self.chart_url(ticker);
        log::debug!("Fetching price history: {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(MarketDataError::Status(response.status()));
        }

        let chart: ChartResponse = response.json().await?;
        let closes = closes_from_chart(chart)?;
        log::debug!("Got {} closing prices for {}", closes.len(), ticker);

        Ok(closes)
    }
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    indicators: Option<Indicators>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
struct Quote {
    close: Option<Vec<Option<f64>>>,
}

fn closes_from_chart(response: ChartResponse) -> Result<Vec<f64>, MarketDataError> {
    if let Some(error) = response.chart.error {
        let message = error
            .description
            .or(error.code)
            .unwrap_or_else(|| "unknown error".to_string());
        return Err(MarketDataError::Provider(message));
    }

    let result = response
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or(MarketDataError::NoData)?;

    let close = result
        .indicators
        .and_then(|indicators| indicators.quote.into_iter().next())
        .and_then(|quote| quote.close)
        .ok_or(MarketDataError::MissingField("close"))?;

    // Non-trading rows come back as nulls
    let closes: Vec<f64> = close.into_iter().flatten().collect();
    if closes.is_empty() {
        return Err(MarketDataError::NoData);
    }

    Ok(closes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<Vec<f64>, MarketDataError> {
        let response: ChartResponse = serde_json::from_str(json).expect("fixture must parse");
        closes_from_chart(response)
    }

    #[test]
    fn reads_close_series_and_skips_nulls() {
        let closes = parse(
            r#"{"chart":{"result":[{"meta":{"symbol":"AAPL"},"timestamp":[1,2,3],
            "indicators":{"quote":[{"open":[1.0,2.0,3.0],"close":[100.0,null,125.5]}]}}],
            "error":null}}"#,
        )
        .unwrap();
        assert_eq!(closes, vec![100.0, 125.5]);
    }

    #[test]
    fn provider_error_is_reported() {
        let err = parse(
            r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, MarketDataError::Provider(msg) if msg.contains("delisted")));
    }

    #[test]
    fn empty_result_is_no_data() {
        let err = parse(r#"{"chart":{"result":[],"error":null}}"#).unwrap_err();
        assert!(matches!(err, MarketDataError::NoData));

        let err = parse(
            r#"{"chart":{"result":[{"indicators":{"quote":[{"close":[null,null]}]}}],"error":null}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, MarketDataError::NoData));
    }

    #[test]
    fn missing_close_field() {
        let err = parse(
            r#"{"chart":{"result":[{"indicators":{"quote":[{"open":[1.0]}]}}],"error":null}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, MarketDataError::MissingField("close")));

        let err = parse(r#"{"chart":{"result":[{"timestamp":[]}],"error":null}}"#).unwrap_err();
        assert!(matches!(err, MarketDataError::MissingField("close")));
    }

    #[test]
    fn chart_url_uses_trailing_year_of_daily_bars() {
        let config = Config {
            market_data_url: "http://localhost:9000/".to_string(),
            ..Config::default()
        };
        let yahoo = YahooFinance::new(&config);
        assert_eq!(
            yahoo.chart_url("MSFT"),
            "http://localhost:9000/v8/finance/chart/MSFT?range=1y&interval=1d"
        );
    }
}
