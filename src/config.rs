use std::env;

const DEFAULT_MARKET_DATA_URL: &str = "https://query1.finance.yahoo.com";
const DEFAULT_MARKET_DATA_TIMEOUT_SECS: u64 = 10;
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

#[derive(Clone, Debug)]
pub struct Config {
    pub market_data_url: String,
    pub market_data_timeout_secs: u64,
    pub market_data_user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            market_data_url: DEFAULT_MARKET_DATA_URL.to_string(),
            market_data_timeout_secs: DEFAULT_MARKET_DATA_TIMEOUT_SECS,
            market_data_user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Reads the market data settings. The bot token itself is picked up by
    /// `Bot::from_env` from `TELOXIDE_TOKEN`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            market_data_url: lookup("MARKET_DATA_URL").unwrap_or(defaults.market_data_url),
            market_data_timeout_secs: lookup("MARKET_DATA_TIMEOUT_SECS")
                .and_then(|secs| secs.parse().ok())
                .unwrap_or(defaults.market_data_timeout_secs),
            market_data_user_agent: lookup("MARKET_DATA_USER_AGENT")
                .unwrap_or(defaults.market_data_user_agent),
        }
    }
}
