use crate::api::AnalysisResponse;
use chrono::{DateTime, Local};

const TIMESTAMP_FORMAT: &str = "%H:%M";

/// One answered question
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    pub query: String,
    pub response: AnalysisResponse,
    pub timestamp: DateTime<Local>,
}

impl Exchange {
    /// Stamps the exchange with the current local time.
    pub fn completed_now(query: impl Into<String>, response: AnalysisResponse) -> Self {
        Self::completed_at(query, response, Local::now())
    }

    pub fn completed_at(
        query: impl Into<String>,
        response: AnalysisResponse,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            query: query.into(),
            response,
            timestamp,
        }
    }

    /// Coins joined for display, e.g. `BTC, ETH`. The stored casing is untouched.
    pub fn coins_display(&self) -> String {
        self.response.coins.join(", ").to_uppercase()
    }

    pub fn timestamp_display(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn response(coins: &[&str]) -> AnalysisResponse {
        AnalysisResponse {
            analysis: "text".to_string(),
            coins: coins.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_coins_display_uppercases_copy() {
        let exchange = Exchange::completed_now("Compare", response(&["btc", "eth"]));

        assert_eq!(exchange.coins_display(), "BTC, ETH");
        assert_eq!(exchange.response.coins, vec!["btc", "eth"]);
    }

    #[test]
    fn test_coins_display_empty() {
        let exchange = Exchange::completed_now("Hello", response(&[]));
        assert_eq!(exchange.coins_display(), "");
    }

    #[test]
    fn test_timestamp_display_is_hours_minutes() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 42).unwrap();
        let exchange = Exchange::completed_at("q", response(&["sol"]), at);
        assert_eq!(exchange.timestamp_display(), "07:05");
    }
}
