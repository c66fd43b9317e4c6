use super::types::*;
use super::utils;
use crate::config::EMPTY_QUERY_WARNING;
use crate::error::{Result, TokenScoreError};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Url;

const CHAT_PATH: &str = "crypto-chat";

/// Sends one question to the analysis service per call. Holds no session state.
pub struct AnalysisClient {
    client: reqwest::Client,
    endpoint: String,
}

impl AnalysisClient {
    pub fn new(base_url: &Url) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| TokenScoreError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}/{}", base_url.as_str().trim_end_matches('/'), CHAT_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn analyze(&self, query: &str) -> Result<AnalysisResponse> {
        let query = query.trim();
        if query.is_empty() {
            return Err(TokenScoreError::Validation(EMPTY_QUERY_WARNING.to_string()));
        }

        let request = AnalysisRequest {
            query: query.to_string(),
        };

        tracing::debug!(url = %self.endpoint, query_len = query.len(), "Sending analysis request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(url = %self.endpoint, error = %e, "Analysis request failed");
                TokenScoreError::from(e)
            })?;

        let response = utils::check_response_status(response).await?;
        let status = response.status();
        let body = response.text().await?;
        let result = utils::parse_analysis_body(&body)?;

        tracing::debug!(status = %status, coins = result.coins.len(), "Analysis received");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn client_for(server: &mockito::ServerGuard) -> AnalysisClient {
        AnalysisClient::new(&Url::parse(&server.url()).unwrap()).unwrap()
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let with_slash = AnalysisClient::new(&Url::parse("http://localhost:5000/").unwrap()).unwrap();
        assert_eq!(with_slash.endpoint(), "http://localhost:5000/crypto-chat");

        let with_path = AnalysisClient::new(&Url::parse("http://localhost:5000/api").unwrap()).unwrap();
        assert_eq!(with_path.endpoint(), "http://localhost:5000/api/crypto-chat");
    }

    #[tokio::test]
    async fn test_analyze_posts_query_as_json() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/crypto-chat")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({"query": "Analyze BTC market trends"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"analysis": "<p>BTC is ranging.</p>", "coins": ["btc"]}"#)
            .create_async()
            .await;

        let response = client_for(&server)
            .analyze("  Analyze BTC market trends\n")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.analysis, "<p>BTC is ranging.</p>");
        assert_eq!(response.coins, vec!["btc"]);
    }

    #[tokio::test]
    async fn test_empty_query_makes_no_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/crypto-chat")
            .expect(0)
            .create_async()
            .await;

        let err = client_for(&server).analyze(" \t ").await.unwrap_err();

        mock.assert_async().await;
        assert!(matches!(err, TokenScoreError::Validation(_)));
        assert!(!err.is_analysis_failure());
    }

    #[tokio::test]
    async fn test_server_error_is_analysis_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/crypto-chat")
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let err = client_for(&server).analyze("XYZ").await.unwrap_err();

        match &err {
            TokenScoreError::Api(msg) => {
                assert!(msg.contains("500"));
                assert!(msg.contains("internal error"));
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
        assert!(err.is_analysis_failure());
    }

    #[tokio::test]
    async fn test_non_json_body_is_analysis_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/crypto-chat")
            .with_status(200)
            .with_body("definitely not json")
            .create_async()
            .await;

        let err = client_for(&server).analyze("BTC?").await.unwrap_err();
        assert!(matches!(err, TokenScoreError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_connection_error_is_analysis_failure() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let base = Url::parse(&format!("http://127.0.0.1:{}", port)).unwrap();
        let client = AnalysisClient::new(&base).unwrap();

        let err = client.analyze("BTC?").await.unwrap_err();
        assert!(matches!(err, TokenScoreError::Http(_)));
        assert!(err.is_analysis_failure());
    }
}
