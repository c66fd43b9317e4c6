use crate::api::types::AnalysisResponse;
use crate::error::{Result, TokenScoreError};

const MAX_ERROR_BODY_CHARS: usize = 300;

pub async fn check_response_status(response: reqwest::Response) -> Result<reqwest::Response> {
    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        tracing::error!(
            status = %status,
            error = %error_text,
            "Analysis request failed"
        );
        let error_text = truncate(error_text.trim(), MAX_ERROR_BODY_CHARS);
        return Err(TokenScoreError::Api(if error_text.is_empty() {
            format!("request failed with status {}", status)
        } else {
            format!("request failed with status {}: {}", status, error_text)
        }));
    }
    Ok(response)
}

/// Decode the body ourselves so a bad payload is reported by what was wrong with it.
pub fn parse_analysis_body(body: &str) -> Result<AnalysisResponse> {
    serde_json::from_str(body).map_err(|e| {
        tracing::error!(
            error = %e,
            body = %truncate(body, MAX_ERROR_BODY_CHARS),
            "Unexpected analysis payload"
        );
        if e.is_syntax() || e.is_eof() {
            TokenScoreError::MalformedResponse(format!("body is not valid JSON ({})", e))
        } else {
            TokenScoreError::MalformedResponse(e.to_string())
        }
    })
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_body() {
        let response =
            parse_analysis_body(r#"{"analysis": " BTC is up ", "coins": ["btc"]}"#).unwrap();
        assert_eq!(response.analysis, " BTC is up ");
        assert_eq!(response.coins, vec!["btc"]);
    }

    #[test]
    fn test_parse_non_json_body() {
        let err = parse_analysis_body("<html>Bad Gateway</html>").unwrap_err();
        match err {
            TokenScoreError::MalformedResponse(msg) => assert!(msg.contains("not valid JSON")),
            other => panic!("Expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_missing_field() {
        let err = parse_analysis_body(r#"{"analysis": "hi"}"#).unwrap_err();
        match err {
            TokenScoreError::MalformedResponse(msg) => assert!(msg.contains("coins")),
            other => panic!("Expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_large_bad_body_is_still_reported() {
        let page = format!("<html>{}</html>", "x".repeat(50_000));
        let err = parse_analysis_body(&page).unwrap_err();
        assert!(matches!(err, TokenScoreError::MalformedResponse(_)));
        assert_eq!(truncate(&page, MAX_ERROR_BODY_CHARS).chars().count(), MAX_ERROR_BODY_CHARS + 1);
    }

    #[test]
    fn test_truncate_on_char_boundary() {
        assert_eq!(truncate("ééé", 2), "éé…");
        assert_eq!(truncate("short", 10), "short");
    }
}
