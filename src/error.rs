use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenScoreError {
    /// Rejected locally before any request is made
    #[error("{0}")]
    Validation(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{message}: {source}")]
    Context {
        message: String,
        #[source]
        source: Box<TokenScoreError>,
    },
}

impl TokenScoreError {
    /// True for failures of the remote analysis call.
    pub fn is_analysis_failure(&self) -> bool {
        match self {
            Self::Api(_) | Self::Http(_) | Self::MalformedResponse(_) => true,
            Self::Context { source, .. } => source.is_analysis_failure(),
            _ => false,
        }
    }

    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Http(e) if e.is_connect() => {
                Some("Is the analysis service running? Check --api-url or TOKENSCORE_API_URL")
            }
            Self::Http(e) if e.is_timeout() => Some("The analysis service did not answer in time"),
            Self::MalformedResponse(_) => {
                Some("The service answered, but not with {\"analysis\": ..., \"coins\": [...]}")
            }
            Self::Toml(_) => Some("Expected a line like: api_url = \"http://localhost:5000\""),
            Self::Context { source, .. } => source.hint(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TokenScoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_remote_failures() {
        assert!(TokenScoreError::Api("500".into()).is_analysis_failure());
        assert!(TokenScoreError::MalformedResponse("x".into()).is_analysis_failure());
        assert!(!TokenScoreError::Validation("empty".into()).is_analysis_failure());
        assert!(!TokenScoreError::Config("bad".into()).is_analysis_failure());
    }

    #[test]
    fn test_context_keeps_classification_and_hint() {
        let err = TokenScoreError::Context {
            message: "Analysis Error".into(),
            source: Box::new(TokenScoreError::MalformedResponse("missing field".into())),
        };
        assert!(err.is_analysis_failure());
        assert!(err.hint().is_some());
        assert_eq!(
            err.to_string(),
            "Analysis Error: Malformed response: missing field"
        );
    }
}
