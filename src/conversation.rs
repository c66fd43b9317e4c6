use crate::api::AnalysisClient;
use crate::config::EMPTY_QUERY_WARNING;
use crate::error::TokenScoreError;
use crate::session::{Exchange, SessionStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    AwaitingResponse,
}

/// What became of one submitted query
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Stored at this index of the session log
    Answered(usize),
    /// Blank input, nothing was sent
    Rejected(String),
    /// The remote call failed, nothing was stored
    Failed(TokenScoreError),
}

/// Owns the session log and moves between Idle and AwaitingResponse around
/// each request. Only successful requests reach the log.
pub struct ConversationLoop {
    client: AnalysisClient,
    store: SessionStore,
    state: LoopState,
}

impl ConversationLoop {
    pub fn new(client: AnalysisClient) -> Self {
        Self {
            client,
            store: SessionStore::new(),
            state: LoopState::Idle,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn client(&self) -> &AnalysisClient {
        &self.client
    }

    pub async fn submit(&mut self, query: &str) -> SubmitOutcome {
        let query = query.trim();
        if query.is_empty() {
            tracing::debug!("Rejected blank query");
            return SubmitOutcome::Rejected(EMPTY_QUERY_WARNING.to_string());
        }

        self.state = LoopState::AwaitingResponse;
        let result = self.client.analyze(query).await;
        self.state = LoopState::Idle;

        match result {
            Ok(response) => {
                self.store.append(Exchange::completed_now(query, response));
                tracing::debug!(exchanges = self.store.len(), "Exchange stored");
                SubmitOutcome::Answered(self.store.len() - 1)
            }
            Err(TokenScoreError::Validation(warning)) => SubmitOutcome::Rejected(warning),
            Err(e) => SubmitOutcome::Failed(e),
        }
    }
}
