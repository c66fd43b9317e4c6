use super::Exchange;

/// Append-only log of the exchanges made during one session.
#[derive(Debug, Default, Clone)]
pub struct SessionStore {
    exchanges: Vec<Exchange>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, exchange: Exchange) {
        self.exchanges.push(exchange);
    }

    /// Exchanges in the order they were appended.
    pub fn all(&self) -> &[Exchange] {
        &self.exchanges
    }

    /// Exchanges in display order, most recent first.
    pub fn newest_first(&self) -> impl Iterator<Item = &Exchange> {
        self.exchanges.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }
}
