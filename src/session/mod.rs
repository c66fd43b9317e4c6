mod exchange;
mod store;

pub use exchange::Exchange;
pub use store::SessionStore;
