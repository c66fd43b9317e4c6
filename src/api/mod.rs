pub mod client;
pub mod types;
pub mod utils;

pub use client::AnalysisClient;
pub use types::*;
