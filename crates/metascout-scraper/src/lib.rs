pub mod client;
pub mod error;
pub mod extract;
pub mod heuristic;
pub mod normalize;
pub mod orchestrator;
pub mod path;
pub mod rate_limit;
pub mod strategy;
pub mod structured;

pub use client::MetacriticClient;
pub use error::ScraperError;
pub use extract::PageExtractor;
pub use heuristic::HeuristicFinder;
pub use normalize::{normalize_platform, parse_numeric_text};
pub use orchestrator::{extract, resolve, resolve_and_extract, Scout};
pub use rate_limit::RequestPacer;
pub use structured::StructuredFinder;
