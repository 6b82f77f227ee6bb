pub mod message;
pub mod stores;
pub mod types;

pub use message::{extract_domain, extract_sender_name, NormalizedMessage};
pub use stores::{KeywordSet, KeywordStore, LearnedPatterns};
pub use types::{ClassificationResult, ClassifierStats, LearnedSummary};
