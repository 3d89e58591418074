pub mod client;
pub mod search;

pub use client::{GitHubClient, GitHubClientConfig, TransferObserver};
pub use search::{SearchItem, SearchResponse};
