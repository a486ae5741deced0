//! Word-polarity model
//!
//! Learns per-word phishing/legitimate occurrence counts from labeled
//! training text and scores unseen text as a sum of per-token dominance
//! votes.

pub mod model;
pub mod types;

pub use model::PolarityModel;
pub use types::PolarityEntry;
