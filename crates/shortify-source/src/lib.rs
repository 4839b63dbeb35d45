//! YouTube Data API client for channel candidate queries.
//!
//! This crate provides:
//! - Recent-video search for a channel, returned as a shuffled
//!   candidate list
//! - Channel branding lookup (logo thumbnail) for the watermark

pub mod client;
pub mod error;
mod types;

pub use client::{ChannelClient, DEFAULT_BASE_URL, MAX_RESULTS_CAP};
pub use error::{SourceError, SourceResult};
