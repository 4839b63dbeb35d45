//! Shared data models for the shortify pipeline.
//!
//! This crate provides Serde-serializable types for:
//! - Candidates returned by the channel query
//! - Downloaded media pairs
//! - Composition and encoding configuration
//! - Filename sanitization and title banner layout

pub mod candidate;
pub mod composition;
pub mod encoding;
pub mod media_pair;
pub mod sanitize;
pub mod titling;

// Re-export common types
pub use candidate::{watch_url, Candidate};
pub use composition::{BannerConfig, CompositionSpec, WatermarkConfig};
pub use encoding::EncodingConfig;
pub use media_pair::MediaPair;
pub use sanitize::sanitize_title;
pub use titling::{wrap, WrappedTitle};
