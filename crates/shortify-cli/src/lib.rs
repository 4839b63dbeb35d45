//! Channel-to-short automation.
//!
//! This crate provides:
//! - Environment-sourced configuration
//! - Tracing setup (console plus append-only log file)
//! - The orchestrator trial loop over shuffled candidates

pub mod config;
pub mod error;
pub mod logging;
pub mod orchestrator;

pub use config::AppConfig;
pub use error::{RunError, RunResult};
pub use orchestrator::{MediaFetcher, Orchestrator, ShortCompositor, VideoSource};
