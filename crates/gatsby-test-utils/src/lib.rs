//! Shared test fixtures for the Netlify Gatsby plugin workspace.
//!
//! Dev-dependency only; never published.
//!
//! - [`site`]: [`TestSite`], a temporary Gatsby site layout
//! - [`fakes`]: recording implementations of the host capabilities
//! - [`logs`]: capture of `tracing` output

pub mod fakes;
pub mod logs;
pub mod site;

pub use fakes::{CacheCall, RecordingCache, RecordingCopier, RecordingReporter};
pub use logs::{LogBuffer, capture_logs};
pub use site::TestSite;
