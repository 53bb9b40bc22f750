//! Application initialization.
//!
//! This module sets up the shared resources of a run:
//! - the logger (`env_logger` with colored or JSON output)
//! - the suffix resolver shared by every parse and aggregation call

mod logger;

use std::sync::Arc;

use crate::domain::PslResolver;

// Re-export public API
pub use logger::init_logger_with;

/// Initializes the Public Suffix List resolver.
///
/// The list is compiled into the binary, so this never touches the network.
/// The returned resolver is immutable and can be shared across calls.
pub fn init_resolver() -> Arc<PslResolver> {
    Arc::new(PslResolver)
}
