//! Log setup for the catalog binaries.
//!
//! Library crates only emit `tracing` events; a binary calls [`init`] once at
//! startup to route them to stderr.

/// Install the JSON log subscriber filtered by `RUST_LOG`.
///
/// Repeated calls keep the first subscriber.
pub fn init() {
    tracing::init();
}

/// Subscriber construction and filter defaults.
pub mod tracing;
