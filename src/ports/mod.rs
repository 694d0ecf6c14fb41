//! Ports (trait boundaries) for external dependencies.
//!
//! Traits here are owned by the export logic and implemented by adapters.

pub mod sink;

pub use sink::DocumentSink;
