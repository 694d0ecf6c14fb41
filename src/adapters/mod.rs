//! Adapters implementing the sink port.
//!
//! Infrastructure implementations of the traits defined in the ports module.

pub mod arff_file;
pub mod in_memory;

pub use arff_file::ArffFileSink;
pub use in_memory::InMemorySink;
