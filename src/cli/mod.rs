//! CLI infrastructure for feature-arff
//!
//! Commands for turning matrix files into ARFF and writing the demo relation.

pub mod commands;
pub mod logging;
pub mod output;
