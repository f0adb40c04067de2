//! Configuration for the affinity graph builder.

mod settings;

pub use settings::*;
