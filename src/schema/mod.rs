//! The schema registry: which tables exist and in what order they are created.

mod registry;
mod topology;

pub use registry::*;
