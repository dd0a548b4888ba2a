//! Statistics implementations.

mod summary;

pub use summary::summarize;
