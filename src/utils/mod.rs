//! Utility modules for instrumentation and benchmark sweeps.

pub mod cpu_affinity;
pub mod ops;
pub mod runner;
pub mod timer;

// Re-export commonly used items
pub use cpu_affinity::ThreadPin;
pub use ops::{log2_ceil, OpCounter};
pub use runner::{export_csv, sweep, SweepConfig, SweepPoint};
pub use timer::{format_duration, PinStrategy, Stopwatch};

/// One implementation variant of a family of interchangeable algorithms.
/// Generic over F which is the function signature.
pub struct VariantInfo<F> {
    /// Registry id of the unit wrapping this variant (e.g., "merge-sort")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation function
    pub function: F,
}
