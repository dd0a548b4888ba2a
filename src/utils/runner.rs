//! Benchmark sweep: run one unit over generated inputs of growing size, and
//! export the formatted reports to CSV.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;

use crate::error::RegistryError;
use crate::harness::{execute, ExecutionResult, HarnessConfig};
use crate::registry::AlgorithmRegistry;
use crate::report::{csv_header, Report};

/// Configuration for a sweep
#[derive(Clone, Debug)]
pub struct SweepConfig {
    /// Input sizes, run in the given order (default: 16, 64, 256, 1024)
    pub sizes: Vec<usize>,
    /// Seed for input generation
    pub seed: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            sizes: vec![16, 64, 256, 1024],
            seed: 0,
        }
    }
}

/// One run of a sweep.
#[derive(Clone, Debug)]
pub struct SweepPoint {
    pub size: usize,
    /// Generated raw input, as handed to the harness
    pub input: Value,
    pub result: ExecutionResult,
}

/// Run unit `id` once per configured size on generated input.
///
/// Units that cannot generate input yield an empty sweep. Inputs come from a
/// single `StdRng` seeded with `config.seed`, so a sweep is reproducible.
pub fn sweep(
    registry: &AlgorithmRegistry,
    id: &str,
    config: &SweepConfig,
    harness: &HarnessConfig,
) -> Result<Vec<SweepPoint>, RegistryError> {
    let unit = registry.lookup(id)?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut points = Vec::with_capacity(config.sizes.len());

    for &size in &config.sizes {
        let Some(input) = unit.generate_input(size, &mut rng) else {
            tracing::debug!(id, "unit does not generate inputs, sweep skipped");
            break;
        };
        let result = execute(unit, &input, harness);
        tracing::debug!(id, size, success = result.is_success(), "sweep point");
        points.push(SweepPoint {
            size,
            input,
            result,
        });
    }

    Ok(points)
}

/// Export reports to a CSV file, one row per report.
pub fn export_csv(path: impl AsRef<Path>, rows: &[Report]) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);

    writeln!(file, "{}", csv_header())?;
    for row in rows {
        writeln!(file, "{}", row.to_csv_row())?;
    }

    file.flush()
}
