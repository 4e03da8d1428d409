use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use descstat_input::{
    file,
    generator::{DataGenerator, GeneratorParams},
    manual,
};

/// Where to load the data set from. Exactly one source must be given.
#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
pub(crate) struct SourceArg {
    /// Comma-separated values (at most 1000 are read)
    #[arg(long, allow_hyphen_values = true)]
    values: Option<String>,
    /// File with one value per line
    #[arg(long)]
    file: Option<PathBuf>,
    /// Generate COUNT random values in [LOWER, UPPER)
    #[arg(long, value_name = "LOWER,UPPER,COUNT", allow_hyphen_values = true)]
    generate: Option<GeneratorParams>,
}

impl SourceArg {
    /// Loads the values of the selected source. `seed` only affects `--generate`.
    pub(crate) fn load(&self, seed: Option<u64>) -> anyhow::Result<Vec<f64>> {
        let values = if let Some(line) = &self.values {
            manual::parse_values(line).context("Failed to parse --values")?
        } else if let Some(path) = &self.file {
            file::read_values(path).context("Failed to load data file")?
        } else if let Some(params) = self.generate {
            new_generator(seed).generate_with(params)?
        } else {
            anyhow::bail!("no data source given");
        };
        log::info!("Loaded {} values", values.len());
        Ok(values)
    }
}

pub(crate) fn new_generator(seed: Option<u64>) -> DataGenerator {
    seed.map_or_else(DataGenerator::new, DataGenerator::with_seed)
}
