use std::path::PathBuf;

use descstat_input::{file, generator::GeneratorParams};

use crate::{command::source, util::Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GenerateArg {
    /// Bounds and number of values to generate
    #[arg(value_name = "LOWER,UPPER,COUNT", allow_hyphen_values = true)]
    params: GeneratorParams,
    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    let values = source::new_generator(arg.seed).generate_with(arg.params)?;
    match &arg.output {
        Some(path) => {
            file::write_values(path, &values)?;
            log::info!("Generated {} values to {}", values.len(), path.display());
        }
        None => Output::stdout().write_with(|out| file::write_values_to(out, &values))?,
    }
    Ok(())
}
