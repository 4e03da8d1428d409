use clap::{Parser, Subcommand};

use self::{generate::GenerateArg, interactive::InteractiveArg, summary::SummaryArg};

mod generate;
mod interactive;
mod source;
mod summary;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Load a data set and explore it from a menu (default)
    Interactive(#[clap(flatten)] InteractiveArg),
    /// Compute statistics of a data set
    Summary(#[clap(flatten)] SummaryArg),
    /// Generate uniformly distributed random values, one per line
    Generate(#[clap(flatten)] GenerateArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args
        .mode
        .unwrap_or(Mode::Interactive(InteractiveArg::default()))
    {
        Mode::Interactive(arg) => interactive::run(&arg)?,
        Mode::Summary(arg) => summary::run(&arg)?,
        Mode::Generate(arg) => generate::run(&arg)?,
    }
    Ok(())
}
