use std::{io::Write as _, path::PathBuf};

use descstat_stats::StatisticsEngine;

use crate::{
    command::source::SourceArg,
    measure::{Measure, MeasureReport},
    render,
    util::Output,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SummaryArg {
    #[clap(flatten)]
    source: SourceArg,
    /// Seed for --generate
    #[arg(long, requires = "generate")]
    seed: Option<u64>,
    /// Print only this statistic instead of all of them
    #[arg(long)]
    measure: Option<Measure>,
    /// Write JSON instead of text
    #[arg(long)]
    json: bool,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let mut engine = StatisticsEngine::new();
    engine.load(arg.source.load(arg.seed)?);
    if !engine.is_loaded() {
        anyhow::bail!("the data source contains no values");
    }

    let mut output = Output::from_output_path(arg.output.clone())?;
    match arg.measure {
        Some(measure) => {
            let report = MeasureReport {
                measure,
                value: measure.evaluate(&engine)?,
            };
            if arg.json {
                output.write_json(&report)?;
            } else {
                output.write_with(|out| writeln!(out, "{}: {}", report.measure, report.value))?;
            }
        }
        None => {
            let summary = engine.summary()?;
            if arg.json {
                output.write_json(&summary)?;
            } else {
                output.write_with(|out| render::write_summary(out, &summary))?;
            }
        }
    }
    Ok(())
}
