use std::{fmt::Display, io};

use descstat_stats::summary::Summary;

use crate::measure::Measure;

/// Number of mode values shown before the rest are summarized as a count.
const MODE_DISPLAY_LIMIT: usize = 5;

/// Formats values space-separated, truncating after [`MODE_DISPLAY_LIMIT`].
pub(crate) fn format_values(values: &[f64]) -> String {
    let mut out = values
        .iter()
        .take(MODE_DISPLAY_LIMIT)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    if values.len() > MODE_DISPLAY_LIMIT {
        let rest = values.len() - MODE_DISPLAY_LIMIT;
        out.push_str(&format!(" ... and {rest} more value(s)"));
    }
    out
}

fn or_undefined<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "undefined".to_owned(), |v| v.to_string())
}

pub(crate) fn write_summary<W>(out: &mut W, summary: &Summary) -> io::Result<()>
where
    W: io::Write + ?Sized,
{
    writeln!(out, "Number of values: {}", summary.count)?;
    writeln!(out, "{}: {}", Measure::Min, summary.min)?;
    writeln!(out, "{}: {}", Measure::Max, summary.max)?;
    writeln!(out, "{}: {}", Measure::Mode, format_values(&summary.mode))?;
    writeln!(out, "{}: {}", Measure::Median, summary.median)?;
    writeln!(out, "{}: {}", Measure::Mean, summary.mean)?;
    writeln!(
        out,
        "{}: {}",
        Measure::MeanAbsoluteDeviation,
        summary.mean_absolute_deviation
    )?;
    writeln!(
        out,
        "{}: {}",
        Measure::SampleVariance,
        or_undefined(summary.sample_variance)
    )?;
    writeln!(
        out,
        "{}: {}",
        Measure::SampleStandardDeviation,
        or_undefined(summary.sample_standard_deviation)
    )?;
    writeln!(
        out,
        "{}: {}",
        Measure::PopulationVariance,
        summary.population_variance
    )?;
    writeln!(
        out,
        "{}: {}",
        Measure::PopulationStandardDeviation,
        or_undefined(summary.population_standard_deviation)
    )?;
    writeln!(
        out,
        "{}: {}",
        Measure::HarmonicMean,
        or_undefined(summary.harmonic_mean)
    )?;
    Ok(())
}
