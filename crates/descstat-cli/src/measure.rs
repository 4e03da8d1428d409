use std::fmt;

use descstat_stats::{StatisticsEngine, StatsError};
use serde::Serialize;

use crate::render;

/// A single statistic that can be requested from the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, derive_more::Display, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum Measure {
    #[display("Minimum")]
    Min,
    #[display("Maximum")]
    Max,
    #[display("Mode")]
    Mode,
    #[display("Median")]
    Median,
    #[display("Mean")]
    Mean,
    #[display("Harmonic mean")]
    HarmonicMean,
    #[display("Mean absolute deviation")]
    MeanAbsoluteDeviation,
    #[display("Population variance")]
    PopulationVariance,
    #[display("Population standard deviation")]
    PopulationStandardDeviation,
    #[display("Sample variance")]
    SampleVariance,
    #[display("Sample standard deviation")]
    SampleStandardDeviation,
}

impl Measure {
    /// Menu order of the interactive shell.
    pub(crate) const ALL: [Self; 11] = [
        Self::Min,
        Self::Max,
        Self::Mode,
        Self::Median,
        Self::Mean,
        Self::HarmonicMean,
        Self::MeanAbsoluteDeviation,
        Self::PopulationVariance,
        Self::PopulationStandardDeviation,
        Self::SampleVariance,
        Self::SampleStandardDeviation,
    ];

    pub(crate) fn evaluate(self, engine: &StatisticsEngine) -> Result<MeasureValue, StatsError> {
        let value = match self {
            Self::Min => engine.min()?,
            Self::Max => engine.max()?,
            Self::Mode => return engine.mode().map(MeasureValue::Values),
            Self::Median => engine.median()?,
            Self::Mean => engine.mean()?,
            Self::HarmonicMean => engine.harmonic_mean()?,
            Self::MeanAbsoluteDeviation => engine.mean_absolute_deviation()?,
            Self::PopulationVariance => engine.population_variance()?,
            Self::PopulationStandardDeviation => engine.population_standard_deviation()?,
            Self::SampleVariance => engine.sample_variance()?,
            Self::SampleStandardDeviation => engine.sample_standard_deviation()?,
        };
        Ok(MeasureValue::Scalar(value))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub(crate) enum MeasureValue {
    Scalar(f64),
    Values(Vec<f64>),
}

impl fmt::Display for MeasureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(value) => write!(f, "{value}"),
            Self::Values(values) => f.write_str(&render::format_values(values)),
        }
    }
}

/// A measure paired with its value, as written by `summary --measure --json`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct MeasureReport {
    pub(crate) measure: Measure,
    pub(crate) value: MeasureValue,
}
