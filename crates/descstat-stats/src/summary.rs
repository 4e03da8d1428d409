use serde::Serialize;

use crate::{frequency::FrequencyTable, sample_set::SampleSet};

/// Every statistic of one sample set.
///
/// Statistics that are undefined for the sample set are `None`: the sample
/// flavours for a single sample, the harmonic mean when a sample is zero, and
/// standard deviations whose variance is not finite.
///
/// # Examples
///
/// ```
/// use descstat_stats::{sample_set::SampleSet, summary::Summary};
///
/// let samples = SampleSet::new([2.0, 2.0, 3.0, 4.0]).unwrap();
/// let summary = Summary::from_samples(&samples);
/// assert_eq!(summary.count, 4);
/// assert_eq!(summary.mode, vec![2.0]);
/// assert_eq!(summary.median, 2.5);
/// assert!(summary.sample_variance.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    /// Values sharing the highest occurrence count, in ascending order.
    pub mode: Vec<f64>,
    pub median: f64,
    pub mean: f64,
    pub harmonic_mean: Option<f64>,
    pub mean_absolute_deviation: f64,
    pub sample_variance: Option<f64>,
    pub sample_standard_deviation: Option<f64>,
    pub population_variance: f64,
    pub population_standard_deviation: Option<f64>,
}

impl Summary {
    #[must_use]
    pub fn from_samples(samples: &SampleSet) -> Self {
        Self {
            count: samples.len(),
            min: samples.min(),
            max: samples.max(),
            mode: FrequencyTable::from_values(samples).modes(),
            median: samples.median(),
            mean: samples.mean(),
            harmonic_mean: samples.harmonic_mean().ok(),
            mean_absolute_deviation: samples.mean_absolute_deviation(),
            sample_variance: samples.sample_variance().ok(),
            sample_standard_deviation: samples.sample_standard_deviation().ok(),
            population_variance: samples.population_variance(),
            population_standard_deviation: samples.population_standard_deviation().ok(),
        }
    }
}
