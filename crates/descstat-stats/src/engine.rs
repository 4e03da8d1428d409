use crate::{
    error::StatsError, frequency::FrequencyTable, sample_set::SampleSet, summary::Summary,
};

/// Holds one sample set at a time and answers statistics queries about it.
///
/// A freshly created engine is unloaded. [`Self::load`] replaces the sample
/// set, [`Self::clear`] drops it. Every query on an unloaded engine returns
/// [`StatsError::NoDataLoaded`].
///
/// # Examples
///
/// ```
/// use descstat_stats::{StatisticsEngine, StatsError};
///
/// let mut engine = StatisticsEngine::new();
/// assert_eq!(engine.mean(), Err(StatsError::NoDataLoaded));
///
/// engine.load([5.0, 1.0, 4.0, 2.0, 3.0]);
/// assert_eq!(engine.count(), 5);
/// assert_eq!(engine.median(), Ok(3.0));
/// assert_eq!(engine.sample_variance(), Ok(2.5));
///
/// engine.clear();
/// assert!(engine.min().unwrap_err().is_no_data_loaded());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StatisticsEngine {
    samples: Option<SampleSet>,
}

impl StatisticsEngine {
    /// Creates an unloaded engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a sorted copy of `values`, discarding any previous sample set.
    ///
    /// Loading an empty sequence leaves the engine unloaded.
    pub fn load<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = f64>,
    {
        self.samples = SampleSet::new(values);
    }

    /// Discards the loaded sample set, leaving the engine unloaded.
    pub fn clear(&mut self) {
        self.samples = None;
    }

    /// Returns `true` if a non-empty sample set is loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.samples.is_some()
    }

    /// Number of loaded samples, `0` when unloaded.
    #[must_use]
    pub fn count(&self) -> usize {
        self.samples.as_ref().map_or(0, |s| s.len())
    }

    /// The loaded sample set, sorted in ascending order.
    pub fn samples(&self) -> Result<&SampleSet, StatsError> {
        self.samples.as_ref().ok_or(StatsError::NoDataLoaded)
    }

    /// The smallest sample.
    pub fn min(&self) -> Result<f64, StatsError> {
        Ok(self.samples()?.min())
    }

    /// The largest sample.
    pub fn max(&self) -> Result<f64, StatsError> {
        Ok(self.samples()?.max())
    }

    /// The middle sample, or the mean of the two middle samples for an even
    /// count. See [`SampleSet::median`].
    pub fn median(&self) -> Result<f64, StatsError> {
        Ok(self.samples()?.median())
    }

    /// All values sharing the highest occurrence count, in ascending order.
    ///
    /// Values are compared exactly, so a set of distinct values has every
    /// value as a mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use descstat_stats::StatisticsEngine;
    ///
    /// let mut engine = StatisticsEngine::new();
    /// engine.load([3.0, 1.0, 3.0, 1.0, 2.0]);
    /// assert_eq!(engine.mode(), Ok(vec![1.0, 3.0]));
    ///
    /// engine.load([4.0, 5.0]);
    /// assert_eq!(engine.mode(), Ok(vec![4.0, 5.0]));
    /// ```
    pub fn mode(&self) -> Result<Vec<f64>, StatsError> {
        Ok(FrequencyTable::from_values(self.samples()?).modes())
    }

    /// Arithmetic mean.
    pub fn mean(&self) -> Result<f64, StatsError> {
        Ok(self.samples()?.mean())
    }

    /// Count divided by the sum of reciprocals.
    ///
    /// # Errors
    ///
    /// Besides [`StatsError::NoDataLoaded`], fails with
    /// [`StatsError::Domain`] if any sample is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use descstat_stats::{DomainError, StatisticsEngine, StatsError};
    ///
    /// let mut engine = StatisticsEngine::new();
    /// engine.load([1.0, 2.0, 4.0]);
    /// assert!((engine.harmonic_mean().unwrap() - 12.0 / 7.0).abs() < 1e-12);
    ///
    /// engine.load([0.0, 2.0]);
    /// assert_eq!(
    ///     engine.harmonic_mean(),
    ///     Err(StatsError::Domain(DomainError::ZeroSample))
    /// );
    /// ```
    pub fn harmonic_mean(&self) -> Result<f64, StatsError> {
        Ok(self.samples()?.harmonic_mean()?)
    }

    /// Mean of the absolute deviations from the mean.
    pub fn mean_absolute_deviation(&self) -> Result<f64, StatsError> {
        Ok(self.samples()?.mean_absolute_deviation())
    }

    /// Variance with Bessel's correction (divisor `n - 1`).
    ///
    /// # Errors
    ///
    /// Besides [`StatsError::NoDataLoaded`], fails with
    /// [`StatsError::InsufficientSamples`] when only one sample is loaded.
    ///
    /// # Examples
    ///
    /// ```
    /// use descstat_stats::{StatisticsEngine, StatsError};
    ///
    /// let mut engine = StatisticsEngine::new();
    /// engine.load([5.0]);
    /// assert_eq!(
    ///     engine.sample_variance(),
    ///     Err(StatsError::InsufficientSamples { required: 2, actual: 1 })
    /// );
    /// assert_eq!(engine.population_variance(), Ok(0.0));
    /// ```
    pub fn sample_variance(&self) -> Result<f64, StatsError> {
        self.samples()?.sample_variance()
    }

    /// Square root of [`Self::sample_variance`], accurate to about 0.1.
    pub fn sample_standard_deviation(&self) -> Result<f64, StatsError> {
        self.samples()?.sample_standard_deviation()
    }

    /// Variance of the samples treated as the whole population (divisor `n`).
    pub fn population_variance(&self) -> Result<f64, StatsError> {
        Ok(self.samples()?.population_variance())
    }

    /// Square root of [`Self::population_variance`], accurate to about 0.1.
    pub fn population_standard_deviation(&self) -> Result<f64, StatsError> {
        Ok(self.samples()?.population_standard_deviation()?)
    }

    /// Computes every statistic of the loaded sample set at once.
    pub fn summary(&self) -> Result<Summary, StatsError> {
        Ok(Summary::from_samples(self.samples()?))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::error::DomainError;

    fn loaded(values: &[f64]) -> StatisticsEngine {
        let mut engine = StatisticsEngine::new();
        engine.load(values.iter().copied());
        engine
    }

    #[test]
    fn test_one_to_five() {
        let engine = loaded(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(engine.mean(), Ok(3.0));
        assert_eq!(engine.median(), Ok(3.0));
        assert_eq!(engine.sample_variance(), Ok(2.5));
        assert_eq!(engine.population_variance(), Ok(2.0));
    }

    #[test]
    fn test_mode_and_even_median() {
        let engine = loaded(&[2.0, 2.0, 3.0, 4.0]);
        assert_eq!(engine.mode(), Ok(vec![2.0]));
        assert_eq!(engine.median(), Ok(2.5));
    }

    #[test]
    fn test_empty_load_fails_every_query() {
        let engine = loaded(&[]);
        assert!(!engine.is_loaded());
        assert_eq!(engine.count(), 0);
        let err = Err(StatsError::NoDataLoaded);
        assert_eq!(engine.min(), err);
        assert_eq!(engine.max(), err);
        assert_eq!(engine.median(), err);
        assert_eq!(engine.mode(), Err(StatsError::NoDataLoaded));
        assert_eq!(engine.mean(), err);
        assert_eq!(engine.harmonic_mean(), err);
        assert_eq!(engine.mean_absolute_deviation(), err);
        assert_eq!(engine.sample_variance(), err);
        assert_eq!(engine.sample_standard_deviation(), err);
        assert_eq!(engine.population_variance(), err);
        assert_eq!(engine.population_standard_deviation(), err);
        assert!(engine.summary().unwrap_err().is_no_data_loaded());
    }

    #[test]
    fn test_single_sample() {
        let engine = loaded(&[5.0]);
        assert_eq!(
            engine.sample_variance(),
            Err(StatsError::InsufficientSamples {
                required: 2,
                actual: 1
            })
        );
        assert_eq!(engine.population_variance(), Ok(0.0));
        assert_eq!(engine.population_standard_deviation(), Ok(0.0));
    }

    #[test]
    fn test_harmonic_mean_zero_sample() {
        let engine = loaded(&[0.0, 1.0]);
        assert_eq!(
            engine.harmonic_mean(),
            Err(StatsError::Domain(DomainError::ZeroSample))
        );
    }

    #[test]
    fn test_clear_then_reload() {
        let mut engine = loaded(&[100.0, 200.0, 300.0]);
        engine.clear();
        assert!(!engine.is_loaded());
        assert_eq!(engine.count(), 0);
        assert_eq!(engine.max(), Err(StatsError::NoDataLoaded));

        engine.load([1.0, 3.0]);
        assert_eq!(engine.count(), 2);
        assert_eq!(engine.mean(), Ok(2.0));
        assert_eq!(engine.max(), Ok(3.0));
    }

    #[test]
    fn test_load_replaces_previous_set() {
        let mut engine = loaded(&[10.0, 20.0]);
        engine.load([1.0]);
        assert_eq!(engine.count(), 1);
        assert_eq!(engine.mean(), Ok(1.0));
    }

    #[test]
    fn test_engines_are_independent() {
        let a = loaded(&[1.0, 2.0]);
        let b = loaded(&[7.0]);
        assert_eq!(a.mean(), Ok(1.5));
        assert_eq!(b.mean(), Ok(7.0));
    }

    fn finite_vec(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec(-1e6_f64..1e6, min_len..=max_len)
    }

    proptest! {
        #[test]
        fn median_between_min_and_max(values in finite_vec(1, 200)) {
            let engine = loaded(&values);
            let median = engine.median().unwrap();
            prop_assert!(engine.min().unwrap() <= median);
            prop_assert!(median <= engine.max().unwrap());
        }

        #[test]
        fn population_variance_not_above_sample_variance(values in finite_vec(2, 200)) {
            let engine = loaded(&values);
            prop_assert!(engine.population_variance().unwrap() <= engine.sample_variance().unwrap());
        }

        #[test]
        fn modes_share_the_max_count(
            values in proptest::collection::vec((-20_i32..20).prop_map(f64::from), 1..100)
        ) {
            let engine = loaded(&values);
            let modes = engine.mode().unwrap();
            prop_assert!(!modes.is_empty());
            let table = FrequencyTable::from_values(&values);
            for mode in modes {
                prop_assert_eq!(table.count_of(mode), table.max_count());
            }
        }

        #[test]
        fn reload_has_no_residual_state(first in finite_vec(1, 50), second in finite_vec(1, 50)) {
            let mut engine = loaded(&first);
            engine.clear();
            engine.load(second.iter().copied());
            let fresh = loaded(&second);
            prop_assert_eq!(engine.count(), second.len());
            prop_assert_eq!(engine.mean(), fresh.mean());
        }

        #[test]
        fn queries_are_idempotent(values in finite_vec(2, 100)) {
            let engine = loaded(&values);
            prop_assert_eq!(engine.mode(), engine.mode());
            prop_assert_eq!(engine.mean(), engine.mean());
            prop_assert_eq!(engine.median(), engine.median());
            prop_assert_eq!(engine.sample_standard_deviation(), engine.sample_standard_deviation());
            prop_assert_eq!(engine.harmonic_mean(), engine.harmonic_mean());
        }
    }
}
