//! Mean, dispersion and related moment-based statistics of a [`SampleSet`].

use crate::{
    error::{DomainError, StatsError},
    sample_set::SampleSet,
    sqrt::sqrt,
};

impl SampleSet {
    /// Sum of all samples.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.iter().sum()
    }

    /// Arithmetic mean.
    ///
    /// # Examples
    ///
    /// ```
    /// use descstat_stats::sample_set::SampleSet;
    ///
    /// let samples = SampleSet::new([1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    /// assert_eq!(samples.mean(), 3.0);
    /// ```
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.sum() / self.n()
    }

    /// Number of samples divided by the sum of their reciprocals.
    ///
    /// A reciprocal sum that cancels out to zero (e.g. `[1.0, -1.0]`) is not
    /// rejected; the infinite result is returned as is.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ZeroSample`] if any sample equals zero.
    pub fn harmonic_mean(&self) -> Result<f64, DomainError> {
        if self.iter().any(|&v| v == 0.0) {
            return Err(DomainError::ZeroSample);
        }
        let reciprocal_sum = self.iter().map(|v| v.recip()).sum::<f64>();
        Ok(self.n() / reciprocal_sum)
    }

    /// Mean of the absolute deviations from the mean.
    #[must_use]
    pub fn mean_absolute_deviation(&self) -> f64 {
        let mean = self.mean();
        self.iter().map(|v| (v - mean).abs()).sum::<f64>() / self.n()
    }

    fn sum_of_squared_deviations(&self) -> f64 {
        let mean = self.mean();
        self.iter().map(|v| (v - mean).powi(2)).sum()
    }

    /// Variance with Bessel's correction (divisor `n - 1`).
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InsufficientSamples`] for fewer than two samples.
    ///
    /// # Examples
    ///
    /// ```
    /// use descstat_stats::sample_set::SampleSet;
    ///
    /// let samples = SampleSet::new([1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    /// assert_eq!(samples.sample_variance().unwrap(), 2.5);
    /// assert!(SampleSet::new([5.0]).unwrap().sample_variance().is_err());
    /// ```
    pub fn sample_variance(&self) -> Result<f64, StatsError> {
        if self.len() < 2 {
            return Err(StatsError::InsufficientSamples {
                required: 2,
                actual: self.len(),
            });
        }
        Ok(self.sum_of_squared_deviations() / (self.n() - 1.0))
    }

    /// Square root of [`Self::sample_variance`], computed with [`sqrt`].
    ///
    /// # Errors
    ///
    /// * [`StatsError::InsufficientSamples`] for fewer than two samples
    /// * [`StatsError::Domain`] if the variance is not finite
    ///
    /// # Examples
    ///
    /// ```
    /// use descstat_stats::sample_set::SampleSet;
    ///
    /// let samples = SampleSet::new([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    /// let sd = samples.sample_standard_deviation().unwrap();
    /// assert!((sd - 2.138).abs() <= 0.1);
    /// ```
    pub fn sample_standard_deviation(&self) -> Result<f64, StatsError> {
        Ok(sqrt(self.sample_variance()?)?)
    }

    /// Variance of the samples treated as the whole population (divisor `n`).
    #[must_use]
    pub fn population_variance(&self) -> f64 {
        self.sum_of_squared_deviations() / self.n()
    }

    /// Square root of [`Self::population_variance`], computed with [`sqrt`].
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OutOfRange`] if the variance is not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use descstat_stats::sample_set::SampleSet;
    ///
    /// let samples = SampleSet::new([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    /// assert_eq!(samples.population_variance(), 4.0);
    /// assert!((samples.population_standard_deviation().unwrap() - 2.0).abs() <= 0.1);
    /// ```
    pub fn population_standard_deviation(&self) -> Result<f64, DomainError> {
        sqrt(self.population_variance())
    }
}
