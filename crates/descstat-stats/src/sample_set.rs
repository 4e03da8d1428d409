use std::ops::Deref;

/// A non-empty set of samples kept in ascending order.
///
/// Values are ordered with [`f64::total_cmp`], so NaN samples sort to the
/// ends instead of breaking the ordering.
///
/// # Examples
///
/// ```
/// use descstat_stats::sample_set::SampleSet;
///
/// let samples = SampleSet::new([3.0, 1.0, 2.0]).unwrap();
/// assert_eq!(samples.as_slice(), &[1.0, 2.0, 3.0]);
/// assert!(SampleSet::new([]).is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    values: Vec<f64>,
}

impl SampleSet {
    /// Builds a sample set from unsorted values.
    ///
    /// Returns `None` if `values` is empty.
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(values)
    }

    /// Builds a sample set from values already sorted in ascending order.
    ///
    /// Returns `None` if `sorted_values` is empty.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: Vec<f64>) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
            "values must be sorted in ascending order"
        );
        if sorted_values.is_empty() {
            return None;
        }
        Some(Self {
            values: sorted_values,
        })
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Number of samples, as a float divisor.
    #[expect(clippy::cast_precision_loss)]
    pub(crate) fn n(&self) -> f64 {
        self.values.len() as f64
    }

    /// The smallest sample.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.values[0]
    }

    /// The largest sample.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// The middle sample, or the mean of the two middle samples when the
    /// count is even.
    ///
    /// # Examples
    ///
    /// ```
    /// use descstat_stats::sample_set::SampleSet;
    ///
    /// assert_eq!(SampleSet::new([3.0, 1.0, 2.0]).unwrap().median(), 2.0);
    /// assert_eq!(SampleSet::new([4.0, 2.0, 3.0, 2.0]).unwrap().median(), 2.5);
    /// ```
    #[must_use]
    pub fn median(&self) -> f64 {
        let mid = self.values.len() / 2;
        if self.values.len() % 2 == 0 {
            (self.values[mid - 1] + self.values[mid]) / 2.0
        } else {
            self.values[mid]
        }
    }
}

impl Deref for SampleSet {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}
