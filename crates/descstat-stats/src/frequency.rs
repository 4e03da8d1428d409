use std::collections::HashMap;

/// Occurrence counts of distinct sample values.
///
/// Values are compared by exact bit pattern: no tolerance or binning is
/// applied, so `0.1 + 0.2` and `0.3` are distinct values, as are `0.0` and
/// `-0.0`.
///
/// # Examples
///
/// ```
/// use descstat_stats::frequency::FrequencyTable;
///
/// let table = FrequencyTable::from_values(&[2.0, 2.0, 3.0, 4.0]);
/// assert_eq!(table.count_of(2.0), 2);
/// assert_eq!(table.max_count(), 2);
/// assert_eq!(table.modes(), vec![2.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<u64, usize>,
}

impl FrequencyTable {
    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        let mut counts = HashMap::new();
        for value in values {
            *counts.entry(value.to_bits()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of distinct values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    #[must_use]
    pub fn count_of(&self, value: f64) -> usize {
        self.counts.get(&value.to_bits()).copied().unwrap_or(0)
    }

    /// The highest occurrence count, or `0` for an empty table.
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// All values whose count equals [`Self::max_count`], in ascending order.
    ///
    /// When every value is distinct, every value is a mode.
    #[must_use]
    pub fn modes(&self) -> Vec<f64> {
        let max_count = self.max_count();
        let mut modes = self
            .counts
            .iter()
            .filter(|&(_, &count)| count == max_count)
            .map(|(&bits, _)| f64::from_bits(bits))
            .collect::<Vec<_>>();
        modes.sort_by(f64::total_cmp);
        modes
    }

    /// Iterates over `(value, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        self.counts
            .iter()
            .map(|(&bits, &count)| (f64::from_bits(bits), count))
    }
}
