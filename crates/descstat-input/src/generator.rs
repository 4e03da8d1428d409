use std::str::FromStr;

use rand::{Rng, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::InvalidParameters;

/// Arguments to [`DataGenerator::generate`], written as `LOWER,UPPER,COUNT`.
///
/// ```
/// use descstat_input::generator::GeneratorParams;
///
/// let params = "-1.5, 3, 20".parse::<GeneratorParams>().unwrap();
/// assert_eq!(params, GeneratorParams { lower: -1.5, upper: 3.0, count: 20 });
/// assert!("1,2".parse::<GeneratorParams>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorParams {
    /// Inclusive lower bound.
    pub lower: f64,
    /// Exclusive upper bound.
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("expected LOWER,UPPER,COUNT, got {input:?}")]
pub struct ParseParamsError {
    input: String,
}

impl FromStr for GeneratorParams {
    type Err = ParseParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseParamsError {
            input: s.to_owned(),
        };
        let parts = s.split(',').map(str::trim).collect::<Vec<_>>();
        let [lower, upper, count] = parts.as_slice() else {
            return Err(err());
        };
        Ok(Self {
            lower: lower.parse().map_err(|_| err())?,
            upper: upper.parse().map_err(|_| err())?,
            count: count.parse().map_err(|_| err())?,
        })
    }
}

/// Generates uniformly distributed pseudorandom sample values.
///
/// # Example
///
/// ```
/// use descstat_input::generator::DataGenerator;
///
/// let mut generator = DataGenerator::with_seed(42);
/// let values = generator.generate(10.0, 20.0, 100).unwrap();
/// assert_eq!(values.len(), 100);
/// assert!(values.iter().all(|v| (10.0..20.0).contains(v)));
///
/// // Same seed, same values
/// let again = DataGenerator::with_seed(42).generate(10.0, 20.0, 100).unwrap();
/// assert_eq!(values, again);
/// ```
#[derive(Debug, Clone)]
pub struct DataGenerator {
    rng: Pcg32,
}

impl Default for DataGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DataGenerator {
    /// Creates a generator seeded from the OS's random data source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for reproducible output.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Draws `count` values from `[lower, upper)`.
    ///
    /// # Errors
    ///
    /// * [`InvalidParameters::Bounds`] unless both bounds are finite,
    ///   `upper > lower` and `upper - lower` does not overflow
    /// * [`InvalidParameters::Count`] if `count` is zero
    pub fn generate(
        &mut self,
        lower: f64,
        upper: f64,
        count: usize,
    ) -> Result<Vec<f64>, InvalidParameters> {
        if !(upper > lower && (upper - lower).is_finite()) {
            return Err(InvalidParameters::Bounds { lower, upper });
        }
        if count == 0 {
            return Err(InvalidParameters::Count);
        }

        let values = (0..count).map(|_| self.draw(lower, upper)).collect::<Vec<_>>();
        log::debug!("generated {count} values in [{lower}, {upper})");
        Ok(values)
    }

    /// Draws one value from `[lower, upper)`.
    ///
    /// Float sampling can round up to `upper` on narrow ranges; such draws
    /// are repeated.
    fn draw(&mut self, lower: f64, upper: f64) -> f64 {
        loop {
            let value = self.rng.random_range(lower..upper);
            if value < upper {
                return value;
            }
        }
    }

    pub fn generate_with(&mut self, params: GeneratorParams) -> Result<Vec<f64>, InvalidParameters> {
        self.generate(params.lower, params.upper, params.count)
    }
}
