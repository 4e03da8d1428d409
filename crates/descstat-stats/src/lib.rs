//! Descriptive statistics over a single in-memory sample set.
//!
//! - [`engine`]: [`StatisticsEngine`], which owns the loaded sample set and answers queries
//! - [`sample_set`]: sorted, non-empty samples with order statistics (min, max, median)
//! - [`moments`]: mean, harmonic mean, mean absolute deviation, variances and standard deviations
//! - [`frequency`]: exact-value frequency table used for the mode
//! - [`sqrt`]: the low-precision Babylonian square root used by the standard deviations
//! - [`summary`]: every statistic of a sample set at once
//!
//! # Examples
//!
//! ```
//! use descstat_stats::StatisticsEngine;
//!
//! let mut engine = StatisticsEngine::new();
//! engine.load([1.0, 2.0, 3.0, 4.0, 5.0]);
//!
//! assert_eq!(engine.mean(), Ok(3.0));
//! assert_eq!(engine.population_variance(), Ok(2.0));
//!
//! let summary = engine.summary().unwrap();
//! assert_eq!(summary.median, 3.0);
//! ```

pub use self::{
    engine::StatisticsEngine,
    error::{DomainError, StatsError},
};

pub mod engine;
pub mod error;
pub mod frequency;
pub mod moments;
pub mod sample_set;
pub mod sqrt;
pub mod summary;
