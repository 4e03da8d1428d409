//! Sources of sample values for the statistics engine.
//!
//! - [`manual`]: comma-separated values typed by a user
//! - [`file`]: text files with one value per line
//! - [`generator`]: uniformly distributed pseudorandom values
//!
//! Every source either produces the whole sequence or fails; partial loads
//! are never returned.

use std::{io, num::ParseFloatError, path::PathBuf};

pub mod file;
pub mod generator;
pub mod manual;

/// Where an unparsable value was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Position {
    /// 1-based index of a comma-separated value.
    #[display("value #{_0}")]
    Value(usize),
    /// 1-based line number in a file.
    #[display("line {_0}")]
    Line(usize),
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum InputError {
    #[display("invalid number {token:?} at {position}")]
    Parse {
        position: Position,
        token: String,
        source: ParseFloatError,
    },
    #[display("failed to access {}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[display("invalid parameters for the random number generator: {_0}")]
    InvalidParameters(InvalidParameters),
}

impl From<InvalidParameters> for InputError {
    fn from(err: InvalidParameters) -> Self {
        Self::InvalidParameters(err)
    }
}

/// Rejected arguments to [`generator::DataGenerator::generate`].
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum InvalidParameters {
    #[display(
        "the upper bound should be finite and bigger than the lower bound (lower: {lower}, upper: {upper})"
    )]
    Bounds { lower: f64, upper: f64 },
    #[display("the count of values should be greater than 0")]
    Count,
}

fn parse_value(token: &str, position: Position) -> Result<f64, InputError> {
    let token = token.trim();
    token.parse().map_err(|source| InputError::Parse {
        position,
        token: token.to_owned(),
        source,
    })
}
