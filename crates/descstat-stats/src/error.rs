/// Errors raised by statistics queries.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum StatsError {
    #[display("no data loaded")]
    NoDataLoaded,
    #[display("at least {required} samples required, got {actual}")]
    InsufficientSamples { required: usize, actual: usize },
    #[display("{_0}")]
    Domain(DomainError),
}

impl From<DomainError> for StatsError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

/// A numeric input outside the domain of the requested operation.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum DomainError {
    #[display("cannot take the square root of negative number {value}")]
    NegativeSqrt { value: f64 },
    #[display("cannot take the square root of {value}: out of range")]
    OutOfRange { value: f64 },
    #[display("harmonic mean is undefined when a sample equals zero")]
    ZeroSample,
}
