use crate::core::data::rate::Rate;

/// Summary statistics of a Poisson distribution: mean and variance both equal
/// λ, standard deviation is √λ.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PoissonStats {
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
}

#[must_use]
pub fn stats(rate: Rate) -> PoissonStats {
    let lambda = rate.value();

    PoissonStats {
        mean: lambda,
        variance: lambda,
        std_dev: lambda.sqrt(),
    }
}
