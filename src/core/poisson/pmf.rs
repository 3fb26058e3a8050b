use crate::core::data::distribution::Distribution;
use crate::core::data::domain::Domain;
use crate::core::data::rate::Rate;

/// Evaluates the Poisson probability mass function `P(X = x) = e^-λ λ^x / x!`
/// at every integer point of the domain.
///
/// Evaluated in log space as `exp(-λ + x·ln λ - ln x!)`, with `ln x!`
/// accumulated incrementally across the sweep. A direct `λ^x / x!` overflows
/// f64 near x = 171; the log form stays stable for λ well past 60 and domains
/// of a few hundred points.
#[must_use]
pub fn pmf(domain: Domain, rate: Rate) -> Distribution {
    let lambda = rate.value();
    let ln_lambda = lambda.ln();

    // ln(x_min!) to seed the accumulator.
    let mut ln_factorial: f64 = (1..=domain.x_min()).map(|i| f64::from(i).ln()).sum();

    let mut masses = Vec::with_capacity(domain.point_count());

    for x in domain.points() {
        if x > domain.x_min() {
            ln_factorial += f64::from(x).ln();
        }

        let ln_mass = -lambda + f64::from(x) * ln_lambda - ln_factorial;
        masses.push(ln_mass.exp());
    }

    Distribution::new(domain, rate, masses)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pmf_for(x_min: u32, x_max: u32, lambda: f64) -> Distribution {
        pmf(
            Domain::new(x_min, x_max).unwrap(),
            Rate::new(lambda).unwrap(),
        )
    }

    #[test]
    fn test_known_point_mass_at_lambda_four() {
        let dist = pmf_for(0, 20, 4.0);

        // e^-4 * 4^7 / 7! = 0.05954...
        let mass = dist.mass_at(7).unwrap();
        assert!((mass - 0.0595403626).abs() < 1e-9);
    }

    #[test]
    fn test_mass_at_zero_is_exp_neg_lambda() {
        let dist = pmf_for(0, 10, 2.5);

        let mass = dist.mass_at(0).unwrap();
        assert!((mass - (-2.5f64).exp()).abs() < 1e-15);
    }

    #[test]
    fn test_total_mass_never_exceeds_one() {
        for lambda in [0.1, 1.0, 4.0, 30.0, 60.0] {
            let dist = pmf_for(0, 200, lambda);

            assert!(dist.total_mass() <= 1.0 + 1e-12, "lambda {}", lambda);
        }
    }

    #[test]
    fn test_total_mass_approaches_one_as_domain_widens() {
        let narrow = pmf_for(0, 5, 4.0).total_mass();
        let wide = pmf_for(0, 40, 4.0).total_mass();

        assert!(narrow < wide);
        assert!((wide - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_truncated_domain_sums_to_tail_mass() {
        let full = pmf_for(0, 40, 4.0);
        let tail = pmf_for(10, 40, 4.0);

        let expected: f64 = (10..=40).map(|x| full.mass_at(x).unwrap()).sum();
        assert!((tail.total_mass() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_stable_for_large_rate_and_wide_domain() {
        let dist = pmf_for(0, 300, 60.0);

        assert!(dist.masses().iter().all(|mass| mass.is_finite()));
        assert!((dist.total_mass() - 1.0).abs() < 1e-9);

        // Mode near λ carries the bulk of the mass.
        let mode = dist.mass_at(60).unwrap();
        assert!(mode > 0.05);
    }

    #[test]
    fn test_deterministic_for_identical_inputs() {
        let first = pmf_for(0, 50, 17.3);
        let second = pmf_for(0, 50, 17.3);

        assert_eq!(first, second);
    }

    #[test]
    fn test_masses_follow_poisson_recurrence() {
        // P(x+1) = P(x) * λ / (x+1)
        let dist = pmf_for(0, 30, 6.0);

        for x in 0..30 {
            let here = dist.mass_at(x).unwrap();
            let next = dist.mass_at(x + 1).unwrap();
            let expected = here * 6.0 / f64::from(x + 1);

            assert!((next - expected).abs() < 1e-12, "x {}", x);
        }
    }
}
