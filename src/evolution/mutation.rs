use crate::evolution::individual::Individual;
use crate::error::{EvolutionError, Result};

use rand::prelude::*;
use rand_distr::Bernoulli;

/// The standard bit-flip rate, one expected flip per genome.
pub fn default_rate(length: usize) -> f64 {
    1.0 / length as f64
}

/// Rejects rates that are not a probability.
pub fn validate_rate(rate: f64) -> Result<f64> {
    // also catches NaN
    if !(0.0..=1.0).contains(&rate) {
        return Err(EvolutionError::InvalidArgument(format!(
            "mutation rate must lie in [0, 1], got {rate}"
        )));
    }
    Ok(rate)
}

/// Standard bit-flip mutation. Copies the parent's genome and flips every bit
/// independently with probability `rate`. The parent is left as it was and
/// the child comes back unevaluated.
pub fn mutate<R: Rng + ?Sized>(parent: &Individual, rate: f64, rng: &mut R) -> Result<Individual> {
    let flip = Bernoulli::new(validate_rate(rate)?)
        .map_err(|e| EvolutionError::InvalidArgument(e.to_string()))?;

    let genes = parent
        .genes()
        .iter()
        .map(|&bit| bit ^ flip.sample(&mut *rng))
        .collect();

    Ok(Individual::new(genes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rstest::*;

    #[fixture]
    fn parent() -> Individual {
        let mut ind = Individual::new(vec![true, false, false, true, true, false, true, false]);
        ind.set_fitness(4.0);
        ind
    }

    #[fixture]
    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    #[rstest]
    fn test_zero_rate_copies(parent: Individual, mut rng: StdRng) {
        let child = mutate(&parent, 0.0, &mut rng).unwrap();
        assert_eq!(child.genes(), parent.genes());
        assert_eq!(child.get_fitness(), None);
    }

    #[rstest]
    fn test_full_rate_complements(parent: Individual, mut rng: StdRng) {
        let child = mutate(&parent, 1.0, &mut rng).unwrap();
        let complement: Vec<bool> = parent.genes().iter().map(|b| !b).collect();
        assert_eq!(child.genes(), complement.as_slice());
    }

    #[rstest]
    fn test_parent_untouched(parent: Individual, mut rng: StdRng) {
        let before = parent.clone();
        for _ in 0..20 {
            let _ = mutate(&parent, 0.5, &mut rng).unwrap();
        }
        assert_eq!(parent, before);
    }

    #[rstest]
    #[case(-0.1)]
    #[case(1.5)]
    #[case(f64::NAN)]
    fn test_invalid_rate(parent: Individual, mut rng: StdRng, #[case] rate: f64) {
        assert!(matches!(
            mutate(&parent, rate, &mut rng),
            Err(EvolutionError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_default_rate() {
        assert_eq!(default_rate(4), 0.25);
        assert_eq!(default_rate(100), 0.01);
    }
}
