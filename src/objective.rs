use serde::Deserialize;

/// A fitness function over a bit string. Higher is better.
pub type Objective = fn(&[bool]) -> f64;

/// Counts the set bits. The optimum is the genome length.
pub fn onemax(genes: &[bool]) -> f64 {
    genes.iter().filter(|&&bit| bit).count() as f64
}

/// Counts the set bits before the first unset one. The optimum is the genome
/// length.
pub fn leading_ones(genes: &[bool]) -> f64 {
    // position stops at the first zero
    match genes.iter().position(|&bit| !bit) {
        Some(first_zero) => first_zero as f64,
        None => genes.len() as f64,
    }
}

/// Names the built-in objectives so they can be picked from a parameter file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum ObjectiveKind {
    OneMax,
    LeadingOnes,
}

impl ObjectiveKind {
    pub fn function(&self) -> Objective {
        match self {
            ObjectiveKind::OneMax => onemax,
            ObjectiveKind::LeadingOnes => leading_ones,
        }
    }

    // both toy problems peak at the all-ones string
    pub fn optimum(&self, length: usize) -> f64 {
        length as f64
    }
}
