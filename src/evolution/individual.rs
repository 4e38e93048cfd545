use crate::objective::Objective;

/// A fixed-length bit string and the fitness last computed for it.
#[derive(Clone, Debug, PartialEq)]
pub struct Individual {
    genes: Vec<bool>,
    fitness: Option<f64>,
}

impl Individual {
    /// Wraps a genome. The result is unevaluated.
    pub fn new(genes: Vec<bool>) -> Individual {
        Individual {
            genes,
            fitness: None,
        }
    }

    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// `None` until the individual has been evaluated.
    pub fn get_fitness(&self) -> Option<f64> {
        self.fitness
    }

    pub(crate) fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }

    /// Scores the genome and stores the result.
    pub fn evaluate(&mut self, objective: Objective) -> f64 {
        let fitness = objective(&self.genes);
        self.set_fitness(fitness);
        fitness
    }
}
