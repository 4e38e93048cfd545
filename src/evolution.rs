pub mod fitness_updater;
pub mod individual;
pub mod mutation;

pub use crate::evolution::individual::Individual;

use crate::concurrency::{Execute, Sequential};
use crate::error::{EvolutionError, Result};
use crate::evolution::fitness_updater::FitnessUpdater;
use crate::objective::Objective;

use rand::prelude::*;
use rand::rngs::StdRng;

/// Best-so-far fitness after every generation of a run, plus the individual
/// the run ended on.
#[derive(Clone, Debug)]
pub struct RunResult {
    trace: Vec<f64>,
    champion: Individual,
}

impl RunResult {
    pub fn trace(&self) -> &[f64] {
        &self.trace
    }

    pub fn champion(&self) -> &Individual {
        &self.champion
    }

    pub fn generations(&self) -> usize {
        self.trace.len()
    }

    /// Fitness recorded for the last generation.
    pub fn best(&self) -> Option<f64> {
        self.trace.last().copied()
    }

    /// First generation (0-based) whose recorded fitness reached `optimum`.
    pub fn first_hit(&self, optimum: f64) -> Option<usize> {
        self.trace.iter().position(|&fitness| fitness >= optimum)
    }
}

/// Runs (1+1) and (1+λ) searches over fixed-length bit strings.
///
/// The engine owns its random generator, so two engines built from the same
/// seed produce the same runs. Offspring of the (1+λ) scheme are scored
/// through the executor `E`; every random draw happens on the calling thread
/// beforehand, so a `ThreadPool` gives the same results as `Sequential`.
pub struct EvolutionEngine<E = Sequential>
where
    E: Execute,
{
    rng: StdRng,
    updater: FitnessUpdater<E>,
}

impl EvolutionEngine<Sequential> {
    pub fn new(seed: u64) -> Self {
        Self::with_executor(seed, Sequential)
    }
}

impl<E> EvolutionEngine<E>
where
    E: Execute,
{
    pub fn with_executor(seed: u64, executor: E) -> Self {
        EvolutionEngine {
            rng: StdRng::seed_from_u64(seed),
            updater: FitnessUpdater::new(executor),
        }
    }

    /// Every bit is an independent fair coin flip. The individual is
    /// unevaluated.
    pub fn create_random_individual(&mut self, length: usize) -> Result<Individual> {
        check_length(length)?;
        let genes = (0..length).map(|_| self.rng.gen::<bool>()).collect();
        Ok(Individual::new(genes))
    }

    /// Bit-flip mutation of `parent`, at `1/n` when `mutation_rate` is `None`.
    pub fn mutate(&mut self, parent: &Individual, mutation_rate: Option<f64>) -> Result<Individual> {
        let rate = mutation_rate.unwrap_or_else(|| mutation::default_rate(parent.len()));
        mutation::mutate(parent, rate, &mut self.rng)
    }

    /// (1+1) EA. Each generation one mutant challenges the parent and takes
    /// its place unless it is strictly worse.
    pub fn run_one_plus_one(
        &mut self,
        length: usize,
        generations: usize,
        objective: Objective,
        mutation_rate: Option<f64>,
    ) -> Result<RunResult> {
        check_length(length)?;
        let rate = mutation::validate_rate(
            mutation_rate.unwrap_or_else(|| mutation::default_rate(length)),
        )?;

        let mut parent = self.create_random_individual(length)?;
        let mut parent_fitness = parent.evaluate(objective);
        log::info!(
            "(1+1) EA: n = {}, {} generations, rate {:.4}, initial fitness {}",
            length, generations, rate, parent_fitness
        );

        let mut trace = Vec::with_capacity(generations);
        for generation in 0..generations {
            let mut child = mutation::mutate(&parent, rate, &mut self.rng)?;
            let child_fitness = child.evaluate(objective);

            // ties go to the child so the search can drift across plateaus
            if child_fitness >= parent_fitness {
                if child_fitness > parent_fitness {
                    log::debug!("generation {}: {} -> {}", generation, parent_fitness, child_fitness);
                }
                parent = child;
                parent_fitness = child_fitness;
            }

            log::trace!("generation {}: parent fitness {}", generation, parent_fitness);
            trace.push(parent_fitness);
        }

        log::info!("(1+1) EA finished with fitness {}", parent_fitness);
        Ok(RunResult {
            trace,
            champion: parent,
        })
    }

    /// (1+λ) EA. Each generation `lambda_count - 1` mutants of the expert are
    /// scored; the best of them (earliest on ties) replaces the expert unless
    /// it is strictly worse. With `lambda_count == 1` the expert never
    /// changes.
    pub fn run_one_plus_lambda(
        &mut self,
        length: usize,
        generations: usize,
        objective: Objective,
        lambda_count: usize,
        mutation_rate: Option<f64>,
    ) -> Result<RunResult> {
        check_length(length)?;
        if lambda_count < 1 {
            return Err(EvolutionError::InvalidArgument(
                "lambda must be at least 1, the expert itself is a candidate".to_string(),
            ));
        }
        let rate = mutation::validate_rate(
            mutation_rate.unwrap_or_else(|| mutation::default_rate(length)),
        )?;

        let mut expert = self.create_random_individual(length)?;
        let mut expert_fitness = expert.evaluate(objective);
        log::info!(
            "(1+{}) EA: n = {}, {} generations, rate {:.4}, initial fitness {}",
            lambda_count, length, generations, rate, expert_fitness
        );

        let mut trace = Vec::with_capacity(generations);
        for generation in 0..generations {
            let mut offspring = Vec::with_capacity(lambda_count - 1);
            for _ in 1..lambda_count {
                offspring.push(mutation::mutate(&expert, rate, &mut self.rng)?);
            }
            self.updater.update_fitness(&mut offspring, objective)?;

            if let Some((best_i, best_fitness)) = select_best(&offspring) {
                if best_fitness >= expert_fitness {
                    if best_fitness > expert_fitness {
                        log::debug!("generation {}: {} -> {}", generation, expert_fitness, best_fitness);
                    }
                    expert = offspring.swap_remove(best_i);
                    expert_fitness = best_fitness;
                }
            }

            log::trace!("generation {}: expert fitness {}", generation, expert_fitness);
            trace.push(expert_fitness);
        }

        log::info!("(1+{}) EA finished with fitness {}", lambda_count, expert_fitness);
        Ok(RunResult {
            trace,
            champion: expert,
        })
    }
}

fn check_length(length: usize) -> Result<()> {
    if length == 0 {
        return Err(EvolutionError::InvalidArgument(
            "genome length must be positive".to_string(),
        ));
    }
    Ok(())
}

// index and fitness of the fittest evaluated individual, first one on ties
fn select_best(inds: &[Individual]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, ind) in inds.iter().enumerate() {
        if let Some(fitness) = ind.get_fitness() {
            match best {
                Some((_, best_fitness)) if fitness <= best_fitness => {}
                _ => best = Some((i, fitness)),
            }
        }
    }
    best
}
