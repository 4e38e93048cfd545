//! (1+1) and (1+λ) evolutionary algorithms on bit strings

/// Individuals, bit-flip mutation and the generational loops
pub mod evolution;

/// OneMax, Leading Ones and the names used for them in parameter files
pub mod objective;

pub mod concurrency;
pub mod error;

pub use error::{EvolutionError, Result};
pub use evolution::{EvolutionEngine, Individual, RunResult};
pub use objective::{leading_ones, onemax, Objective, ObjectiveKind};

use concurrency::thread_pool::ThreadPool;
use serde::Deserialize;

use std::fs;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub enum Algorithm {
    OnePlusOne,
    OnePlusLambda { lambda: usize },
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct ExperimentParams {
    pub length: usize,
    pub generations: usize,
    pub objective: ObjectiveKind,
    // `OnePlusOne` or a `OnePlusLambda: { lambda: .. }` map
    #[serde(with = "serde_yml::with::singleton_map")]
    pub algorithm: Algorithm,
    #[serde(default)]
    pub seed: u64,
    // None means 1/length
    #[serde(default)]
    pub mutation_rate: Option<f64>,
    // None evaluates offspring on the calling thread
    #[serde(default)]
    pub threads: Option<usize>,
}

/// A single run described by a parameter file.
pub struct Experiment {
    params: ExperimentParams,
}

impl Experiment {

    pub fn new(params: ExperimentParams) -> Experiment {
        Experiment { params }
    }

    pub fn from_parameters(parameter_path: &str) -> Result<Experiment> {
        let params = Self::read_parameter_file(parameter_path)?;
        Ok(Experiment::new(params))
    }

    pub fn params(&self) -> &ExperimentParams {
        &self.params
    }

    pub fn run(&self) -> Result<RunResult> {
        let p = &self.params;
        match p.threads {
            Some(threads) => {
                let pool = ThreadPool::new(threads)?;
                self.run_with(EvolutionEngine::with_executor(p.seed, pool))
            }
            None => self.run_with(EvolutionEngine::new(p.seed)),
        }
    }

    fn run_with<E: concurrency::Execute>(&self, mut engine: EvolutionEngine<E>) -> Result<RunResult> {
        let p = &self.params;
        let objective = p.objective.function();

        match p.algorithm {
            Algorithm::OnePlusOne => {
                engine.run_one_plus_one(p.length, p.generations, objective, p.mutation_rate)
            }
            Algorithm::OnePlusLambda { lambda } => {
                engine.run_one_plus_lambda(p.length, p.generations, objective, lambda, p.mutation_rate)
            }
        }
    }

    fn read_parameter_file(path_string: &str) -> Result<ExperimentParams> {
        let yaml_string = fs::read_to_string(path_string)?;
        log::debug!("read parameters from {}", path_string);
        Self::parse_parameter_yaml(&yaml_string)
    }

    pub fn parse_parameter_yaml(fstring: &str) -> Result<ExperimentParams> {
        let params: ExperimentParams = serde_yml::from_str(fstring)?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_parse_parameter_string() {
        let pstring = r#"
        length: 50
        generations: 200
        seed: 7
        objective: LeadingOnes
        mutation_rate: 0.02
        threads: 2

        algorithm:
          OnePlusLambda:
            lambda: 5
        "#;

        let t = Experiment::parse_parameter_yaml(pstring).unwrap();

        assert_eq!(t.length, 50);
        assert_eq!(t.objective, ObjectiveKind::LeadingOnes);
        assert_eq!(t.algorithm, Algorithm::OnePlusLambda { lambda: 5 });
        assert_eq!(t.mutation_rate, Some(0.02));
        assert_eq!(t.threads, Some(2));
    }

    #[rstest]
    fn test_parse_defaults() {
        let pstring = r#"
        length: 20
        generations: 100
        objective: OneMax
        algorithm: OnePlusOne
        "#;

        let t = Experiment::parse_parameter_yaml(pstring).unwrap();

        assert_eq!(t.seed, 0);
        assert_eq!(t.mutation_rate, None);
        assert_eq!(t.threads, None);
        assert_eq!(t.algorithm, Algorithm::OnePlusOne);
    }

    #[rstest]
    fn test_parse_rejects_unknown_objective() {
        let pstring = r#"
        length: 20
        generations: 100
        objective: Rastrigin
        algorithm: OnePlusOne
        "#;

        assert!(matches!(
            Experiment::parse_parameter_yaml(pstring),
            Err(EvolutionError::Parameters(_))
        ));
    }

    #[rstest]
    fn test_missing_parameter_file() {
        assert!(matches!(
            Experiment::from_parameters("does/not/exist.yaml"),
            Err(EvolutionError::Io(_))
        ));
    }

    #[rstest]
    #[case(None)]
    #[case(Some(3))]
    fn test_run_experiment(#[case] threads: Option<usize>) {
        let experiment = Experiment::new(ExperimentParams {
            length: 50,
            generations: 50,
            objective: ObjectiveKind::LeadingOnes,
            algorithm: Algorithm::OnePlusLambda { lambda: 5 },
            seed: 9,
            mutation_rate: None,
            threads,
        });

        let result = experiment.run().unwrap();
        let trace = result.trace();

        assert_eq!(trace.len(), 50);
        assert!(trace.windows(2).all(|w| w[0] <= w[1]));
        assert!(trace.iter().all(|&f| (0.0..=50.0).contains(&f)));
    }

    #[test]
    fn test_thread_count_does_not_change_run() {
        let params = |threads| ExperimentParams {
            length: 30,
            generations: 40,
            objective: ObjectiveKind::OneMax,
            algorithm: Algorithm::OnePlusLambda { lambda: 6 },
            seed: 21,
            mutation_rate: Some(0.05),
            threads,
        };

        let a = Experiment::new(params(None)).run().unwrap();
        let b = Experiment::new(params(Some(4))).run().unwrap();
        assert_eq!(a.trace(), b.trace());
    }

    #[rstest]
    fn test_zero_threads_rejected() {
        let experiment = Experiment::new(ExperimentParams {
            length: 10,
            generations: 5,
            objective: ObjectiveKind::OneMax,
            algorithm: Algorithm::OnePlusOne,
            seed: 0,
            mutation_rate: None,
            threads: Some(0),
        });

        assert!(matches!(experiment.run(), Err(EvolutionError::InvalidArgument(_))));
    }

    #[test]
    fn test_shipped_parameter_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/parameters/leading_ones.yaml");
        let experiment = Experiment::from_parameters(path).unwrap();
        let result = experiment.run().unwrap();

        assert_eq!(result.generations(), experiment.params().generations);
    }
}
