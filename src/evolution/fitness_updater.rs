use super::Individual;
use crate::concurrency::Execute;
use crate::error::{EvolutionError, Result};
use crate::objective::Objective;
use std::sync::mpsc::channel;

// Utility struct for updating a slice of individuals' fitnesses according
// to an objective. Concurrency and parallelism can be achieved by using a
// specified executor `T` to run the objective on each individual.
pub struct FitnessUpdater<T>
where
    T: Execute,
{
    executor: T,
}

impl<T> FitnessUpdater<T>
where
    T: Execute,
{
    pub fn new(executor: T) -> Self {
        Self { executor }
    }

    // Evaluates every individual in `inds`. This may run concurrently depending
    // on the executor, but blocks until every result is in. Results are keyed
    // by index so completion order never changes which individual gets which
    // fitness.
    pub fn update_fitness(&self, inds: &mut [Individual], objective: Objective) -> Result<()> {
        // fresh channel per batch: a task that dies takes its sender with it
        // and the receiver stops instead of hanging
        let (sender, receiver) = channel();

        inds.iter().enumerate().for_each(|(i, ind)| {
            let sender = sender.clone();
            let genes = ind.genes().to_vec();
            self.executor.execute(move || {
                let fitness = objective(&genes);
                // receiver outlives every task of the batch
                let _ = sender.send((i, fitness));
            });
        });
        drop(sender);

        let mut received = 0;
        for (i, fitness) in receiver.iter() {
            inds[i].set_fitness(fitness);
            received += 1;
        }

        if received < inds.len() {
            return Err(EvolutionError::Evaluation(format!(
                "{} of {} evaluations never reported a fitness",
                inds.len() - received,
                inds.len()
            )));
        }
        Ok(())
    }
}
