use evors::{EvolutionEngine, Experiment, ObjectiveKind};
use evors::objective::onemax;

fn main() -> evors::Result<()> {
    env_logger::init();

    let experiment = Experiment::from_parameters("demos/parameters/leading_ones.yaml")?;
    let params = experiment.params();
    let optimum = params.objective.optimum(params.length);

    let result = experiment.run()?;
    println!("{:?} after {} generations: {:?}", params.objective, result.generations(), result.best());
    match result.first_hit(optimum) {
        Some(generation) => println!("optimum {} first reached at generation {}", optimum, generation),
        None => println!("optimum {} not reached", optimum),
    }

    // the same budget split between the two schemes on OneMax
    let length = 100;
    let mut engine = EvolutionEngine::new(params.seed);
    let plus_one = engine.run_one_plus_one(length, 1000, onemax, None)?;
    let plus_ten = engine.run_one_plus_lambda(length, 100, onemax, 11, None)?;

    let onemax_optimum = ObjectiveKind::OneMax.optimum(length);
    println!("(1+1):  {:?}, hit at {:?}", plus_one.best(), plus_one.first_hit(onemax_optimum));
    println!("(1+10): {:?}, hit at {:?}", plus_ten.best(), plus_ten.first_hit(onemax_optimum));

    Ok(())
}
