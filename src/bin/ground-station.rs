//! Runs one solver on one named scenario and prints the best assignment.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use u_groundstation::{Algorithm, AssignmentProblem, Scenario, SolveResult};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario to solve: static, moving-drones or moving-all.
    #[arg(long, default_value_t = Scenario::Static)]
    scenario: Scenario,

    /// Algorithm: pso, gwo, aco, ga, abc, goa or dea.
    #[arg(long, default_value_t = Algorithm::Pso)]
    algo: Algorithm,

    /// Number of iterations (generations for ga).
    #[arg(long, default_value_t = 200, value_parser = clap::value_parser!(u32).range(1..))]
    iterations: u32,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn print_assignments(problem: &AssignmentProblem, result: &SolveResult) {
    for (i, drone) in problem.drones().iter().enumerate() {
        match result.station_for(i) {
            Some(s) => {
                let station = &problem.stations()[s];
                let (x, y) = station.position();
                println!("  {} -> {} ({x:.0}, {y:.0})", drone.model(), station.name());
            }
            None => println!("  {} -> unassigned", drone.model()),
        }
    }
}

fn main() -> ExitCode {
    enable_tracing();
    let args = Args::parse();

    let problem = match args.scenario.build() {
        Ok(problem) => problem,
        Err(err) => {
            tracing::error!(scenario = %args.scenario, "cannot build scenario: {err}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        drones = problem.num_drones(),
        stations = problem.num_stations(),
        iterations = args.iterations,
        seed = args.seed,
        "solving"
    );

    let solver = args.algo.build(args.iterations as usize, Some(args.seed));
    let result = solver.solve(&problem);

    println!("Scenario: {} | Algorithm: {}", args.scenario, args.algo);
    println!(
        "Best fitness: {:.4} | Duration: {:.3}s",
        result.fitness,
        result.elapsed.as_secs_f64()
    );
    println!("Assignments:");
    print_assignments(&problem, &result);

    ExitCode::SUCCESS
}
