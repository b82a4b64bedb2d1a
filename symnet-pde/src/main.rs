mod consts;
mod problem;

use consts::EPOCHS;
use log::info;
use problem::{Problem, PROBLEMS};
use std::process::ExitCode;
use symnet_error::Error;

/// The problem run when none is named on the command line.
const DEFAULT_PROBLEM: &str = "heat-1d-bc";

/// Trains the problem for [`EPOCHS`] passes over its training points, then prints the fitted
/// output at each sample point.
fn run(mut problem: Problem) -> Result<(), Error> {
    info!("u = {}", problem.net.node_expr(problem.output));
    if let Some(cost) = problem.net.cost() {
        info!("cost = {}", cost);
    }
    info!("initial mean cost: {}", problem.mean_cost()?);

    for epoch in 1..=EPOCHS {
        problem.net.train(problem.learning_rate, &problem.training)?;
        info!("epoch {epoch}: mean cost {}", problem.mean_cost()?);
    }

    println!("u = {}", problem.net.node_expr(problem.output));
    println!("{}\tu", problem.columns.join("\t"));
    for (point, u) in problem.solution()? {
        let inputs = point[..problem.columns.len()]
            .iter()
            .map(|value| format!("{value:.2}"))
            .collect::<Vec<_>>();
        println!("{}\t{u:.6}", inputs.join("\t"));
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args();
    args.next();
    let name = args.next().unwrap_or_else(|| DEFAULT_PROBLEM.to_string());

    let Some((_, build)) = PROBLEMS.iter().find(|(candidate, _)| *candidate == name) else {
        let names = PROBLEMS.iter().map(|(name, _)| *name).collect::<Vec<_>>();
        eprintln!("unknown problem `{name}`, expected one of: {}", names.join(", "));
        return ExitCode::FAILURE;
    };

    info!("running {name}");
    match build().and_then(run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.report_to_stderr();
            ExitCode::FAILURE
        },
    }
}
