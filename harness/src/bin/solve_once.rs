//! Run one scramble-and-solve cycle and print the delivery report as JSON.
//!
//! Usage: `solve_once [seed]`. With a seed the run is reproducible;
//! without one the scramble draws from OS entropy. Set `RUST_LOG=info`
//! to see the run counters.

use std::process::ExitCode;

use taquin_harness::runner::SolveRunner;

fn main() -> ExitCode {
    env_logger::init();

    let seed = std::env::args().nth(1).and_then(|arg| arg.parse::<u64>().ok());
    let run = match seed {
        Some(seed) => SolveRunner::seed_from_u64(seed).run(),
        None => SolveRunner::from_entropy().run(),
    };

    let run = match run {
        Ok(run) => run,
        Err(err) => {
            eprintln!("solve failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&run.delivery_report()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to render report: {err}");
            ExitCode::FAILURE
        }
    }
}
