//! Runs the extra-input A/B experiment.
//!
//! Each trial trains a 1-input network and a 2-input network (the second
//! input is random noise, or zeros as an ablation control) from a matched
//! starting point, then records which one converged before the iteration
//! cap. Results go to the detail and summary files named in the config.
//!
//! ```text
//! ferrite-ab --groups 5 --reps 20 --seed 7
//! ferrite-ab --config experiment.json --extra zero
//! ```

use ferrite_ab::cli::experiment_args::{parse_experiment_args, EXPERIMENT_USAGE};
use ferrite_ab::{Experiment, ReportWriter};

fn main() {
    ferrite_ab::logging::init("ferrite_ab=info");

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_experiment_args(&argv) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{EXPERIMENT_USAGE}");
            std::process::exit(2);
        }
    };
    if args.help {
        eprintln!("{EXPERIMENT_USAGE}");
        return;
    }
    for flag in &args.ignored {
        tracing::warn!(flag = %flag, "did not recognise the command, ignoring");
    }

    let experiment = match Experiment::new(args.config) {
        Ok(exp) => exp,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let cfg = experiment.config();
    let mut report = match ReportWriter::create(&cfg.output, &cfg.summary) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(error = %e, "cannot open report outputs");
            std::process::exit(1);
        }
    };

    match experiment.run(&mut report) {
        Ok(summary) => {
            let total = summary.overall();
            tracing::info!(
                baseline_wins = total.baseline_wins,
                augmented_wins = total.augmented_wins,
                ties = total.ties,
                output = %cfg.output.display(),
                summary = %cfg.summary.display(),
                "experiment finished"
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "experiment aborted");
            drop(report);
            std::process::exit(1);
        }
    }
}
