//! Writes sin(x)cos(2x) dataset files for the experiment.
//!
//! ```text
//! datagen -n 1000,10000 -r -z
//! datagen -n 500 -rep 4 -prefix Wave -dir data
//! ```
//!
//! Produces `SinCos1000.csv` (`x,y`), and with `-r` / `-z` the matching
//! `SinCosRand1000.csv` / `SinCosZero1000.csv` (`x,extra,y`) built from the
//! same rows.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ferrite_ab::cli::datagen_args::{parse_datagen_args, DATAGEN_USAGE};
use ferrite_ab::data::files::generate_files;

fn main() {
    ferrite_ab::logging::init("ferrite_ab=info,datagen=info");

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_datagen_args(&argv) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{DATAGEN_USAGE}");
            std::process::exit(2);
        }
    };
    if args.help {
        eprintln!("{DATAGEN_USAGE}");
        return;
    }
    for flag in &args.ignored {
        tracing::warn!(flag = %flag, "did not recognise the command, ignoring");
    }

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    tracing::info!(seed, sizes = ?args.plan.sizes, dir = %args.dir.display(), "generating datasets");
    let mut rng = StdRng::seed_from_u64(seed);

    let outcomes = generate_files(&args.plan, &args.dir, &mut rng);
    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    if failed > 0 {
        tracing::warn!(failed, total = outcomes.len(), "some dataset files were not written");
        std::process::exit(1);
    }
}
