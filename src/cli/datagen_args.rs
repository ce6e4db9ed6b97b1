use std::path::PathBuf;

use crate::cli::{parse_value, value_of};
use crate::data::files::GenerationPlan;
use crate::error::{HarnessError, Result};

pub const DATAGEN_USAGE: &str = "\
Usage: datagen -n SIZE[,SIZE...] [-r] [-z] [-rep N] [-prefix S] [-postfix S]
               [-randfix S] [-zerofix S] [-dir PATH] [-seed N]";

/// Result of parsing the dataset generator's command line.
#[derive(Debug, Clone)]
pub struct DatagenArgs {
    pub plan: GenerationPlan,
    pub dir: PathBuf,
    pub seed: Option<u64>,
    /// Flags that were not recognised; reported by the caller.
    pub ignored: Vec<String>,
    pub help: bool,
}

/// Parses `args` (without the program name). `-n` is required unless
/// `-h` is given.
pub fn parse_datagen_args(args: &[String]) -> Result<DatagenArgs> {
    let mut plan = GenerationPlan::default();
    let mut dir = PathBuf::from(".");
    let mut seed = None;
    let mut ignored = Vec::new();
    let mut help = false;

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-n" => {
                plan.sizes = value_of(args, i)?
                    .split(',')
                    .map(|s| parse_value(flag, s.trim()))
                    .collect::<Result<Vec<usize>>>()?;
                i += 1;
            }
            "-prefix" => {
                plan.naming.prefix = value_of(args, i)?.to_string();
                i += 1;
            }
            "-postfix" => {
                plan.naming.postfix = value_of(args, i)?.to_string();
                i += 1;
            }
            "-randfix" => {
                plan.naming.randfix = value_of(args, i)?.to_string();
                i += 1;
            }
            "-zerofix" => {
                plan.naming.zerofix = value_of(args, i)?.to_string();
                i += 1;
            }
            "-rep" => {
                plan.naming.repeat = Some(parse_value(flag, value_of(args, i)?)?);
                i += 1;
            }
            "-dir" => {
                dir = PathBuf::from(value_of(args, i)?);
                i += 1;
            }
            "-seed" => {
                seed = Some(parse_value(flag, value_of(args, i)?)?);
                i += 1;
            }
            "-r" => plan.random = true,
            "-z" => plan.zero = true,
            "-h" | "--help" => help = true,
            other => ignored.push(other.to_string()),
        }
        i += 1;
    }

    if plan.sizes.is_empty() && !help {
        return Err(HarnessError::MissingArgument(
            "-n (dataset sizes separated by ,)".into(),
        ));
    }

    Ok(DatagenArgs { plan, dir, seed, ignored, help })
}
