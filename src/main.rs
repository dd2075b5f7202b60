use std::collections::BTreeMap;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use arclines::cli::{Cli, Command, ListsArgs};
use arclines::error::AppError;
use arclines::lists::DataPaths;
use arclines::lists::load::load_line_lists;
use arclines::lists::write::write_line_list;
use arclines::logging::init_logging;
use arclines::pipeline::run_match;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    match &cli.command {
        Command::Match(args) => {
            let config = args.to_config()?;
            let run = run_match(&config)?;
            for lc in &run.summary.labels {
                println!("{:<5} {}", lc.label.as_str(), lc.count);
            }
            Ok(())
        }
        Command::Lists(args) => run_lists(args),
    }
}

fn run_lists(args: &ListsArgs) -> Result<(), AppError> {
    let paths = DataPaths::new(&args.lists.data_dir);
    let list = load_line_lists(&paths, &args.lists.request())?;

    let mut per_ion: BTreeMap<&str, usize> = BTreeMap::new();
    for line in list.lines() {
        *per_ion.entry(line.ion.as_str()).or_insert(0) += 1;
    }
    for (ion, n) in &per_ion {
        println!("{ion}\t{n}");
    }
    println!("total\t{}", list.len());

    if let Some(path) = &args.write {
        write_line_list(list.lines(), path)?;
        info!(path = %path.display(), n = list.len(), "wrote merged line list");
    }
    Ok(())
}
