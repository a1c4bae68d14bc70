mod cli;

use clap::Parser;
use cli::OutputFormat;
use log::error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = cli::Args::parse();

    stderrlog::new()
        .module(module_path!())
        .verbosity(args.verbose.log_level_filter())
        .init()
        .ok();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &cli::Args) -> cli::Result<()> {
    let options = cli::build_options(args);
    let filters = cli::build_filters(args);

    let values = nblists::lookup(&args.terms, &options, &nblists::Variables::new(), &filters)?;

    match args.output {
        OutputFormat::List => cli::output::values_list(&values),
        OutputFormat::Json => cli::output::values_json(&values)?,
        OutputFormat::Table => cli::output::values_table(&args.terms, &values),
        OutputFormat::Netmask => cli::output::values_in_netmask_format(&values),
    }

    if let Some(csv_file) = &args.csv_file {
        cli::csv::save(&values, csv_file)?;
    }

    Ok(())
}
