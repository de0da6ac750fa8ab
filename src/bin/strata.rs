use clap::Parser;
use colored::Colorize;
use strata_core::cli::{self, Cli};
use strata_core::exit::StrataExit;
use strata_core::logging;

fn main() -> StrataExit {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(cmd)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(StrataExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            StrataExit::Error
        }
    }
}
