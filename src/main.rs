//! codementor CLI entry point.

use clap::Parser;
use codementor::cli::{self, Cli, Commands, EXIT_ERROR};
use codementor::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.config.as_deref();
    let result = match &cli.command {
        Commands::Analyze(args) => cli::run_analyze(args),
        Commands::Debug(args) => cli::run_debug_command(args),
        Commands::Exercise(args) => cli::run_exercise(config, args),
        Commands::Tutorial(args) => cli::run_tutorial(config, args),
        Commands::List => cli::run_list(config),
        Commands::Init(args) => cli::run_init(args),
    };

    let exit_code = match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}
