//! clippings - print highlights from an e-reader clippings export

use std::process::ExitCode;

use clap::Parser;

use clippings::cli::{Cli, Commands, ConfigCommands};
use clippings::{logging, ParseError};

mod commands;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Highlights(args) => commands::highlights::handle(&args),
        Commands::Prepare { file } => commands::prepare::handle(&file),
        Commands::Config(ConfigCommands::Show) => commands::config::handle_show(),
        Commands::Config(ConfigCommands::Path) => commands::config::handle_path(),
        Commands::Completions { shell } => commands::completions::handle(shell),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

/// Print an error to stderr. Malformed chunks also get a dump of their lines.
fn report(err: &anyhow::Error) {
    if let Some(parse_err) = err.downcast_ref::<ParseError>() {
        eprint!("{}", parse_err.chunk_dump());
    }
    eprintln!("Error: {:#}", err);
}
