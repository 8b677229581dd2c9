//! devnet-config CLI entry point.

use clap::Parser;

use devnet_config::cli::{handle_error, Cli, Commands};
use devnet_config::infrastructure::logging::LoggerImpl;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = LoggerImpl::init(&cli.log_config()) {
        handle_error(err, cli.json);
    }

    let loader = cli.loader();
    let json = cli.json;

    let result = match cli.command {
        Commands::Check(args) => devnet_config::cli::commands::check::execute(args, &loader, json),
        Commands::Show(args) => devnet_config::cli::commands::show::execute(args, &loader, json),
        Commands::Export(args) => devnet_config::cli::commands::export::execute(args, &loader, json),
    };

    if let Err(err) = result {
        handle_error(err, json);
    }
}
