// src/main.rs
use anyhow::Result;
use clap::Parser;

use securekey::cli::{handlers, Args, CliCommand};
use securekey::models::GenerationOptions;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    log::debug!("Command line args: {:?}", args);

    match args.command {
        CliCommand::Generate {
            length,
            no_lower,
            no_upper,
            no_digits,
            no_symbols,
            count,
        } => {
            let options = GenerationOptions {
                length,
                include_lowercase: !no_lower,
                include_uppercase: !no_upper,
                include_digits: !no_digits,
                include_symbols: !no_symbols,
            };
            handlers::handle_generate(&options, count, args.json)
        }
        CliCommand::Validate { password } => handlers::handle_validate(password, args.json),
    }
}
