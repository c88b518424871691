// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more random passwords
    Generate {
        /// Password length
        #[arg(short, long, default_value_t = 16)]
        length: usize,

        /// Exclude lowercase letters
        #[arg(long)]
        no_lower: bool,

        /// Exclude uppercase letters
        #[arg(long)]
        no_upper: bool,

        /// Exclude digits
        #[arg(long)]
        no_digits: bool,

        /// Exclude symbols
        #[arg(long)]
        no_symbols: bool,

        /// Number of passwords to generate
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },

    /// Estimate the strength of a password
    Validate {
        /// Password to check (prompted for when omitted, keeping it out of
        /// shell history)
        password: Option<String>,
    },
}
