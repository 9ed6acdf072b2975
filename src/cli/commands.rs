// src/cli/commands.rs
use clap::Subcommand;

use crate::core::config::Theme;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Password {
        /// Password length
        #[arg(long, short = 'l', default_value_t = 16,
              value_parser = clap::value_parser!(u16).range(4..=128))]
        length: u16,

        /// Exclude uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Exclude lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Exclude numbers
        #[arg(long)]
        no_numbers: bool,

        /// Exclude symbols
        #[arg(long)]
        no_symbols: bool,

        /// Allow symbols as the first or last character
        #[arg(long)]
        messy_edges: bool,

        /// Number of passwords to generate
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,

        /// Copy the last generated password to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Score the strength of a password
    Strength {
        /// Password to score
        #[arg(required = true)]
        password: String,
    },

    /// Generate a random TCP port mapping
    Ports {
        /// Copy the full mapping to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Show or set the color theme preference
    Theme {
        /// Theme to set (light, dark or system); prints the stored one when omitted
        theme: Option<Theme>,
    },
}
