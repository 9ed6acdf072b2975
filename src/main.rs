// src/main.rs
use clap::Parser;

mod cli;
mod core;
mod generators;
mod history;
mod models;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;
use crate::models::GenerationConfig;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut config = Config::load();
    log::debug!("Loaded config: {:?}", config);

    match args.command {
        Some(CliCommand::Password {
            length,
            no_uppercase,
            no_lowercase,
            no_numbers,
            no_symbols,
            messy_edges,
            count,
            copy,
        }) => {
            let options = GenerationConfig {
                length: length as usize,
                include_uppercase: !no_uppercase,
                include_lowercase: !no_lowercase,
                include_numbers: !no_numbers,
                include_symbols: !no_symbols,
                clean_edges: !messy_edges,
            };
            cli::handlers::handle_password(&options, count, copy, args.json)
        }
        Some(CliCommand::Strength { password }) => {
            cli::handlers::handle_strength(&password, args.json)
        }
        Some(CliCommand::Ports { copy }) => cli::handlers::handle_ports(copy, args.json),
        Some(CliCommand::Theme { theme }) => {
            cli::handlers::handle_theme(theme, &mut config, args.json)
        }
        None => cli::menu::run_menu(&mut config),
    }
}
