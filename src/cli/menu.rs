// src/cli/menu.rs
use anyhow::Result;
use inquire::{Confirm, MultiSelect, Select, Text};

use crate::cli::handlers;
use crate::core::config::{Config, Theme};
use crate::generators::{password, ports};
use crate::history::History;
use crate::models::{CharacterClass, GenerationConfig};

const CLASS_NAMES: [&str; 4] = ["Uppercase", "Lowercase", "Numbers", "Symbols"];

pub fn run_menu(config: &mut Config) -> Result<()> {
    println!("🔑 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║          🔑 KEYPORT TOOLKIT          ║");
    println!("╚══════════════════════════════════════╝");
    println!("Theme: {}", config.theme);

    let mut options = GenerationConfig::default();
    let mut history = History::new();

    loop {
        let choice = Select::new(
            "What would you like to do?",
            vec![
                "Generate password",
                "Password options",
                "Password history",
                "Generate TCP ports",
                "Theme",
                "Quit",
            ],
        )
        .prompt()?;

        match choice {
            "Generate password" => generate_password(&options, &mut history)?,
            "Password options" => prompt_options(&mut options)?,
            "Password history" => show_history(&mut history)?,
            "Generate TCP ports" => generate_tcp_ports()?,
            "Theme" => pick_theme(config)?,
            _ => break,
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

fn generate_password(options: &GenerationConfig, history: &mut History) -> Result<()> {
    let pw = password::generate(options);
    if pw.is_empty() {
        println!("❌ No character classes selected. Adjust the password options first.");
        return Ok(());
    }

    let strength = password::score_strength(&pw);
    println!("🔑 {}", pw);
    handlers::print_strength(&strength);
    history.push(&pw);

    if Confirm::new("Copy to clipboard?")
        .with_default(false)
        .prompt()?
    {
        match handlers::copy_to_clipboard(&pw) {
            Ok(()) => println!("📋 Password copied!"),
            Err(e) => println!("⚠️  {}", e),
        }
    }

    Ok(())
}

fn prompt_options(options: &mut GenerationConfig) -> Result<()> {
    // Length range is a UI-level constraint; the engine itself accepts any
    // length.
    let default_length = options.length.to_string();
    let length = loop {
        let input = Text::new("Password length (4-128):")
            .with_default(&default_length)
            .prompt()?;
        match input.trim().parse::<usize>() {
            Ok(n) if (4..=128).contains(&n) => break n,
            _ => println!("❌ Enter a number between 4 and 128."),
        }
    };
    options.length = length;

    let preselected: Vec<usize> = CharacterClass::ALL
        .iter()
        .enumerate()
        .filter(|(_, class)| options.includes(**class))
        .map(|(i, _)| i)
        .collect();

    let selected = MultiSelect::new("Character classes:", CLASS_NAMES.to_vec())
        .with_default(&preselected)
        .prompt()?;

    options.include_uppercase = selected.contains(&"Uppercase");
    options.include_lowercase = selected.contains(&"Lowercase");
    options.include_numbers = selected.contains(&"Numbers");
    options.include_symbols = selected.contains(&"Symbols");

    options.clean_edges = Confirm::new("Keep symbols off the first and last characters?")
        .with_default(options.clean_edges)
        .prompt()?;

    if selected.is_empty() {
        println!("⚠️  With no classes selected, generation produces an empty password.");
    }

    Ok(())
}

fn show_history(history: &mut History) -> Result<()> {
    if history.is_empty() {
        println!("🗒️  History is empty.");
        return Ok(());
    }

    let mut items: Vec<String> = history.entries().to_vec();
    items.push("Clear history".to_string());
    items.push("Back".to_string());

    let picked = Select::new("History (most recent first, pick to copy):", items).prompt()?;

    match picked.as_str() {
        "Back" => {}
        "Clear history" => {
            history.clear();
            println!("🧹 History cleared!");
        }
        pw => match handlers::copy_to_clipboard(pw) {
            Ok(()) => println!("📋 Copied from history!"),
            Err(e) => println!("⚠️  {}", e),
        },
    }

    Ok(())
}

fn generate_tcp_ports() -> Result<()> {
    let mappings = ports::generate_ports();
    for mapping in &mappings {
        println!("  {:<12} {}", format!("{}:", mapping.name), mapping.port);
    }

    if Confirm::new("Copy all to clipboard?")
        .with_default(false)
        .prompt()?
    {
        match handlers::copy_to_clipboard(&ports::format_mappings(&mappings)) {
            Ok(()) => println!("📋 All ports copied!"),
            Err(e) => println!("⚠️  {}", e),
        }
    }

    Ok(())
}

fn pick_theme(config: &mut Config) -> Result<()> {
    let picked = Select::new("Theme:", vec![Theme::Light, Theme::Dark, Theme::System]).prompt()?;
    config.theme = picked;

    match config.save() {
        Ok(()) => println!("✅ Theme set to {}", config.theme),
        Err(e) => {
            log::warn!("Failed to persist theme: {}", e);
            println!("⚠️  Theme applied but not saved: {}", e);
        }
    }

    Ok(())
}
