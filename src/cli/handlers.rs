// src/cli/handlers.rs
use anyhow::Result;
use console::style;
use copypasta::{ClipboardContext, ClipboardProvider};
use serde::Serialize;

use crate::core::config::{Config, Theme};
use crate::generators::{password, ports};
use crate::models::{GenerationConfig, StrengthLabel, StrengthResult};

#[derive(Serialize)]
struct GeneratedPassword {
    password: String,
    strength: StrengthResult,
}

// Handlers for CLI commands
pub fn handle_password(
    options: &GenerationConfig,
    count: usize,
    copy: bool,
    json: bool,
) -> Result<()> {
    let mut generated = Vec::with_capacity(count);
    for _ in 0..count {
        let pw = password::generate(options);
        let strength = password::score_strength(&pw);
        generated.push(GeneratedPassword {
            password: pw,
            strength,
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&generated)?);
    } else {
        for entry in &generated {
            if entry.password.is_empty() {
                println!("❌ No character classes selected; nothing to generate.");
                continue;
            }
            println!("{}", style(&entry.password).bold());
            print_strength(&entry.strength);
        }
    }

    if copy {
        if let Some(last) = generated.last() {
            copy_with_notice(&last.password, "Password copied!");
        }
    }

    Ok(())
}

pub fn handle_strength(password: &str, json: bool) -> Result<()> {
    let strength = password::score_strength(password);
    if json {
        println!("{}", serde_json::to_string_pretty(&strength)?);
    } else {
        print_strength(&strength);
    }
    Ok(())
}

pub fn handle_ports(copy: bool, json: bool) -> Result<()> {
    let mappings = ports::generate_ports();

    if json {
        println!("{}", serde_json::to_string_pretty(&mappings)?);
    } else {
        for mapping in &mappings {
            println!(
                "  {:<12} {}",
                style(format!("{}:", mapping.name)).bold(),
                mapping.port
            );
        }
    }

    if copy {
        copy_with_notice(&ports::format_mappings(&mappings), "All ports copied!");
    }

    Ok(())
}

pub fn handle_theme(theme: Option<Theme>, config: &mut Config, json: bool) -> Result<()> {
    if let Some(theme) = theme {
        config.theme = theme;
        config.save()?;
        log::info!("Theme preference set to {}", theme);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else if theme.is_some() {
        println!("✅ Theme set to {}", config.theme);
    } else {
        println!("Theme: {}", config.theme);
    }

    Ok(())
}

/// Render the 4-segment strength bar plus label, colored by rating.
pub fn print_strength(strength: &StrengthResult) {
    let mut bar = String::new();
    for i in 0..4u8 {
        bar.push_str(if i < strength.score { "■" } else { "□" });
    }

    let styled = match strength.label {
        StrengthLabel::Strong => style(bar).green(),
        StrengthLabel::Medium => style(bar).yellow(),
        StrengthLabel::Weak | StrengthLabel::VeryWeak => style(bar).red(),
        StrengthLabel::None => style(bar).dim(),
    };

    println!("  {} {}", styled, strength.label);
}

pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut ctx = ClipboardContext::new()
        .map_err(|e| anyhow::anyhow!("Clipboard unavailable: {}", e))?;
    ctx.set_contents(text.to_string())
        .map_err(|e| anyhow::anyhow!("Clipboard copy failed: {}", e))?;
    Ok(())
}

// Clipboard trouble is reported, never fatal.
fn copy_with_notice(text: &str, notice: &str) {
    match copy_to_clipboard(text) {
        Ok(()) => println!("📋 {}", notice),
        Err(e) => {
            log::warn!("{}", e);
            println!("⚠️  {}", e);
        }
    }
}
