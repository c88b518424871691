// src/cli/handlers.rs
use anyhow::Result;
use console::Style;
use inquire::Password;
use serde_json::json;

use crate::generator;
use crate::models::{GenerationOptions, Strength, StrengthReport};
use crate::validator;

// Handlers for CLI commands
pub fn handle_generate(options: &GenerationOptions, count: usize, json: bool) -> Result<()> {
    for _ in 0..count {
        let password = generator::generate(options)?;
        let report = validator::validate(&password);
        log::debug!(
            "generated {} chars, {} bits",
            report.length,
            report.score_bits
        );

        if json {
            println!(
                "{}",
                serde_json::to_string(&json!({
                    "password": password,
                    "report": report,
                }))?
            );
        } else {
            println!("🔑 {}", console::style(&password).bold());
            println!(
                "   {} ({:.2} bits, keyspace {})",
                strength_style(report.strength).apply_to(report.strength.to_string()),
                report.score_bits,
                report.keyspace_size
            );
        }
    }

    Ok(())
}

pub fn handle_validate(password: Option<String>, json: bool) -> Result<()> {
    // Prompt when the password was not given on the command line, so it
    // stays out of argv and shell history.
    let password = match password {
        Some(password) => password,
        None => Password::new("Password to check:")
            .with_display_mode(inquire::PasswordDisplayMode::Hidden)
            .without_confirmation()
            .prompt()?,
    };

    let report = validator::validate(&password);
    log::debug!(
        "validated {} chars, {} bits",
        report.length,
        report.score_bits
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &StrengthReport) {
    println!(
        "Strength: {}",
        strength_style(report.strength).apply_to(report.strength.to_string())
    );
    println!(
        "Entropy:  {:.2} bits (keyspace {})",
        report.score_bits, report.keyspace_size
    );
    println!("Length:   {}", report.length);

    let req = &report.requirements;
    println!("  {} at least 12 characters", mark(req.min_length_ok));
    println!("  {} lowercase letters", mark(req.has_lower));
    println!("  {} uppercase letters", mark(req.has_upper));
    println!("  {} digits", mark(req.has_digit));
    println!("  {} symbols", mark(req.has_symbol));

    println!("💡 {}", report.recommendation);
}

fn mark(ok: bool) -> &'static str {
    if ok {
        "✅"
    } else {
        "❌"
    }
}

fn strength_style(strength: Strength) -> Style {
    match strength {
        Strength::VeryWeak => Style::new().red().bold(),
        Strength::Weak => Style::new().yellow().bold(),
        Strength::Moderate => Style::new().green().bold(),
        Strength::Strong => Style::new().blue().bold(),
        Strength::VeryStrong => Style::new().magenta().bold(),
    }
}
