//! Interactive lookup mode
//!
//! Text-based interactive session: type letters, get words. Language,
//! exact mode, and length bounds are toggled with commands.

use super::find::run_find;
use crate::core::QueryOptions;
use crate::output::print_find_result;
use crate::registry::IndexRegistry;
use crate::wordlists::Language;
use colored::Colorize;
use std::io::{self, Write};

/// Run the interactive lookup loop
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_interactive(registry: &IndexRegistry, start_language: Language) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Word Finder - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Type letters to list every word formable from them.");
    print_help();

    let mut language = start_language;
    let mut options = QueryOptions::CONTAINS;
    print_language_banner(registry, language);

    loop {
        let input = get_user_input(&format!("[{language}] letters"))?;
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let head = parts.next().unwrap_or_default();
        let arg = parts.next();

        match head {
            "quit" | "q" | "exit" => {
                println!("\n👋 Happy unscrambling!\n");
                return Ok(());
            }
            "help" | "?" => print_help(),
            "lang" => match arg.and_then(Language::from_code) {
                Some(chosen) => {
                    language = chosen;
                    print_language_banner(registry, language);
                }
                None => println!("{}", "✗ Usage: lang en|de".red()),
            },
            "exact" => match arg {
                Some("on") => {
                    options.exact = true;
                    println!("Exact (anagram) matching on.\n");
                }
                Some("off") => {
                    options.exact = false;
                    println!("Exact (anagram) matching off.\n");
                }
                _ => println!("{}", "✗ Usage: exact on|off".red()),
            },
            "min" => match arg.and_then(|n| n.parse().ok()) {
                Some(n) => {
                    options.min_length = n;
                    println!("Minimum word length set to {n}.\n");
                }
                None => println!("{}", "✗ Usage: min <number>".red()),
            },
            "max" => match arg {
                Some("off") => {
                    options.max_length = None;
                    println!("Maximum word length unbounded.\n");
                }
                Some(raw) => match raw.parse() {
                    Ok(n) => {
                        options.max_length = Some(n);
                        println!("Maximum word length set to {n}.\n");
                    }
                    Err(_) => println!("{}", "✗ Usage: max <number>|off".red()),
                },
                None => println!("{}", "✗ Usage: max <number>|off".red()),
            },
            _ => match run_find(registry, language, &input, options) {
                Ok(result) => print_find_result(&result),
                Err(err) => println!("{}", format!("✗ {err}").red()),
            },
        }
    }
}

fn print_language_banner(registry: &IndexRegistry, language: Language) {
    match registry.max_length(language) {
        Ok(max_length) => println!(
            "\nDictionary '{}': longest word has {} letters.\n",
            language.to_string().bright_yellow(),
            max_length.to_string().bright_cyan()
        ),
        Err(err) => println!("{}", format!("✗ {err}").red()),
    }
}

fn print_help() {
    println!("\nCommands:");
    println!("  lang en|de        switch dictionary");
    println!("  exact on|off      toggle exact (anagram) matching");
    println!("  min <n>           minimum word length");
    println!("  max <n>|off       maximum word length");
    println!("  help              show this help");
    println!("  quit              exit\n");
    println!("Anything else is treated as letters (commas are fine: c,a,t).\n");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
