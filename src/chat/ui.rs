//! Chat mode UI components.

use crate::conversation::Transcript;
use crate::generation::{GenerationOptions, MAX_TOKENS_RANGE, TEMPERATURE_RANGE};
use crate::ui::{Style, format_turn};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - Personalized AI Assistant",
        Style::header("assist"),
        Style::version(format!("v{VERSION}"))
    );
    println!(
        "{}",
        Style::secondary("Multilingual answers with adjustable creativity and length.")
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(model: &str, endpoint: &str, options: &GenerationOptions) {
    println!("{}", Style::header("Settings"));
    println!("  {}        {}", Style::label("model"), Style::value(model));
    println!(
        "  {}     {}",
        Style::label("language"),
        Style::value(options.language())
    );
    println!(
        "  {}  {}",
        Style::label("temperature"),
        Style::value(format!("{:.2}", options.temperature()))
    );
    println!(
        "  {}   {}",
        Style::label("max_tokens"),
        Style::value(options.max_tokens())
    );
    println!(
        "  {}     {}",
        Style::label("endpoint"),
        Style::secondary(endpoint)
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    let rows = [
        ("/config", "Show current settings".to_string()),
        ("/history", "Show the conversation so far".to_string()),
        (
            "/set temperature [v]",
            format!(
                "Creativity, {} to {}",
                TEMPERATURE_RANGE.start(),
                TEMPERATURE_RANGE.end()
            ),
        ),
        (
            "/set max_tokens [n]",
            format!(
                "Response length, {} to {}",
                MAX_TOKENS_RANGE.start(),
                MAX_TOKENS_RANGE.end()
            ),
        ),
        ("/set language [name]", "Response language".to_string()),
        ("/help", "Show this help".to_string()),
        ("/quit", "Exit chat mode".to_string()),
    ];
    for (command, description) in rows {
        println!(
            "  {:22} {}",
            Style::command(command),
            Style::secondary(description)
        );
    }
    println!();
}

pub fn print_transcript(transcript: &Transcript) {
    if transcript.is_empty() {
        println!("{}", Style::secondary("No messages yet."));
    }
    for turn in transcript {
        println!("{}", format_turn(turn));
    }
    println!();
}
