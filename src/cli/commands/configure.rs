//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::validator::Validation;
use inquire::{CustomType, CustomUserError, Select, Text};

use crate::config::{AssistantConfig, ConfigFile, ConfigManager, DEFAULT_ENDPOINT, DEFAULT_MODEL};
use crate::generation::{
    DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, Language, MAX_TOKENS_RANGE, TEMPERATURE_RANGE,
};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the current defaults; otherwise walks through each
/// default interactively and saves the result.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;
    if show {
        let config = manager.load_or_default()?;
        print_current_defaults(&config);
        println!(
            "  {}",
            Style::secondary(manager.config_path().display().to_string())
        );
        return Ok(());
    }
    handle_prompt_cancellation(|| run_configure_inner(&manager))
}

fn run_configure_inner(manager: &ConfigManager) -> Result<()> {
    let mut config = manager.load_or_default()?;

    print_current_defaults(&config);

    let current = config.assistant.clone();
    let endpoint = prompt_text(
        "Default endpoint:",
        current.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT),
    )?;
    let model = prompt_text(
        "Default model:",
        current.model.as_deref().unwrap_or(DEFAULT_MODEL),
    )?;
    let language = select_language(current.language.unwrap_or_default())?;
    let temperature = prompt_temperature(current.temperature.unwrap_or(DEFAULT_TEMPERATURE))?;
    let max_tokens = prompt_max_tokens(current.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS))?;

    config.assistant = AssistantConfig {
        endpoint: Some(endpoint),
        model: Some(model),
        language: Some(language),
        temperature: Some(temperature),
        max_tokens: Some(max_tokens),
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile) {
    let defaults = &config.assistant;
    let show = |value: Option<String>| value.map_or_else(|| Style::secondary("(not set)"), Style::value);

    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}     {}",
        Style::label("endpoint"),
        show(defaults.endpoint.clone())
    );
    println!(
        "  {}        {}",
        Style::label("model"),
        show(defaults.model.clone())
    );
    println!(
        "  {}     {}",
        Style::label("language"),
        show(defaults.language.map(|l| l.to_string()))
    );
    println!(
        "  {}  {}",
        Style::label("temperature"),
        show(defaults.temperature.map(|t| t.to_string()))
    );
    println!(
        "  {}   {}",
        Style::label("max_tokens"),
        show(defaults.max_tokens.map(|t| t.to_string()))
    );
    println!();
}

fn prompt_text(message: &str, default: &str) -> Result<String> {
    let value = Text::new(message).with_default(default).prompt()?;
    let value = value.trim();
    if value.is_empty() {
        bail!("{} cannot be empty", message.trim_end_matches(':'));
    }
    Ok(value.to_string())
}

fn select_language(default: Language) -> Result<Language> {
    let default_index = Language::ALL
        .iter()
        .position(|lang| *lang == default)
        .unwrap_or(0);

    let selection = Select::new("Default language:", Language::ALL.to_vec())
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(selection)
}

fn prompt_temperature(default: f32) -> Result<f32> {
    let value = CustomType::<f32>::new("Default temperature:")
        .with_default(default)
        .with_validator(|value: &f32| -> Result<Validation, CustomUserError> {
            Ok(if TEMPERATURE_RANGE.contains(value) {
                Validation::Valid
            } else {
                Validation::Invalid("Temperature must be between 0.0 and 1.0".into())
            })
        })
        .prompt()?;
    Ok(value)
}

fn prompt_max_tokens(default: u32) -> Result<u32> {
    let value = CustomType::<u32>::new("Default max tokens:")
        .with_default(default)
        .with_validator(|value: &u32| -> Result<Validation, CustomUserError> {
            Ok(if MAX_TOKENS_RANGE.contains(value) {
                Validation::Valid
            } else {
                Validation::Invalid("Max tokens must be between 50 and 500".into())
            })
        })
        .prompt()?;
    Ok(value)
}
