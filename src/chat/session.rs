use anyhow::{Context, Result, bail};
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::{CustomType, InquireError, Select, Text};

use super::command::{Input, SettingKey, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::config::ResolvedConfig;
use crate::conversation::{Transcript, Turn};
use crate::error::AssistantError;
use crate::generation::{
    CompletionClient, CompletionService, GenerationOptions, Language, ResponseGenerator,
};
use crate::ui::{Spinner, Style, format_turn, print_error};

/// Result of handling one user submission.
#[derive(Debug)]
pub struct Submission {
    /// The session transcript after the submission.
    pub transcript: Transcript,
    /// The reply, or why there is none.
    pub outcome: Result<String, AssistantError>,
}

/// Handles one user submission against the session transcript.
///
/// The user's turn is always recorded. The assistant's turn is recorded only
/// when generation succeeds.
pub async fn submit<S: CompletionService>(
    mut transcript: Transcript,
    text: &str,
    options: &GenerationOptions,
    generator: &ResponseGenerator<S>,
) -> Submission {
    transcript.append(Turn::user(text));

    let outcome = generator.generate(&transcript, options).await;
    if let Ok(reply) = &outcome {
        transcript.append(Turn::assistant(reply.as_str()));
    }

    Submission {
        transcript,
        outcome,
    }
}

/// Formats a generation failure for inline display.
pub fn describe_failure(err: &AssistantError) -> String {
    err.generation_detail().map_or_else(
        || format!("An error occurred: {err}"),
        |detail| format!("An error occurred: {err} ({detail})"),
    )
}

/// Applies a `/set` value to the current options.
///
/// Numeric values are clamped into range the way a slider would; values that
/// do not parse are rejected.
pub fn apply_setting(
    options: GenerationOptions,
    key: SettingKey,
    value: &str,
) -> Result<GenerationOptions> {
    let value = value.trim();
    match key {
        SettingKey::Temperature => {
            let temperature: f32 = value
                .parse()
                .with_context(|| format!("Invalid temperature: '{value}'"))?;
            if temperature.is_nan() {
                bail!("Invalid temperature: '{value}'");
            }
            Ok(options.with_temperature(temperature))
        }
        SettingKey::MaxTokens => {
            let max_tokens: u32 = value
                .parse()
                .with_context(|| format!("Invalid max_tokens: '{value}'"))?;
            Ok(options.with_max_tokens(max_tokens))
        }
        SettingKey::Language => Ok(options.with_language(value.parse()?)),
    }
}

/// An interactive chat session.
///
/// Owns the transcript for its whole lifetime; nothing else can reach it.
pub struct ChatSession<S = CompletionClient> {
    endpoint: String,
    generator: ResponseGenerator<S>,
    options: GenerationOptions,
    transcript: Transcript,
}

impl ChatSession<CompletionClient> {
    /// Creates a session that talks to the configured endpoint.
    pub fn new(config: ResolvedConfig) -> Self {
        let client = CompletionClient::new(
            config.endpoint.clone(),
            config.secrets.inference_api_key.clone(),
        );
        Self::with_service(config, client)
    }
}

impl<S: CompletionService> ChatSession<S> {
    pub fn with_service(config: ResolvedConfig, service: S) -> Self {
        Self {
            endpoint: config.endpoint,
            generator: ResponseGenerator::new(service, config.model),
            options: config.options,
            transcript: Transcript::new(),
        }
    }

    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub const fn options(&self) -> &GenerationOptions {
        &self.options
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();
        tracing::info!(
            model = self.generator.model(),
            language = %self.options.language(),
            "chat session started"
        );

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_placeholder("Type your question here")
                .with_help_message("/help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd)? {
                            break;
                        }
                    }
                    Input::Text(text) => self.send(&text).await,
                },
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        tracing::info!(turns = self.transcript.len(), "chat session ended");
        ui::print_goodbye();
        Ok(())
    }

    /// Submits `text`, then shows the reply or an inline error.
    ///
    /// A failed generation never ends the session.
    pub async fn send(&mut self, text: &str) {
        let transcript = std::mem::take(&mut self.transcript);

        let submission = {
            let _spinner = Spinner::new("Generating response...");
            submit(transcript, text, &self.options, &self.generator).await
        };
        self.transcript = submission.transcript;

        match submission.outcome {
            Ok(_) => {
                if let Some(turn) = self.transcript.all().last() {
                    println!("{}", format_turn(turn));
                    println!();
                }
            }
            Err(err) => print_error(&describe_failure(&err)),
        }
    }

    fn handle_command(&mut self, cmd: SlashCommand) -> Result<bool> {
        match cmd {
            SlashCommand::Config => {
                ui::print_config(self.generator.model(), &self.endpoint, &self.options);
            }
            SlashCommand::Help => ui::print_help(),
            SlashCommand::History => ui::print_transcript(&self.transcript),
            SlashCommand::Quit => return Ok(false),
            SlashCommand::SetUsage => {
                println!("Usage: /set <key> [value]");
                println!("Keys: temperature, max_tokens, language");
            }
            SlashCommand::Set { key, value } => self.handle_set(key, value.as_deref())?,
            SlashCommand::UnknownSetting(key) => {
                print_error(&format!("Unknown setting: {key}"));
                println!("Available: temperature, max_tokens, language");
            }
            SlashCommand::Unknown(cmd) => {
                print_error(&format!("Unknown command: /{cmd}"));
            }
        }
        Ok(true)
    }

    fn handle_set(&mut self, key: SettingKey, value: Option<&str>) -> Result<()> {
        let updated = match value {
            Some(value) => apply_setting(self.options, key, value),
            None => match self.prompt_setting(key) {
                Ok(options) => Ok(options),
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            },
        };

        match updated {
            Ok(options) => {
                self.options = options;
                let shown = match key {
                    SettingKey::Temperature => ("Temperature", format!("{:.2}", options.temperature())),
                    SettingKey::MaxTokens => ("Max tokens", options.max_tokens().to_string()),
                    SettingKey::Language => ("Language", options.language().to_string()),
                };
                tracing::debug!(setting = shown.0, value = %shown.1, "setting changed");
                println!(
                    "{} {} set to {}\n",
                    Style::success("✓"),
                    shown.0,
                    Style::value(shown.1)
                );
            }
            Err(e) => print_error(&e.to_string()),
        }
        Ok(())
    }

    fn prompt_setting(&self, key: SettingKey) -> Result<GenerationOptions, InquireError> {
        let options = self.options;
        match key {
            SettingKey::Temperature => {
                let value = CustomType::<f32>::new("Temperature (creativity):")
                    .with_default(options.temperature())
                    .with_help_message("0.0 (focused) to 1.0 (creative)")
                    .prompt()?;
                Ok(options.with_temperature(value))
            }
            SettingKey::MaxTokens => {
                let value = CustomType::<u32>::new("Max tokens (response length):")
                    .with_default(options.max_tokens())
                    .with_help_message("50 to 500")
                    .prompt()?;
                Ok(options.with_max_tokens(value))
            }
            SettingKey::Language => {
                let cursor = Language::ALL
                    .iter()
                    .position(|lang| *lang == options.language())
                    .unwrap_or(0);
                let value = Select::new("Select Language:", Language::ALL.to_vec())
                    .with_starting_cursor(cursor)
                    .prompt()?;
                Ok(options.with_language(value))
            }
        }
    }
}
