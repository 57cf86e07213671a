use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/config", "Show current settings"),
    ("/help", "Show available commands"),
    ("/history", "Show the conversation so far"),
    ("/quit", "Exit chat mode"),
    ("/set", "Change temperature, max_tokens or language"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// A setting that `/set` can change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    Temperature,
    MaxTokens,
    Language,
}

impl SettingKey {
    fn parse(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "temperature" | "temp" => Some(Self::Temperature),
            "max_tokens" | "max-tokens" | "tokens" => Some(Self::MaxTokens),
            "language" | "lang" => Some(Self::Language),
            _ => None,
        }
    }
}

/// Slash command types
#[derive(Debug, Clone)]
pub enum SlashCommand {
    Config,
    Help,
    History,
    Quit,
    /// `/set` with no key.
    SetUsage,
    Set {
        key: SettingKey,
        value: Option<String>,
    },
    UnknownSetting(String),
    Unknown(String),
}

/// Input types
#[derive(Debug)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    let command = match parts.first().copied() {
        Some("config") => SlashCommand::Config,
        Some("help") => SlashCommand::Help,
        Some("history") => SlashCommand::History,
        Some("quit" | "exit" | "q") => SlashCommand::Quit,
        Some("set") => parse_set(&parts[1..]),
        _ => SlashCommand::Unknown(parts.join(" ")),
    };

    Input::Command(command)
}

fn parse_set(args: &[&str]) -> SlashCommand {
    let Some((key, rest)) = args.split_first() else {
        return SlashCommand::SetUsage;
    };

    let value = (!rest.is_empty()).then(|| rest.join(" "));

    SettingKey::parse(key).map_or_else(
        || SlashCommand::UnknownSetting((*key).to_string()),
        |key| SlashCommand::Set { key, value },
    )
}
