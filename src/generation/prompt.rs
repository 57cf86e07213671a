use crate::conversation::Transcript;

use super::language::Language;

pub const SYSTEM_PROMPT_TEMPLATE: &str =
    "You are a helpful assistant. Please respond to the queries politely in {language}.";

/// The two-message prompt sent to the completion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub human: String,
}

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_system_prompt(language: Language) -> String {
    // {language} is a placeholder for string replacement, not a format argument
    SYSTEM_PROMPT_TEMPLATE.replace("{language}", language.name())
}

/// Flattens a transcript into one `"<Role>: <content>"` line per turn.
pub fn flatten_transcript(transcript: &Transcript) -> String {
    transcript
        .iter()
        .map(|turn| format!("{}: {}", turn.role().prompt_label(), turn.content()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_prompt(transcript: &Transcript, language: Language) -> Prompt {
    Prompt {
        system: build_system_prompt(language),
        human: flatten_transcript(transcript),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::Turn;

    #[test]
    fn test_build_system_prompt() {
        let prompt = build_system_prompt(Language::French);
        assert_eq!(
            prompt,
            "You are a helpful assistant. Please respond to the queries politely in French."
        );
    }

    #[test]
    fn test_system_prompt_template_has_placeholder() {
        assert!(SYSTEM_PROMPT_TEMPLATE.contains("{language}"));
    }

    #[test]
    fn test_flatten_transcript() {
        let mut transcript = Transcript::new();
        transcript.append(Turn::user("hi"));
        transcript.append(Turn::assistant("hello"));
        assert_eq!(flatten_transcript(&transcript), "User: hi\nAssistant: hello");
    }

    #[test]
    fn test_flatten_empty_transcript() {
        assert_eq!(flatten_transcript(&Transcript::new()), "");
    }

    #[test]
    fn test_flatten_keeps_multiline_content() {
        let mut transcript = Transcript::new();
        transcript.append(Turn::user("line one\nline two"));
        assert_eq!(flatten_transcript(&transcript), "User: line one\nline two");
    }

    #[test]
    fn test_build_prompt_first_message_in_french() {
        let mut transcript = Transcript::new();
        transcript.append(Turn::user("Hello"));

        let prompt = build_prompt(&transcript, Language::French);
        assert!(prompt.system.contains("politely in French"));
        assert_eq!(prompt.human, "User: Hello");
    }
}
