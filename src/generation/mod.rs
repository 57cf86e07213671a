mod client;
mod generator;
mod language;
mod options;
mod prompt;

pub use client::{CompletionClient, CompletionRequest, CompletionService, parse_completion_body};
pub use generator::{ResponseGenerator, TRACE_PROJECT};
pub use language::{Language, print_languages};
pub use options::{
    DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, GenerationOptions, MAX_TOKENS_RANGE,
    TEMPERATURE_RANGE,
};
pub use prompt::{Prompt, SYSTEM_PROMPT_TEMPLATE, build_prompt, build_system_prompt, flatten_transcript};

#[cfg(test)]
pub(crate) use generator::tests::ScriptedService;
