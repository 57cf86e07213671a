use anyhow::{Result, bail};

use super::chat::load_resolved_config;
use crate::chat::{describe_failure, submit};
use crate::config::ResolveOptions;
use crate::conversation::Transcript;
use crate::generation::{CompletionClient, ResponseGenerator};
use crate::input::InputReader;
use crate::ui::Spinner;

pub struct AskOptions {
    pub file: Option<String>,
    pub resolve: ResolveOptions,
}

/// Answers a single question read from a file or stdin and prints the reply.
pub async fn run_ask(options: AskOptions) -> Result<()> {
    let config = load_resolved_config(&options.resolve)?;

    let question = InputReader::read(options.file.as_deref())?;
    let question = question.trim();
    if question.is_empty() {
        bail!("Input is empty");
    }

    let client = CompletionClient::new(config.endpoint, config.secrets.inference_api_key);
    let generator = ResponseGenerator::new(client, config.model);

    let submission = {
        let _spinner = Spinner::new("Generating response...");
        submit(Transcript::new(), question, &config.options, &generator).await
    };

    match submission.outcome {
        Ok(reply) => {
            println!("{reply}");
            Ok(())
        }
        Err(err) => bail!(describe_failure(&err)),
    }
}
