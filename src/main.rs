use anyhow::Result;
use clap::Parser;

use assist_cli::cli::commands::{ask, chat, configure};
use assist_cli::cli::{Args, Command};
use assist_cli::error::AssistantError;
use assist_cli::generation::print_languages;
use assist_cli::logging;
use assist_cli::ui::Style;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; the keys may already be exported.
    let _ = dotenv::dotenv();

    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(err) = run(args).await {
        if let Some(startup @ AssistantError::StartupConfigMissing { .. }) =
            err.downcast_ref::<AssistantError>()
        {
            eprintln!("{} {startup}", Style::error("Error:"));
            std::process::exit(exitcode::CONFIG);
        }

        eprintln!("{} {err:#}", Style::error("Error:"));
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        Some(Command::Ask { file, generation }) => {
            let options = ask::AskOptions {
                file,
                resolve: generation.into(),
            };
            ask::run_ask(options).await?;
        }
        Some(Command::Chat { generation }) => {
            chat::run_chat(generation.into()).await?;
        }
        None => {
            chat::run_chat(args.generation.into()).await?;
        }
    }

    Ok(())
}
