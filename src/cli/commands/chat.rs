use anyhow::Result;

use crate::chat::ChatSession;
use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, Secrets, resolve_config};

/// Starts an interactive chat session.
pub async fn run_chat(options: ResolveOptions) -> Result<()> {
    let config = load_resolved_config(&options)?;
    let mut session = ChatSession::new(config);
    session.run().await
}

/// Loads secrets and settings for a command that calls the model.
///
/// Secrets are checked first so a missing key halts before anything else runs.
pub fn load_resolved_config(options: &ResolveOptions) -> Result<ResolvedConfig> {
    let secrets = Secrets::from_env()?;
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;

    let config = resolve_config(options, &file_config, secrets)?;
    tracing::debug!(
        endpoint = %config.endpoint,
        model = %config.model,
        config_path = %manager.config_path().display(),
        "configuration resolved"
    );
    Ok(config)
}
