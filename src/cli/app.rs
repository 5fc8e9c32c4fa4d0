//! Main app runners for the send and bots commands

use std::collections::BTreeMap;
use std::env;
use std::process::ExitCode;

use crate::application::ports::ConfigStore;
use crate::application::{BotRegistry, DispatchInput, NotificationDispatcher};
use crate::domain::config::AppConfig;
use crate::infrastructure::{PushbulletClient, XdgConfigStore};

use super::args::SendOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable holding the default bot's access token
pub const TOKEN_ENV_VAR: &str = "PUSHBULLET_ACCESS_TOKEN";

/// Run the send command
pub async fn run_send(options: SendOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    let config = load_merged_config().await;
    let registry = build_registry(&config);

    if registry.count() == 0 {
        presenter.error(&format!(
            "No bots configured. Set {} or run 'pushnote config set bots.<name> <token>'",
            TOKEN_ENV_VAR
        ));
        return ExitCode::from(EXIT_USAGE_ERROR);
    }

    let client = match config.api_url.as_deref() {
        Some(url) => PushbulletClient::with_base_url(url),
        None => PushbulletClient::new(),
    }
    .with_timeout(config.timeout_or_default());

    let dispatcher = NotificationDispatcher::new(registry, client)
        .with_default_bot(config.default_bot_or_default());

    let input = DispatchInput {
        bot_name: options
            .bot
            .unwrap_or_else(|| config.default_bot_or_default().to_string()),
        recipient: options.recipient,
        title: options.title,
        body: options.body,
        kind: options.kind,
    };

    presenter.start_spinner("Sending push...");
    match dispatcher.dispatch(input).await {
        Ok(()) => {
            presenter.spinner_success("Push sent");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.spinner_fail(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Run the bots listing
pub async fn run_bots() -> ExitCode {
    let presenter = Presenter::new();

    let config = load_merged_config().await;
    let registry = build_registry(&config);

    presenter.info(&format!("Configured {} bot(s)", registry.count()));
    for bot in registry.snapshot() {
        presenter.key_value(bot.name(), &bot.masked_token());
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Load and merge configuration: defaults < file < environment.
/// The token env var feeds the effective default bot's entry.
pub async fn load_merged_config() -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    let mut config = AppConfig::defaults().merge(file_config);

    if let Ok(token) = env::var(TOKEN_ENV_VAR) {
        if !token.is_empty() {
            let name = config.default_bot_or_default().to_string();
            config
                .bots
                .get_or_insert_with(BTreeMap::new)
                .insert(name, token);
        }
    }

    config
}

/// Register every configured bot
fn build_registry(config: &AppConfig) -> BotRegistry {
    let registry = BotRegistry::new();
    for (name, token) in config.bot_entries() {
        registry.register(name, token);
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_registry_registers_configured_bots() {
        let config = AppConfig {
            bots: Some(BTreeMap::from([
                ("home".to_string(), "tok1".to_string()),
                ("garage".to_string(), "tok2".to_string()),
            ])),
            ..Default::default()
        };

        let registry = build_registry(&config);
        assert_eq!(registry.count(), 2);
        assert_eq!(registry.get("home").unwrap().token(), "tok1");
    }

    #[test]
    fn build_registry_empty_config() {
        let registry = build_registry(&AppConfig::empty());
        assert_eq!(registry.count(), 0);
    }
}
