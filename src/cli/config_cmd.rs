//! Config command handler

use std::collections::BTreeMap;

use crate::application::ports::ConfigStore;
use crate::domain::bot::mask_token;
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    // Validate key
    if !is_valid_config_key(key) {
        return Err(unknown_key_error(key));
    }

    // Validate value based on key type
    validate_config_value(key, value)?;

    // Load existing config
    let mut config = store.load().await?;

    // Update the appropriate field
    if let Some(bot_name) = key.strip_prefix("bots.") {
        config
            .bots
            .get_or_insert_with(BTreeMap::new)
            .insert(bot_name.to_string(), value.to_string());
    } else {
        match key {
            "default_bot" => config.default_bot = Some(value.to_string()),
            "timeout" => {
                config.timeout =
                    Some(
                        value
                            .parse::<u64>()
                            .map_err(|_| ConfigError::ValidationError {
                                key: key.to_string(),
                                message: "Value must be a number of seconds".to_string(),
                            })?,
                    )
            }
            "api_url" => config.api_url = Some(value.to_string()),
            _ => unreachable!(), // Already validated
        }
    }

    // Save config
    store.save(&config).await?;

    // Never echo tokens back in full
    if key.starts_with("bots.") {
        presenter.success(&format!("{} = {}", key, mask_token(value)));
    } else {
        presenter.success(&format!("{} = {}", key, value));
    }

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    // Validate key
    if !is_valid_config_key(key) {
        return Err(unknown_key_error(key));
    }

    let config = store.load().await?;

    let value = if let Some(bot_name) = key.strip_prefix("bots.") {
        config
            .bots
            .as_ref()
            .and_then(|bots| bots.get(bot_name))
            .map(|token| mask_token(token))
    } else {
        match key {
            "default_bot" => config.default_bot,
            "timeout" => config.timeout.map(|t| t.to_string()),
            "api_url" => config.api_url,
            _ => unreachable!(),
        }
    };

    match value {
        Some(v) => presenter.output(&v),
        None => presenter.output("(not set)"),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value(
        "default_bot",
        config.default_bot.as_deref().unwrap_or("(not set)"),
    );
    presenter.key_value(
        "timeout",
        &config
            .timeout
            .map(|t| t.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value("api_url", config.api_url.as_deref().unwrap_or("(not set)"));

    for (name, token) in config.bot_entries() {
        presenter.key_value(&format!("bots.{}", name), &mask_token(token));
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn unknown_key_error(key: &str) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message: format!(
            "Unknown key. Valid keys: {}, bots.<name>",
            VALID_CONFIG_KEYS.join(", ")
        ),
    }
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "timeout" => {
            let secs = value
                .parse::<u64>()
                .map_err(|_| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must be a number of seconds".to_string(),
                })?;
            if secs == 0 {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Timeout must be at least 1 second".to_string(),
                });
            }
        }
        "api_url" => {
            if !value.starts_with("http://") && !value.starts_with("https://") {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "URL must use http or https".to_string(),
                });
            }
        }
        "default_bot" => {
            if value.is_empty() {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Bot name cannot be empty".to_string(),
                });
            }
        }
        _ => {} // bot tokens accept any string
    }
    Ok(())
}
