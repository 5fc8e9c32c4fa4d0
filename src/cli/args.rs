//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::push::PushKind;

/// Config keys with a fixed name; `bots.<name>` keys are dynamic
pub const VALID_CONFIG_KEYS: &[&str] = &["default_bot", "timeout", "api_url"];

/// Check whether a config key is recognized
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
        || key
            .strip_prefix("bots.")
            .is_some_and(|name| !name.is_empty())
}

/// Pushnote - send Pushbullet notes from the command line
#[derive(Parser, Debug)]
#[command(name = "pushnote")]
#[command(version)]
#[command(about = "Send Pushbullet notes from scripts and automation rules")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a push
    Send {
        /// Bot (sender credential) to use; defaults to the configured default bot
        #[arg(short, long, value_name = "NAME")]
        bot: Option<String>,

        /// Recipient: an email address or a channel tag; anything else
        /// broadcasts to all of the account's devices
        #[arg(short = 't', long = "to", value_name = "RECIPIENT")]
        to: Option<String>,

        /// Push kind
        #[arg(short, long, value_name = "KIND", default_value = "note")]
        kind: KindArg,

        /// Push title
        title: String,

        /// Push body
        body: String,
    },
    /// List configured bots
    Bots,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Push kind argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Note,
    Link,
}

impl From<KindArg> for PushKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Note => PushKind::Note,
            KindArg::Link => PushKind::Link,
        }
    }
}

/// Resolved options for the send command
#[derive(Debug, Clone)]
pub struct SendOptions {
    pub bot: Option<String>,
    pub recipient: Option<String>,
    pub title: String,
    pub body: String,
    pub kind: PushKind,
}
