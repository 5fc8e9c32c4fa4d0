//! Push dispatch use case

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::bot::Bot;
use crate::domain::config::DEFAULT_BOT_NAME;
use crate::domain::push::{Push, PushKind, Recipient};

use super::ports::{PushSendError, PushSender};

/// Errors from the dispatch use case
#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    #[error("Unknown bot \"{0}\", please check configuration")]
    UnknownBot(String),

    #[error(transparent)]
    Send(#[from] PushSendError),
}

/// Shared registry of bot credentials.
///
/// Registration is an upsert; the last write for a name wins. Reads vastly
/// outnumber writes (bots are registered at startup, dispatch runs per rule
/// firing), hence the reader-writer lock.
#[derive(Clone, Default)]
pub struct BotRegistry {
    bots: Arc<RwLock<HashMap<String, Bot>>>,
}

impl BotRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a bot under its name, overwriting any previous entry
    pub fn register(&self, name: impl Into<String>, token: impl Into<String>) {
        let name = name.into();
        let bot = Bot::new(name.clone(), token);
        self.bots
            .write()
            .expect("bot registry lock poisoned")
            .insert(name, bot);
    }

    /// Look up a bot by name
    pub fn get(&self, name: &str) -> Option<Bot> {
        self.bots
            .read()
            .expect("bot registry lock poisoned")
            .get(name)
            .cloned()
    }

    /// Number of registered bots
    pub fn count(&self) -> usize {
        self.bots.read().expect("bot registry lock poisoned").len()
    }

    /// Snapshot of all registered bots, sorted by name
    pub fn snapshot(&self) -> Vec<Bot> {
        let mut bots: Vec<Bot> = self
            .bots
            .read()
            .expect("bot registry lock poisoned")
            .values()
            .cloned()
            .collect();
        bots.sort_by(|a, b| a.name().cmp(b.name()));
        bots
    }
}

/// Input parameters for a single dispatch
#[derive(Debug, Clone)]
pub struct DispatchInput {
    /// Name of the bot sending the push
    pub bot_name: String,
    /// Raw recipient string; absent broadcasts to all devices
    pub recipient: Option<String>,
    /// Push title
    pub title: String,
    /// Push body
    pub body: String,
    /// Push kind
    pub kind: PushKind,
}

/// Push dispatch use case: resolves the sending bot, classifies the
/// recipient, builds the payload, and hands it to the sender port.
pub struct NotificationDispatcher<S: PushSender> {
    registry: BotRegistry,
    sender: S,
    default_bot: String,
}

impl<S: PushSender> NotificationDispatcher<S> {
    /// Create a dispatcher over a registry and a sender
    pub fn new(registry: BotRegistry, sender: S) -> Self {
        Self {
            registry,
            sender,
            default_bot: DEFAULT_BOT_NAME.to_string(),
        }
    }

    /// Override the bot name used by the default-bot helpers
    pub fn with_default_bot(mut self, name: impl Into<String>) -> Self {
        self.default_bot = name.into();
        self
    }

    /// Access the underlying registry
    pub fn registry(&self) -> &BotRegistry {
        &self.registry
    }

    /// Dispatch a push, reporting failures as a tagged error.
    ///
    /// An unrecognized recipient is not a failure: the push degrades to a
    /// broadcast across all of the account's devices, with a warning.
    pub async fn dispatch(&self, input: DispatchInput) -> Result<(), DispatchError> {
        let Some(bot) = self.registry.get(&input.bot_name) else {
            warn!(bot = %input.bot_name, "unconfigured bot, please check configuration");
            return Err(DispatchError::UnknownBot(input.bot_name));
        };

        let recipient = Recipient::classify_opt(input.recipient.as_deref());
        if recipient.is_broadcast() {
            if let Some(raw) = input.recipient.as_deref() {
                warn!(
                    recipient = %raw,
                    "unrecognized recipient, message will be broadcast to all devices"
                );
            }
        }

        debug!(
            bot = %bot.name(),
            title = %input.title,
            kind = %input.kind,
            "dispatching push"
        );

        let push = Push::new(input.title, input.body, input.kind, recipient);
        self.sender.send(bot.token(), &push).await?;
        Ok(())
    }

    /// Dispatch a push, collapsing every failure to `false` plus a warning.
    ///
    /// Compatibility surface for rule callers that only branch on success;
    /// prefer [`dispatch`](Self::dispatch) when the failure kind matters.
    pub async fn dispatch_ok(&self, input: DispatchInput) -> bool {
        match self.dispatch(input).await {
            Ok(()) => true,
            // Unknown bots are already logged at warn inside dispatch
            Err(DispatchError::UnknownBot(_)) => false,
            Err(DispatchError::Send(e)) => {
                warn!("problems pushing note: {e}");
                false
            }
        }
    }

    /// Send a note from a named bot
    pub async fn send_note(
        &self,
        bot_name: impl Into<String>,
        recipient: Option<&str>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<(), DispatchError> {
        debug!("trying to send a note");
        self.dispatch(DispatchInput {
            bot_name: bot_name.into(),
            recipient: recipient.map(str::to_string),
            title: title.into(),
            body: body.into(),
            kind: PushKind::Note,
        })
        .await
    }

    /// Send a note from the default bot
    pub async fn send_note_with_default_bot(
        &self,
        recipient: Option<&str>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<(), DispatchError> {
        let bot_name = self.default_bot.clone();
        self.send_note(bot_name, recipient, title, body).await
    }

    /// Broadcast a note from the default bot to all of the account's devices
    pub async fn broadcast_note(
        &self,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<(), DispatchError> {
        self.send_note_with_default_bot(None, title, body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    // Mock sender that records sends and can be told to fail
    #[derive(Clone, Default)]
    struct RecordingSender {
        sent: Arc<Mutex<Vec<(String, Push)>>>,
        fail_with: Arc<Mutex<Option<PushSendError>>>,
    }

    impl RecordingSender {
        fn sent(&self) -> Vec<(String, Push)> {
            self.sent.lock().unwrap().clone()
        }

        fn fail_with(&self, err: PushSendError) {
            *self.fail_with.lock().unwrap() = Some(err);
        }
    }

    #[async_trait]
    impl PushSender for RecordingSender {
        async fn send(&self, token: &str, push: &Push) -> Result<(), PushSendError> {
            if let Some(err) = self.fail_with.lock().unwrap().clone() {
                return Err(err);
            }
            self.sent
                .lock()
                .unwrap()
                .push((token.to_string(), push.clone()));
            Ok(())
        }
    }

    fn dispatcher_with(sender: RecordingSender) -> NotificationDispatcher<RecordingSender> {
        let registry = BotRegistry::new();
        registry.register("home", "tok123");
        NotificationDispatcher::new(registry, sender)
    }

    fn input(bot: &str, recipient: Option<&str>) -> DispatchInput {
        DispatchInput {
            bot_name: bot.to_string(),
            recipient: recipient.map(str::to_string),
            title: "Alarm".to_string(),
            body: "Door opened".to_string(),
            kind: PushKind::Note,
        }
    }

    #[tokio::test]
    async fn dispatch_resolves_email_recipient() {
        let sender = RecordingSender::default();
        let dispatcher = dispatcher_with(sender.clone());

        dispatcher
            .dispatch(input("home", Some("a@b.com")))
            .await
            .unwrap();

        let sent = sender.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "tok123");
        assert_eq!(sent[0].1.recipient, Recipient::Email("a@b.com".to_string()));
    }

    #[tokio::test]
    async fn dispatch_resolves_channel_recipient() {
        let sender = RecordingSender::default();
        let dispatcher = dispatcher_with(sender.clone());

        dispatcher
            .dispatch(input("home", Some("home_alarm")))
            .await
            .unwrap();

        let sent = sender.sent();
        assert_eq!(
            sent[0].1.recipient,
            Recipient::Channel("home_alarm".to_string())
        );
    }

    #[tokio::test]
    async fn unknown_bot_fails_without_sending() {
        let sender = RecordingSender::default();
        let dispatcher = dispatcher_with(sender.clone());

        let err = dispatcher
            .dispatch(input("missing-bot", None))
            .await
            .unwrap_err();

        assert!(matches!(err, DispatchError::UnknownBot(name) if name == "missing-bot"));
        assert!(sender.sent().is_empty());
    }

    #[tokio::test]
    async fn unrecognized_recipient_broadcasts_instead_of_failing() {
        let sender = RecordingSender::default();
        let dispatcher = dispatcher_with(sender.clone());

        dispatcher
            .dispatch(input("home", Some("not a recipient!")))
            .await
            .unwrap();

        assert_eq!(sender.sent()[0].1.recipient, Recipient::Broadcast);
    }

    #[tokio::test]
    async fn dispatch_ok_collapses_failures_to_false() {
        let sender = RecordingSender::default();
        let dispatcher = dispatcher_with(sender.clone());

        assert!(!dispatcher.dispatch_ok(input("missing-bot", None)).await);

        sender.fail_with(PushSendError::Transport("connection refused".to_string()));
        assert!(!dispatcher.dispatch_ok(input("home", None)).await);
    }

    #[tokio::test]
    async fn dispatch_ok_reports_success() {
        let sender = RecordingSender::default();
        let dispatcher = dispatcher_with(sender.clone());

        assert!(dispatcher.dispatch_ok(input("home", Some("a@b.com"))).await);
    }

    #[tokio::test]
    async fn default_bot_helpers_use_configured_name() {
        let sender = RecordingSender::default();
        let registry = BotRegistry::new();
        registry.register("house", "tok-house");
        let dispatcher =
            NotificationDispatcher::new(registry, sender.clone()).with_default_bot("house");

        dispatcher.broadcast_note("T", "B").await.unwrap();

        let sent = sender.sent();
        assert_eq!(sent[0].0, "tok-house");
        assert_eq!(sent[0].1.recipient, Recipient::Broadcast);
    }

    #[test]
    fn registry_upsert_last_write_wins() {
        let registry = BotRegistry::new();
        registry.register("home", "tok-old");
        registry.register("home", "tok-new");

        assert_eq!(registry.count(), 1);
        assert_eq!(registry.get("home").unwrap().token(), "tok-new");
    }

    #[test]
    fn registry_snapshot_is_sorted() {
        let registry = BotRegistry::new();
        registry.register("zulu", "t1");
        registry.register("alpha", "t2");

        let snapshot = registry.snapshot();
        let names: Vec<&str> = snapshot.iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["alpha", "zulu"]);
    }
}
