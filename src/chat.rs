//! Live-chat widget used by the "talk to us" calls to action.
//!
//! The vendor script reads commands from a global queue, so the widget is
//! modelled as a queue of [`ChatCommand`]s that the page host drains and
//! forwards to the browser.

use serde::{Serialize, Serializer};
use std::sync::Mutex;
use std::time::Duration;

/// Loader script for the Crisp chat widget.
pub const CRISP_SCRIPT_URL: &str = "https://client.crisp.chat/l.js";

/// Pause between revealing the widget and opening the conversation.
pub const OPEN_DELAY: Duration = Duration::from_millis(50);

/// Controls the chat widget.
pub trait ChatWidget: Send + Sync {
    /// Make the widget visible.
    fn show(&self);

    /// Open the conversation panel.
    fn open(&self);
}

/// A command pushed onto the vendor queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatCommand {
    Show,
    Open,
}

impl ChatCommand {
    pub fn action(&self) -> &'static str {
        match self {
            Self::Show => "chat:show",
            Self::Open => "chat:open",
        }
    }
}

/// Serializes as `["do", "<action>"]`.
impl Serialize for ChatCommand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ("do", self.action()).serialize(serializer)
    }
}

/// Queue-backed Crisp widget for one website.
#[derive(Debug)]
pub struct CrispChat {
    website_id: String,
    queue: Mutex<Vec<ChatCommand>>,
}

impl CrispChat {
    pub fn new(website_id: impl Into<String>) -> Self {
        Self {
            website_id: website_id.into(),
            queue: Mutex::new(Vec::new()),
        }
    }

    pub fn website_id(&self) -> &str {
        &self.website_id
    }

    pub fn script_url(&self) -> &'static str {
        CRISP_SCRIPT_URL
    }

    /// Number of commands waiting to be forwarded.
    pub fn pending(&self) -> usize {
        self.lock().len()
    }

    /// Take every queued command, oldest first.
    pub fn drain(&self) -> Vec<ChatCommand> {
        std::mem::take(&mut *self.lock())
    }

    fn push(&self, command: ChatCommand) {
        tracing::debug!(website_id = %self.website_id, action = command.action(), "Queueing chat command");
        self.lock().push(command);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ChatCommand>> {
        // A poisoned queue still holds valid commands
        self.queue.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ChatWidget for CrispChat {
    fn show(&self) {
        self.push(ChatCommand::Show);
    }

    fn open(&self) {
        self.push(ChatCommand::Open);
    }
}

/// Reveal the widget, then open it after [`OPEN_DELAY`].
pub async fn open_chat(widget: &dyn ChatWidget) {
    widget.show();
    tokio::time::sleep(OPEN_DELAY).await;
    widget.open();
}
