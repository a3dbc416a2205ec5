//! The `MessageSender` capability and its channel variants.

use crate::console::Console;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::debug;

/// Attempts delivery of a message through some channel. Cannot fail.
pub trait MessageSender: Debug + Send + Sync {
    /// Short channel label, used in logs.
    fn channel(&self) -> &'static str;

    fn send(&self, message: &str);
}

/// Email channel. Writes `Email sent: <message>`.
#[derive(Debug, Clone)]
pub struct EmailSender {
    console: Arc<dyn Console>,
}

impl EmailSender {
    #[must_use]
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self { console }
    }
}

impl MessageSender for EmailSender {
    fn channel(&self) -> &'static str {
        "email"
    }

    fn send(&self, message: &str) {
        debug!(channel = self.channel(), "Dispatching message");
        self.console.write_line(&format!("Email sent: {message}"));
    }
}

/// SMS channel. Writes `SMS sent: <message>`.
#[derive(Debug, Clone)]
pub struct SmsSender {
    console: Arc<dyn Console>,
}

impl SmsSender {
    #[must_use]
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self { console }
    }
}

impl MessageSender for SmsSender {
    fn channel(&self) -> &'static str {
        "sms"
    }

    fn send(&self, message: &str) {
        debug!(channel = self.channel(), "Dispatching message");
        self.console.write_line(&format!("SMS sent: {message}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::BufferedConsole;

    #[test]
    fn email_prefixes_message() {
        let console = Arc::new(BufferedConsole::new());
        EmailSender::new(console.clone()).send("Hello!");
        assert_eq!(console.lines(), ["Email sent: Hello!"]);
    }

    #[test]
    fn sms_prefixes_message() {
        let console = Arc::new(BufferedConsole::new());
        SmsSender::new(console.clone()).send("Hello!");
        assert_eq!(console.lines(), ["SMS sent: Hello!"]);
    }

    #[test]
    fn message_is_written_verbatim() {
        let console = Arc::new(BufferedConsole::new());
        let sender = SmsSender::new(console.clone());
        sender.send("");
        sender.send("  spaced {braces} ünïcode ");

        assert_eq!(console.lines(), ["SMS sent: ", "SMS sent:   spaced {braces} ünïcode "]);
    }
}
