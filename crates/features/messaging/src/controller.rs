//! Request handlers bound to a sender at construction.

use crate::error::{MessagingError, MessagingErrorExt};
use crate::registry::{Qualifier, SenderRegistry};
use crate::sender::MessageSender;
use herald_domain::constants::{GREETING, SEND_ACK};
use std::sync::Arc;

/// Sends the fixed greeting through the sender it was built with. Never rebinds.
#[derive(Debug, Clone)]
pub struct MessageController {
    sender: Arc<dyn MessageSender>,
}

impl MessageController {
    #[must_use]
    pub fn new(sender: Arc<dyn MessageSender>) -> Self {
        Self { sender }
    }

    /// Resolves the sender for `qualifier` and binds to it.
    ///
    /// # Errors
    /// Propagates the resolution error, with the qualifier as context.
    pub fn bind(registry: &SenderRegistry, qualifier: &Qualifier) -> Result<Self, MessagingError> {
        registry
            .resolve(qualifier)
            .map(Self::new)
            .context(format!("binding controller to {qualifier}"))
    }

    /// Sends `Hello!` and returns the acknowledgement body.
    pub fn send(&self) -> &'static str {
        self.sender.send(GREETING);
        SEND_ACK
    }

    pub fn channel(&self) -> &'static str {
        self.sender.channel()
    }
}

/// The two controllers the HTTP surface exposes.
#[derive(Debug, Clone)]
pub struct MessagingBindings {
    /// Bound through the primary sender.
    pub primary: MessageController,
    /// Bound through an explicit sender name.
    pub qualified: MessageController,
}

impl MessagingBindings {
    /// # Errors
    /// Fails if the registry has no unique primary or `qualifier` is not registered.
    pub fn resolve(registry: &SenderRegistry, qualifier: &str) -> Result<Self, MessagingError> {
        Ok(Self {
            primary: MessageController::bind(registry, &Qualifier::Primary)?,
            qualified: MessageController::bind(registry, &Qualifier::named(qualifier.to_owned()))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::BufferedConsole;
    use crate::sender::{EmailSender, SmsSender};
    use herald_domain::constants::SMS_SENDER;

    #[test]
    fn send_returns_ack_and_writes_once() {
        let out = Arc::new(BufferedConsole::new());
        let controller = MessageController::new(Arc::new(SmsSender::new(out.clone())));

        assert_eq!(controller.send(), "Message sent!");
        assert_eq!(out.lines(), ["SMS sent: Hello!"]);
    }

    #[test]
    fn bindings_split_primary_and_named() {
        let out = Arc::new(BufferedConsole::new());
        let registry = SenderRegistry::with_defaults(out.clone()).expect("defaults");
        let bindings = MessagingBindings::resolve(&registry, SMS_SENDER).expect("bindings");

        assert_eq!(bindings.primary.channel(), "email");
        assert_eq!(bindings.qualified.channel(), "sms");

        bindings.primary.send();
        bindings.qualified.send();
        assert_eq!(out.lines(), ["Email sent: Hello!", "SMS sent: Hello!"]);
    }

    #[test]
    fn unknown_qualifier_fails_binding_with_context() {
        let registry = SenderRegistry::with_defaults(Arc::new(BufferedConsole::new())).expect("defaults");
        let err = MessagingBindings::resolve(&registry, "smsService").expect_err("typo");

        assert!(matches!(err, MessagingError::UnknownQualifier { context: Some(_), .. }));
        assert!(err.to_string().contains("smsService"), "unexpected message: {err}");
    }

    #[test]
    fn ambiguous_primary_fails_binding() {
        let out = Arc::new(BufferedConsole::new());
        let registry = SenderRegistry::builder()
            .register_primary("emailService", Arc::new(EmailSender::new(out.clone())))
            .register_primary(SMS_SENDER, Arc::new(SmsSender::new(out)))
            .build()
            .expect("registry");

        let err = MessagingBindings::resolve(&registry, SMS_SENDER).expect_err("ambiguous");
        assert!(matches!(err, MessagingError::AmbiguousPrimary { .. }));
    }
}
