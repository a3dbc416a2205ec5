//! Name-based sender registry with a single designated primary.
//!
//! Consumers ask for a [`Qualifier`]:
//!
//! * [`Qualifier::Named`] binds to the sender registered under exactly that name
//!   (case-sensitive, no trimming). An unknown name is an error.
//! * [`Qualifier::Primary`] binds to the one sender marked primary. Zero or several
//!   primaries are errors.
//!
//! Senders are registered as shared instances, so every consumer resolving the same
//! name holds the same `Arc`.

use crate::console::Console;
use crate::error::MessagingError;
use crate::sender::{EmailSender, MessageSender, SmsSender};
use fxhash::FxHashMap;
use herald_domain::constants::{EMAIL_SENDER, SMS_SENDER};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Which sender a consumer wants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Qualifier {
    Primary,
    Named(Cow<'static, str>),
}

impl Qualifier {
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Named(name.into())
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => f.write_str("<primary>"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone)]
struct Registration {
    sender: Arc<dyn MessageSender>,
    primary: bool,
}

#[derive(Debug)]
pub struct SenderRegistry {
    senders: FxHashMap<Cow<'static, str>, Registration>,
}

impl SenderRegistry {
    #[must_use]
    pub fn builder() -> SenderRegistryBuilder {
        SenderRegistryBuilder::default()
    }

    /// Email (primary, `emailService`) and SMS (`sMSService`), both writing to `console`.
    ///
    /// # Errors
    /// Never fails for the built-in names; the `Result` comes from [`SenderRegistryBuilder::build`].
    pub fn with_defaults(console: Arc<dyn Console>) -> Result<Self, MessagingError> {
        Self::builder()
            .register_primary(EMAIL_SENDER, Arc::new(EmailSender::new(Arc::clone(&console))))
            .register(SMS_SENDER, Arc::new(SmsSender::new(console)))
            .build()
    }

    /// Resolves `qualifier` to a registered sender.
    ///
    /// # Errors
    /// * [`MessagingError::UnknownQualifier`] when no sender has the requested name.
    /// * [`MessagingError::NoPrimary`] when no sender is marked primary.
    /// * [`MessagingError::AmbiguousPrimary`] when more than one sender is marked primary.
    pub fn resolve(&self, qualifier: &Qualifier) -> Result<Arc<dyn MessageSender>, MessagingError> {
        match qualifier {
            Qualifier::Named(name) => self
                .senders
                .get(name)
                .map(|r| Arc::clone(&r.sender))
                .ok_or_else(|| MessagingError::UnknownQualifier { name: name.clone(), context: None }),
            Qualifier::Primary => self.resolve_primary(),
        }
    }

    fn resolve_primary(&self) -> Result<Arc<dyn MessageSender>, MessagingError> {
        let mut primaries: Vec<(&str, &Registration)> = self
            .senders
            .iter()
            .filter(|(_, r)| r.primary)
            .map(|(name, r)| (&**name, r))
            .collect();

        match primaries.len() {
            0 => Err(MessagingError::NoPrimary { context: None }),
            1 => Ok(Arc::clone(&primaries[0].1.sender)),
            _ => {
                primaries.sort_unstable_by_key(|(name, _)| *name);
                let candidates =
                    primaries.iter().map(|(name, _)| format!("'{name}'")).collect::<Vec<_>>();
                Err(MessagingError::AmbiguousPrimary { candidates: candidates.join(", "), context: None })
            },
        }
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.senders.keys().map(|name| &**name).collect();
        names.sort_unstable();
        names
    }
}

#[derive(Debug, Default)]
pub struct SenderRegistryBuilder {
    entries: Vec<(Cow<'static, str>, Registration)>,
}

impl SenderRegistryBuilder {
    /// Registers a sender selectable only by name.
    #[must_use]
    pub fn register(
        self,
        name: impl Into<Cow<'static, str>>,
        sender: Arc<dyn MessageSender>,
    ) -> Self {
        self.push(name.into(), sender, false)
    }

    /// Registers a sender that claims primary status.
    #[must_use]
    pub fn register_primary(
        self,
        name: impl Into<Cow<'static, str>>,
        sender: Arc<dyn MessageSender>,
    ) -> Self {
        self.push(name.into(), sender, true)
    }

    fn push(mut self, name: Cow<'static, str>, sender: Arc<dyn MessageSender>, primary: bool) -> Self {
        self.entries.push((name, Registration { sender, primary }));
        self
    }

    /// # Errors
    /// Returns [`MessagingError::DuplicateName`] if two registrations share a name.
    pub fn build(self) -> Result<SenderRegistry, MessagingError> {
        let mut senders = FxHashMap::default();
        for (name, registration) in self.entries {
            if senders.contains_key(&name) {
                return Err(MessagingError::DuplicateName { name, context: None });
            }
            senders.insert(name, registration);
        }
        Ok(SenderRegistry { senders })
    }
}
