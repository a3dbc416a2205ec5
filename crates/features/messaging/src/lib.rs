//! Messaging feature slice.
//!
//! A [`MessageSender`] capability with two channels (email, SMS), a [`SenderRegistry`]
//! that resolves a sender by explicit name or by the primary marker, and two
//! [`MessageController`]s bound once at startup.
//!
//! With the `server` feature the slice also exposes its HTTP routes:
//! `GET /api/primary/send` and `GET /api/qualifier/send`.

mod console;
mod controller;
mod error;
mod registry;
mod sender;
#[cfg(feature = "server")]
pub mod server;

pub use crate::console::{BufferedConsole, Console, StdoutConsole};
pub use crate::controller::{MessageController, MessagingBindings};
pub use crate::error::{MessagingError, MessagingErrorExt};
pub use crate::registry::{Qualifier, SenderRegistry, SenderRegistryBuilder};
pub use crate::sender::{EmailSender, MessageSender, SmsSender};

use herald_domain::config::MessagingConfig;
use herald_kernel::domain::registry::InitializedSlice;
use std::sync::Arc;
use tracing::info;

/// Messaging feature state
#[herald_derive::herald_slice]
pub struct Messaging {
    pub registry: SenderRegistry,
    pub bindings: MessagingBindings,
}

/// Builds the default registry and binds both controllers.
///
/// # Errors
/// Returns a [`MessagingError`] when `config.qualifier` names no registered sender or the
/// primary cannot be resolved. The server must not start in that case.
pub fn init(
    config: &MessagingConfig,
    console: Arc<dyn Console>,
) -> Result<InitializedSlice, MessagingError> {
    let registry = SenderRegistry::with_defaults(console)?;
    let bindings = MessagingBindings::resolve(&registry, &config.qualifier)?;

    info!(
        senders = ?registry.names(),
        primary = bindings.primary.channel(),
        qualifier = %config.qualifier,
        qualified = bindings.qualified.channel(),
        "Messaging slice initialized"
    );

    Ok(InitializedSlice::new(Messaging::new(MessagingInner { registry, bindings })))
}
