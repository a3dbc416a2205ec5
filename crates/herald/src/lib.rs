//! Facade crate for Herald features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it composes other crates and implements no business logic.

pub use herald_domain as domain;
pub use herald_kernel as kernel;

use herald_domain::config::ApiConfig;
use herald_domain::registry::InitializedSlice;
use herald_messaging::Console;
use std::sync::Arc;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use herald_kernel::server::router::system_router;
        pub use herald_messaging::server::messaging_router;
    }
}

pub mod features {
    pub use herald_messaging as messaging;
}

/// Initializes every feature slice.
///
/// `console` is where message channels write their lines (stdout in production).
///
/// # Errors
/// Returns the first slice initialization failure.
pub fn init(
    config: &ApiConfig,
    console: Arc<dyn Console>,
) -> Result<Vec<InitializedSlice>, Box<dyn std::error::Error + Send + Sync>> {
    let slices = vec![features::messaging::init(&config.messaging, console)?];

    tracing::debug!(count = slices.len(), "Feature slices initialized");
    Ok(slices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_messaging::{BufferedConsole, Messaging};

    #[test]
    fn init_registers_the_messaging_slice() {
        let slices = init(&ApiConfig::default(), Arc::new(BufferedConsole::new())).expect("init");

        assert_eq!(slices.len(), 1);
        assert!(slices[0].downcast_ref::<Messaging>().is_some());
    }

    #[test]
    fn init_surfaces_slice_failures() {
        let mut config = ApiConfig::default();
        config.messaging.qualifier = "smsService".into();

        let err = init(&config, Arc::new(BufferedConsole::new())).expect_err("unknown qualifier");
        assert!(err.to_string().contains("smsService"), "unexpected message: {err}");
    }
}
