//! Kernel utilities shared by the server and the feature slices.
//! Keep this crate lightweight: configuration loading, the shared API state and
//! infrastructure routes.
//!
//! ## Config loading
//! ```rust,ignore
//! use herald_kernel::config::load_config;
//! use herald_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("server"))?;
//! ```
pub mod config;
#[cfg(feature = "server")]
pub mod server;

pub use herald_domain as domain;
