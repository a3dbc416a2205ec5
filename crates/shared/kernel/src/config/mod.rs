use config::{Config, Environment, File, Map};
use herald_domain::constants::{CONFIG_FILE, ENV_PREFIX};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

#[herald_derive::herald_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file, then overlays environment variables.
///
/// 1. **File**: `path`, or `server` in the working directory when `None`. The extension may
///    be omitted; any format the `config` crate recognizes is accepted. The file is required.
/// 2. **Environment**: variables prefixed with `HERALD`, nested with `__`
///    (`HERALD__MESSAGING__QUALIFIER` maps to `messaging.qualifier`).
///
/// # Errors
/// Returns [`ConfigError`] if the file is missing or the merged values do not deserialize into `T`.
///
/// # Example
/// ```rust,no_run
/// use herald_kernel::config::load_config;
/// use herald_kernel::domain::config::ApiConfig;
///
/// let cfg: ApiConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load(path, environment())
}

/// Same as [`load_config`], but reads overrides from `vars` instead of the process environment.
///
/// Keys use the full variable form, e.g. `HERALD__SERVER__PORT`.
///
/// # Errors
/// Returns [`ConfigError`] if the file is missing or the merged values do not deserialize into `T`.
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    vars: Map<String, String>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load(path, environment().source(Some(vars)))
}

/// Values arrive as strings; `try_parsing` lets numeric and boolean fields deserialize.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .convert_case(config::Case::Snake)
        .try_parsing(true)
}

fn load<T>(path: Option<impl AsRef<Path>>, env: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path = path.map_or_else(|| PathBuf::from(CONFIG_FILE), |p| p.as_ref().to_path_buf());
    info!("Loading config from {}", path.display());

    let config = Config::builder()
        .add_source(File::from(path.as_path()).required(true))
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
