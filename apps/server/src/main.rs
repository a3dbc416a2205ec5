use anyhow::Context;
use herald::kernel::config::load_config;
use herald_logger::Logger;
use herald_server::Server;

#[herald_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    let cfg = load_config(None::<&str>).context("Critical: Configuration is malformed")?;

    Server::builder().config(cfg).build()?.run().await
}
