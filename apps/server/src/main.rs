use anyhow::Context;
use waymark::kernel::config::load_config;
use waymark_logger::Logger;
use waymark_server::Server;

#[waymark_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    let cfg = load_config(Some("server")).context("Critical: Configuration is malformed")?;

    Server::builder().config(cfg).build().await?.run().await
}
