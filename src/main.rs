use clap::Parser;
use color_eyre::Result;

use statmon::adapters::ReqwestHttpClient;
use statmon::cli::Cli;
use statmon::logging::init_logging;
use statmon::poller::Poller;

fn main() -> Result<()> {
    let cli = Cli::parse();

    color_eyre::install()?;
    init_logging();

    let config = cli.poller_config();
    let client = ReqwestHttpClient::with_timeout(config.timeout)?;

    // Single-threaded: cycles run strictly one after another
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(Poller::new(client, &config).run());

    Ok(())
}
