mod cli;
mod services;

use cli::cli;
use services::shared::logger::init_logger;

async fn run_fxconvert() -> anyhow::Result<()> {
    init_logger();
    cli().await?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    run_fxconvert().await?;
    Ok(())
}
