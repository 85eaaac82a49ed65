mod app;
mod cli;

use clap::Parser;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    fiire_core::logging::init_logging(&cli.log_level);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let application = app::Application::build(&cli)?;
        application.serve().await
    })
}
