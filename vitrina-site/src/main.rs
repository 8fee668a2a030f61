use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;
use vitrina_site::app;
use vitrina_site::cli::Cli;

fn init_logger() {
    Builder::new()
        // Rendered sections own stdout.
        .target(Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter_module("vitrina_site", LevelFilter::Info)
        .filter_module("vitrina_core", LevelFilter::Info)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Before the logger, so RUST_LOG may come from the env file.
    let dotenv = dotenvy::from_path(&cli.env_file);

    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    if let Err(err) = dotenv
        && !err.not_found()
    {
        log::warn!("Ignoring {}: {err}", cli.env_file.display());
    }

    app::run(cli).await
}
