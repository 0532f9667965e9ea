use clap::Parser;
use cli::{Cli, Command};

mod cli;
mod commands;
mod config;
mod report;
mod retry;
mod sources;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Cli::parse();

    match args.cmd {
        Command::Report(report_args) => commands::report::exec(report_args).await,
        Command::Score(score_args) => commands::score::exec(score_args),
    }
}
