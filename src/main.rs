//! Pushnote CLI entry point

use std::process::ExitCode;

use clap::Parser;

use pushnote::cli::{
    app::{run_bots, run_send, EXIT_ERROR},
    args::{Cli, Commands, SendOptions},
    config_cmd::handle_config_command,
    logging::init_logging,
    presenter::Presenter,
};
use pushnote::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();
    let presenter = Presenter::new();

    match cli.command {
        Commands::Config { action } => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Commands::Bots => run_bots().await,
        Commands::Send {
            bot,
            to,
            kind,
            title,
            body,
        } => {
            run_send(SendOptions {
                bot,
                recipient: to,
                title,
                body,
                kind: kind.into(),
            })
            .await
        }
    }
}
