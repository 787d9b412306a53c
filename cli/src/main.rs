use std::io;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use viagens_core::{ClientConfig, DeleteOutcome, TripClient, TripForm, TripId, TripListController};

mod terminal;
mod transport;

use terminal::TerminalView;
use transport::UreqTransport;

#[derive(Parser, Debug)]
#[command(name = "viagens", about = "List, add and delete trips")]
struct Cli {
    /// API base url [env: VIAGENS_API_URL, default: http://localhost:8080]
    #[arg(long)]
    base_url: Option<String>,
    /// Basic auth user [env: VIAGENS_API_USER, default: admin]
    #[arg(long)]
    user: Option<String>,
    /// Basic auth password [env: VIAGENS_API_PASSWORD, default: admin]
    #[arg(long)]
    password: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every trip.
    List,
    /// Create a trip, then show the list.
    Add {
        #[arg(long)]
        destino: String,
        #[arg(long)]
        data_partida: String,
        #[arg(long)]
        data_retorno: String,
        #[arg(long)]
        preco: String,
        #[arg(long, default_value = "")]
        descricao: String,
    },
    /// Delete a trip by id, then show the list.
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let env_config = ClientConfig::from_env()?;
    let config = ClientConfig::new(
        cli.base_url.unwrap_or(env_config.base_url),
        cli.user.unwrap_or(env_config.username),
        cli.password.unwrap_or(env_config.password),
    )?;
    tracing::debug!(base_url = %config.base_url, "configured");

    let assume_yes = matches!(cli.command, Command::Delete { yes: true, .. });
    let view = TerminalView::new(io::stdin().lock(), io::stdout().lock(), assume_yes);
    let mut controller = TripListController::new(TripClient::new(config), UreqTransport::new(), view);

    match cli.command {
        Command::List => {
            controller.load_all()?;
        }
        Command::Add {
            destino,
            data_partida,
            data_retorno,
            preco,
            descricao,
        } => {
            controller.create(&TripForm {
                destino,
                data_partida,
                data_retorno,
                preco,
                descricao,
            })?;
        }
        Command::Delete { id, .. } => {
            if controller.delete(&TripId::from(id))? == DeleteOutcome::Cancelled {
                bail!("delete cancelled");
            }
        }
    }

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn".into());

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();
}
