mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};

use crate::cmd::board::{self, BoardCommandArgs};
use crate::cmd::config::{self as config_cmd, ConfigArgs};
use crate::cmd::ticket::{self, TicketCommandArgs};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::domain::action::TicketAction;
use crate::domain::column::DEFAULT_COLUMNS;
use crate::error::AppResult;
use crate::infra::atera::AteraClient;
use crate::workflow::board::BoardController;

#[derive(Parser)]
#[command(name = "ticketboard", author, version, about = "Kanban view of helpdesk tickets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch tickets and show them grouped by status column.
    Board(BoardArgs),
    /// Set a ticket's status, then show the refreshed board.
    Move(MoveArgs),
    /// Move a ticket onto a column, as a drag and drop would.
    Drop(DropArgs),
    /// List the status actions available for a ticket.
    Actions(ActionsArgs),
    /// Inspect CLI configuration.
    Config(ConfigArgs),
}

#[derive(Args)]
struct BoardArgs {
    /// Show tickets of the excluded tenant as well.
    #[arg(long)]
    include_excluded_tenant: bool,
}

impl From<&BoardArgs> for BoardCommandArgs {
    fn from(args: &BoardArgs) -> Self {
        Self {
            include_excluded_tenant: args.include_excluded_tenant,
        }
    }
}

#[derive(Args)]
struct MoveArgs {
    ticket_id: i64,
    /// Status sent to the helpdesk verbatim.
    status: String,
    #[command(flatten)]
    board: BoardArgs,
}

#[derive(Args)]
struct DropArgs {
    ticket_id: i64,
    /// Target column id (open, ongoing, resolved).
    column: String,
    #[command(flatten)]
    board: BoardArgs,
}

#[derive(Args)]
struct ActionsArgs {
    ticket_id: i64,
    #[command(flatten)]
    board: BoardArgs,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> AppResult<ExitCode> {
    let cli = Cli::parse();

    let controller = match cli.command {
        Commands::Config(args) => {
            config_cmd::run(args.command)?;
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Board(args) => board::run(&build_context()?, (&args).into()).await,
        Commands::Move(args) => {
            let request = TicketCommandArgs::Move {
                ticket_id: args.ticket_id,
                status: args.status,
            };
            ticket::run(&build_context()?, (&args.board).into(), request).await?
        }
        Commands::Drop(args) => {
            let request = TicketCommandArgs::Drop {
                ticket_id: args.ticket_id,
                column: args.column,
            };
            ticket::run(&build_context()?, (&args.board).into(), request).await?
        }
        Commands::Actions(args) => {
            let context = build_context()?;
            let (controller, actions) =
                ticket::actions(&context, (&args.board).into(), args.ticket_id).await;
            return Ok(print_actions(&controller, args.ticket_id, actions));
        }
    };

    Ok(print_board(&controller))
}

fn build_context() -> AppResult<AppContext> {
    let config = AppConfig::load()?;
    if config.api_key.is_none() {
        eprintln!("Warning: ATERA_API_KEY not configured; ticket requests will fail.");
    }
    let ticket_api = Arc::new(AteraClient::from_config(&config)?);
    Ok(AppContext::new(config, &DEFAULT_COLUMNS, ticket_api))
}

fn print_board(controller: &BoardController) -> ExitCode {
    print!("{}", board::render_controller(controller));
    exit_code(controller)
}

fn print_actions(
    controller: &BoardController,
    ticket_id: i64,
    actions: Option<Vec<TicketAction>>,
) -> ExitCode {
    if let Some(error) = &controller.state().error {
        eprintln!("Error: {error}");
    }
    match actions {
        Some(actions) => {
            for action in actions {
                println!("{:<16} -> {}", action.label, action.status);
            }
        }
        None => println!("Ticket #{ticket_id} is not on the board."),
    }
    exit_code(controller)
}

fn exit_code(controller: &BoardController) -> ExitCode {
    if controller.state().error.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
