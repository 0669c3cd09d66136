use crate::cmd::board::{self, BoardCommandArgs};
use crate::context::AppContext;
use crate::domain::action::{TicketAction, available_actions};
use crate::error::{AppError, AppResult};
use crate::workflow::board::BoardController;

#[derive(Debug, Clone)]
pub enum TicketCommandArgs {
    Move { ticket_id: i64, status: String },
    Drop { ticket_id: i64, column: String },
}

pub async fn run(
    ctx: &AppContext,
    board_args: BoardCommandArgs,
    args: TicketCommandArgs,
) -> AppResult<BoardController> {
    if let TicketCommandArgs::Drop { column, .. } = &args
        && !ctx.columns.iter().any(|config| config.id == column.as_str())
    {
        return Err(unknown_column(ctx, column));
    }

    let mut controller = board::run(ctx, board_args).await;
    match args {
        TicketCommandArgs::Move { ticket_id, status } => {
            controller.move_ticket(ticket_id, &status).await;
        }
        TicketCommandArgs::Drop { ticket_id, column } => {
            controller.drop_on_column(ticket_id, &column).await?;
        }
    }
    Ok(controller)
}

pub async fn actions(
    ctx: &AppContext,
    board_args: BoardCommandArgs,
    ticket_id: i64,
) -> (BoardController, Option<Vec<TicketAction>>) {
    let controller = board::run(ctx, board_args).await;
    let actions = controller.ticket(ticket_id).map(available_actions);
    (controller, actions)
}

fn unknown_column(ctx: &AppContext, column: &str) -> AppError {
    let known = ctx
        .columns
        .iter()
        .map(|config| config.id)
        .collect::<Vec<_>>()
        .join(", ");
    AppError::Configuration(format!("unknown column '{column}' (expected one of: {known})"))
}
