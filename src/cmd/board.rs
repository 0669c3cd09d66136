use std::io::{self, IsTerminal};

use crate::context::AppContext;
use crate::domain::column::ColumnView;
use crate::domain::tenant::TenantFilter;
use crate::workflow::board::{BoardController, BoardState};

#[derive(Debug, Clone, Copy)]
pub struct BoardCommandArgs {
    pub include_excluded_tenant: bool,
}

/// Builds a controller for this session and loads the first ticket set.
pub async fn run(ctx: &AppContext, args: BoardCommandArgs) -> BoardController {
    let filter = TenantFilter::new(ctx.config.excluded_tenant, true);
    let mut controller = BoardController::new(ctx.ticket_api.clone(), ctx.columns, filter);
    controller
        .set_tenant_exclusion(!args.include_excluded_tenant)
        .await;
    controller
}

pub fn render_controller(controller: &BoardController) -> String {
    render(
        controller.state(),
        &controller.board(),
        io::stdout().is_terminal(),
    )
}

pub fn render(state: &BoardState, columns: &[ColumnView<'_>], colored: bool) -> String {
    let mut out = format!("Helpdesk board: {} tickets\n", state.tickets.len());
    // Only reachable for callers driving begin_refresh/finish_refresh themselves.
    if state.loading {
        out.push_str("Loading tickets...\n");
    }
    if let Some(error) = &state.error {
        out.push_str(&format!("Error: {error}\n"));
    }

    for column in columns {
        let header = format!("{} ({})", column.config.title, column.tickets.len());
        let header = if colored {
            paint(column.config.color, &header)
        } else {
            header
        };
        out.push_str(&format!("\n{header}\n"));

        for ticket in &column.tickets {
            out.push_str(&format!(
                "  #{} - {}  <{}> [{}] {} {}\n",
                ticket.id,
                ticket.title,
                ticket.status,
                ticket.priority_level().as_str(),
                ticket.customer_name,
                ticket.created_date()
            ));
            if let Some(line) = ticket.description.lines().find(|line| !line.trim().is_empty()) {
                out.push_str(&format!("      {}\n", line.trim()));
            }
        }
    }

    if state.tickets.is_empty() && state.error.is_none() {
        out.push_str("\nNo tickets found.\n");
    }
    out
}

fn paint(color: &str, text: &str) -> String {
    let code = match color {
        "red" => 31,
        "green" => 32,
        "yellow" => 33,
        "blue" => 34,
        _ => return text.to_string(),
    };
    format!("\x1b[{code}m{text}\x1b[0m")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::column::{DEFAULT_COLUMNS, classify};
    use crate::domain::ticket::RawTicket;

    #[test]
    fn renders_columns_in_order() {
        let state = BoardState {
            tickets: vec![
                RawTicket::from(json!({
                    "TicketID": 7,
                    "TicketTitle": "VPN down",
                    "TicketStatus": "InProgress",
                    "TicketPriority": "High",
                    "TicketCreatedDate": "2024-02-02T10:00:00Z",
                    "CustomerName": "Acme",
                    "TicketDescription": "\nUsers cannot connect\nsince 9am",
                }))
                .normalize(),
            ],
            loading: false,
            error: None,
        };

        let out = render(&state, &classify(&state.tickets, &DEFAULT_COLUMNS), false);

        assert!(out.starts_with("Helpdesk board: 1 tickets\n"));
        assert!(out.contains(
            "Open (0)\n\nOngoing (1)\n  #7 - VPN down  <InProgress> [high] Acme 2024-02-02\n      Users cannot connect\n"
        ));
        assert!(out.contains("Resolved (0)"));
        assert!(!out.contains("No tickets found."));
    }

    #[test]
    fn shows_error_above_stale_tickets() {
        let state = BoardState {
            tickets: vec![RawTicket::from(json!({"TicketID": 1, "TicketStatus": "New"})).normalize()],
            loading: false,
            error: Some("API key invalid".to_string()),
        };

        let out = render(&state, &classify(&state.tickets, &DEFAULT_COLUMNS), false);

        assert!(out.contains("Error: API key invalid\n"));
        assert!(out.contains("Open (1)\n  #1 -   <New> [-] Unknown customer "));
    }

    #[test]
    fn header_counts_every_held_ticket() {
        let state = BoardState {
            tickets: vec![
                RawTicket::from(json!({"TicketID": 1, "TicketStatus": "New"})).normalize(),
                RawTicket::from(json!({"TicketID": 2, "TicketStatus": "Escalated"})).normalize(),
            ],
            loading: false,
            error: None,
        };

        let out = render(&state, &classify(&state.tickets, &DEFAULT_COLUMNS), false);

        assert!(out.starts_with("Helpdesk board: 2 tickets\n"));
        assert!(out.contains("Open (1)\n"));
        assert!(!out.contains("#2 -"));
    }

    #[test]
    fn distinguishes_statuses_sharing_a_column() {
        let state = BoardState {
            tickets: vec![
                RawTicket::from(json!({"TicketID": 1, "TicketStatus": "New"})).normalize(),
                RawTicket::from(json!({"TicketID": 2, "TicketStatus": "Waiting"})).normalize(),
            ],
            loading: false,
            error: None,
        };

        let out = render(&state, &classify(&state.tickets, &DEFAULT_COLUMNS), false);

        assert!(out.contains("Open (2)\n  #1 -   <New> "));
        assert!(out.contains("  #2 -   <Waiting> "));
    }

    #[test]
    fn shows_loading_while_a_refresh_is_pending() {
        let pending = BoardState {
            loading: true,
            ..BoardState::default()
        };
        let out = render(&pending, &classify(&pending.tickets, &DEFAULT_COLUMNS), false);
        assert!(out.contains("Loading tickets...\n"));

        let settled = BoardState::default();
        let out = render(&settled, &classify(&settled.tickets, &DEFAULT_COLUMNS), false);
        assert!(!out.contains("Loading tickets..."));
    }

    #[test]
    fn empty_board_notice_only_without_error() {
        let empty = BoardState::default();
        let out = render(&empty, &classify(&empty.tickets, &DEFAULT_COLUMNS), false);
        assert!(out.contains("No tickets found."));

        let failed = BoardState {
            error: Some("boom".to_string()),
            ..BoardState::default()
        };
        let out = render(&failed, &classify(&failed.tickets, &DEFAULT_COLUMNS), false);
        assert!(!out.contains("No tickets found."));
    }

    #[test]
    fn colors_column_headers_on_terminals() {
        let state = BoardState::default();
        let out = render(&state, &classify(&state.tickets, &DEFAULT_COLUMNS), true);
        assert!(out.contains("\x1b[34mOpen (0)\x1b[0m\n"));
        assert!(out.contains("\x1b[32mResolved (0)\x1b[0m\n"));
    }
}
