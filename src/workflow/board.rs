use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::column::{ColumnConfig, ColumnView, classify, find_column, unclassified};
use crate::domain::tenant::TenantFilter;
use crate::domain::ticket::{RawTicket, Ticket};
use crate::error::{AppError, AppResult};
use crate::services::TicketApi;

pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update ticket status";

/// Everything the board renders. Only [`BoardController`] writes to it.
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    pub tickets: Vec<Ticket>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Sequence number of an issued refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshSeq(u64);

pub struct BoardController {
    api: Arc<dyn TicketApi>,
    columns: &'static [ColumnConfig],
    filter: TenantFilter,
    state: BoardState,
    latest: RefreshSeq,
}

impl BoardController {
    pub fn new(
        api: Arc<dyn TicketApi>,
        columns: &'static [ColumnConfig],
        filter: TenantFilter,
    ) -> Self {
        Self {
            api,
            columns,
            filter,
            state: BoardState::default(),
            latest: RefreshSeq(0),
        }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn ticket(&self, ticket_id: i64) -> Option<&Ticket> {
        self.state.tickets.iter().find(|ticket| ticket.id == ticket_id)
    }

    /// Column-by-column view of the held tickets. Tickets whose status no
    /// column accepts are not shown.
    pub fn board(&self) -> Vec<ColumnView<'_>> {
        let hidden = unclassified(&self.state.tickets, self.columns).len();
        if hidden > 0 {
            debug!(hidden, "tickets with unmapped status left off the board");
        }
        classify(&self.state.tickets, self.columns)
    }

    pub async fn refresh(&mut self) {
        let seq = self.begin_refresh();
        let outcome = self.api.fetch_tickets().await;
        self.finish_refresh(seq, outcome);
    }

    pub fn begin_refresh(&mut self) -> RefreshSeq {
        self.latest = RefreshSeq(self.latest.0 + 1);
        self.state.loading = true;
        self.latest
    }

    /// Applies a fetch outcome. Outcomes from refreshes older than the latest
    /// issued one are discarded; returns whether the outcome was applied.
    pub fn finish_refresh(&mut self, seq: RefreshSeq, outcome: AppResult<Vec<RawTicket>>) -> bool {
        if seq < self.latest {
            debug!(?seq, latest = ?self.latest, "discarding stale ticket fetch");
            return false;
        }

        self.state.loading = false;
        match outcome {
            Ok(raw) => {
                let fetched = raw.len();
                let tickets = self
                    .filter
                    .apply(raw.iter().map(RawTicket::normalize).collect());
                debug!(fetched, kept = tickets.len(), "ticket set replaced");
                self.state.tickets = tickets;
                self.state.error = None;
            }
            Err(err) => {
                warn!(error = %err, "ticket fetch failed");
                self.state.error = Some(err.user_message());
            }
        }
        true
    }

    /// Forwards `status` to the helpdesk as-is, then refetches on success.
    pub async fn move_ticket(&mut self, ticket_id: i64, status: &str) {
        match self.api.update_status(ticket_id, status).await {
            Ok(()) => self.refresh().await,
            Err(err) => {
                warn!(ticket_id, status, error = %err, "ticket update failed");
                self.state.error = Some(UPDATE_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Moves a ticket to the first status accepted by `column_id`.
    pub async fn drop_on_column(&mut self, ticket_id: i64, column_id: &str) -> AppResult<()> {
        let status = find_column(self.columns, column_id)
            .and_then(ColumnConfig::drop_status)
            .ok_or_else(|| AppError::Configuration(format!("unknown column '{column_id}'")))?;
        self.move_ticket(ticket_id, status).await;
        Ok(())
    }

    /// Changing the filter refetches rather than re-filtering held tickets.
    pub async fn set_tenant_exclusion(&mut self, exclude: bool) {
        self.filter.exclude = exclude;
        self.refresh().await;
    }
}
