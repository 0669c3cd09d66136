use async_trait::async_trait;

use crate::domain::ticket::RawTicket;
use crate::error::AppResult;

#[async_trait]
pub trait TicketApi: Send + Sync {
    async fn fetch_tickets(&self) -> AppResult<Vec<RawTicket>>;
    async fn update_status(&self, ticket_id: i64, status: &str) -> AppResult<()>;
}
