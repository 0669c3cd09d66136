use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::column::ColumnConfig;
use crate::services::TicketApi;

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub columns: &'static [ColumnConfig],
    pub ticket_api: Arc<dyn TicketApi>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        columns: &'static [ColumnConfig],
        ticket_api: Arc<dyn TicketApi>,
    ) -> Self {
        Self {
            config,
            columns,
            ticket_api,
        }
    }
}
