use crate::domain::ticket::Ticket;

pub const DEFAULT_EXCLUDED_TENANT: i64 = 36;

/// Hides the tickets of one designated tenant from the working set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenantFilter {
    pub excluded_tenant: i64,
    pub exclude: bool,
}

impl TenantFilter {
    pub fn new(excluded_tenant: i64, exclude: bool) -> Self {
        Self {
            excluded_tenant,
            exclude,
        }
    }

    pub fn admits(&self, ticket: &Ticket) -> bool {
        !self.exclude || ticket.tenant_id != Some(self.excluded_tenant)
    }

    pub fn apply(&self, tickets: Vec<Ticket>) -> Vec<Ticket> {
        tickets
            .into_iter()
            .filter(|ticket| self.admits(ticket))
            .collect()
    }
}

impl Default for TenantFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_TENANT, true)
    }
}
