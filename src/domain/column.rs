use crate::domain::ticket::Ticket;

/// A board column and the status strings it accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnConfig {
    pub id: &'static str,
    pub title: &'static str,
    pub statuses: &'static [&'static str],
    pub color: &'static str,
}

impl ColumnConfig {
    /// Exact, case-sensitive membership.
    pub fn accepts(&self, status: &str) -> bool {
        self.statuses.contains(&status)
    }

    /// Status a ticket receives when dropped on this column.
    pub fn drop_status(&self) -> Option<&'static str> {
        self.statuses.first().copied()
    }
}

pub static DEFAULT_COLUMNS: [ColumnConfig; 3] = [
    ColumnConfig {
        id: "open",
        title: "Open",
        statuses: &["New", "Waiting"],
        color: "blue",
    },
    ColumnConfig {
        id: "ongoing",
        title: "Ongoing",
        statuses: &["InProgress"],
        color: "yellow",
    },
    ColumnConfig {
        id: "resolved",
        title: "Resolved",
        statuses: &["Resolved", "Closed"],
        color: "green",
    },
];

pub fn find_column<'a>(columns: &'a [ColumnConfig], id: &str) -> Option<&'a ColumnConfig> {
    columns.iter().find(|column| column.id == id)
}

#[derive(Debug, Clone)]
pub struct ColumnView<'a> {
    pub config: &'a ColumnConfig,
    pub tickets: Vec<&'a Ticket>,
}

/// Groups tickets by column in configured order.
///
/// Columns are evaluated independently, so overlapping status lists place a
/// ticket in every matching column. Tickets matching no column are left out.
pub fn classify<'a>(tickets: &'a [Ticket], columns: &'a [ColumnConfig]) -> Vec<ColumnView<'a>> {
    columns
        .iter()
        .map(|config| ColumnView {
            config,
            tickets: tickets
                .iter()
                .filter(|ticket| config.accepts(&ticket.status))
                .collect(),
        })
        .collect()
}

pub fn unclassified<'a>(tickets: &'a [Ticket], columns: &[ColumnConfig]) -> Vec<&'a Ticket> {
    tickets
        .iter()
        .filter(|ticket| !columns.iter().any(|column| column.accepts(&ticket.status)))
        .collect()
}
