use crate::domain::ticket::Ticket;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketAction {
    pub label: &'static str,
    pub status: &'static str,
}

pub const TICKET_ACTIONS: [TicketAction; 4] = [
    TicketAction {
        label: "Start Progress",
        status: "InProgress",
    },
    TicketAction {
        label: "Mark Resolved",
        status: "Resolved",
    },
    TicketAction {
        label: "Re-open",
        status: "New",
    },
    TicketAction {
        label: "Put on Hold",
        status: "Waiting",
    },
];

/// Actions offered for a ticket, minus the one that would leave it unchanged.
pub fn available_actions(ticket: &Ticket) -> Vec<TicketAction> {
    TICKET_ACTIONS
        .iter()
        .filter(|action| action.status != ticket.status)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::ticket::RawTicket;

    #[test]
    fn hides_action_for_current_status() {
        let ticket = RawTicket::from(json!({"TicketStatus": "InProgress"})).normalize();
        let labels: Vec<&str> = available_actions(&ticket).iter().map(|a| a.label).collect();
        assert_eq!(labels, vec!["Mark Resolved", "Re-open", "Put on Hold"]);
    }

    #[test]
    fn offers_all_actions_for_unknown_status() {
        let ticket = RawTicket::from(json!({"TicketStatus": "Closed"})).normalize();
        assert_eq!(available_actions(&ticket).len(), TICKET_ACTIONS.len());
    }
}
