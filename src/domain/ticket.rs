use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

pub const UNKNOWN_CUSTOMER: &str = "Unknown customer";

const ID_KEYS: &[&str] = &["TicketID", "ticketID", "id"];
const TITLE_KEYS: &[&str] = &["TicketTitle", "title"];
const DESCRIPTION_KEYS: &[&str] = &["TicketDescription", "description", "FirstComment"];
const STATUS_KEYS: &[&str] = &["TicketStatus", "status"];
const PRIORITY_KEYS: &[&str] = &["TicketPriority", "priority"];
const CREATED_KEYS: &[&str] = &["TicketCreatedDate", "createdDate", "createdAt"];
const CUSTOMER_NAME_KEYS: &[&str] = &["CustomerName", "customerName", "EndUserName"];
const TENANT_KEYS: &[&str] = &["EndUserID", "CustomerID", "customerID"];

/// A ticket record as the helpdesk API returned it.
///
/// Field names vary between API versions, so the record stays an untyped
/// JSON object until [`RawTicket::normalize`] turns it into a [`Ticket`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTicket(Map<String, Value>);

impl RawTicket {
    pub fn normalize(&self) -> Ticket {
        self.normalize_at(Utc::now())
    }

    /// Same as [`RawTicket::normalize`] with an explicit value for a missing
    /// creation date.
    pub fn normalize_at(&self, now: DateTime<Utc>) -> Ticket {
        Ticket {
            id: self.integer(ID_KEYS).unwrap_or_default(),
            title: self.text(TITLE_KEYS).unwrap_or_default(),
            description: self.text(DESCRIPTION_KEYS).unwrap_or_default(),
            status: self.text(STATUS_KEYS).unwrap_or_default(),
            priority: self.text(PRIORITY_KEYS).unwrap_or_default(),
            created_at: self
                .text(CREATED_KEYS)
                .unwrap_or_else(|| now.to_rfc3339_opts(SecondsFormat::Millis, true)),
            customer_name: self
                .text(CUSTOMER_NAME_KEYS)
                .unwrap_or_else(|| UNKNOWN_CUSTOMER.to_string()),
            tenant_id: self.integer(TENANT_KEYS),
        }
    }

    fn first(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter()
            .filter_map(|key| self.0.get(*key))
            .find(|value| !value.is_null())
    }

    fn text(&self, keys: &[&str]) -> Option<String> {
        self.first(keys).map(|value| match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
    }

    fn integer(&self, keys: &[&str]) -> Option<i64> {
        self.first(keys).and_then(|value| match value {
            Value::Number(number) => number.as_i64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        })
    }
}

impl From<Value> for RawTicket {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self(fields),
            _ => Self::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub created_at: String,
    pub customer_name: String,
    pub tenant_id: Option<i64>,
}

impl Ticket {
    pub fn priority_level(&self) -> PriorityLevel {
        PriorityLevel::from_label(&self.priority)
    }

    /// Creation date as `YYYY-MM-DD`, or the raw value when it is not RFC 3339.
    pub fn created_date(&self) -> String {
        DateTime::parse_from_rfc3339(&self.created_at)
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|_| self.created_at.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityLevel {
    High,
    Medium,
    Low,
    Other,
}

impl PriorityLevel {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "high" | "critical" => PriorityLevel::High,
            "medium" => PriorityLevel::Medium,
            "low" => PriorityLevel::Low,
            _ => PriorityLevel::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityLevel::High => "high",
            PriorityLevel::Medium => "medium",
            PriorityLevel::Low => "low",
            PriorityLevel::Other => "-",
        }
    }
}
