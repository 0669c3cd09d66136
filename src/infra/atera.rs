use async_trait::async_trait;
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, CONTENT_TYPE},
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::domain::ticket::RawTicket;
use crate::error::{AppError, AppResult};
use crate::services::TicketApi;

const API_KEY_HEADER: &str = "X-API-KEY";

pub struct AteraClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl AteraClient {
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|err| {
            AppError::Configuration(format!("failed to build HTTP client: {err}"))
        })?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn api_key(&self) -> AppResult<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            AppError::Configuration(
                "API key missing - set ATERA_API_KEY in the environment or a .env file".to_string(),
            )
        })
    }

    fn tickets_endpoint(base_url: &str) -> String {
        format!("{}/tickets", base_url.trim_end_matches('/'))
    }

    fn ticket_endpoint(base_url: &str, ticket_id: i64) -> String {
        format!("{}/{ticket_id}", Self::tickets_endpoint(base_url))
    }
}

#[async_trait]
impl TicketApi for AteraClient {
    async fn fetch_tickets(&self) -> AppResult<Vec<RawTicket>> {
        let api_key = self.api_key()?;
        let url = Self::tickets_endpoint(&self.base_url);
        debug!(%url, "fetching tickets");

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, api_key)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|err| AppError::Transport(format!("failed to reach helpdesk: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "ticket fetch rejected");
            return Err(fetch_error(status));
        }

        let payload: Value = response.json().await.map_err(|err| {
            AppError::Transport(format!("failed to parse helpdesk response: {err}"))
        })?;
        let items = extract_items(payload);
        debug!(count = items.len(), "fetched tickets");
        Ok(items)
    }

    async fn update_status(&self, ticket_id: i64, status: &str) -> AppResult<()> {
        let api_key = self.api_key()?;
        let url = Self::ticket_endpoint(&self.base_url, ticket_id);
        debug!(%url, ticket_id, status, "updating ticket status");

        let response = self
            .http
            .put(&url)
            .header(API_KEY_HEADER, api_key)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&StatusUpdateRequest::new(status))
            .send()
            .await
            .map_err(|err| AppError::Mutation(format!("failed to reach helpdesk: {err}")))?;

        let code = response.status();
        if !code.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::Mutation(format!(
                "helpdesk responded with {code}: {body}"
            )));
        }

        Ok(())
    }
}

fn fetch_error(status: StatusCode) -> AppError {
    if status == StatusCode::UNAUTHORIZED {
        return AppError::Authentication(
            "API key invalid - check that ATERA_API_KEY is set correctly".to_string(),
        );
    }
    let message = match status.canonical_reason() {
        Some(reason) => format!("helpdesk request failed: {} {reason}", status.as_u16()),
        None => format!("helpdesk request failed: {}", status.as_u16()),
    };
    AppError::Transport(message)
}

fn extract_items(payload: Value) -> Vec<RawTicket> {
    match payload {
        Value::Object(mut body) => match body.remove("items") {
            Some(Value::Array(items)) => items.into_iter().map(RawTicket::from).collect(),
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// The helpdesk has accepted the status under both names across API versions.
#[derive(Serialize)]
struct StatusUpdateRequest<'a> {
    #[serde(rename = "TicketStatus")]
    ticket_status: &'a str,
    status: &'a str,
}

impl<'a> StatusUpdateRequest<'a> {
    fn new(status: &'a str) -> Self {
        Self {
            ticket_status: status,
            status,
        }
    }
}
