use log::{info, warn};
use serde::Serialize;

/// A validated quote request, ready to leave the page.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct QuoteRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub country_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub selected_services: Vec<String>,
}

/// Where a validated request is handed off once local checks pass.
pub trait QuoteTransport {
    fn deliver(&self, request: &QuoteRequest);
}

/// Logs the request to the browser console. Stand-in until the form has a
/// delivery endpoint.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleTransport;

impl QuoteTransport for ConsoleTransport {
    fn deliver(&self, request: &QuoteRequest) {
        match serde_json::to_string(request) {
            Ok(body) => info!("Quote request is valid and would be submitted: {}", body),
            Err(e) => warn!("Failed to serialize quote request: {}", e),
        }
    }
}
