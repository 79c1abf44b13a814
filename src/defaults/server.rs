//! Server handler: turns events into JSON bodies for the transport

use super::transport::Transport;
use crate::context::RecordContext;
use crate::handler::ServerHandler;
use crate::record::Event;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// JSON body POSTed for each server-bound event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerBody {
    /// Lower-case level name
    pub level: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logger: Option<String>,
    /// RFC 3339 local time of emission
    pub timestamp: String,
}

impl ServerBody {
    pub fn new(event: &Event, context: &RecordContext, location: Option<&str>) -> Self {
        Self {
            level: context.level.name().to_lowercase(),
            message: event.message().to_string(),
            data: event.data(),
            title: event.title().map(String::from),
            location: location.map(String::from),
            logger: context.name.clone(),
            timestamp: chrono::Local::now().to_rfc3339(),
        }
    }
}

pub struct HttpServerHandler {
    transport: Arc<dyn Transport>,
    location: Option<String>,
}

impl HttpServerHandler {
    pub fn new(transport: Arc<dyn Transport>, location: Option<String>) -> Self {
        Self {
            transport,
            location,
        }
    }
}

impl ServerHandler for HttpServerHandler {
    fn handle(&self, event: &Event, context: &RecordContext, server_url: Option<&str>) {
        let Some(url) = server_url else {
            debug!(level = %context.level, "No server URL, dropping server record");
            return;
        };
        let body = ServerBody::new(event, context, self.location.as_deref());
        self.transport.send(url, body);
    }
}
