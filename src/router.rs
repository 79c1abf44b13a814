//! Dispatch router
//!
//! Holds the two handler slots and the server URL consulted by every
//! logger of a `Splogger`. Slots are replaced wholesale; last write wins.

use crate::context::RecordContext;
use crate::handler::{LocalHandler, ServerHandler};
use crate::record::Event;
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Default)]
pub struct Router {
    local: RwLock<Option<Arc<dyn LocalHandler>>>,
    server: RwLock<Option<Arc<dyn ServerHandler>>>,
    server_url: RwLock<Option<String>>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_handler(&self, handler: Arc<dyn LocalHandler>) {
        *self.local.write() = Some(handler);
    }

    pub fn set_server_handler(&self, handler: Arc<dyn ServerHandler>) {
        *self.server.write() = Some(handler);
    }

    pub fn set_server_url(&self, url: Option<String>) {
        *self.server_url.write() = url;
    }

    pub fn server_url(&self) -> Option<String> {
        self.server_url.read().clone()
    }

    /// Remove both handlers; emission becomes a no-op on both paths
    pub fn clear(&self) {
        *self.local.write() = None;
        *self.server.write() = None;
    }

    pub fn has_handler(&self) -> bool {
        self.local.read().is_some()
    }

    pub fn has_server_handler(&self) -> bool {
        self.server.read().is_some()
    }

    /// Route one event. Handlers are cloned out of their slots before being
    /// called so a handler may log (or swap handlers) without deadlocking.
    pub fn dispatch(
        &self,
        event: &Event,
        context: &RecordContext,
        local_enabled: bool,
        server_enabled: bool,
    ) {
        if local_enabled {
            let local = self.local.read().clone();
            if let Some(handler) = local {
                handler.handle(event, context);
            }
        }

        if server_enabled {
            let server = self.server.read().clone();
            if let Some(handler) = server {
                let url = self.server_url();
                handler.handle(event, context, url.as_deref());
            }
        }
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("local", &self.has_handler())
            .field("server", &self.has_server_handler())
            .field("server_url", &self.server_url())
            .finish()
    }
}
