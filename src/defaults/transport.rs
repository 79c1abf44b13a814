//! Server transport
//!
//! Ships serialized records to the log server. `HttpTransport` queues
//! bodies on a channel drained by a background thread, so the caller never
//! waits on the network.

use super::server::ServerBody;
use crate::constants::TRANSPORT_USER_AGENT;
use crate::error::{Result, SploggerError};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Called with every transport failure
pub type ErrorCallback = Arc<dyn Fn(&SploggerError) + Send + Sync>;

/// Fire-and-forget delivery of a server body
pub trait Transport: Send + Sync {
    fn send(&self, url: &str, body: ServerBody);
}

struct Job {
    url: String,
    body: ServerBody,
}

/// HTTP POST transport backed by a reqwest blocking client
pub struct HttpTransport {
    tx: Mutex<mpsc::Sender<Job>>,
    pending: Arc<AtomicUsize>,
    on_error: Option<ErrorCallback>,
}

impl HttpTransport {
    /// Build the client and start the sender thread
    pub fn new(timeout: Duration, on_error: Option<ErrorCallback>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(TRANSPORT_USER_AGENT)
            .build()
            .map_err(|source| SploggerError::HttpClient { source })?;

        let (tx, rx) = mpsc::channel::<Job>();
        let pending = Arc::new(AtomicUsize::new(0));

        let worker_pending = pending.clone();
        let worker_on_error = on_error.clone();
        thread::spawn(move || {
            run_sender(client, rx, worker_pending, worker_on_error);
        });

        Ok(Self {
            tx: Mutex::new(tx),
            pending,
            on_error,
        })
    }

    /// Bodies queued or in flight
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    /// Wait until every queued body has been attempted, up to `timeout`.
    /// Returns true if the queue drained.
    pub fn flush(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.pending() > 0 {
            if Instant::now() >= deadline {
                return false;
            }
            thread::sleep(Duration::from_millis(10));
        }
        true
    }
}

impl Transport for HttpTransport {
    fn send(&self, url: &str, body: ServerBody) {
        self.pending.fetch_add(1, Ordering::SeqCst);
        let job = Job {
            url: url.to_string(),
            body,
        };
        if self.tx.lock().send(job).is_err() {
            self.pending.fetch_sub(1, Ordering::SeqCst);
            report(self.on_error.as_ref(), SploggerError::TransportClosed);
        }
    }
}

/// Sender loop (blocking, runs in thread)
fn run_sender(
    client: reqwest::blocking::Client,
    rx: mpsc::Receiver<Job>,
    pending: Arc<AtomicUsize>,
    on_error: Option<ErrorCallback>,
) {
    // Process jobs until every sender is dropped
    for job in rx {
        if let Err(e) = post(&client, &job) {
            report(on_error.as_ref(), e);
        }
        pending.fetch_sub(1, Ordering::SeqCst);
    }
}

fn post(client: &reqwest::blocking::Client, job: &Job) -> Result<()> {
    let response = client
        .post(&job.url)
        .json(&job.body)
        .send()
        .map_err(|source| SploggerError::HttpRequest {
            url: job.url.clone(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SploggerError::HttpStatus {
            url: job.url.clone(),
            status: status.as_u16(),
        });
    }

    debug!(url = %job.url, status = status.as_u16(), "Log record delivered");
    Ok(())
}

fn report(on_error: Option<&ErrorCallback>, error: SploggerError) {
    warn!(error = %error, "Log transport failure");
    if let Some(callback) = on_error {
        callback(&error);
    }
}
