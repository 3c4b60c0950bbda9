//! Executes the requests `todo-core` builds.
//!
//! # Design
//! Each `PendingRequest` runs on the tokio blocking pool with a ureq agent,
//! so overlapping requests proceed concurrently and the UI never waits on
//! the network. Finished requests are posted to a crossbeam channel that the
//! event loop drains between frames; the store is only touched there.
//!
//! There is no timeout, no retry and no cancellation. Completions arrive in
//! whatever order the server answers.

use crossbeam_channel::{unbounded, Receiver, Sender};
use tokio::runtime::{Builder, Runtime};
use tracing::trace;

use todo_core::{ApiError, Completion, HttpMethod, HttpRequest, HttpResponse, Outcome, PendingRequest};

use crate::error::{Result, TuiError};

/// A request that has finished, successfully or not.
#[derive(Debug)]
pub struct Completed {
    pub completion: Completion,
    pub outcome: Outcome,
}

pub struct Transport {
    runtime: Runtime,
    agent: ureq::Agent,
    tx: Sender<Completed>,
    rx: Receiver<Completed>,
}

impl Transport {
    pub fn new() -> Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("todo-http")
            .enable_all()
            .build()
            .map_err(|e| TuiError::Runtime(e.to_string()))?;

        // Statuses come back as data; the core decides what is a failure.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();

        let (tx, rx) = unbounded();
        Ok(Self {
            runtime,
            agent,
            tx,
            rx,
        })
    }

    /// Starts executing `pending` and returns immediately.
    pub fn spawn(&self, pending: PendingRequest) {
        let agent = self.agent.clone();
        let tx = self.tx.clone();
        self.runtime.spawn_blocking(move || {
            let outcome = execute(&agent, pending.request);
            // The receiver only goes away on shutdown.
            let _ = tx.send(Completed {
                completion: pending.completion,
                outcome,
            });
        });
    }

    /// Everything that finished since the last call, in arrival order.
    pub fn drain(&self) -> Vec<Completed> {
        self.rx.try_iter().collect()
    }

    /// Stops without waiting for requests still in flight.
    pub fn shutdown(self) {
        self.runtime.shutdown_background();
    }
}

/// Runs one request to completion.
pub fn execute(agent: &ureq::Agent, req: HttpRequest) -> Outcome {
    trace!(method = %req.method, path = %req.path, "sending");

    let result = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    };
    let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| Some((name.to_string(), value.to_str().ok()?.to_string())))
        .collect();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    trace!(status, "received");
    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}
