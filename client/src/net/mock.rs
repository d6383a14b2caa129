//! Test transports: a scripted one that replays canned responses in order,
//! and a gated one whose responses the test releases by hand.

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::Value;
use tokio::sync::oneshot;

use super::transport::{Transport, TransportError, TransportResponse};

type Outcome = Result<TransportResponse, TransportError>;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Call {
    Post { path: String, body: Value },
    Get { path: String, params: Vec<(String, String)> },
}

impl Call {
    fn post(path: &str, body: Value) -> Self {
        Self::Post { path: path.to_owned(), body }
    }

    fn get(path: &str, params: &[(&str, &str)]) -> Self {
        Self::Get {
            path: path.to_owned(),
            params: params.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect(),
        }
    }

    pub(crate) fn path(&self) -> &str {
        match self {
            Self::Post { path, .. } | Self::Get { path, .. } => path,
        }
    }
}

pub(crate) fn ok_json(body: &Value) -> Outcome {
    Ok(TransportResponse::new(200, body.to_string()))
}

pub(crate) fn status(code: u16, body: &str) -> Outcome {
    Ok(TransportResponse::new(code, body))
}

pub(crate) fn network_error() -> Outcome {
    Err(TransportError::Request("connection refused".into()))
}

// =============================================================================
// SCRIPTED
// =============================================================================

pub(crate) struct ScriptedTransport {
    responses: Mutex<VecDeque<Outcome>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedTransport {
    pub(crate) fn new(responses: Vec<Outcome>) -> Self {
        Self { responses: Mutex::new(responses.into()), calls: Mutex::new(Vec::new()) }
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("mock mutex should lock").clone()
    }

    fn record(&self, call: Call) -> Outcome {
        self.calls.lock().expect("mock mutex should lock").push(call);
        self.responses
            .lock()
            .expect("mock mutex should lock")
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Request("no scripted response".into())))
    }
}

#[async_trait::async_trait]
impl Transport for ScriptedTransport {
    async fn post_json(&self, path: &str, body: Value) -> Result<TransportResponse, TransportError> {
        self.record(Call::post(path, body))
    }

    async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<TransportResponse, TransportError> {
        self.record(Call::get(path, params))
    }
}

// =============================================================================
// GATED
// =============================================================================

#[derive(Default)]
pub(crate) struct GatedTransport {
    pending: Mutex<Vec<(Call, oneshot::Sender<Outcome>)>>,
}

impl GatedTransport {
    pub(crate) fn pending_paths(&self) -> Vec<String> {
        self.pending
            .lock()
            .expect("mock mutex should lock")
            .iter()
            .map(|(call, _)| call.path().to_owned())
            .collect()
    }

    /// Complete the oldest pending call to `path` with `outcome`.
    pub(crate) fn release(&self, path: &str, outcome: Outcome) -> Call {
        let (call, tx) = {
            let mut pending = self.pending.lock().expect("mock mutex should lock");
            let idx = pending
                .iter()
                .position(|(call, _)| call.path() == path)
                .expect("a pending call for path");
            pending.remove(idx)
        };
        let _ = tx.send(outcome);
        call
    }

    async fn wait(&self, call: Call) -> Outcome {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().expect("mock mutex should lock").push((call, tx));
        rx.await
            .unwrap_or_else(|_| Err(TransportError::Request("gate dropped".into())))
    }
}

#[async_trait::async_trait]
impl Transport for GatedTransport {
    async fn post_json(&self, path: &str, body: Value) -> Result<TransportResponse, TransportError> {
        self.wait(Call::post(path, body)).await
    }

    async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<TransportResponse, TransportError> {
        self.wait(Call::get(path, params)).await
    }
}
