//! The network seam: one JSON POST, resolved to a typed outcome.

use serde_json::Value;
use tracing::debug;

/// How a single call resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The server answered with a JSON body, whatever the status.
    Responded { status: u16, body: Value },

    /// The call could not complete, or the body was not JSON.
    TransportFailure { description: String },
}

/// Issues a JSON POST and reports how it resolved.
///
/// Implementations never fail: every error is folded into
/// [`Outcome::TransportFailure`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: &Value) -> Outcome;
}

/// [`Transport`] backed by a `reqwest` client with its default timeouts.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Outcome {
        // `.json()` sets `Content-Type: application/json`.
        let response = match self.client.post(url).json(body).send().await {
            Ok(response) => response,
            Err(e) => {
                return Outcome::TransportFailure {
                    description: e.to_string(),
                };
            }
        };

        let status = response.status().as_u16();
        debug!(url, status, "response received");

        match response.json::<Value>().await {
            Ok(body) => Outcome::Responded { status, body },
            Err(e) => Outcome::TransportFailure {
                description: e.to_string(),
            },
        }
    }
}
