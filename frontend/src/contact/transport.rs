use std::rc::Rc;

use futures::future::{self, Either, FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use thiserror::Error;

use super::form::FormData;
use crate::config::{self, TransportMode};

/// Why a validated submission did not reach the practice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Your message could not be prepared for sending ({0}).")]
    Encode(String),
    #[error("We couldn't reach the server ({0}). Please check your connection and try again.")]
    Network(String),
    #[error("The server could not accept your message (status {0}). Please try again later.")]
    Rejected(u16),
    #[error("The request timed out after {0} ms. Please try again.")]
    TimedOut(u32),
}

/// Delivers a validated form to whatever backend is behind the site.
pub trait Transport {
    fn submit(&self, payload: FormData) -> LocalBoxFuture<'static, Result<(), SubmitError>>;
}

/// Stands in for the backend: waits, then reports success.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay_ms: u32,
}

impl SimulatedTransport {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

impl Transport for SimulatedTransport {
    fn submit(&self, payload: FormData) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let delay_ms = self.delay_ms;
        async move {
            let body = serde_json::to_string(&payload).map_err(|e| SubmitError::Encode(e.to_string()))?;
            TimeoutFuture::new(delay_ms).await;
            // body holds health-adjacent details, log the size only
            info!("Simulated contact submission accepted ({} bytes)", body.len());
            Ok::<(), SubmitError>(())
        }
        .boxed_local()
    }
}

/// POSTs the payload as JSON and gives up after `timeout_ms`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: String,
    timeout_ms: u32,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_ms,
        }
    }
}

impl Transport for HttpTransport {
    fn submit(&self, payload: FormData) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let endpoint = self.endpoint.clone();
        let timeout_ms = self.timeout_ms;
        async move {
            let request = Request::post(&endpoint)
                .json(&payload)
                .map_err(|e| SubmitError::Encode(e.to_string()))?;

            let send = Box::pin(request.send());
            let timeout = Box::pin(TimeoutFuture::new(timeout_ms));

            match future::select(send, timeout).await {
                Either::Left((Ok(response), _)) => {
                    if response.ok() {
                        info!("Contact submission delivered to {}", endpoint);
                        Ok(())
                    } else {
                        warn!("Contact endpoint answered with status {}", response.status());
                        Err(SubmitError::Rejected(response.status()))
                    }
                }
                Either::Left((Err(e), _)) => {
                    warn!("Contact submission failed: {}", e);
                    Err(SubmitError::Network(e.to_string()))
                }
                Either::Right(((), _)) => {
                    warn!("Contact submission timed out after {} ms", timeout_ms);
                    Err(SubmitError::TimedOut(timeout_ms))
                }
            }
        }
        .boxed_local()
    }
}

/// Picks the transport this build was configured for.
pub fn configured_transport() -> Rc<dyn Transport> {
    match config::transport_mode() {
        TransportMode::Simulated => Rc::new(SimulatedTransport::new(config::SIMULATED_DELAY_MS)),
        TransportMode::Http => Rc::new(HttpTransport::new(
            config::contact_endpoint(),
            config::SUBMIT_TIMEOUT_MS,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_errors_read_as_user_facing_messages() {
        assert_eq!(
            SubmitError::Rejected(503).to_string(),
            "The server could not accept your message (status 503). Please try again later."
        );
        assert!(SubmitError::Network("connection refused".to_string())
            .to_string()
            .contains("connection refused"));
        assert_eq!(
            SubmitError::TimedOut(10_000).to_string(),
            "The request timed out after 10000 ms. Please try again."
        );
    }
}
