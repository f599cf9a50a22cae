//! Mock transport for testing without API access.
//!
//! Serves canned response bodies and records every request it receives, so
//! tests can assert on exactly what would have gone over the wire.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::error::SouthwestError;
use super::transport::{ApiRequest, Transport};

type Responder = Box<dyn Fn(&ApiRequest) -> String + Send + Sync>;

/// Transport that answers from a closure instead of the network.
pub struct MockTransport {
    responder: Responder,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    /// Answer each request with whatever `responder` returns for it.
    pub fn new(responder: impl Fn(&ApiRequest) -> String + Send + Sync + 'static) -> Self {
        Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answer requests with `bodies` in order, then with empty bodies.
    pub fn sequence<I, S>(bodies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let queue: Mutex<VecDeque<String>> =
            Mutex::new(bodies.into_iter().map(Into::into).collect());
        Self::new(move |_| lock(&queue).pop_front().unwrap_or_default())
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        lock(&self.requests).clone()
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// Requests received with the given logical name.
    pub fn requests_named(&self, name: &str) -> Vec<ApiRequest> {
        lock(&self.requests)
            .iter()
            .filter(|r| r.name == name)
            .cloned()
            .collect()
    }
}

impl Transport for MockTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<String, SouthwestError> {
        lock(&self.requests).push(request.clone());
        Ok((self.responder)(request))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
