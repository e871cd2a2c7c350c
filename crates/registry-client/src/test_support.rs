//! Test doubles for the request pipeline.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use registry_core::ports::{ApiRequest, HttpResponse, HttpTransport, TransportError};
use registry_core::{Endpoints, SessionId};
use registry_infra::InMemorySessionStore;

use crate::client::{Gateway, RegistryClient};

pub(crate) const BASE: &str = "http://registry.test/api/";

/// Records every request and replays queued responses in order.
/// An empty queue answers `200` with an empty body.
#[derive(Default)]
pub(crate) struct MockTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(&self, status: u16, body: impl Into<Vec<u8>>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    pub(crate) fn fail(&self, error: TransportError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse::new(200, Vec::new())))
    }
}

/// A client wired to a [`MockTransport`] and an in-memory session store.
pub(crate) struct Harness {
    pub(crate) client: RegistryClient,
    pub(crate) transport: Arc<MockTransport>,
    pub(crate) sessions: Arc<InMemorySessionStore>,
}

impl Harness {
    pub(crate) fn new() -> Self {
        Self::build(None)
    }

    pub(crate) fn with_session(session: &str) -> Self {
        Self::build(Some(session))
    }

    fn build(session: Option<&str>) -> Self {
        let transport = Arc::new(MockTransport::new());
        let sessions = Arc::new(match session {
            Some(id) => InMemorySessionStore::with_session(SessionId::new(id)),
            None => InMemorySessionStore::new(),
        });
        let client = RegistryClient::new(
            Endpoints::new(BASE).unwrap(),
            transport.clone(),
            sessions.clone(),
        );
        Self {
            client,
            transport,
            sessions,
        }
    }

    pub(crate) fn client_with(transport: Arc<MockTransport>, session: Option<&str>) -> RegistryClient {
        let sessions = match session {
            Some(id) => InMemorySessionStore::with_session(SessionId::new(id)),
            None => InMemorySessionStore::new(),
        };
        RegistryClient::new(Endpoints::new(BASE).unwrap(), transport, Arc::new(sessions))
    }

    pub(crate) fn gateway(&self) -> &Gateway {
        &self.client.gateway
    }

    /// Session currently held by the store, as a plain string.
    pub(crate) async fn stored_session(&self) -> Option<String> {
        use registry_core::ports::SessionStore;

        self.sessions
            .get()
            .await
            .unwrap()
            .map(SessionId::into_inner)
    }

    /// Path of the last request, relative to [`BASE`].
    pub(crate) fn last_path(&self) -> String {
        let url = self.transport.last().url;
        url.as_str().trim_start_matches(BASE).to_string()
    }
}
