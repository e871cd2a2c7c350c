//! The client handle and the request pipeline shared by every facade.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use registry_core::ports::{
    ApiRequest, HttpResponse, HttpTransport, SESSION_HEADER, SessionStore,
};
use registry_core::{Endpoint, Endpoints, SessionId};
use registry_shared::ErrorResponse;

use crate::api::{AccountsApi, AuthApi, MessagesApi, ProjectsApi, TasksApi, UsersApi};
use crate::error::{ClientError, ClientResult};

/// How PATCH updates are put on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateShape {
    /// Session in the `sessionId` header, entity as the JSON body.
    #[default]
    Standard,
    /// What the browser client historically sent: no session header and a
    /// body of `{"headers": {"sessionId": ...}}` instead of the entity.
    /// Only for servers that were built around that behavior.
    Legacy,
}

/// Entry point to the registry API.
///
/// Cheap to clone; clones share the transport and the session store.
#[derive(Clone)]
pub struct RegistryClient {
    pub(crate) gateway: Arc<Gateway>,
}

impl RegistryClient {
    pub fn new(
        endpoints: Endpoints,
        transport: Arc<dyn HttpTransport>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            gateway: Arc::new(Gateway {
                endpoints,
                transport,
                sessions,
                update_shape: UpdateShape::Standard,
            }),
        }
    }

    /// Replace the update shape. Applies to this handle and later clones.
    pub fn with_update_shape(self, update_shape: UpdateShape) -> Self {
        let gateway = Gateway {
            endpoints: self.gateway.endpoints.clone(),
            transport: self.gateway.transport.clone(),
            sessions: self.gateway.sessions.clone(),
            update_shape,
        };
        Self {
            gateway: Arc::new(gateway),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.gateway.endpoints
    }

    pub fn update_shape(&self) -> UpdateShape {
        self.gateway.update_shape
    }

    /// The session currently attached to requests.
    pub async fn session(&self) -> ClientResult<Option<SessionId>> {
        self.gateway.session().await
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(&self.gateway)
    }

    pub fn accounts(&self) -> AccountsApi<'_> {
        AccountsApi::new(&self.gateway)
    }

    pub fn projects(&self) -> ProjectsApi<'_> {
        ProjectsApi::new(&self.gateway)
    }

    pub fn tasks(&self) -> TasksApi<'_> {
        TasksApi::new(&self.gateway)
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(&self.gateway)
    }

    pub fn messages(&self) -> MessagesApi<'_> {
        MessagesApi::new(&self.gateway)
    }
}

/// Builds, sends and unwraps requests for the facades.
pub(crate) struct Gateway {
    endpoints: Endpoints,
    transport: Arc<dyn HttpTransport>,
    sessions: Arc<dyn SessionStore>,
    update_shape: UpdateShape,
}

impl Gateway {
    pub(crate) async fn session(&self) -> ClientResult<Option<SessionId>> {
        Ok(self.sessions.get().await?)
    }

    pub(crate) fn sessions(&self) -> &dyn SessionStore {
        self.sessions.as_ref()
    }

    /// Send one request. The session header is attached when a session
    /// exists; without one the server decides.
    pub(crate) async fn execute(
        &self,
        endpoint: Endpoint,
        body: Option<Value>,
    ) -> ClientResult<HttpResponse> {
        let mut request = ApiRequest::new(endpoint.method(), self.endpoints.url(&endpoint)?);
        if let Some(session) = self.session().await? {
            request = request.with_header(SESSION_HEADER, session.as_str());
        }
        if let Some(body) = body {
            request = request.with_json(body);
        }
        self.dispatch(&endpoint, request).await
    }

    /// Call whose reply only acknowledges or refuses.
    pub(crate) async fn command(&self, endpoint: Endpoint) -> ClientResult<()> {
        let route = endpoint.route();
        let response = self.execute(endpoint, None).await?;
        acknowledge(&response, route)
    }

    /// [`command`](Self::command) with a JSON body.
    pub(crate) async fn command_with<B: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        body: &B,
    ) -> ClientResult<()> {
        let route = endpoint.route();
        let response = self.execute(endpoint, Some(encode(body)?)).await?;
        acknowledge(&response, route)
    }

    /// PATCH following the configured [`UpdateShape`].
    pub(crate) async fn update<B: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        entity: &B,
    ) -> ClientResult<()> {
        match self.update_shape {
            UpdateShape::Standard => self.command_with(endpoint, entity).await,
            UpdateShape::Legacy => {
                let route = endpoint.route();
                let session = self.session().await?;
                let body = json!({ "headers": { SESSION_HEADER: session } });
                let request = ApiRequest::new(endpoint.method(), self.endpoints.url(&endpoint)?)
                    .with_json(body);
                let response = self.dispatch(&endpoint, request).await?;
                acknowledge(&response, route)
            }
        }
    }

    /// GET-style call decoding the whole payload.
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint) -> ClientResult<T> {
        let response = self.execute(endpoint, None).await?;
        decode(&response)
    }

    /// Call with a JSON body, decoding the payload.
    pub(crate) async fn submit<B, T>(&self, endpoint: Endpoint, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(endpoint, Some(encode(body)?)).await?;
        decode(&response)
    }

    /// POST a new entity. The server's echo is returned when it sends one.
    pub(crate) async fn create<B, T>(&self, endpoint: Endpoint, body: &B) -> ClientResult<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(endpoint, Some(encode(body)?)).await?;
        decode_echo(&response)
    }

    async fn dispatch(&self, endpoint: &Endpoint, request: ApiRequest) -> ClientResult<HttpResponse> {
        let method = request.method.as_str();
        let route = endpoint.route();
        tracing::debug!(method, route, "Sending registry request");

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(method, route, error = %e, "Registry request failed");
                return Err(e.into());
            }
        };

        tracing::debug!(method, route, status = response.status, "Registry response");

        if !response.is_success() {
            let body = ErrorResponse::from_body(&response.body);
            let detail = match &body {
                Some(error) => error.to_string(),
                None => snippet(&response.text()),
            };
            tracing::warn!(method, route, status = response.status, %detail, "Registry rejected request");
            return Err(ClientError::Status {
                status: response.status,
                detail,
                body,
            });
        }

        Ok(response)
    }
}

/// Treat a literal `false` body as a refusal; anything else acknowledges.
fn acknowledge(response: &HttpResponse, route: &'static str) -> ClientResult<()> {
    match serde_json::from_slice::<Value>(&response.body) {
        Ok(Value::Bool(false)) => Err(ClientError::Rejected(route)),
        _ => Ok(()),
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> ClientResult<Value> {
    serde_json::to_value(body).map_err(|e| ClientError::InvalidArgument(e.to_string()))
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> ClientResult<T> {
    serde_json::from_slice(&response.body).map_err(|e| ClientError::Decode(e.to_string()))
}

fn decode_echo<T: DeserializeOwned>(response: &HttpResponse) -> ClientResult<Option<T>> {
    if response.is_empty() {
        return Ok(None);
    }
    match serde_json::from_slice::<Value>(&response.body) {
        Ok(value @ Value::Object(_)) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| ClientError::Decode(e.to_string())),
        Ok(_) => Ok(None),
        Err(e) => Err(ClientError::Decode(e.to_string())),
    }
}

fn snippet(text: &str) -> String {
    const LIMIT: usize = 200;
    let trimmed = text.trim();
    match trimmed.char_indices().nth(LIMIT) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None if trimmed.is_empty() => "empty body".to_string(),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Harness, MockTransport};
    use registry_core::ports::TransportError;
    use registry_shared::Project;

    #[tokio::test]
    async fn test_session_header_attached_when_present() {
        let h = Harness::with_session("abc");
        h.transport.respond(200, "3");

        let count: u64 = h.gateway().fetch(Endpoint::CountProjects).await.unwrap();

        assert_eq!(count, 3);
        assert_eq!(h.transport.last().header(SESSION_HEADER), Some("abc"));
    }

    #[tokio::test]
    async fn test_no_header_without_session() {
        let h = Harness::new();
        h.transport.respond(200, "0");

        let _: u64 = h.gateway().fetch(Endpoint::CountUsers).await.unwrap();
        assert_eq!(h.transport.last().header(SESSION_HEADER), None);
    }

    #[tokio::test]
    async fn test_error_status_carries_server_body() {
        let h = Harness::with_session("abc");
        h.transport.respond(
            403,
            r#"{"status":403,"error":"Forbidden","message":"Bad session"}"#,
        );

        let err = h
            .gateway()
            .fetch::<u64>(Endpoint::CountTasks)
            .await
            .unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Server responded 403: 403 Forbidden: Bad session");
    }

    #[tokio::test]
    async fn test_non_json_error_body_is_truncated() {
        let h = Harness::new();
        h.transport.respond(502, "x".repeat(500));

        let err = h.gateway().fetch::<u64>(Endpoint::CountTasks).await.unwrap_err();
        match err {
            ClientError::Status { status, detail, body } => {
                assert_eq!(status, 502);
                assert_eq!(detail.len(), 203);
                assert!(body.is_none());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_transport_failure_surfaces() {
        let h = Harness::new();
        h.transport.fail(TransportError::Connection("refused".into()));

        let err = h.gateway().fetch::<u64>(Endpoint::CountTasks).await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(TransportError::Connection(_))));
    }

    #[tokio::test]
    async fn test_malformed_payload_is_decode_error() {
        let h = Harness::new();
        h.transport.respond(200, "{not json");

        let err = h.gateway().fetch::<u64>(Endpoint::CountTasks).await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn test_create_echo_handling() {
        let h = Harness::new();
        h.transport.respond(200, "");
        h.transport.respond(200, "true");
        h.transport.respond(201, r#"{"id":9,"name":"Registry"}"#);

        let gateway = h.gateway();
        let body = Project::default();
        let empty: Option<Project> = gateway.create(Endpoint::CreateProject, &body).await.unwrap();
        let flag: Option<Project> = gateway.create(Endpoint::CreateProject, &body).await.unwrap();
        let echo: Option<Project> = gateway.create(Endpoint::CreateProject, &body).await.unwrap();

        assert!(empty.is_none());
        assert!(flag.is_none());
        assert_eq!(echo.unwrap().id, Some(9));
    }

    #[test]
    fn test_acknowledge() {
        assert!(acknowledge(&HttpResponse::new(200, "true"), "r").is_ok());
        assert!(acknowledge(&HttpResponse::new(200, ""), "r").is_ok());
        assert!(matches!(
            acknowledge(&HttpResponse::new(200, "false"), "r"),
            Err(ClientError::Rejected("r"))
        ));
    }

    #[test]
    fn test_update_shape_is_copied_to_new_handle() {
        let transport = std::sync::Arc::new(MockTransport::new());
        let client = Harness::client_with(transport, None).with_update_shape(UpdateShape::Legacy);
        assert_eq!(client.update_shape(), UpdateShape::Legacy);
        assert_eq!(client.clone().update_shape(), UpdateShape::Legacy);
    }
}
