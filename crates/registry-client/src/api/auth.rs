use registry_core::{Endpoint, SessionId};
use registry_shared::{LoginRequest, LoginResponse};

use crate::client::Gateway;
use crate::error::{ClientError, ClientResult};

/// Login and logout.
pub struct AuthApi<'a> {
    gateway: &'a Gateway,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// POST `auth/login`. On success the returned session id becomes the
    /// current session; on failure the stored session is left untouched.
    pub async fn login(&self, credentials: &LoginRequest) -> ClientResult<LoginResponse> {
        let response: LoginResponse = self
            .gateway
            .submit(Endpoint::Login, credentials)
            .await?;

        self.gateway
            .sessions()
            .set(&SessionId::new(response.session_id.as_str()))
            .await?;
        tracing::info!(login = %credentials.login, "Session established");

        Ok(response)
    }

    /// GET `auth/logout/{sessionId}`, then forget the local session.
    pub async fn logout(&self) -> ClientResult<()> {
        let session = self.gateway.session().await?.ok_or(ClientError::NoSession)?;

        self.gateway.execute(Endpoint::Logout(session), None).await?;
        self.gateway.sessions().clear().await?;
        tracing::info!("Session closed");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Harness;
    use registry_core::ports::{SESSION_HEADER, TransportError};
    use serde_json::json;

    #[tokio::test]
    async fn test_login_stores_returned_session() {
        let h = Harness::new();
        h.transport.respond(200, r#"{"sessionId":"s-42","login":"admin"}"#);

        let response = h
            .client
            .auth()
            .login(&LoginRequest::new("admin", "secret"))
            .await
            .unwrap();

        assert_eq!(response.session_id, "s-42");
        assert_eq!(h.stored_session().await.as_deref(), Some("s-42"));

        let request = h.transport.last();
        assert_eq!(h.last_path(), "auth/login");
        assert_eq!(request.method.as_str(), "POST");
        assert_eq!(request.body, Some(json!({"login": "admin", "password": "secret"})));
    }

    #[tokio::test]
    async fn test_subsequent_calls_use_new_session() {
        let h = Harness::new();
        h.transport.respond(200, r#"{"sessionId":"s-42"}"#);
        h.transport.respond(200, "7");

        h.client
            .auth()
            .login(&LoginRequest::new("admin", "secret"))
            .await
            .unwrap();
        h.client.projects().count().await.unwrap();

        assert_eq!(h.transport.last().header(SESSION_HEADER), Some("s-42"));
    }

    #[tokio::test]
    async fn test_failed_login_keeps_previous_session() {
        let h = Harness::with_session("old");
        h.transport.respond(401, r#"{"status":401,"error":"Unauthorized"}"#);
        h.transport.fail(TransportError::Timeout);
        h.transport.respond(200, r#"{"unexpected":true}"#);

        let auth = h.client.auth();
        let request = LoginRequest::new("admin", "wrong");
        assert!(auth.login(&request).await.unwrap_err().is_unauthorized());
        assert!(matches!(
            auth.login(&request).await,
            Err(ClientError::Transport(_))
        ));
        assert!(matches!(auth.login(&request).await, Err(ClientError::Decode(_))));

        assert_eq!(h.stored_session().await.as_deref(), Some("old"));
    }

    #[tokio::test]
    async fn test_logout_sends_session_in_path_and_clears_it() {
        let h = Harness::with_session("s-1");
        h.transport.respond(200, "");

        h.client.auth().logout().await.unwrap();

        assert_eq!(h.last_path(), "auth/logout/s-1");
        assert_eq!(h.transport.last().method.as_str(), "GET");
        assert_eq!(h.stored_session().await, None);
    }

    #[tokio::test]
    async fn test_failed_logout_keeps_session() {
        let h = Harness::with_session("s-1");
        h.transport.respond(500, "");

        assert!(h.client.auth().logout().await.is_err());
        assert_eq!(h.stored_session().await.as_deref(), Some("s-1"));
    }

    #[tokio::test]
    async fn test_logout_without_session() {
        let h = Harness::new();

        let err = h.client.auth().logout().await.unwrap_err();
        assert!(matches!(err, ClientError::NoSession));
        assert!(h.transport.requests().is_empty());
    }
}
