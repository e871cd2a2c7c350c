use registry_core::Endpoint;
use registry_shared::{Credentials, NewUser};

use crate::client::Gateway;
use crate::error::ClientResult;

/// User registration: the user record and its login credentials are two
/// separate server calls.
pub struct AccountsApi<'a> {
    gateway: &'a Gateway,
}

impl<'a> AccountsApi<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// POST `users/create`.
    pub async fn create_user(&self, user: &NewUser) -> ClientResult<()> {
        self.gateway.command_with(Endpoint::CreateUser, user).await
    }

    /// POST `credentials/create`.
    pub async fn create_credentials(&self, credentials: &Credentials) -> ClientResult<()> {
        self.gateway
            .command_with(Endpoint::CreateCredentials, credentials)
            .await
    }

    /// Create the user, then its credentials. Not atomic: when the second
    /// call fails the user record already exists on the server.
    pub async fn register(&self, user: &NewUser, credentials: &Credentials) -> ClientResult<()> {
        self.create_user(user).await?;
        self.create_credentials(credentials).await?;
        tracing::info!(login = %credentials.login, "Account registered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::test_support::Harness;
    use serde_json::json;

    fn new_user() -> NewUser {
        serde_json::from_value(json!({"name": "Ann", "email": "ann@x.org"})).unwrap()
    }

    #[tokio::test]
    async fn test_register_issues_both_calls_in_order() {
        let h = Harness::with_session("abc");
        h.transport.respond(200, "true");
        h.transport.respond(200, "true");

        h.client
            .accounts()
            .register(&new_user(), &Credentials::new("ann@x.org", "pw"))
            .await
            .unwrap();

        let requests = h.transport.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests[0].url.path().ends_with("/users/create"));
        assert_eq!(requests[0].body, Some(json!({"name": "Ann", "email": "ann@x.org"})));
        assert!(requests[1].url.path().ends_with("/credentials/create"));
        assert_eq!(
            requests[1].body,
            Some(json!({"login": "ann@x.org", "password": "pw"}))
        );
    }

    #[tokio::test]
    async fn test_register_stops_after_failed_user_creation() {
        let h = Harness::new();
        h.transport.respond(409, "");

        let err = h
            .client
            .accounts()
            .register(&new_user(), &Credentials::new("ann@x.org", "pw"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(409));
        assert_eq!(h.transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_false_reply_is_rejection() {
        let h = Harness::new();
        h.transport.respond(200, "false");

        let err = h
            .client
            .accounts()
            .create_credentials(&Credentials::new("ann@x.org", "pw"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Rejected("credentials/create")));
    }
}
