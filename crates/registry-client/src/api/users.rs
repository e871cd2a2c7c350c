use registry_core::{Endpoint, PageRequest};
use registry_shared::{Page, User};

use crate::client::Gateway;
use crate::error::ClientResult;

/// Read-only user queries. Creation lives in [`AccountsApi`](super::AccountsApi).
pub struct UsersApi<'a> {
    gateway: &'a Gateway,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> ClientResult<Vec<User>> {
        self.gateway.fetch(Endpoint::UsersAll).await
    }

    pub async fn page(&self, page: PageRequest) -> ClientResult<Page<User>> {
        self.gateway.fetch(Endpoint::UsersPage(page)).await
    }

    pub async fn count(&self) -> ClientResult<u64> {
        self.gateway.fetch(Endpoint::CountUsers).await
    }
}
