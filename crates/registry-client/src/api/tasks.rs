use registry_core::{Endpoint, PageRequest, ResourceId};
use registry_shared::{Page, Task};

use crate::client::Gateway;
use crate::error::ClientResult;

/// CRUD over `tasks/`.
pub struct TasksApi<'a> {
    gateway: &'a Gateway,
}

impl<'a> TasksApi<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> ClientResult<Vec<Task>> {
        self.gateway.fetch(Endpoint::TasksAll).await
    }

    pub async fn page(&self, page: PageRequest) -> ClientResult<Page<Task>> {
        self.gateway.fetch(Endpoint::TasksPage(page)).await
    }

    pub async fn count(&self) -> ClientResult<u64> {
        self.gateway.fetch(Endpoint::CountTasks).await
    }

    pub async fn create(&self, task: &Task) -> ClientResult<Option<Task>> {
        self.gateway.create(Endpoint::CreateTask, task).await
    }

    pub async fn update(&self, task: &Task) -> ClientResult<()> {
        self.gateway.update(Endpoint::UpdateTask, task).await
    }

    pub async fn delete(&self, id: ResourceId) -> ClientResult<()> {
        self.gateway.command(Endpoint::DeleteTask(id)).await
    }
}
