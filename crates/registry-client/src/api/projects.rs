use registry_core::{Endpoint, PageRequest, ResourceId};
use registry_shared::{Page, Project};

use crate::client::Gateway;
use crate::error::ClientResult;

/// CRUD over `projects/`.
pub struct ProjectsApi<'a> {
    gateway: &'a Gateway,
}

impl<'a> ProjectsApi<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> ClientResult<Vec<Project>> {
        self.gateway.fetch(Endpoint::ProjectsAll).await
    }

    pub async fn page(&self, page: PageRequest) -> ClientResult<Page<Project>> {
        self.gateway.fetch(Endpoint::ProjectsPage(page)).await
    }

    pub async fn count(&self) -> ClientResult<u64> {
        self.gateway.fetch(Endpoint::CountProjects).await
    }

    /// Returns the stored project when the server echoes it back.
    pub async fn create(&self, project: &Project) -> ClientResult<Option<Project>> {
        self.gateway.create(Endpoint::CreateProject, project).await
    }

    /// Full replace of the project identified by `project.id`.
    pub async fn update(&self, project: &Project) -> ClientResult<()> {
        self.gateway.update(Endpoint::UpdateProject, project).await
    }

    pub async fn delete(&self, id: ResourceId) -> ClientResult<()> {
        self.gateway.command(Endpoint::DeleteProject(id)).await
    }
}
