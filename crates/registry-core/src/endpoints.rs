//! Endpoint table of the registry backend.
//!
//! Each [`Endpoint`] knows its HTTP verb, its static route (relative to the
//! `/api/` base) and its path parameters. [`Endpoints::url`] joins the three,
//! so no caller ever concatenates strings or counts slashes.

use url::Url;

use crate::domain::{PageRequest, ResourceId, SessionId};
use crate::error::UrlError;

/// Default backend location, matching a locally started registry.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9000/api/";

/// HTTP verbs used by the registry API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// Every operation the backend exposes, with typed path parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    // Auth
    Login,
    Logout(SessionId),

    // Accounts
    CreateUser,
    CreateCredentials,

    // Projects
    ProjectsAll,
    ProjectsPage(PageRequest),
    CountProjects,
    CreateProject,
    UpdateProject,
    DeleteProject(ResourceId),

    // Tasks
    TasksAll,
    TasksPage(PageRequest),
    CountTasks,
    CreateTask,
    UpdateTask,
    DeleteTask(ResourceId),

    // Users
    UsersAll,
    UsersPage(PageRequest),
    CountUsers,

    // Messages
    CreateMessage,
    ReadMessage(ResourceId),
    CountMessages,
    UpdateMessage,
    MarkMessagesRead,
    MessagesForUser(String),
    DeleteMessage(ResourceId),
    DeleteMessagesForUser(String),
}

impl Endpoint {
    pub fn method(&self) -> Method {
        use Endpoint::*;

        match self {
            Login | CreateUser | CreateCredentials | CreateProject | CreateTask
            | CreateMessage => Method::Post,
            UpdateProject | UpdateTask | UpdateMessage | MarkMessagesRead => Method::Patch,
            DeleteProject(_) | DeleteTask(_) | DeleteMessage(_) | DeleteMessagesForUser(_) => {
                Method::Delete
            }
            Logout(_) | ProjectsAll | ProjectsPage(_) | CountProjects | TasksAll | TasksPage(_)
            | CountTasks | UsersAll | UsersPage(_) | CountUsers | ReadMessage(_)
            | CountMessages | MessagesForUser(_) => Method::Get,
        }
    }

    /// Static part of the route. Trailing slashes are kept exactly as the
    /// server maps them.
    pub fn route(&self) -> &'static str {
        use Endpoint::*;

        match self {
            Login => "auth/login",
            Logout(_) => "auth/logout/",

            CreateUser => "users/create",
            CreateCredentials => "credentials/create",

            ProjectsAll => "projects/projects-all",
            ProjectsPage(_) => "projects/watch/",
            CountProjects => "projects/countProjects/",
            CreateProject => "projects/createProject",
            UpdateProject => "projects/update/",
            DeleteProject(_) => "projects/delete/",

            TasksAll => "tasks/tasks-all",
            TasksPage(_) => "tasks/page/",
            CountTasks => "tasks/count/",
            CreateTask => "tasks/create/",
            UpdateTask => "tasks/update/",
            DeleteTask(_) => "tasks/delete/",

            UsersAll => "users/users-all",
            UsersPage(_) => "users/page/",
            CountUsers => "users/count",

            CreateMessage => "messages/create/",
            ReadMessage(_) => "messages/read/",
            CountMessages => "messages/count/",
            UpdateMessage => "messages/update/",
            MarkMessagesRead => "messages/messages-as-read/",
            MessagesForUser(_) => "messages/all-messages-for-user/",
            DeleteMessage(_) => "messages/delete/",
            DeleteMessagesForUser(_) => "messages/delete-all-messages-for-user/",
        }
    }

    /// Path parameters appended after the route, one segment each.
    pub fn params(&self) -> Vec<String> {
        use Endpoint::*;

        match self {
            Logout(session) => vec![session.as_str().to_string()],
            ProjectsPage(page) | TasksPage(page) | UsersPage(page) => {
                vec![page.page.to_string(), page.size.to_string()]
            }
            DeleteProject(id) | DeleteTask(id) | ReadMessage(id) | DeleteMessage(id) => {
                vec![id.to_string()]
            }
            MessagesForUser(email) | DeleteMessagesForUser(email) => vec![email.clone()],
            _ => Vec::new(),
        }
    }
}

/// Typed URL builder rooted at the API base.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    /// Parse the base URL. A missing trailing slash is added so relative
    /// routes resolve under the base instead of replacing its last segment.
    pub fn new(base: &str) -> Result<Self, UrlError> {
        let mut base = Url::parse(base)?;
        if base.cannot_be_a_base() {
            return Err(UrlError::CannotBeABase(base.to_string()));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn url(&self, endpoint: &Endpoint) -> Result<Url, UrlError> {
        let mut url = self.base.join(endpoint.route())?;
        let params = endpoint.params();

        if !params.is_empty() {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| UrlError::CannotBeABase(self.base.to_string()))?;
            segments.pop_if_empty().extend(params.iter());
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> Endpoints {
        Endpoints::new("http://registry.test:9000/api/").unwrap()
    }

    #[test]
    fn test_static_routes_resolve_under_base() {
        let url = endpoints().url(&Endpoint::Login).unwrap();
        assert_eq!(url.as_str(), "http://registry.test:9000/api/auth/login");

        let url = endpoints().url(&Endpoint::UpdateProject).unwrap();
        assert_eq!(url.as_str(), "http://registry.test:9000/api/projects/update/");
    }

    #[test]
    fn test_pagination_substitutes_page_and_size() {
        let url = endpoints()
            .url(&Endpoint::ProjectsPage(PageRequest::new(2, 10)))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://registry.test:9000/api/projects/watch/2/10"
        );

        let url = endpoints()
            .url(&Endpoint::UsersPage(PageRequest::new(0, 25)))
            .unwrap();
        assert_eq!(url.as_str(), "http://registry.test:9000/api/users/page/0/25");
    }

    #[test]
    fn test_delete_appends_id_without_double_slash() {
        let url = endpoints().url(&Endpoint::DeleteProject(42)).unwrap();
        assert_eq!(url.as_str(), "http://registry.test:9000/api/projects/delete/42");

        let url = endpoints().url(&Endpoint::DeleteTask(7)).unwrap();
        assert_eq!(url.as_str(), "http://registry.test:9000/api/tasks/delete/7");
    }

    #[test]
    fn test_base_without_trailing_slash() {
        let endpoints = Endpoints::new("http://registry.test/api").unwrap();
        let url = endpoints.url(&Endpoint::CountUsers).unwrap();
        assert_eq!(url.as_str(), "http://registry.test/api/users/count");
    }

    #[test]
    fn test_logout_carries_session_segment() {
        let url = endpoints()
            .url(&Endpoint::Logout(SessionId::new("s-1")))
            .unwrap();
        assert_eq!(url.as_str(), "http://registry.test:9000/api/auth/logout/s-1");
    }

    #[test]
    fn test_email_is_a_single_encoded_segment() {
        let url = endpoints()
            .url(&Endpoint::MessagesForUser("a b/c@x.org".to_string()))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://registry.test:9000/api/messages/all-messages-for-user/a%20b%2Fc@x.org"
        );
    }

    #[test]
    fn test_methods() {
        assert_eq!(Endpoint::Login.method(), Method::Post);
        assert_eq!(Endpoint::Logout(SessionId::new("x")).method(), Method::Get);
        assert_eq!(Endpoint::UpdateTask.method(), Method::Patch);
        assert_eq!(Endpoint::MarkMessagesRead.method(), Method::Patch);
        assert_eq!(Endpoint::DeleteMessagesForUser(String::new()).method(), Method::Delete);
        assert_eq!(Endpoint::ReadMessage(1).method(), Method::Get);
    }

    #[test]
    fn test_rejects_non_hierarchical_base() {
        assert!(matches!(
            Endpoints::new("mailto:admin@registry.test"),
            Err(UrlError::CannotBeABase(_))
        ));
        assert!(Endpoints::new("not a url").is_err());
    }
}
