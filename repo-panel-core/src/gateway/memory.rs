//! In-process gateway
//!
//! Keeps the whole backend state in memory. Used for the offline demo mode and as
//! the test double for services and the TUI. Observable behaviour follows the real
//! backend: a new repository is named after its path, project keys match
//! case-insensitively, an unknown key on re-link unlinks the repository, delete and
//! re-link of an unknown id are no-ops, and projects / profile / avatars are only
//! served while logged in.
//!
//! Every operation can be made to fail through [`InMemoryGateway::fail`], and every
//! call is counted (failed calls included).

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::traits::{Gateway, Operation};
use crate::types::{
    Commit, Credentials, NewRepository, Profile, Project, Repository, RepositoryId,
    SaveCredentialsOutcome,
};
use crate::utils::server_url::normalize_server_url;

/// Rejection shown when a required credential field is blank
pub const MSG_FIELDS_REQUIRED: &str = "All fields are required";
/// Rejection shown when the login does not match the accepted one
pub const MSG_INVALID_LOGIN: &str = "Invalid username or password/API token";

#[derive(Debug, Default)]
struct MemoryState {
    repositories: Vec<Repository>,
    next_id: RepositoryId,
    projects: Vec<Project>,
    credentials: Option<Credentials>,
    profile: Profile,
    accepted_login: Option<(String, String)>,
    commits: HashMap<RepositoryId, Vec<Commit>>,
    merge_candidates: HashMap<RepositoryId, Vec<Commit>>,
}

impl MemoryState {
    /// Projects are only visible with a complete credential set
    fn authorized(&self) -> bool {
        self.credentials
            .as_ref()
            .is_some_and(|c| c.is_logged_in() && !c.password.is_empty())
    }

    fn find_project(&self, key: &str) -> Option<&Project> {
        if key.is_empty() || !self.authorized() {
            return None;
        }
        self.projects.iter().find(|p| p.matches_key(key))
    }

    fn history(&self, id: RepositoryId, merge: bool) -> CoreResult<Vec<Commit>> {
        if !self.repositories.iter().any(|r| r.id == id) {
            return Err(CoreError::RepositoryNotFound(id));
        }
        let source = if merge {
            &self.merge_candidates
        } else {
            &self.commits
        };
        Ok(source.get(&id).cloned().unwrap_or_default())
    }
}

/// In-memory backend
#[derive(Debug)]
pub struct InMemoryGateway {
    state: RwLock<MemoryState>,
    failures: RwLock<HashMap<Operation, CoreError>>,
    calls: RwLock<HashMap<Operation, usize>>,
}

impl Default for InMemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryGateway {
    /// Empty backend: no repositories, no projects, not logged in
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                next_id: 1,
                ..MemoryState::default()
            }),
            failures: RwLock::new(HashMap::new()),
            calls: RwLock::new(HashMap::new()),
        }
    }

    // ===== builder =====

    #[must_use]
    pub fn with_repositories(mut self, repositories: Vec<Repository>) -> Self {
        let state = self.state.get_mut();
        state.next_id = repositories.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        state.repositories = repositories;
        self
    }

    #[must_use]
    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.state.get_mut().projects = projects;
        self
    }

    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.state.get_mut().credentials = Some(credentials);
        self
    }

    #[must_use]
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.state.get_mut().profile = profile;
        self
    }

    /// Only this username/password pair is accepted by `save_credentials`
    #[must_use]
    pub fn with_accepted_login(mut self, username: &str, password: &str) -> Self {
        self.state.get_mut().accepted_login = Some((username.to_string(), password.to_string()));
        self
    }

    #[must_use]
    pub fn with_history(
        mut self,
        id: RepositoryId,
        commits: Vec<Commit>,
        merge_candidates: Vec<Commit>,
    ) -> Self {
        let state = self.state.get_mut();
        state.commits.insert(id, commits);
        state.merge_candidates.insert(id, merge_candidates);
        self
    }

    // ===== fault injection & inspection =====

    /// Makes every subsequent call of `operation` fail with `error`
    pub async fn fail(&self, operation: Operation, error: CoreError) {
        self.failures.write().await.insert(operation, error);
    }

    /// Removes an injected failure
    pub async fn recover(&self, operation: Operation) {
        self.failures.write().await.remove(&operation);
    }

    /// Number of calls made to `operation` so far
    pub async fn calls(&self, operation: Operation) -> usize {
        self.calls.read().await.get(&operation).copied().unwrap_or(0)
    }

    /// Snapshot of the stored repositories
    pub async fn repositories(&self) -> Vec<Repository> {
        self.state.read().await.repositories.clone()
    }

    /// Snapshot of the stored credentials
    pub async fn credentials(&self) -> Option<Credentials> {
        self.state.read().await.credentials.clone()
    }

    async fn enter(&self, operation: Operation) -> CoreResult<()> {
        *self.calls.write().await.entry(operation).or_insert(0) += 1;
        match self.failures.read().await.get(&operation) {
            Some(err) => {
                log::debug!("[memory] {operation} failing with injected error: {err}");
                Err(err.clone())
            }
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Gateway for InMemoryGateway {
    async fn list_repositories(&self) -> CoreResult<Vec<Repository>> {
        self.enter(Operation::ListRepositories).await?;
        Ok(self.state.read().await.repositories.clone())
    }

    async fn add_repository(&self, request: &NewRepository) -> CoreResult<()> {
        self.enter(Operation::AddRepository).await?;
        request.validate()?;

        let mut state = self.state.write().await;
        let project = state.find_project(&request.project_key).cloned();
        let id = state.next_id;
        state.next_id += 1;
        state.repositories.push(Repository {
            id,
            // the backend stores the path as the local name
            name: request.path.clone(),
            path: request.path.clone(),
            jira_key: project.as_ref().map(|p| p.key.clone()),
            jira_name: project.as_ref().map(|p| p.name.clone()),
            jira_avatar: project.and_then(|p| p.avatar_url),
        });
        log::info!("[memory] repository {id} added: {}", request.path);
        Ok(())
    }

    async fn delete_repository(&self, id: RepositoryId) -> CoreResult<()> {
        self.enter(Operation::DeleteRepository).await?;
        // deleting an unknown id is a no-op
        let mut state = self.state.write().await;
        state.repositories.retain(|r| r.id != id);
        state.commits.remove(&id);
        state.merge_candidates.remove(&id);
        Ok(())
    }

    async fn update_repository_project(
        &self,
        id: RepositoryId,
        project_key: &str,
    ) -> CoreResult<()> {
        self.enter(Operation::UpdateRepositoryProject).await?;
        let mut state = self.state.write().await;
        let project = state.find_project(project_key).cloned();
        let Some(repo) = state.repositories.iter_mut().find(|r| r.id == id) else {
            return Ok(());
        };

        // unknown key unlinks the repository
        repo.jira_key = project.as_ref().map(|p| p.key.clone());
        repo.jira_name = project.as_ref().map(|p| p.name.clone());
        repo.jira_avatar = project.and_then(|p| p.avatar_url);
        Ok(())
    }

    async fn project_avatar(&self, project_key: &str) -> CoreResult<Option<String>> {
        self.enter(Operation::ProjectAvatar).await?;
        let state = self.state.read().await;
        Ok(state
            .find_project(project_key)
            .and_then(|p| p.avatar_url.clone()))
    }

    async fn list_projects(&self) -> CoreResult<Vec<Project>> {
        self.enter(Operation::ListProjects).await?;
        let state = self.state.read().await;
        if state.authorized() {
            Ok(state.projects.clone())
        } else {
            Ok(Vec::new())
        }
    }

    async fn get_credentials(&self) -> CoreResult<Option<Credentials>> {
        self.enter(Operation::GetCredentials).await?;
        Ok(self.state.read().await.credentials.clone())
    }

    async fn save_credentials(
        &self,
        credentials: &Credentials,
    ) -> CoreResult<SaveCredentialsOutcome> {
        self.enter(Operation::SaveCredentials).await?;
        if credentials.validate().is_err() {
            return Ok(SaveCredentialsOutcome::Rejected(
                MSG_FIELDS_REQUIRED.to_string(),
            ));
        }
        let server = match normalize_server_url(&credentials.server) {
            Ok(server) => server,
            Err(e) => return Ok(SaveCredentialsOutcome::Rejected(e.to_string())),
        };

        let mut state = self.state.write().await;
        if let Some((username, password)) = &state.accepted_login {
            if *username != credentials.username || *password != credentials.password {
                return Ok(SaveCredentialsOutcome::Rejected(
                    MSG_INVALID_LOGIN.to_string(),
                ));
            }
        }

        state.credentials = Some(Credentials {
            server,
            username: credentials.username.clone(),
            password: credentials.password.clone(),
        });
        Ok(SaveCredentialsOutcome::Accepted)
    }

    async fn delete_credentials(&self) -> CoreResult<()> {
        self.enter(Operation::DeleteCredentials).await?;
        self.state.write().await.credentials = None;
        Ok(())
    }

    async fn get_profile(&self) -> CoreResult<Option<Profile>> {
        self.enter(Operation::GetProfile).await?;
        let state = self.state.read().await;
        Ok(state.authorized().then(|| state.profile.clone()))
    }

    async fn list_commits(&self, id: RepositoryId) -> CoreResult<Vec<Commit>> {
        self.enter(Operation::ListCommits).await?;
        self.state.read().await.history(id, false)
    }

    async fn list_merge_candidates(&self, id: RepositoryId) -> CoreResult<Vec<Commit>> {
        self.enter(Operation::ListMergeCandidates).await?;
        self.state.read().await.history(id, true)
    }
}

// ===== demo data =====

impl InMemoryGateway {
    /// Seeded backend for offline mode
    ///
    /// Login with any server, username `demo` and password `demo`.
    pub fn demo() -> Self {
        let projects = vec![
            demo_project("CORE", "Core Platform"),
            demo_project("WEB", "Web Storefront"),
            demo_project("OPS", "Operations"),
        ];
        let repositories = vec![
            Repository {
                id: 1,
                name: "/srv/git/platform-api".to_string(),
                path: "/srv/git/platform-api".to_string(),
                jira_key: Some("CORE".to_string()),
                jira_name: Some("Core Platform".to_string()),
                jira_avatar: None,
            },
            Repository {
                id: 2,
                name: "/srv/git/storefront".to_string(),
                path: "/srv/git/storefront".to_string(),
                jira_key: Some("WEB".to_string()),
                jira_name: Some("Web Storefront".to_string()),
                jira_avatar: None,
            },
            Repository {
                id: 3,
                name: "/home/dev/scratch".to_string(),
                path: "/home/dev/scratch".to_string(),
                jira_key: None,
                jira_name: None,
                jira_avatar: None,
            },
        ];

        Self::new()
            .with_projects(projects)
            .with_repositories(repositories)
            .with_profile(Profile {
                display_name: Some("Demo User".to_string()),
                avatar_url: None,
            })
            .with_accepted_login("demo", "demo")
            .with_history(
                1,
                vec![
                    demo_commit("9f2c1e7a4b", "a.petrova", "2024-05-14T09:12:00Z", "CORE-42 Retry webhook delivery"),
                    demo_commit("4d8e0b1c77", "i.sidorov", "2024-05-13T17:40:00Z", "CORE-40 Add audit log table"),
                    demo_commit("1a0f9c3e52", "a.petrova", "2024-05-10T11:05:00Z", "Bump dependencies"),
                ],
                vec![demo_commit("9f2c1e7a4b", "a.petrova", "2024-05-14T09:12:00Z", "CORE-42 Retry webhook delivery")],
            )
            .with_history(
                2,
                vec![demo_commit("c0ffee1234", "m.ivanova", "2024-05-12T08:00:00Z", "WEB-7 Checkout redesign")],
                Vec::new(),
            )
    }
}

fn demo_project(key: &str, name: &str) -> Project {
    Project {
        key: key.to_string(),
        name: name.to_string(),
        avatar_url: Some(format!("https://jira.example.com/secure/projectavatar?key={key}")),
    }
}

fn demo_commit(hash: &str, author: &str, date: &str, message: &str) -> Commit {
    Commit {
        hash: hash.to_string(),
        author: author.to_string(),
        date: date.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in() -> Credentials {
        Credentials::new("https://jira.example.com", "alice", "secret")
    }

    fn project(key: &str) -> Project {
        Project {
            key: key.to_string(),
            name: format!("{key} project"),
            avatar_url: Some(format!("https://img/{key}")),
        }
    }

    #[tokio::test]
    async fn add_links_project_case_insensitively() {
        let gateway = InMemoryGateway::new()
            .with_projects(vec![project("CORE")])
            .with_credentials(logged_in());

        gateway
            .add_repository(&NewRepository::new("/src/api", "core"))
            .await
            .unwrap();

        let repos = gateway.list_repositories().await.unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].id, 1);
        assert_eq!(repos[0].name, "/src/api");
        assert_eq!(repos[0].jira_key.as_deref(), Some("CORE"));
        assert_eq!(repos[0].jira_avatar.as_deref(), Some("https://img/CORE"));
    }

    #[tokio::test]
    async fn projects_hidden_when_logged_out() {
        let gateway = InMemoryGateway::new().with_projects(vec![project("CORE")]);
        assert!(gateway.list_projects().await.unwrap().is_empty());
        assert_eq!(gateway.project_avatar("CORE").await.unwrap(), None);
        assert_eq!(gateway.get_profile().await.unwrap(), None);
    }

    #[tokio::test]
    async fn unknown_key_on_update_unlinks() {
        let gateway = InMemoryGateway::new()
            .with_projects(vec![project("CORE")])
            .with_credentials(logged_in());
        gateway
            .add_repository(&NewRepository::new("/src/api", "CORE"))
            .await
            .unwrap();

        gateway.update_repository_project(1, "NOPE").await.unwrap();

        let repo = &gateway.repositories().await[0];
        assert!(!repo.is_linked());
        assert_eq!(repo.jira_name, None);
    }

    #[tokio::test]
    async fn mutations_of_unknown_repository_are_no_ops() {
        let gateway = InMemoryGateway::demo();
        let before = gateway.repositories().await;

        assert_eq!(gateway.delete_repository(99).await, Ok(()));
        assert_eq!(gateway.update_repository_project(99, "CORE").await, Ok(()));
        assert_eq!(gateway.repositories().await, before);

        gateway.delete_repository(1).await.unwrap();
        assert_eq!(gateway.repositories().await.len(), before.len() - 1);
        assert_eq!(gateway.delete_repository(1).await, Ok(()));
    }

    #[tokio::test]
    async fn save_credentials_normalizes_server() {
        let gateway = InMemoryGateway::new();
        let outcome = gateway
            .save_credentials(&Credentials::new("jira.example.com/", "alice", "pw"))
            .await
            .unwrap();
        assert_eq!(outcome, SaveCredentialsOutcome::Accepted);
        assert_eq!(
            gateway.credentials().await.unwrap().server,
            "https://jira.example.com"
        );
    }

    #[tokio::test]
    async fn save_credentials_rejects_wrong_login() {
        let gateway = InMemoryGateway::new().with_accepted_login("demo", "demo");
        let outcome = gateway
            .save_credentials(&Credentials::new("jira", "demo", "wrong"))
            .await
            .unwrap();
        assert_eq!(
            outcome,
            SaveCredentialsOutcome::Rejected(MSG_INVALID_LOGIN.to_string())
        );
        assert_eq!(gateway.credentials().await, None);
    }

    #[tokio::test]
    async fn injected_failure_is_counted_and_recoverable() {
        let gateway = InMemoryGateway::new();
        gateway
            .fail(
                Operation::ListRepositories,
                CoreError::NetworkError("down".into()),
            )
            .await;

        assert!(gateway.list_repositories().await.is_err());
        gateway.recover(Operation::ListRepositories).await;
        assert!(gateway.list_repositories().await.is_ok());
        assert_eq!(gateway.calls(Operation::ListRepositories).await, 2);
    }

    #[tokio::test]
    async fn history_of_unknown_repository_is_not_found() {
        let gateway = InMemoryGateway::demo();
        assert_eq!(gateway.list_commits(1).await.unwrap().len(), 3);
        assert_eq!(gateway.list_merge_candidates(3).await.unwrap(), Vec::new());
        assert_eq!(
            gateway.list_commits(99).await,
            Err(CoreError::RepositoryNotFound(99))
        );
    }
}
