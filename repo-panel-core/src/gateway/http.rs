//! HTTP gateway
//!
//! Talks to the backend's RPC bridge: every capability is `POST {base}/api/{Method}`
//! with the positional arguments as a JSON array, and the return value as the JSON body.
//!
//! The backend encodes "nothing" loosely (`null` lists, empty-string avatars, empty
//! credential structs, `""` for "accepted"); this module folds those into typed values.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use url::Url;

use crate::error::{CoreError, CoreResult};
use crate::traits::{Gateway, Operation};
use crate::types::{
    Commit, Credentials, NewRepository, Profile, Project, Repository, RepositoryId,
    SaveCredentialsOutcome,
};
use crate::utils::log_sanitizer::{redact_args, truncate_for_log};

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Gateway backed by the remote RPC bridge
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: Url,
}

impl HttpGateway {
    /// Creates a gateway for `base_url` (e.g. `http://127.0.0.1:34115`).
    pub fn new(base_url: &str, timeout: Duration) -> CoreResult<Self> {
        let mut base_url = Url::parse(base_url.trim())
            .map_err(|e| CoreError::InvalidConfig(format!("backend URL: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(CoreError::InvalidConfig(format!(
                "backend URL cannot be a base: {base_url}"
            )));
        }
        // `Url::join` replaces the last segment unless the path ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::InvalidConfig(format!("HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Base URL (always ends with '/')
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, operation: Operation) -> CoreResult<Url> {
        self.base_url
            .join(&format!("api/{}", operation.method_name()))
            .map_err(|e| CoreError::InvalidConfig(format!("endpoint {operation}: {e}")))
    }

    /// Performs one RPC call and returns the raw response text
    async fn execute(&self, operation: Operation, args: &Value) -> CoreResult<String> {
        let method = operation.method_name();
        let url = self.endpoint(operation)?;
        log::debug!("[gateway] POST {url} {}", redact_args(method, args));

        let response = self
            .client
            .post(url)
            .json(args)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CoreError::Timeout(method.to_string())
                } else {
                    CoreError::NetworkError(format!("{method}: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CoreError::NetworkError(format!("{method}: failed to read body: {e}")))?;

        log::debug!(
            "[gateway] {method} -> {}: {}",
            status.as_u16(),
            truncate_for_log(&body)
        );

        if !status.is_success() {
            let message = match body.trim() {
                "" => status.canonical_reason().unwrap_or("unknown").to_string(),
                text => text.to_string(),
            };
            return Err(CoreError::Backend {
                operation: method.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        Ok(body)
    }

    /// Performs one RPC call and decodes the JSON body (empty body decodes as `null`)
    async fn call<T>(&self, operation: Operation, args: Value) -> CoreResult<T>
    where
        T: DeserializeOwned,
    {
        let body = self.execute(operation, &args).await?;
        let text = if body.trim().is_empty() { "null" } else { &body };
        serde_json::from_str(text).map_err(|e| {
            log::error!(
                "[gateway] {operation} JSON parse failed: {e}; raw: {}",
                truncate_for_log(text)
            );
            CoreError::ParseError {
                operation: operation.method_name().to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Performs one RPC call whose result is ignored
    async fn call_void(&self, operation: Operation, args: Value) -> CoreResult<()> {
        self.execute(operation, &args).await.map(|_| ())
    }

    /// Lists decode `null` as an empty sequence
    async fn call_list<T>(&self, operation: Operation, args: Value) -> CoreResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let items: Option<Vec<T>> = self.call(operation, args).await?;
        Ok(items.unwrap_or_default())
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn list_repositories(&self) -> CoreResult<Vec<Repository>> {
        self.call_list(Operation::ListRepositories, json!([])).await
    }

    async fn add_repository(&self, request: &NewRepository) -> CoreResult<()> {
        self.call_void(
            Operation::AddRepository,
            json!([request.path, request.project_key]),
        )
        .await
    }

    async fn delete_repository(&self, id: RepositoryId) -> CoreResult<()> {
        self.call_void(Operation::DeleteRepository, json!([id])).await
    }

    async fn update_repository_project(
        &self,
        id: RepositoryId,
        project_key: &str,
    ) -> CoreResult<()> {
        self.call_void(Operation::UpdateRepositoryProject, json!([id, project_key]))
            .await
    }

    async fn project_avatar(&self, project_key: &str) -> CoreResult<Option<String>> {
        let image: Option<String> = self
            .call(Operation::ProjectAvatar, json!([project_key]))
            .await?;
        Ok(image.filter(|s| !s.trim().is_empty()))
    }

    async fn list_projects(&self) -> CoreResult<Vec<Project>> {
        self.call_list(Operation::ListProjects, json!([])).await
    }

    async fn get_credentials(&self) -> CoreResult<Option<Credentials>> {
        let creds: Option<Credentials> = self.call(Operation::GetCredentials, json!([])).await?;
        Ok(creds.filter(|c| *c != Credentials::default()))
    }

    async fn save_credentials(
        &self,
        credentials: &Credentials,
    ) -> CoreResult<SaveCredentialsOutcome> {
        let rejection: Option<String> = self
            .call(
                Operation::SaveCredentials,
                json!([
                    credentials.server,
                    credentials.username,
                    credentials.password
                ]),
            )
            .await?;

        Ok(match rejection.filter(|msg| !msg.trim().is_empty()) {
            None => SaveCredentialsOutcome::Accepted,
            Some(msg) => SaveCredentialsOutcome::Rejected(msg),
        })
    }

    async fn delete_credentials(&self) -> CoreResult<()> {
        self.call_void(Operation::DeleteCredentials, json!([])).await
    }

    async fn get_profile(&self) -> CoreResult<Option<Profile>> {
        let profile: Option<Profile> = self.call(Operation::GetProfile, json!([])).await?;
        Ok(profile.filter(|p| *p != Profile::default()))
    }

    async fn list_commits(&self, id: RepositoryId) -> CoreResult<Vec<Commit>> {
        self.call_list(Operation::ListCommits, json!([id])).await
    }

    async fn list_merge_candidates(&self, id: RepositoryId) -> CoreResult<Vec<Commit>> {
        self.call_list(Operation::ListMergeCandidates, json!([id]))
            .await
    }
}
