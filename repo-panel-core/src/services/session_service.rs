//! Jira 会话服务

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::{log_failure, ServiceContext};
use crate::types::{Credentials, SaveCredentialsOutcome, SessionStatus};

/// 保存凭证后的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveCredentialsResult {
    /// 已保存，附带重新派生的会话状态
    Saved(SessionStatus),
    /// 后端拒绝，附带面向用户的消息
    Rejected(String),
}

/// 退出登录的结果
///
/// 删除凭证失败时 `status` 仍可能是已登录。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoutResult {
    /// 删除凭证的结果
    pub deleted: CoreResult<()>,
    /// 重新派生的会话状态
    pub status: SessionStatus,
}

/// Jira 会话服务
pub struct SessionService {
    ctx: Arc<ServiceContext>,
}

impl SessionService {
    /// 创建会话服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 重新派生会话状态（不会失败，出错时为 `Unavailable`）
    pub async fn refresh(&self) -> SessionStatus {
        let credentials = match self.ctx.gateway.get_credentials().await {
            Ok(creds) => creds,
            Err(e) => {
                log_failure("Failed to read Jira credentials", &e);
                return SessionStatus::Unavailable;
            }
        };

        let Some(creds) = credentials.filter(Credentials::is_logged_in) else {
            return SessionStatus::SignedOut;
        };

        match self.ctx.gateway.get_profile().await {
            Ok(profile) => SessionStatus::derive(Some(&creds), profile.as_ref()),
            Err(e) => {
                log_failure("Failed to fetch Jira profile", &e);
                SessionStatus::Unavailable
            }
        }
    }

    /// 已保存的凭证（用于登录弹窗预填，失败时返回 `None`）
    pub async fn stored_credentials(&self) -> Option<Credentials> {
        match self.ctx.gateway.get_credentials().await {
            Ok(creds) => creds,
            Err(e) => {
                log_failure("Failed to read Jira credentials", &e);
                None
            }
        }
    }

    /// 保存凭证
    ///
    /// 三个字段都是必填的，本地校验失败时返回 `ValidationError` 且不发出请求。
    pub async fn save(
        &self,
        server: &str,
        username: &str,
        password: &str,
    ) -> CoreResult<SaveCredentialsResult> {
        let credentials = Credentials::new(server, username, password);
        credentials.validate()?;

        let outcome = self
            .ctx
            .gateway
            .save_credentials(&credentials)
            .await
            .inspect_err(|e| log_failure("Failed to save Jira credentials", e))?;

        match outcome {
            SaveCredentialsOutcome::Accepted => {
                log::info!("Jira credentials saved for {}", credentials.username);
                Ok(SaveCredentialsResult::Saved(self.refresh().await))
            }
            SaveCredentialsOutcome::Rejected(message) => {
                log::warn!("Jira credentials rejected: {message}");
                Ok(SaveCredentialsResult::Rejected(message))
            }
        }
    }

    /// 退出登录
    ///
    /// 无论删除是否成功都会重新派生状态，反映后端实际剩下的凭证。
    pub async fn logout(&self) -> LogoutResult {
        let deleted = self
            .ctx
            .gateway
            .delete_credentials()
            .await
            .inspect_err(|e| log_failure("Failed to delete Jira credentials", e));
        LogoutResult {
            deleted,
            status: self.refresh().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::gateway::InMemoryGateway;
    use crate::test_utils::{context_for, make_gateway};
    use crate::traits::Operation;
    use crate::types::Profile;

    #[tokio::test]
    async fn signed_out_without_credentials() {
        let gateway = Arc::new(InMemoryGateway::new());
        let service = SessionService::new(context_for(&gateway));

        assert_eq!(service.refresh().await, SessionStatus::SignedOut);
        assert_eq!(gateway.calls(Operation::GetProfile).await, 0);
    }

    #[tokio::test]
    async fn signed_in_uses_display_name() {
        let gateway = Arc::new(
            InMemoryGateway::new()
                .with_credentials(Credentials::new("https://jira", "u", "pw"))
                .with_profile(Profile {
                    display_name: Some("Alice".into()),
                    avatar_url: None,
                }),
        );
        let service = SessionService::new(context_for(&gateway));

        let status = service.refresh().await;
        assert_eq!(status.display_name(), Some("Alice"));
        assert_eq!(status.avatar_url(), None);
    }

    #[tokio::test]
    async fn profile_failure_is_unavailable() {
        let (gateway, ctx) = make_gateway();
        gateway
            .fail(Operation::GetProfile, CoreError::Timeout("profile".into()))
            .await;
        let service = SessionService::new(ctx);

        assert_eq!(service.refresh().await, SessionStatus::Unavailable);
    }

    #[tokio::test]
    async fn credential_failure_is_unavailable() {
        let (gateway, ctx) = make_gateway();
        gateway
            .fail(
                Operation::GetCredentials,
                CoreError::NetworkError("down".into()),
            )
            .await;
        let service = SessionService::new(ctx);

        assert_eq!(service.refresh().await, SessionStatus::Unavailable);
        assert_eq!(service.stored_credentials().await, None);
    }

    #[tokio::test]
    async fn save_requires_all_fields_locally() {
        let gateway = Arc::new(InMemoryGateway::new());
        let service = SessionService::new(context_for(&gateway));

        let result = service.save("  ", "alice", "pw").await;
        assert!(matches!(result, Err(CoreError::ValidationError(_))));
        let result = service.save("jira", "alice", "").await;
        assert!(matches!(result, Err(CoreError::ValidationError(_))));
        assert_eq!(gateway.calls(Operation::SaveCredentials).await, 0);
    }

    #[tokio::test]
    async fn rejection_is_returned_not_thrown() {
        let gateway = Arc::new(InMemoryGateway::new().with_accepted_login("demo", "demo"));
        let service = SessionService::new(context_for(&gateway));

        let result = service.save("jira", "demo", "nope").await.unwrap();
        assert!(matches!(result, SaveCredentialsResult::Rejected(_)));
    }

    #[tokio::test]
    async fn accepted_save_rederives_status() {
        let gateway = Arc::new(InMemoryGateway::new());
        let service = SessionService::new(context_for(&gateway));

        let result = service.save(" jira ", " alice ", "pw").await.unwrap();
        let SaveCredentialsResult::Saved(status) = result else {
            panic!("expected saved, got {result:?}");
        };
        assert_eq!(status.display_name(), Some("alice"));
        assert_eq!(
            gateway.credentials().await.unwrap().server,
            "https://jira"
        );
    }

    #[tokio::test]
    async fn logout_rederives_even_when_delete_fails() {
        let (gateway, ctx) = make_gateway();
        gateway
            .fail(
                Operation::DeleteCredentials,
                CoreError::NetworkError("down".into()),
            )
            .await;
        let service = SessionService::new(ctx);

        let result = service.logout().await;
        // credentials survived the failed delete, so the session is still signed in
        assert_eq!(result.deleted, Err(CoreError::NetworkError("down".into())));
        assert!(result.status.is_logged_in());
        assert_eq!(gateway.calls(Operation::GetCredentials).await, 1);

        gateway.recover(Operation::DeleteCredentials).await;
        let result = service.logout().await;
        assert_eq!(result.deleted, Ok(()));
        assert_eq!(result.status, SessionStatus::SignedOut);
    }
}
