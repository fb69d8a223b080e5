//! Jira 会话相关类型定义

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Jira 凭证（进程内至多一份）
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "Server", default)]
    pub server: String,
    #[serde(rename = "Username", default)]
    pub username: String,
    #[serde(rename = "Password", default)]
    pub password: String,
}

impl Credentials {
    /// 创建凭证；服务器地址与用户名去除两端空白，密码保持原样
    pub fn new(
        server: impl AsRef<str>,
        username: impl AsRef<str>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            server: server.as_ref().trim().to_string(),
            username: username.as_ref().trim().to_string(),
            password: password.into(),
        }
    }

    /// 已登录：服务器与用户名均非空（仅有密码不算）
    pub fn is_logged_in(&self) -> bool {
        !self.server.trim().is_empty() && !self.username.trim().is_empty()
    }

    /// 本地校验：三个字段均为必填
    pub fn validate(&self) -> CoreResult<()> {
        if self.server.is_empty() || self.username.is_empty() || self.password.is_empty() {
            return Err(CoreError::ValidationError(
                "server, username and password are required".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("server", &self.server)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Jira 用户资料（仅在已登录时获取）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "DisplayName", default, with = "crate::utils::empty_string")]
    pub display_name: Option<String>,
    #[serde(rename = "AvatarURL", default, with = "crate::utils::empty_string")]
    pub avatar_url: Option<String>,
}

/// 保存凭证的结果
///
/// 后端的业务拒绝（如密码错误）不是传输错误，以 `Rejected` 返回给用户。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveCredentialsOutcome {
    Accepted,
    Rejected(String),
}

/// 会话状态按钮提供的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Login,
    Logout,
}

/// 派生出的会话状态
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// 未登录
    #[default]
    SignedOut,
    /// 已登录
    SignedIn {
        /// 显示名称（资料中的显示名，否则用户名）
        name: String,
        /// 用户头像
        avatar_url: Option<String>,
    },
    /// 派生过程中出错（凭证或资料获取失败）
    Unavailable,
}

impl SessionStatus {
    /// 由凭证与资料派生状态
    pub fn derive(credentials: Option<&Credentials>, profile: Option<&Profile>) -> Self {
        let Some(creds) = credentials.filter(|c| c.is_logged_in()) else {
            return Self::SignedOut;
        };

        let name = profile
            .and_then(|p| p.display_name.clone())
            .unwrap_or_else(|| creds.username.trim().to_string());
        let avatar_url = profile.and_then(|p| p.avatar_url.clone());

        Self::SignedIn { name, avatar_url }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::SignedIn { .. })
    }

    /// 出错时仍然提供登录入口
    pub fn action(&self) -> SessionAction {
        match self {
            Self::SignedIn { .. } => SessionAction::Logout,
            Self::SignedOut | Self::Unavailable => SessionAction::Login,
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        match self {
            Self::SignedIn { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn avatar_url(&self) -> Option<&str> {
        match self {
            Self::SignedIn { avatar_url, .. } => avatar_url.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(server: &str, username: &str) -> Credentials {
        Credentials::new(server, username, "secret")
    }

    #[test]
    fn no_credentials_means_signed_out() {
        let profile = Profile {
            display_name: Some("Alice".into()),
            avatar_url: None,
        };
        let status = SessionStatus::derive(None, Some(&profile));
        assert_eq!(status, SessionStatus::SignedOut);
        assert!(!status.is_logged_in());
        assert_eq!(status.action(), SessionAction::Login);
    }

    #[test]
    fn missing_server_or_username_means_signed_out() {
        assert_eq!(
            SessionStatus::derive(Some(&creds("", "u")), None),
            SessionStatus::SignedOut
        );
        assert_eq!(
            SessionStatus::derive(Some(&creds("s", "")), None),
            SessionStatus::SignedOut
        );
    }

    #[test]
    fn display_name_wins_over_username() {
        let profile = Profile {
            display_name: Some("Alice".into()),
            avatar_url: Some("https://a/avatar.png".into()),
        };
        let status = SessionStatus::derive(Some(&creds("s", "u")), Some(&profile));
        assert_eq!(status.display_name(), Some("Alice"));
        assert_eq!(status.avatar_url(), Some("https://a/avatar.png"));
        assert_eq!(status.action(), SessionAction::Logout);
    }

    #[test]
    fn username_is_the_fallback_name() {
        let empty: Profile = serde_json::from_str(r#"{"DisplayName":"","AvatarURL":""}"#).unwrap();
        for profile in [None, Some(&empty)] {
            let status = SessionStatus::derive(Some(&creds("s", "u")), profile);
            assert_eq!(status.display_name(), Some("u"));
            assert_eq!(status.avatar_url(), None);
        }
    }

    #[test]
    fn unavailable_offers_login() {
        assert_eq!(SessionStatus::Unavailable.action(), SessionAction::Login);
        assert!(!SessionStatus::Unavailable.is_logged_in());
    }

    #[test]
    fn debug_output_hides_password() {
        let rendered = format!("{:?}", Credentials::new("s", "u", "hunter2"));
        assert!(!rendered.contains("hunter2"));
    }
}
