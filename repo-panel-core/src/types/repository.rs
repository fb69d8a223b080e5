//! 仓库相关类型定义

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// 仓库 ID（由后端分配）
pub type RepositoryId = i64;

/// 仓库信息
///
/// Jira 字段要么全部缺省（未关联），要么至少 `jira_key` 有值（已关联）。
/// `jira_avatar` 只是尽力而为，已关联时也可能缺失。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// 仓库 ID
    #[serde(rename = "ID")]
    pub id: RepositoryId,
    /// 本地名称
    #[serde(rename = "Name")]
    pub name: String,
    /// 文件系统路径
    #[serde(rename = "Path")]
    pub path: String,
    /// 关联的 Jira 项目 Key
    #[serde(rename = "JiraKey", default, with = "crate::utils::empty_string")]
    pub jira_key: Option<String>,
    /// 关联的 Jira 项目名称
    #[serde(rename = "JiraName", default, with = "crate::utils::empty_string")]
    pub jira_name: Option<String>,
    /// 关联项目的头像（URL 或 data URI）
    #[serde(rename = "JiraAvatar", default, with = "crate::utils::empty_string")]
    pub jira_avatar: Option<String>,
}

impl Repository {
    /// 是否已关联 Jira 项目
    pub fn is_linked(&self) -> bool {
        self.jira_key.is_some()
    }

    /// 卡片与详情页标题：优先 Jira 项目名称，否则本地名称
    pub fn display_title(&self) -> &str {
        self.jira_name.as_deref().unwrap_or(&self.name)
    }

    /// 卡片副标题：`(KEY)`，未关联时为空
    pub fn key_badge(&self) -> Option<String> {
        self.jira_key.as_ref().map(|key| format!("({key})"))
    }

    /// 无需加载即可显示的自带头像
    ///
    /// 终端无法加载远程图片：已关联仓库的 URL 头像视为加载失败，改为按项目 Key 获取。
    /// data URI 与未关联仓库的头像原样使用。
    pub fn ready_avatar(&self) -> Option<&str> {
        let avatar = self.jira_avatar.as_deref()?;
        (avatar.starts_with("data:") || self.jira_key.is_none()).then_some(avatar)
    }
}

/// 添加仓库请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRepository {
    /// 文件系统路径
    pub path: String,
    /// Jira 项目 Key
    pub project_key: String,
}

impl NewRepository {
    /// 创建请求（两端空白会被去除）
    pub fn new(path: impl AsRef<str>, project_key: impl AsRef<str>) -> Self {
        Self {
            path: path.as_ref().trim().to_string(),
            project_key: project_key.as_ref().trim().to_string(),
        }
    }

    /// 本地校验：路径与项目 Key 均为必填
    pub fn validate(&self) -> CoreResult<()> {
        if self.path.is_empty() || self.project_key.is_empty() {
            return Err(CoreError::ValidationError(
                "path and project key are required".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(jira_key: &str, jira_name: &str) -> Repository {
        serde_json::from_value(serde_json::json!({
            "ID": 3,
            "Name": "api",
            "Path": "/src/api",
            "JiraKey": jira_key,
            "JiraName": jira_name,
            "JiraAvatar": ""
        }))
        .unwrap()
    }

    #[test]
    fn unlinked_repository_uses_local_name() {
        let repo = sample("", "");
        assert!(!repo.is_linked());
        assert_eq!(repo.display_title(), "api");
        assert_eq!(repo.key_badge(), None);
        assert_eq!(repo.jira_avatar, None);
    }

    #[test]
    fn linked_repository_prefers_project_name() {
        let repo = sample("CORE", "Core Platform");
        assert!(repo.is_linked());
        assert_eq!(repo.display_title(), "Core Platform");
        assert_eq!(repo.key_badge().as_deref(), Some("(CORE)"));
    }

    #[test]
    fn url_avatar_of_linked_repository_needs_lookup() {
        let mut repo = sample("CORE", "Core Platform");
        repo.jira_avatar = Some("https://jira.example.com/avatar/core.png".into());
        assert_eq!(repo.ready_avatar(), None);

        repo.jira_avatar = Some("data:image/png;base64,AA==".into());
        assert_eq!(repo.ready_avatar(), Some("data:image/png;base64,AA=="));

        let mut unlinked = sample("", "");
        unlinked.jira_avatar = Some("https://img.example.com/api.png".into());
        assert_eq!(unlinked.ready_avatar(), Some("https://img.example.com/api.png"));
    }

    #[test]
    fn new_repository_requires_both_fields() {
        assert!(NewRepository::new("  ", "CORE").validate().is_err());
        assert!(NewRepository::new("/src/api", "").validate().is_err());
        assert!(NewRepository::new(" /src/api ", " CORE ").validate().is_ok());
    }
}
