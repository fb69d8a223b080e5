//! Jira 项目类型定义

use serde::{Deserialize, Serialize};

/// Jira 项目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// 项目 Key（唯一）
    #[serde(rename = "Key")]
    pub key: String,
    /// 项目名称
    #[serde(rename = "Name")]
    pub name: String,
    /// 项目头像
    #[serde(rename = "AvatarURL", default, with = "crate::utils::empty_string")]
    pub avatar_url: Option<String>,
}

impl Project {
    /// 选择器中的显示文本：`Name (KEY)`
    pub fn option_label(&self) -> String {
        format!("{} ({})", self.name, self.key)
    }

    /// 项目 Key 比较（大小写不敏感）
    pub fn matches_key(&self, key: &str) -> bool {
        self.key.eq_ignore_ascii_case(key)
    }
}

/// 头像解析结果
///
/// 头像获取失败属于良性失败，不作为错误返回，而是折叠成 `Absent`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarLookup {
    /// 仓库自带头像，无需再次请求
    Present(String),
    /// 通过项目 Key 新获取到的头像
    Resolved(String),
    /// 无可用头像（未关联、后端无头像或请求失败）
    Absent,
}

impl AvatarLookup {
    /// 可显示的头像引用
    pub fn image(&self) -> Option<&str> {
        match self {
            Self::Present(image) | Self::Resolved(image) => Some(image),
            Self::Absent => None,
        }
    }
}
