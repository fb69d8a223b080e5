//! 提交记录类型定义

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;

/// 提交记录（只读）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    #[serde(rename = "Hash")]
    pub hash: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Message")]
    pub message: String,
}

impl Commit {
    /// 缩短后的哈希（前 10 个字符）
    pub fn short_hash(&self) -> &str {
        self.hash
            .char_indices()
            .nth(10)
            .map_or(self.hash.as_str(), |(idx, _)| &self.hash[..idx])
    }

    /// 提交信息的首行
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}

/// 仓库详情页数据
///
/// 两张表互相独立：任一失败都不影响另一张。
#[derive(Debug, Clone)]
pub struct RepositoryHistory {
    /// 详情页标题（仓库不存在或列表获取失败时为 `None`）
    pub title: Option<String>,
    /// 完整提交日志
    pub commits: CoreResult<Vec<Commit>>,
    /// 合并候选提交
    pub merge_candidates: CoreResult<Vec<Commit>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(hash: &str, message: &str) -> Commit {
        Commit {
            hash: hash.to_string(),
            author: "dev".to_string(),
            date: "2024-01-01T00:00:00Z".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn short_hash_keeps_ten_chars() {
        assert_eq!(commit("0123456789abcdef", "").short_hash(), "0123456789");
        assert_eq!(commit("abc", "").short_hash(), "abc");
    }

    #[test]
    fn summary_is_first_line() {
        assert_eq!(commit("a", "fix: x\n\nbody").summary(), "fix: x");
        assert_eq!(commit("a", "").summary(), "");
    }
}
