//! 路由定义

use std::fmt;

use repo_panel_core::types::RepositoryId;

/// 可构建的视图路由
///
/// 路由令牌只有两种形式：`home` 与 `repo:<id>`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Repository(RepositoryId),
}

impl Route {
    pub const HOME: &'static str = "home";
    const REPO_PREFIX: &'static str = "repo:";

    /// 解析路由令牌，无法识别时返回 `None`
    pub fn parse(token: &str) -> Option<Self> {
        if token == Self::HOME {
            return Some(Self::Home);
        }
        token
            .strip_prefix(Self::REPO_PREFIX)
            .and_then(|id| id.parse::<RepositoryId>().ok())
            .map(Self::Repository)
    }

    /// 路由令牌
    pub fn token(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str(Self::HOME),
            Self::Repository(id) => write!(f, "{}{id}", Self::REPO_PREFIX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_tokens() {
        assert_eq!(Route::parse("home"), Some(Route::Home));
        assert_eq!(Route::parse("repo:42"), Some(Route::Repository(42)));
        assert_eq!(Route::Repository(7).token(), "repo:7");
    }

    #[test]
    fn rejects_unknown_tokens() {
        for token in ["", "Home", "repo:", "repo:abc", "repo:1.5", "repo: 3", "settings"] {
            assert_eq!(Route::parse(token), None, "token {token:?}");
        }
    }
}
