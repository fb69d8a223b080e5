//! 仓库详情页状态

use repo_panel_core::types::{Commit, RepositoryHistory, RepositoryId};
use repo_panel_core::CoreResult;

/// 详情页中的表格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTable {
    #[default]
    Commits,
    MergeCandidates,
}

impl DetailTable {
    pub fn toggle(self) -> Self {
        match self {
            Self::Commits => Self::MergeCandidates,
            Self::MergeCandidates => Self::Commits,
        }
    }
}

/// 提交表格：行数据（或加载错误）与滚动偏移
#[derive(Debug, Clone)]
pub struct CommitTable {
    pub rows: CoreResult<Vec<Commit>>,
    pub offset: usize,
}

impl CommitTable {
    pub fn new(rows: CoreResult<Vec<Commit>>) -> Self {
        Self { rows, offset: 0 }
    }

    fn len(&self) -> usize {
        self.rows.as_ref().map_or(0, Vec::len)
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.offset + 1 < self.len() {
            self.offset += 1;
        }
    }
}

/// 仓库详情页状态
#[derive(Debug, Clone)]
pub struct DetailState {
    pub repository_id: RepositoryId,
    /// 找不到仓库时为 `None`，显示默认标题
    pub title: Option<String>,
    pub commits: CommitTable,
    pub merge_candidates: CommitTable,
    pub focus: DetailTable,
}

impl DetailState {
    pub fn from_history(repository_id: RepositoryId, history: RepositoryHistory) -> Self {
        Self {
            repository_id,
            title: history.title,
            commits: CommitTable::new(history.commits),
            merge_candidates: CommitTable::new(history.merge_candidates),
            focus: DetailTable::default(),
        }
    }

    pub fn focused_mut(&mut self) -> &mut CommitTable {
        match self.focus {
            DetailTable::Commits => &mut self.commits,
            DetailTable::MergeCandidates => &mut self.merge_candidates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use repo_panel_core::CoreError;

    fn commit(hash: &str) -> Commit {
        Commit {
            hash: hash.to_string(),
            author: "dev".to_string(),
            date: "2024-05-01T10:00:00Z".to_string(),
            message: "msg".to_string(),
        }
    }

    #[test]
    fn scrolling_only_moves_the_focused_table() {
        let history = RepositoryHistory {
            title: Some("api".into()),
            commits: Ok(vec![commit("a"), commit("b"), commit("c")]),
            merge_candidates: Err(CoreError::NetworkError("down".into())),
        };
        let mut state = DetailState::from_history(1, history);

        state.focused_mut().scroll_down();
        state.focused_mut().scroll_down();
        state.focused_mut().scroll_down();
        assert_eq!(state.commits.offset, 2);

        state.focus = state.focus.toggle();
        state.focused_mut().scroll_down();
        assert_eq!(state.merge_candidates.offset, 0);
        assert_eq!(state.commits.offset, 2);

        state.focus = state.focus.toggle();
        state.focused_mut().scroll_up();
        assert_eq!(state.commits.offset, 1);
    }
}
