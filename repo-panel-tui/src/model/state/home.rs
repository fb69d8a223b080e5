//! 主页状态：仓库卡片网格与 Jira 会话

use std::collections::HashSet;

use repo_panel_core::types::{AvatarLookup, Repository, RepositoryId, SessionStatus};

/// 卡片头像状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarSlot {
    /// 不显示（未关联项目，或解析失败）
    Hidden,
    /// 正在解析
    Pending,
    /// 已解析（URL 或 data URI）
    Shown(String),
}

/// 仓库卡片
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCard {
    pub repository: Repository,
    pub avatar: AvatarSlot,
}

/// 网格中的一个格子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile<'a> {
    Card(&'a RepoCard),
    /// 固定在末尾的"添加仓库"格子
    Add,
}

/// 仓库卡片网格
///
/// 卡片按后端列表顺序排列，"添加"格子永远在最后。
/// `selected` 的取值范围是 `0..=cards.len()`，其中 `cards.len()` 指向"添加"格子。
#[derive(Debug, Default)]
pub struct RepoGrid {
    cards: Vec<RepoCard>,
    selected: usize,
}

impl RepoGrid {
    /// 用新的仓库列表重建网格
    ///
    /// 旧卡片全部丢弃；id 与项目 Key 都没变的卡片沿用已解析的头像。
    /// 返回需要异步解析头像的仓库。
    pub fn reconcile(&mut self, repositories: Vec<Repository>) -> Vec<Repository> {
        let selected_id = self.selected_repository().map(|r| r.id);
        let on_add_tile = selected_id.is_none() && !self.cards.is_empty();
        let previous = std::mem::take(&mut self.cards);
        let mut unresolved = Vec::new();

        for repository in repositories {
            let avatar = match (repository.ready_avatar(), &repository.jira_key) {
                (Some(avatar), _) => AvatarSlot::Shown(avatar.to_string()),
                (None, None) => AvatarSlot::Hidden,
                (None, Some(key)) => {
                    let carried = previous.iter().find_map(|card| {
                        let same = card.repository.id == repository.id
                            && card.repository.jira_key.as_deref() == Some(key.as_str());
                        match &card.avatar {
                            AvatarSlot::Shown(image) if same => Some(image.clone()),
                            _ => None,
                        }
                    });
                    match carried {
                        Some(image) => AvatarSlot::Shown(image),
                        None => {
                            unresolved.push(repository.clone());
                            AvatarSlot::Pending
                        }
                    }
                }
            };
            self.cards.push(RepoCard { repository, avatar });
        }

        self.selected = if on_add_tile {
            self.cards.len()
        } else {
            selected_id
                .and_then(|id| self.cards.iter().position(|c| c.repository.id == id))
                .unwrap_or_else(|| self.selected.min(self.cards.len()))
        };

        unresolved
    }

    /// 写入异步解析到的头像
    ///
    /// 卡片已被替换（id 或 Key 变化）时忽略。
    pub fn apply_avatar(&mut self, id: RepositoryId, key: &str, lookup: &AvatarLookup) {
        let Some(card) = self.cards.iter_mut().find(|c| {
            c.repository.id == id && c.repository.jira_key.as_deref() == Some(key)
        }) else {
            return;
        };
        if card.avatar != AvatarSlot::Pending {
            return;
        }
        card.avatar = match lookup.image() {
            Some(image) => AvatarSlot::Shown(image.to_string()),
            None => AvatarSlot::Hidden,
        };
    }

    pub fn cards(&self) -> &[RepoCard] {
        &self.cards
    }

    /// 全部格子（卡片在前，"添加"格子在后）
    pub fn tiles(&self) -> impl Iterator<Item = Tile<'_>> {
        self.cards.iter().map(Tile::Card).chain(std::iter::once(Tile::Add))
    }

    pub fn tile_count(&self) -> usize {
        self.cards.len() + 1
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Tile<'_> {
        self.cards.get(self.selected).map_or(Tile::Add, Tile::Card)
    }

    pub fn selected_repository(&self) -> Option<&Repository> {
        self.cards.get(self.selected).map(|c| &c.repository)
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected < self.cards.len() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.cards.len();
    }

    /// 按下标选中，越界时落在"添加"格子上
    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.cards.len());
    }
}

/// 主页状态
#[derive(Debug, Default)]
pub struct HomeState {
    pub grid: RepoGrid,
    /// Jira 会话状态（标题栏右侧显示）
    pub session: SessionStatus,
    /// 删除请求尚未返回的仓库
    pub pending_deletes: HashSet<RepositoryId>,
}

impl HomeState {
    pub fn new(session: SessionStatus) -> Self {
        Self {
            session,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(id: RepositoryId, key: Option<&str>) -> Repository {
        Repository {
            id,
            name: format!("repo-{id}"),
            path: format!("/src/repo-{id}"),
            jira_key: key.map(str::to_string),
            jira_name: key.map(|k| format!("{k} project")),
            jira_avatar: None,
        }
    }

    fn ids(grid: &RepoGrid) -> Vec<RepositoryId> {
        grid.cards().iter().map(|c| c.repository.id).collect()
    }

    #[test]
    fn reconcile_twice_yields_same_cards_with_add_tile_last() {
        let list = vec![repo(3, Some("CORE")), repo(1, None), repo(2, Some("WEB"))];
        let mut grid = RepoGrid::default();

        grid.reconcile(list.clone());
        let first: Vec<_> = grid.cards().to_vec();
        grid.reconcile(list);

        assert_eq!(ids(&grid), vec![3, 1, 2]);
        assert_eq!(grid.cards().len(), first.len());
        assert_eq!(grid.tile_count(), 4);
        assert_eq!(grid.tiles().last(), Some(Tile::Add));
    }

    #[test]
    fn only_linked_cards_without_avatar_need_resolution() {
        let mut with_avatar = repo(1, Some("CORE"));
        with_avatar.jira_avatar = Some("data:image/png;base64,AA".into());
        let mut grid = RepoGrid::default();

        let unresolved = grid.reconcile(vec![with_avatar, repo(2, None), repo(3, Some("WEB"))]);

        assert_eq!(unresolved.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3]);
        assert_eq!(
            grid.cards()[0].avatar,
            AvatarSlot::Shown("data:image/png;base64,AA".into())
        );
        assert_eq!(grid.cards()[1].avatar, AvatarSlot::Hidden);
        assert_eq!(grid.cards()[2].avatar, AvatarSlot::Pending);
    }

    #[test]
    fn url_avatar_falls_back_to_key_lookup() {
        let mut with_url = repo(1, Some("CORE"));
        with_url.jira_avatar = Some("https://img/core.png".into());
        let mut grid = RepoGrid::default();

        let unresolved = grid.reconcile(vec![with_url]);
        assert_eq!(unresolved.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(grid.cards()[0].avatar, AvatarSlot::Pending);

        grid.apply_avatar(1, "CORE", &AvatarLookup::Resolved("data:image/png;base64,CC".into()));
        assert_eq!(
            grid.cards()[0].avatar,
            AvatarSlot::Shown("data:image/png;base64,CC".into())
        );

        // 获取失败时头像保持隐藏
        let mut with_url = repo(2, Some("WEB"));
        with_url.jira_avatar = Some("https://img/web.png".into());
        grid.reconcile(vec![with_url]);
        grid.apply_avatar(2, "WEB", &AvatarLookup::Absent);
        assert_eq!(grid.cards()[0].avatar, AvatarSlot::Hidden);
    }

    #[test]
    fn resolved_avatar_survives_rerender_with_same_key() {
        let mut grid = RepoGrid::default();
        grid.reconcile(vec![repo(1, Some("CORE"))]);
        grid.apply_avatar(1, "CORE", &AvatarLookup::Resolved("data:image/png;base64,AA".into()));

        let unresolved = grid.reconcile(vec![repo(1, Some("CORE"))]);
        assert!(unresolved.is_empty());
        assert!(matches!(grid.cards()[0].avatar, AvatarSlot::Shown(_)));

        // 项目 Key 变了，需要重新解析
        let unresolved = grid.reconcile(vec![repo(1, Some("WEB"))]);
        assert_eq!(unresolved.len(), 1);
        assert_eq!(grid.cards()[0].avatar, AvatarSlot::Pending);
    }

    #[test]
    fn failed_or_stale_avatar_lookups() {
        let mut grid = RepoGrid::default();
        grid.reconcile(vec![repo(1, Some("CORE")), repo(2, Some("WEB"))]);

        grid.apply_avatar(1, "CORE", &AvatarLookup::Absent);
        grid.apply_avatar(2, "OLD", &AvatarLookup::Resolved("x".into()));

        assert_eq!(grid.cards()[0].avatar, AvatarSlot::Hidden);
        assert_eq!(grid.cards()[1].avatar, AvatarSlot::Pending);
    }

    #[test]
    fn selection_follows_repository_and_stops_at_add_tile() {
        let mut grid = RepoGrid::default();
        grid.reconcile(vec![repo(1, None), repo(2, None)]);
        grid.select_next();
        assert_eq!(grid.selected_repository().map(|r| r.id), Some(2));

        grid.reconcile(vec![repo(5, None), repo(1, None), repo(2, None)]);
        assert_eq!(grid.selected_repository().map(|r| r.id), Some(2));

        grid.select_next();
        grid.select_next();
        assert_eq!(grid.selected(), Tile::Add);
        assert_eq!(grid.selected_index(), 3);

        grid.reconcile(vec![repo(5, None)]);
        assert_eq!(grid.selected(), Tile::Add);

        grid.select_first();
        grid.select_previous();
        assert_eq!(grid.selected_index(), 0);
    }

    #[test]
    fn empty_grid_has_only_add_tile() {
        let grid = RepoGrid::default();
        assert_eq!(grid.tiles().collect::<Vec<_>>(), vec![Tile::Add]);
        assert_eq!(grid.selected(), Tile::Add);
    }
}
