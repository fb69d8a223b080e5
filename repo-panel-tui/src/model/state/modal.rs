//! 弹窗/对话框状态
//!
//! 同一时刻最多一个弹窗。每次打开都会递增打开代数，
//! 异步结果必须带着同一代数回来才会写入弹窗，
//! 因此上一次打开遗留的保存/取消结果不会作用于新打开的弹窗。

use repo_panel_core::types::{Project, Repository, RepositoryId};

/// 弹窗里的 Jira 项目下拉框
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPicker {
    pub projects: Vec<Project>,
    pub selected: Option<usize>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ProjectPicker {
    /// 等待项目列表的空下拉框
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// 填入项目列表
    ///
    /// `preselect` 按 Key（不区分大小写）预选；找不到时不选中任何项目。
    pub fn set_projects(&mut self, projects: Vec<Project>, preselect: Option<&str>) {
        self.selected = preselect.and_then(|key| projects.iter().position(|p| p.matches_key(key)));
        self.projects = projects;
        self.loading = false;
        self.error = None;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.projects.clear();
        self.selected = None;
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn select_next(&mut self) {
        if self.projects.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < self.projects.len() => i + 1,
            Some(i) => i,
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        if self.projects.is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.selected.and_then(|i| self.projects.get(i))
    }

    pub fn selected_key(&self) -> Option<&str> {
        self.selected_project().map(|p| p.key.as_str())
    }
}

/// 登录弹窗的输入字段
pub const LOGIN_FIELD_SERVER: usize = 0;
pub const LOGIN_FIELD_USERNAME: usize = 1;
pub const LOGIN_FIELD_PASSWORD: usize = 2;
pub const LOGIN_FIELD_COUNT: usize = 3;

/// 添加仓库弹窗的输入字段
pub const ADD_FIELD_PATH: usize = 0;
pub const ADD_FIELD_PROJECT: usize = 1;
pub const ADD_FIELD_COUNT: usize = 2;

/// 确认删除弹窗的按钮
pub const DELETE_FOCUS_CANCEL: usize = 0;
pub const DELETE_FOCUS_CONFIRM: usize = 1;

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 添加仓库
    AddRepository {
        path: String,
        picker: ProjectPicker,
        focus: usize,
        error: Option<String>,
    },

    /// 修改仓库关联的 Jira 项目
    EditLink {
        repository_id: RepositoryId,
        title: String,
        current_key: Option<String>,
        picker: ProjectPicker,
        error: Option<String>,
    },

    /// Jira 登录
    JiraLogin {
        server: String,
        username: String,
        password: String,
        focus: usize,
        show_secret: bool,
        error: Option<String>,
    },

    /// 确认删除仓库
    ConfirmDelete {
        repository_id: RepositoryId,
        title: String,
        focus: usize,
    },
}

impl Modal {
    pub fn error_mut(&mut self) -> Option<&mut Option<String>> {
        match self {
            Self::AddRepository { error, .. }
            | Self::EditLink { error, .. }
            | Self::JiraLogin { error, .. } => Some(error),
            Self::ConfirmDelete { .. } => None,
        }
    }

    pub fn picker_mut(&mut self) -> Option<&mut ProjectPicker> {
        match self {
            Self::AddRepository { picker, .. } | Self::EditLink { picker, .. } => Some(picker),
            Self::JiraLogin { .. } | Self::ConfirmDelete { .. } => None,
        }
    }
}

/// 弹窗控制器状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
    generation: u64,
    outside_click_armed: bool,
    in_flight: bool,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 打开弹窗，返回本次打开的代数
    fn open(&mut self, modal: Modal) -> u64 {
        self.generation += 1;
        self.active = Some(modal);
        self.outside_click_armed = true;
        self.in_flight = false;
        self.generation
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
        self.outside_click_armed = false;
        self.in_flight = false;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 当前打开代数
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 结果是否属于当前这次打开
    pub fn is_current(&self, generation: u64) -> bool {
        self.is_open() && self.generation == generation
    }

    /// 消耗外部点击
    ///
    /// 每次打开只会返回一次 `true`，下一次打开时重新装填。
    pub fn take_outside_click(&mut self) -> bool {
        if self.is_open() && self.outside_click_armed {
            self.outside_click_armed = false;
            true
        } else {
            false
        }
    }

    /// 开始提交；已有请求在途时返回 `None`
    pub fn begin_submit(&mut self) -> Option<u64> {
        if !self.is_open() || self.in_flight {
            return None;
        }
        self.in_flight = true;
        Some(self.generation)
    }

    /// 提交失败，允许再次提交
    pub fn finish_submit(&mut self) {
        self.in_flight = false;
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    /// 显示添加仓库弹窗
    pub fn show_add_repository(&mut self) -> u64 {
        self.open(Modal::AddRepository {
            path: String::new(),
            picker: ProjectPicker::loading(),
            focus: ADD_FIELD_PATH,
            error: None,
        })
    }

    /// 显示修改关联项目弹窗
    pub fn show_edit_link(&mut self, repository: &Repository) -> u64 {
        self.open(Modal::EditLink {
            repository_id: repository.id,
            title: repository.display_title().to_string(),
            current_key: repository.jira_key.clone(),
            picker: ProjectPicker::loading(),
            error: None,
        })
    }

    /// 显示 Jira 登录弹窗
    pub fn show_jira_login(&mut self) -> u64 {
        self.open(Modal::JiraLogin {
            server: String::new(),
            username: String::new(),
            password: String::new(),
            focus: LOGIN_FIELD_SERVER,
            show_secret: false,
            error: None,
        })
    }

    /// 显示确认删除弹窗
    pub fn show_confirm_delete(&mut self, repository: &Repository) -> u64 {
        self.open(Modal::ConfirmDelete {
            repository_id: repository.id,
            title: repository.display_title().to_string(),
            focus: DELETE_FOCUS_CANCEL,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(key: &str) -> Project {
        Project {
            key: key.to_string(),
            name: format!("{key} project"),
            avatar_url: None,
        }
    }

    #[test]
    fn every_open_gets_a_new_generation() {
        let mut state = ModalState::new();
        let first = state.show_add_repository();
        let second = state.show_jira_login();

        assert_ne!(first, second);
        assert!(!state.is_current(first));
        assert!(state.is_current(second));

        state.close();
        assert!(!state.is_current(second));
    }

    #[test]
    fn outside_click_fires_once_per_open() {
        let mut state = ModalState::new();
        assert!(!state.take_outside_click());

        state.show_jira_login();
        assert!(state.take_outside_click());
        assert!(!state.take_outside_click());

        state.show_jira_login();
        assert!(state.take_outside_click());
    }

    #[test]
    fn submit_is_blocked_while_in_flight() {
        let mut state = ModalState::new();
        assert_eq!(state.begin_submit(), None);

        let generation = state.show_add_repository();
        assert_eq!(state.begin_submit(), Some(generation));
        assert_eq!(state.begin_submit(), None);

        state.finish_submit();
        assert_eq!(state.begin_submit(), Some(generation));

        // 重新打开会清除在途标记
        let reopened = state.show_add_repository();
        assert_eq!(state.begin_submit(), Some(reopened));
    }

    #[test]
    fn picker_preselects_case_insensitively() {
        let mut picker = ProjectPicker::loading();
        picker.set_projects(vec![project("CORE"), project("WEB")], Some("web"));

        assert!(!picker.loading);
        assert_eq!(picker.selected_key(), Some("WEB"));

        picker.set_projects(vec![project("CORE")], Some("GONE"));
        assert_eq!(picker.selected_key(), None);
    }

    #[test]
    fn picker_navigation_clamps() {
        let mut picker = ProjectPicker::default();
        picker.select_next();
        assert_eq!(picker.selected, None);

        picker.set_projects(vec![project("A"), project("B")], None);
        picker.select_previous();
        assert_eq!(picker.selected_key(), Some("A"));
        picker.select_next();
        picker.select_next();
        assert_eq!(picker.selected_key(), Some("B"));

        picker.fail("boom");
        assert_eq!(picker.selected_key(), None);
        assert_eq!(picker.error.as_deref(), Some("boom"));
    }
}
