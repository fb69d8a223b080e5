//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的内容都放在 modal 下
//! 3. **页面内容归对应页面**：如 `home.*`, `repository.*`
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示
//! 6. **状态栏一次性通知归 `notice.*`**

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（动作词）
    pub hints: HintTexts,
    /// 主页（仓库网格）文本
    pub home: HomeTexts,
    /// Jira 会话状态文本
    pub session: SessionTexts,
    /// 仓库详情页文本
    pub repository: RepositoryTexts,
    /// 弹窗文本（所有弹窗的内容）
    pub modal: ModalTexts,
    /// 状态栏通知
    pub notice: NoticeTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub not_found: &'static str,
    pub cancel: &'static str,
    pub save: &'static str,
    pub delete: &'static str,
    pub back: &'static str,
    pub quit: &'static str,
    pub offline: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 动作描述（用于状态栏提示）
pub struct HintTexts {
    pub select: &'static str,
    pub open: &'static str,
    pub add: &'static str,
    pub edit_link: &'static str,
    pub delete: &'static str,
    pub login: &'static str,
    pub logout: &'static str,
    pub refresh: &'static str,
    pub switch_table: &'static str,
    pub scroll: &'static str,
    pub back: &'static str,
    pub quit: &'static str,
    pub next_field: &'static str,
    pub choose: &'static str,
    pub confirm: &'static str,
    pub show_secret: &'static str,
}

// ============================================================================
// 页面
// ============================================================================

/// 主页文本
pub struct HomeTexts {
    pub title: &'static str,
    pub add_tile: &'static str,
    pub add_tile_hint: &'static str,
    pub unlinked: &'static str,
    pub avatar_pending: &'static str,
    pub deleting: &'static str,
}

/// Jira 会话状态文本
pub struct SessionTexts {
    pub authorized: &'static str,
    pub not_authorized: &'static str,
    pub status_error: &'static str,
    pub login: &'static str,
    pub logout: &'static str,
}

/// 仓库详情页文本
pub struct RepositoryTexts {
    pub default_title: &'static str,
    pub commits: &'static str,
    pub merge_candidates: &'static str,
    pub col_hash: &'static str,
    pub col_author: &'static str,
    pub col_date: &'static str,
    pub col_message: &'static str,
    pub no_commits: &'static str,
    pub no_merge_candidates: &'static str,
    pub commits_failed: &'static str,
    pub merge_candidates_failed: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

/// 弹窗文本
pub struct ModalTexts {
    pub add_repository: AddRepositoryTexts,
    pub edit_link: EditLinkTexts,
    pub jira_login: JiraLoginTexts,
    pub confirm_delete: ConfirmDeleteTexts,
    pub project_picker: ProjectPickerTexts,
    /// 请求进行中
    pub submitting: &'static str,
}

/// 添加仓库弹窗
pub struct AddRepositoryTexts {
    pub title: &'static str,
    pub path: &'static str,
    pub path_placeholder: &'static str,
    pub fields_required: &'static str,
}

/// 修改关联项目弹窗
pub struct EditLinkTexts {
    pub title: &'static str,
    pub repository: &'static str,
    pub project_required: &'static str,
}

/// Jira 登录弹窗
pub struct JiraLoginTexts {
    pub title: &'static str,
    pub server: &'static str,
    pub server_placeholder: &'static str,
    pub username: &'static str,
    pub password: &'static str,
    pub fields_required: &'static str,
}

/// 确认删除弹窗
pub struct ConfirmDeleteTexts {
    pub title: &'static str,
    pub message: &'static str,
}

/// 项目选择器
pub struct ProjectPickerTexts {
    pub label: &'static str,
    pub loading: &'static str,
    pub empty: &'static str,
    pub load_failed: &'static str,
}

// ============================================================================
// 状态栏通知
// ============================================================================

/// 状态栏通知
pub struct NoticeTexts {
    pub repository_added: &'static str,
    pub link_updated: &'static str,
    pub repository_deleted: &'static str,
    pub delete_failed: &'static str,
    pub delete_in_progress: &'static str,
    pub list_failed: &'static str,
    pub jira_saved: &'static str,
    pub logged_out: &'static str,
    pub logout_failed: &'static str,
    pub refreshing: &'static str,
}
