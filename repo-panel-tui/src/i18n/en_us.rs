//! 英文翻译 (en-US)

use super::keys::{
    AddRepositoryTexts, CommonTexts, ConfirmDeleteTexts, EditLinkTexts, HintTexts, HomeTexts,
    JiraLoginTexts, ModalTexts, NoticeTexts, ProjectPickerTexts, RepositoryTexts, SessionTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Repo Panel",
        loading: "Loading...",
        not_found: "Page not found",
        cancel: "Cancel",
        save: "Save",
        delete: "Delete",
        back: "Back",
        quit: "Quit",
        offline: "offline demo",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        select: "Select",
        open: "Open",
        add: "Add",
        edit_link: "Edit project",
        delete: "Delete",
        login: "Jira login",
        logout: "Log out",
        refresh: "Refresh",
        switch_table: "Switch table",
        scroll: "Scroll",
        back: "Back",
        quit: "Quit",
        next_field: "Next",
        choose: "Choose",
        confirm: "Confirm",
        show_secret: "Show password",
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    home: HomeTexts {
        title: "Repositories",
        add_tile: "+ Add repository",
        add_tile_hint: "Enter or Alt+a",
        unlinked: "no Jira project",
        avatar_pending: "…",
        deleting: "deleting…",
    },

    session: SessionTexts {
        authorized: "Jira: authorized",
        not_authorized: "Jira: not authorized",
        status_error: "Jira: status error",
        login: "🔑 Jira login",
        logout: "Log out of Jira",
    },

    repository: RepositoryTexts {
        default_title: "Repository",
        commits: "Commits",
        merge_candidates: "Merge candidates",
        col_hash: "Hash",
        col_author: "Author",
        col_date: "Date",
        col_message: "Message",
        no_commits: "No commits",
        no_merge_candidates: "No merge candidates",
        commits_failed: "Failed to load commits",
        merge_candidates_failed: "Failed to load merge candidates",
    },

    // ========================================================================
    // 弹窗文本
    // ========================================================================
    modal: ModalTexts {
        add_repository: AddRepositoryTexts {
            title: "Add repository",
            path: "Repository path",
            path_placeholder: "/path/to/repository",
            fields_required: "Fill in all fields!",
        },
        edit_link: EditLinkTexts {
            title: "Change Jira project",
            repository: "Repository",
            project_required: "Select a project",
        },
        jira_login: JiraLoginTexts {
            title: "Jira login",
            server: "Server",
            server_placeholder: "your-company.atlassian.net",
            username: "Username / e-mail",
            password: "Password / API token",
            fields_required: "Fill in all fields",
        },
        confirm_delete: ConfirmDeleteTexts {
            title: "Delete repository",
            message: "Delete repository?",
        },
        project_picker: ProjectPickerTexts {
            label: "Jira project",
            loading: "Loading projects...",
            empty: "No projects (log in to Jira first)",
            load_failed: "Failed to load Jira projects",
        },
        submitting: "Saving...",
    },

    // ========================================================================
    // 状态栏通知
    // ========================================================================
    notice: NoticeTexts {
        repository_added: "Repository added!",
        link_updated: "Jira project updated",
        repository_deleted: "Repository deleted",
        delete_failed: "Delete failed",
        delete_in_progress: "Deletion already in progress",
        list_failed: "Failed to load repositories",
        jira_saved: "Jira data saved",
        logged_out: "Logged out of Jira",
        logout_failed: "Failed to log out of Jira",
        refreshing: "Refreshing...",
    },
};
