//! 后端结果处理
//!
//! 进入这里的结果都已经通过了视图代数检查；
//! 弹窗相关的结果还要再检查弹窗打开代数。

use repo_panel_core::services::{LogoutResult, SaveCredentialsResult};
use repo_panel_core::types::{Credentials, Repository, SessionStatus};
use repo_panel_core::{CoreError, CoreResult};

use crate::i18n::t;
use crate::message::{BackendEvent, Command};
use crate::model::state::{DetailState, HomeState, Modal};
use crate::model::{App, View};

/// 处理后端结果
pub fn update(app: &mut App, event: BackendEvent) {
    match event {
        BackendEvent::HomeBuilt {
            repositories,
            session,
        } => {
            let mut home = HomeState::new(session);
            match repositories {
                Ok(list) => issue_avatar_lookups(app, home.grid.reconcile(list)),
                Err(e) => list_failed(app, &e),
            }
            app.view = View::Home(home);
        }

        BackendEvent::DetailBuilt { id, history } => {
            app.view = View::Repository(DetailState::from_history(id, history));
        }

        BackendEvent::RepositoriesLoaded(result) => reconcile(app, result),

        BackendEvent::AvatarResolved { id, key, lookup } => {
            if let View::Home(home) = &mut app.view {
                home.grid.apply_avatar(id, &key, &lookup);
            }
        }

        BackendEvent::ProjectsLoaded { modal, result } => {
            if !app.modal.is_current(modal) {
                return;
            }
            let Some(active) = app.modal.active.as_mut() else {
                return;
            };
            let preselect = match active {
                Modal::EditLink { current_key, .. } => current_key.clone(),
                _ => None,
            };
            if let Some(picker) = active.picker_mut() {
                match result {
                    Ok(projects) => picker.set_projects(projects, preselect.as_deref()),
                    Err(e) => {
                        picker.fail(format!("{}: {e}", t().modal.project_picker.load_failed));
                    }
                }
            }
        }

        BackendEvent::RepositoryAdded { modal, result } => {
            mutation_finished(app, modal, result, t().notice.repository_added);
        }

        BackendEvent::RepositoryRelinked { modal, result } => {
            mutation_finished(app, modal, result, t().notice.link_updated);
        }

        BackendEvent::RepositoryDeleted { id, result } => {
            if let View::Home(home) = &mut app.view {
                home.pending_deletes.remove(&id);
            }
            match result {
                Ok(()) => {
                    app.set_status(t().notice.repository_deleted);
                    app.outbox.issue(Command::ReloadRepositories);
                }
                // 网格保持上一次成功渲染的样子
                Err(e) => app.set_status(format!("{}: {e}", t().notice.delete_failed)),
            }
        }

        BackendEvent::CredentialsLoaded { modal, credentials } => {
            if app.modal.is_current(modal) {
                if let (Some(stored), Some(active)) = (credentials, app.modal.active.as_mut()) {
                    prefill_login(active, stored);
                }
            }
        }

        BackendEvent::CredentialsSaved { modal, result } => {
            let current = app.modal.is_current(modal);
            match result {
                Ok(SaveCredentialsResult::Saved(status)) => {
                    set_session(app, status);
                    if current {
                        app.modal.close();
                    }
                    app.set_status(t().notice.jira_saved);
                }
                Ok(SaveCredentialsResult::Rejected(message)) => {
                    if current {
                        show_modal_error(app, message);
                    }
                }
                Err(e) => {
                    if current {
                        show_modal_error(app, e.to_string());
                    }
                }
            }
        }

        // 会话状态总是以重新派生的结果为准
        BackendEvent::LoggedOut(LogoutResult { deleted, status }) => {
            set_session(app, status);
            match deleted {
                Ok(()) => app.set_status(t().notice.logged_out),
                Err(e) => app.set_status(format!("{}: {e}", t().notice.logout_failed)),
            }
        }

        BackendEvent::SessionRefreshed(status) => set_session(app, status),
    }
}

/// 主页重渲染：失败时保留当前网格
fn reconcile(app: &mut App, result: CoreResult<Vec<Repository>>) {
    match result {
        Ok(list) => {
            let View::Home(home) = &mut app.view else {
                return;
            };
            let unresolved = home.grid.reconcile(list);
            issue_avatar_lookups(app, unresolved);
        }
        Err(e) => list_failed(app, &e),
    }
}

fn issue_avatar_lookups(app: &mut App, repositories: Vec<Repository>) {
    for repository in repositories {
        app.outbox.issue(Command::ResolveAvatar(repository));
    }
}

fn list_failed(app: &mut App, error: &CoreError) {
    app.set_status(format!("{}: {error}", t().notice.list_failed));
}

/// 添加/修改完成
///
/// 成功时无论弹窗是否还是同一次打开，后端状态都已变化，所以总要重渲染网格。
fn mutation_finished(app: &mut App, modal: u64, result: CoreResult<()>, notice: &str) {
    let current = app.modal.is_current(modal);
    match result {
        Ok(()) => {
            if current {
                app.modal.close();
            }
            app.set_status(notice);
            app.outbox.issue(Command::ReloadRepositories);
        }
        Err(e) => {
            if current {
                show_modal_error(app, e.to_string());
            }
        }
    }
}

/// 远端失败：弹窗保持打开并显示错误，允许再次提交
fn show_modal_error(app: &mut App, message: String) {
    app.modal.finish_submit();
    if let Some(error) = app.modal.active.as_mut().and_then(Modal::error_mut) {
        *error = Some(message);
    }
}

fn set_session(app: &mut App, status: SessionStatus) {
    if let View::Home(home) = &mut app.view {
        home.session = status;
    }
}

/// 只填写用户还没动过的字段
fn prefill_login(modal: &mut Modal, stored: Credentials) {
    let Modal::JiraLogin {
        server,
        username,
        password,
        ..
    } = modal
    else {
        return;
    };
    if server.is_empty() {
        *server = stored.server;
    }
    if username.is_empty() {
        *username = stored.username;
    }
    if password.is_empty() {
        *password = stored.password;
    }
}
