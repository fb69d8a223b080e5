//! 弹窗消息处理

use repo_panel_core::types::RepositoryId;

use crate::i18n::t;
use crate::message::{Command, ModalMessage};
use crate::model::state::{
    ADD_FIELD_COUNT, ADD_FIELD_PATH, ADD_FIELD_PROJECT, DELETE_FOCUS_CONFIRM, LOGIN_FIELD_COUNT,
    LOGIN_FIELD_SERVER, LOGIN_FIELD_USERNAME,
};
use crate::model::{App, Modal, View};

/// 通过本地校验、等待发送的提交
enum Submission {
    Add {
        path: String,
        project_key: String,
    },
    Relink {
        id: RepositoryId,
        project_key: String,
    },
    Login {
        server: String,
        username: String,
        password: String,
    },
    Delete(RepositoryId),
    Cancel,
}

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => app.modal.close(),
        ModalMessage::OutsideClick => {
            if app.modal.take_outside_click() {
                app.modal.close();
            }
        }
        ModalMessage::Confirm => confirm(app),
        other => edit(app, other),
    }
}

/// 字段编辑与焦点切换
fn edit(app: &mut App, msg: ModalMessage) {
    let Some(modal) = app.modal.active.as_mut() else {
        return;
    };

    match modal {
        Modal::AddRepository {
            path,
            picker,
            focus,
            error,
        } => match msg {
            ModalMessage::NextField => *focus = (*focus + 1) % ADD_FIELD_COUNT,
            ModalMessage::PrevField => *focus = (*focus + ADD_FIELD_COUNT - 1) % ADD_FIELD_COUNT,
            ModalMessage::PrevOption if *focus == ADD_FIELD_PROJECT => picker.select_previous(),
            ModalMessage::NextOption if *focus == ADD_FIELD_PROJECT => picker.select_next(),
            ModalMessage::Input(c) if *focus == ADD_FIELD_PATH => {
                path.push(c);
                *error = None;
            }
            ModalMessage::Backspace if *focus == ADD_FIELD_PATH => {
                path.pop();
            }
            _ => {}
        },

        Modal::EditLink { picker, .. } => match msg {
            ModalMessage::PrevOption | ModalMessage::PrevField => picker.select_previous(),
            ModalMessage::NextOption | ModalMessage::NextField => picker.select_next(),
            _ => {}
        },

        Modal::JiraLogin {
            server,
            username,
            password,
            focus,
            show_secret,
            error,
        } => match msg {
            ModalMessage::NextField => *focus = (*focus + 1) % LOGIN_FIELD_COUNT,
            ModalMessage::PrevField => {
                *focus = (*focus + LOGIN_FIELD_COUNT - 1) % LOGIN_FIELD_COUNT;
            }
            ModalMessage::ToggleSecrets => *show_secret = !*show_secret,
            ModalMessage::Input(c) => {
                let field = match *focus {
                    LOGIN_FIELD_SERVER => server,
                    LOGIN_FIELD_USERNAME => username,
                    _ => password,
                };
                field.push(c);
                *error = None;
            }
            ModalMessage::Backspace => {
                let field = match *focus {
                    LOGIN_FIELD_SERVER => server,
                    LOGIN_FIELD_USERNAME => username,
                    _ => password,
                };
                field.pop();
            }
            _ => {}
        },

        Modal::ConfirmDelete { focus, .. } => match msg {
            ModalMessage::ToggleDeleteFocus
            | ModalMessage::NextField
            | ModalMessage::PrevField
            | ModalMessage::PrevOption
            | ModalMessage::NextOption => {
                *focus = usize::from(*focus == 0);
            }
            _ => {}
        },
    }
}

/// 本地校验；不通过时把错误写进弹窗并返回 `None`
fn validate(modal: &mut Modal) -> Option<Submission> {
    let texts = t();

    match modal {
        Modal::AddRepository {
            path,
            picker,
            error,
            ..
        } => {
            let path = path.trim();
            match picker.selected_key() {
                Some(key) if !path.is_empty() => Some(Submission::Add {
                    path: path.to_string(),
                    project_key: key.to_string(),
                }),
                _ => {
                    *error = Some(texts.modal.add_repository.fields_required.to_string());
                    None
                }
            }
        }

        Modal::EditLink {
            repository_id,
            picker,
            error,
            ..
        } => match picker.selected_key() {
            Some(key) => Some(Submission::Relink {
                id: *repository_id,
                project_key: key.to_string(),
            }),
            None => {
                *error = Some(texts.modal.edit_link.project_required.to_string());
                None
            }
        },

        Modal::JiraLogin {
            server,
            username,
            password,
            error,
            ..
        } => {
            if server.trim().is_empty() || username.trim().is_empty() || password.is_empty() {
                *error = Some(texts.modal.jira_login.fields_required.to_string());
                return None;
            }
            Some(Submission::Login {
                server: server.clone(),
                username: username.clone(),
                password: password.clone(),
            })
        }

        Modal::ConfirmDelete {
            repository_id,
            focus,
            ..
        } => Some(if *focus == DELETE_FOCUS_CONFIRM {
            Submission::Delete(*repository_id)
        } else {
            Submission::Cancel
        }),
    }
}

/// 确认/提交
fn confirm(app: &mut App) {
    let Some(modal) = app.modal.active.as_mut() else {
        return;
    };
    let Some(submission) = validate(modal) else {
        return;
    };

    match submission {
        Submission::Cancel => app.modal.close(),
        Submission::Delete(id) => {
            app.modal.close();
            request_delete(app, id);
        }
        Submission::Add { path, project_key } => {
            let Some(generation) = app.modal.begin_submit() else {
                return;
            };
            clear_error(app);
            app.outbox.issue(Command::AddRepository {
                modal: generation,
                path,
                project_key,
            });
        }
        Submission::Relink { id, project_key } => {
            let Some(generation) = app.modal.begin_submit() else {
                return;
            };
            clear_error(app);
            app.outbox.issue(Command::UpdateRepositoryProject {
                modal: generation,
                id,
                project_key,
            });
        }
        Submission::Login {
            server,
            username,
            password,
        } => {
            let Some(generation) = app.modal.begin_submit() else {
                return;
            };
            clear_error(app);
            app.outbox.issue(Command::SaveCredentials {
                modal: generation,
                server,
                username,
                password,
            });
        }
    }
}

fn clear_error(app: &mut App) {
    if let Some(error) = app.modal.active.as_mut().and_then(Modal::error_mut) {
        *error = None;
    }
}

/// 每个仓库同时最多一个删除请求
fn request_delete(app: &mut App, id: RepositoryId) {
    let View::Home(home) = &mut app.view else {
        return;
    };
    if !home.pending_deletes.insert(id) {
        app.set_status(t().notice.delete_in_progress);
        return;
    }
    log::info!("Deleting repository {id}");
    app.outbox.issue(Command::DeleteRepository(id));
}
