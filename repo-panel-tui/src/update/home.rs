//! 主页（仓库网格）消息处理

use repo_panel_core::types::SessionAction;

use crate::i18n::t;
use crate::message::{Command, HomeMessage};
use crate::model::state::Tile;
use crate::model::{App, Route, View};

/// 处理主页消息
pub fn update(app: &mut App, msg: HomeMessage) {
    let View::Home(home) = &mut app.view else {
        return;
    };

    match msg {
        HomeMessage::SelectPrevious => home.grid.select_previous(),
        HomeMessage::SelectNext => home.grid.select_next(),
        HomeMessage::SelectFirst => home.grid.select_first(),
        HomeMessage::SelectLast => home.grid.select_last(),

        HomeMessage::Activate => match home.grid.selected() {
            Tile::Card(card) => {
                let token = Route::Repository(card.repository.id).token();
                app.navigate(&token);
            }
            Tile::Add => open_add_repository(app),
        },

        HomeMessage::ActivateAt(index) => {
            home.grid.select(index);
            update(app, HomeMessage::Activate);
        }

        HomeMessage::Add => open_add_repository(app),

        HomeMessage::Edit => {
            let Some(repository) = home.grid.selected_repository().cloned() else {
                return;
            };
            let generation = app.modal.show_edit_link(&repository);
            app.outbox.issue(Command::LoadProjects { modal: generation });
        }

        HomeMessage::Delete => {
            let Some(repository) = home.grid.selected_repository().cloned() else {
                return;
            };
            if home.pending_deletes.contains(&repository.id) {
                app.set_status(t().notice.delete_in_progress);
                return;
            }
            app.modal.show_confirm_delete(&repository);
        }

        HomeMessage::SessionAction => match home.session.action() {
            SessionAction::Login => {
                let generation = app.modal.show_jira_login();
                app.outbox
                    .issue(Command::LoadCredentials { modal: generation });
            }
            SessionAction::Logout => app.outbox.issue(Command::Logout),
        },
    }
}

/// 打开添加仓库弹窗，并为其加载项目列表
fn open_add_repository(app: &mut App) {
    let generation = app.modal.show_add_repository();
    app.outbox.issue(Command::LoadProjects { modal: generation });
}
