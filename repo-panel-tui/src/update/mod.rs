//!
//! src/update/mod.rs
//! Update 层：状态更新
//!
//! 接收 Message，修改 Model，并把需要后端执行的工作以 Command 形式放进发件箱。
//!
//!     pub fn update(app: &mut App, msg: AppMessage) {
//!         match msg {
//!             AppMessage::Home(..)    → home::update       // 网格选择、打开弹窗
//!             AppMessage::Detail(..)  → detail::update     // 表格切换、返回
//!             AppMessage::Modal(..)   → modal::update      // 输入、校验、提交
//!             AppMessage::Backend{..} → backend::update    // 后端结果（先检查视图代数）
//!             ...
//!         }
//!     }
//!
//! Update 层自身从不阻塞，也从不直接访问后端。
//!

mod backend;
mod detail;
mod home;
mod modal;

use crate::i18n::t;
use crate::message::{AppMessage, Command};
use crate::model::{App, Route, View};

/// 处理一条消息
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Navigate(token) => {
            app.navigate(&token);
        }

        AppMessage::Refresh => refresh(app),

        AppMessage::Home(home_msg) => {
            home::update(app, home_msg);
        }

        AppMessage::Detail(detail_msg) => {
            detail::update(app, detail_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Backend { generation, event } => {
            // 已离开的视图发出的结果
            if generation != app.generation() {
                log::debug!(
                    "Dropping result from view generation {generation} (current {})",
                    app.generation()
                );
                return;
            }
            backend::update(app, event);
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

/// 重新加载当前视图
fn refresh(app: &mut App) {
    match &app.view {
        View::Home(_) => {
            app.set_status(t().notice.refreshing);
            app.outbox.issue(Command::ReloadRepositories);
            app.outbox.issue(Command::RefreshSession);
        }
        View::Repository(detail) => {
            let token = Route::Repository(detail.repository_id).token();
            app.navigate(&token);
        }
        View::NotFound => app.navigate(Route::HOME),
        View::Loading => {}
    }
}
