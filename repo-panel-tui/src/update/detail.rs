//! 详情页消息处理

use crate::message::DetailMessage;
use crate::model::{App, Route, View};

/// 处理详情页消息
pub fn update(app: &mut App, msg: DetailMessage) {
    let View::Repository(detail) = &mut app.view else {
        return;
    };

    match msg {
        // 无论表格加载成功与否，返回总是可用
        DetailMessage::Back => app.navigate(Route::HOME),
        DetailMessage::SwitchTable => detail.focus = detail.focus.toggle(),
        DetailMessage::ScrollUp => detail.focused_mut().scroll_up(),
        DetailMessage::ScrollDown => detail.focused_mut().scroll_down(),
    }
}
