//! 应用主状态结构

use ratatui::layout::Rect;

use super::{Modal, ModalState, Outbox, Route, View};
use crate::message::Command;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前视图（只有路由会替换它）
    pub view: View,

    /// 弹窗状态
    pub modal: ModalState,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 是否使用离线演示后端
    pub offline: bool,

    /// 最近一次绘制的终端区域（用于判断鼠标是否落在弹窗内）
    pub viewport: Rect,

    /// 待执行的后端命令
    pub outbox: Outbox,
}

impl App {
    /// 创建新的应用实例，并导航到初始路由
    pub fn new(initial_route: &str, offline: bool) -> Self {
        let mut app = Self {
            should_quit: false,
            view: View::Loading,
            modal: ModalState::new(),
            status_message: None,
            offline,
            viewport: Rect::default(),
            outbox: Outbox::new(),
        };
        app.navigate(initial_route);
        app
    }

    /// 路由
    ///
    /// 立即显示加载占位，并排队一条构建命令；新视图构建完成后整体替换当前视图。
    /// 无法识别的令牌直接显示"页面不存在"。
    pub fn navigate(&mut self, token: &str) {
        let generation = self.outbox.advance();
        self.modal.close();

        match Route::parse(token) {
            Some(route) => {
                log::debug!("Navigating to {route} (view generation {generation})");
                self.view = View::Loading;
                self.outbox.issue(Command::BuildView(route));
            }
            None => {
                log::warn!("Unknown route token: {token:?}");
                self.view = View::NotFound;
            }
        }
    }

    /// 当前视图代数
    pub fn generation(&self) -> u64 {
        self.outbox.generation()
    }

    /// 当前活动弹窗
    pub fn active_modal(&self) -> Option<&Modal> {
        self.modal.active.as_ref()
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
