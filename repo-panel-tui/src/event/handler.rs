//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Position;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, DetailMessage, HomeMessage, ModalMessage};
use crate::model::{App, Modal, Route, View};
use crate::view::{home_tile_at, modal_area};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, app),
        // 终端窗口大小改变，下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理鼠标事件：只关心左键点击
///
/// 有弹窗时点击弹窗外关闭弹窗；主页上点击格子等同于选中后回车。
fn handle_mouse_event(mouse: MouseEvent, app: &App) -> AppMessage {
    let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
        return AppMessage::Noop;
    };
    let position = Position::new(mouse.column, mouse.row);

    if let Some(modal) = app.active_modal() {
        return if modal_area(modal, app.viewport).contains(position) {
            AppMessage::Noop
        } else {
            AppMessage::Modal(ModalMessage::OutsideClick)
        };
    }

    match &app.view {
        View::Home(home) => home_tile_at(home, app.viewport, position)
            .map_or(AppMessage::Noop, |i| AppMessage::Home(HomeMessage::ActivateAt(i))),
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if let Some(modal) = app.active_modal() {
        return handle_modal_keys(key, modal);
    }

    if DefaultKeymap::QUIT.matches(&key) || DefaultKeymap::ALT_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    match &app.view {
        View::Home(_) => handle_home_keys(key),
        View::Repository(_) => handle_detail_keys(key),
        View::NotFound => handle_not_found_keys(key),
        View::Loading => AppMessage::Noop,
    }
}

/// 主页按键
fn handle_home_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Home(HomeMessage::Add);
    }
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Home(HomeMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Home(HomeMessage::Delete);
    }
    if DefaultKeymap::SESSION.matches(&key) {
        return AppMessage::Home(HomeMessage::SessionAction);
    }
    if !key.modifiers.is_empty() {
        return AppMessage::Noop;
    }

    match key.code {
        KeyCode::Left | KeyCode::Up | KeyCode::Char('k' | 'h') => {
            AppMessage::Home(HomeMessage::SelectPrevious)
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Char('j' | 'l') => {
            AppMessage::Home(HomeMessage::SelectNext)
        }
        KeyCode::Home => AppMessage::Home(HomeMessage::SelectFirst),
        KeyCode::End => AppMessage::Home(HomeMessage::SelectLast),
        KeyCode::Enter => AppMessage::Home(HomeMessage::Activate),
        _ => AppMessage::Noop,
    }
}

/// 仓库详情页按键
fn handle_detail_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Detail(DetailMessage::Back);
    }
    if !key.modifiers.is_empty() {
        return AppMessage::Noop;
    }

    match key.code {
        KeyCode::Backspace => AppMessage::Detail(DetailMessage::Back),
        KeyCode::Tab | KeyCode::BackTab => AppMessage::Detail(DetailMessage::SwitchTable),
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Detail(DetailMessage::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Detail(DetailMessage::ScrollDown),
        _ => AppMessage::Noop,
    }
}

/// 页面不存在时只能回主页
fn handle_not_found_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key)
        || matches!(key.code, KeyCode::Backspace | KeyCode::Enter)
    {
        AppMessage::Navigate(Route::HOME.to_string())
    } else {
        AppMessage::Noop
    }
}

/// 弹窗按键
fn handle_modal_keys(key: KeyEvent, modal: &Modal) -> AppMessage {
    if DefaultKeymap::SHOW_SECRET.matches(&key) {
        return AppMessage::Modal(ModalMessage::ToggleSecrets);
    }

    let is_login = matches!(modal, Modal::JiraLogin { .. });
    let is_confirm = matches!(modal, Modal::ConfirmDelete { .. });

    let msg = match key.code {
        KeyCode::Esc => ModalMessage::Close,
        KeyCode::Enter => ModalMessage::Confirm,
        KeyCode::Tab => ModalMessage::NextField,
        KeyCode::BackTab => ModalMessage::PrevField,
        KeyCode::Left | KeyCode::Right if is_confirm => ModalMessage::ToggleDeleteFocus,
        KeyCode::Left => ModalMessage::PrevOption,
        KeyCode::Right => ModalMessage::NextOption,
        KeyCode::Up if is_login => ModalMessage::PrevField,
        KeyCode::Down if is_login => ModalMessage::NextField,
        KeyCode::Up => ModalMessage::PrevOption,
        KeyCode::Down => ModalMessage::NextOption,
        KeyCode::Backspace => ModalMessage::Backspace,
        KeyCode::Char(c)
            if key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT =>
        {
            ModalMessage::Input(c)
        }
        _ => return AppMessage::Noop,
    };
    AppMessage::Modal(msg)
}
