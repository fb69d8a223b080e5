//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use repo_panel_core::types::SessionAction;

use crate::i18n::t;
use crate::model::{App, Modal, View};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::bar());
    frame.render_widget(paragraph, area);
}

/// 根据当前视图和弹窗生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let h = &t().hints;
    let mut hints = Vec::new();

    if let Some(modal) = app.active_modal() {
        match modal {
            Modal::AddRepository { .. } => {
                hints.push(("Tab", h.next_field));
                hints.push(("←→", h.choose));
            }
            Modal::EditLink { .. } => hints.push(("←→", h.choose)),
            Modal::JiraLogin { .. } => {
                hints.push(("Tab", h.next_field));
                hints.push(("Alt+s", h.show_secret));
            }
            Modal::ConfirmDelete { .. } => hints.push(("←→", h.select)),
        }
        hints.push(("Enter", h.confirm));
        hints.push(("Esc", t().common.cancel));
        return hints;
    }

    match &app.view {
        View::Home(home) => {
            hints.push(("←→↑↓", h.select));
            hints.push(("Enter", h.open));
            hints.push(("Alt+a", h.add));
            hints.push(("Alt+e", h.edit_link));
            hints.push(("Alt+d", h.delete));
            hints.push(match home.session.action() {
                SessionAction::Login => ("Alt+l", h.login),
                SessionAction::Logout => ("Alt+l", h.logout),
            });
            hints.push(("Alt+r", h.refresh));
        }
        View::Repository(_) => {
            hints.push(("Tab", h.switch_table));
            hints.push(("↑↓", h.scroll));
            hints.push(("Esc", h.back));
            hints.push(("Alt+r", h.refresh));
        }
        View::NotFound => hints.push(("Esc", h.back)),
        View::Loading => {}
    }

    hints.push(("Alt+q", h.quit));
    hints
}
