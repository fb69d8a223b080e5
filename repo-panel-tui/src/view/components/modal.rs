//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::state::{
    ProjectPicker, ADD_FIELD_PATH, ADD_FIELD_PROJECT, DELETE_FOCUS_CANCEL, LOGIN_FIELD_PASSWORD,
    LOGIN_FIELD_SERVER, LOGIN_FIELD_USERNAME,
};
use crate::model::{App, Modal};
use crate::util::text::truncate;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(modal) = app.active_modal() else {
        return;
    };
    let area = modal_area(modal, frame.area());
    let submitting = app.modal.is_submitting();

    match modal {
        Modal::AddRepository { .. } => render_add_repository(frame, area, modal, submitting),
        Modal::EditLink { .. } => render_edit_link(frame, area, modal, submitting),
        Modal::JiraLogin { .. } => render_jira_login(frame, area, modal, submitting),
        Modal::ConfirmDelete { .. } => render_confirm_delete(frame, area, modal),
    }
}

/// 弹窗在屏幕上的区域（鼠标点击判断也用它）
pub fn modal_area(modal: &Modal, screen: Rect) -> Rect {
    let (width, height) = match modal {
        Modal::AddRepository { .. } => (60, 14),
        Modal::EditLink { .. } => (60, 12),
        Modal::JiraLogin { .. } => (60, 15),
        Modal::ConfirmDelete { .. } => (44, 9),
    };
    centered_rect(width, height, screen)
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 清除背景并绘制边框，返回内容区域
fn frame_block(frame: &mut Frame, area: Rect, title: &str, border: Color) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    Rect::new(
        area.x.saturating_add(2),
        area.y.saturating_add(1),
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

fn label(text: &str) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), Style::default().fg(Color::Gray)))
}

/// 文本输入框
fn input_line(value: &str, placeholder: &str, focused: bool, width: usize) -> Line<'static> {
    if value.is_empty() && !focused {
        return Line::styled(
            format!("  {placeholder}"),
            Style::default().fg(Color::DarkGray),
        );
    }
    let shown = truncate(value, width.saturating_sub(4));
    if focused {
        Line::styled(format!("  {shown}▎"), Style::default().fg(Color::Cyan))
    } else {
        Line::styled(format!("  {shown}"), Style::default().fg(Color::White))
    }
}

/// 项目下拉框
fn picker_line(picker: &ProjectPicker, focused: bool, width: usize) -> Line<'static> {
    let texts = &t().modal.project_picker;

    if picker.loading {
        return Line::styled(
            format!("  {}", texts.loading),
            Style::default().fg(Color::DarkGray),
        );
    }
    if let Some(ref error) = picker.error {
        return Line::styled(
            format!("  ⚠ {}", truncate(error, width.saturating_sub(4))),
            Style::default().fg(Color::Red),
        );
    }
    if picker.projects.is_empty() {
        return Line::styled(
            format!("  {}", texts.empty),
            Style::default().fg(Color::DarkGray),
        );
    }

    let style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let current = picker
        .selected_project()
        .map_or_else(|| texts.label.to_string(), |p| p.option_label());

    Line::styled(
        format!(
            "  {} {} {}",
            if focused { "◀" } else { " " },
            truncate(&current, width.saturating_sub(8)),
            if focused { "▶" } else { " " }
        ),
        style,
    )
}

/// 错误或"正在提交"提示
fn footer_lines(lines: &mut Vec<Line<'static>>, error: Option<&String>, submitting: bool) {
    if submitting {
        lines.push(Line::styled(
            format!("  {}", t().modal.submitting),
            Style::default().fg(Color::Yellow),
        ));
    } else if let Some(err) = error {
        lines.push(Line::styled(
            format!("  ⚠ {err}"),
            Style::default().fg(Color::Red),
        ));
    } else {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("  Enter", Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(" {} | ", t().common.save),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(" {}", t().common.cancel),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
}

/// 渲染添加仓库弹窗
fn render_add_repository(frame: &mut Frame, area: Rect, modal: &Modal, submitting: bool) {
    let Modal::AddRepository {
        path,
        picker,
        focus,
        error,
    } = modal
    else {
        return;
    };
    let texts = &t().modal;
    let inner = frame_block(frame, area, texts.add_repository.title, Color::Cyan);
    let width = usize::from(inner.width);

    let mut lines = vec![
        label(texts.add_repository.path),
        input_line(
            path,
            texts.add_repository.path_placeholder,
            *focus == ADD_FIELD_PATH,
            width,
        ),
        Line::from(""),
        label(texts.project_picker.label),
        picker_line(picker, *focus == ADD_FIELD_PROJECT, width),
        Line::from(""),
    ];
    footer_lines(&mut lines, error.as_ref(), submitting);

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染修改关联项目弹窗
fn render_edit_link(frame: &mut Frame, area: Rect, modal: &Modal, submitting: bool) {
    let Modal::EditLink {
        title,
        picker,
        error,
        ..
    } = modal
    else {
        return;
    };
    let texts = &t().modal;
    let inner = frame_block(frame, area, texts.edit_link.title, Color::Cyan);
    let width = usize::from(inner.width);

    let mut lines = vec![
        label(texts.edit_link.repository),
        Line::styled(
            format!("  {}", truncate(title, width.saturating_sub(2))),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        label(texts.project_picker.label),
        picker_line(picker, true, width),
        Line::from(""),
    ];
    footer_lines(&mut lines, error.as_ref(), submitting);

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染 Jira 登录弹窗
fn render_jira_login(frame: &mut Frame, area: Rect, modal: &Modal, submitting: bool) {
    let Modal::JiraLogin {
        server,
        username,
        password,
        focus,
        show_secret,
        error,
    } = modal
    else {
        return;
    };
    let texts = &t().modal.jira_login;
    let inner = frame_block(frame, area, texts.title, Color::Cyan);
    let width = usize::from(inner.width);

    let masked = if *show_secret {
        password.clone()
    } else {
        "•".repeat(password.chars().count().min(32))
    };

    let mut lines = vec![
        label(texts.server),
        input_line(
            server,
            texts.server_placeholder,
            *focus == LOGIN_FIELD_SERVER,
            width,
        ),
        Line::from(""),
        label(texts.username),
        input_line(username, "", *focus == LOGIN_FIELD_USERNAME, width),
        Line::from(""),
        label(&format!("{} ⊖", texts.password)),
        input_line(&masked, "", *focus == LOGIN_FIELD_PASSWORD, width),
        Line::from(""),
    ];
    footer_lines(&mut lines, error.as_ref(), submitting);

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染确认删除弹窗
fn render_confirm_delete(frame: &mut Frame, area: Rect, modal: &Modal) {
    let Modal::ConfirmDelete { title, focus, .. } = modal else {
        return;
    };
    let texts = t();
    let inner = frame_block(
        frame,
        area,
        texts.modal.confirm_delete.title,
        Color::Red,
    );

    let cancel_style = if *focus == DELETE_FOCUS_CANCEL {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::White)
    };
    let delete_style = if *focus == DELETE_FOCUS_CANCEL {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White).bg(Color::Red)
    };

    let lines = vec![
        Line::from(texts.modal.confirm_delete.message),
        Line::styled(
            title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {} ", texts.common.cancel), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.delete), delete_style),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::model::ModalState;

    #[test]
    fn modal_is_centered_and_clamped() {
        let mut state = ModalState::new();
        state.show_jira_login();
        let Some(modal) = state.active.as_ref() else {
            panic!("modal should be open");
        };

        let area = modal_area(modal, Rect::new(0, 0, 100, 40));
        assert_eq!(area, Rect::new(20, 12, 60, 15));

        let small = modal_area(modal, Rect::new(0, 0, 30, 10));
        assert_eq!(small, Rect::new(0, 0, 30, 10));
    }
}
