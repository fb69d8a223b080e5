//! Jira 会话状态组件（标题栏右侧）

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use repo_panel_core::types::{SessionAction, SessionStatus};

use crate::i18n::t;
use crate::view::theme::{colors, Styles};

/// 生成会话状态行
pub fn line(session: &SessionStatus) -> Line<'static> {
    let texts = &t().session;
    let c = colors();

    let (marker, label, color) = match session {
        SessionStatus::SignedIn { .. } => ("●", texts.authorized, c.success),
        SessionStatus::SignedOut => ("○", texts.not_authorized, c.muted),
        SessionStatus::Unavailable => ("⚠", texts.status_error, c.error),
    };

    let mut spans = vec![
        Span::styled(format!("{marker} "), Style::default().fg(color)),
        Span::raw(label),
    ];

    if let Some(name) = session.display_name() {
        spans.push(Span::raw(" · "));
        if session.avatar_url().is_some() {
            spans.push(Span::raw("◉ "));
        }
        spans.push(Span::styled(
            name.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    }

    let action = match session.action() {
        SessionAction::Login => texts.login,
        SessionAction::Logout => texts.logout,
    };
    spans.push(Span::raw("  ["));
    spans.push(Span::styled("Alt+l", Styles::hint_key()));
    spans.push(Span::raw(format!(" {action}] ")));

    Line::from(spans)
}

/// 会话状态行的显示宽度
pub fn width(session: &SessionStatus) -> u16 {
    u16::try_from(line(session).width()).unwrap_or(u16::MAX)
}
