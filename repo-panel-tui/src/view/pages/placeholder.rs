//! 加载中 / 页面不存在

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;

/// 渲染加载占位
pub fn render_loading(frame: &mut Frame, area: Rect) {
    render_centered(frame, area, t().common.loading, Color::Gray);
}

/// 渲染"页面不存在"
pub fn render_not_found(frame: &mut Frame, area: Rect) {
    render_centered(frame, area, t().common.not_found, Color::Red);
}

fn render_centered(frame: &mut Frame, area: Rect, text: &'static str, color: Color) {
    let top = area.height.saturating_sub(1) / 2;
    let mut lines: Vec<Line> = (0..top).map(|_| Line::from("")).collect();
    lines.push(Line::styled(text, Style::default().fg(color)));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
