//! 主布局渲染

use std::rc::Rc;

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, HomeState, View};

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 三层布局：标题栏 + 主内容区 + 状态栏
fn split(size: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size)
}

fn content_block<'a>() -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border())
}

/// 主页上被点击的格子
pub fn home_tile_at(home: &HomeState, viewport: Rect, position: Position) -> Option<usize> {
    let inner = content_block().inner(split(viewport)[1]);
    pages::home::tile_at(home, inner, position)
}

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let main_layout = split(frame.area());

    render_title_bar(app, frame, main_layout[0]);
    render_view(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // 弹窗在最上层
    components::modal::render(app, frame);
}

/// 渲染标题栏；主页右侧显示 Jira 会话状态
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();

    let mut spans = vec![Span::raw(format!(
        " {} v{}",
        texts.common.app_name,
        env!("CARGO_PKG_VERSION")
    ))];
    if app.offline {
        spans.push(Span::styled(
            format!("  [{}]", texts.common.offline),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).style(Styles::bar()), area);

    if let View::Home(home) = &app.view {
        let width = components::session::width(&home.session).min(area.width);
        let right = Rect::new(area.x + area.width - width, area.y, width, area.height);
        frame.render_widget(
            Paragraph::new(components::session::line(&home.session)).style(Styles::bar()),
            right,
        );
    }
}

/// 根据当前视图渲染内容
fn render_view(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let title = match &app.view {
        View::Home(_) => texts.home.title,
        View::Repository(detail) => detail
            .title
            .as_deref()
            .unwrap_or(texts.repository.default_title),
        View::Loading => texts.common.loading,
        View::NotFound => texts.common.not_found,
    };

    let block = content_block()
        .title(format!(" {title} "))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &app.view {
        View::Loading => pages::placeholder::render_loading(frame, inner),
        View::Home(home) => pages::home::render(home, frame, inner),
        View::Repository(detail) => pages::repository::render(detail, frame, inner),
        View::NotFound => pages::placeholder::render_not_found(frame, inner),
    }
}
