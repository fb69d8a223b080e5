//! 仓库详情页：提交日志与合并候选两张表

use chrono::{DateTime, Local};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use repo_panel_core::types::Commit;

use crate::i18n::t;
use crate::model::state::{CommitTable, DetailTable};
use crate::model::DetailState;
use crate::view::theme::{colors, Styles};

/// 渲染详情页
pub fn render(detail: &DetailState, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),      // 标题
            Constraint::Percentage(60), // 提交日志
            Constraint::Min(4),         // 合并候选
        ])
        .split(area);

    render_header(detail, frame, chunks[0]);

    let texts = &t().repository;
    render_table(
        frame,
        chunks[1],
        texts.commits,
        &detail.commits,
        detail.focus == DetailTable::Commits,
        (texts.no_commits, texts.commits_failed),
    );
    render_table(
        frame,
        chunks[2],
        texts.merge_candidates,
        &detail.merge_candidates,
        detail.focus == DetailTable::MergeCandidates,
        (texts.no_merge_candidates, texts.merge_candidates_failed),
    );
}

fn render_header(detail: &DetailState, frame: &mut Frame, area: Rect) {
    let texts = t();
    let title = detail
        .title
        .as_deref()
        .unwrap_or(texts.repository.default_title);

    let line = Line::from(vec![
        Span::styled("← ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Styles::hint_key()),
        Span::styled(
            format!(" {}   ", texts.hints.back),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(title.to_string(), Styles::title()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// 渲染一张提交表
///
/// 加载失败时只在表内显示错误，另一张表不受影响。
fn render_table(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    table: &CommitTable,
    focused: bool,
    (empty_text, failed_text): (&str, &str),
) {
    let c = colors();
    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(if focused {
            Styles::border_focused()
        } else {
            Styles::border()
        });

    let commits = match &table.rows {
        Ok(commits) if !commits.is_empty() => commits,
        Ok(_) => {
            let paragraph = Paragraph::new(Line::styled(
                format!("  {empty_text}"),
                Style::default().fg(Color::Gray),
            ))
            .block(block);
            frame.render_widget(paragraph, area);
            return;
        }
        Err(e) => {
            let paragraph = Paragraph::new(Line::styled(
                format!("  ⚠ {failed_text}: {e}"),
                Style::default().fg(c.error),
            ))
            .block(block);
            frame.render_widget(paragraph, area);
            return;
        }
    };

    let texts = &t().repository;
    let header = Row::new(vec![
        Cell::from(texts.col_hash),
        Cell::from(texts.col_author),
        Cell::from(texts.col_date),
        Cell::from(texts.col_message),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = commits.iter().skip(table.offset).map(commit_row).collect();

    let widget = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(18),
            Constraint::Length(16),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .column_spacing(2)
    .block(block);

    frame.render_widget(widget, area);
}

fn commit_row(commit: &Commit) -> Row<'static> {
    Row::new(vec![
        Cell::from(commit.short_hash().to_string()).style(Style::default().fg(Color::Cyan)),
        Cell::from(commit.author.clone()),
        Cell::from(format_commit_date(&commit.date)),
        Cell::from(commit.summary().to_string()),
    ])
}

/// RFC 3339 日期转为本地时间显示；无法解析时原样显示
fn format_commit_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw).map_or_else(
        |_| raw.to_string(),
        |dt| {
            dt.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .to_string()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparseable_dates_are_shown_verbatim() {
        assert_eq!(format_commit_date("yesterday"), "yesterday");
        assert_eq!(format_commit_date(""), "");
    }

    #[test]
    fn rfc3339_dates_are_reformatted() {
        let formatted = format_commit_date("2024-05-01T10:00:00+00:00");
        assert_eq!(formatted.len(), "2024-05-01 10:00".len());
        assert!(formatted.starts_with("2024-0"));
        assert_eq!(formatted.as_bytes()[10], b' ');
    }
}
