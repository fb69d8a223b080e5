//! 主页：仓库卡片网格

use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::state::{AvatarSlot, RepoCard, Tile};
use crate::model::HomeState;
use crate::util::text::truncate;
use crate::view::theme::{colors, Styles};

const CARD_WIDTH: u16 = 30;
const CARD_HEIGHT: u16 = 6;

/// 网格几何（绘制与鼠标点击共用）
struct GridLayout {
    area: Rect,
    columns: usize,
    visible_rows: usize,
    first_row: usize,
}

impl GridLayout {
    fn new(home: &HomeState, area: Rect) -> Self {
        let columns = usize::from((area.width / CARD_WIDTH).max(1));
        let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));

        // 保证选中的格子所在行可见
        let selected_row = home.grid.selected_index() / columns;
        let first_row = (selected_row + 1).saturating_sub(visible_rows);

        Self {
            area,
            columns,
            visible_rows,
            first_row,
        }
    }

    /// 第 `index` 个格子的区域；不可见时为 `None`
    fn cell(&self, index: usize) -> Option<Rect> {
        let row = index / self.columns;
        if row < self.first_row || row >= self.first_row + self.visible_rows {
            return None;
        }
        let col = u16::try_from(index % self.columns).ok()?;
        let row = u16::try_from(row - self.first_row).ok()?;
        let area = self.area;

        Some(Rect::new(
            area.x + col * CARD_WIDTH,
            area.y + row * CARD_HEIGHT,
            CARD_WIDTH.min(area.width),
            CARD_HEIGHT.min(area.height.saturating_sub(row * CARD_HEIGHT)),
        ))
    }
}

/// 屏幕坐标落在哪个格子上
pub fn tile_at(home: &HomeState, area: Rect, position: Position) -> Option<usize> {
    let layout = GridLayout::new(home, area);
    (0..home.grid.tile_count())
        .find(|&i| layout.cell(i).is_some_and(|cell| cell.contains(position)))
}

/// 渲染仓库网格
pub fn render(home: &HomeState, frame: &mut Frame, area: Rect) {
    let layout = GridLayout::new(home, area);

    for (i, tile) in home.grid.tiles().enumerate() {
        let Some(cell) = layout.cell(i) else {
            continue;
        };
        let selected = i == home.grid.selected_index();

        match tile {
            Tile::Card(card) => {
                let deleting = home.pending_deletes.contains(&card.repository.id);
                render_card(frame, cell, card, selected, deleting);
            }
            Tile::Add => render_add_tile(frame, cell, selected),
        }
    }
}

fn card_block(selected: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(if selected {
            Styles::border_focused()
        } else {
            Styles::border()
        })
}

/// 渲染单张仓库卡片
fn render_card(frame: &mut Frame, area: Rect, card: &RepoCard, selected: bool, deleting: bool) {
    let texts = &t().home;
    let c = colors();
    let block = card_block(selected);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = usize::from(inner.width);
    let repo = &card.repository;

    let title_style = if selected {
        Style::default()
            .fg(c.selected_fg)
            .bg(c.selected_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Styles::title()
    };

    let avatar = match &card.avatar {
        AvatarSlot::Shown(image) => Some(Span::styled(
            format!("◉ {} ", avatar_label(image)),
            Style::default().fg(c.success),
        )),
        AvatarSlot::Pending => Some(Span::styled(
            format!("{} ", texts.avatar_pending),
            Style::default().fg(c.muted),
        )),
        AvatarSlot::Hidden => None,
    };

    let subtitle = match repo.key_badge() {
        Some(badge) => Span::styled(badge, Style::default().fg(c.highlight)),
        None => Span::styled(texts.unlinked, Style::default().fg(c.muted)),
    };

    let mut badge_line: Vec<Span> = avatar.into_iter().collect();
    badge_line.push(subtitle);

    let mut lines = vec![
        Line::styled(truncate(repo.display_title(), width), title_style),
        Line::from(badge_line),
        Line::styled(
            truncate(&repo.path, width),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if deleting {
        lines.push(Line::styled(texts.deleting, Style::default().fg(c.warning)));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染"添加仓库"格子
fn render_add_tile(frame: &mut Frame, area: Rect, selected: bool) {
    let texts = &t().home;
    let block = card_block(selected);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let style = if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let lines = vec![
        Line::styled(texts.add_tile, style),
        Line::styled(texts.add_tile_hint, Style::default().fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// 终端里无法显示图片，只显示头像的简短描述
///
/// data URI 显示其 MIME 类型，URL 显示最后一段路径。
fn avatar_label(image: &str) -> String {
    if let Some(rest) = image.strip_prefix("data:") {
        return rest
            .split([';', ','])
            .next()
            .filter(|mime| !mime.is_empty())
            .unwrap_or("image")
            .to_string();
    }

    let without_query = image.split(['?', '#']).next().unwrap_or(image);
    without_query
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map_or_else(|| "image".to_string(), |segment| truncate(segment, 16))
}

#[cfg(test)]
mod tests {
    use super::*;
    use repo_panel_core::types::{Repository, SessionStatus};

    fn home_with(count: i64) -> HomeState {
        let mut home = HomeState::new(SessionStatus::SignedOut);
        home.grid.reconcile(
            (1..=count)
                .map(|id| Repository {
                    id,
                    name: format!("repo-{id}"),
                    path: format!("/src/repo-{id}"),
                    jira_key: None,
                    jira_name: None,
                    jira_avatar: None,
                })
                .collect(),
        );
        home
    }

    #[test]
    fn clicks_map_to_tiles_in_row_order() {
        let home = home_with(3);
        let area = Rect::new(1, 2, 98, 36);

        assert_eq!(tile_at(&home, area, Position::new(5, 4)), Some(0));
        assert_eq!(tile_at(&home, area, Position::new(65, 4)), Some(2));
        // 第二行第一个格子是"添加"格子
        assert_eq!(tile_at(&home, area, Position::new(5, 9)), Some(3));
        // 三列之外的空白
        assert_eq!(tile_at(&home, area, Position::new(95, 4)), None);
        assert_eq!(tile_at(&home, area, Position::new(40, 9)), None);
    }

    #[test]
    fn hidden_rows_are_not_clickable() {
        let mut home = home_with(8);
        home.grid.select_last();
        // 两列一行，滚动到选中的"添加"格子所在的第 5 行
        let area = Rect::new(0, 0, 60, 6);

        assert_eq!(tile_at(&home, area, Position::new(5, 1)), Some(8));
        assert_eq!(tile_at(&home, area, Position::new(35, 1)), None);
    }

    #[test]
    fn avatar_label_for_data_uri_is_mime_type() {
        assert_eq!(avatar_label("data:image/png;base64,iVBORw0"), "image/png");
        assert_eq!(avatar_label("data:;base64,AA"), "image");
    }

    #[test]
    fn avatar_label_for_url_is_last_segment() {
        assert_eq!(
            avatar_label("https://jira.example.com/secure/projectavatar?pid=1&size=small"),
            "projectavatar"
        );
        assert_eq!(avatar_label("https://img.example.com/core.png"), "core.png");
    }
}
