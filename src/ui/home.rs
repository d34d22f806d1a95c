//! Home dashboard: greeting, today's progress, feature grid.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::helpers::{panel, progress_bar, row_style, truncate_string};
use super::{with_global_keys, KeyHints, RenderContext};
use crate::screens::HomeScreen;

const KEYS: [(&str, &str); 3] = [("←↑↓→", "Move"), ("Enter", "Open"), ("p", "Profile")];

/// Two tiles per row.
const GRID_COLUMNS: usize = 2;

pub fn render_home(
    frame: &mut Frame,
    area: Rect,
    screen: &HomeScreen,
    ctx: &RenderContext<'_>,
) -> KeyHints {
    let palette = &ctx.palette;
    let content = ctx.content;
    let profile = content.user_profile();
    let progress = content.daily_progress();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(area);

    let first_name = profile.name.split_whitespace().next().unwrap_or_default();
    let mode = if ctx.is_dark_mode { "dark" } else { "light" };
    let greeting = vec![
        Line::from(Span::styled(
            format!(" Welcome back, {first_name}"),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" Your home care hub · {mode} mode"),
            Style::default().fg(palette.muted),
        )),
    ];
    frame.render_widget(Paragraph::new(greeting), chunks[0]);

    let stats = vec![
        Line::from(vec![
            Span::styled(format!(" {} ", progress.sessions), Style::default().fg(palette.primary).add_modifier(Modifier::BOLD)),
            Span::styled("sessions  ", Style::default().fg(palette.muted)),
            Span::styled(format!("{} ", progress.minutes), Style::default().fg(palette.success).add_modifier(Modifier::BOLD)),
            Span::styled("minutes  ", Style::default().fg(palette.muted)),
            Span::styled(format!("{}% ", progress.goal_percent), Style::default().fg(palette.warning).add_modifier(Modifier::BOLD)),
            Span::styled("of goal", Style::default().fg(palette.muted)),
        ]),
        Line::from(Span::styled(
            format!(" {}", progress_bar(progress.goal_percent, 20)),
            Style::default().fg(palette.success),
        )),
    ];
    frame.render_widget(
        Paragraph::new(stats).block(panel(" Today's Progress ", palette)),
        chunks[1],
    );

    // Feature tiles followed by the profile shortcut
    let mut tiles: Vec<(&str, &str)> = content
        .home_features()
        .iter()
        .map(|f| (f.title.as_str(), f.subtitle.as_str()))
        .collect();
    tiles.push(("Profile", "Account and Settings"));

    let rows = tiles.len().div_ceil(GRID_COLUMNS);
    let tile_height = ctx.layout.tile_height();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(tile_height); rows])
        .split(chunks[2]);

    let title_width = ctx.layout.max_title_length();
    for (index, (title, subtitle)) in tiles.iter().enumerate() {
        let row = index / GRID_COLUMNS;
        let Some(row_area) = row_areas.get(row) else {
            break;
        };
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row_area);
        let selected = index == screen.cursor();
        let block = panel(
            Span::styled(
                format!(" {} ", truncate_string(title, title_width)),
                row_style(selected, palette),
            ),
            palette,
        );
        let body = Paragraph::new(Line::from(Span::styled(
            truncate_string(subtitle, title_width),
            Style::default().fg(palette.muted),
        )))
        .block(block);
        frame.render_widget(body, cols[index % GRID_COLUMNS]);
    }

    with_global_keys(&KEYS)
}
