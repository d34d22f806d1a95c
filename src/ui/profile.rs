use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::helpers::{panel, row_style};
use super::{with_global_keys, KeyHints, RenderContext};
use crate::screens::{ProfileScreen, SettingsRow};

const KEYS: [(&str, &str); 3] = [("↑↓", "Move"), ("Enter", "Toggle"), ("Esc", "Home")];

pub fn render_profile(
    frame: &mut Frame,
    area: Rect,
    screen: &ProfileScreen,
    ctx: &RenderContext<'_>,
) -> KeyHints {
    let palette = &ctx.palette;
    let content = ctx.content;
    let user = content.user_profile();
    let muted = Style::default().fg(palette.muted);

    let achievements = content.achievements();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(SettingsRow::ALL.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .split(area);

    let card = vec![
        Line::from(vec![
            Span::styled(
                format!("({}) ", user.initials()),
                Style::default().fg(palette.primary).add_modifier(Modifier::BOLD),
            ),
            Span::styled(user.name.as_str(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(
            format!("{} · member since {}", user.email, user.member_since),
            muted,
        )),
        Line::from(Span::styled(
            format!(
                "{} sessions · {} day streak · {} minutes",
                user.completed_sessions, user.current_streak, user.total_minutes
            ),
            muted,
        )),
    ];
    frame.render_widget(Paragraph::new(card).block(panel(" Account ", palette)), chunks[0]);

    let settings: Vec<Line> = SettingsRow::ALL
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let value = match row {
                SettingsRow::DarkMode => on_off(ctx.is_dark_mode),
                SettingsRow::Notifications => on_off(screen.notifications_enabled()),
                SettingsRow::Privacy => "›",
            };
            Line::from(vec![
                Span::styled(format!("{:<20}", row.label()), row_style(index == screen.cursor(), palette)),
                Span::styled(format!("{value:<5}"), Style::default().fg(palette.primary)),
                Span::styled(row.hint(), muted),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(settings).block(panel(" Settings ", palette)), chunks[1]);

    let earned = achievements.iter().filter(|a| a.earned).count();
    let lines: Vec<Line> = achievements
        .iter()
        .map(|achievement| {
            let style = if achievement.earned {
                Style::default().fg(palette.success)
            } else {
                muted
            };
            Line::from(vec![
                Span::styled(format!("{:<8}", achievement.badge()), style),
                Span::styled(
                    achievement.title.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {}", achievement.description), muted),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(panel(
            format!(" Achievements {earned}/{} ", achievements.len()),
            palette,
        )),
        chunks[2],
    );

    with_global_keys(&KEYS)
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "On"
    } else {
        "Off"
    }
}
