use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::helpers::spinner;
use super::theme::COLOR_SECONDARY;
use super::RenderContext;

const LOGO: &[&str] = &[
    "╔═╗┬ ┬┬ ┬┌─┐┬┌─┐",
    "╠═╝├─┤└┬┘└─┐││ │",
    "╩  ┴ ┴ ┴ └─┘┴└─┘",
];

/// Full-frame brand screen shown while the countdown runs.
pub fn render_splash(frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
    let palette = &ctx.palette;
    let logo_height = if ctx.layout.is_short() { 1 } else { LOGO.len() as u16 };
    let content_height = logo_height + 6;
    let top = area.height.saturating_sub(content_height) / 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(top),
            Constraint::Length(content_height),
            Constraint::Min(0),
        ])
        .split(area);

    let mut lines: Vec<Line> = if ctx.layout.is_short() {
        Vec::new()
    } else {
        LOGO.iter()
            .map(|row| Line::from(Span::styled(*row, Style::default().fg(palette.primary))))
            .collect()
    };
    lines.push(Line::from(Span::styled(
        "PhysioConnect",
        Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "Connect Your Home Care",
        Style::default().fg(COLOR_SECONDARY),
    )));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("{} Loading", spinner(ctx.tick)),
        Style::default().fg(palette.muted),
    )));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "[Enter] Skip",
        Style::default().fg(palette.muted),
    )));

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        chunks[1],
    );
}
