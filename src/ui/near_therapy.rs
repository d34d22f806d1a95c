//! Therapist locator: a schematic map or the full list, plus the selected
//! therapist's card.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::helpers::{panel, row_style, stars, truncate_string};
use super::{with_global_keys, KeyHints, RenderContext};
use crate::models::Therapist;
use crate::screens::{LocatorView, NearTherapyScreen};

const KEYS: [(&str, &str); 5] = [
    ("Tab", "Map/List"),
    ("↑↓", "Move"),
    ("Enter", "Select"),
    ("Esc", "Home"),
    ("m/l", "View"),
];

pub fn render_near_therapy(
    frame: &mut Frame,
    area: Rect,
    screen: &NearTherapyScreen,
    ctx: &RenderContext<'_>,
) -> KeyHints {
    let palette = &ctx.palette;
    let content = ctx.content;
    let visible = screen.visible(content);

    let selected = screen.selected().and_then(|id| content.therapist(id));
    let (main, card) = if selected.is_some() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(7)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    let (title, tab) = match screen.view() {
        LocatorView::Map => (" Map · nearby ", "[Map] List"),
        LocatorView::List => (" List · all therapists ", "Map [List]"),
    };

    let mut lines = vec![Line::from(Span::styled(
        format!(" {tab}"),
        Style::default().fg(palette.muted),
    ))];
    if screen.view() == LocatorView::Map {
        lines.push(Line::from(Span::styled(
            "   · · · ⌂ · · · · ✚ · · ·",
            Style::default().fg(palette.border),
        )));
    }
    let width = ctx.layout.max_title_length();
    for (index, therapist) in visible.iter().enumerate() {
        lines.push(therapist_row(
            therapist,
            index == screen.cursor(),
            screen.selected() == Some(therapist.id),
            width,
            ctx,
        ));
    }
    frame.render_widget(Paragraph::new(lines).block(panel(title, palette)), main);

    if let (Some(therapist), Some(card)) = (selected, card) {
        render_card(frame, card, therapist, ctx);
    }

    with_global_keys(&KEYS)
}

fn therapist_row<'a>(
    therapist: &'a Therapist,
    under_cursor: bool,
    selected: bool,
    width: usize,
    ctx: &RenderContext<'_>,
) -> Line<'a> {
    let palette = &ctx.palette;
    let marker = if selected { "●" } else { " " };
    let availability = if therapist.is_available_now() {
        Style::default().fg(palette.success)
    } else {
        Style::default().fg(palette.warning)
    };
    Line::from(vec![
        Span::styled(format!(" {marker} "), Style::default().fg(palette.primary)),
        Span::styled(truncate_string(&therapist.name, width), row_style(under_cursor, palette)),
        Span::styled(format!("  {}", therapist.distance), Style::default().fg(palette.muted)),
        Span::styled(format!("  {}", therapist.availability), availability),
    ])
}

fn render_card(frame: &mut Frame, area: Rect, therapist: &Therapist, ctx: &RenderContext<'_>) {
    let palette = &ctx.palette;
    let muted = Style::default().fg(palette.muted);
    let lines = vec![
        Line::from(Span::styled(
            therapist.specialization.as_str(),
            Style::default().fg(palette.primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(stars(therapist.rating), Style::default().fg(palette.warning)),
            Span::styled(format!(" {}", therapist.rating_label()), muted),
        ]),
        Line::from(Span::styled(
            format!("{} experience · {}", therapist.experience, therapist.distance),
            muted,
        )),
        Line::from(Span::styled(format!("Hours: {}", therapist.hours), muted)),
        Line::from(Span::styled(format!("Phone: {}", therapist.phone), muted)),
    ];
    let title = format!(" {} ", therapist.name);
    frame.render_widget(Paragraph::new(lines).block(panel(title, palette)), area);
}
