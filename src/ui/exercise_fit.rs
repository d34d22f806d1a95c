//! Exercise library: category chips and cards, or one program's detail.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::helpers::{panel, progress_bar, row_style, truncate_string};
use super::{with_global_keys, KeyHints, RenderContext};
use crate::models::Exercise;
use crate::screens::{ExerciseFitScreen, ExerciseView};

const LIST_KEYS: [(&str, &str); 4] = [
    ("←→", "Category"),
    ("↑↓", "Move"),
    ("Enter", "Details"),
    ("Esc", "Home"),
];
const DETAIL_KEYS: [(&str, &str); 1] = [("Esc", "Back")];

pub fn render_exercise_fit(
    frame: &mut Frame,
    area: Rect,
    screen: &ExerciseFitScreen,
    ctx: &RenderContext<'_>,
) -> KeyHints {
    match screen.view() {
        ExerciseView::List => {
            render_list(frame, area, screen, ctx);
            with_global_keys(&LIST_KEYS)
        }
        ExerciseView::Detail(_) => {
            if let Some(exercise) = screen.detail(ctx.content) {
                render_detail(frame, area, exercise, ctx);
            }
            with_global_keys(&DETAIL_KEYS)
        }
    }
}

fn render_list(frame: &mut Frame, area: Rect, screen: &ExerciseFitScreen, ctx: &RenderContext<'_>) {
    let palette = &ctx.palette;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let chips: Vec<Span> = ctx
        .content
        .exercise_categories()
        .iter()
        .map(|category| {
            let active = category.id == screen.category();
            let style = if active {
                Style::default().fg(palette.primary).add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(palette.muted)
            };
            Span::styled(format!(" {} ", category.name), style)
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(chips)), chunks[0]);

    let width = ctx.layout.max_title_length();
    let mut lines = Vec::new();
    for (index, exercise) in screen.filtered(ctx.content).into_iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                truncate_string(&exercise.title, width),
                row_style(index == screen.cursor(), palette),
            ),
            Span::styled(
                format!("  {} · {}", exercise.duration, exercise.difficulty),
                Style::default().fg(palette.muted),
            ),
        ]));
        let mut detail = vec![Span::styled(
            format!("  {} moves · {} cal  ", exercise.moves, exercise.calories),
            Style::default().fg(palette.muted),
        )];
        if exercise.has_progress() {
            detail.push(Span::styled(
                format!("{} {}%  ", progress_bar(exercise.progress, 10), exercise.progress),
                Style::default().fg(palette.success),
            ));
        }
        detail.push(Span::styled(
            format!("[{}]", exercise.list_action()),
            Style::default().fg(palette.primary),
        ));
        lines.push(Line::from(detail));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No exercises in this category",
            Style::default().fg(palette.muted),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines).block(panel(" Exercise Library ", palette)),
        chunks[1],
    );
}

fn render_detail(frame: &mut Frame, area: Rect, exercise: &Exercise, ctx: &RenderContext<'_>) {
    let palette = &ctx.palette;
    let (about, stats) = ctx.layout.detail_panes(area);

    let description = vec![
        Line::from(Span::styled(
            exercise.title.as_str(),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(exercise.description.as_str()),
    ];
    frame.render_widget(
        Paragraph::new(description)
            .wrap(Wrap { trim: true })
            .block(panel(" About ", palette)),
        about,
    );

    let muted = Style::default().fg(palette.muted);
    let mut lines = vec![
        Line::from(vec![Span::styled("Duration   ", muted), Span::raw(exercise.duration.as_str())]),
        Line::from(vec![Span::styled("Difficulty ", muted), Span::raw(exercise.difficulty.as_str())]),
        Line::from(vec![Span::styled("Moves      ", muted), Span::raw(exercise.moves.to_string())]),
        Line::from(vec![Span::styled("Calories   ", muted), Span::raw(exercise.calories.to_string())]),
    ];
    if exercise.has_progress() {
        lines.push(Line::from(Span::styled(
            format!("{} {}%", progress_bar(exercise.progress, 16), exercise.progress),
            Style::default().fg(palette.success),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", exercise.detail_action()),
        Style::default().fg(palette.primary).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(Paragraph::new(lines).block(panel(" Session ", palette)), stats);
}
