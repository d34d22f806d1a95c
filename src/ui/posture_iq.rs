//! Posture analysis: camera prompt, spinner, report and exercises.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::helpers::{panel, progress_bar, spinner};
use super::{with_global_keys, KeyHints, RenderContext};
use crate::models::{AreaStatus, PostureReport, Priority};
use crate::screens::{PostureIqScreen, PostureView};

const CAMERA_KEYS: [(&str, &str); 2] = [("Enter", "Analyze"), ("Esc", "Home")];
const ANALYZING_KEYS: [(&str, &str); 1] = [("Esc", "Home")];
const RESULTS_KEYS: [(&str, &str); 3] = [("e", "Exercises"), ("n", "New analysis"), ("Esc", "Home")];
const EXERCISES_KEYS: [(&str, &str); 2] = [("n", "New analysis"), ("Esc", "Results")];

pub fn render_posture_iq(
    frame: &mut Frame,
    area: Rect,
    screen: &PostureIqScreen,
    ctx: &RenderContext<'_>,
) -> KeyHints {
    let palette = &ctx.palette;
    match screen.view() {
        PostureView::Camera => {
            let lines = vec![
                Line::default(),
                Line::from("┌──────────────┐"),
                Line::from("│      ◯       │"),
                Line::from("│     /|\\      │"),
                Line::from("│     / \\      │"),
                Line::from("└──────────────┘"),
                Line::default(),
                Line::from(Span::styled(
                    "Stand sideways, full body in frame",
                    Style::default().fg(palette.muted),
                )),
                Line::from(Span::styled(
                    "[ Start Analysis ]",
                    Style::default().fg(palette.primary).add_modifier(Modifier::BOLD),
                )),
            ];
            frame.render_widget(
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .block(panel(" Camera ", palette)),
                area,
            );
            with_global_keys(&CAMERA_KEYS)
        }
        PostureView::Analyzing { .. } => {
            let lines = vec![
                Line::default(),
                Line::from(Span::styled(
                    format!("{} Analyzing your posture…", spinner(ctx.tick)),
                    Style::default().fg(palette.primary),
                )),
                Line::from(Span::styled(
                    "Checking head, shoulders, spine, hips and knees",
                    Style::default().fg(palette.muted),
                )),
            ];
            frame.render_widget(
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .block(panel(" Analysis ", palette)),
                area,
            );
            with_global_keys(&ANALYZING_KEYS)
        }
        PostureView::Results { report } => {
            render_results(frame, area, report, ctx);
            with_global_keys(&RESULTS_KEYS)
        }
        PostureView::Exercises { .. } => {
            render_exercises(frame, area, ctx);
            with_global_keys(&EXERCISES_KEYS)
        }
    }
}

fn render_results(frame: &mut Frame, area: Rect, report: &PostureReport, ctx: &RenderContext<'_>) {
    let palette = &ctx.palette;
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Overall score ", Style::default().fg(palette.muted)),
            Span::styled(
                format!("{}/100", report.overall_score),
                Style::default().fg(palette.primary).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            progress_bar(report.overall_score, 20),
            Style::default().fg(palette.primary),
        )),
        Line::default(),
    ];
    for area_score in &report.areas {
        let status_style = match area_score.status {
            AreaStatus::Excellent => Style::default().fg(palette.success),
            AreaStatus::Good => Style::default().fg(palette.primary),
            AreaStatus::Moderate => Style::default().fg(palette.warning),
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{:<14}", area_score.name)),
            Span::styled(format!("{:>3} ", area_score.score), status_style),
            Span::styled(format!("{:<10}", area_score.status.label()), status_style),
            Span::styled(area_score.issue.as_str(), Style::default().fg(palette.muted)),
        ]));
    }
    frame.render_widget(Paragraph::new(lines).block(panel(" Results ", palette)), area);
}

fn render_exercises(frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
    let palette = &ctx.palette;
    let mut lines = Vec::new();
    for recommendation in ctx.content.recommendations() {
        let priority_style = match recommendation.priority {
            Priority::High => Style::default().fg(palette.danger),
            Priority::Medium => Style::default().fg(palette.warning),
            Priority::Low => Style::default().fg(palette.muted),
        };
        lines.push(Line::from(vec![
            Span::styled(
                recommendation.title.as_str(),
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", recommendation.priority.label()), priority_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", recommendation.description),
            Style::default().fg(palette.muted),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {} · {}", recommendation.duration, recommendation.frequency),
            Style::default().fg(palette.muted),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines).block(panel(" Recommended Exercises ", palette)),
        area,
    );
}
