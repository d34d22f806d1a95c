//! Shared rendering pieces: header, footer, text helpers.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::Palette;
use crate::environment::{hint, HintStore};
use crate::traits::PresentationHost;

/// Spinner frames for the analysis animation.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick as usize / 4) % SPINNER_FRAMES.len()]
}

/// Get inner rect with margin
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

/// Truncate to `max_width` display columns, ending in "…" when cut.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Fixed-width text bar, e.g. `█████░░░░░` for 50% at width 10.
pub fn progress_bar(percent: u8, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Five-star rating rounded to the nearest whole star.
pub fn stars(rating: f32) -> String {
    let full = rating.round().clamp(0.0, 5.0) as usize;
    format!("{}{}", "★".repeat(full), "☆".repeat(5 - full))
}

/// Bordered block in the palette's colors.
pub fn panel<'a>(title: impl Into<Line<'a>>, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(title)
        .style(Style::default().fg(palette.text).bg(palette.surface))
}

/// Header bar painted in the theme-color accent.
///
/// The left side shows the screen title, the right side the status-bar
/// style hint.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    subtitle: &str,
    hints: &HintStore,
    palette: &Palette,
) {
    let style = Style::default().fg(palette.on_accent()).bg(palette.accent);
    let status = hints.hint(hint::STATUS_BAR_STYLE).unwrap_or_default();
    let theme = hints.hint(hint::THEME_COLOR).unwrap_or_default();

    let left = Line::from(vec![
        Span::styled(format!(" {title}"), style.add_modifier(Modifier::BOLD)),
        Span::styled(format!("  {subtitle}"), style),
    ]);
    let right = Line::from(Span::styled(format!("{theme} · {status} "), style));

    let block = if area.height >= 3 {
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette.border).bg(palette.accent))
            .style(style)
    } else {
        Block::default().style(style)
    };
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(left).style(style), inner);
    frame.render_widget(
        Paragraph::new(right).alignment(Alignment::Right).style(style),
        inner,
    );
}

/// One-line key hints, e.g. `[Enter] Open  [Esc] Back`.
pub fn render_footer(frame: &mut Frame, area: Rect, keys: &[(&str, &str)], palette: &Palette) {
    let mut spans = Vec::with_capacity(keys.len() * 2);
    for (key, action) in keys {
        spans.push(Span::styled(
            format!(" [{key}]"),
            Style::default().fg(palette.primary).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {action} "), Style::default().fg(palette.muted)));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.background)),
        area,
    );
}

/// Style for a list row, highlighted when under the cursor.
pub fn row_style(selected: bool, palette: &Palette) -> Style {
    if selected {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(palette.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Posture", 10), "Posture");
        assert_eq!(truncate_string("Sports Medicine", 7), "Sports…");
        assert_eq!(truncate_string("", 3), "");
    }

    #[test]
    fn test_truncate_respects_wide_chars() {
        let cut = truncate_string("理学療法士です", 6);
        assert!(cut.width() <= 6);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0, 4), "░░░░");
        assert_eq!(progress_bar(50, 4), "██░░");
        assert_eq!(progress_bar(100, 4), "████");
        assert_eq!(progress_bar(250, 4), "████");
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(4.9), "★★★★★");
        assert_eq!(stars(4.4), "★★★★☆");
        assert_eq!(stars(-1.0), "☆☆☆☆☆");
    }

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner(0), SPINNER_FRAMES[0]);
        assert_eq!(spinner(4), SPINNER_FRAMES[1]);
        assert_eq!(spinner(40), SPINNER_FRAMES[0]);
    }
}
