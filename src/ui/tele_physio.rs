//! Teleconsultation: conversation list or one chat with a draft line.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::helpers::{panel, row_style, truncate_string};
use super::{with_global_keys, KeyHints, RenderContext};
use crate::models::{Conversation, MessageKind, Presence};
use crate::screens::{ChatView, TelePhysioScreen};

const LIST_KEYS: [(&str, &str); 3] = [("↑↓", "Move"), ("Enter", "Open"), ("Esc", "Home")];
const CHAT_KEYS: [(&str, &str); 2] = [("Enter", "Send"), ("Esc", "Back")];

pub fn render_tele_physio(
    frame: &mut Frame,
    area: Rect,
    screen: &TelePhysioScreen,
    ctx: &RenderContext<'_>,
) -> KeyHints {
    match screen.view() {
        ChatView::ConversationList => {
            render_conversations(frame, area, screen, ctx);
            with_global_keys(&LIST_KEYS)
        }
        ChatView::ActiveChat(_) => {
            if let Some(conversation) = screen.active(ctx.content) {
                render_chat(frame, area, screen, conversation, ctx);
            }
            // Typing swallows the global shortcuts
            CHAT_KEYS.to_vec()
        }
    }
}

fn presence_style(presence: Presence, ctx: &RenderContext<'_>) -> Style {
    let palette = &ctx.palette;
    match presence {
        Presence::Online => Style::default().fg(palette.success),
        Presence::Away => Style::default().fg(palette.warning),
        Presence::Offline => Style::default().fg(palette.muted),
    }
}

fn render_conversations(
    frame: &mut Frame,
    area: Rect,
    screen: &TelePhysioScreen,
    ctx: &RenderContext<'_>,
) {
    let palette = &ctx.palette;
    let width = ctx.layout.max_title_length();
    let mut lines = Vec::new();
    for (index, conversation) in ctx.content.conversations().iter().enumerate() {
        let mut header = vec![
            Span::styled("● ", presence_style(conversation.status, ctx)),
            Span::styled(
                truncate_string(&conversation.name, width),
                row_style(index == screen.cursor(), palette),
            ),
            Span::styled(format!("  {}", conversation.time), Style::default().fg(palette.muted)),
        ];
        if conversation.unread > 0 {
            header.push(Span::styled(
                format!("  ({})", conversation.unread),
                Style::default().fg(palette.primary).add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(header));
        lines.push(Line::from(Span::styled(
            format!("  {}", truncate_string(&conversation.last_message, width * 2)),
            Style::default().fg(palette.muted),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines).block(panel(" Consultations ", palette)),
        area,
    );
}

fn render_chat(
    frame: &mut Frame,
    area: Rect,
    screen: &TelePhysioScreen,
    conversation: &Conversation,
    ctx: &RenderContext<'_>,
) {
    let palette = &ctx.palette;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let mut lines = Vec::new();
    for message in screen.transcript(ctx.content) {
        let (alignment, style) = if message.is_from_user() {
            (Alignment::Right, Style::default().fg(palette.primary))
        } else {
            (Alignment::Left, Style::default().fg(palette.text))
        };
        let body = match message.kind {
            MessageKind::Video => format!("▶ {}", message.content),
            MessageKind::Text => message.content.clone(),
        };
        lines.push(Line::from(Span::styled(body, style)).alignment(alignment));
        lines.push(
            Line::from(Span::styled(message.time.as_str(), Style::default().fg(palette.muted)))
                .alignment(alignment),
        );
    }
    // Keep the newest messages in view
    let inner_height = chunks[0].height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(inner_height) as u16;

    let title = Line::from(vec![
        Span::raw(format!(" {} ", conversation.name)),
        Span::styled(
            format!("{} ", conversation.status.label()),
            presence_style(conversation.status, ctx),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(panel(title, palette)),
        chunks[0],
    );

    let draft = Line::from(vec![
        Span::raw(screen.draft()),
        Span::styled("▏", Style::default().fg(palette.primary)),
    ]);
    frame.render_widget(
        Paragraph::new(draft).block(panel(" Message ", palette)),
        chunks[1],
    );
}
