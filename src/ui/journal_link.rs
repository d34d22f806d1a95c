//! Journal: search line, category chips, featured card and list; or one
//! article with related reading.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::helpers::{panel, row_style, stars, truncate_string};
use super::{with_global_keys, KeyHints, RenderContext};
use crate::models::Article;
use crate::screens::{ArticleView, JournalLinkScreen};

const LIST_KEYS: [(&str, &str); 6] = [
    ("/", "Search"),
    ("←→", "Category"),
    ("↑↓", "Move"),
    ("Enter", "Read"),
    ("b", "Bookmark"),
    ("Esc", "Home"),
];
const SEARCH_KEYS: [(&str, &str); 1] = [("Enter/Esc", "Done")];
const DETAIL_KEYS: [(&str, &str); 2] = [("b", "Bookmark"), ("Esc", "Back")];

pub fn render_journal_link(
    frame: &mut Frame,
    area: Rect,
    screen: &JournalLinkScreen,
    ctx: &RenderContext<'_>,
) -> KeyHints {
    match screen.view() {
        ArticleView::ArticleList => {
            render_list(frame, area, screen, ctx);
            if screen.is_searching() {
                SEARCH_KEYS.to_vec()
            } else {
                with_global_keys(&LIST_KEYS)
            }
        }
        ArticleView::ArticleDetail(_) => {
            if let Some(article) = screen.detail(ctx.content) {
                render_detail(frame, area, screen, article, ctx);
            }
            with_global_keys(&DETAIL_KEYS)
        }
    }
}

fn bookmark_mark(screen: &JournalLinkScreen, id: u32) -> &'static str {
    if screen.is_bookmarked(id) {
        "★"
    } else {
        "☆"
    }
}

fn render_list(frame: &mut Frame, area: Rect, screen: &JournalLinkScreen, ctx: &RenderContext<'_>) {
    let palette = &ctx.palette;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let search_style = if screen.is_searching() {
        Style::default().fg(palette.primary)
    } else {
        Style::default().fg(palette.muted)
    };
    let query = if screen.query().is_empty() && !screen.is_searching() {
        "Search articles, authors, topics".to_string()
    } else {
        format!("{}▏", screen.query())
    };
    frame.render_widget(
        Paragraph::new(Span::styled(query, search_style)).block(panel(
            format!(" Search · {} saved ", screen.bookmark_count()),
            palette,
        )),
        chunks[0],
    );

    let chips: Vec<Span> = ctx
        .content
        .article_categories()
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let style = if index == screen.category_index() {
                Style::default().fg(palette.primary).add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(palette.muted)
            };
            Span::styled(format!(" {name} "), style)
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(chips)), chunks[1]);

    let width = ctx.layout.max_title_length();
    let mut lines = Vec::new();
    let mut index = 0;
    if let Some(featured) = screen.featured(ctx.content) {
        lines.push(Line::from(Span::styled(
            "FEATURED",
            Style::default().fg(palette.warning).add_modifier(Modifier::BOLD),
        )));
        lines.extend(article_lines(screen, featured, index == screen.cursor(), width, ctx));
        lines.push(Line::default());
        index += 1;
    }
    let listed = screen.listed(ctx.content);
    if listed.is_empty() && index == 0 {
        lines.push(Line::from(Span::styled(
            "No articles match",
            Style::default().fg(palette.muted),
        )));
    }
    for article in listed {
        lines.extend(article_lines(screen, article, index == screen.cursor(), width, ctx));
        index += 1;
    }
    frame.render_widget(
        Paragraph::new(lines).block(panel(" Articles ", palette)),
        chunks[2],
    );
}

fn article_lines<'a>(
    screen: &JournalLinkScreen,
    article: &'a Article,
    under_cursor: bool,
    width: usize,
    ctx: &RenderContext<'_>,
) -> [Line<'a>; 2] {
    let palette = &ctx.palette;
    [
        Line::from(vec![
            Span::styled(format!("{} ", bookmark_mark(screen, article.id)), Style::default().fg(palette.warning)),
            Span::styled(truncate_string(&article.title, width), row_style(under_cursor, palette)),
        ]),
        Line::from(Span::styled(
            format!(
                "  {} · {} · {} · {}",
                article.author, article.category, article.read_time, article.date
            ),
            Style::default().fg(palette.muted),
        )),
    ]
}

fn render_detail(
    frame: &mut Frame,
    area: Rect,
    screen: &JournalLinkScreen,
    article: &Article,
    ctx: &RenderContext<'_>,
) {
    let palette = &ctx.palette;
    let (body_area, side_area) = ctx.layout.detail_panes(area);
    let muted = Style::default().fg(palette.muted);

    let mut body = vec![
        Line::from(Span::styled(
            article.title.as_str(),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} · {} · {}", article.author, article.date, article.read_time),
            muted,
        )),
        Line::default(),
        Line::from(Span::styled(
            article.excerpt.as_str(),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
    ];
    for paragraph in ctx.content.article_body() {
        body.push(Line::default());
        body.push(Line::from(paragraph.as_str()));
    }
    frame.render_widget(
        Paragraph::new(body)
            .wrap(Wrap { trim: true })
            .block(panel(format!(" {} {} ", bookmark_mark(screen, article.id), article.category), palette)),
        body_area,
    );

    let mut side = vec![
        Line::from(vec![
            Span::styled(stars(article.rating), Style::default().fg(palette.warning)),
            Span::styled(format!(" {:.1}", article.rating), muted),
        ]),
        Line::from(Span::styled(format!("{} views · {}", article.views, article.difficulty), muted)),
        Line::default(),
        Line::from(Span::styled(
            "Related",
            Style::default().fg(palette.primary).add_modifier(Modifier::BOLD),
        )),
    ];
    let width = ctx.layout.max_title_length();
    for related in screen.related(ctx.content) {
        side.push(Line::from(format!("· {}", truncate_string(&related.title, width))));
    }
    frame.render_widget(Paragraph::new(side).block(panel(" Details ", palette)), side_area);
}
