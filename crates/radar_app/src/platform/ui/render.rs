use chrono::Local;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use radar_core::{CardView, DashboardViewModel, LoadState, NewsRowView};

use crate::platform::format;

use super::constants::{INTL_ROWS, NEWS_ROWS};
use super::layout::{card_rects, CardRects};

/// Draws the whole dashboard and returns the card rectangles for mouse
/// hit-testing.
pub fn render(frame: &mut Frame, view: &DashboardViewModel, scroll: usize) -> CardRects {
    let [header, body] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(frame.area());
    render_header(frame, header, view);

    match &view.load {
        LoadState::Loading => {
            render_notice(frame, body, "Loading topics...");
            CardRects::default()
        }
        LoadState::Failed(message) => {
            render_error(frame, body, message);
            CardRects::default()
        }
        LoadState::Ready if view.cards.is_empty() => {
            render_notice(frame, body, "No topics configured yet");
            CardRects::default()
        }
        LoadState::Ready => {
            let rects = card_rects(body, view, scroll);
            for (rect, card) in rects.iter().zip(view.cards.iter().skip(scroll)) {
                render_card(frame, rect.area, card);
            }
            rects
        }
    }
}

fn render_header(frame: &mut Frame, area: Rect, view: &DashboardViewModel) {
    let title = Line::from(vec![
        Span::styled("Topic Radar", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("  {} topics", view.topic_count)),
        Span::styled(
            format!(
                "  updated {}",
                format::last_update_label(view.last_update.as_deref())
            ),
            dim(),
        ),
    ]);

    let news_hint = if view.news_refresh_busy {
        "[r] refreshing..."
    } else {
        "[r] refresh news"
    };
    let summary_hint = if view.summary_refresh_busy {
        "[s] refreshing..."
    } else {
        "[s] refresh summaries"
    };
    let hints = Line::from(Span::styled(
        format!("{news_hint}  {summary_hint}  [R] reload  [up/down] scroll  [q] quit"),
        dim(),
    ));

    frame.render_widget(Paragraph::new(vec![title, hints]), area);
}

fn render_card(frame: &mut Frame, area: Rect, card: &CardView) {
    let border_style = if card.drop_target {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else if card.dragging {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let icon = if card.icon.is_empty() { "*" } else { card.icon.as_str() };
    let name = if card.name.is_empty() {
        "Unnamed topic"
    } else {
        card.name.as_str()
    };
    let title = Line::from(vec![
        Span::styled("== ", dim()),
        Span::raw(format!("{icon} ")),
        Span::styled(name.to_string(), Style::default().add_modifier(Modifier::BOLD)),
    ]);

    let block = Block::bordered().border_style(border_style).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [keywords, summary_label, summary, news_label, news, intl_label, intl] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(NEWS_ROWS as u16),
            Constraint::Length(1),
            Constraint::Length(INTL_ROWS as u16),
        ])
        .areas(inner);

    let keyword_line = if card.keywords.is_empty() {
        "no keywords".to_string()
    } else {
        format!("keywords: {}", card.keywords.join(", "))
    };
    frame.render_widget(Paragraph::new(Span::styled(keyword_line, dim())), keywords);

    let badge = format::summary_age_badge(card.summary_updated.as_deref(), Local::now());
    frame.render_widget(
        Paragraph::new(section_label("Latest summary", &badge, false)),
        summary_label,
    );
    let summary_text = if card.summary.is_empty() {
        "(not yet generated)"
    } else {
        card.summary.as_str()
    };
    frame.render_widget(
        Paragraph::new(summary_text).wrap(Wrap { trim: true }),
        summary,
    );

    frame.render_widget(
        Paragraph::new(section_label("Related news", "", card.news_updated)),
        news_label,
    );
    frame.render_widget(news_feed(&card.news, NEWS_ROWS, "no related news yet"), news);

    frame.render_widget(
        Paragraph::new(section_label(
            "International coverage",
            "",
            card.international_updated,
        )),
        intl_label,
    );
    frame.render_widget(
        news_feed(&card.international, INTL_ROWS, "no international coverage yet"),
        intl,
    );
}

fn section_label(label: &str, badge: &str, updated: bool) -> Line<'static> {
    let mut spans = vec![Span::styled(
        label.to_string(),
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
    )];
    if !badge.is_empty() {
        spans.push(Span::styled(format!("  {badge}"), dim()));
    }
    if updated {
        spans.push(Span::styled(
            "  * new".to_string(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

fn news_feed(items: &[NewsRowView], limit: usize, empty_text: &str) -> Paragraph<'static> {
    if items.is_empty() {
        return Paragraph::new(Span::styled(
            empty_text.to_string(),
            dim().add_modifier(Modifier::ITALIC),
        ));
    }

    let lines = items
        .iter()
        .take(limit)
        .map(|item| {
            let time = if item.time.is_empty() { "--:--" } else { &item.time };
            let source = if item.source.is_empty() {
                "unknown"
            } else {
                &item.source
            };
            let title = if item.title.is_empty() {
                "(untitled)"
            } else {
                &item.title
            };
            let mut spans = vec![
                Span::styled(format!("{time} "), dim()),
                Span::styled(format!("{source}  "), Style::default().fg(Color::Cyan)),
                Span::raw(title.to_string()),
            ];
            if let Some(original) = &item.title_original {
                if !original.is_empty() {
                    spans.push(Span::styled(format!("  ({original})"), dim()));
                }
            }
            Line::from(spans)
        })
        .collect::<Vec<_>>();
    Paragraph::new(lines)
}

fn render_notice(frame: &mut Frame, area: Rect, text: &str) {
    frame.render_widget(
        Paragraph::new(Span::styled(text.to_string(), dim())).alignment(Alignment::Center),
        area,
    );
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::from(Span::styled(
            "Failed to load topics",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::raw(message.to_string())),
        Line::from(Span::styled("press R to retry", dim())),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}
