use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::calendar::ResolvedDay;
use crate::tui::theme::Palette;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    resolved: &ResolvedDay,
    hijri_str: &str,
    insight: &str,
) {
    let gregorian_str = resolved.date.format("%A, %d %B %Y").to_string();

    let title_line = Line::from(vec![
        Span::styled("  رمضان  ", palette.accent().add_modifier(Modifier::BOLD)),
        Span::styled("My Ramadhan Tracker", palette.bold()),
        Span::styled("  ·  Marhaban Ya Ramadhan 1447 H", palette.dim()),
    ]);

    let day_style = if resolved.is_active() {
        palette.accent().add_modifier(Modifier::BOLD)
    } else {
        palette.amber().add_modifier(Modifier::BOLD)
    };

    let mut date_spans = vec![
        Span::styled(format!(" {} ", resolved.label()), day_style),
        Span::styled("  ·  ", palette.dim()),
        Span::styled(gregorian_str, palette.dim()),
    ];
    if !hijri_str.is_empty() {
        date_spans.push(Span::styled("  ·  ", palette.dim()));
        date_spans.push(Span::styled(hijri_str, palette.amber()));
    }

    let insight_line = Line::from(Span::styled(
        format!("“{}”", insight),
        palette.dim().add_modifier(Modifier::ITALIC),
    ));

    let text = vec![title_line, Line::from(date_spans), insight_line];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.accent().add_modifier(Modifier::BOLD))
        .style(palette.base());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
