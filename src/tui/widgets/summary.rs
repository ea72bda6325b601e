use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::calendar::ResolvedDay;
use crate::models::stats::{congregation_count, verses_read_today};
use crate::models::DailyEntry;
use crate::tui::theme::Palette;
use crate::utils::format::format_rupiah;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    entry: &DailyEntry,
    resolved: &ResolvedDay,
) {
    let block = Block::default()
        .title(Span::styled(" Ringkasan Amal Ramadhan ", palette.accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border())
        .style(palette.surface());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(inner);

    let stats = [
        (
            congregation_count(entry).to_string(),
            "Sholat Jamaah",
            palette.accent(),
        ),
        (
            verses_read_today(entry).to_string(),
            "Ayat Dibaca",
            palette.blue(),
        ),
        (format_rupiah(entry.infaq), "Total Infaq", palette.amber()),
        (
            resolved.remaining_days().to_string(),
            "Hari Tersisa",
            palette.rose(),
        ),
    ];

    for (cell, (value, label, style)) in cells.iter().zip(stats) {
        render_stat(frame, *cell, palette, &value, label, style);
    }
}

fn render_stat(frame: &mut Frame, area: Rect, palette: &Palette, value: &str, label: &str, style: Style) {
    let text = vec![
        Line::from(Span::styled(value.to_string(), style.add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(label.to_string(), palette.dim())),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}
