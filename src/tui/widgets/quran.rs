use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::stats::progress_percent;
use crate::models::DailyEntry;
use crate::reference::surah_by_index;
use crate::tui::theme::Palette;
use crate::utils::format::progress_bar;

pub fn render(frame: &mut Frame, area: Rect, palette: &Palette, entry: &DailyEntry) {
    let block = Block::default()
        .title(Span::styled(" Progres Tilawah ", palette.accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border())
        .style(palette.surface());

    let Ok(surah) = surah_by_index(entry.quran.surah_index) else {
        frame.render_widget(Paragraph::new("").block(block), area);
        return;
    };

    let inner_width = area.width.saturating_sub(10) as usize;
    let percent = progress_percent(entry);

    let lines = vec![
        Line::from(vec![
            Span::styled("  Surah  ", palette.dim()),
            Span::styled(
                format!("{}. {}", surah.number, surah.name),
                palette.bold(),
            ),
            Span::styled(format!("  {}", surah.name_arabic), palette.dim()),
        ]),
        Line::from(vec![
            Span::styled("  Ayat   ", palette.dim()),
            Span::styled(format!("{}", entry.quran.ayah), palette.blue()),
            Span::styled(format!(" / {} ayat", surah.verses), palette.dim()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", palette.dim()),
            Span::styled(progress_bar(percent, inner_width.min(30)), palette.accent()),
            Span::styled(format!(" {}%", percent), palette.accent()),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
