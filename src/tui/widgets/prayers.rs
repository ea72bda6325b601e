use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::models::{DailyPrayerRecord, ImsakiyahTime, PrayerSlot, PrayerStatus};
use crate::tui::theme::Palette;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    prayers: &DailyPrayerRecord,
    times: &ImsakiyahTime,
    location: &str,
    focused_idx: usize,
) {
    let block = Block::default()
        .title(Span::styled(" Jadwal Sholat & Tracker ", palette.accent()))
        .title_bottom(Line::from(vec![
            Span::styled(format!(" Imsak {} ", times.imsak), palette.amber()),
            Span::styled(format!("· {} ", location), palette.dim()),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.accent())
        .style(palette.surface());

    let items: Vec<ListItem> = PrayerSlot::all()
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let is_focused = i == focused_idx;
            let status = prayers.get(*slot);

            let icon = match status {
                PrayerStatus::Jamaah => "●",
                PrayerStatus::Sendiri => "◐",
                PrayerStatus::Missed => "✗",
                PrayerStatus::None => "○",
            };

            let name_style = if is_focused {
                palette.accent().add_modifier(Modifier::BOLD)
            } else {
                palette.bold()
            };
            let marker = if is_focused { "▸ " } else { "  " };

            let line = Line::from(vec![
                Span::styled(marker, palette.accent()),
                Span::styled(format!("{:<9}", slot.display_name()), name_style),
                Span::styled(format!("{:<7}", times.time_for(*slot)), palette.dim()),
                Span::styled(icon, palette.status(status)),
                Span::styled(format!("  {}", status.label()), palette.status(status)),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
