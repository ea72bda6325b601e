use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::store::INFAQ_PRESETS;
use crate::tui::theme::Palette;
use crate::utils::format::{format_rupiah, group_thousands};

pub fn render(frame: &mut Frame, area: Rect, palette: &Palette, amount: u64) {
    let block = Block::default()
        .title(Span::styled(" Infaq Hari Ini ", palette.accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border())
        .style(palette.surface());

    let mut presets = vec![Span::styled("  ", palette.dim())];
    for (i, preset) in INFAQ_PRESETS.iter().enumerate() {
        presets.push(Span::styled(format!("[{}]", i + 1), palette.accent()));
        presets.push(Span::styled(
            format!(" +{}  ", group_thousands(*preset)),
            palette.dim(),
        ));
    }

    let lines = vec![
        Line::from(vec![
            Span::styled("  ", palette.dim()),
            Span::styled(
                format_rupiah(amount),
                palette.amber().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(presets),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
