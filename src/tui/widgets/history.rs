use ratatui::{
    layout::{Constraint, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

use crate::models::HistoryRow;
use crate::tui::theme::Palette;
use crate::utils::format::format_rupiah;

pub fn render(frame: &mut Frame, area: Rect, palette: &Palette, rows: &[HistoryRow]) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(" Riwayat Ibadah ", palette.accent()))
        .title_bottom(Line::from(Span::styled(
            format!(
                " {} hari tersimpan  ·  [e] ekspor CSV  ·  [Esc] tutup ",
                rows.len()
            ),
            palette.dim(),
        )))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.accent())
        .style(palette.surface());

    if rows.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("  Belum ada data tercatat.", palette.dim())),
        ])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Tanggal"),
        Cell::from("Sholat"),
        Cell::from("Tilawah Terakhir"),
        Cell::from("Infaq"),
    ])
    .style(palette.dim().add_modifier(Modifier::BOLD));

    let body: Vec<Row> = rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(Span::styled(row.date.clone(), palette.bold())),
                Cell::from(Span::styled(row.prayers.clone(), palette.accent())),
                Cell::from(Span::styled(row.quran.clone(), palette.dim())),
                Cell::from(Span::styled(format_rupiah(row.infaq), palette.amber())),
            ])
        })
        .collect();

    let table = Table::new(
        body,
        [
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Min(20),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}
