use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::theme::Palette;

pub fn render(frame: &mut Frame, area: Rect, palette: &Palette, message: Option<&str>) {
    if let Some(message) = message {
        let paragraph = Paragraph::new(Line::from(Span::styled(message, palette.accent())))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let hints = vec![
        ("[j/s/x]", " jamaah/sendiri/lewat  "),
        ("[[ ]]", " surah  "),
        ("[+/-]", " ayat  "),
        ("[i]", " infaq  "),
        ("[h]", " riwayat  "),
        ("[e]", " ekspor  "),
        ("[t]", " tema  "),
        ("[?]", " help  "),
        ("[Esc]", " quit"),
    ];

    let mut spans = Vec::new();
    for (key, label) in &hints {
        spans.push(Span::styled(*key, palette.accent()));
        spans.push(Span::styled(*label, palette.dim()));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
