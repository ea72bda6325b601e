use anyhow::Result;
use chrono::{Duration, Local, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::path::Path;

use crate::calendar::{self, ResolvedDay};
use crate::config::AppConfig;
use crate::export::write_export;
use crate::models::stats::history;
use crate::models::{DailyEntry, ImsakiyahTime, PrayerSlot, PrayerStatus};
use crate::prayer_times::{resolve_times, TimesSource};
use crate::reference::{insight, SURAHS};
use crate::store::{Tracker, INFAQ_PRESETS};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme::{palette, Palette};
use crate::tui::widgets::{header, history as history_widget, infaq, prayers, quran, statusbar, summary};
use crate::utils::hijri::hijri_label;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    History,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    AyahInput,
    InfaqInput,
}

pub struct App {
    tracker: Tracker,
    config: AppConfig,
    /// Difference between the instant the app resolves against and the wall clock.
    clock_offset: Duration,
    pub view: View,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub focus_idx: usize,
    pub message: Option<String>,
    pub should_quit: bool,

    // Cached state for the resolved day
    pub resolved: ResolvedDay,
    pub entry: DailyEntry,
    pub times: ImsakiyahTime,
    pub times_source: TimesSource,
    pub hijri_str: String,
    pub insight: String,
}

impl App {
    pub fn new(tracker: Tracker, config: AppConfig, clock_offset: Duration) -> Self {
        let now = Local::now().naive_local() + clock_offset;
        let resolved = calendar::resolve(now, config.ramadan.start_date, config.ramadan.policy());
        let (times, times_source) =
            resolve_times(config.location.as_ref(), resolved.day, resolved.date);
        let entry = tracker.entry(&resolved.date_key());

        App {
            hijri_str: hijri_label(resolved.date),
            insight: insight(resolved.day),
            tracker,
            config,
            clock_offset,
            view: View::Dashboard,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            focus_idx: 0,
            message: None,
            should_quit: false,
            resolved,
            entry,
            times,
            times_source,
        }
    }

    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local() + self.clock_offset
    }

    fn date_key(&self) -> String {
        self.resolved.date_key()
    }

    fn focused_slot(&self) -> PrayerSlot {
        PrayerSlot::all()[self.focus_idx]
    }

    /// Re-resolve the tracked day; reload everything when it changed.
    pub fn tick(&mut self) {
        let resolved = calendar::resolve(
            self.now(),
            self.config.ramadan.start_date,
            self.config.ramadan.policy(),
        );
        if resolved != self.resolved {
            log::info!("Tracked day moved to {}", resolved.date_key());
            self.resolved = resolved;
            let (times, source) = resolve_times(
                self.config.location.as_ref(),
                self.resolved.day,
                self.resolved.date,
            );
            self.times = times;
            self.times_source = source;
            self.hijri_str = hijri_label(self.resolved.date);
            self.insight = insight(self.resolved.day);
            self.entry = self.tracker.entry(&self.date_key());
        }
    }

    /// Record the outcome of a tracker mutation.
    fn settle(&mut self, result: Result<DailyEntry>) {
        match result {
            Ok(entry) => self.entry = entry,
            Err(e) => {
                log::error!("Could not save entry: {:#}", e);
                self.message = Some(format!("✗ Gagal menyimpan: {}", e));
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Normal => match self.view {
                View::Dashboard => self.handle_dashboard_key(key),
                View::History => self.handle_history_key(key),
                View::Help => self.view = View::Dashboard,
            },
            InputMode::AyahInput | InputMode::InfaqInput => self.handle_input_key(key),
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        self.message = None;
        let date_key = self.date_key();

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.view = View::Help,
            KeyCode::Char('h') => self.view = View::History,
            KeyCode::Char('e') => self.export(),
            KeyCode::Char('t') => {
                if let Err(e) = self.tracker.toggle_theme() {
                    log::error!("Could not save theme: {:#}", e);
                    self.message = Some(format!("✗ Gagal menyimpan tema: {}", e));
                }
            }

            KeyCode::Up => {
                if self.focus_idx > 0 {
                    self.focus_idx -= 1;
                }
            }
            KeyCode::Down => {
                if self.focus_idx + 1 < PrayerSlot::all().len() {
                    self.focus_idx += 1;
                }
            }
            KeyCode::Char(c @ ('j' | 's' | 'x')) => {
                let status = match c {
                    'j' => PrayerStatus::Jamaah,
                    's' => PrayerStatus::Sendiri,
                    _ => PrayerStatus::Missed,
                };
                let slot = self.focused_slot();
                let result = self.tracker.toggle_prayer(&date_key, slot, status);
                self.settle(result);
            }

            KeyCode::Char('[') => {
                let idx = self.entry.quran.surah_index;
                if idx > 0 {
                    let result = self.tracker.select_surah(&date_key, idx - 1);
                    self.settle(result);
                }
            }
            KeyCode::Char(']') => {
                let idx = self.entry.quran.surah_index;
                if idx + 1 < SURAHS.len() {
                    let result = self.tracker.select_surah(&date_key, idx + 1);
                    self.settle(result);
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let result = self.tracker.step_ayah(&date_key, 1);
                self.settle(result);
            }
            KeyCode::Char('-') => {
                let result = self.tracker.step_ayah(&date_key, -1);
                self.settle(result);
            }
            KeyCode::Char('a') => {
                self.input_mode = InputMode::AyahInput;
                self.input_buffer.clear();
            }

            KeyCode::Char('i') => {
                self.input_mode = InputMode::InfaqInput;
                self.input_buffer.clear();
            }
            KeyCode::Char(c @ '1'..='4') => {
                let idx = c as usize - '1' as usize;
                let result = self.tracker.add_infaq(&date_key, INFAQ_PRESETS[idx]);
                self.settle(result);
            }
            KeyCode::Char('0') => {
                let result = self.tracker.reset_infaq(&date_key);
                self.settle(result);
            }
            _ => {}
        }
    }

    fn handle_history_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('q') => {
                self.view = View::Dashboard;
            }
            KeyCode::Char('e') => self.export(),
            _ => {}
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
            }
            KeyCode::Enter => {
                let date_key = self.date_key();
                let result = match self.input_mode {
                    InputMode::AyahInput => self.tracker.set_ayah_input(&date_key, &self.input_buffer),
                    _ => self.tracker.set_infaq_input(&date_key, &self.input_buffer),
                };
                self.settle(result);
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => self.input_buffer.push(c),
            KeyCode::Char(c @ ('.' | ','))
                if self.input_mode == InputMode::InfaqInput =>
            {
                self.input_buffer.push(c)
            }
            _ => {}
        }
    }

    fn export(&mut self) {
        match write_export(self.tracker.store(), Path::new(".")) {
            Ok(path) => {
                log::info!("Exported {} days to {}", self.tracker.store().len(), path.display());
                self.message = Some(format!("✓ Diekspor ke {}", path.display()));
            }
            Err(e) => {
                log::error!("Export failed: {:#}", e);
                self.message = Some(format!("✗ Ekspor gagal: {}", e));
            }
        }
    }

    // ─── Rendering ───────────────────────────────────────────────────────────

    pub fn draw(&self, frame: &mut Frame) {
        let palette = palette(self.tracker.theme());
        frame.render_widget(Block::default().style(palette.base()), frame.area());

        self.draw_dashboard(frame, &palette);

        match self.view {
            View::Dashboard => {}
            View::History => {
                let rows = history(self.tracker.store());
                history_widget::render(frame, popup(frame.area(), 80, 70), &palette, &rows);
            }
            View::Help => self.draw_help_overlay(frame, &palette),
        }

        if self.input_mode != InputMode::Normal {
            self.draw_input(frame, &palette);
        }
    }

    fn draw_dashboard(&self, frame: &mut Frame, palette: &Palette) {
        let area = frame.area();

        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Length(4), // summary
                Constraint::Min(10),   // body
                Constraint::Length(1), // statusbar
            ])
            .split(area);

        header::render(frame, outer[0], palette, &self.resolved, &self.hijri_str, &self.insight);
        summary::render(frame, outer[1], palette, &self.entry, &self.resolved);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(outer[2]);

        let location = match self.times_source {
            TimesSource::Computed => self.config.location_label(),
            TimesSource::Table => "Jakarta (Default)".to_string(),
        };
        prayers::render(
            frame,
            body[0],
            palette,
            &self.entry.prayers,
            &self.times,
            &location,
            self.focus_idx,
        );

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(5)])
            .split(body[1]);

        quran::render(frame, right[0], palette, &self.entry);
        infaq::render(frame, right[1], palette, self.entry.infaq);

        statusbar::render(frame, outer[3], palette, self.message.as_deref());
    }

    fn draw_help_overlay(&self, frame: &mut Frame, palette: &Palette) {
        let popup_area = popup(frame.area(), 60, 80);
        frame.render_widget(Clear, popup_area);

        let bindings = [
            ("[↑ ↓]", "Pilih sholat"),
            ("[j] [s] [x]", "Jamaah / Munfarid / Lewat (tekan lagi untuk hapus)"),
            ("[ [ ] ]", "Surah sebelumnya / berikutnya"),
            ("[+] [-]", "Ayat maju / mundur"),
            ("[a]", "Ketik nomor ayat"),
            ("[i]", "Ketik nominal infaq"),
            ("[1]-[4]", "Tambah infaq cepat"),
            ("[0]", "Reset infaq hari ini"),
            ("[h]", "Riwayat ibadah"),
            ("[e]", "Ekspor CSV"),
            ("[t]", "Ganti tema terang / gelap"),
            ("[?]", "Bantuan"),
            ("[Esc]", "Keluar"),
        ];

        let mut help_text = vec![
            Line::from(Span::styled(
                "  Tombol",
                palette.accent().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (key, desc) in bindings {
            help_text.push(Line::from(vec![
                Span::styled(format!("  {:<14}", key), palette.accent()),
                Span::styled(desc, palette.dim()),
            ]));
        }

        let block = Block::default()
            .title(Span::styled(" Bantuan ", palette.accent()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.accent())
            .style(palette.surface());

        frame.render_widget(Paragraph::new(help_text).block(block), popup_area);
    }

    fn draw_input(&self, frame: &mut Frame, palette: &Palette) {
        let area = frame.area();
        let popup_area = Rect {
            x: area.width / 4,
            y: (area.height / 2).saturating_sub(3),
            width: area.width / 2,
            height: 5.min(area.height),
        };
        frame.render_widget(Clear, popup_area);

        let (title, prompt) = match self.input_mode {
            InputMode::AyahInput => (" Ayat Terakhir ", "  Ayat: "),
            _ => (" Nominal Infaq ", "  Rp "),
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(prompt, palette.dim()),
                Span::styled(
                    self.input_buffer.as_str(),
                    palette.amber().add_modifier(Modifier::BOLD),
                ),
                Span::styled("█", palette.amber()),
            ]),
            Line::from(Span::styled(
                "  [Enter] simpan  ·  [Esc] batal",
                palette.dim(),
            )),
        ];

        let block = Block::default()
            .title(Span::styled(title, palette.accent()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.amber())
            .style(palette.surface());

        frame.render_widget(Paragraph::new(text).block(block), popup_area);
    }
}

/// A rectangle centred in `area`, sized as a percentage of it.
fn popup(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let scale = |len: u16, percent: u16| (u32::from(len) * u32::from(percent.min(100)) / 100) as u16;
    let width = scale(area.width, percent_x);
    let height = scale(area.height, percent_y);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Run the TUI event loop.
pub fn run(tracker: Tracker, config: AppConfig, clock_offset: Duration) -> Result<()> {
    let tick_rate = std::time::Duration::from_secs(config.display.tick_seconds.max(1));
    let mut app = App::new(tracker, config, clock_offset);

    let mut terminal = ratatui::init();
    let events = EventHandler::new(tick_rate);

    let outcome = loop {
        if let Err(e) = terminal.draw(|frame| app.draw(frame)) {
            break Err(e.into());
        }

        match events.next() {
            Ok(Event::Key(key)) => {
                app.handle_key(key);
                if app.should_quit {
                    break Ok(());
                }
            }
            Ok(Event::Resize) => {}
            Ok(Event::Tick) => app.tick(),
            Err(e) => break Err(e.into()),
        }
    };

    ratatui::restore();
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;
    use crossterm::event::KeyModifiers;
    use rusqlite::Connection;

    fn app_at(instant: &str) -> App {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        let tracker = Tracker::open(conn);
        let target = NaiveDateTime::parse_from_str(instant, "%Y-%m-%dT%H:%M").unwrap();
        let offset = target - Local::now().naive_local();
        App::new(tracker, AppConfig::default(), offset)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_evening_opens_next_day() {
        let app = app_at("2026-02-19T19:00");
        assert_eq!(app.resolved.date_key(), "2026-02-20");
        assert_eq!(app.resolved.day, 2);
    }

    #[test]
    fn test_marking_focused_prayer_toggles() {
        let mut app = app_at("2026-02-20T10:00");
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.entry.prayers.dzuhur, PrayerStatus::Jamaah);
        assert_eq!(app.tracker.store().len(), 1);

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.entry.prayers.dzuhur, PrayerStatus::None);
    }

    #[test]
    fn test_focus_stays_in_range() {
        let mut app = app_at("2026-02-20T10:00");
        press(&mut app, KeyCode::Up);
        assert_eq!(app.focus_idx, 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.focus_idx, PrayerSlot::all().len() - 1);
    }

    #[test]
    fn test_surah_navigation_resets_verse() {
        let mut app = app_at("2026-02-20T10:00");
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.entry.quran.surah_index, 0);

        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.entry.quran.ayah, 3);

        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.entry.quran.surah_index, 1);
        assert_eq!(app.entry.quran.ayah, 1);
    }

    #[test]
    fn test_typed_ayah_is_clamped() {
        let mut app = app_at("2026-02-20T10:00");
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.input_mode, InputMode::AyahInput);
        for c in "99".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
        // Al-Fatihah has 7 verses
        assert_eq!(app.entry.quran.ayah, 7);
    }

    #[test]
    fn test_infaq_presets_accumulate_and_reset() {
        let mut app = app_at("2026-02-20T10:00");
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.entry.infaq, 35_000);

        press(&mut app, KeyCode::Char('0'));
        assert_eq!(app.entry.infaq, 0);
    }

    #[test]
    fn test_typed_infaq_accepts_separators() {
        let mut app = app_at("2026-02-20T10:00");
        press(&mut app, KeyCode::Char('i'));
        for c in "15.000".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.entry.infaq, 15_000);
    }

    #[test]
    fn test_cancelled_input_changes_nothing() {
        let mut app = app_at("2026-02-20T10:00");
        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.entry.infaq, 0);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_theme_toggle_and_views() {
        let mut app = app_at("2026-02-20T10:00");
        let before = app.tracker.theme();
        press(&mut app, KeyCode::Char('t'));
        assert_ne!(app.tracker.theme(), before);

        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.view, View::History);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view, View::Dashboard);

        press(&mut app, KeyCode::Char('?'));
        press(&mut app, KeyCode::Char('z'));
        assert_eq!(app.view, View::Dashboard);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_tick_moves_to_next_day_at_rollover() {
        let mut app = app_at("2026-02-20T17:59");
        assert_eq!(app.resolved.date_key(), "2026-02-20");
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.entry.prayers.subuh, PrayerStatus::Jamaah);

        app.tick();
        assert_eq!(app.resolved.date_key(), "2026-02-20");

        app.clock_offset = app.clock_offset + Duration::minutes(2);
        app.tick();

        assert_eq!(app.resolved.date_key(), "2026-02-21");
        assert_eq!(app.resolved.day, 3);
        assert_eq!(app.entry, DailyEntry::new("2026-02-21"));
        assert_eq!(app.insight, insight(3));
        let previous = app.tracker.entry("2026-02-20");
        assert_eq!(previous.prayers.subuh, PrayerStatus::Jamaah);
    }

    #[test]
    fn test_popup_on_wide_terminal() {
        let area = Rect::new(0, 0, 1000, 300);
        let rect = popup(area, 80, 70);
        assert_eq!(rect, Rect::new(100, 45, 800, 210));
    }
}
