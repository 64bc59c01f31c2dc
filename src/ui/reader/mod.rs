use std::io;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::config::Config;
use crate::logging;
use crate::models::{DocumentDescriptor, RenderRequest, ViewMode};
use crate::settings::Settings;
use crate::ui::board::Board;
use crate::ui::windows::help::HelpWindow;
use crate::viewer::engine::{ViewerEngine, ViewerState};
use crate::viewer::input::{self, Outcome};
use crate::viewer::layout::LayoutAdapter;
use crate::viewer::lifecycle::LoadTicket;

/// UI-specific state management
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub show_help: bool,
    pub help_scroll_offset: u16,
    /// Text typed so far in the go-to-page form; `None` while closed.
    pub page_input: Option<String>,
}

/// Parse the go-to-page form input. Unparsable or non-positive values are
/// rejected here and never reach the engine.
pub fn parse_page_request(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok().filter(|&n| n > 0)
}

/// Page-range label for the control bar, e.g. `3-4 / 10`.
pub fn spread_label(state: &ViewerState, spread: (usize, usize)) -> String {
    if state.total_pages == 0 {
        return "- / -".to_string();
    }
    let (first, last) = spread;
    if last > first {
        format!("{}-{} / {}", first, last, state.total_pages)
    } else {
        format!("{} / {}", first, state.total_pages)
    }
}

/// The viewer shell: owns the terminal, the engine, and the layout adapter,
/// and funnels every event into them in arrival order.
pub struct Reader {
    config: Config,
    engine: ViewerEngine,
    adapter: LayoutAdapter,
    ticket: Option<LoadTicket>,
    /// Parse not yet delivered by the stand-in render surface.
    pending_parse: bool,
    load_failure: Option<String>,
    ui: UiState,
    viewport_width_px: f32,
    should_quit: bool,
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl Reader {
    /// Create a new Reader instance for one document.
    pub fn new(config: Config, descriptor: DocumentDescriptor) -> eyre::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        let mode = if config.settings.start_in_double_mode {
            ViewMode::Double
        } else {
            ViewMode::Single
        };
        let adapter = LayoutAdapter::new(&config.settings);
        let mut engine = ViewerEngine::with_view_mode(mode);
        let ticket = engine.open_document(descriptor);

        Ok(Self {
            config,
            engine,
            adapter,
            ticket: Some(ticket),
            pending_parse: true,
            load_failure: None,
            ui: UiState::default(),
            viewport_width_px: 0.0,
            should_quit: false,
            terminal,
        })
    }

    /// Run the main application loop
    pub fn run(&mut self) -> eyre::Result<()> {
        // Initialize terminal
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;

        self.terminal.clear()?;
        self.terminal.hide_cursor()?;

        if let Ok((cols, _)) = crossterm::terminal::size() {
            self.handle_resize(cols);
        }

        // Main event loop
        loop {
            if self.should_quit {
                break;
            }

            // Render UI
            {
                let snapshot = self.engine.snapshot();
                let document = self.engine.document().cloned();
                let label = spread_label(&snapshot, self.engine.spread());
                let board = self.build_board(&snapshot);
                let ui = self.ui.clone();
                let settings = self.config.settings.clone();
                self.terminal.draw(|f| {
                    render_static(f, &snapshot, document.as_ref(), &board, &label, &ui, &settings)
                })?;
            }

            // Deliver the parse outcome after the loading frame was shown.
            if self.pending_parse {
                self.pending_parse = false;
                self.resolve_parse();
                continue;
            }

            if !crossterm::event::poll(Duration::from_secs(60))? {
                continue;
            }

            // Handle events
            if let Ok(event) = crossterm::event::read() {
                match event {
                    Event::Key(key) => {
                        if key.kind == KeyEventKind::Press {
                            self.handle_key_event(key);
                        }
                    }
                    Event::Resize(cols, _) => {
                        self.handle_resize(cols);
                    }
                    _ => {}
                }
            }
        }

        // Cleanup terminal
        self.terminal.clear()?;
        self.terminal.show_cursor()?;
        crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
        crossterm::terminal::disable_raw_mode()?;

        Ok(())
    }

    /// Stand-in for the external render surface: resolves the parse from the
    /// descriptor's page-count hint, or reports failure when there is none.
    fn resolve_parse(&mut self) {
        let Some(ticket) = self.ticket.clone() else {
            return;
        };
        let hint = self
            .engine
            .document()
            .map(|d| d.page_count_hint)
            .unwrap_or(0);
        if hint > 0 {
            self.engine.document_loaded(&ticket, hint);
            logging::info(format!("document parsed with {} pages", hint));
        } else {
            let locator = self
                .engine
                .document()
                .map(|d| d.asset_locator.clone())
                .unwrap_or_default();
            self.engine.document_failed(&ticket);
            self.load_failure = Some(format!("no page data for '{}'", locator));
            logging::warn(format!("parse failed for '{}'", locator));
        }
    }

    fn handle_resize(&mut self, cols: u16) {
        self.viewport_width_px = cols as f32 * self.config.settings.cell_width_px;
        self.adapter
            .observe_width(self.viewport_width_px, &mut self.engine);
    }

    /// Page/scale/width requests for the currently visible spread, exactly
    /// what a real render surface would be asked to produce.
    fn render_requests(&self, snapshot: &ViewerState) -> Vec<RenderRequest> {
        let container_width =
            (self.viewport_width_px - self.config.settings.container_inset).max(0.0);
        let width = self
            .adapter
            .page_render_width(container_width, snapshot.view_mode);
        let (first, last) = self.engine.spread();
        let mut requests = vec![RenderRequest {
            page: first,
            scale: snapshot.scale,
            width,
        }];
        if last > first {
            requests.push(RenderRequest {
                page: last,
                scale: snapshot.scale,
                width,
            });
        }
        requests
    }

    fn build_board(&self, snapshot: &ViewerState) -> Board {
        Board::new()
            .with_requests(self.render_requests(snapshot))
            .with_gutter(self.config.settings.page_gutter)
            .with_cell_width(self.config.settings.cell_width_px)
            .with_loading(snapshot.is_loading)
            .with_load_failure(self.load_failure.clone())
            .with_no_document(snapshot.total_pages == 0)
    }

    /// Handle keyboard input events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.ui.page_input.is_some() {
            self.handle_page_input_keys(key);
        } else if self.ui.show_help {
            self.handle_help_keys(key);
        } else {
            self.handle_viewer_keys(key);
        }
    }

    fn handle_viewer_keys(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.ui.show_help = true;
                self.ui.help_scroll_offset = 0;
            }
            KeyCode::Char('g') => {
                self.ui.page_input = Some(String::new());
            }
            _ => {
                if let Some(action) = input::action_for_key(&key) {
                    match input::dispatch(action, &mut self.engine) {
                        Outcome::Exit => self.should_quit = true,
                        Outcome::Handled => {}
                    }
                }
            }
        }
    }

    fn handle_page_input_keys(&mut self, key: KeyEvent) {
        let Some(buffer) = self.ui.page_input.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Enter => {
                if let Some(page) = parse_page_request(buffer) {
                    self.engine.go_to_page(page);
                }
                self.ui.page_input = None;
            }
            KeyCode::Esc => {
                self.ui.page_input = None;
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() && buffer.len() < 6 => {
                buffer.push(c);
            }
            _ => {}
        }
    }

    fn handle_help_keys(&mut self, key: KeyEvent) {
        let max_scroll = HelpWindow::get_total_lines().saturating_sub(1) as u16;
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.ui.help_scroll_offset = (self.ui.help_scroll_offset + 1).min(max_scroll);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.ui.help_scroll_offset = self.ui.help_scroll_offset.saturating_sub(1);
            }
            _ => {
                self.ui.show_help = false;
            }
        }
    }
}

fn render_static(
    frame: &mut Frame,
    snapshot: &ViewerState,
    document: Option<&DocumentDescriptor>,
    board: &Board,
    label: &str,
    ui: &UiState,
    settings: &Settings,
) {
    let frame_area = frame.area();

    if snapshot.is_fullscreen {
        board.render(frame, frame_area);
        if ui.show_help {
            HelpWindow::render(frame, frame_area, ui.help_scroll_offset);
        }
        return;
    }

    let hint_height = if settings.show_key_hints { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(hint_height),
        ])
        .split(frame_area);

    let title = document.map(|d| d.display_title.as_str()).unwrap_or("folio");
    let subtitle = document.map(|d| d.subtitle()).unwrap_or_default();
    let left = if subtitle.is_empty() {
        title.to_string()
    } else {
        format!("{} — {}", title, subtitle)
    };
    let mode = match snapshot.view_mode {
        ViewMode::Single => "single",
        ViewMode::Double => "double",
    };
    let mut right = format!("{}% · {}", (snapshot.scale * 100.0).round() as i32, mode);
    if snapshot.is_loading {
        right.push_str(" · loading");
    }
    let header = build_bar_line(&left, Some(&right), chunks[0].width);
    frame.render_widget(
        Paragraph::new(Line::from(header)).style(Style::default().fg(Color::Gray)),
        chunks[0],
    );

    let page_line = match &ui.page_input {
        Some(buffer) => format!(" Go to page: {}_", buffer),
        None => format!(" {}", label),
    };
    frame.render_widget(Paragraph::new(Line::from(page_line)), chunks[1]);

    board.render(frame, chunks[2]);

    if settings.show_key_hints {
        let hints = "←/→ pages · Space next · Home/End ends · +/- zoom · Ctrl+1/2 layout · g go to · f fullscreen · ? help · Esc exit";
        frame.render_widget(
            Paragraph::new(Line::from(hints))
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            chunks[3],
        );
    }

    if ui.show_help {
        HelpWindow::render(frame, frame_area, ui.help_scroll_offset);
    }
}

fn build_bar_line(left: &str, right: Option<&str>, width: u16) -> String {
    let width = width as usize;
    if width == 0 {
        return String::new();
    }

    let right_text = right.unwrap_or("");
    let mut left_text = format!(" {}", left);
    let reserved = if right_text.is_empty() {
        0
    } else {
        right_text.len() + 2
    };
    let left_max = width.saturating_sub(reserved);
    if left_text.len() > left_max {
        left_text = left_text.chars().take(left_max).collect();
    }

    let gap = width.saturating_sub(left_text.len() + right_text.len() + 1);
    format!("{}{}{} ", left_text, " ".repeat(gap), right_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_request() {
        assert_eq!(parse_page_request("12"), Some(12));
        assert_eq!(parse_page_request(" 7 "), Some(7));
        assert_eq!(parse_page_request("0"), None);
        assert_eq!(parse_page_request("-3"), None);
        assert_eq!(parse_page_request("abc"), None);
        assert_eq!(parse_page_request(""), None);
    }

    #[test]
    fn test_spread_label_single() {
        let state = ViewerState {
            current_page: 4,
            total_pages: 10,
            ..ViewerState::default()
        };
        assert_eq!(spread_label(&state, (4, 4)), "4 / 10");
    }

    #[test]
    fn test_spread_label_pair() {
        let state = ViewerState {
            current_page: 3,
            total_pages: 10,
            view_mode: ViewMode::Double,
            ..ViewerState::default()
        };
        assert_eq!(spread_label(&state, (3, 4)), "3-4 / 10");
    }

    #[test]
    fn test_spread_label_before_parse() {
        let state = ViewerState::default();
        assert_eq!(spread_label(&state, (1, 1)), "- / -");
    }

    #[test]
    fn test_build_bar_line_pads_between_sides() {
        let line = build_bar_line("Title", Some("100% · single"), 40);
        assert_eq!(line.len(), 40);
        assert!(line.starts_with(" Title"));
        assert!(line.ends_with("100% · single "));
    }

    #[test]
    fn test_build_bar_line_truncates_long_title() {
        let line = build_bar_line(
            "A very long document title that will not fit",
            Some("150% · double"),
            30,
        );
        assert!(line.len() <= 31);
        assert!(line.ends_with("150% · double "));
    }
}
