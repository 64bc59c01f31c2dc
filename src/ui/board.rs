use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::models::RenderRequest;

/// Pages keep the familiar portrait proportion until real document
/// geometry is known.
const PAGE_ASPECT: f32 = 1.4;

/// Board widget for the page area.
///
/// Stands in for the external render surface: it receives the same
/// page/scale/width requests a real surface would and draws placeholder
/// frames for them. Load failures are surfaced here, not by the engine.
pub struct Board {
    requests: Vec<RenderRequest>,
    gutter_px: f32,
    cell_width_px: f32,
    is_loading: bool,
    load_failed: Option<String>,
    no_document: bool,
}

impl Board {
    pub fn new() -> Self {
        Self {
            requests: Vec::new(),
            gutter_px: 20.0,
            cell_width_px: 8.0,
            is_loading: false,
            load_failed: None,
            no_document: false,
        }
    }

    pub fn with_requests(mut self, requests: Vec<RenderRequest>) -> Self {
        self.requests = requests;
        self
    }

    pub fn with_gutter(mut self, gutter_px: f32) -> Self {
        self.gutter_px = gutter_px;
        self
    }

    pub fn with_cell_width(mut self, cell_width_px: f32) -> Self {
        self.cell_width_px = cell_width_px;
        self
    }

    pub fn with_loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    pub fn with_load_failure(mut self, reason: Option<String>) -> Self {
        self.load_failed = reason;
        self
    }

    pub fn with_no_document(mut self, no_document: bool) -> Self {
        self.no_document = no_document;
        self
    }

    /// Cell footprint of one page frame.
    pub fn frame_size(&self, request: &RenderRequest) -> (u16, u16) {
        let width_px = request.width * request.scale;
        // A terminal cell is roughly twice as tall as it is wide.
        let cols = (width_px / self.cell_width_px).round().max(4.0) as u16;
        let rows = (width_px * PAGE_ASPECT / (self.cell_width_px * 2.0))
            .round()
            .max(3.0) as u16;
        (cols, rows)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if let Some(reason) = &self.load_failed {
            self.render_failure(frame, area, reason);
        } else if self.is_loading {
            self.render_message(frame, area, "Parsing document...");
        } else if self.no_document || self.requests.is_empty() {
            self.render_message(frame, area, "No document parsed");
        } else {
            self.render_pages(frame, area);
        }
    }

    fn render_pages(&self, frame: &mut Frame, area: Rect) {
        let (cols, rows) = self.frame_size(&self.requests[0]);
        let pair = self.requests.len() > 1;

        let gutter_cols = if pair {
            (self.gutter_px / self.cell_width_px).round() as u16
        } else {
            0
        };
        let total_cols = if pair { cols * 2 + gutter_cols } else { cols };

        // Shrink uniformly when the spread does not fit the area.
        let scale_to_fit = (area.width as f32 / total_cols.max(1) as f32)
            .min(area.height as f32 / rows.max(1) as f32)
            .min(1.0);
        let cols = ((cols as f32 * scale_to_fit) as u16).max(4);
        let rows = ((rows as f32 * scale_to_fit) as u16).max(3);
        let gutter_cols = (gutter_cols as f32 * scale_to_fit) as u16;
        let total_cols = if pair { cols * 2 + gutter_cols } else { cols };

        let x = area.x + area.width.saturating_sub(total_cols) / 2;
        let y = area.y + area.height.saturating_sub(rows) / 2;

        self.render_page_frame(frame, Rect::new(x, y, cols, rows), self.requests[0].page);
        if pair {
            let right = Rect::new(x + cols + gutter_cols, y, cols, rows);
            self.render_page_frame(frame, right, self.requests[1].page);
        }
    }

    fn render_page_frame(&self, frame: &mut Frame, area: Rect, page: usize) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", page));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height == 0 || inner.width == 0 {
            return;
        }
        let label = Paragraph::new(Line::from(format!("page {}", page)))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        let mid = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
        frame.render_widget(label, mid);
    }

    fn render_message(&self, frame: &mut Frame, area: Rect, message: &str) {
        if area.height == 0 {
            return;
        }
        let paragraph = Paragraph::new(vec![Line::from(message)])
            .style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        let mid = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
        frame.render_widget(paragraph, mid);
    }

    fn render_failure(&self, frame: &mut Frame, area: Rect, reason: &str) {
        if area.height == 0 {
            return;
        }
        let lines = vec![
            Line::styled(
                "Could not parse the document.",
                Style::default().fg(Color::Red),
            ),
            Line::styled(reason.to_string(), Style::default().fg(Color::DarkGray)),
        ];
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true });
        let y = area.y + area.height / 2;
        let rect = Rect::new(area.x, y, area.width, 2.min(area.height));
        frame.render_widget(paragraph, rect);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(page: usize, scale: f32, width: f32) -> RenderRequest {
        RenderRequest { page, scale, width }
    }

    #[test]
    fn test_board_defaults() {
        let board = Board::new();
        assert!(board.requests.is_empty());
        assert!(!board.is_loading);
        assert!(board.load_failed.is_none());
    }

    #[test]
    fn test_frame_size_follows_width_and_zoom() {
        let board = Board::new().with_cell_width(8.0);
        assert_eq!(board.frame_size(&request(1, 1.0, 400.0)), (50, 35));
        assert_eq!(board.frame_size(&request(1, 2.0, 400.0)), (100, 70));
    }

    #[test]
    fn test_frame_size_has_floor() {
        let board = Board::new();
        let (cols, rows) = board.frame_size(&request(1, 0.5, 1.0));
        assert!(cols >= 4);
        assert!(rows >= 3);
    }

    #[test]
    fn test_builder() {
        let board = Board::new()
            .with_requests(vec![request(3, 1.5, 600.0), request(4, 1.5, 600.0)])
            .with_gutter(24.0)
            .with_loading(true)
            .with_load_failure(Some("missing asset".to_string()));
        assert_eq!(board.requests.len(), 2);
        assert_eq!(board.gutter_px, 24.0);
        assert!(board.is_loading);
        assert_eq!(board.load_failed.as_deref(), Some("missing asset"));
    }
}
