//! The navigation engine: single owner of the viewer state.
//!
//! Every command is a synchronous transition that sanitizes its input by
//! clamping rather than rejecting it. Out-of-range requests degrade to
//! no-ops, so no command can fail and no command can leave the state
//! violating the page bounds or spread parity invariants.

use crate::logging;
use crate::models::{DocumentDescriptor, ViewMode};
use crate::viewer::bounds::{clamp_page, normalize_for_mode, page_range, step_size};
use crate::viewer::lifecycle::LoadTicket;
use serde::Serialize;

pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 3.0;
pub const SCALE_STEP: f32 = 0.25;
pub const DEFAULT_SCALE: f32 = 1.0;

/// Snapshot of the viewer for one open document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewerState {
    /// 1-indexed page anchoring the view.
    pub current_page: usize,
    /// 0 until the render surface reports a successful parse.
    pub total_pages: usize,
    pub scale: f32,
    pub is_fullscreen: bool,
    pub is_loading: bool,
    pub view_mode: ViewMode,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            scale: DEFAULT_SCALE,
            is_fullscreen: false,
            is_loading: false,
            view_mode: ViewMode::Single,
        }
    }
}

pub struct ViewerEngine {
    state: ViewerState,
    document: Option<DocumentDescriptor>,
    generation: u64,
    first_load_done: bool,
}

impl ViewerEngine {
    pub fn new() -> Self {
        Self::with_view_mode(ViewMode::Single)
    }

    pub fn with_view_mode(mode: ViewMode) -> Self {
        Self {
            state: ViewerState {
                view_mode: mode,
                ..ViewerState::default()
            },
            document: None,
            generation: 0,
            first_load_done: false,
        }
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn snapshot(&self) -> ViewerState {
        self.state.clone()
    }

    pub fn document(&self) -> Option<&DocumentDescriptor> {
        self.document.as_ref()
    }

    /// The inclusive page range currently displayed.
    pub fn spread(&self) -> (usize, usize) {
        page_range(
            self.state.current_page,
            self.state.total_pages,
            self.state.view_mode,
        )
    }

    /// Switch the active document. The view mode survives the switch; the
    /// rest of the state resets and a new load generation begins, which
    /// invalidates tickets from any parse still in flight.
    pub fn open_document(&mut self, descriptor: DocumentDescriptor) -> LoadTicket {
        self.generation += 1;
        self.state = ViewerState {
            view_mode: self.state.view_mode,
            is_loading: true,
            ..ViewerState::default()
        };
        self.first_load_done = false;
        let ticket = LoadTicket::new(descriptor.id.clone(), self.generation);
        self.document = Some(descriptor);
        ticket
    }

    /// Render-surface callback: the document parsed with `total_pages` pages.
    ///
    /// The first successful parse for the open document resets the view to
    /// page 1; a later incidental re-parse only refreshes the page count and
    /// keeps the reader's position.
    pub fn document_loaded(&mut self, ticket: &LoadTicket, total_pages: usize) {
        if ticket.generation() != self.generation {
            logging::debug(format!(
                "discarding stale load completion for '{}'",
                ticket.document_id()
            ));
            return;
        }
        if self.first_load_done {
            self.set_total_pages(total_pages);
        } else {
            self.state.total_pages = total_pages;
            self.state.current_page = 1;
            self.first_load_done = true;
        }
        self.state.is_loading = false;
    }

    /// Render-surface callback: the parse failed. Page and zoom are left
    /// untouched; the failure itself is surfaced by the render surface.
    pub fn document_failed(&mut self, ticket: &LoadTicket) {
        if ticket.generation() != self.generation {
            logging::debug(format!(
                "discarding stale load failure for '{}'",
                ticket.document_id()
            ));
            return;
        }
        self.state.is_loading = false;
    }

    pub fn next_page(&mut self) {
        let candidate = self.state.current_page + step_size(self.state.view_mode);
        self.move_to(candidate as i64);
    }

    pub fn prev_page(&mut self) {
        let candidate = self.state.current_page as i64 - step_size(self.state.view_mode) as i64;
        self.move_to(candidate);
    }

    pub fn go_to_page(&mut self, page: i64) {
        self.move_to(page);
    }

    fn move_to(&mut self, candidate: i64) {
        let clamped = clamp_page(candidate, self.state.total_pages);
        self.state.current_page = normalize_for_mode(clamped, self.state.view_mode);
    }

    pub fn zoom_in(&mut self) {
        self.state.scale = (self.state.scale + SCALE_STEP).min(MAX_SCALE);
    }

    pub fn zoom_out(&mut self) {
        self.state.scale = (self.state.scale - SCALE_STEP).max(MIN_SCALE);
    }

    pub fn reset_zoom(&mut self) {
        self.state.scale = DEFAULT_SCALE;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.state.view_mode = mode;
        self.state.current_page = normalize_for_mode(self.state.current_page, mode);
    }

    pub fn toggle_view_mode(&mut self) {
        self.set_view_mode(self.state.view_mode.other());
    }

    /// Update the page count, re-clamping the current page. With `n == 0`
    /// the count goes back to "unknown" and the current page is left alone.
    pub fn set_total_pages(&mut self, n: usize) {
        self.state.total_pages = n;
        if n > 0 {
            self.move_to(self.state.current_page as i64);
        }
    }

    /// Tracks fullscreen intent only; the host owns the display side effect.
    pub fn toggle_fullscreen(&mut self) {
        self.state.is_fullscreen = !self.state.is_fullscreen;
    }
}

impl Default for ViewerEngine {
    fn default() -> Self {
        Self::new()
    }
}
