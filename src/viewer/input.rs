//! Keyboard binding for the viewer.
//!
//! One table maps key events onto engine commands; the host never reaches
//! into the engine from its own key handling. Escape is the only binding
//! that escapes the engine: leaving the viewer belongs to host navigation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::ViewMode;
use crate::viewer::engine::ViewerEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    PrevPage,
    NextPage,
    FirstPage,
    LastPage,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    SingleMode,
    DoubleMode,
    ToggleViewMode,
    ToggleFullscreen,
    ExitViewer,
}

/// What the host should do after a key was dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Handled,
    /// Hand control back to host navigation (the key was Escape).
    Exit,
}

/// Resolve a key event to a viewer action. `None` means the key is not
/// bound and the event should fall through to the host.
pub fn action_for_key(key: &KeyEvent) -> Option<ViewerAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Left | KeyCode::Up => Some(ViewerAction::PrevPage),
        KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => Some(ViewerAction::NextPage),
        KeyCode::Home => Some(ViewerAction::FirstPage),
        KeyCode::End => Some(ViewerAction::LastPage),
        KeyCode::Esc => Some(ViewerAction::ExitViewer),
        KeyCode::Char('1') if ctrl => Some(ViewerAction::SingleMode),
        KeyCode::Char('2') if ctrl => Some(ViewerAction::DoubleMode),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(ViewerAction::ZoomIn),
        KeyCode::Char('-') => Some(ViewerAction::ZoomOut),
        KeyCode::Char('0') => Some(ViewerAction::ResetZoom),
        KeyCode::Char('d') => Some(ViewerAction::ToggleViewMode),
        KeyCode::Char('f') => Some(ViewerAction::ToggleFullscreen),
        _ => None,
    }
}

/// Apply an action to the engine.
pub fn dispatch(action: ViewerAction, engine: &mut ViewerEngine) -> Outcome {
    match action {
        ViewerAction::PrevPage => engine.prev_page(),
        ViewerAction::NextPage => engine.next_page(),
        ViewerAction::FirstPage => engine.go_to_page(1),
        ViewerAction::LastPage => {
            let last = engine.state().total_pages as i64;
            engine.go_to_page(last);
        }
        ViewerAction::ZoomIn => engine.zoom_in(),
        ViewerAction::ZoomOut => engine.zoom_out(),
        ViewerAction::ResetZoom => engine.reset_zoom(),
        ViewerAction::SingleMode => engine.set_view_mode(ViewMode::Single),
        ViewerAction::DoubleMode => engine.set_view_mode(ViewMode::Double),
        ViewerAction::ToggleViewMode => engine.toggle_view_mode(),
        ViewerAction::ToggleFullscreen => engine.toggle_fullscreen(),
        ViewerAction::ExitViewer => return Outcome::Exit,
    }
    Outcome::Handled
}
