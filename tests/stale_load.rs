use folio::models::{DocumentDescriptor, ViewMode};
use folio::viewer::engine::ViewerEngine;

fn book(id: &str) -> DocumentDescriptor {
    DocumentDescriptor::book(id, id.to_string(), format!("assets/{}.pdf", id))
}

#[test]
fn test_switching_documents_invalidates_inflight_parse() {
    let mut engine = ViewerEngine::new();

    let stale = engine.open_document(book("first"));
    // Reader switches away before the parse of "first" completes.
    let live = engine.open_document(book("second"));

    // The stale completion must not corrupt the fresh state.
    engine.document_loaded(&stale, 300);
    assert_eq!(engine.state().total_pages, 0);
    assert!(engine.state().is_loading);
    assert_eq!(engine.state().current_page, 1);

    engine.document_loaded(&live, 24);
    assert_eq!(engine.state().total_pages, 24);
    assert!(!engine.state().is_loading);
}

#[test]
fn test_first_parse_resets_position_reparse_does_not() {
    let mut engine = ViewerEngine::new();
    let ticket = engine.open_document(book("issue"));

    engine.document_loaded(&ticket, 40);
    assert_eq!(engine.state().current_page, 1);

    engine.go_to_page(17);

    // An incidental re-parse of the same document keeps the position.
    engine.document_loaded(&ticket, 40);
    assert_eq!(engine.state().current_page, 17);
    assert_eq!(engine.state().total_pages, 40);
}

#[test]
fn test_reparse_with_fewer_pages_reclamps() {
    let mut engine = ViewerEngine::new();
    let ticket = engine.open_document(book("issue"));
    engine.document_loaded(&ticket, 40);
    engine.go_to_page(40);

    engine.document_loaded(&ticket, 20);
    assert_eq!(engine.state().current_page, 20);
}

#[test]
fn test_failure_clears_loading_and_nothing_else() {
    let mut engine = ViewerEngine::with_view_mode(ViewMode::Double);
    let ticket = engine.open_document(book("broken"));
    engine.zoom_in();
    engine.zoom_in();

    engine.document_failed(&ticket);

    let state = engine.state();
    assert!(!state.is_loading);
    assert_eq!(state.current_page, 1);
    assert_eq!(state.scale, 1.5);
    assert_eq!(state.total_pages, 0);
    assert_eq!(state.view_mode, ViewMode::Double);
}

#[test]
fn test_view_mode_persists_across_documents() {
    let mut engine = ViewerEngine::new();
    let ticket = engine.open_document(book("first"));
    engine.document_loaded(&ticket, 10);
    engine.set_view_mode(ViewMode::Double);

    let ticket = engine.open_document(book("second"));
    assert_eq!(engine.state().view_mode, ViewMode::Double);
    engine.document_loaded(&ticket, 8);

    // Double-mode parity applies to the new document immediately.
    engine.go_to_page(8);
    assert_eq!(engine.state().current_page, 7);
}
