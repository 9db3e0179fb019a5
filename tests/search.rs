//! Incremental search tests - stepping, wrapping, overlay, submit and cancel

mod common;

use common::{send_all, test_model, test_model_with_syntax};
use linepad::messages::{DocumentMsg, Msg, PromptMsg};
use linepad::model::{Cursor, Prompt, PromptPurpose};
use linepad::syntax::Highlight;
use linepad::update::update;

fn type_query(query: &str) -> Vec<Msg> {
    query
        .chars()
        .map(|ch| Msg::Prompt(PromptMsg::InsertChar(ch)))
        .collect()
}

fn begin_search(model: &mut linepad::AppModel, query: &str) {
    update(model, Msg::Prompt(PromptMsg::BeginSearch));
    send_all(model, type_query(query));
}

fn has_overlay(model: &linepad::AppModel) -> bool {
    model
        .buffer
        .iter()
        .any(|line| line.highlight().contains(&Highlight::Match))
}

// ========================================================================
// Stepping
// ========================================================================

#[test]
fn test_typing_finds_first_match_from_top() {
    let mut model = test_model("alpha\nbeta foo\ngamma\nfoo delta", 2, 3);
    begin_search(&mut model, "foo");

    assert_eq!(model.editor.cursor, Cursor::at(1, 5));
    let highlight = model.buffer.get(1).unwrap().highlight();
    assert_eq!(&highlight[5..8], &[Highlight::Match; 3]);
    assert_eq!(highlight[4], Highlight::Normal);
}

#[test]
fn test_next_and_previous() {
    let mut model = test_model("foo 0\nbar\nfoo 2\nfoo 3", 0, 0);
    begin_search(&mut model, "foo");
    assert_eq!(model.editor.cursor.line, 0);

    update(&mut model, Msg::Prompt(PromptMsg::SearchNext));
    assert_eq!(model.editor.cursor.line, 2);
    update(&mut model, Msg::Prompt(PromptMsg::SearchNext));
    assert_eq!(model.editor.cursor.line, 3);

    update(&mut model, Msg::Prompt(PromptMsg::SearchPrevious));
    assert_eq!(model.editor.cursor.line, 2);
}

#[test]
fn test_forward_search_wraps_to_top() {
    let mut model = test_model("foo\nbar\nbaz", 0, 0);
    begin_search(&mut model, "foo");
    assert_eq!(model.editor.cursor.line, 0);

    update(&mut model, Msg::Prompt(PromptMsg::SearchNext));
    assert_eq!(model.editor.cursor.line, 0);
}

#[test]
fn test_backward_search_wraps_to_bottom() {
    let mut model = test_model("foo\nbar\nfoo end", 0, 0);
    begin_search(&mut model, "foo");
    assert_eq!(model.editor.cursor.line, 0);

    update(&mut model, Msg::Prompt(PromptMsg::SearchPrevious));
    assert_eq!(model.editor.cursor.line, 2);
}

#[test]
fn test_query_change_restarts_from_top() {
    let mut model = test_model("ab\nabc\nabcd", 0, 0);
    begin_search(&mut model, "ab");
    update(&mut model, Msg::Prompt(PromptMsg::SearchNext));
    assert_eq!(model.editor.cursor.line, 1);

    // "abc" first occurs on line 1, found again from the top
    update(&mut model, Msg::Prompt(PromptMsg::InsertChar('c')));
    assert_eq!(model.editor.cursor.line, 1);
    update(&mut model, Msg::Prompt(PromptMsg::InsertChar('d')));
    assert_eq!(model.editor.cursor.line, 2);
}

#[test]
fn test_match_in_tabbed_line_uses_logical_column() {
    let mut model = test_model("\tneedle", 0, 0);
    begin_search(&mut model, "needle");
    assert_eq!(model.editor.cursor, Cursor::at(0, 1));
    assert_eq!(model.editor.cursor_display_column, 4);
}

#[test]
fn test_match_line_scrolls_to_top() {
    let text = (0..50)
        .map(|i| if i == 30 { "target".to_string() } else { format!("line{}", i) })
        .collect::<Vec<_>>()
        .join("\n");
    let mut model = test_model(&text, 0, 0);
    model.editor.viewport.visible_lines = 10;

    begin_search(&mut model, "target");
    assert_eq!(model.editor.cursor.line, 30);
    assert_eq!(model.editor.viewport.top_line, 30);
}

// ========================================================================
// Overlay
// ========================================================================

#[test]
fn test_overlay_moves_and_restores_highlight() {
    let mut model = test_model_with_syntax("int foo;\n// foo\nfoo", "c");
    let original: Vec<Vec<Highlight>> = model
        .buffer
        .iter()
        .map(|line| line.highlight().to_vec())
        .collect();

    begin_search(&mut model, "foo");
    assert_eq!(model.editor.cursor.line, 0);
    update(&mut model, Msg::Prompt(PromptMsg::SearchNext));
    assert_eq!(model.editor.cursor.line, 1);

    // Line 0 got its syntax highlight back verbatim
    assert_eq!(model.buffer.get(0).unwrap().highlight(), original[0].as_slice());
    assert!(model.buffer.get(1).unwrap().highlight().contains(&Highlight::Match));

    update(&mut model, Msg::Prompt(PromptMsg::Submit));
    let after: Vec<Vec<Highlight>> = model
        .buffer
        .iter()
        .map(|line| line.highlight().to_vec())
        .collect();
    assert_eq!(after, original);
}

#[test]
fn test_empty_query_clears_overlay() {
    let mut model = test_model("foo", 0, 0);
    begin_search(&mut model, "f");
    assert!(has_overlay(&model));

    update(&mut model, Msg::Prompt(PromptMsg::DeleteBackward));
    assert!(!has_overlay(&model));
    assert!(model.ui.prompt.is_active());
}

#[test]
fn test_no_match_leaves_cursor() {
    let mut model = test_model("alpha\nbeta", 1, 2);
    begin_search(&mut model, "zzz");
    assert_eq!(model.editor.cursor, Cursor::at(1, 2));
    assert!(!has_overlay(&model));
}

#[test]
fn test_edit_clears_pending_overlay() {
    let mut model = test_model("foo bar", 0, 0);
    begin_search(&mut model, "bar");
    assert!(has_overlay(&model));

    update(&mut model, Msg::Document(DocumentMsg::InsertChar(b'x')));
    assert!(!has_overlay(&model));
}

// ========================================================================
// Submit / Cancel
// ========================================================================

#[test]
fn test_submit_keeps_cursor_at_match() {
    let mut model = test_model("one\ntwo\nthree", 0, 0);
    begin_search(&mut model, "thr");
    update(&mut model, Msg::Prompt(PromptMsg::Submit));

    assert_eq!(model.ui.prompt, Prompt::Idle);
    assert_eq!(model.editor.cursor, Cursor::at(2, 0));
    assert!(!has_overlay(&model));
}

#[test]
fn test_cancel_restores_cursor_and_viewport() {
    let text = (0..40)
        .map(|i| format!("row {}", i))
        .collect::<Vec<_>>()
        .join("\n");
    let mut model = test_model(&text, 3, 2);
    model.editor.viewport.visible_lines = 10;
    let saved_cursor = model.editor.cursor;
    let saved_viewport = model.editor.viewport;

    begin_search(&mut model, "row 35");
    assert_eq!(model.editor.cursor.line, 35);
    assert_eq!(model.editor.viewport.top_line, 35);

    update(&mut model, Msg::Prompt(PromptMsg::Cancel));
    assert_eq!(model.ui.prompt, Prompt::Idle);
    assert_eq!(model.editor.cursor, saved_cursor);
    assert_eq!(model.editor.viewport, saved_viewport);
    assert!(!has_overlay(&model));
}

#[test]
fn test_prompt_holds_search_state() {
    let mut model = test_model("foo", 0, 0);
    begin_search(&mut model, "fo");

    match model.ui.prompt.purpose() {
        Some(PromptPurpose::Search(state)) => {
            assert_eq!(state.session.last_match(), Some(0));
            assert!(state.session.has_overlay());
        }
        other => panic!("expected search prompt, got {:?}", other),
    }
    assert_eq!(
        linepad::model::message_line(&model).as_deref(),
        Some("Search (Up/Down: prev/next, Esc: cancel): fo")
    );
}
