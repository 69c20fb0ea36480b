use crate::{EditOperation, EditSession, TextBuffer};

#[test]
fn test_hello_world_undo_redo_scenario() {
    let mut session = EditSession::new();
    session.execute(EditOperation::insert(0, "Hello")).unwrap();
    assert_eq!(session.text(), "Hello");

    session.execute(EditOperation::insert(5, " World")).unwrap();
    assert_eq!(session.text(), "Hello World");

    session.undo();
    assert_eq!(session.text(), "Hello");

    session.undo();
    assert_eq!(session.text(), "");

    session.redo();
    assert_eq!(session.text(), "Hello");
}

#[test]
fn test_replace_scenario() {
    let mut session = EditSession::from_text("Hello World");
    let op = EditOperation::replace(session.buffer(), 6, 5, "Universe");
    session.execute(op).unwrap();
    assert_eq!(session.text(), "Hello Universe");

    session.undo();
    assert_eq!(session.text(), "Hello World");
}

#[test]
fn test_macro_scenario() {
    let mut session = EditSession::new();
    let macro_op = EditOperation::macro_of(
        "format",
        vec![
            EditOperation::insert(0, "***"),
            EditOperation::insert(3, " ***"),
        ],
    );
    session.execute(macro_op).unwrap();
    assert_eq!(session.text(), "*** ***");

    session.undo();
    assert_eq!(session.text(), "");
}

#[test]
fn test_new_op_after_undo_clears_redo() {
    let mut session = EditSession::new();
    session.execute(EditOperation::insert(0, "one")).unwrap();
    session.undo();
    assert!(session.can_redo());

    session.execute(EditOperation::insert(0, "two")).unwrap();
    assert!(!session.can_redo());
    assert_eq!(session.text(), "two");
}

#[test]
fn test_k_undos_restore_in_reverse_order() {
    let mut session = EditSession::new();
    let checkpoints = ["", "a", "ab", "abc", "abcd"];
    for (i, ch) in ["a", "b", "c", "d"].iter().enumerate() {
        session.execute(EditOperation::insert(i, *ch)).unwrap();
        assert_eq!(session.text(), checkpoints[i + 1]);
    }

    for expected in checkpoints.iter().rev().skip(1) {
        session.undo();
        assert_eq!(session.text(), *expected);
    }
    assert!(!session.can_undo());

    // and forward again
    for expected in checkpoints.iter().skip(1) {
        session.redo();
        assert_eq!(session.text(), *expected);
    }
    assert!(!session.can_redo());
}

#[test]
fn test_cursor_lands_at_edit_position_after_undo() {
    let mut session = EditSession::from_text("Hello");
    session.execute(EditOperation::insert(5, " World")).unwrap();
    assert_eq!(session.cursor(), 11);

    // undo deletes the inserted span, cursor lands where the edit happened
    session.undo();
    assert_eq!(session.cursor(), 5);
}

#[test]
fn test_interleaved_delete_and_insert_history() {
    let mut session = EditSession::from_text("Hello World");

    let del = EditOperation::delete(session.buffer(), 5, 6);
    session.execute(del).unwrap();
    assert_eq!(session.text(), "Hello");

    session.execute(EditOperation::insert(5, "!")).unwrap();
    assert_eq!(session.text(), "Hello!");

    session.undo();
    session.undo();
    assert_eq!(session.text(), "Hello World");

    session.redo();
    assert_eq!(session.text(), "Hello");
}

#[test]
fn test_history_slices_for_observability() {
    let mut session = EditSession::new();
    session.execute(EditOperation::insert(0, "a")).unwrap();
    session.execute(EditOperation::insert(1, "b")).unwrap();
    session.undo();

    let undoable: Vec<String> = session
        .history()
        .undo_ops()
        .iter()
        .map(|op| op.to_string())
        .collect();
    let redoable: Vec<String> = session
        .history()
        .redo_ops()
        .iter()
        .map(|op| op.to_string())
        .collect();
    assert_eq!(undoable, ["insert \"a\" at 0"]);
    assert_eq!(redoable, ["insert \"b\" at 1"]);
}

#[test]
fn test_macro_round_trip_standalone() {
    let mut buffer = TextBuffer::from_text("Hello World");
    let before = buffer.text();

    let del = EditOperation::delete(&buffer, 0, 6);
    let ops = vec![del, EditOperation::insert(0, "Dear ")];
    let macro_op = EditOperation::macro_of("rewrite", ops);

    macro_op.execute(&mut buffer).unwrap();
    assert_eq!(buffer.text(), "Dear World");

    macro_op.undo(&mut buffer).unwrap();
    assert_eq!(buffer.text(), before);
}
