use anyhow::Result;
use edit_engine::{EditOperation, EditSession};
use log::info;

fn show(session: &EditSession) {
    println!("content: {:?} (cursor {})", session.text(), session.cursor());
}

fn show_history(session: &EditSession) {
    println!("undoable ({}):", session.history().undo_ops().len());
    for op in session.history().undo_ops().iter().rev() {
        println!("  {op}");
    }
    println!("redoable ({}):", session.history().redo_ops().len());
    for op in session.history().redo_ops().iter().rev() {
        println!("  {op}");
    }
}

fn main() -> Result<()> {
    env_logger::init();
    info!("edit-engine demo start");

    let mut session = EditSession::new();

    println!("--- inserts ---");
    session.execute(EditOperation::insert(0, "Hello"))?;
    show(&session);
    session.execute(EditOperation::insert(5, " World"))?;
    show(&session);
    session.execute(EditOperation::insert(11, "!"))?;
    show(&session);

    println!("--- undo ---");
    session.undo();
    show(&session);
    session.undo();
    show(&session);

    println!("--- redo ---");
    session.redo();
    show(&session);

    println!("--- replace and delete ---");
    let replace = EditOperation::replace(session.buffer(), 6, 5, "Universe");
    session.execute(replace)?;
    show(&session);
    let delete = EditOperation::delete(session.buffer(), 0, 6);
    session.execute(delete)?;
    show(&session);

    show_history(&session);

    println!("--- macro ---");
    session.begin_macro("format");
    session.execute(EditOperation::insert(0, "*** "))?;
    let end = session.text().chars().count();
    session.execute(EditOperation::insert(end, " ***"))?;
    session.end_macro();
    show(&session);

    println!("--- undo macro ---");
    session.undo();
    show(&session);

    info!("edit-engine demo complete");
    Ok(())
}
