//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `todo_core` linkage outside the Flutter/FFI runtime.
//! - Replay the reference add/complete/edit/delete flow and print each step.

use todo_core::{StoreResult, TodoStore};

fn main() {
    println!("todo_core ping={}", todo_core::ping());
    println!("todo_core version={}", todo_core::core_version());

    if let Err(err) = replay() {
        eprintln!("replay failed: {err}");
        std::process::exit(1);
    }
}

fn replay() -> StoreResult<()> {
    let mut store = TodoStore::new();

    let id = store.add("buy milk")?;
    render("add", &store);

    store.toggle_complete(id);
    render("complete", &store);

    store.begin_edit(id)?;
    store.update_draft("buy oat milk");
    store.commit_edit()?;
    render("edit", &store);

    store.delete(id);
    render("delete", &store);
    Ok(())
}

fn render(step: &str, store: &TodoStore) {
    println!("-- {step} ({} items)", store.len());
    for item in store.items() {
        let mark = if item.completed { "x" } else { " " };
        println!("[{mark}] {}  ({})", item.text, item.created_at);
    }
}
