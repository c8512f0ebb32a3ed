use chrono::NaiveDate;
use todo_core::{FixedClock, StoreError, StoreOptions, TodoId, TodoStore};

fn fixed_store(options: StoreOptions) -> TodoStore<FixedClock> {
    let at = NaiveDate::from_ymd_opt(2024, 4, 5)
        .and_then(|date| date.and_hms_opt(15, 4, 5))
        .unwrap();
    TodoStore::with_clock(FixedClock(at), options)
}

fn texts(store: &TodoStore<FixedClock>) -> Vec<&str> {
    store.items().iter().map(|item| item.text.as_str()).collect()
}

#[test]
fn new_store_is_empty_and_idle() {
    let store = TodoStore::new();

    assert!(store.is_empty());
    assert_eq!(store.draft(), "");
    assert!(store.editing().is_none());
    assert!(!store.is_edit_view_open());
}

#[test]
fn add_appends_in_order_and_clears_add_draft() {
    let mut store = fixed_store(StoreOptions::default());
    store.update_draft("typed");

    store.add("one").unwrap();
    store.add("two").unwrap();
    store.add("three").unwrap();

    assert_eq!(texts(&store), vec!["one", "two", "three"]);
    assert_eq!(store.draft(), "");
    assert!(store.items().iter().all(|item| !item.completed));
    assert!(store
        .items()
        .iter()
        .all(|item| item.created_at == "April 5th 2024, 3:04:05 pm"));
}

#[test]
fn add_keeps_text_untrimmed_and_accepts_empty_by_default() {
    let mut store = fixed_store(StoreOptions::default());

    let padded = store.add("  spaced  ").unwrap();
    let empty = store.add("").unwrap();

    assert_eq!(store.get(padded).unwrap().text, "  spaced  ");
    assert_eq!(store.get(empty).unwrap().text, "");
}

#[test]
fn submit_draft_adds_from_add_input() {
    let mut store = fixed_store(StoreOptions::default());
    store.update_draft("from input");

    let id = store.submit_draft().unwrap();

    assert_eq!(store.get(id).unwrap().text, "from input");
    assert_eq!(store.draft(), "");
}

#[test]
fn reject_blank_text_refuses_add_and_keeps_draft() {
    let mut store = fixed_store(StoreOptions {
        reject_blank_text: true,
    });
    store.update_draft("   ");

    let err = store.submit_draft().unwrap_err();

    assert_eq!(err, StoreError::BlankText);
    assert!(store.is_empty());
    assert_eq!(store.draft(), "   ");
}

#[test]
fn delete_removes_only_target_and_preserves_order() {
    let mut store = fixed_store(StoreOptions::default());
    store.add("a").unwrap();
    let b = store.add("b").unwrap();
    store.add("c").unwrap();

    let removed = store.delete(b).unwrap();

    assert_eq!(removed.text, "b");
    assert_eq!(texts(&store), vec!["a", "c"]);
}

#[test]
fn delete_unknown_id_is_noop() {
    let mut store = fixed_store(StoreOptions::default());
    store.add("a").unwrap();
    let before = store.items().to_vec();

    assert!(store.delete(TodoId::generate()).is_none());
    assert_eq!(store.items(), before.as_slice());
}

#[test]
fn toggle_complete_flips_only_target() {
    let mut store = fixed_store(StoreOptions::default());
    let a = store.add("a").unwrap();
    let b = store.add("b").unwrap();

    assert_eq!(store.toggle_complete(a), Some(true));

    assert!(store.get(a).unwrap().completed);
    assert!(!store.get(b).unwrap().completed);
    assert_eq!(store.completed_count(), 1);
}

#[test]
fn toggle_complete_unknown_id_is_noop() {
    let mut store = fixed_store(StoreOptions::default());
    store.add("a").unwrap();
    let before = store.items().to_vec();

    assert_eq!(store.toggle_complete(TodoId::generate()), None);
    assert_eq!(store.items(), before.as_slice());
}

#[test]
fn begin_edit_seeds_draft_from_item_text() {
    let mut store = fixed_store(StoreOptions::default());
    let id = store.add("walk dog").unwrap();

    store.begin_edit(id).unwrap();

    let session = store.editing().unwrap();
    assert_eq!(session.item_id, id);
    assert_eq!(session.draft, "walk dog");
    assert!(store.is_edit_view_open());
    assert_eq!(store.draft(), "walk dog");
}

#[test]
fn begin_edit_unknown_id_is_rejected_without_state_change() {
    let mut store = fixed_store(StoreOptions::default());
    let id = store.add("a").unwrap();
    store.begin_edit(id).unwrap();
    let missing = TodoId::generate();

    let err = store.begin_edit(missing).unwrap_err();

    assert_eq!(err, StoreError::TodoNotFound(missing));
    assert_eq!(store.editing().unwrap().item_id, id);
}

#[test]
fn begin_edit_while_editing_switches_target() {
    let mut store = fixed_store(StoreOptions::default());
    let a = store.add("a").unwrap();
    let b = store.add("b").unwrap();

    store.begin_edit(a).unwrap();
    store.update_draft("changed a");
    store.begin_edit(b).unwrap();

    let session = store.editing().unwrap();
    assert_eq!(session.item_id, b);
    assert_eq!(session.draft, "b");
    assert_eq!(store.get(a).unwrap().text, "a");
}

#[test]
fn commit_edit_updates_text_only_and_closes_session() {
    let mut store = fixed_store(StoreOptions::default());
    let id = store.add("old").unwrap();
    store.toggle_complete(id);
    let before = store.get(id).unwrap().clone();

    store.begin_edit(id).unwrap();
    store.update_draft("new");
    assert_eq!(store.commit_edit().unwrap(), Some(id));

    let after = store.get(id).unwrap();
    assert_eq!(after.text, "new");
    assert_eq!(after.completed, before.completed);
    assert_eq!(after.created_at, before.created_at);
    assert!(!store.is_edit_view_open());
    assert_eq!(store.draft(), "");
}

#[test]
fn commit_edit_without_session_is_noop() {
    let mut store = fixed_store(StoreOptions::default());
    store.add("a").unwrap();

    assert_eq!(store.commit_edit().unwrap(), None);
    assert_eq!(texts(&store), vec!["a"]);
}

#[test]
fn commit_edit_blank_is_rejected_and_session_stays_open() {
    let mut store = fixed_store(StoreOptions {
        reject_blank_text: true,
    });
    let id = store.add("keep").unwrap();
    store.begin_edit(id).unwrap();
    store.update_draft(" ");

    assert_eq!(store.commit_edit().unwrap_err(), StoreError::BlankText);
    assert!(store.is_edit_view_open());
    assert_eq!(store.get(id).unwrap().text, "keep");
}

#[test]
fn deleting_edited_item_closes_session() {
    let mut store = fixed_store(StoreOptions::default());
    let id = store.add("doomed").unwrap();
    store.begin_edit(id).unwrap();

    store.delete(id);

    assert!(!store.is_edit_view_open());
    assert_eq!(store.commit_edit().unwrap(), None);
}

#[test]
fn cancel_edit_leaves_items_untouched() {
    let mut store = fixed_store(StoreOptions::default());
    let id = store.add("stay").unwrap();
    store.begin_edit(id).unwrap();
    store.update_draft("discarded");

    store.cancel_edit();

    assert_eq!(store.get(id).unwrap().text, "stay");
    assert!(store.editing().is_none());
    assert_eq!(store.draft(), "");
}

#[test]
fn edit_text_replaces_directly_and_ignores_unknown_ids() {
    let mut store = fixed_store(StoreOptions::default());
    let id = store.add("before").unwrap();

    assert!(store.edit_text(id, "after").unwrap());
    assert!(!store.edit_text(TodoId::generate(), "ghost").unwrap());
    assert_eq!(texts(&store), vec!["after"]);
}

#[test]
fn snapshot_reflects_editing_state() {
    let mut store = fixed_store(StoreOptions::default());
    let id = store.add("a").unwrap();
    store.begin_edit(id).unwrap();
    store.update_draft("a2");

    let snapshot = store.snapshot();

    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.draft, "a2");
    assert_eq!(snapshot.editing_id, Some(id));
    assert!(snapshot.is_edit_view_open);
}

#[test]
fn buy_milk_scenario() {
    let mut store = fixed_store(StoreOptions::default());

    let id = store.add("buy milk").unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.items()[0].text, "buy milk");
    assert!(!store.items()[0].completed);

    store.toggle_complete(id);
    assert!(store.items()[0].completed);

    store.begin_edit(id).unwrap();
    store.update_draft("buy oat milk");
    store.commit_edit().unwrap();
    assert_eq!(store.items()[0].text, "buy oat milk");
    assert!(store.items()[0].completed);

    store.delete(id);
    assert!(store.is_empty());
}
