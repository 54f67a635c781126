use rolodex::common::SortOrder;
use rolodex::contact::Contact;
use rolodex::filter::{all, field};
use rolodex::store::{order_by, RecordStore};
use rolodex_int_test::test_util::{cleanup, create_test_context, run_test};

use crate::store::Note;

fn add_note(store: &RecordStore, title: &str) -> Note {
    let mut note: Note = store.create().expect("create note");
    note.title = Some(title.to_string());
    store.update(&note).expect("stage note");
    note
}

#[test]
fn test_generic_store_handles_multiple_shapes() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();

            add_note(&store, "groceries");
            let mut contact: Contact = store.create()?;
            contact.first_name = Some("Anna".to_string());
            store.update(&contact)?;
            store.save_all_changes()?;

            // each shape lives in its own entity collection
            assert_eq!(store.count::<Note>(all()), 1);
            assert_eq!(store.count::<Contact>(all()), 1);

            let notes: Vec<Note> = store.fetch_all()?;
            assert_eq!(notes[0].title.as_deref(), Some("groceries"));

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_staged_records_are_visible_before_save() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            add_note(&store, "draft");

            // visible in-process before any save
            let notes: Vec<Note> = store.fetch_all()?;
            assert_eq!(notes.len(), 1);
            assert!(ctx.context().has_pending_changes());

            store.save_all_changes()?;
            assert!(!ctx.context().has_pending_changes());
            assert_eq!(store.count::<Note>(all()), 1);

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_fetch_is_a_snapshot() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            add_note(&store, "first");
            store.save_all_changes()?;

            let snapshot: Vec<Note> = store.fetch_all()?;
            add_note(&store, "second");

            // records staged after the fetch do not show up in it
            assert_eq!(snapshot.len(), 1);
            assert_eq!(store.count::<Note>(all()), 2);

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_filtered_fetch_and_count_agree() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            add_note(&store, "alpha");
            add_note(&store, "beta");
            add_note(&store, "alphabet");
            store.save_all_changes()?;

            let filter = field("title").contains("alpha");
            let notes: Vec<Note> = store.fetch_all_filtered(filter.clone())?;
            assert_eq!(notes.len(), 2);
            assert_eq!(store.count::<Note>(filter), 2);

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_sorted_fetch_orders_titles() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            for title in ["pears", "Apples", "oranges"] {
                add_note(&store, title);
            }
            store.save_all_changes()?;

            let notes: Vec<Note> = store
                .fetch_all_with_options(all(), &order_by("title", SortOrder::Ascending))?;
            let titles: Vec<&str> = notes.iter().filter_map(|n| n.title.as_deref()).collect();
            assert_eq!(titles, vec!["Apples", "oranges", "pears"]);

            let notes: Vec<Note> = store
                .fetch_all_with_options(all(), &order_by("title", SortOrder::Descending))?;
            let titles: Vec<&str> = notes.iter().filter_map(|n| n.title.as_deref()).collect();
            assert_eq!(titles, vec!["pears", "oranges", "Apples"]);

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_delete_is_not_existence_checked() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            let note = add_note(&store, "ephemeral");
            store.save_all_changes()?;

            // first delete removes it, second delete of the same record
            // still reports success
            assert!(store.delete(&note));
            store.save_all_changes()?;
            assert!(store.delete(&note));
            store.save_all_changes()?;
            assert_eq!(store.count::<Note>(all()), 0);

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_delete_all_of_type_leaves_other_shapes_alone() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            add_note(&store, "keepers");
            let mut contact: Contact = store.create()?;
            contact.first_name = Some("Anna".to_string());
            store.update(&contact)?;
            store.save_all_changes()?;

            assert!(store.delete_all_of_type::<Contact>());
            store.save_all_changes()?;

            assert_eq!(store.count::<Contact>(all()), 0);
            assert_eq!(store.count::<Note>(all()), 1);

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_save_with_no_changes_succeeds() {
    run_test(
        create_test_context,
        |ctx| {
            let store = ctx.store();
            store.save_all_changes()?;
            store.save_all_changes()?;
            Ok(())
        },
        cleanup,
    )
}
