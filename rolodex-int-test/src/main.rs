use rolodex::contact::Contact;
use rolodex::errors::StoreResult;
use rolodex_int_test::test_util::{cleanup, create_test_context};

fn main() -> StoreResult<()> {
    println!("Starting stress test...");
    let ctx = create_test_context()?;
    let repo = ctx.repository();

    let count = 10_000;
    let start = std::time::Instant::now();
    for i in 0..count {
        repo.create_contact(
            Some(&format!("First{:05}", i)),
            Some(&format!("Last{:05}", i)),
        )?;
    }
    println!("Created {} contacts in {:?}", count, start.elapsed());

    let start = std::time::Instant::now();
    let hits = repo.fetch_all_contacts(Some("first000"))?;
    println!("Search matched {} contacts in {:?}", hits.len(), start.elapsed());

    let start = std::time::Instant::now();
    let store = ctx.store();
    let deleted = store.delete_all_of_type::<Contact>();
    store.save_all_changes()?;
    println!(
        "Deleted all contacts in {:?} (ok: {}, {} remain)",
        start.elapsed(),
        deleted,
        repo.count_contacts()
    );

    cleanup(ctx)
}
