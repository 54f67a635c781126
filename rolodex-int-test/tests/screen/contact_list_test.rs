use rolodex::screen::ContactListModel;
use rolodex_int_test::test_util::{cleanup, create_test_context, run_test, TestContext};

fn loaded_screen(ctx: &TestContext, names: &[(&str, &str)]) -> ContactListModel {
    let repo = ctx.repository();
    for (first, last) in names {
        repo.create_contact(Some(first), Some(last))
            .expect("create contact");
    }
    let mut screen = ContactListModel::new(repo);
    screen.load().expect("load baseline");
    screen
}

#[test]
fn test_typing_narrows_and_clearing_restores() {
    run_test(
        create_test_context,
        |ctx| {
            let mut screen = loaded_screen(
                &ctx,
                &[("Anna", "Lee"), ("Annika", "Berg"), ("Bob", "Anderson")],
            );

            // each keystroke is a fresh query against the repository
            screen.set_search_text("a")?;
            assert_eq!(screen.row_count(), 3);
            screen.set_search_text("an")?;
            assert_eq!(screen.row_count(), 3);
            screen.set_search_text("ann")?;
            assert_eq!(screen.row_count(), 2);
            screen.set_search_text("annik")?;
            assert_eq!(screen.row_count(), 1);

            // clearing to whitespace shows the unfiltered list again
            screen.set_search_text("  ")?;
            assert_eq!(screen.row_count(), 3);

            screen.end_search();
            assert_eq!(screen.row_count(), 3);

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_add_through_dialog_lands_sorted_and_trimmed() {
    run_test(
        create_test_context,
        |ctx| {
            let mut screen = loaded_screen(&ctx, &[("Bob", "Anderson")]);

            screen.add_contact(" Anna  ", " Lee ")?;
            assert_eq!(screen.row_count(), 2);
            assert_eq!(screen.row_text(0).as_deref(), Some("Anna Lee"));
            assert_eq!(screen.row_text(1).as_deref(), Some("Bob Anderson"));

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_delete_from_filtered_view_hits_the_right_record() {
    run_test(
        create_test_context,
        |ctx| {
            let mut screen = loaded_screen(
                &ctx,
                &[("Anna", "Lee"), ("Annika", "Berg"), ("Bob", "Anderson")],
            );

            screen.set_search_text("annika")?;
            assert_eq!(screen.row_count(), 1);
            screen.delete_row(0)?;

            // the filtered view empties, the baseline loses exactly that row
            assert_eq!(screen.row_count(), 0);
            screen.end_search();
            assert_eq!(screen.row_count(), 2);
            assert_eq!(screen.row_text(0).as_deref(), Some("Anna Lee"));
            assert_eq!(screen.row_text(1).as_deref(), Some("Bob Anderson"));

            // the deletion is durable, not just local list surgery
            assert_eq!(ctx.repository().count_contacts(), 2);

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_rows_render_without_dangling_spaces() {
    run_test(
        create_test_context,
        |ctx| {
            let mut screen = loaded_screen(&ctx, &[]);
            screen.add_contact("Jane", "")?;
            screen.add_contact("", "Ng")?;

            // sorted with the first-name-less contact first (null before
            // text)
            assert_eq!(screen.row_text(0).as_deref(), Some("Ng"));
            assert_eq!(screen.row_text(1).as_deref(), Some("Jane"));

            Ok(())
        },
        cleanup,
    )
}
