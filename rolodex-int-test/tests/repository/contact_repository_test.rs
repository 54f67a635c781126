use rolodex::contact::ContactRepository;
use rolodex_int_test::test_util::{cleanup, create_test_context, run_test};

fn seed(repo: &ContactRepository, names: &[(&str, &str)]) {
    for (first, last) in names {
        repo.create_contact(Some(first), Some(last))
            .expect("create contact");
    }
}

#[test]
fn test_search_matches_substring_on_either_field() {
    run_test(
        create_test_context,
        |ctx| {
            let repo = ctx.repository();
            seed(
                &repo,
                &[("Anna", "Lee"), ("Bob", "Anderson"), ("Carl", "Smith")],
            );

            // "an" hits Anna by first name and Anderson by last name, and
            // nothing else
            let hits = repo.fetch_all_contacts(Some("an"))?;
            let firsts: Vec<&str> =
                hits.iter().filter_map(|c| c.first_name.as_deref()).collect();
            assert_eq!(firsts, vec!["Anna", "Bob"]);

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_fetch_is_sorted_case_insensitively_by_first_name() {
    run_test(
        create_test_context,
        |ctx| {
            let repo = ctx.repository();
            seed(&repo, &[("Bob", "x"), ("Amy", "y"), ("amy", "z")]);

            let contacts = repo.fetch_all_contacts(None)?;
            let firsts: Vec<&str> = contacts
                .iter()
                .filter_map(|c| c.first_name.as_deref())
                .collect();

            // both Amy variants come before Bob; their relative order is
            // unspecified
            assert_eq!(firsts[2], "Bob");
            assert!(firsts[..2].iter().all(|n| n.eq_ignore_ascii_case("amy")));

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_search_ignores_case_and_diacritics_both_ways() {
    run_test(
        create_test_context,
        |ctx| {
            let repo = ctx.repository();
            seed(&repo, &[("Zoë", "Andérson"), ("Carl", "Smith")]);

            // plain search text finds accented names
            assert_eq!(repo.fetch_all_contacts(Some("ANDER"))?.len(), 1);
            assert_eq!(repo.fetch_all_contacts(Some("zoe"))?.len(), 1);
            // accented search text finds plain names
            seed(&repo, &[("Bob", "Anderson")]);
            assert_eq!(repo.fetch_all_contacts(Some("andér"))?.len(), 2);

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_search_sorts_its_results_too() {
    run_test(
        create_test_context,
        |ctx| {
            let repo = ctx.repository();
            seed(
                &repo,
                &[("bertha", "Ng"), ("Anna", "Lee"), ("Bob", "Anderson")],
            );

            let hits = repo.fetch_all_contacts(Some("n"))?;
            let firsts: Vec<&str> =
                hits.iter().filter_map(|c| c.first_name.as_deref()).collect();
            assert_eq!(firsts, vec!["Anna", "bertha", "Bob"]);

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_fields_are_stored_verbatim_and_duplicates_allowed() {
    run_test(
        create_test_context,
        |ctx| {
            let repo = ctx.repository();
            seed(&repo, &[("  Jane ", ""), ("  Jane ", "")]);

            let contacts = repo.fetch_all_contacts(None)?;
            assert_eq!(contacts.len(), 2);
            for contact in &contacts {
                assert_eq!(contact.first_name.as_deref(), Some("  Jane "));
                assert_eq!(contact.last_name.as_deref(), Some(""));
            }

            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_contacts_without_names_are_fetchable() {
    run_test(
        create_test_context,
        |ctx| {
            let repo = ctx.repository();
            repo.create_contact(None, None)?;
            repo.create_contact(Some("Anna"), None)?;

            let contacts = repo.fetch_all_contacts(None)?;
            assert_eq!(contacts.len(), 2);
            // the nameless contact sorts first (null before text)
            assert!(contacts[0].first_name.is_none());
            assert_eq!(contacts[1].first_name.as_deref(), Some("Anna"));

            // and never matches a search
            assert_eq!(repo.fetch_all_contacts(Some("ann"))?.len(), 1);

            Ok(())
        },
        cleanup,
    )
}
