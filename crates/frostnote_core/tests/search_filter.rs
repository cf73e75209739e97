use frostnote_core::{filter_notes, Note, NoteColor, NoteId};

fn note(title: &str, content: &str) -> Note {
    Note {
        id: NoteId::new_v4(),
        title: title.to_string(),
        content: content.to_string(),
        date: "Jan 5, 03:04 PM".to_string(),
        color: NoteColor::Blue,
    }
}

#[test]
fn empty_query_returns_all_notes_in_order() {
    let notes = vec![note("b", "2"), note("a", "1"), note("c", "3")];
    let hits = filter_notes(&notes, "");
    assert_eq!(hits.len(), notes.len());
    for (hit, original) in hits.iter().zip(&notes) {
        assert_eq!(hit.id, original.id);
    }
}

#[test]
fn empty_collection_returns_empty() {
    assert!(filter_notes(&[], "anything").is_empty());
}

#[test]
fn match_is_case_insensitive_on_title_and_content() {
    let notes = vec![
        note("Groceries", "milk and EGGS"),
        note("work", "standup notes"),
        note("Trip", "pack GROCERY list"),
    ];

    let by_title = filter_notes(&notes, "gRoCeRies");
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].title, "Groceries");

    let by_content = filter_notes(&notes, "eggs");
    assert_eq!(by_content.len(), 1);
    assert_eq!(by_content[0].title, "Groceries");

    let across_fields = filter_notes(&notes, "grocer");
    assert_eq!(across_fields.len(), 2);
}

#[test]
fn result_is_an_order_preserving_subset_matching_the_predicate() {
    let notes = vec![
        note("alpha", "shared token"),
        note("beta", "nothing here"),
        note("gamma", "token again"),
    ];
    let query = "TOKEN";
    let hits = filter_notes(&notes, query);

    let needle = query.to_lowercase();
    for hit in &hits {
        assert!(
            hit.title.to_lowercase().contains(&needle)
                || hit.content.to_lowercase().contains(&needle)
        );
    }
    let hit_ids: Vec<_> = hits.iter().map(|n| n.id).collect();
    let expected: Vec<_> = notes
        .iter()
        .filter(|n| {
            n.title.to_lowercase().contains(&needle) || n.content.to_lowercase().contains(&needle)
        })
        .map(|n| n.id)
        .collect();
    assert_eq!(hit_ids, expected);
    assert_eq!(hit_ids.len(), 2);
}

#[test]
fn whitespace_query_is_matched_literally() {
    let notes = vec![note("two words", "ab"), note("joined", "cd")];
    let hits = filter_notes(&notes, " ");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "two words");
}
