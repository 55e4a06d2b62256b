use bookshelf::{classic_novels, Catalog, CatalogError, Record};
use pretty_assertions::assert_eq;

fn three_record_catalog() -> Catalog {
    Catalog::new(
        "Corner Shop",
        vec![
            Record::new("Animal Farm", "George Orwell", 1946),
            Record::new("1984", "George Orwell", 1949),
            Record::new("Beloved", "Toni Morrison", 1987),
        ],
    )
    .unwrap()
}

#[test]
fn classics_catalog_upholds_size_invariants() {
    let catalog = Catalog::classics("Books and Books and Books").unwrap();

    assert!(catalog.len() >= 1);
    assert!(catalog.index_len() <= catalog.len());
    assert_eq!(catalog.len(), classic_novels().len());
}

#[test]
fn sorted_titles_are_nondecreasing_and_complete() {
    let catalog = Catalog::classics("Sorted").unwrap();

    let sorted = catalog.titles_sorted_alphabetically();

    assert_eq!(sorted.len(), catalog.len());
    for pair in sorted.windows(2) {
        assert!(pair[0].to_lowercase() <= pair[1].to_lowercase());
    }

    // Same multiset of titles as the record sequence.
    let mut from_records: Vec<String> =
        catalog.records().iter().map(|r| r.title.clone()).collect();
    let mut from_sorted: Vec<String> = sorted.iter().map(|t| t.to_string()).collect();
    from_records.sort();
    from_sorted.sort();
    assert_eq!(from_records, from_sorted);
}

#[test]
fn uppercased_titles_match_record_order() {
    let catalog = three_record_catalog();

    let upper: Vec<String> = catalog.all_titles_uppercased().collect();

    assert_eq!(upper, vec!["ANIMAL FARM", "1984", "BELOVED"]);
    assert_eq!(upper.len(), catalog.len());
}

#[test]
fn decade_query_honours_the_bucket() {
    let catalog = Catalog::classics("Decades").unwrap();

    for title in catalog.titles_in_decade_of(2005) {
        let record = catalog
            .records()
            .iter()
            .find(|r| r.title == title)
            .unwrap();
        assert!((2000..=2009).contains(&record.year_published));
    }
}

#[test]
fn existence_and_oldest_follow_the_scenario() {
    let catalog = three_record_catalog();

    assert!(catalog.exists_with_year(1949));
    assert!(!catalog.exists_with_year(1950));

    let oldest = catalog.oldest().unwrap();
    assert_eq!(oldest.title, "Animal Farm");
    assert_eq!(oldest.year_published, 1946);
}

#[test]
fn count_containing_is_case_insensitive() {
    let catalog = three_record_catalog();

    // Only "Animal Farm" contains an "a"; "1984" and "Beloved" do not.
    assert_eq!(catalog.count_containing("a"), 1);
    assert_eq!(catalog.count_containing("A"), 1);
    assert_eq!(catalog.count_containing("nope"), 0);
}

#[test]
fn percent_between_divides_over_the_whole_catalog() {
    let catalog = three_record_catalog();

    let percent = catalog.percent_between(1946, 1949).unwrap();
    assert!((percent - 200.0 / 3.0).abs() < 1e-9);

    let single = catalog.percent_between(1987, 1987).unwrap();
    assert!((single - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn titles_containing_keeps_record_order() {
    let catalog = Catalog::classics("Order").unwrap();

    let matches = catalog.titles_containing("the");

    assert!(!matches.is_empty());
    for title in &matches {
        assert!(title.to_lowercase().contains("the"));
    }

    // Record order: each match appears no earlier than the previous one.
    let positions: Vec<usize> = matches
        .iter()
        .map(|title| {
            catalog
                .records()
                .iter()
                .position(|r| r.title == *title)
                .unwrap()
        })
        .collect();
    for pair in positions.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn regex_matching_respects_the_pattern() {
    let catalog = three_record_catalog();
    let pattern = regex::RegexBuilder::new("^animal")
        .case_insensitive(true)
        .build()
        .unwrap();

    assert_eq!(catalog.titles_matching(&pattern), vec!["Animal Farm"]);
}

#[test]
fn title_length_query_may_be_empty() {
    let catalog = three_record_catalog();

    let eleven: Vec<&str> = catalog
        .with_title_length(11)
        .into_iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(eleven, vec!["Animal Farm"]);

    assert!(catalog.with_title_length(99).is_empty());
}

#[test]
fn removal_filters_every_matching_key() {
    let mut catalog = Catalog::classics("Filtered").unwrap();

    let removed = catalog.remove_titles_containing("the");
    assert!(removed > 0);

    for title in catalog.indexed_titles_in_order() {
        assert!(!title.to_lowercase().contains("the"));
    }

    // Survivors still resolve to full records through the index.
    for record in catalog.indexed_records_in_order() {
        assert!(record.year_published > 1900);
    }

    // A second pass removes nothing further.
    assert_eq!(catalog.remove_titles_containing("the"), 0);
}

#[test]
fn indexed_iteration_is_sorted_and_covers_the_index() {
    let catalog = Catalog::classics("Indexed").unwrap();

    let titles: Vec<&str> = catalog.indexed_titles_in_order().collect();

    assert_eq!(titles.len(), catalog.index_len());
    for pair in titles.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn read_queries_are_idempotent() {
    let catalog = Catalog::classics("Steady").unwrap();

    assert_eq!(
        catalog.titles_sorted_alphabetically(),
        catalog.titles_sorted_alphabetically()
    );
    assert_eq!(
        catalog.titles_in_decade_of(1950),
        catalog.titles_in_decade_of(1950)
    );
    assert_eq!(catalog.longest_title(), catalog.longest_title());
    assert_eq!(
        catalog.percent_between(1940, 1950),
        catalog.percent_between(1940, 1950)
    );
}

#[test]
fn empty_name_aborts_construction() {
    let result = Catalog::new("", classic_novels());
    assert_eq!(result.unwrap_err(), CatalogError::InvalidName);
}
