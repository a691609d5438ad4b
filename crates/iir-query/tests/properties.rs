//! Property tests for filtering and pagination invariants.

use proptest::prelude::*;

use iir_model::{DatasetStore, Field, FieldMapping, FilterCriteria, Record};
use iir_query::{Session, apply_filters, paginate};

fn record_strategy() -> impl Strategy<Value = Record> {
    (
        "[a-cA-C]{0,4}",
        prop_oneof![Just(""), Just("ORAL"), Just("TOPICAL")],
        prop_oneof![Just(""), Just("TABLET"), Just("CREAM")],
        "[0-9-]{0,6}",
        "[a-cA-C0-9]{0,4}",
    )
        .prop_map(|(name, route, form, cas, unii)| {
            Record::new()
                .with(Field::IngredientName, name)
                .with(Field::Route, route)
                .with(Field::DosageForm, form)
                .with(Field::CasNumber, cas)
                .with(Field::Unii, unii)
        })
}

fn term() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-cA-C0-9-]{0,2}")
}

fn code() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(prop_oneof![
        Just(String::new()),
        Just("ORAL".to_string()),
        Just("TOPICAL".to_string()),
        Just("TABLET".to_string()),
        Just("CREAM".to_string()),
    ])
}

fn criteria_strategy() -> impl Strategy<Value = FilterCriteria> {
    (term(), code(), code(), term(), term()).prop_map(
        |(ingredient, route, dosage_form, cas_number, unii)| FilterCriteria {
            ingredient,
            route,
            dosage_form,
            cas_number,
            unii,
        },
    )
}

proptest! {
    /// Property: the view is an ordered subsequence of the store.
    #[test]
    fn prop_filter_preserves_order(
        records in prop::collection::vec(record_strategy(), 0..40),
        criteria in criteria_strategy(),
    ) {
        let view = apply_filters(&records, &criteria);
        prop_assert!(view.indices().windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(view.indices().iter().all(|&idx| idx < records.len()));
    }

    /// Property: adding a criterion never grows the result.
    #[test]
    fn prop_filter_is_monotonic(
        records in prop::collection::vec(record_strategy(), 0..40),
        criteria in criteria_strategy(),
        extra in "[a-cA-C0-9]{1,2}",
        slot in 0usize..5,
    ) {
        let base = apply_filters(&records, &criteria);
        let mut narrower = criteria.clone();
        match slot {
            0 if narrower.ingredient.is_none() => narrower.ingredient = Some(extra),
            1 if narrower.route.is_none() => narrower.route = Some(extra),
            2 if narrower.dosage_form.is_none() => narrower.dosage_form = Some(extra),
            3 if narrower.cas_number.is_none() => narrower.cas_number = Some(extra),
            4 if narrower.unii.is_none() => narrower.unii = Some(extra),
            _ => {}
        }
        let narrowed = apply_filters(&records, &narrower);
        prop_assert!(narrowed.len() <= base.len());
        prop_assert!(narrowed.indices().iter().all(|idx| base.indices().contains(idx)));
    }

    /// Property: pages tile the view exactly once.
    #[test]
    fn prop_pages_cover_view_once(len in 0usize..300, page_size in 1usize..60) {
        let items: Vec<usize> = (0..len).collect();
        let total_pages = paginate(&items, 1, page_size).total_pages;
        let mut joined = Vec::with_capacity(len);
        for page in 1..=total_pages {
            let slice = paginate(&items, page, page_size);
            prop_assert_eq!(slice.page, page);
            prop_assert!(!slice.items.is_empty());
            joined.extend_from_slice(slice.items);
        }
        prop_assert_eq!(joined, items);
    }

    /// Property: reset restores the full dataset on page 1.
    #[test]
    fn prop_reset_restores_everything(
        records in prop::collection::vec(record_strategy(), 0..80),
        criteria in criteria_strategy(),
        moves in prop::collection::vec(-2isize..=2, 0..6),
    ) {
        let total = records.len();
        let mut session = Session::new(DatasetStore::new(records, FieldMapping::new()), 10);
        session.search(criteria);
        for delta in moves {
            session.change_page(delta);
        }
        let view = session.reset();
        prop_assert_eq!(view.total_records, total);
        prop_assert_eq!(view.page, 1);
        prop_assert_eq!(session.view().len(), total);
    }
}
