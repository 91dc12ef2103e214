use domain_filter::{Comparator, FilterCollection, FilterError, FilterOperator};
use serde_json::{json, Value};
mod common;
use common::*;

#[test]
fn test_implicit_and_of_two_leaves() {
    let mut filters = FilterCollection::new();
    filters.add("customer", "=", true).unwrap();
    filters.add("active", "=", true).unwrap();

    assert_eq!(filters.len(), 2);
    assert_eq!(
        filters.materialize(),
        vec![json!(["customer", "=", true]), json!(["active", "=", true])]
    );
}

#[test]
fn test_logical_or() {
    let mut filters = FilterCollection::new();
    filters.add_operator(FilterOperator::Or);
    filters.add("type", "=", "many2one").unwrap();
    filters.add("type", "=", "many2many").unwrap();

    assert_eq!(
        filters.materialize(),
        vec![
            json!("|"),
            json!(["type", "=", "many2one"]),
            json!(["type", "=", "many2many"]),
        ]
    );
}

#[test]
fn test_mixed_domain_order() {
    let filters = partner_domain();
    assert_eq!(
        Value::Array(filters.materialize()),
        json!([
            ["name", "=", "ABC"],
            "!",
            ["language.code", "=", "en_US"],
            "|",
            ["country_id.code", "=", "be"],
            ["country_id.code", "=", "de"]
        ])
    );
    assert!(filters.validate().is_ok());
}

#[test]
fn test_mixed_domain_built_out_of_order() {
    let mut filters = FilterCollection::new();
    filters.add("country_id.code", "=", "be").unwrap();
    filters.add("country_id.code", "=", "de").unwrap();
    filters.insert_operator(0, FilterOperator::Or).unwrap();
    filters.insert(0, "language.code", "=", "en_US").unwrap();
    filters.insert_operator(0, FilterOperator::Not).unwrap();
    filters.insert(0, "name", "=", "ABC").unwrap();

    assert_eq!(filters, partner_domain());
}

#[test]
fn test_add_increases_size_by_one() {
    let values = vec![
        json!("text"),
        json!(42),
        json!(3.5),
        json!(false),
        Value::Null,
        json!([1, 2, 3]),
    ];
    let mut filters = FilterCollection::new();
    for (i, value) in values.into_iter().enumerate() {
        filters.add("field", "=", value.clone()).unwrap();
        assert_eq!(filters.len(), i + 1);
        assert_eq!(filters.materialize()[i], json!(["field", "=", value]));
    }
}

#[test]
fn test_failed_add_leaves_size_unchanged() {
    let mut filters = leaves(3);
    assert!(matches!(
        filters.add("", "=", 1),
        Err(FilterError::InvalidArgument { parameter: "field" })
    ));
    assert!(matches!(
        filters.insert(1, "name", "", 1),
        Err(FilterError::InvalidArgument {
            parameter: "comparator"
        })
    ));
    assert_eq!(filters.len(), 3);
    assert_eq!(filters, leaves(3));
}

#[test]
fn test_and_never_materialized() {
    let mut filters = leaves(2);
    for index in 0..=filters.len() {
        filters.insert_operator(index, FilterOperator::And).unwrap();
    }
    filters.add_operator(FilterOperator::And);
    assert_eq!(filters.len(), 2);
    assert!(!filters.materialize().contains(&json!("&")));
}

#[test]
fn test_or_inserted_at_front_twice() {
    let mut filters = leaves(1);
    filters.insert_operator(0, FilterOperator::Or).unwrap();
    assert_eq!(filters.materialize(), vec![json!("|"), json!(["field_0", "=", 0])]);

    filters.insert_operator(0, FilterOperator::Or).unwrap();
    assert_eq!(
        filters.materialize(),
        vec![json!("|"), json!("|"), json!(["field_0", "=", 0])]
    );
}

#[test]
fn test_insert_operator_between_leaves() {
    let mut filters = FilterCollection::new();
    filters.add("a", "=", 1).unwrap();
    filters.add("b", "=", 2).unwrap();
    filters.insert_operator(1, FilterOperator::Or).unwrap();

    assert_eq!(
        filters.materialize(),
        vec![json!(["a", "=", 1]), json!("|"), json!(["b", "=", 2])]
    );
}

#[test]
fn test_clear_does_not_alias_snapshots() {
    let mut filters = partner_domain();
    let snapshot = filters.materialize();
    filters.clear();

    assert_eq!(filters.len(), 0);
    assert!(filters.materialize().is_empty());
    assert_eq!(snapshot.len(), 6);
    assert_eq!(snapshot[0], json!(["name", "=", "ABC"]));
}

#[test]
fn test_snapshot_unaffected_by_later_insert() {
    let mut filters = leaves(2);
    let snapshot = filters.materialize();
    filters.insert_operator(0, FilterOperator::Not).unwrap();
    assert_eq!(snapshot, leaves(2).materialize());
    assert_eq!(filters.len(), 3);
}

#[test]
fn test_materialize_is_repeatable() {
    let filters = partner_domain();
    assert_eq!(filters.materialize(), filters.materialize());
}

#[test]
fn test_comparator_catalogue_as_argument() {
    let mut filters = FilterCollection::new();
    filters.add("id", Comparator::NotIn, vec![1, 2]).unwrap();
    filters.add("parent_id", Comparator::ChildOf, 7).unwrap();
    assert_eq!(
        filters.materialize(),
        vec![json!(["id", "not in", [1, 2]]), json!(["parent_id", "child_of", 7])]
    );
}

#[test]
fn test_malformed_domain_accepted_by_default() {
    let mut filters = FilterCollection::new();
    filters.add_operator(FilterOperator::Or);
    filters.add_operator(FilterOperator::Or);
    filters.add("a", "=", 1).unwrap();

    assert_eq!(filters.materialize().len(), 3);
    assert!(matches!(
        filters.materialize_validated(),
        Err(FilterError::MalformedDomain { .. })
    ));
}

#[test]
fn test_nested_operators_validate() {
    let mut filters = FilterCollection::new();
    filters.add_operator(FilterOperator::Or);
    filters.add_operator(FilterOperator::Not);
    filters.add("a", "=", 1).unwrap();
    filters.add("b", "=", 2).unwrap();
    filters.add("c", "=", 3).unwrap();

    let validated = filters.materialize_validated().unwrap();
    assert_eq!(validated, filters.materialize());
}

#[test]
fn test_iteration_matches_tokens() {
    let filters = partner_domain();
    let count = (&filters).into_iter().count();
    assert_eq!(count, filters.tokens().len());
    assert_eq!(filters.iter().count(), filters.len());
}
