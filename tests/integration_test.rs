//! Integration tests for pillfilter
//!
//! These tests drive whole builder sessions through the public API, from a
//! catalog source to the submitted terms.

use pillfilter::builder::{Event, EventResult, FilterBuilder};
use pillfilter::catalog::{self, BuiltinSource, CatalogSource, FileSource};
use pillfilter::commands::script::{parse_tokens, replay};
use pillfilter::keybinds::{KeybindConfig, Keymap};
use pillfilter::suggest::TypedValues;
use pillfilter::terms::{Field, Term};
use std::io::Write;
use tempfile::NamedTempFile;

/// Helper function to start a session on the demo catalog
fn demo_builder(initial_terms: Vec<Term>) -> FilterBuilder {
    let loaded = catalog::load(&BuiltinSource).unwrap();
    FilterBuilder::new(loaded.catalog, initial_terms)
}

/// Helper function to write a catalog file
fn catalog_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn two_terms() -> Vec<Term> {
    vec![
        Term::new("Company", "Equals", "Streak"),
        Term::new("City", "Contains", "Portland"),
    ]
}

fn add_term(builder: &mut FilterBuilder, column: &str, operator: Option<&str>, value: &str) {
    builder.type_text(column);
    assert_eq!(builder.dispatch(Event::Advance), EventResult::Transitioned);
    if let Some(operator) = operator {
        builder.type_text(operator);
        assert_eq!(builder.dispatch(Event::Advance), EventResult::Transitioned);
    }
    builder.type_text(value);
    assert_eq!(builder.dispatch(Event::Advance), EventResult::Transitioned);
}

#[test]
fn test_company_equals_streak_end_to_end() {
    let mut builder = demo_builder(Vec::new());

    builder.type_text("Company");
    builder.dispatch(Event::Advance);
    assert_eq!(builder.state().field(), Field::Value);
    assert_eq!(builder.state().partial().operator(), Some("Equals"));

    builder.type_text("Streak");
    builder.dispatch(Event::Advance);

    assert_eq!(
        builder.dispatch(Event::Submit),
        EventResult::Submitted(vec![Term::new("Company", "Equals", "Streak")])
    );
    assert!(builder.state().partial().is_empty());
    assert_eq!(builder.state().field(), Field::Column);
}

#[test]
fn test_commit_grows_list_by_one_and_resets() {
    let mut builder = demo_builder(two_terms());

    // Regress from the value field, then pick a different operator
    builder.type_text("Name");
    builder.dispatch(Event::Advance);
    builder.dispatch(Event::DeleteBack);
    assert_eq!(builder.state().field(), Field::Operator);
    builder.type_text("Does Not");
    builder.dispatch(Event::Advance);
    builder.type_text("Smith");
    builder.dispatch(Event::Advance);

    let terms = builder.state().submit();
    assert_eq!(terms.len(), 3);
    assert_eq!(terms[..2], two_terms()[..]);
    assert_eq!(terms[2], Term::new("Name", "Does Not Contain", "Smith"));
    assert!(builder.state().partial().is_empty());
    assert!(builder.state().input().is_empty());
}

#[test]
fn test_regress_empties_list_without_underflow() {
    let mut builder = demo_builder(two_terms());

    assert_eq!(builder.dispatch(Event::DeleteBack), EventResult::Transitioned);
    assert_eq!(builder.state().terms().len(), 1);
    assert_eq!(builder.dispatch(Event::DeleteBack), EventResult::Transitioned);
    assert!(builder.state().terms().is_empty());

    for _ in 0..3 {
        assert_eq!(builder.dispatch(Event::DeleteBack), EventResult::Ignored);
    }
    assert!(builder.state().terms().is_empty());
}

#[test]
fn test_reopen_and_recommit_round_trips() {
    let mut builder = demo_builder(two_terms());

    assert_eq!(builder.dispatch(Event::ReopenLast), EventResult::Transitioned);
    assert_eq!(builder.state().terms().len(), 1);
    assert_eq!(builder.state().input(), "Portland");
    assert_eq!(builder.state().field(), Field::Value);

    builder.dispatch(Event::Advance);
    assert_eq!(builder.state().submit(), two_terms());
}

#[test]
fn test_reopen_with_empty_list_is_a_noop() {
    let mut builder = demo_builder(Vec::new());
    assert_eq!(builder.dispatch(Event::ReopenLast), EventResult::Ignored);
    assert_eq!(builder.state().field(), Field::Column);
}

#[test]
fn test_submit_excludes_in_progress_term() {
    let mut builder = demo_builder(vec![Term::new("Company", "Equals", "Streak")]);

    builder.type_text("City");
    builder.dispatch(Event::Advance);
    assert_eq!(builder.state().partial().column(), Some("City"));

    let mut received = Vec::new();
    builder.submit_to(&mut |terms: &[Term]| received.extend_from_slice(terms));
    assert_eq!(received, vec![Term::new("Company", "Equals", "Streak")]);
}

#[test]
fn test_operator_alias_filtering() {
    let mut builder = demo_builder(Vec::new());
    builder.type_text("Info");
    builder.dispatch(Event::Advance);
    builder.dispatch(Event::DeleteBack);

    builder.type_text("is");
    let labels: Vec<&str> = builder.state().suggestions().iter().map(|c| c.label()).collect();
    assert_eq!(labels, vec!["Equals"]);

    builder.dispatch(Event::DeleteBack);
    let labels: Vec<&str> = builder.state().suggestions().iter().map(|c| c.label()).collect();
    assert!(!labels.contains(&"Equals"));
}

#[test]
fn test_regress_from_operator_clears_column() {
    let mut builder = demo_builder(Vec::new());
    add_term(&mut builder, "Age", None, "30");

    builder.type_text("City");
    builder.dispatch(Event::Advance);
    builder.dispatch(Event::DeleteBack);
    assert_eq!(builder.state().field(), Field::Operator);

    builder.dispatch(Event::DeleteBack);
    assert_eq!(builder.state().field(), Field::Column);
    assert!(builder.state().partial().is_empty());
    assert_eq!(builder.state().terms().len(), 1);
}

const PARTIAL_CATALOG: &str = r#"
[[columns]]
id = "age"
label = "Age"
type = "number"
default_operator_id = "gt"

[[columns]]
id = "tier"
label = "Tier"
type = "picklist"
default_operator_id = "eq"
picklist_options = [
    { id = "gold", label = "Gold" },
    { id = "silver", label = "Silver" },
]

[[operators]]
id = "eq"
label = "Equals"
aliases = ["="]

[[operators]]
id = "lt"
label = "Less Than"
aliases = ["<"]
"#;

#[test]
fn test_unresolvable_default_stops_at_operator() {
    let file = catalog_file(".toml", PARTIAL_CATALOG);
    let loaded = catalog::load(&FileSource::open(file.path()).unwrap()).unwrap();
    let mut builder = FilterBuilder::new(loaded.catalog, loaded.initial_terms);

    builder.type_text("Age");
    builder.dispatch(Event::Advance);
    assert_eq!(builder.state().field(), Field::Operator);
    assert_eq!(builder.state().partial().operator(), None);

    // Aliases match exactly, so "<" finds Less Than but not Equals
    builder.type_text("<");
    assert_eq!(builder.state().suggestions().len(), 1);
    builder.dispatch(Event::Advance);
    builder.type_text("18");
    builder.dispatch(Event::Advance);
    assert_eq!(builder.state().submit(), vec![Term::new("Age", "Less Than", "18")]);
}

#[test]
fn test_picklist_values_from_file() {
    let file = catalog_file(".toml", PARTIAL_CATALOG);
    let loaded = catalog::load(&FileSource::open(file.path()).unwrap()).unwrap();
    let mut builder =
        FilterBuilder::new(loaded.catalog, Vec::new()).with_value_suggester(TypedValues);
    add_term(&mut builder, "Tier", None, "Bronze");

    builder.type_text("Tier");
    builder.dispatch(Event::Advance);
    assert_eq!(builder.dispatch(Event::NavigateDown), EventResult::Navigated);
    assert_eq!(builder.dispatch(Event::NavigateDown), EventResult::Navigated);
    builder.dispatch(Event::Advance);

    assert_eq!(
        builder.state().submit(),
        vec![
            Term::new("Tier", "Equals", "Bronze"),
            Term::new("Tier", "Equals", "Silver"),
        ]
    );
}

#[test]
fn test_json_catalog_with_initial_terms() {
    let json = r#"{
        "columns": [{"id": "c", "label": "Country", "type": "string", "default_operator_id": "in"}],
        "operators": [{"id": "in", "label": "In"}],
        "initial_terms": [{"column": "Country", "operator": "In", "value": "NO"}]
    }"#;
    let file = catalog_file(".json", json);
    let source = FileSource::open(file.path()).unwrap();

    assert_eq!(source.load_columns().unwrap()[0].label, "Country");
    let loaded = catalog::load(&source).unwrap();
    assert_eq!(loaded.initial_terms, vec![Term::new("Country", "In", "NO")]);
}

#[test]
fn test_script_replay_with_default_keys() {
    let keymap = Keymap::from_config(&KeybindConfig::default());
    let mut builder = demo_builder(Vec::new());

    let tokens: Vec<String> = [
        "Company", "<enter>", "Streak", "<enter>", "Name", "<tab>", "<bspace>", "<bspace>",
        "Nam", "<down>", "<enter>", "<bspace>", "not", "<enter>", "Ann", "Lee", "<enter>",
        "<ctrl-s>",
    ]
    .iter()
    .map(ToString::to_string)
    .collect();

    let steps = parse_tokens(&tokens).unwrap();
    let submitted = replay(&mut builder, &keymap, &steps);

    assert_eq!(
        submitted,
        Some(vec![
            Term::new("Company", "Equals", "Streak"),
            Term::new("Name", "Not Equals", "Ann Lee"),
        ])
    );
}
