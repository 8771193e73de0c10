//! End-to-end extraction scenarios through the public API.

use concept_extract::ast::{Step, Table};
use concept_extract::concept::{render_definition, render_invocation, ConceptName};
use concept_extract::engine::{ConceptExtractor, ExtractionRequest};
use concept_extract::patch::LineRange;
use concept_extract::ErrorType;

const USERS_BLOCK: &str = "
     |id|name|
     |--|----|
     |1 |foo |
     |2 |bar |
";

fn users() -> Table {
    Table::new(["id", "name"], [["1", "foo"], ["2", "bar"]])
}

fn extract(name: &str, steps: Vec<Step>) -> (String, String) {
    let request = ExtractionRequest {
        concept_name: name.to_string(),
        steps,
        range: LineRange::new(1, 1),
    };
    let extraction = ConceptExtractor::default().extract(&request).unwrap();
    (extraction.definition, extraction.invocation)
}

#[test]
fn concept_without_parameters() {
    let (definition, invocation) = extract("concept", vec![Step::new("step that takes a table")]);
    assert_eq!(definition, "# concept\n* step that takes a table\n");
    assert_eq!(invocation, "* concept");
}

#[test]
fn concept_with_parameter() {
    let (definition, invocation) = extract(
        "concept with \"arg\"",
        vec![Step::new("step that takes a table \"arg\"")],
    );
    assert_eq!(definition, "# concept with <arg>\n* step that takes a table <arg>\n");
    assert_eq!(invocation, "* concept with \"arg\"");
}

#[test]
fn concept_with_skipped_parameter() {
    let (definition, invocation) = extract(
        "concept with \"arg\"",
        vec![Step::new("step that takes a table \"arg\" and \"hello again\" ")],
    );
    assert_eq!(
        definition,
        "# concept with <arg>\n* step that takes a table <arg> and \"hello again\"\n"
    );
    assert_eq!(invocation, "* concept with \"arg\"");
}

#[test]
fn concept_with_all_parameters() {
    let (definition, invocation) = extract(
        "concept with \"arg\" \"hello again\"",
        vec![Step::new("step that takes a table \"arg\" and \"hello again\" ")],
    );
    assert_eq!(
        definition,
        "# concept with <arg> <hello again>\n* step that takes a table <arg> and <hello again>\n"
    );
    assert_eq!(invocation, "* concept with \"arg\" \"hello again\"");
}

#[test]
fn concept_with_shared_table_parameter() {
    let steps = vec![
        Step::with_named_table("step that takes a table", "table1", users()),
        Step::with_named_table("step that takes a table", "table1", users()),
    ];
    let (definition, invocation) = extract("concept with \"table1\"", steps);
    assert_eq!(
        definition,
        "# concept with <table1>\n* step that takes a table <table1>\n* step that takes a table <table1>\n"
    );
    assert_eq!(invocation, format!("* concept with {USERS_BLOCK}"));
}

#[test]
fn concept_with_shared_and_inline_tables() {
    let steps = vec![
        Step::with_named_table("step that takes a table", "table1", users()),
        Step::with_named_table("step that takes a table", "table1", users()),
        Step::with_table("step that takes a table", users()),
    ];
    let (definition, invocation) = extract("concept with \"table1\"", steps);
    assert_eq!(
        definition,
        format!(
            "# concept with <table1>\n* step that takes a table <table1>\n* step that takes a table <table1>\n* step that takes a table {USERS_BLOCK}"
        )
    );
    assert_eq!(invocation, format!("* concept with {USERS_BLOCK}"));
}

#[test]
fn differing_tables_under_one_name_use_the_first() {
    let other = Table::new(["id", "name"], [["3", "baz"]]);
    let steps = vec![
        Step::with_named_table("first", "table1", users()),
        Step::with_named_table("second", "table1", other),
    ];
    let name = ConceptName::parse("concept with \"table1\"").unwrap();
    assert_eq!(
        render_definition(&name, &steps).unwrap(),
        "# concept with <table1>\n* first <table1>\n* second <table1>\n"
    );
    assert_eq!(
        render_invocation(&name, &steps).unwrap(),
        format!("* concept with {USERS_BLOCK}")
    );
}

#[test]
fn literal_renders_as_placeholder_iff_declared() {
    let text = "use \"a\" and \"b\" with \"c\"";
    let cases = [
        ("n", "* use \"a\" and \"b\" with \"c\"\n"),
        ("n \"a\"", "* use <a> and \"b\" with \"c\"\n"),
        ("n \"b\" \"c\"", "* use \"a\" and <b> with <c>\n"),
        ("n \"a\" \"b\" \"c\"", "* use <a> and <b> with <c>\n"),
    ];
    for (name, expected_line) in cases {
        let name = ConceptName::parse(name).unwrap();
        let definition = render_definition(&name, &[Step::new(text)]).unwrap();
        let body = definition.split_once('\n').map(|(_, body)| body).unwrap();
        assert_eq!(body, expected_line);
    }
}

#[test]
fn malformed_concept_name_produces_no_output() {
    let request = ExtractionRequest {
        concept_name: "concept with \"arg".to_string(),
        steps: vec![Step::new("step \"arg\"")],
        range: LineRange::new(1, 1),
    };
    let err = ConceptExtractor::default().extract(&request).unwrap_err();
    assert_eq!(err.error_type(), ErrorType::MalformedConceptName);
}

#[test]
fn ragged_inline_table_fails_extraction() {
    let ragged = Table::new(["id", "name"], vec![vec!["1", "foo"], vec!["2"]]);
    let request = ExtractionRequest {
        concept_name: "concept".to_string(),
        steps: vec![Step::with_table("step", ragged)],
        range: LineRange::new(1, 1),
    };
    let err = ConceptExtractor::default().extract(&request).unwrap_err();
    assert_eq!(err.error_type(), ErrorType::TableArityMismatch);
}
