use axum::http::Uri;

use crate::query::QueryParams;

#[test]
fn test_first_occurrence_wins() {
    let query: QueryParams = [("a", "1"), ("b", "x"), ("a", "2")].into_iter().collect();
    assert_eq!(query.get("a"), Some("1"));
    assert_eq!(query.parse_float("a"), Some(1.0));
    assert_eq!(query.get("c"), None);
}

#[test]
fn test_blank_values_are_absent() {
    let query: QueryParams = [("a", ""), ("a", "2")].into_iter().collect();
    assert_eq!(query.parse_float("a"), Some(2.0));
}

#[test]
fn test_parse_float() {
    let query: QueryParams = [
        ("spaced", "  2.5 "),
        ("exp", "1e3"),
        ("word", "abc"),
        ("nan", "NaN"),
        ("inf", "inf"),
        ("neg", "-4"),
    ]
    .into_iter()
    .collect();

    assert_eq!(query.parse_float("spaced"), Some(2.5));
    assert_eq!(query.parse_float("exp"), Some(1000.0));
    assert_eq!(query.parse_float("word"), None);
    assert_eq!(query.parse_float("nan"), None);
    assert_eq!(query.parse_float("inf"), None);
    assert_eq!(query.parse_float("neg"), Some(-4.0));
    assert_eq!(query.parse_float("missing"), None);
}

#[test]
fn test_parse_choice() {
    let query: QueryParams = [("unit", "earth"), ("other", "Earth")].into_iter().collect();
    let allowed = ["kg", "earth"];

    assert_eq!(query.parse_choice("unit", &allowed), Some("earth"));
    assert_eq!(query.parse_choice("other", &allowed), None);
    assert_eq!(query.parse_choice("missing", &allowed), None);
}

#[test]
fn test_from_uri() {
    let uri: Uri = "/data/coll/grid?mtar_value=1&mtar_unit=earth&format=jsondata&mtar_value=3"
        .parse()
        .unwrap();
    let query = QueryParams::from_uri(&uri);

    assert_eq!(query.parse_float("mtar_value"), Some(1.0));
    assert_eq!(query.get("format"), Some("jsondata"));

    let bare: Uri = "/data/coll/grid".parse().unwrap();
    assert_eq!(QueryParams::from_uri(&bare), QueryParams::default());
}
