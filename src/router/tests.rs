use super::{compile, pattern_to_regex, RouteTable};
use crate::config::RouteEntry;
use crate::error::DispatchError;
use http::Method;

#[test]
fn test_placeholder_accepts_digits_only() {
    let m = compile("/view/planet/%1").unwrap();
    assert!(m.matches("/view/planet/1"));
    assert!(m.matches("/view/planet/31415"));
    assert!(!m.matches("/view/planet/"));
    assert!(!m.matches("/view/planet/earth"));
    assert!(!m.matches("/view/planet/1a"));
}

#[test]
fn test_multiple_placeholders() {
    let m = compile("/planet/%1/moon/%2").unwrap();
    assert_eq!(m.placeholder_count(), 2);
    assert!(m.matches("/planet/3/moon/1"));
    assert!(!m.matches("/planet/3/moon/io"));
    assert!(!m.matches("/planet/x/moon/1"));
}

#[test]
fn test_trailing_separators_are_optional() {
    for pattern in ["/view/planet/%1", "/view/planet/%1/", "/planets", "/planets//"] {
        let m = compile(pattern).unwrap();
        for path in ["/view/planet/7", "/planets", "/view/planet/x", "/other"] {
            let with_slash = format!("{path}/");
            let with_slashes = format!("{path}///");
            assert_eq!(m.matches(path), m.matches(&with_slash), "{pattern} vs {path}");
            assert_eq!(m.matches(path), m.matches(&with_slashes), "{pattern} vs {path}");
        }
    }
}

#[test]
fn test_full_match_not_prefix() {
    let m = compile("/view").unwrap();
    assert!(m.matches("/view"));
    assert!(!m.matches("/view/planet"));
    assert!(!m.matches("/preview"));
}

#[test]
fn test_literals_are_escaped() {
    let m = compile("/files/report.json").unwrap();
    assert!(m.matches("/files/report.json"));
    assert!(!m.matches("/files/reportxjson"));

    let m = compile("/a+b/(c)").unwrap();
    assert!(m.matches("/a+b/(c)"));
    assert!(!m.matches("/aab/c"));
}

#[test]
fn test_malformed_placeholder_is_literal() {
    let m = compile("/discount/%off").unwrap();
    assert_eq!(m.placeholder_count(), 0);
    assert!(m.matches("/discount/%off"));
    assert!(!m.matches("/discount/10off"));

    let m = compile("/pct/%").unwrap();
    assert!(m.matches("/pct/%"));
}

#[test]
fn test_root_pattern() {
    let (source, _) = pattern_to_regex("/");
    assert_eq!(source, "^/*$");
    let m = compile("/").unwrap();
    assert!(m.matches("/"));
    assert!(!m.matches("/default"));
}

#[test]
fn test_compilation_is_deterministic() {
    let a = compile("/planet/%1/moon/%22").unwrap();
    let b = compile("/planet/%1/moon/%22").unwrap();
    assert_eq!(a.as_str(), b.as_str());
}

fn table(entries: &[(Method, &str, &str)]) -> RouteTable {
    RouteTable::build(
        entries
            .iter()
            .map(|(m, p, h)| RouteEntry::new(m.clone(), *p, *h))
            .collect(),
    )
    .unwrap()
}

#[test]
fn test_last_match_wins() {
    let t = table(&[
        (Method::GET, "/view/planet/%1", "First"),
        (Method::GET, "/view/planet/%1", "Second"),
        (Method::GET, "/view/moon/%1", "Moon"),
    ]);
    let route = t.resolve("GET", "/view/planet/4").unwrap();
    assert_eq!(&*route.handler_id, "Second");
}

#[test]
fn test_later_overlapping_pattern_shadows() {
    let t = table(&[
        (Method::GET, "/view/planet/%1", "Specific"),
        (Method::GET, "/view/planet/%2", "Later"),
    ]);
    assert_eq!(&*t.resolve("GET", "/view/planet/1").unwrap().handler_id, "Later");
}

#[test]
fn test_method_must_match() {
    let t = table(&[
        (Method::GET, "/planet", "ListPlanets"),
        (Method::POST, "/planet", "CreatePlanet"),
    ]);
    assert_eq!(&*t.resolve("POST", "/planet").unwrap().handler_id, "CreatePlanet");
    assert_eq!(&*t.resolve("GET", "/planet/").unwrap().handler_id, "ListPlanets");

    let err = t.resolve("DELETE", "/planet").unwrap_err();
    assert_eq!(
        err,
        DispatchError::ActionNotFound {
            path: "/planet".into(),
            method: "DELETE".into()
        }
    );
}

#[test]
fn test_empty_table_never_matches() {
    let t = RouteTable::default();
    assert!(t.is_empty());
    assert!(t.resolve("GET", "/").is_err());
}

#[test]
fn test_dump_routes_lists_declaration_order() {
    let t = table(&[
        (Method::GET, "/a", "A"),
        (Method::PUT, "/b/%1", "B"),
    ]);
    let dump = t.dump_routes();
    assert_eq!(
        dump,
        "[routes] count=2\n[route] GET /a -> A\n[route] PUT /b/%1 -> B\n"
    );
}
