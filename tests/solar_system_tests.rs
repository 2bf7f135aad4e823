#![allow(clippy::unwrap_used, clippy::expect_used)]
//! The bundled solar system demo, dispatched end to end.

use jsonmvc::{parameters_from_query, ParameterMap};
use serde_json::{json, Value};

const BASE: &str = "/solar";

fn get(path: &str, query: &str) -> (u16, Value) {
    let dispatcher = solar_system::dispatcher().unwrap();
    let response = dispatcher.dispatch("GET", path, BASE, parameters_from_query(query));
    (response.status, serde_json::from_str(&response.body).unwrap())
}

#[test]
fn test_every_route_has_an_action() {
    let dispatcher = solar_system::dispatcher().unwrap();
    let table = dispatcher.routes().unwrap();
    assert!(table.unresolved_handlers(dispatcher.actions()).is_empty());
}

#[test]
fn test_home_is_the_default_action() {
    let (status, body) = get("/solar", "");
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "action": "default", "planets": 8 }));
}

#[test]
fn test_view_planet_hides_class_fields() {
    let (status, body) = get("/solar/view/planet/3", "");
    assert_eq!(status, 200);
    assert_eq!(body["name"], "Earth");
    assert!(body.get("class").is_none());
    assert!(body["moons"][0].get("class").is_none());
    assert_eq!(body["moons"][0]["name"], "Moon");
}

#[test]
fn test_unknown_planet_fails_validation() {
    let (status, body) = get("/solar/view/planet/42", "");
    assert_eq!(status, 500);
    assert_eq!(body, json!({ "errorMessage": "Unknown planet id: 42" }));
}

#[test]
fn test_moons_drop_mass() {
    let (status, body) = get("/solar/view/planet/4/moons", "");
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({ "planet": "Mars", "moons": [{ "name": "Phobos" }, { "name": "Deimos" }] })
    );
}

#[test]
fn test_list_planets_sorted_by_name() {
    let (status, body) = get("/solar/list/planets", "sort=name");
    assert_eq!(status, 200);
    assert_eq!(body["planets"][0], "Earth");
    assert_eq!(body["count"], 8);

    let (status, body) = get("/solar/list/planets", "sort=mass");
    assert_eq!(status, 500);
    assert_eq!(body["errorMessage"], "Unsupported sort key: 'mass'");
}

#[test]
fn test_create_planet_requires_name() {
    let dispatcher = solar_system::dispatcher().unwrap();
    let missing = dispatcher.dispatch("POST", "/solar/create/planet", BASE, ParameterMap::new());
    assert_eq!(missing.status, 500);
    assert_eq!(missing.body, r#"{"errorMessage":"Parameter 'name' is required"}"#);

    let created = dispatcher.dispatch(
        "POST",
        "/solar/create/planet",
        BASE,
        parameters_from_query("name=Vulcan"),
    );
    assert_eq!(created.status, 200);
    assert_eq!(created.body, r#"{"created":"Vulcan","stored":false}"#);
}
