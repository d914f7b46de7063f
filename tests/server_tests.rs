// Tests for the dashboard HTTP routes

use std::sync::Arc;
use serde_json::{json, Value};
use spacex_dash::ui::dashboard_server::routes;
use warp::http::StatusCode;

use crate::common::{fixture_table, session_manager};

fn body_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).expect("response is JSON")
}

#[tokio::test]
async fn test_index_page_is_served() {
    let api = routes(session_manager(fixture_table()));
    let response = warp::test::request().method("GET").path("/").reply(&api).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = String::from_utf8(response.body().to_vec()).unwrap();
    assert!(html.contains("<title>SpaceX Launch Records Dashboard</title>"));
    assert!(html.contains("success-pie-chart"));
    assert!(html.contains("success-payload-scatter-chart"));
}

#[tokio::test]
async fn test_session_lifecycle() {
    let manager = session_manager(fixture_table());
    let api = routes(Arc::clone(&manager));

    let created = warp::test::request().method("POST").path("/api/session").reply(&api).await;
    assert_eq!(created.status(), StatusCode::OK);
    let created = body_json(created.body());
    let session_id = created["session_id"].as_str().unwrap().to_string();

    assert_eq!(created["controls"]["site_options"][0], json!({ "label": "All Sites", "value": "ALL" }));
    assert_eq!(created["controls"]["site_options"].as_array().unwrap().len(), 5);
    assert_eq!(created["controls"]["slider"]["step"], json!(1000.0));
    assert_eq!(created["view"]["state"]["selected_site"], "ALL");
    assert_eq!(created["view"]["state"]["payload_range"], json!({ "low": 0.0, "high": 9600.0 }));
    assert_eq!(created["view"]["matched_launches"], 12);

    let changed = warp::test::request()
        .method("POST")
        .path(&format!("/api/session/{session_id}/control"))
        .json(&json!({ "type": "select_site", "site": "KSC LC-39A" }))
        .reply(&api)
        .await;
    assert_eq!(changed.status(), StatusCode::OK);
    let changed = body_json(changed.body());
    assert_eq!(changed["pie"]["layout"]["title"]["text"], "Total Success Launches for site KSC LC-39A");
    assert_eq!(changed["pie"]["data"][0]["labels"], json!(["Failed", "Success"]));
    assert_eq!(changed["pie"]["data"][0]["values"], json!([1, 2]));
    assert_eq!(changed["matched_launches"], 3);

    let ranged = warp::test::request()
        .method("POST")
        .path(&format!("/api/session/{session_id}/control"))
        .json(&json!({ "type": "set_payload_range", "low": 3000.0, "high": 6000.0 }))
        .reply(&api)
        .await;
    let ranged = body_json(ranged.body());
    assert_eq!(ranged["state"]["selected_site"], "KSC LC-39A");
    assert_eq!(ranged["matched_launches"], 2);

    let fetched = warp::test::request()
        .method("GET")
        .path(&format!("/api/session/{session_id}"))
        .reply(&api)
        .await;
    let fetched = body_json(fetched.body());
    assert_eq!(fetched["view"]["state"]["payload_range"], json!({ "low": 3000.0, "high": 6000.0 }));
    assert_eq!(manager.session_count(), 1);
}

#[tokio::test]
async fn test_unknown_session_is_not_found() {
    let api = routes(session_manager(fixture_table()));
    let response = warp::test::request()
        .method("POST")
        .path("/api/session/does-not-exist/control")
        .json(&json!({ "type": "reset" }))
        .reply(&api)
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response.body())["error"], "Session not found");
}

#[tokio::test]
async fn test_malformed_control_event_is_bad_request() {
    let manager = session_manager(fixture_table());
    let api = routes(Arc::clone(&manager));
    let (session_id, _) = manager.create_session();

    let response = warp::test::request()
        .method("POST")
        .path(&format!("/api/session/{session_id}/control"))
        .json(&json!({ "type": "launch_rocket" }))
        .reply(&api)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response.body())["error"].as_str().unwrap().starts_with("Invalid control event"));
}

#[tokio::test]
async fn test_stateless_pie_endpoint() {
    let api = routes(session_manager(fixture_table()));
    let response = warp::test::request().method("GET").path("/api/pie").reply(&api).await;

    assert_eq!(response.status(), StatusCode::OK);
    let figure = body_json(response.body());
    assert_eq!(figure["layout"]["title"]["text"], "Total Success Launches By Site");
    assert_eq!(figure["data"][0]["values"], json!([2, 1, 2, 1]));
}

#[tokio::test]
async fn test_stateless_scatter_endpoint_with_inverted_range() {
    let api = routes(session_manager(fixture_table()));
    let response = warp::test::request()
        .method("GET")
        .path("/api/scatter?site=ALL&low=5000&high=1000")
        .reply(&api)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let figure = body_json(response.body());
    assert_eq!(figure["data"], json!([]));
    assert_eq!(figure["layout"]["annotations"][0]["text"], "No launches match the current selection");
}

#[tokio::test]
async fn test_stateless_scatter_endpoint_for_unknown_site() {
    let api = routes(session_manager(fixture_table()));
    let response = warp::test::request()
        .method("GET")
        .path("/api/scatter?site=Boca%20Chica")
        .reply(&api)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response.body())["data"], json!([]));
}

#[tokio::test]
async fn test_bad_query_string_is_json_error() {
    let api = routes(session_manager(fixture_table()));
    let response = warp::test::request()
        .method("GET")
        .path("/api/scatter?low=abc")
        .reply(&api)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response.body())["error"], "Invalid query string");
}

#[tokio::test]
async fn test_malformed_json_body_is_json_error() {
    let manager = session_manager(fixture_table());
    let api = routes(Arc::clone(&manager));
    let (session_id, _) = manager.create_session();

    let response = warp::test::request()
        .method("POST")
        .path(&format!("/api/session/{session_id}/control"))
        .header("content-type", "application/json")
        .body("{not json")
        .reply(&api)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response.body())["error"].as_str().unwrap().starts_with("Invalid request body"));
}

#[tokio::test]
async fn test_unknown_path_is_json_not_found() {
    let api = routes(session_manager(fixture_table()));
    let response = warp::test::request().method("GET").path("/api/launches").reply(&api).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response.body())["error"], "Not found");
}
