//! HTTP surface tests.
//!
//! Starts an axum server on an ephemeral port and drives it with reqwest.

use std::sync::Arc;

use serde_json::{json, Value};
use weapon_warehouse::{http, InMemoryWeaponStore, SqliteWeaponStore, WeaponRepository, WeaponStore};

use crate::support::{excalibur_json, peacemaker_json};

async fn start_server<S: WeaponStore + 'static>(store: S) -> String {
    let app = http::router(Arc::new(WeaponRepository::new(store)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn sqlite_server() -> String {
    start_server(SqliteWeaponStore::open_in_memory().unwrap()).await
}

async fn add(client: &reqwest::Client, base: &str, body: &Value) -> i64 {
    let resp = client
        .post(format!("{base}/weapons"))
        .json(body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn health_check() {
    let base = start_server(InMemoryWeaponStore::new()).await;
    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn add_get_and_stats() {
    let base = sqlite_server().await;
    let client = reqwest::Client::new();

    let id = add(&client, &base, &excalibur_json()).await;
    assert_eq!(id, 1);

    let resp = client.get(format!("{base}/weapons/1")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let weapon: Value = resp.json().await.unwrap();
    assert_eq!(weapon["id"], 1);
    assert_eq!(weapon["type"], "Sword");
    assert_eq!(weapon["name"], "Excalibur");
    assert_eq!(weapon["is_inuse"], true);
    assert_eq!(weapon["sharp"], 9.5);
    assert!(weapon.get("bullets_num").is_none());

    let stats: Value = client
        .get(format!("{base}/weapons/stats"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats["total"], 1);
    assert_eq!(stats["swords"], 1);
    assert_eq!(stats["in_use"], 1);
}

#[tokio::test]
async fn retire_flips_usage() {
    let base = sqlite_server().await;
    let client = reqwest::Client::new();
    let id = add(&client, &base, &excalibur_json()).await;

    let resp = client
        .put(format!("{base}/weapons/retire"))
        .json(&json!({ "id": id, "retired_date": "2020-01-01" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let weapon: Value = client
        .get(format!("{base}/weapons/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(weapon["is_inuse"], false);
    assert_eq!(weapon["retired_date"], "2020-01-01");

    let stats: Value = client
        .get(format!("{base}/weapons/stats"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats["retired"], 1);
    assert_eq!(stats["in_use"], 0);
}

#[tokio::test]
async fn retire_failures_are_not_found() {
    let base = sqlite_server().await;
    let client = reqwest::Client::new();
    let id = add(&client, &base, &excalibur_json()).await;

    for body in [
        json!({ "id": id, "retired_date": "1100-01-01" }),
        json!({ "id": id, "retired_date": "yesterday" }),
        json!({ "id": 99, "retired_date": "2020-01-01" }),
        json!({ "retired_date": "2020-01-01" }),
    ] {
        let resp = client
            .put(format!("{base}/weapons/retire"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 404, "body {body}");
        let error: Value = resp.json().await.unwrap();
        assert!(error["error"].is_string());
    }
}

#[tokio::test]
async fn invalid_add_is_bad_request() {
    let base = start_server(InMemoryWeaponStore::new()).await;
    let client = reqwest::Client::new();

    let mut missing_sharp = excalibur_json();
    missing_sharp.as_object_mut().unwrap().remove("sharp");
    let mut negative_range = peacemaker_json();
    negative_range["range"] = json!(-1.0);
    let mut cold_firearm = peacemaker_json();
    cold_firearm["is_cold_weapon"] = json!(true);

    for body in [
        missing_sharp,
        negative_range,
        cold_firearm,
        json!({ "type": "Bow", "name": "Longbow", "manufacture_date": "1300-01-01" }),
        json!("not an object"),
    ] {
        let resp = client
            .post(format!("{base}/weapons"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400, "body {body}");
        let error: Value = resp.json().await.unwrap();
        assert!(error["error"].is_string());
    }

    let all: Value = client
        .get(format!("{base}/weapons/all"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn update_replaces_record() {
    let base = sqlite_server().await;
    let client = reqwest::Client::new();
    let id = add(&client, &base, &excalibur_json()).await;

    let resp = client
        .put(format!("{base}/weapons/{id}"))
        .json(&peacemaker_json())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let weapon: Value = client
        .get(format!("{base}/weapons/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(weapon["type"], "Firearm");
    assert_eq!(weapon["bullets_num"], 6);
    assert!(weapon.get("sharp").is_none());
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let base = sqlite_server().await;
    let resp = reqwest::Client::new()
        .put(format!("{base}/weapons/7"))
        .json(&excalibur_json())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn delete_twice_is_not_found() {
    let base = sqlite_server().await;
    let client = reqwest::Client::new();
    let id = add(&client, &base, &excalibur_json()).await;

    let first = client
        .delete(format!("{base}/weapons/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(first.status(), 200);

    let second = client
        .delete(format!("{base}/weapons/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), 404);

    let get = client.get(format!("{base}/weapons/{id}")).send().await.unwrap();
    assert_eq!(get.status(), 404);
}

#[tokio::test]
async fn non_integer_id_is_not_found() {
    let base = start_server(InMemoryWeaponStore::new()).await;
    let resp = reqwest::get(format!("{base}/weapons/abc")).await.unwrap();
    assert_eq!(resp.status(), 404);
    let error: Value = resp.json().await.unwrap();
    assert_eq!(error["error"], "no weapon with id abc");
}

#[tokio::test]
async fn lists_by_type_and_reports() {
    let base = sqlite_server().await;
    let client = reqwest::Client::new();
    add(&client, &base, &excalibur_json()).await;
    add(&client, &base, &peacemaker_json()).await;

    let all: Vec<Value> = client
        .get(format!("{base}/weapons/all"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.len(), 2);

    let firearms: Vec<Value> = client
        .get(format!("{base}/weapons/all/Firearm"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(firearms.len(), 1);
    assert_eq!(firearms[0]["name"], "Peacemaker");

    let unknown: Vec<Value> = client
        .get(format!("{base}/weapons/all/Bow"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(unknown.is_empty());

    let report: Vec<Value> = client
        .get(format!("{base}/weapons/reports/Sword"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0]["status"], "in_service");
    assert_eq!(
        report[0]["description"],
        "Excalibur (#1) in service since 1200-01-01"
    );

    let resp = client
        .get(format!("{base}/weapons/reports/Unknown"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn non_json_bodies_follow_route_error_mapping() {
    let base = sqlite_server().await;
    let client = reqwest::Client::new();
    let id = add(&client, &base, &excalibur_json()).await;

    for url in [format!("{base}/weapons/{id}"), format!("{base}/weapons/retire")] {
        let as_json = client
            .put(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body("{not json")
            .send()
            .await
            .unwrap();
        assert_eq!(as_json.status(), 404, "PUT {url}");
        let error: Value = as_json.json().await.unwrap();
        assert!(error["error"].is_string());

        let untyped = client.put(&url).body("{}").send().await.unwrap();
        assert_eq!(untyped.status(), 404, "PUT {url} without content type");
        let error: Value = untyped.json().await.unwrap();
        assert!(error["error"].is_string());
    }

    let resp = client
        .post(format!("{base}/weapons"))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let error: Value = resp.json().await.unwrap();
    assert!(error["error"].is_string());

    let weapon: Value = client
        .get(format!("{base}/weapons/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(weapon["is_inuse"], true);
    assert_eq!(weapon["name"], "Excalibur");
}
