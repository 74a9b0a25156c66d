//! End-to-end test: boots the real router against a live Postgres and walks
//! the CRUD + filtered-list surface over HTTP.
//!
//! Requires `DATABASE_URL`; run with `cargo test -- --ignored`.

use std::sync::Arc;

use flight_tracker::{transport, AppConfig, FlightDataService, RecordStore};
use serde_json::{json, Value};

async fn get_json(client: &reqwest::Client, url: String) -> Value {
    client
        .get(url)
        .send()
        .await
        .expect("request failed")
        .json()
        .await
        .expect("invalid JSON body")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn crud_and_filtered_listing() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = AppConfig::from_env()?;
    let store = RecordStore::connect(&config).await?;
    store.migrate().await?;

    // Start from an empty dataset so assertions are exact.
    sqlx::query("DELETE FROM passengers").execute(store.pool()).await?;
    sqlx::query("DELETE FROM flights").execute(store.pool()).await?;
    sqlx::query("DELETE FROM airlines").execute(store.pool()).await?;
    sqlx::query("DELETE FROM airports").execute(store.pool()).await?;

    let service = Arc::new(FlightDataService::new(store));
    let app_state = transport::http::AppState { service };
    let router = transport::http::create_router(app_state);

    // Bind to an ephemeral port to avoid conflicts with a running server.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let base = format!("http://127.0.0.1:{}", port);
    let client = reqwest::Client::new();

    // --- Healthcheck ---
    let resp = client.get(format!("{}/healthchecker", base)).send().await?;
    assert_eq!(resp.status(), 200);

    // --- Airports: create the scenario dataset ---
    let mut airport_ids = Vec::new();
    for (code, city, country) in [("JFK", "NYC", "US"), ("LAX", "LA", "US"), ("CDG", "Paris", "FR")]
    {
        let resp = client
            .post(format!("{}/airports/create", base))
            .json(&json!({
                "code": code,
                "name": format!("{} airport", code),
                "city": city,
                "country": country
            }))
            .send()
            .await?;
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await?;
        assert_eq!(body["success"], json!(true));
        airport_ids.push(body["data"]["id"].as_i64().expect("created airport id"));
    }

    // Unfiltered list: the whole collection, primary-key ascending.
    let body = get_json(&client, format!("{}/airports/list", base)).await;
    let rows = body["data"].as_array().expect("array of airports");
    assert_eq!(rows.len(), 3);
    let listed: Vec<i64> = rows.iter().map(|r| r["id"].as_i64().unwrap()).collect();
    let mut expected = airport_ids.clone();
    expected.sort();
    assert_eq!(listed, expected);

    // One supplied filter: every returned row's field is in the value list.
    let body = get_json(&client, format!("{}/airports/list?country=US", base)).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r["country"] == json!("US")));

    // Repeated parameters form one candidate list.
    let body = get_json(&client, format!("{}/airports/list?city=NYC&city=LA", base)).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    // Conjunction: no row is both Paris and US.
    let body = get_json(
        &client,
        format!("{}/airports/list?city=Paris&country=US", base),
    )
    .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);

    // Cap: limit=1 yields exactly one row, limit=0 yields none.
    let body = get_json(&client, format!("{}/airports/list?limit=1", base)).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    let body = get_json(&client, format!("{}/airports/list?limit=0", base)).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);

    // Idempotent reads: identical calls return identical sequences.
    let first = get_json(&client, format!("{}/airports/list?country=US", base)).await;
    let second = get_json(&client, format!("{}/airports/list?country=US", base)).await;
    assert_eq!(first, second);

    // --- Airlines ---
    for (code, name, alliance) in [
        ("UA", "United Airlines", Some("Star Alliance")),
        ("AF", "Air France", Some("SkyTeam")),
        ("WN", "Southwest Airlines", None),
    ] {
        let resp = client
            .post(format!("{}/airlines/create", base))
            .json(&json!({ "code": code, "name": name, "alliance": alliance }))
            .send()
            .await?;
        assert_eq!(resp.status(), 200);
    }
    let body = get_json(
        &client,
        format!("{}/airlines/list?alliance=Star%20Alliance", base),
    )
    .await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["code"], json!("UA"));

    // --- Flights ---
    // Unknown departure airport is rejected before the insert.
    let resp = client
        .post(format!("{}/flights/create", base))
        .json(&json!({
            "departure_airport_id": 999_999,
            "arrival_airport_id": airport_ids[1],
            "departure_date": "2026-09-01",
            "arrival_date": "2026-09-02",
            "duration": 360,
            "fare": 420.0
        }))
        .send()
        .await?;
    assert_eq!(resp.status(), 400);

    let resp = client
        .post(format!("{}/flights/create", base))
        .json(&json!({
            "flight_status": "On Time",
            "flight_number": "UA100",
            "available_seats": "180",
            "departure_airport_id": airport_ids[0],
            "arrival_airport_id": airport_ids[1],
            "departure_date": "2026-09-01",
            "arrival_date": "2026-09-02",
            "duration": 360,
            "fare": 420.0
        }))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await?;
    let flight_id = body["data"]["id"].as_i64().expect("created flight id");

    // Filter by departure airport code.
    let body = get_json(
        &client,
        format!("{}/flights/list?departure_airport=JFK", base),
    )
    .await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"].as_i64(), Some(flight_id));

    // A code matching no airport resolves to an empty candidate list and
    // matches nothing, even though a flight exists.
    let body = get_json(
        &client,
        format!("{}/flights/list?departure_airport=ZZZ", base),
    )
    .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);

    // Date membership composes conjunctively with the airport filter.
    let body = get_json(
        &client,
        format!(
            "{}/flights/list?departure_airport=JFK&departure_date=2026-09-01",
            base
        ),
    )
    .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    let body = get_json(
        &client,
        format!(
            "{}/flights/list?departure_airport=JFK&departure_date=2030-01-01",
            base
        ),
    )
    .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);

    // Partial update: only the supplied field changes.
    let resp = client
        .put(format!("{}/flights/update/{}", base, flight_id))
        .json(&json!({ "flight_status": "Delayed" }))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await?;
    assert_eq!(body["data"]["flight_status"], json!("Delayed"));
    assert_eq!(body["data"]["flight_number"], json!("UA100"));
    assert_eq!(body["data"]["fare"], json!(420.0));

    let resp = client
        .put(format!("{}/flights/update/999999", base))
        .json(&json!({ "flight_status": "Delayed" }))
        .send()
        .await?;
    assert_eq!(resp.status(), 404);

    // --- Passengers: reference probe lifecycle ---
    // The flight reference is probed before the insert.
    let resp = client
        .post(format!("{}/passengers/create", base))
        .json(&json!({
            "flight_id": 999_999,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "date_of_birth": "1990-12-10",
            "passport_number": "P12345678"
        }))
        .send()
        .await?;
    assert_eq!(resp.status(), 400);

    let resp = client
        .post(format!("{}/passengers/create", base))
        .json(&json!({
            "flight_id": flight_id,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "date_of_birth": "1990-12-10",
            "passport_number": "P12345678"
        }))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await?;
    let passenger_id = body["data"]["id"].as_i64().expect("created passenger id");

    let body = get_json(
        &client,
        format!("{}/passengers/list?passport_number=P12345678", base),
    )
    .await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["first_name"], json!("Ada"));

    let resp = client
        .put(format!("{}/passengers/update/{}", base, passenger_id))
        .json(&json!({ "last_name": "Byron" }))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await?;
    assert_eq!(body["data"]["last_name"], json!("Byron"));
    assert_eq!(body["data"]["first_name"], json!("Ada"));

    let resp = client
        .delete(format!("{}/passengers/delete/{}", base, passenger_id))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let resp = client
        .delete(format!("{}/passengers/delete/{}", base, passenger_id))
        .send()
        .await?;
    assert_eq!(resp.status(), 404);

    // Flight delete works once its passenger is gone, and only once.
    let resp = client
        .delete(format!("{}/flights/delete/{}", base, flight_id))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let resp = client
        .delete(format!("{}/flights/delete/{}", base, flight_id))
        .send()
        .await?;
    assert_eq!(resp.status(), 404);

    // The probe now reports the flight gone: passenger creation fails again.
    let resp = client
        .post(format!("{}/passengers/create", base))
        .json(&json!({
            "flight_id": flight_id,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "date_of_birth": "1990-12-10",
            "passport_number": "P12345678"
        }))
        .send()
        .await?;
    assert_eq!(resp.status(), 400);

    Ok(())
}
