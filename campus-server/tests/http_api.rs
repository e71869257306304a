use axum_test::TestServer;
use campus_server::server::app::create_app;
use campus_test_utils::TestDb;
use serde_json::{json, Value};

async fn server() -> TestServer {
    let db = TestDb::new_in_memory()
        .connect_migrated()
        .await
        .expect("migrated test database");
    let app = create_app(db, None).expect("router");
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn health_reports_service() {
    let server = server().await;

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "campus-server");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn graphql_post_executes_mutations_and_queries() {
    let server = server().await;

    let response = server
        .post("/graphql")
        .json(&json!({
            "query": r#"mutation { addClient(name: "Acme", email: "ops@acme.io", phone: "555") { id name } }"#
        }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["addClient"]["name"], "Acme");

    let response = server
        .post("/graphql")
        .json(&json!({ "query": "{ clients { name email } }" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body["data"]["clients"],
        json!([{ "name": "Acme", "email": "ops@acme.io" }])
    );
}

#[tokio::test]
async fn graphql_errors_carry_codes() {
    let server = server().await;

    let response = server
        .post("/graphql")
        .json(&json!({
            "query": r#"mutation { addtoGroup(groupName: "Ghosts", email: "a@campus.edu") { id } }"#
        }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["errors"][0]["extensions"]["code"], "NOT_FOUND");
    assert_eq!(body["errors"][0]["extensions"]["entity"], "Group");
}

#[tokio::test]
async fn graphql_get_serves_playground() {
    let server = server().await;

    let response = server.get("/graphql").await;
    response.assert_status_ok();
    assert!(response.text().contains("GraphQL Playground"));
}

#[tokio::test]
async fn invalid_cors_origin_is_rejected() {
    let db = TestDb::new_in_memory()
        .connect_migrated()
        .await
        .expect("migrated test database");

    assert!(create_app(db, Some("http://bad\norigin")).is_err());
}
