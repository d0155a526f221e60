use reqwest::StatusCode;
use serde_json::{json, Value};

use supermarket_api::config::ApiConfig;

const SEED_LISTING: &str = r#"[{"code":"A12T-4GH7-QPL9-3N4M","name":"Lettuce","price":"$3.41"},{"code":"E5T6-9UI3-TH15-QR88","name":"Peach","price":"$2.99"},{"code":"TQ4C-VV6T-75ZX-1RMR","name":"Gala Apple","price":"$3.59"},{"code":"YRT6-72AS-K736-L4AR","name":"Green Pepper","price":"$0.79"}]"#;

struct TestServer {
    base_url: String,
    client: reqwest::Client,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        Self::spawn_with(ApiConfig::default()).await
    }

    async fn spawn_with(config: ApiConfig) -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = supermarket_api::app::build_app(&config);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            client: reqwest::Client::new(),
            handle,
        }
    }

    async fn get(&self, path: &str) -> (StatusCode, String) {
        let res = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .unwrap();
        let status = res.status();
        (status, res.text().await.unwrap())
    }

    async fn add(&self, body: &str) -> (StatusCode, Value) {
        let res = self
            .client
            .post(format!("{}/api/v1/add", self.base_url))
            .header("content-type", "application/json; charset=UTF-8")
            .body(body.to_string())
            .send()
            .await
            .unwrap();
        let status = res.status();
        (status, res.json().await.unwrap())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn created() -> Value {
    json!({ "status": "item added" })
}

fn unchanged() -> Value {
    json!({ "status": "item exist, not added" })
}

#[tokio::test]
async fn ping_and_unknown_routes() {
    let srv = TestServer::spawn().await;

    assert_eq!(srv.get("/api/v1/ping").await, (StatusCode::OK, "pong".to_string()));

    let (status, body) = srv.get("/ping1").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["message"], "endpoint not found");
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn().await;
    let (status, body) = srv.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn lists_seed_catalog() {
    let srv = TestServer::spawn().await;
    assert_eq!(srv.get("/api/v1/items").await, (StatusCode::OK, SEED_LISTING.to_string()));
}

#[tokio::test]
async fn unseeded_catalog_lists_empty_array() {
    let srv = TestServer::spawn_with(ApiConfig {
        seed_catalog: false,
        ..ApiConfig::default()
    })
    .await;
    assert_eq!(srv.get("/api/v1/items").await, (StatusCode::OK, "[]".to_string()));
}

#[tokio::test]
async fn add_then_re_add_reports_created_then_unchanged() {
    let srv = TestServer::spawn().await;
    let body = r#"[{"code":"ZRT6-72AS-K736-L4AZ","name":"Greener Pepper","price":"9.99"}]"#;

    assert_eq!(srv.add(body).await, (StatusCode::CREATED, created()));
    assert_eq!(srv.add(body).await, (StatusCode::OK, unchanged()));

    let (status, listing) = srv.get("/api/v1/items").await;
    assert_eq!(status, StatusCode::OK);
    let listing: Vec<Value> = serde_json::from_str(&listing).unwrap();
    assert_eq!(listing.len(), 5);
    assert_eq!(
        listing[4],
        json!({"code": "ZRT6-72AS-K736-L4AZ", "name": "Greener Pepper", "price": "$9.99"})
    );
}

#[tokio::test]
async fn batch_of_existing_items_is_unchanged() {
    let srv = TestServer::spawn().await;
    let body = r#"[{"code":"A12T-4GH7-QPL9-3N4M","name":"Lettuce","price":"3.41"},{"code":"E5T6-9UI3-TH15-QR88","name":"Peach","price":"2.99"},{"code":"TQ4C-VV6T-75ZX-1RMR","name":"Gala Apple","price":"3.59"}]"#;
    assert_eq!(srv.add(body).await, (StatusCode::OK, unchanged()));
    assert_eq!(srv.get("/api/v1/items").await.1, SEED_LISTING);
}

#[tokio::test]
async fn malformed_codes_are_rejected() {
    let srv = TestServer::spawn().await;

    for code in ["A12T-4GH7-QPL9-3N4M1", "A12T-4GH7-QPL93N4M"] {
        let body = json!([{ "code": code, "name": "Lettuce", "price": "3.41" }]).to_string();
        let (status, res) = srv.add(&body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{code}");
        assert_eq!(res["error"], "validation_error");
        assert_eq!(res["message"], "[0]: code: invalid format");
    }

    assert_eq!(srv.get("/api/v1/items").await.1, SEED_LISTING);
}

#[tokio::test]
async fn empty_fields_report_required_in_field_order() {
    let srv = TestServer::spawn().await;

    let (status, res) = srv.add(r#"[{"code": "", "name": "Lettuce", "price": "3.41"}]"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(res["message"], "[0]: code: required");

    let (_, res) = srv.add(r#"[{"code": "", "name": "", "price": "3.41"}]"#).await;
    assert_eq!(res["message"], "[0]: code: required\nname: required");

    let (_, res) = srv.add(r#"[{"code": "", "name": "", "price": ""}]"#).await;
    assert_eq!(res["message"], "[0]: code: required\nname: required\nprice: required");
}

#[tokio::test]
async fn name_with_punctuation_is_rejected() {
    let srv = TestServer::spawn().await;
    let (status, res) = srv
        .add(r#"[{"code": "A12T-4GH7-QPL9-3N4M", "name": "Lettuce-", "price": "3.41"}]"#)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(res["message"], "[0]: name: invalid format");
}

#[tokio::test]
async fn price_format_is_enforced() {
    let srv = TestServer::spawn().await;

    let item = |price: &str| {
        json!([{ "code": "X12T-4GH7-QPL9-3N4X", "name": "Lettuces", "price": price }]).to_string()
    };

    for bad in ["3.41-", "9.411", "9411", "9.", "9"] {
        let (status, res) = srv.add(&item(bad)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{bad}");
        assert_eq!(res["message"], "[0]: price: invalid format", "{bad}");
    }

    let (status, res) = srv.add(&item("")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(res["message"], "[0]: price: required");

    assert_eq!(srv.add(&item("9.41")).await, (StatusCode::CREATED, created()));

    let (status, res) = srv
        .add(r#"[{"code": "A12T-4GH7-QPL9-3N4A", "name": "Lettuces1", "price": 9.41}]"#)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(res["error"], "invalid_body");
}

#[tokio::test]
async fn first_failing_item_aborts_batch() {
    let srv = TestServer::spawn().await;
    let body = json!([
        { "code": "ZRT6-72AS-K736-L4AZ", "name": "Greener Pepper", "price": "9.99" },
        { "code": "ZRT6-72AS-K736-L4A", "name": "Pepper!", "price": "1" },
        { "code": "", "name": "", "price": "" },
    ])
    .to_string();

    let (status, res) = srv.add(&body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        res["message"],
        "[1]: code: invalid format\nname: invalid format\nprice: invalid format"
    );
    assert_eq!(srv.get("/api/v1/items").await.1, SEED_LISTING);
}

#[tokio::test]
async fn get_item_by_code() {
    let srv = TestServer::spawn().await;

    let (status, body) = srv.get("/api/v1/item/A12T-4GH7-QPL9-3N4M").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"code":"A12T-4GH7-QPL9-3N4M","name":"Lettuce","price":"$3.41"}"#);

    let (status, body) = srv.get("/api/v1/item/TQ4C-VV6T-75ZX-1RMR1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body, json!({ "error": "invalid_code", "message": "code: invalid format" }));

    let (status, body) = srv.get("/api/v1/item/Z5T6-9UI3-TH15-QR88").await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body, json!({ "error": "not_found", "message": "code not found" }));
}

#[tokio::test]
async fn delete_items() {
    let srv = TestServer::spawn().await;
    let deleted = r#"{"status":"item deleted"}"#.to_string();

    assert_eq!(srv.get("/api/v1/delete/A12T-4GH7-QPL9-3N4M").await, (StatusCode::OK, deleted.clone()));
    assert_eq!(srv.get("/api/v1/delete/TQ4C-VV6T-75ZX-1RMR").await, (StatusCode::OK, deleted.clone()));
    // Already gone: still reported as deleted.
    assert_eq!(srv.get("/api/v1/delete/TQ4C-VV6T-75ZX-1RMR").await, (StatusCode::OK, deleted));

    let (status, _) = srv.get("/api/v1/delete/TQ4C-VV6T-75ZX-1RMR1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = srv.get("/api/v1/delete/").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (_, listing) = srv.get("/api/v1/items").await;
    let listing: Vec<Value> = serde_json::from_str(&listing).unwrap();
    let codes: Vec<&str> = listing.iter().map(|i| i["code"].as_str().unwrap()).collect();
    assert_eq!(codes, vec!["E5T6-9UI3-TH15-QR88", "YRT6-72AS-K736-L4AR"]);
}

#[tokio::test]
async fn undecodable_codes_are_json_errors() {
    let srv = TestServer::spawn().await;

    for path in ["/api/v1/item/%FF", "/api/v1/delete/%FF"] {
        let (status, body) = srv.get(path).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{path}");
        let body: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["error"], "invalid_code", "{path}");
    }

    assert_eq!(srv.get("/api/v1/items").await.1, SEED_LISTING);
}

#[tokio::test]
async fn add_without_content_type_is_rejected_as_json() {
    let srv = TestServer::spawn().await;
    let res = srv
        .client
        .post(format!("{}/api/v1/add", srv.base_url))
        .body(r#"[{"code":"ZRT6-72AS-K736-L4AZ","name":"Greener Pepper","price":"9.99"}]"#)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "unsupported_media_type");
    assert_eq!(srv.get("/api/v1/items").await.1, SEED_LISTING);
}

#[tokio::test]
async fn concurrent_adds_over_http_lose_no_updates() {
    let srv = std::sync::Arc::new(TestServer::spawn().await);

    let mut tasks = Vec::new();
    for i in 0..32 {
        let srv = srv.clone();
        tasks.push(tokio::spawn(async move {
            let body = json!([{ "code": format!("C{i:03}-0000-0000-0000"), "name": "Race Item", "price": "1.00" }])
                .to_string();
            srv.add(&body).await
        }));
    }
    for task in tasks {
        assert_eq!(task.await.unwrap(), (StatusCode::CREATED, created()));
    }

    let (_, listing) = srv.get("/api/v1/items").await;
    let listing: Vec<Value> = serde_json::from_str(&listing).unwrap();
    assert_eq!(listing.len(), 4 + 32);
}
