use crate::utils::context::TestContext;

#[tokio::test]
async fn test_health() {
    let context = TestContext::new().await;

    let resp = context.api.other.health().await;

    assert_eq!(resp.status(), 204);
}

#[tokio::test]
async fn test_build_info() {
    let context = TestContext::new().await;

    let resp = context.api.other.build_info().await;

    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_metrics() {
    let context = TestContext::new().await;
    context.api.drivers.list(Default::default()).await;

    let resp = context.api.other.metrics().await;

    assert_eq!(resp.status(), 200);
    let text = resp.text().await;
    assert!(text.contains("gatepass_incoming_requests"));
}

#[tokio::test]
async fn test_openapi_document() {
    let context = TestContext::new().await;

    let resp = context.api.other.openapi_json().await;

    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    assert!(body["paths"]["/api/driver/v1"].is_object());
    assert!(body["paths"]["/api/scan/v1"].is_object());
    assert!(body["components"]["securitySchemes"]["bearer"].is_object());
}
