use crate::utils::context::TestContext;

#[tokio::test]
async fn test_protected_endpoint_without_token() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.other.driver_list_with_token(None).await;

    // THEN
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_protected_endpoint_with_wrong_token() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.other.driver_list_with_token(Some("wrong")).await;

    // THEN
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_protected_endpoint_with_token() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.other.driver_list_with_token(Some("test")).await;

    // THEN
    assert_eq!(resp.status(), 200);
}
