use crate::fixtures::{self, DriverForm};
use crate::utils::context::TestContext;

#[tokio::test]
async fn test_register_then_scan_twice() {
    // GIVEN
    let context = TestContext::new().await;
    let resp = context.api.drivers.register(DriverForm::john_doe()).await;
    assert_eq!(resp.status(), 201);
    let driver_id = resp.json_value().await["driverId"]
        .as_str()
        .unwrap()
        .to_owned();

    let driver = context.api.drivers.get(&driver_id).await.json_value().await;
    let qr_code = context
        .api
        .files
        .get_by_url(driver["qrCodeUrl"].as_str().unwrap())
        .await
        .bytes()
        .await;
    let scanned_id = fixtures::decode_qr_code(&qr_code);

    // WHEN
    let first = context.api.scans.verify(&scanned_id, "admin@x.com").await;
    let second = context.api.scans.verify(&scanned_id, "guard@x.com").await;

    // THEN
    assert_eq!(first.status(), 200);
    let first = first.json_value().await;
    assert_eq!(first["driver"]["id"], driver_id.as_str());
    assert_eq!(first["driver"]["fullName"], "John Doe");
    assert!(first["scanLogId"].is_string());

    assert_eq!(second.status(), 200);
    let second = second.json_value().await;
    assert_ne!(first["scanLogId"], second["scanLogId"]);

    let logs = context.db.scan_logs.list(Some(driver_id.parse().unwrap())).await;
    assert_eq!(logs.len(), 2);
    assert!(logs.iter().all(|log| log.driver_name == "John Doe"));
    assert!(logs.iter().any(|log| log.verified_by == "admin@x.com"));
    assert!(logs.iter().any(|log| log.verified_by == "guard@x.com"));
}

#[tokio::test]
async fn test_verify_unknown_id_not_found() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .scans
        .verify("nonexistent-id", "admin@x.com")
        .await;

    // THEN
    assert_eq!(resp.error_code(404).await, "BR_0001");
    assert!(context.db.scan_logs.list(None).await.is_empty());
}

#[tokio::test]
async fn test_verify_unregistered_uuid_not_found() {
    // GIVEN
    let (context, _) = TestContext::new_with_driver().await;

    // WHEN
    let resp = context
        .api
        .scans
        .verify("0b1a6c3e-4b3f-4c1e-9a57-2f1c1a4d6e11", "admin@x.com")
        .await;

    // THEN
    assert_eq!(resp.error_code(404).await, "BR_0001");
    assert!(context.db.scan_logs.list(None).await.is_empty());
}

#[tokio::test]
async fn test_verify_requires_verifier() {
    // GIVEN
    let (context, driver) = TestContext::new_with_driver().await;

    // WHEN
    let resp = context.api.scans.verify(driver.id.to_string(), "   ").await;

    // THEN
    assert_eq!(resp.error_code(400).await, "BR_0003");
    assert!(context.db.scan_logs.list(None).await.is_empty());
}

#[tokio::test]
async fn test_verify_braced_id_not_found() {
    // GIVEN
    let (context, driver) = TestContext::new_with_driver().await;

    // WHEN
    let resp = context
        .api
        .scans
        .verify(format!("{{{}}}", driver.id), "admin@x.com")
        .await;

    // THEN
    assert_eq!(resp.error_code(404).await, "BR_0001");
    assert!(context.db.scan_logs.list(None).await.is_empty());
}
