use std::time::Duration;

use crate::utils::context::TestContext;

#[tokio::test]
async fn test_list_scan_logs_newest_first() {
    // GIVEN
    let (context, driver) = TestContext::new_with_driver().await;
    let other = context.db.drivers.create("XYZ-987").await;

    for verified_by in ["first@x.com", "second@x.com"] {
        let resp = context
            .api
            .scans
            .verify(driver.id.to_string(), verified_by)
            .await;
        assert_eq!(resp.status(), 200);
        // keep scan timestamps distinct
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    let resp = context
        .api
        .scans
        .verify(other.id.to_string(), "third@x.com")
        .await;
    assert_eq!(resp.status(), 200);

    // WHEN
    let resp = context.api.scan_logs.list(None).await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    let logs = body.as_array().unwrap();
    assert_eq!(logs.len(), 3);
    assert_eq!(logs[0]["verifiedBy"], "third@x.com");
    assert_eq!(logs[0]["vehicleRegistrationNumber"], "XYZ-987");
    assert_eq!(logs[0]["status"], "VERIFIED");
    assert_eq!(logs[2]["verifiedBy"], "first@x.com");
    assert_eq!(logs[2]["driverId"], driver.id.to_string());
    assert_eq!(logs[2]["driverName"], driver.full_name);
}

#[tokio::test]
async fn test_list_scan_logs_limit() {
    // GIVEN
    let (context, driver) = TestContext::new_with_driver().await;
    for _ in 0..3 {
        context
            .api
            .scans
            .verify(driver.id.to_string(), "admin@x.com")
            .await;
    }

    // WHEN
    let resp = context.api.scan_logs.list(Some(2)).await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json_value().await.as_array().unwrap().len(), 2);

    assert_eq!(
        context.api.scan_logs.list(Some(0)).await.error_code(400).await,
        "BR_0003"
    );
    assert_eq!(
        context.api.scan_logs.list(Some(501)).await.error_code(400).await,
        "BR_0003"
    );
}

#[tokio::test]
async fn test_list_driver_scan_logs() {
    // GIVEN
    let (context, driver) = TestContext::new_with_driver().await;
    let other = context.db.drivers.create("XYZ-987").await;
    context
        .api
        .scans
        .verify(driver.id.to_string(), "admin@x.com")
        .await;
    context
        .api
        .scans
        .verify(other.id.to_string(), "admin@x.com")
        .await;

    // WHEN
    let resp = context.api.drivers.scan_logs(&driver.id, None).await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    let logs = body.as_array().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["driverId"], driver.id.to_string());
}

#[tokio::test]
async fn test_list_driver_scan_logs_unknown_driver() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .drivers
        .scan_logs(&uuid::Uuid::new_v4().into(), None)
        .await;

    // THEN
    assert_eq!(resp.error_code(404).await, "BR_0001");
}
