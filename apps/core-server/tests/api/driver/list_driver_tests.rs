use time::{Duration, OffsetDateTime};

use crate::utils::api_clients::drivers::DriverFilters;
use crate::utils::context::TestContext;

#[tokio::test]
async fn test_list_drivers_newest_first_with_default_limit() {
    // GIVEN
    let context = TestContext::new().await;
    let now = OffsetDateTime::now_utc();
    for i in 0..7 {
        context
            .db
            .drivers
            .create_pending(&format!("PLATE-{i}"), now - Duration::minutes(10 - i))
            .await;
    }

    // WHEN
    let resp = context.api.drivers.list(Default::default()).await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    let plates: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|driver| driver["vehicleRegistrationNumber"].as_str().unwrap())
        .collect();
    assert_eq!(
        plates,
        vec!["PLATE-6", "PLATE-5", "PLATE-4", "PLATE-3", "PLATE-2"]
    );
}

#[tokio::test]
async fn test_list_drivers_filter_by_status() {
    // GIVEN
    let context = TestContext::new().await;
    context.db.drivers.create("AAA-111").await;
    context
        .db
        .drivers
        .create_pending("BBB-222", OffsetDateTime::now_utc())
        .await;

    // WHEN
    let resp = context
        .api
        .drivers
        .list(DriverFilters {
            status: Some("PENDING_QR"),
            ..Default::default()
        })
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    let drivers = body.as_array().unwrap();
    assert_eq!(drivers.len(), 1);
    assert_eq!(drivers[0]["vehicleRegistrationNumber"], "BBB-222");
    assert_eq!(drivers[0]["status"], "PENDING_QR");
    assert!(drivers[0]["qrCodeUrl"].is_null());
}

#[tokio::test]
async fn test_list_drivers_explicit_limit() {
    // GIVEN
    let context = TestContext::new().await;
    for plate in ["AAA-111", "BBB-222", "CCC-333"] {
        context.db.drivers.create(plate).await;
    }

    // WHEN
    let resp = context
        .api
        .drivers
        .list(DriverFilters {
            limit: Some(2),
            ..Default::default()
        })
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json_value().await.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_drivers_invalid_limit() {
    // GIVEN
    let context = TestContext::new().await;

    for limit in [0, 101] {
        // WHEN
        let resp = context
            .api
            .drivers
            .list(DriverFilters {
                limit: Some(limit),
                ..Default::default()
            })
            .await;

        // THEN
        assert_eq!(resp.error_code(400).await, "BR_0003");
    }
}
