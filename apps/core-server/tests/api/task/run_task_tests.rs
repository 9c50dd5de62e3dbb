use gatepass_core::model::driver::DriverStatus;
use shared_types::DriverId;
use time::{Duration, OffsetDateTime};

use crate::fixtures;
use crate::utils::context::TestContext;

#[tokio::test]
async fn test_finalize_pending_registrations() {
    // GIVEN
    let context = TestContext::new().await;
    let stale = context
        .db
        .drivers
        .create_pending("OLD-111", OffsetDateTime::now_utc() - Duration::hours(1))
        .await;
    let fresh = context
        .db
        .drivers
        .create_pending("NEW-222", OffsetDateTime::now_utc())
        .await;

    // WHEN
    let resp = context
        .api
        .tasks
        .run("FINALIZE_PENDING_REGISTRATIONS")
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    assert_eq!(body["task"], "FINALIZE_PENDING_REGISTRATIONS");
    assert_eq!(body["finalized"], 1);
    assert_eq!(body["failed"], 0);

    let stale = context.db.drivers.get(&stale.id).await.unwrap();
    assert_eq!(stale.status, DriverStatus::Complete);
    let qr_code_url = stale.qr_code_url.unwrap();
    assert_eq!(
        qr_code_url,
        format!("{}/files/qrcodes/{}.png", context.base_url, stale.id)
    );

    let qr_code = context
        .db
        .stored_objects
        .get(&format!("qrcodes/{}.png", stale.id))
        .await
        .unwrap();
    assert_eq!(fixtures::decode_qr_code(&qr_code.content), stale.id.to_string());

    let fresh = context.db.drivers.get(&fresh.id).await.unwrap();
    assert_eq!(fresh.status, DriverStatus::PendingQr);
}

#[tokio::test]
async fn test_finalize_pending_registrations_without_min_age() {
    // GIVEN
    let context = TestContext::new_with_config(Some(indoc::indoc! {"
        core:
            task:
                finalizePendingRegistrations:
                    minAge: 0
    "}))
    .await;
    let pending = context
        .db
        .drivers
        .create_pending("NEW-222", OffsetDateTime::now_utc() - Duration::seconds(1))
        .await;

    // WHEN
    let resp = context
        .api
        .tasks
        .run("FINALIZE_PENDING_REGISTRATIONS")
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json_value().await["finalized"], 1);

    let pending = context.db.drivers.get(&pending.id).await.unwrap();
    assert_eq!(pending.status, DriverStatus::Complete);
}

#[tokio::test]
async fn test_finalize_pending_registrations_oldest_first() {
    // GIVEN
    let context = TestContext::new_with_config(Some(indoc::indoc! {"
        core:
            task:
                finalizePendingRegistrations:
                    batchSize: 1
    "}))
    .await;
    let now = OffsetDateTime::now_utc();
    let newest = context
        .db
        .drivers
        .create_pending("NEW-333", now - Duration::hours(1))
        .await;
    let oldest = context
        .db
        .drivers
        .create_pending("OLD-111", now - Duration::hours(3))
        .await;
    let middle = context
        .db
        .drivers
        .create_pending("MID-222", now - Duration::hours(2))
        .await;

    // WHEN
    let resp = context
        .api
        .tasks
        .run("FINALIZE_PENDING_REGISTRATIONS")
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json_value().await["finalized"], 1);

    assert_eq!(driver_status(&context, &oldest.id).await, DriverStatus::Complete);
    assert_eq!(driver_status(&context, &middle.id).await, DriverStatus::PendingQr);
    assert_eq!(driver_status(&context, &newest.id).await, DriverStatus::PendingQr);

    // WHEN
    context
        .api
        .tasks
        .run("FINALIZE_PENDING_REGISTRATIONS")
        .await;

    // THEN
    assert_eq!(driver_status(&context, &middle.id).await, DriverStatus::Complete);
    assert_eq!(driver_status(&context, &newest.id).await, DriverStatus::PendingQr);
}

#[tokio::test]
async fn test_run_unknown_task() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.tasks.run("DROP_EVERYTHING").await;

    // THEN
    assert_eq!(resp.error_code(400).await, "BR_0011");
}

async fn driver_status(context: &TestContext, id: &DriverId) -> DriverStatus {
    context.db.drivers.get(id).await.unwrap().status
}
