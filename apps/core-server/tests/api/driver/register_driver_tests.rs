use serde_json::Value;

use crate::fixtures::{self, DriverForm};
use crate::utils::context::TestContext;

#[tokio::test]
async fn test_register_driver_success() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context.api.drivers.register(DriverForm::john_doe()).await;

    // THEN
    assert_eq!(resp.status(), 201);
    let body = resp.json_value().await;
    let driver_id = body["driverId"].as_str().unwrap().to_owned();

    let resp = context.api.drivers.get(&driver_id).await;
    assert_eq!(resp.status(), 200);
    let driver = resp.json_value().await;
    assert_eq!(driver["id"], driver_id.as_str());
    assert_eq!(driver["fullName"], "John Doe");
    assert_eq!(driver["vehicleRegistrationNumber"], "KJA-123AB");
    assert_eq!(driver["status"], "COMPLETE");
    assert!(driver["registrationDate"].is_string());
    assert!(driver["lastModified"].is_string());

    let photo_url = driver["passportPhotoUrl"].as_str().unwrap();
    assert!(photo_url.starts_with(&format!("{}/files/passports/", context.base_url)));
    assert!(photo_url.ends_with("john.png"));

    let qr_code_url = driver["qrCodeUrl"].as_str().unwrap();
    assert_eq!(
        qr_code_url,
        format!("{}/files/qrcodes/{driver_id}.png", context.base_url)
    );
}

#[tokio::test]
async fn test_register_driver_stored_objects_are_retrievable() {
    // GIVEN
    let context = TestContext::new().await;
    let photo = fixtures::passport_photo_png();

    // WHEN
    let resp = context.api.drivers.register(DriverForm::john_doe()).await;
    assert_eq!(resp.status(), 201);
    let driver_id = resp.json_value().await["driverId"]
        .as_str()
        .unwrap()
        .to_owned();

    // THEN
    let driver = context.api.drivers.get(&driver_id).await.json_value().await;

    let resp = context
        .api
        .files
        .get_by_url(driver["passportPhotoUrl"].as_str().unwrap())
        .await;
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.header("content-type").as_deref(), Some("image/png"));
    assert_eq!(resp.bytes().await, photo);

    let resp = context
        .api
        .files
        .get_by_url(driver["qrCodeUrl"].as_str().unwrap())
        .await;
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.header("content-type").as_deref(), Some("image/png"));
    let qr_code = resp.bytes().await;
    assert_eq!(fixtures::decode_qr_code(&qr_code), driver_id);
}

#[tokio::test]
async fn test_register_driver_trims_text_fields() {
    // GIVEN
    let context = TestContext::new().await;
    let mut form = DriverForm::john_doe();
    form.full_name = "  John Doe  ".to_string();
    form.vehicle_registration_number = " KJA-123AB ".to_string();

    // WHEN
    let resp = context.api.drivers.register(form).await;

    // THEN
    assert_eq!(resp.status(), 201);
    let driver_id = resp.json_value().await["driverId"]
        .as_str()
        .unwrap()
        .to_owned();
    let driver = context.api.drivers.get(&driver_id).await.json_value().await;
    assert_eq!(driver["fullName"], "John Doe");
    assert_eq!(driver["vehicleRegistrationNumber"], "KJA-123AB");
}

#[tokio::test]
async fn test_register_driver_fails_duplicate_vehicle() {
    // GIVEN
    let context = TestContext::new().await;
    let resp = context.api.drivers.register(DriverForm::john_doe()).await;
    assert_eq!(resp.status(), 201);

    // WHEN
    let mut form = DriverForm::john_doe();
    form.full_name = "Jane Roe".to_string();
    let resp = context.api.drivers.register(form).await;

    // THEN
    assert_eq!(resp.error_code(409).await, "BR_0002");
    assert_eq!(context.db.drivers.count().await, 1);
}

#[tokio::test]
async fn test_register_driver_fails_short_field() {
    // GIVEN
    let context = TestContext::new().await;
    let mut form = DriverForm::john_doe();
    form.full_name = "Jo".to_string();

    // WHEN
    let resp = context.api.drivers.register(form).await;

    // THEN
    assert_eq!(resp.error_code(400).await, "BR_0003");
    assert_eq!(context.db.drivers.count().await, 0);
}

#[tokio::test]
async fn test_register_driver_fails_invalid_email() {
    // GIVEN
    let context = TestContext::new().await;
    let mut form = DriverForm::john_doe();
    form.email = "not-an-email".to_string();

    // WHEN
    let resp = context.api.drivers.register(form).await;

    // THEN
    assert_eq!(resp.error_code(400).await, "BR_0004");
}

#[tokio::test]
async fn test_register_driver_fails_missing_photo() {
    // GIVEN
    let context = TestContext::new().await;
    let mut form = DriverForm::john_doe();
    form.passport_photo = None;

    // WHEN
    let resp = context.api.drivers.register(form).await;

    // THEN
    assert_eq!(resp.error_code(400).await, "BR_0005");
}

#[tokio::test]
async fn test_register_driver_fails_photo_not_an_image() {
    // GIVEN
    let context = TestContext::new().await;
    let mut form = DriverForm::john_doe();
    if let Some(photo) = form.passport_photo.as_mut() {
        photo.file_name = "passport.pdf".to_string();
        photo.content_type = "application/pdf".to_string();
    }

    // WHEN
    let resp = context.api.drivers.register(form).await;

    // THEN
    let body: Value = {
        assert_eq!(resp.status(), 400);
        resp.json().await
    };
    assert_eq!(body["code"], "BR_0006");
    assert!(body["cause"]["message"].as_str().unwrap().contains("application/pdf"));
    assert_eq!(context.db.drivers.count().await, 0);
}
